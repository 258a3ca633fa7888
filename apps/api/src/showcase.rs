//! Showcase: well-known newsletters offered as naming inspiration.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ExampleNewsletter {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub subscribers: &'static str,
    pub style: &'static str,
    pub link: &'static str,
}

pub const EXAMPLE_NEWSLETTERS: &[ExampleNewsletter] = &[
    ExampleNewsletter {
        name: "The Morning Brew",
        description: "Daily business news in a witty, conversational tone",
        category: "Business",
        subscribers: "3M+",
        style: "Casual",
        link: "https://www.morningbrew.com",
    },
    ExampleNewsletter {
        name: "Brain Food",
        description: "Weekly insights on mental models and decision making",
        category: "Personal Development",
        subscribers: "500K+",
        style: "Professional",
        link: "https://fs.blog/newsletter/",
    },
    ExampleNewsletter {
        name: "NextJS Weekly",
        description: "Latest updates and tips from the Next.js ecosystem",
        category: "Technology",
        subscribers: "200K+",
        style: "Technical",
        link: "https://nextjs.org/blog",
    },
    ExampleNewsletter {
        name: "Dense Discovery",
        description: "Weekly newsletter about design, technology, and productivity",
        category: "Design",
        subscribers: "100K+",
        style: "Professional",
        link: "https://www.densediscovery.com/",
    },
];

#[derive(Debug, Serialize)]
pub struct ExamplesResponse {
    pub examples: &'static [ExampleNewsletter],
}

/// GET /api/examples
pub async fn handle_list_examples() -> Json<ExamplesResponse> {
    Json(ExamplesResponse {
        examples: EXAMPLE_NEWSLETTERS,
    })
}
