// All LLM prompt constants for the Generation module.

/// Fixed system role for name generation.
pub const GENERATION_SYSTEM: &str = "You are a creative assistant specialized in generating \
    engaging newsletter names. Return exactly 5 suggestions in a clear, structured format \
    with name, description, score, and keywords for each suggestion.";

/// Name generation prompt template.
/// Replace: {tone}, {topic}, {industry}
pub const GENERATION_PROMPT_TEMPLATE: &str = r#"Generate 5 creative newsletter names for a {tone} newsletter about {topic} in the {industry} industry.

For each suggestion, provide the following in a structured format:
Name: [newsletter name]
Description: [brief description]
Score: [relevance score, a decimal between 0.1 and 1.0]
Keywords: [three relevant keywords, comma-separated]

Separate suggestions with a single blank line. Do not add any other text before, between, or after the suggestions."#;

/// Fills the generation template in a single pass, so user text is never
/// re-scanned for placeholders.
pub fn build_generation_prompt(topic: &str, tone: &str, industry: &str) -> String {
    let mut prompt = String::with_capacity(GENERATION_PROMPT_TEMPLATE.len() + 64);
    let mut rest = GENERATION_PROMPT_TEMPLATE;
    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let value = match &rest[start + 1..start + len] {
            "tone" => tone,
            "topic" => topic,
            "industry" => industry,
            _ => {
                prompt.push_str(&rest[..=start]);
                rest = &rest[start + 1..];
                continue;
            }
        };
        prompt.push_str(&rest[..start]);
        prompt.push_str(value);
        rest = &rest[start + len + 1..];
    }
    prompt.push_str(rest);
    prompt
}
