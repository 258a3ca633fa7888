//! Reply parser: turns the model's free-text completion into typed suggestions.
//!
//! Expected shape, one block per suggestion, blocks separated by blank lines:
//!
//! ```text
//! Name: The Compile Times
//! Description: Weekly news from the Rust ecosystem
//! Score: 0.9
//! Keywords: rust, compilers, weekly
//! ```
//!
//! Parsing is all-or-nothing. One malformed block or a wrong block count
//! fails the whole reply.

use crate::generation::error::GenerationError;
use crate::generation::models::{is_valid_score, Suggestion};

/// Number of suggestions a reply must contain.
pub const SUGGESTION_COUNT: usize = 5;
/// Number of keywords each suggestion must carry.
pub const KEYWORD_COUNT: usize = 3;

const NAME: &str = "name";
const DESCRIPTION: &str = "description";
const SCORE: &str = "score";
const KEYWORDS: &str = "keywords";

/// Parses a full reply into exactly [`SUGGESTION_COUNT`] suggestions.
pub fn parse_reply(text: &str) -> Result<Vec<Suggestion>, GenerationError> {
    let suggestions = split_blocks(text)
        .iter()
        .enumerate()
        .map(|(i, block)| parse_block(block, i + 1))
        .collect::<Result<Vec<_>, _>>()?;

    if suggestions.len() != SUGGESTION_COUNT {
        return Err(GenerationError::CountMismatch {
            expected: SUGGESTION_COUNT,
            actual: suggestions.len(),
        });
    }

    Ok(suggestions)
}

/// Groups consecutive non-blank lines. Any run of whitespace-only lines is a
/// single separator.
fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

#[derive(Default)]
struct BlockFields<'a> {
    name: Option<&'a str>,
    description: Option<&'a str>,
    score: Option<&'a str>,
    keywords: Option<&'a str>,
}

fn parse_block(lines: &[&str], block: usize) -> Result<Suggestion, GenerationError> {
    let mut fields = BlockFields::default();

    // First matching line wins for each label.
    for line in lines {
        let Some((label, value)) = split_label(line) else {
            continue;
        };
        let slot = match label {
            NAME => &mut fields.name,
            DESCRIPTION => &mut fields.description,
            SCORE => &mut fields.score,
            KEYWORDS => &mut fields.keywords,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value);
        }
    }

    let format_error = |reason: String| GenerationError::Format { block, reason };
    let missing = |label: &str| format_error(format!("missing {label} line"));

    let name = fields.name.ok_or_else(|| missing("Name"))?;
    let description = fields.description.ok_or_else(|| missing("Description"))?;
    let score_text = fields.score.ok_or_else(|| missing("Score"))?;
    let keywords_text = fields.keywords.ok_or_else(|| missing("Keywords"))?;

    let score = parse_score(score_text)
        .ok_or_else(|| format_error(format!("score {score_text:?} is not a decimal in (0, 1]")))?;

    let keywords = parse_keywords(keywords_text);
    if keywords.len() != KEYWORD_COUNT {
        return Err(format_error(format!(
            "expected {KEYWORD_COUNT} keywords, found {}",
            keywords.len()
        )));
    }

    Ok(Suggestion {
        name: name.to_string(),
        description: description.to_string(),
        score,
        keywords,
    })
}

/// Matches a `Label: value` line case-insensitively, tolerating list and
/// markdown decoration such as `1. `, `- `, `**Name:**`. Returns the
/// lowercase label and a non-empty value.
fn split_label(line: &str) -> Option<(&'static str, &str)> {
    let line = line.trim_start_matches(|c: char| {
        c.is_whitespace() || c.is_ascii_digit() || matches!(c, '.' | ')' | '-' | '*' | '#' | '>' | '•')
    });

    for label in [NAME, DESCRIPTION, SCORE, KEYWORDS] {
        let Some(head) = line.get(..label.len()) else {
            continue;
        };
        if !head.eq_ignore_ascii_case(label) {
            continue;
        }
        let Some(rest) = line[label.len()..]
            .trim_start_matches('*')
            .strip_prefix(':')
        else {
            continue;
        };
        let value = rest.trim_start_matches('*').trim().trim_end_matches('*').trim();
        if value.is_empty() {
            return None;
        }
        return Some((label, value));
    }

    None
}

/// Reads the leading decimal of the value, e.g. `0.85` out of `0.85 (strong)`.
fn parse_score(value: &str) -> Option<f64> {
    let end = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(value.len());
    let score: f64 = value[..end].parse().ok()?;
    is_valid_score(score).then_some(score)
}

fn parse_keywords(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(n: usize) -> String {
        format!(
            "Name: Newsletter {n}\nDescription: Description {n}\nScore: 0.{n}\nKeywords: alpha, beta, gamma"
        )
    }

    fn reply(count: usize) -> String {
        (1..=count).map(block).collect::<Vec<_>>().join("\n\n")
    }

    #[test]
    fn test_five_well_formed_blocks_parse() {
        let suggestions = parse_reply(&reply(5)).unwrap();
        assert_eq!(suggestions.len(), 5);
        for (i, s) in suggestions.iter().enumerate() {
            assert_eq!(s.name, format!("Newsletter {}", i + 1));
            assert!(!s.description.is_empty());
            assert!(s.score > 0.0 && s.score <= 1.0);
            assert_eq!(s.keywords, vec!["alpha", "beta", "gamma"]);
        }
    }

    #[test]
    fn test_four_blocks_is_count_mismatch() {
        let err = parse_reply(&reply(4)).unwrap_err();
        assert!(matches!(
            err,
            GenerationError::CountMismatch {
                expected: 5,
                actual: 4
            }
        ));
    }

    #[test]
    fn test_six_blocks_is_count_mismatch() {
        let err = parse_reply(&reply(6)).unwrap_err();
        assert!(matches!(err, GenerationError::CountMismatch { actual: 6, .. }));
    }

    #[test]
    fn test_missing_score_line_fails_whole_reply() {
        let mut blocks: Vec<String> = (1..=5).map(block).collect();
        blocks[2] = "Name: Broken\nDescription: No score here\nKeywords: a, b, c".to_string();
        let err = parse_reply(&blocks.join("\n\n")).unwrap_err();
        match err {
            GenerationError::Format { block, reason } => {
                assert_eq!(block, 3);
                assert!(reason.contains("Score"));
            }
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn test_labels_are_case_insensitive() {
        let text = (1..=5)
            .map(|n| format!("NAME: N{n}\ndescription: D\nsCoRe: 0.5\nKEYWORDS: a, b, c"))
            .collect::<Vec<_>>()
            .join("\n\n");
        let suggestions = parse_reply(&text).unwrap();
        assert_eq!(suggestions[4].name, "N5");
    }

    #[test]
    fn test_numbered_and_bold_labels_are_tolerated() {
        let text = (1..=5)
            .map(|n| {
                format!(
                    "1. **Name:** Brand {n}\n2. Description: Something\n3. **Score**: 0.85\n4. - Keywords: one, two, three"
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");
        let suggestions = parse_reply(&text).unwrap();
        assert_eq!(suggestions[0].name, "Brand 1");
        assert!((suggestions[0].score - 0.85).abs() < f64::EPSILON);
        assert_eq!(suggestions[0].keywords, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_runs_of_blank_and_whitespace_lines_separate_once() {
        let text = format!(
            "\n\n{}\n   \n\t\n{}\n\n\n\n{}\r\n\r\n{}\n \n{}\n\n",
            block(1),
            block(2),
            block(3),
            block(4),
            block(5)
        );
        assert_eq!(parse_reply(&text).unwrap().len(), 5);
    }

    #[test]
    fn test_preamble_block_is_a_format_error() {
        let text = format!("Here are your suggestions:\n\n{}", reply(5));
        let err = parse_reply(&text).unwrap_err();
        assert!(matches!(err, GenerationError::Format { block: 1, .. }));
    }

    #[test]
    fn test_score_out_of_range_is_format_error() {
        for bad in ["0", "1.5", "85", "high", "-0.3"] {
            let mut blocks: Vec<String> = (1..=5).map(block).collect();
            blocks[0] = format!("Name: X\nDescription: Y\nScore: {bad}\nKeywords: a, b, c");
            let err = parse_reply(&blocks.join("\n\n")).unwrap_err();
            assert!(
                matches!(err, GenerationError::Format { block: 1, .. }),
                "score {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_score_of_one_is_accepted() {
        assert_eq!(parse_score("1.0"), Some(1.0));
        assert_eq!(parse_score("0.72 (strong fit)"), Some(0.72));
    }

    #[test]
    fn test_wrong_keyword_count_is_format_error() {
        let mut blocks: Vec<String> = (1..=5).map(block).collect();
        blocks[4] = "Name: X\nDescription: Y\nScore: 0.4\nKeywords: only, two".to_string();
        let err = parse_reply(&blocks.join("\n\n")).unwrap_err();
        assert!(matches!(err, GenerationError::Format { block: 5, .. }));
    }

    #[test]
    fn test_keywords_are_trimmed_and_empty_terms_dropped() {
        assert_eq!(
            parse_keywords("  ai ,  machine learning,, news  "),
            vec!["ai", "machine learning", "news"]
        );
    }

    #[test]
    fn test_first_matching_line_wins() {
        let lines = [
            "Name: First",
            "Name: Second",
            "Description: D",
            "Score: 0.3",
            "Keywords: a, b, c",
        ];
        assert_eq!(parse_block(&lines, 1).unwrap().name, "First");
    }

    #[test]
    fn test_empty_label_value_counts_as_missing() {
        let lines = ["Name:", "Description: D", "Score: 0.3", "Keywords: a, b, c"];
        let err = parse_block(&lines, 1).unwrap_err();
        assert!(err.to_string().contains("Name"));
    }

    #[test]
    fn test_label_must_be_line_prefix() {
        assert!(split_label("Newsletter Name: Foo").is_none());
        assert!(split_label("Names: Foo").is_none());
        assert_eq!(split_label("  - Name: Foo"), Some((NAME, "Foo")));
    }

    #[test]
    fn test_empty_reply_is_count_mismatch() {
        let err = parse_reply("   \n\n  ").unwrap_err();
        assert!(matches!(err, GenerationError::CountMismatch { actual: 0, .. }));
    }
}
