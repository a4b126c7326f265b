use crate::models::KeywordCounts;
use anyhow::{Context, Result};
use std::path::Path;

/// Read the keyword list, one keyword per line
pub async fn read_keywords_from_file(path: &Path) -> Result<Vec<String>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read keywords file: {}", path.display()))?;

    let keywords = parse_keywords(&content);
    tracing::debug!(count = keywords.len(), "Loaded keywords from {}", path.display());
    Ok(keywords)
}

/// Split keyword file content into lines.
///
/// Every Unicode line boundary ends a line: `\n`, `\r\n`, a lone `\r`,
/// `\x0b`, `\x0c`, `\x1c`-`\x1e`, NEL, LINE SEPARATOR and PARAGRAPH
/// SEPARATOR. A final terminator does not add an empty keyword, but blank
/// lines in between are kept as `""`.
pub fn parse_keywords(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = content;

    while let Some(pos) = rest.find(is_line_boundary) {
        lines.push(rest[..pos].to_string());
        let tail = &rest[pos..];
        let skip = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[skip..];
    }
    if !rest.is_empty() {
        lines.push(rest.to_string());
    }

    lines
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Count non-overlapping, case-insensitive occurrences of `keyword` in an
/// already lowercased haystack.
///
/// An empty keyword matches at every character boundary, so it counts
/// `chars + 1`.
pub fn count_occurrences(haystack_lower: &str, keyword: &str) -> usize {
    if keyword.is_empty() {
        return haystack_lower.chars().count() + 1;
    }
    let needle = keyword.to_lowercase();
    haystack_lower.matches(needle.as_str()).count()
}

/// Count every keyword in `text`, keyed by the keyword's original casing
pub fn count_keyword_occurrences(text: &str, keywords: &[String]) -> KeywordCounts {
    let text_lower = text.to_lowercase();
    let mut counts = KeywordCounts::new();

    for keyword in keywords {
        counts.insert(keyword.as_str(), count_occurrences(&text_lower, keyword));
    }

    counts
}
