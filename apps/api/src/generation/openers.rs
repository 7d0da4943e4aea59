//! Opener extraction — converts one block of generated text into an ordered
//! list of individual opener strings.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a numbered-item prefix at the start of a line: `1.`, `1)`, or `1-`.
/// Capped at three digits so year-like prefixes ("2024-") are not items.
static ITEM_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\d{1,3}\s*[.)-]\s*").expect("invalid item prefix regex"));

/// Splits generated text into at most `requested` opener strings.
///
/// Primary pass: numbered-list items. A non-numbered line belongs to the
/// item started by the numbered line above it, so a multi-line item is
/// captured in full up to the next number or end of text. When the text
/// yields fewer numbered items than requested, every non-blank line counts
/// as one opener instead (prefixes still stripped), truncated to
/// `requested`. Empty input produces an empty list.
pub fn parse_openers(text: &str, requested: usize) -> Vec<String> {
    if requested == 0 || text.trim().is_empty() {
        return Vec::new();
    }

    let mut numbered = split_numbered(text);
    if numbered.len() >= requested {
        numbered.truncate(requested);
        return numbered;
    }

    fallback_lines(text, requested)
}

/// Collects numbered items, joining continuation lines with single spaces.
/// Text before the first numbered line is preamble, not an item.
fn split_numbered(text: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    let mut current: Option<String> = None;

    for line in text.lines() {
        if let Some(m) = ITEM_PREFIX.find(line) {
            if let Some(item) = current.take() {
                if !item.is_empty() {
                    items.push(item);
                }
            }
            current = Some(line[m.end()..].trim().to_string());
        } else if let Some(item) = current.as_mut() {
            let continuation = line.trim();
            if !continuation.is_empty() {
                if !item.is_empty() {
                    item.push(' ');
                }
                item.push_str(continuation);
            }
        }
    }

    if let Some(item) = current.take() {
        if !item.is_empty() {
            items.push(item);
        }
    }

    items
}

/// Fallback: every non-blank line is one opener, up to `requested`.
fn fallback_lines(text: &str, requested: usize) -> Vec<String> {
    text.lines()
        .map(strip_item_prefix)
        .filter(|line| !line.is_empty())
        .take(requested)
        .map(String::from)
        .collect()
}

/// Strips a leading numbered-item prefix from a line, if present.
fn strip_item_prefix(line: &str) -> &str {
    match ITEM_PREFIX.find(line) {
        Some(m) => line[m.end()..].trim(),
        None => line.trim(),
    }
}
