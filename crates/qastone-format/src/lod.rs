//! LOD block extraction and heuristic generation
//!
//! A LOD block starts at a `LOD-<n>:` line and runs until the next lone
//! separator, the next `LOD-` marker, or the close marker. Absence is a
//! valid state: a level that was never authored extracts as the empty
//! string. Extraction is a single bounded line scan — a truncated envelope
//! simply yields whatever was accumulated.

use crate::envelope::{CLOSE_MARKER, SEPARATOR};
use std::collections::BTreeMap;

/// Highest LOD ordinal a producer emits (levels 0 through 3)
pub const MAX_LEVEL: u8 = 3;

/// Number of LOD slots in a generated stone
pub const LEVEL_COUNT: usize = MAX_LEVEL as usize + 1;

/// Character budgets for the heuristic summarizer
const SCAN_EXTEND_UNDER: usize = 50;
const SCAN_MAX_CHARS: usize = 150;
const SCAN_FALLBACK_CHARS: usize = 100;
const SUMMARY_EXTEND_UNDER: usize = 100;
const SUMMARY_MAX_CHARS: usize = 500;

/// Extract the text of one LOD level
///
/// Returns the empty string when the level is not present. The caller is
/// expected to have routed plain (non-stone) text elsewhere; on such input
/// this scan simply finds no block.
#[must_use]
pub fn extract(content: &str, level: u8) -> String {
    let marker = format!("LOD-{level}:");
    let mut collected: Vec<&str> = Vec::new();
    let mut in_block = false;

    for line in content.lines() {
        if !in_block {
            if let Some(rest) = line.trim_start().strip_prefix(&marker) {
                in_block = true;
                collected.push(rest.trim_start());
            }
            continue;
        }
        let trimmed = line.trim();
        if trimmed == SEPARATOR || trimmed == CLOSE_MARKER || trimmed.starts_with("LOD-") {
            break;
        }
        collected.push(line);
    }

    collected.join("\n").trim().to_string()
}

/// Extract levels `0..=max_level`, omitting levels that extract empty
///
/// The mapping iterates in ascending level order.
#[must_use]
pub fn extract_up_to(content: &str, max_level: u8) -> BTreeMap<u8, String> {
    (0..=max_level)
        .filter_map(|level| {
            let text = extract(content, level);
            (!text.is_empty()).then_some((level, text))
        })
        .collect()
}

/// Count the non-empty LOD blocks actually present in an envelope
///
/// One pass over the lines; used to cross-check a header's advisory
/// `lod_count` without trusting it.
#[must_use]
pub fn count_blocks(content: &str) -> u32 {
    let mut count = 0;
    let mut block_has_text = false;
    let mut in_block = false;

    for line in content.lines() {
        let trimmed = line.trim();
        let is_marker = trimmed.starts_with("LOD-")
            && trimmed
                .strip_prefix("LOD-")
                .and_then(|rest| rest.split_once(':'))
                .is_some_and(|(digits, _)| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()));

        if is_marker {
            if in_block && block_has_text {
                count += 1;
            }
            in_block = true;
            block_has_text = trimmed
                .split_once(':')
                .is_some_and(|(_, rest)| !rest.trim().is_empty());
            continue;
        }
        if trimmed == SEPARATOR || trimmed == CLOSE_MARKER {
            if in_block && block_has_text {
                count += 1;
            }
            in_block = false;
            block_has_text = false;
            continue;
        }
        if in_block && !trimmed.is_empty() {
            block_has_text = true;
        }
    }
    if in_block && block_has_text {
        count += 1;
    }
    count
}

/// Generate the four heuristic LOD levels for raw content
///
/// - level 0: first sentence, extended and truncated to a scan line
/// - level 1: first paragraph, extended and truncated to a summary
/// - level 2: the full content, verbatim
/// - level 3: empty — reserved for externally-supplied history
#[must_use]
pub fn generate(content: &str) -> [String; LEVEL_COUNT] {
    [
        scan_line(content),
        summary(content),
        content.to_string(),
        String::new(),
    ]
}

/// First sentence of `content`, extended with the second when the first is
/// short, capped at the scan budget. Falls back to a raw character prefix
/// when no sentence boundary exists.
fn scan_line(content: &str) -> String {
    let trimmed = content.trim();
    let mut boundaries = trimmed
        .char_indices()
        .filter(|(_, c)| matches!(c, '.' | '!' | '?'));

    let Some((first_end, first_term)) = boundaries.next() else {
        return truncate_chars(trimmed, SCAN_FALLBACK_CHARS);
    };

    let first = &trimmed[..first_end + first_term.len_utf8()];
    let extended = if first.chars().count() < SCAN_EXTEND_UNDER {
        match boundaries.next() {
            Some((second_end, second_term)) => &trimmed[..second_end + second_term.len_utf8()],
            None => first,
        }
    } else {
        first
    };
    truncate_chars(extended.trim(), SCAN_MAX_CHARS)
}

/// First paragraph of `content`, extended with the second when the first is
/// short, capped at the summary budget.
fn summary(content: &str) -> String {
    let mut paragraphs = content
        .trim()
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty());

    let Some(first) = paragraphs.next() else {
        return String::new();
    };

    let extended = if first.chars().count() < SUMMARY_EXTEND_UNDER {
        match paragraphs.next() {
            Some(second) => format!("{first}\n\n{second}"),
            None => first.to_string(),
        }
    } else {
        first.to_string()
    };
    truncate_chars(&extended, SUMMARY_MAX_CHARS)
}

/// Truncate to at most `max` characters (not bytes)
fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        text.chars().take(max).collect()
    }
}
