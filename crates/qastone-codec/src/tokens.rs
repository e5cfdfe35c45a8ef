//! Token estimation and savings accounting
//!
//! The estimate is a word-count heuristic, not a tokenizer; callers get a
//! consistent best-effort number, never an error.

use serde::{Deserialize, Serialize};

/// Estimate the token cost of text
///
/// `ceil(word_count * 0.75)`, where words are runs of non-whitespace.
#[inline]
#[must_use]
pub fn estimate_tokens(content: &str) -> usize {
    let words = content.split_whitespace().count();
    (words * 3).div_ceil(4)
}

/// What progressive loading saved versus reading a whole stone
///
/// All-zero when the content was not a stone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSavings {
    /// Tokens avoided (`full_tokens - loaded_tokens`)
    pub saved: usize,
    /// Percentage of the full stone avoided, rounded; zero when the full
    /// stone estimates to zero
    pub percentage: u32,
    /// Cost of the header alone
    pub header_tokens: usize,
    /// Cost of the header plus the levels actually loaded
    pub loaded_tokens: usize,
    /// Cost of the header plus every level
    pub full_tokens: usize,
}

impl TokenSavings {
    /// Compute savings from the three text slices of one stone
    #[must_use]
    pub(crate) fn from_texts(header: &str, loaded: &str, full: &str) -> Self {
        let header_tokens = estimate_tokens(header);
        let loaded_tokens = estimate_tokens(loaded);
        let full_tokens = estimate_tokens(full);
        let saved = full_tokens.saturating_sub(loaded_tokens);
        // round(100 * saved / full), half up; saved <= full keeps this <= 100.
        let percentage = if full_tokens == 0 {
            0
        } else {
            ((200 * saved + full_tokens) / (2 * full_tokens)) as u32
        };
        Self {
            saved,
            percentage,
            header_tokens,
            loaded_tokens,
            full_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_rounds_up() {
        assert_eq!(estimate_tokens(""), 0);
        assert_eq!(estimate_tokens("one"), 1);
        assert_eq!(estimate_tokens("one two"), 2);
        assert_eq!(estimate_tokens("one two three four"), 3);
        assert_eq!(estimate_tokens("a b c d e f g h"), 6);
    }

    #[test]
    fn estimate_ignores_whitespace_runs() {
        assert_eq!(estimate_tokens("  spaced \t out \n words  "), estimate_tokens("spaced out words"));
    }

    #[test]
    fn savings_identities_hold() {
        let header = "one two three four";
        let loaded = "one two three four five six seven eight";
        let full = "one two three four five six seven eight nine ten eleven twelve";
        let savings = TokenSavings::from_texts(header, loaded, full);

        assert!(savings.full_tokens >= savings.loaded_tokens);
        assert!(savings.loaded_tokens >= savings.header_tokens);
        assert_eq!(savings.saved, savings.full_tokens - savings.loaded_tokens);
    }

    #[test]
    fn empty_stone_avoids_division_by_zero() {
        let savings = TokenSavings::from_texts("", "", "");
        assert_eq!(savings, TokenSavings::default());
    }

    #[test]
    fn percentage_rounds_half_up() {
        // 2 of 3 tokens loaded: saved 1/3, 33% after rounding.
        let savings = TokenSavings::from_texts("", "one two", "one two three four");
        assert_eq!(savings.loaded_tokens, 2);
        assert_eq!(savings.full_tokens, 3);
        assert_eq!(savings.percentage, 33);

        // 1 of 2 tokens loaded: exactly half.
        let savings = TokenSavings::from_texts("", "one", "one two");
        assert_eq!(savings.percentage, 50);
    }
}
