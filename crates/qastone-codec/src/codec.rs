//! The consumer-facing codec
//!
//! One constructible value owning the caches; no process-wide singleton.
//! Every operation is synchronous and bounded by input size, so a codec can
//! sit in a long-lived session (or be cloned across server workers — the
//! caches are concurrency-safe) without further coordination.

use crate::assess::{assess_required_lod, Assessment, TaskContext};
use crate::cache::{CacheStats, CodecCaches, ContentKey};
use crate::config::CodecConfig;
use crate::tokens::{estimate_tokens, TokenSavings};
use qastone_format::{is_stone, lod, Header, StoneError, MAX_LEVEL};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::warn;

/// What a progressive load produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoadOutcome {
    /// The content was not a stone; handed back untouched
    PassThrough {
        /// The original content, verbatim
        content: String,
    },
    /// The content was a stone and its shallow levels were combined
    Stone {
        /// Non-empty levels up to the requested depth, blank-line joined
        /// in ascending order
        content: String,
        /// The depth that was requested
        loaded_level: u8,
        /// The parsed header
        header: Header,
        /// The non-empty levels that were loaded, by ordinal
        lods: BTreeMap<u8, String>,
    },
}

impl LoadOutcome {
    /// Whether a stone was recognized
    #[inline]
    #[must_use]
    pub fn is_stone(&self) -> bool {
        matches!(self, LoadOutcome::Stone { .. })
    }

    /// The text a consumer should read
    #[inline]
    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            LoadOutcome::PassThrough { content } | LoadOutcome::Stone { content, .. } => content,
        }
    }

    /// The depth that was loaded, when a stone was recognized
    #[inline]
    #[must_use]
    pub fn loaded_level(&self) -> Option<u8> {
        match self {
            LoadOutcome::PassThrough { .. } => None,
            LoadOutcome::Stone { loaded_level, .. } => Some(*loaded_level),
        }
    }

    /// The parsed header, when a stone was recognized
    #[inline]
    #[must_use]
    pub fn header(&self) -> Option<&Header> {
        match self {
            LoadOutcome::PassThrough { .. } => None,
            LoadOutcome::Stone { header, .. } => Some(header),
        }
    }

    /// The loaded levels, when a stone was recognized
    #[inline]
    #[must_use]
    pub fn lods(&self) -> Option<&BTreeMap<u8, String>> {
        match self {
            LoadOutcome::PassThrough { .. } => None,
            LoadOutcome::Stone { lods, .. } => Some(lods),
        }
    }
}

/// Detects, parses, and progressively loads QA.Stone envelopes
///
/// Construction is cheap; clones share the same caches. Parsed headers and
/// extracted levels are cached under a digest of the full content, so a
/// repeat of the same stone text is a lookup, and two stones sharing a
/// prefix can never contaminate each other.
#[derive(Debug, Clone)]
pub struct StoneCodec {
    caches: CodecCaches,
}

impl StoneCodec {
    /// Create a codec with default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CodecConfig::default())
    }

    /// Create a codec with explicit configuration
    #[must_use]
    pub fn with_config(config: CodecConfig) -> Self {
        Self {
            caches: CodecCaches::new(config.header_cache_capacity, config.lod_cache_capacity),
        }
    }

    /// Parse a stone's header
    ///
    /// Scans only the header block — never LOD content — and caches the
    /// result by full-content digest.
    ///
    /// # Errors
    /// Returns [`StoneError::NotAStone`] when the content fails
    /// [`is_stone`]; callers routing arbitrary pasted text should check
    /// that first and fall back to treating the text as plain.
    pub fn parse_header(&self, content: &str) -> Result<Arc<Header>, StoneError> {
        if !is_stone(content) {
            return Err(StoneError::NotAStone);
        }
        Ok(self.caches.header_for(ContentKey::of(content), content))
    }

    /// Extract one LOD level
    ///
    /// Plain (non-stone) text passes through unchanged. A level that was
    /// never authored extracts as the empty string — absence, not an error.
    #[must_use]
    pub fn extract_lod(&self, content: &str, level: u8) -> String {
        if !is_stone(content) {
            return content.to_string();
        }
        self.caches
            .lod_for(ContentKey::of(content), content, level)
            .to_string()
    }

    /// Extract levels `0..=max_level`, omitting empty ones, ascending
    #[must_use]
    pub fn extract_lods_up_to(&self, content: &str, max_level: u8) -> BTreeMap<u8, String> {
        (0..=max_level)
            .filter_map(|level| {
                let text = self.extract_lod(content, level);
                (!text.is_empty()).then_some((level, text))
            })
            .collect()
    }

    /// Assess how deep to load a stone for a task
    ///
    /// Pure policy over the already-parsed header; see
    /// [`assess_required_lod`].
    #[inline]
    #[must_use]
    pub fn assess(&self, header: &Header, context: &TaskContext) -> Assessment {
        assess_required_lod(header, context)
    }

    /// Load a stone up to `max_level`, already combined
    ///
    /// The single entry point for a consumer that wants "give me up to
    /// depth N". Non-stone content passes through. The header's advisory
    /// `lod_count` is cross-checked against the blocks actually found;
    /// a mismatch (a stone truncated in transit, or a sloppy producer) is
    /// logged and otherwise ignored.
    #[must_use]
    pub fn progressive_load(&self, content: &str, max_level: u8) -> LoadOutcome {
        let Ok(header) = self.parse_header(content) else {
            return LoadOutcome::PassThrough {
                content: content.to_string(),
            };
        };

        let found = lod::count_blocks(content);
        if found != header.lod_count {
            warn!(
                declared = header.lod_count,
                found, "stone lod_count disagrees with blocks present"
            );
        }

        let lods = self.extract_lods_up_to(content, max_level);
        let combined = lods.values().cloned().collect::<Vec<_>>().join("\n\n");
        LoadOutcome::Stone {
            content: combined,
            loaded_level: max_level,
            header: (*header).clone(),
            lods,
        }
    }

    /// Compute what loading only `loaded_level` saved
    ///
    /// All-zero for non-stone content. The identities
    /// `full >= loaded >= header` and `saved == full - loaded` always hold.
    #[must_use]
    pub fn token_savings(&self, content: &str, loaded_level: u8) -> TokenSavings {
        let Ok(header) = self.parse_header(content) else {
            return TokenSavings::default();
        };

        let combined_to = |level: u8| -> String {
            let mut text = header.raw.clone();
            for body in self.extract_lods_up_to(content, level).values() {
                text.push_str("\n\n");
                text.push_str(body);
            }
            text
        };

        let loaded = combined_to(loaded_level);
        let full = combined_to(MAX_LEVEL);
        TokenSavings::from_texts(&header.raw, &loaded, &full)
    }

    /// Estimate the token cost of arbitrary text
    #[inline]
    #[must_use]
    pub fn estimate_tokens(&self, content: &str) -> usize {
        estimate_tokens(content)
    }

    /// Drop every cached header and extraction
    pub fn clear_caches(&self) {
        self.caches.clear();
    }

    /// Current cache entry counts
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.caches.stats()
    }
}

impl Default for StoneCodec {
    fn default() -> Self {
        Self::new()
    }
}
