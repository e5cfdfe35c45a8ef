//! Envelope grammar and stone construction
//!
//! The envelope is plain text framed by `§QASTONE§` / `§/QASTONE§` with a
//! header block, then LOD blocks separated by lone `─` lines. Built stones
//! are immutable; there is no in-place mutation anywhere in the format.

use crate::fortune::{classify_category, classify_complexity, Fortune, GlowChannel};
use crate::hash::BorderHash;
use crate::lod::{self, LEVEL_COUNT, MAX_LEVEL};
use chrono::Utc;
use std::collections::BTreeMap;

/// Open marker; a stone begins with this after leading whitespace
pub const OPEN_MARKER: &str = "§QASTONE§";

/// Close marker terminating the envelope
pub const CLOSE_MARKER: &str = "§/QASTONE§";

/// Lone separator line between header and LOD blocks
pub const SEPARATOR: &str = "─";

/// Check whether text carries a stone envelope
///
/// True iff the content, ignoring leading whitespace, starts with the open
/// marker. Never fails; plain text is simply not a stone.
#[inline]
#[must_use]
pub fn is_stone(content: &str) -> bool {
    content.trim_start().starts_with(OPEN_MARKER)
}

/// Builder for stone envelopes
///
/// Usage:
/// ```rust,ignore
/// let stone = StoneBuilder::new("Ship the release notes.")
///     .with_channel(GlowChannel::Handoff)
///     .with_stone_type("message")
///     .with_source_agent("scribe")
///     .build();
/// ```
///
/// When no LOD map is supplied the four levels are generated heuristically;
/// a host with a better summarizer injects its own levels via
/// [`StoneBuilder::with_lods`] and the codec never calls out itself.
#[derive(Debug, Clone)]
pub struct StoneBuilder {
    content: String,
    channel: GlowChannel,
    stone_type: String,
    source_agent: String,
    lods: Option<BTreeMap<u8, String>>,
}

impl StoneBuilder {
    /// Start building a stone around raw content
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            channel: GlowChannel::Task,
            stone_type: "clipboard".to_string(),
            source_agent: "unknown".to_string(),
            lods: None,
        }
    }

    /// Set the glow channel (default `task`)
    #[inline]
    #[must_use]
    pub fn with_channel(mut self, channel: GlowChannel) -> Self {
        self.channel = channel;
        self
    }

    /// Set the descriptive stone type (default `clipboard`)
    #[inline]
    #[must_use]
    pub fn with_stone_type(mut self, stone_type: impl Into<String>) -> Self {
        self.stone_type = stone_type.into();
        self
    }

    /// Set the producing agent (default `unknown`)
    #[inline]
    #[must_use]
    pub fn with_source_agent(mut self, source_agent: impl Into<String>) -> Self {
        self.source_agent = source_agent.into();
        self
    }

    /// Supply pre-authored LOD levels instead of the heuristic generator
    ///
    /// Levels above [`MAX_LEVEL`] are ignored; missing levels are empty.
    #[inline]
    #[must_use]
    pub fn with_lods(mut self, lods: BTreeMap<u8, String>) -> Self {
        self.lods = Some(lods);
        self
    }

    /// Emit the envelope text
    ///
    /// Never fails on string input. Empty content yields empty generated
    /// levels and the zero hash; whether an empty stone is meaningful is
    /// the caller's call.
    #[must_use]
    pub fn build(self) -> String {
        let border_hash = BorderHash::compute(&self.content);
        let levels = match self.lods {
            Some(map) => {
                let mut levels: [String; LEVEL_COUNT] = Default::default();
                for (level, text) in map {
                    if level <= MAX_LEVEL {
                        levels[level as usize] = text;
                    }
                }
                levels
            }
            None => lod::generate(&self.content),
        };
        let fortune = Fortune::new(
            self.channel,
            classify_category(&self.content),
            classify_complexity(&self.content),
        );
        let lod_count = levels.iter().filter(|text| !text.is_empty()).count();
        let created = Utc::now().to_rfc3339();

        let mut out = String::with_capacity(self.content.len() + 256);
        out.push_str(OPEN_MARKER);
        out.push('\n');
        out.push_str(&format!("border_hash: {border_hash}\n"));
        out.push_str(&format!("glow_channel: {}\n", self.channel));
        out.push_str(&format!("stone_type: {}\n", self.stone_type));
        out.push_str(&format!("created: {created}\n"));
        out.push_str(&format!("source_agent: {}\n", self.source_agent));
        out.push_str(&format!("lod_count: {lod_count}\n"));
        out.push_str(&format!("fortune: {fortune}\n"));
        out.push_str(SEPARATOR);
        out.push('\n');
        for (level, text) in levels.iter().enumerate() {
            if text.is_empty() {
                continue;
            }
            out.push_str(&format!("LOD-{level}: {text}\n"));
            out.push_str(SEPARATOR);
            out.push('\n');
        }
        out.push_str(CLOSE_MARKER);
        out
    }
}
