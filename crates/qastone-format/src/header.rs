//! Stone header model and scanning
//!
//! The header is the block of `key: value` lines between the open marker
//! and the first lone separator. It must answer "what is this stone" without
//! ever reading LOD content, so the scan is bounded and never looks past
//! the separator.

use crate::envelope::{is_stone, OPEN_MARKER, SEPARATOR};
use crate::error::StoneError;
use crate::fortune::{Fortune, GlowChannel};
use crate::hash::BorderHash;
use serde::{Deserialize, Serialize};

/// Upper bound on header lines scanned; a well-formed header never
/// approaches this.
pub const HEADER_SCAN_LIMIT: usize = 15;

/// Parsed stone header
///
/// Every field a producer declares is optional on read: missing or
/// unparseable values come back absent, unknown keys are ignored for
/// forward compatibility. `lod_count` is advisory — consumers discover
/// LOD blocks by scanning, never by trusting this count.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Header {
    /// Producer-declared content digest
    pub border_hash: Option<BorderHash>,
    /// Routing channel; absent or unrecognized spellings both mean
    /// "unknown" to the assessment policy
    pub glow_channel: Option<GlowChannel>,
    /// Free-form descriptive type (`clipboard`, `message`, `handoff`, ...)
    pub stone_type: Option<String>,
    /// ISO-8601 build timestamp, kept verbatim
    pub created: Option<String>,
    /// Free-form producer identifier
    pub source_agent: Option<String>,
    /// Advisory count of non-empty LOD levels
    pub lod_count: u32,
    /// Raw `channel:category:complexity` tag
    pub fortune: Option<String>,
    /// Every line the scan consumed, including the marker line and the
    /// terminating separator; retained for token accounting
    pub raw: String,
}

impl Header {
    /// Parse the header of a stone
    ///
    /// # Errors
    /// Returns [`StoneError::NotAStone`] when `content` does not begin with
    /// the open marker. Callers should check [`is_stone`] first.
    pub fn parse(content: &str) -> Result<Self, StoneError> {
        if !is_stone(content) {
            return Err(StoneError::NotAStone);
        }
        Ok(Self::scan(content))
    }

    /// Scan `key: value` lines without checking for the open marker
    ///
    /// Used by callers that have already established `is_stone`. On
    /// arbitrary text this simply collects whatever header-shaped lines
    /// appear within the scan bound.
    #[must_use]
    pub fn scan(content: &str) -> Self {
        let mut header = Self::default();
        let mut raw_lines: Vec<&str> = Vec::new();

        for line in content.trim_start().lines().take(HEADER_SCAN_LIMIT) {
            raw_lines.push(line);
            let trimmed = line.trim();
            if trimmed == SEPARATOR {
                break;
            }
            if trimmed == OPEN_MARKER {
                continue;
            }
            let Some((key, value)) = trimmed.split_once(':') else {
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "border_hash" => header.border_hash = value.parse().ok(),
                "glow_channel" => header.glow_channel = value.parse().ok(),
                "stone_type" => header.stone_type = Some(value.to_string()),
                "created" => header.created = Some(value.to_string()),
                "source_agent" => header.source_agent = Some(value.to_string()),
                "lod_count" => header.lod_count = value.parse().unwrap_or(0),
                "fortune" => header.fortune = Some(value.to_string()),
                // Unknown keys are ignored for forward compatibility.
                _ => {}
            }
        }

        header.raw = raw_lines.join("\n");
        header
    }

    /// Parse the fortune tag, if any
    #[inline]
    #[must_use]
    pub fn parsed_fortune(&self) -> Fortune {
        self.fortune.as_deref().map(Fortune::parse).unwrap_or_default()
    }
}
