//! QA.Stone wire format
//!
//! The text envelope carrying layered detail for inter-agent clipboard
//! handoffs, and nothing else: grammar constants, the weak border digest,
//! the fortune vocabulary, header scanning, LOD block extraction, and
//! envelope construction. Everything here is pure and synchronous — the
//! caching consumer layer lives in `qastone-codec`.
//!
//! # Core Concepts
//!
//! - [`is_stone`]: marker detection, the gate every read path goes through
//! - [`Header`]: the `key: value` block answered without reading LOD text
//! - [`BorderHash`]: the 8-hex-digit content tag in the wire contract
//! - [`Fortune`]: the `channel:category:complexity` triage tag
//! - [`lod`]: block extraction and the heuristic level generator
//! - [`StoneBuilder`]: envelope construction
//!
//! # Example
//!
//! ```rust,ignore
//! use qastone_format::{is_stone, Header, StoneBuilder, GlowChannel};
//!
//! let stone = StoneBuilder::new("Wire the new API endpoint.")
//!     .with_channel(GlowChannel::Handoff)
//!     .build();
//!
//! assert!(is_stone(&stone));
//! let header = Header::parse(&stone)?;
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod envelope;
mod error;
mod fortune;
mod hash;
mod header;

/// LOD block extraction and generation
pub mod lod;

// Re-exports
pub use envelope::{is_stone, StoneBuilder, CLOSE_MARKER, OPEN_MARKER, SEPARATOR};
pub use error::StoneError;
pub use fortune::{
    classify_category, classify_complexity, Category, Complexity, Fortune, GlowChannel,
    UnknownVariant,
};
pub use hash::{BorderHash, BorderHashError};
pub use header::{Header, HEADER_SCAN_LIMIT};
pub use lod::MAX_LEVEL;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn full_envelope_lifecycle() {
        let content = "Add coverage for the database migration path. It keeps regressing.";
        let stone = StoneBuilder::new(content)
            .with_channel(GlowChannel::Context)
            .with_source_agent("reviewer")
            .build();

        assert!(is_stone(&stone));
        let header = Header::parse(&stone).unwrap();
        assert_eq!(header.glow_channel, Some(GlowChannel::Context));

        let fortune = header.parsed_fortune();
        assert_eq!(fortune.channel, Some(GlowChannel::Context));
        assert_eq!(fortune.category, Some(Category::Database));
        assert_eq!(fortune.complexity, Some(Complexity::Simple));

        assert_eq!(lod::extract(&stone, 2), content);
        assert_eq!(header.lod_count, lod::count_blocks(&stone));
    }

    #[test]
    fn header_and_hash_integration() {
        let stone = StoneBuilder::new("content to tag").build();
        let header = Header::parse(&stone).unwrap();
        let declared = header.border_hash.unwrap();
        assert_eq!(declared, BorderHash::compute("content to tag"));
        assert_eq!(declared.to_string().len(), BorderHash::HEX_WIDTH);
    }
}
