//! QA.Stone codec
//!
//! The consumer-facing layer over `qastone-format`: a constructible
//! [`StoneCodec`] that detects, parses, and progressively loads stone
//! envelopes, decides how deep a task should read, and accounts for the
//! tokens progressive loading avoided.
//!
//! # Example
//!
//! ```rust,ignore
//! use qastone_codec::prelude::*;
//!
//! let codec = StoneCodec::new();
//! let pasted = clipboard_text();
//!
//! match codec.parse_header(&pasted) {
//!     Ok(header) => {
//!         let assessment = codec.assess(&header, &TaskContext::new());
//!         let loaded = codec.progressive_load(&pasted, assessment.level);
//!         println!("{}", loaded.content());
//!     }
//!     Err(_) => println!("{pasted}"), // plain text, use as-is
//! }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod assess;
mod cache;
mod codec;
mod config;
pub mod tokens;

// Re-exports for convenience
pub use assess::{assess_required_lod, Assessment, TaskContext};
pub use cache::CacheStats;
pub use codec::{LoadOutcome, StoneCodec};
pub use config::CodecConfig;
pub use tokens::{estimate_tokens, TokenSavings};

// The wire format travels with the codec
pub use qastone_format::{
    is_stone, lod, BorderHash, Category, Complexity, Fortune, GlowChannel, Header, StoneBuilder,
    StoneError, HEADER_SCAN_LIMIT, MAX_LEVEL,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the codec
    pub use crate::{
        assess_required_lod, estimate_tokens, is_stone, Assessment, CodecConfig, GlowChannel,
        Header, LoadOutcome, StoneBuilder, StoneCodec, TaskContext, TokenSavings,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
