//! Bounded content-keyed caches
//!
//! Parsed headers and extracted LOD text are cached by a BLAKE3 digest of
//! the full content. Keying by the full content (never a prefix) means two
//! different stones can never collide into each other's parse results, and
//! the bounded moka caches keep a long-lived host session from accumulating
//! entries for every stone it ever saw.

use moka::sync::Cache;
use qastone_format::Header;
use std::sync::Arc;

/// Full-content cache key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ContentKey([u8; 32]);

impl ContentKey {
    /// Digest the entire content
    #[inline]
    #[must_use]
    pub(crate) fn of(content: &str) -> Self {
        Self(*blake3::hash(content.as_bytes()).as_bytes())
    }
}

/// Cache entry counts for host diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Parsed headers currently cached
    pub header_entries: u64,
    /// Extracted LOD texts currently cached
    pub lod_entries: u64,
}

/// The codec's two caches
#[derive(Debug, Clone)]
pub(crate) struct CodecCaches {
    headers: Cache<ContentKey, Arc<Header>>,
    lods: Cache<(ContentKey, u8), Arc<str>>,
}

impl CodecCaches {
    pub(crate) fn new(header_capacity: u64, lod_capacity: u64) -> Self {
        Self {
            headers: Cache::new(header_capacity),
            lods: Cache::new(lod_capacity),
        }
    }

    /// Get or parse the header for content already known to be a stone
    pub(crate) fn header_for(&self, key: ContentKey, content: &str) -> Arc<Header> {
        self.headers
            .get_with(key, || Arc::new(Header::scan(content)))
    }

    /// Get or extract one LOD level for content already known to be a stone
    pub(crate) fn lod_for(&self, key: ContentKey, content: &str, level: u8) -> Arc<str> {
        self.lods
            .get_with((key, level), || Arc::from(qastone_format::lod::extract(content, level)))
    }

    pub(crate) fn clear(&self) {
        self.headers.invalidate_all();
        self.lods.invalidate_all();
    }

    pub(crate) fn stats(&self) -> CacheStats {
        self.headers.run_pending_tasks();
        self.lods.run_pending_tasks();
        CacheStats {
            header_entries: self.headers.entry_count(),
            lod_entries: self.lods.entry_count(),
        }
    }
}
