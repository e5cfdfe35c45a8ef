//! Codec configuration

use serde::{Deserialize, Serialize};

/// Configuration for a [`crate::StoneCodec`] instance
///
/// Capacities bound the content-keyed caches; a host session handles at
/// most a few hundred distinct stones at a time, so the defaults are sized
/// for that and eviction covers the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Maximum parsed headers retained
    pub header_cache_capacity: u64,
    /// Maximum extracted LOD texts retained
    pub lod_cache_capacity: u64,
}

impl CodecConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With header cache capacity
    #[inline]
    #[must_use]
    pub fn with_header_cache_capacity(mut self, capacity: u64) -> Self {
        self.header_cache_capacity = capacity;
        self
    }

    /// With LOD cache capacity
    #[inline]
    #[must_use]
    pub fn with_lod_cache_capacity(mut self, capacity: u64) -> Self {
        self.lod_cache_capacity = capacity;
        self
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            header_cache_capacity: 256,
            lod_cache_capacity: 512,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_bounded() {
        let config = CodecConfig::new();
        assert_eq!(config.header_cache_capacity, 256);
        assert_eq!(config.lod_cache_capacity, 512);
    }

    #[test]
    fn builder_setters() {
        let config = CodecConfig::new()
            .with_header_cache_capacity(8)
            .with_lod_cache_capacity(16);
        assert_eq!(config.header_cache_capacity, 8);
        assert_eq!(config.lod_cache_capacity, 16);
    }
}
