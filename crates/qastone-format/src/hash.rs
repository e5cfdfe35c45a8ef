//! Border hash primitives
//!
//! Provides [`BorderHash`], the weak 32-bit rolling digest that tags every
//! stone envelope. The 8-character lowercase hex rendering is part of the
//! wire contract, so the accumulator update and the absolute-value step are
//! reproduced exactly. This is a discoverability tag, not an integrity
//! check — collisions are expected and harmless.

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;
use std::str::FromStr;

/// Weak content-derived identifier carried in a stone header
///
/// Computed by folding each character code into a wrapping 32-bit signed
/// accumulator (`h = (h << 5) - h + code`), then taking the absolute value.
/// Rendered on the wire as exactly 8 lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BorderHash(u32);

impl BorderHash {
    /// Wire rendering width in hex digits
    pub const HEX_WIDTH: usize = 8;

    /// Create a hash from its raw accumulator value
    #[inline]
    #[must_use]
    pub const fn from_value(value: u32) -> Self {
        Self(value)
    }

    /// Compute the rolling digest of `content`
    #[must_use]
    pub fn compute(content: &str) -> Self {
        let mut h: i32 = 0;
        for c in content.chars() {
            h = h.wrapping_shl(5).wrapping_sub(h).wrapping_add(c as i32);
        }
        Self(h.unsigned_abs())
    }

    /// Raw accumulator value (post absolute-value)
    #[inline]
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl Display for BorderHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0.to_be_bytes()))
    }
}

impl FromStr for BorderHash {
    type Err = BorderHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != Self::HEX_WIDTH {
            return Err(BorderHashError::InvalidLength {
                expected: Self::HEX_WIDTH,
                actual: s.len(),
            });
        }
        if s.bytes().any(|b| b.is_ascii_uppercase()) {
            return Err(BorderHashError::NotLowercase);
        }
        let value = u32::from_str_radix(s, 16)?;
        Ok(Self(value))
    }
}

impl serde::Serialize for BorderHash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for BorderHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when parsing a border hash from its wire form
#[derive(Debug, thiserror::Error)]
pub enum BorderHashError {
    /// Wrong number of hex digits
    #[error("invalid border hash length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Wire form is lowercase-only
    #[error("border hash must be lowercase hex")]
    NotLowercase,

    /// Not valid hexadecimal
    #[error("invalid border hash digits: {0}")]
    InvalidHex(#[from] ParseIntError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_content_hashes_to_zero() {
        let hash = BorderHash::compute("");
        assert_eq!(hash.value(), 0);
        assert_eq!(hash.to_string(), "00000000");
    }

    #[test]
    fn digest_is_deterministic() {
        let a = BorderHash::compute("the same content");
        let b = BorderHash::compute("the same content");
        assert_eq!(a, b);
    }

    #[test]
    fn digest_matches_reference_values() {
        // h folds as 31*h + code; "a" is just its code point, "ab" is 31*97 + 98.
        assert_eq!(BorderHash::compute("a").value(), 97);
        assert_eq!(BorderHash::compute("ab").value(), 31 * 97 + 98);
        assert_eq!(BorderHash::compute("a").to_string(), "00000061");
    }

    #[test]
    fn wire_form_is_eight_lowercase_hex_chars() {
        let hash = BorderHash::compute("Create GitHub repo for ztgi-ui, shared UI library.");
        let wire = hash.to_string();
        assert_eq!(wire.len(), 8);
        assert!(wire.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn overflow_wraps_and_abs_never_panics() {
        // Long inputs drive the accumulator through sign changes; the wire
        // form must stay 8 digits.
        let long = "x".repeat(10_000);
        let hash = BorderHash::compute(&long);
        assert_eq!(hash.to_string().len(), 8);
    }

    #[test]
    fn display_and_parse_round_trip() {
        let hash = BorderHash::compute("round trip me");
        let parsed: BorderHash = hash.to_string().parse().unwrap();
        assert_eq!(hash, parsed);
    }

    #[test]
    fn parse_rejects_bad_lengths() {
        assert!(matches!(
            "abc".parse::<BorderHash>(),
            Err(BorderHashError::InvalidLength { expected: 8, actual: 3 })
        ));
        assert!("deadbeef0".parse::<BorderHash>().is_err());
    }

    #[test]
    fn parse_rejects_uppercase() {
        assert!(matches!(
            "DEADBEEF".parse::<BorderHash>(),
            Err(BorderHashError::NotLowercase)
        ));
    }

    #[test]
    fn serde_round_trip_as_hex_string() {
        let hash = BorderHash::compute("serde");
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json.len(), 10); // quotes + 8 digits
        let decoded: BorderHash = serde_json::from_str(&json).unwrap();
        assert_eq!(hash, decoded);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn wire_form_always_parses_back(value in any::<u32>()) {
                let hash = BorderHash::from_value(value);
                let parsed: BorderHash = hash.to_string().parse().unwrap();
                prop_assert_eq!(hash, parsed);
            }

            #[test]
            fn digest_stays_in_wire_width(content in "\\PC{0,200}") {
                let wire = BorderHash::compute(&content).to_string();
                prop_assert_eq!(wire.len(), BorderHash::HEX_WIDTH);
            }
        }
    }
}
