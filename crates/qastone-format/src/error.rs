//! Error types for the QA.Stone wire format

/// Errors raised while reading stone envelopes
///
/// The format is deliberately permissive: a truncated or mangled envelope
/// degrades to empty extractions rather than failing. The only hard failure
/// is asking for a header on text that is not a stone at all, which is a
/// caller-contract violation ([`crate::is_stone`] should be checked first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum StoneError {
    /// Content does not begin with the stone open marker
    #[error("not a valid stone")]
    NotAStone,
}
