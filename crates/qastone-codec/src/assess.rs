//! Load-depth assessment policy
//!
//! Decides how deep a consumer should read into a stone before spending
//! tokens on it. Pure: a header and a task context in, a level and a
//! justification out. Rules apply in a fixed order; apart from the explicit
//! quick-assessment override, later rules only ever raise the level.

use qastone_format::{Fortune, GlowChannel, Header};
use serde::{Deserialize, Serialize};

/// Advisory LOD count at which complex content is delegated to a helper
/// instead of being loaded inline
const SPAWN_HELPER_AT: u32 = 4;

/// What the consuming task already knows about its own needs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskContext {
    /// The task cannot proceed without the full detail level
    pub needs_full_context: bool,
    /// The task only wants to triage; forces scan depth regardless of
    /// every other rule
    pub quick_assessment: bool,
}

impl TaskContext {
    /// Create an empty context
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With full-context requirement
    #[inline]
    #[must_use]
    pub fn with_full_context(mut self) -> Self {
        self.needs_full_context = true;
        self
    }

    /// With quick-assessment override
    #[inline]
    #[must_use]
    pub fn with_quick_assessment(mut self) -> Self {
        self.quick_assessment = true;
        self
    }
}

/// Outcome of assessing a stone header against a task context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    /// LOD depth the consumer should load
    pub level: u8,
    /// Justification for the last rule that decided the level
    pub reason: String,
    /// Delegate the deepest content to an external helper instead of
    /// loading it inline
    pub spawn_helper: bool,
    /// The stone's parsed fortune
    pub fortune: Fortune,
    /// The stone's channel, when recognized
    pub channel: Option<GlowChannel>,
}

/// Assess how much of a stone a task should load
///
/// Rules, in order:
/// 1. the channel's default depth (unknown channel defaults to 1)
/// 2. simple content clamps to scan depth
/// 3. complex content raises to detail depth, and with enough declared
///    levels delegates the deep end to a helper
/// 4. a task needing full context raises to detail depth
/// 5. quick assessment forces scan depth, overriding every prior raise
/// 6. handoff stones that are not simple warrant at least summary depth
///
/// Only the justification of the last rule that changed the level is kept.
#[must_use]
pub fn assess_required_lod(header: &Header, context: &TaskContext) -> Assessment {
    let fortune = header.parsed_fortune();
    let channel = header.glow_channel;

    let mut level = channel.map_or(1, |c| c.default_level());
    let mut reason = match channel {
        Some(c) => format!("{c} channel default"),
        None => "unknown channel default".to_string(),
    };
    let mut spawn_helper = false;

    if fortune.is_simple() && level > 0 {
        level = 0;
        reason = "simple content, scan depth suffices".to_string();
    }

    if fortune.is_complex() {
        if level < 2 {
            level = 2;
            reason = "complex content requires detail depth".to_string();
        }
        if header.lod_count >= SPAWN_HELPER_AT {
            spawn_helper = true;
        }
    }

    if context.needs_full_context && level < 2 {
        level = 2;
        reason = "task requires full context".to_string();
    }

    if context.quick_assessment && level != 0 {
        level = 0;
        reason = "quick assessment, scan depth only".to_string();
    }

    if header.stone_type.as_deref() == Some("handoff") && !fortune.is_simple() && level < 1 {
        level = 1;
        reason = "handoff warrants at least summary depth".to_string();
    }

    Assessment {
        level,
        reason,
        spawn_helper,
        fortune,
        channel,
    }
}
