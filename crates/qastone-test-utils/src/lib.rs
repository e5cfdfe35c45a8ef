//! Testing utilities for the QA.Stone workspace
//!
//! Shared fixture contents and hand-rolled envelopes for exercising the
//! permissive corners of the format.

#![allow(missing_docs)]

use qastone_format::{GlowChannel, StoneBuilder};
use std::fmt::Write as _;

/// The short task content used by the concrete triage scenarios.
pub const TASK_CONTENT: &str = "Create GitHub repo for ztgi-ui, shared UI library.";

/// Content long enough to classify as complex (250+ words).
pub fn complex_content() -> String {
    let mut out = String::from(
        "Survey of the ingestion pipeline and everything feeding it. \
         The review touches each stage in turn.\n\n",
    );
    for i in 0..25 {
        let _ = writeln!(
            out,
            "Stage {i} accepts the previous batch, validates the field layout, \
             and forwards anything malformed to the quarantine queue for review."
        );
    }
    out
}

pub fn task_stone() -> String {
    StoneBuilder::new(TASK_CONTENT)
        .with_channel(GlowChannel::Task)
        .with_source_agent("fixture")
        .build()
}

pub fn stone_for(content: &str, channel: GlowChannel) -> String {
    StoneBuilder::new(content)
        .with_channel(channel)
        .with_source_agent("fixture")
        .build()
}

/// Compose an envelope by hand, bypassing the builder.
///
/// `declared_lod_count` goes into the header verbatim, whether or not it
/// matches `levels` — useful for advisory-count mismatch cases.
pub fn raw_stone(channel: &str, declared_lod_count: u32, levels: &[(u8, &str)]) -> String {
    let mut out = String::from("§QASTONE§\n");
    let _ = writeln!(out, "glow_channel: {channel}");
    let _ = writeln!(out, "lod_count: {declared_lod_count}");
    out.push_str("─\n");
    for (level, text) in levels {
        let _ = writeln!(out, "LOD-{level}: {text}");
        out.push_str("─\n");
    }
    out.push_str("§/QASTONE§");
    out
}
