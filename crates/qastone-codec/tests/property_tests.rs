//! Property suites for the codec: round-tripping, detection, assessment
//! monotonicity, cache consistency, and token accounting.

use proptest::prelude::*;
use qastone_codec::prelude::*;
use qastone_codec::MAX_LEVEL;
use qastone_test_utils::raw_stone;

/// Payload text that cannot collide with the envelope grammar: no `§`,
/// no `─`, no `-` (so `LOD-` cannot appear).
fn payload() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Z0-9 .,!?\n]{0,300}").expect("valid regex")
}

fn channel() -> impl Strategy<Value = GlowChannel> {
    prop_oneof![
        Just(GlowChannel::Task),
        Just(GlowChannel::Context),
        Just(GlowChannel::Handoff),
        Just(GlowChannel::Query),
        Just(GlowChannel::Data),
    ]
}

proptest! {
    #[test]
    fn built_stones_round_trip_their_content(content in payload(), ch in channel()) {
        let codec = StoneCodec::new();
        let stone = StoneBuilder::new(content.as_str()).with_channel(ch).build();
        prop_assert_eq!(codec.extract_lod(&stone, 2), content.trim());
    }

    #[test]
    fn built_stones_are_always_detected(content in payload(), ch in channel()) {
        let stone = StoneBuilder::new(content.as_str()).with_channel(ch).build();
        prop_assert!(is_stone(&stone));
    }

    #[test]
    fn text_without_the_marker_is_never_a_stone(content in payload()) {
        prop_assert!(!is_stone(&content));
    }

    #[test]
    fn channel_survives_build_and_parse(content in payload(), ch in channel()) {
        let codec = StoneCodec::new();
        let stone = StoneBuilder::new(content.as_str()).with_channel(ch).build();
        let header = codec.parse_header(&stone).unwrap();
        prop_assert_eq!(header.glow_channel, Some(ch));
    }

    #[test]
    fn assessment_is_monotonic_in_full_context(
        ch in "(task|context|handoff|query|data|mystery)",
        complexity in "(simple|medium|complex|)",
        stone_type in "(clipboard|handoff|artifact)",
        lod_count in 0u32..6,
    ) {
        let stone = format!(
            "§QASTONE§\nglow_channel: {ch}\nstone_type: {stone_type}\n\
             fortune: {ch}:general:{complexity}\nlod_count: {lod_count}\n─\n§/QASTONE§"
        );
        let header = Header::parse(&stone).unwrap();

        let base = assess_required_lod(&header, &TaskContext::new()).level;
        let raised = assess_required_lod(
            &header,
            &TaskContext::new().with_full_context(),
        ).level;
        prop_assert!(raised >= base);
    }

    #[test]
    fn extraction_is_idempotent_and_cache_transparent(
        content in payload(),
        level in 0u8..=3,
    ) {
        let codec = StoneCodec::new();
        let stone = StoneBuilder::new(content.as_str()).build();

        let first = codec.extract_lod(&stone, level);
        let cached = codec.extract_lod(&stone, level);
        codec.clear_caches();
        let fresh = codec.extract_lod(&stone, level);

        prop_assert_eq!(&first, &cached);
        prop_assert_eq!(&first, &fresh);
    }

    #[test]
    fn token_accounting_identities(content in payload(), loaded_level in 0u8..=3) {
        let codec = StoneCodec::new();
        let stone = StoneBuilder::new(content.as_str()).build();

        let savings = codec.token_savings(&stone, loaded_level);
        prop_assert!(savings.full_tokens >= savings.loaded_tokens);
        prop_assert!(savings.loaded_tokens >= savings.header_tokens);
        prop_assert_eq!(savings.saved, savings.full_tokens - savings.loaded_tokens);

        let all = codec.token_savings(&stone, MAX_LEVEL);
        prop_assert_eq!(all.saved, 0);
    }

    #[test]
    fn hand_rolled_stones_extract_what_they_declare(
        scan in "[a-z ]{1,40}",
        summary in "[a-z ]{1,80}",
    ) {
        let codec = StoneCodec::new();
        let stone = raw_stone("context", 2, &[(0, scan.trim()), (1, summary.trim())]);

        prop_assert_eq!(codec.extract_lod(&stone, 0), scan.trim());
        prop_assert_eq!(codec.extract_lod(&stone, 1), summary.trim());
        prop_assert_eq!(codec.extract_lod(&stone, 3), "");
    }
}
