//! Invariants of the converter over arbitrary sequences of supported tokens.

use proptest::prelude::*;
use wamark_babel::convert_to_messaging_format;
use wamark_babel::formats::whatsapp::{relocate_all, relocation_pass, Relocation, EMPHASIS_TAGS};
use wamark_babel::transforms::WhitespaceStats;

const TOKENS: &[&str] = &[
    "<b>", "</b>", "<i>", "</i>", "<strike>", "</strike>", "&nbsp;", " ", "a", "word",
];

fn snapshot() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(TOKENS), 0..24).prop_map(|tokens| tokens.concat())
}

fn tag_count(text: &str, tag: &str) -> usize {
    text.matches(format!("<{tag}>").as_str()).count()
        + text.matches(format!("</{tag}>").as_str()).count()
}

proptest! {
    #[test]
    fn whitespace_is_preserved(input in snapshot()) {
        let output = convert_to_messaging_format(&input);
        prop_assert_eq!(WhitespaceStats::of(&input), WhitespaceStats::of(&output));
    }

    #[test]
    fn every_tag_collapses_to_one_marker(input in snapshot()) {
        let output = convert_to_messaging_format(&input);
        for tag in EMPHASIS_TAGS.iter() {
            prop_assert_eq!(output.matches(tag.marker).count(), tag_count(&input, tag.tag));
            prop_assert_eq!(tag_count(&output, tag.tag), 0);
        }
        prop_assert!(!output.contains('<'));
    }

    #[test]
    fn fixed_point_is_stable_under_another_pass(input in snapshot()) {
        let relocated = relocate_all(&input, Relocation::FixedPoint);
        prop_assert_eq!(relocation_pass(&relocated), relocated);
    }

    #[test]
    fn fixed_point_leaves_no_whitespace_inside_tags(input in snapshot()) {
        let relocated = relocate_all(&input, Relocation::FixedPoint);
        for tag in EMPHASIS_TAGS.iter() {
            let open = tag.open();
            let close = tag.close();
            let leading = format!("{open}&nbsp;");
            let trailing_nbsp = format!("&nbsp;{close}");
            let trailing_space = format!(" {close}");
            prop_assert!(!relocated.contains(leading.as_str()));
            prop_assert!(!relocated.contains(trailing_nbsp.as_str()));
            prop_assert!(!relocated.contains(trailing_space.as_str()));
        }
    }

    #[test]
    fn legacy_and_fixed_point_agree_once_legacy_is_stable(input in snapshot()) {
        let legacy = relocate_all(&input, Relocation::legacy());
        if relocation_pass(&legacy) == legacy {
            prop_assert_eq!(legacy, relocate_all(&input, Relocation::FixedPoint));
        }
    }

    #[test]
    fn relocated_input_survives_legacy_passes_unchanged(input in snapshot()) {
        let relocated = relocate_all(&input, Relocation::FixedPoint);
        let legacy = relocate_all(&relocated, Relocation::legacy());
        prop_assert_eq!(&legacy, &relocated);
        prop_assert_eq!(relocation_pass(&legacy), relocated);
    }

    #[test]
    fn conversion_is_idempotent_on_its_output(input in snapshot()) {
        let once = convert_to_messaging_format(&input);
        prop_assert_eq!(convert_to_messaging_format(&once), once.clone());
    }
}
