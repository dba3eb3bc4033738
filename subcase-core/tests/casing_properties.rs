//! Property tests for stripping and casing

use proptest::prelude::*;
use std::sync::Arc;
use subcase_core::{
    BoundaryStripper, CasingRulesEngine, DefaultTagRecognizer, FixCasingOptions, LocaleRules,
    PreviousLine,
};

fn engine() -> CasingRulesEngine {
    CasingRulesEngine::new(Arc::new(LocaleRules::default()), Arc::new(DefaultTagRecognizer::new()))
}

fn options(previous: &str) -> FixCasingOptions<'_> {
    FixCasingOptions {
        change_name_cases: true,
        uppercase_after_break: true,
        previous_line: Some(PreviousLine {
            text: previous,
            gap_ms: 100.0,
        }),
    }
}

/// Subtitle-ish text: letters, punctuation, dialog dashes, brackets, simple tags
fn subtitle_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z]{1,6}",
            Just(" ".to_string()),
            Just(". ".to_string()),
            Just("? ".to_string()),
            Just("!".to_string()),
            Just("...".to_string()),
            Just(":".to_string()),
            Just("\n- ".to_string()),
            Just("<i>".to_string()),
            Just("</i>".to_string()),
            Just("[".to_string()),
            Just("]".to_string()),
            Just("\"".to_string()),
            Just("♪".to_string()),
            Just("john".to_string()),
            Just("www.".to_string()),
        ],
        0..16,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn strip_round_trips(text in "\\PC{0,40}") {
        let stripper = BoundaryStripper::new(&LocaleRules::default(), Arc::new(DefaultTagRecognizer::new()));
        let line = stripper.strip(&text);
        prop_assert_eq!(line.merged(), text);
    }

    #[test]
    fn strip_round_trips_subtitle_text(text in subtitle_text()) {
        let stripper = BoundaryStripper::new(&LocaleRules::default(), Arc::new(DefaultTagRecognizer::new()));
        let line = stripper.strip(&text);
        prop_assert_eq!(format!("{}{}{}", line.prefix(), line.core(), line.suffix()), text);
    }

    #[test]
    fn casing_is_idempotent(text in subtitle_text(), previous in prop_oneof![Just(""), Just("Done."), Just("and so")]) {
        let engine = engine();
        let once = engine.fix_text(&text, &["John"], &options(previous));
        let twice = engine.fix_text(&once, &["John"], &options(previous));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn no_placeholder_survives(text in subtitle_text()) {
        let once = engine().fix_text(&text, &["John", "Mary"], &options("Done."));
        prop_assert!(!once.contains("_@"));
    }

    #[test]
    fn literal_marker_is_preserved(head in "[a-z ]{0,10}", tail in "[a-z .]{0,10}") {
        let text = format!("{head} _@0_ john{tail}");
        let fixed = engine().fix_text(&text, &["John"], &options("Done."));
        prop_assert!(fixed.contains("_@0_"));
    }

    #[test]
    fn name_casing_follows_option(text in subtitle_text()) {
        let engine = engine();
        let keep = FixCasingOptions { change_name_cases: false, ..FixCasingOptions::default() };
        prop_assert_eq!(engine.fix_text(&text, &["John"], &keep), text);
    }
}
