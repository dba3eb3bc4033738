//! Casing normalization
//!
//! [`CasingRulesEngine`] fixes one stripped line: names are protected,
//! the first letter is capitalized when the previous line closed a sentence,
//! letters after sentence breaks inside the line are upper-cased, and names
//! are restored. [`CasingPass`] runs it over a paragraph list.

pub mod classifier;
mod pass;
mod state;

pub use classifier::SentenceBoundaryClassifier;
pub use pass::{CasingPass, CasingPassOptions, RULE_FIX_CASING};
pub use state::{CasingState, Resume};

use crate::{
    domain::{
        markup::TagRecognizer,
        names::NamePlaceholderCodec,
        strip::{BoundaryStripper, StrippedLine},
        text::capitalize_first,
    },
    language::LocaleRules,
};
use state::{BreakScanner, BREAK_CHARS};
use std::sync::Arc;

/// The line rendered before the current one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviousLine<'a> {
    pub text: &'a str,
    /// Milliseconds between the previous line's end and the current line's start
    pub gap_ms: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixCasingOptions<'a> {
    /// Restore names in their name-list casing instead of the casing found
    pub change_name_cases: bool,
    /// Upper-case the first letter after each sentence break inside the line
    pub uppercase_after_break: bool,
    /// Capitalize the first letter when this line closed a sentence
    pub previous_line: Option<PreviousLine<'a>>,
}

impl FixCasingOptions<'_> {
    /// Only rewrite names to their preferred casing
    pub fn names_only() -> Self {
        Self {
            change_name_cases: true,
            ..Self::default()
        }
    }
}

#[derive(Clone)]
pub struct CasingRulesEngine {
    rules: Arc<LocaleRules>,
    stripper: BoundaryStripper,
    classifier: SentenceBoundaryClassifier,
}

impl std::fmt::Debug for CasingRulesEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CasingRulesEngine")
            .field("locale", &self.rules.code())
            .field("stripper", &self.stripper)
            .finish_non_exhaustive()
    }
}

impl CasingRulesEngine {
    pub fn new(rules: Arc<LocaleRules>, tags: Arc<dyn TagRecognizer>) -> Self {
        Self {
            stripper: BoundaryStripper::new(&rules, tags.clone()),
            classifier: SentenceBoundaryClassifier::new(rules.clone(), tags),
            rules,
        }
    }

    pub fn rules(&self) -> &Arc<LocaleRules> {
        &self.rules
    }

    pub fn stripper(&self) -> &BoundaryStripper {
        &self.stripper
    }

    pub fn classifier(&self) -> &SentenceBoundaryClassifier {
        &self.classifier
    }

    /// Fix the casing of `line`'s core in place
    pub fn fix_casing<S: AsRef<str>>(&self, line: &mut StrippedLine, names: &[S], options: &FixCasingOptions<'_>) {
        let mut table = NamePlaceholderCodec::new(self.rules.name_guards()).protect(line, names);

        if let Some(previous) = options.previous_line {
            if self
                .classifier
                .should_start_upper(line, previous.text, previous.gap_ms)
            {
                if line.core.starts_with("_@") {
                    let core: Vec<char> = line.core.chars().collect();
                    if let Some((id, _)) = table.placeholder_at(&core, 0) {
                        table.capitalize_original(id);
                    }
                } else {
                    line.core = capitalize_first(&line.core);
                }
            }
        }

        if options.uppercase_after_break && line.core.contains(BREAK_CHARS) {
            let core: Vec<char> = line.core.chars().collect();
            line.core = BreakScanner::new(&core, &line.prefix, self.stripper.tags().as_ref()).run(&mut table);
        }

        line.core = table.restore(&line.core, options.change_name_cases);
    }

    /// Strip, fix and merge a full line
    pub fn fix_text<S: AsRef<str>>(&self, text: &str, names: &[S], options: &FixCasingOptions<'_>) -> String {
        let mut line = self.stripper.strip(text);
        self.fix_casing(&mut line, names, options);
        let fixed = line.merged();
        if fixed != text {
            tracing::trace!(before = %text, after = %fixed, "casing changed");
        }
        fixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::markup::DefaultTagRecognizer;

    const NO_NAMES: &[&str] = &[];

    fn engine() -> CasingRulesEngine {
        CasingRulesEngine::new(Arc::new(LocaleRules::default()), Arc::new(DefaultTagRecognizer::new()))
    }

    fn full(previous: &str, gap_ms: f64) -> FixCasingOptions<'_> {
        FixCasingOptions {
            change_name_cases: true,
            uppercase_after_break: true,
            previous_line: Some(PreviousLine { text: previous, gap_ms }),
        }
    }

    #[test]
    fn test_name_casing() {
        let options = FixCasingOptions {
            change_name_cases: true,
            ..Default::default()
        };
        assert_eq!(
            engine().fix_text("hello john, how are you?", &["John"], &options),
            "hello John, how are you?"
        );
    }

    #[test]
    fn test_original_name_casing_kept() {
        let options = FixCasingOptions {
            uppercase_after_break: true,
            ..Default::default()
        };
        assert_eq!(engine().fix_text("ok. jOHN is here.", &["John"], &options), "ok. JOHN is here.");
    }

    #[test]
    fn test_leading_capital_after_closed_line() {
        assert_eq!(engine().fix_text("- and you?", NO_NAMES, &full("Fine.", 100.0)), "- And you?");
        assert_eq!(engine().fix_text("and you?", NO_NAMES, &full("I was", 100.0)), "and you?");
    }

    #[test]
    fn test_leading_placeholder_capitalized() {
        let options = FixCasingOptions {
            previous_line: Some(PreviousLine {
                text: "Look.",
                gap_ms: 0.0,
            }),
            ..Default::default()
        };
        assert_eq!(engine().fix_text("mary is here", &["Mary"], &options), "Mary is here");
    }

    #[test]
    fn test_break_scan_with_markup() {
        assert_eq!(
            engine().fix_text("<i>hi. how are you?</i>", NO_NAMES, &full("", 0.0)),
            "<i>Hi. How are you?</i>"
        );
    }

    #[test]
    fn test_leading_sound_cue_capitalized_like_mid_line() {
        assert_eq!(
            engine().fix_text("- {sighs} okay", NO_NAMES, &full("Done.", 100.0)),
            "- {Sighs} Okay"
        );
        assert_eq!(
            engine().fix_text("yes. {sighs} okay", NO_NAMES, &full("Done.", 100.0)),
            "Yes. {Sighs} Okay"
        );
    }

    #[test]
    fn test_break_scan_skipped_without_option() {
        let options = FixCasingOptions::default();
        assert_eq!(engine().fix_text("hi. there", NO_NAMES, &options), "hi. there");
    }

    #[test]
    fn test_idempotent_on_sample() {
        let e = engine();
        let once = e.fix_text("well... you know. yes! [sighs] john", &["John"], &full("ok", 10.0));
        let twice = e.fix_text(&once, &["John"], &full("ok", 10.0));
        assert_eq!(once, twice);
    }
}
