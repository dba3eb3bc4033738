//! Casing over a paragraph list

use super::{CasingRulesEngine, FixCasingOptions, PreviousLine};
use crate::domain::paragraph::{apply_fix, FixReporter, ParagraphSequence};

/// Rule id reported for casing fixes
pub const RULE_FIX_CASING: &str = "Fix casing";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CasingPassOptions {
    pub change_name_cases: bool,
    pub uppercase_after_break: bool,
    /// Capitalize line starts that follow a closed sentence
    pub check_previous_line: bool,
}

impl Default for CasingPassOptions {
    fn default() -> Self {
        Self {
            change_name_cases: true,
            uppercase_after_break: true,
            check_previous_line: true,
        }
    }
}

/// Runs a [`CasingRulesEngine`] over every paragraph in order
#[derive(Debug, Clone, Copy)]
pub struct CasingPass<'a> {
    engine: &'a CasingRulesEngine,
}

impl<'a> CasingPass<'a> {
    pub fn new(engine: &'a CasingRulesEngine) -> Self {
        Self { engine }
    }

    /// Fix every paragraph; each line sees the already fixed previous line.
    ///
    /// Returns the number of paragraphs changed.
    pub fn fix_paragraphs<S, N, R>(
        &self,
        paragraphs: &mut S,
        names: &[N],
        options: &CasingPassOptions,
        reporter: &mut R,
    ) -> usize
    where
        S: ParagraphSequence + ?Sized,
        N: AsRef<str>,
        R: FixReporter + ?Sized,
    {
        let mut count = 0;

        for index in 0..paragraphs.len() {
            let previous = index
                .checked_sub(1)
                .and_then(|i| paragraphs.get_at(i))
                .map(|p| (p.text.clone(), p.end_ms));
            let Some(paragraph) = paragraphs.get_at(index) else {
                continue;
            };

            let (previous_text, gap_ms) = match &previous {
                Some((text, end_ms)) => (text.as_str(), paragraph.start_ms - end_ms),
                None => ("", 0.0),
            };
            let fix_options = FixCasingOptions {
                change_name_cases: options.change_name_cases,
                uppercase_after_break: options.uppercase_after_break,
                previous_line: options.check_previous_line.then_some(PreviousLine {
                    text: previous_text,
                    gap_ms,
                }),
            };

            let fixed = self.engine.fix_text(&paragraph.text, names, &fix_options);
            if apply_fix(paragraphs, index, fixed, RULE_FIX_CASING, reporter) {
                count += 1;
            }
        }

        tracing::debug!(count, "casing pass finished");
        reporter.report_summary(count, RULE_FIX_CASING);
        count
    }
}
