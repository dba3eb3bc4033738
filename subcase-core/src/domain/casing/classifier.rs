//! Whether a line starts a new sentence

use crate::{
    domain::{
        markup::{remove_tags, TagRecognizer},
        strip::StrippedLine,
        text::starts_with_ignore_case,
    },
    language::LocaleRules,
};
use std::sync::Arc;

/// Characters that close the previous line as a sentence
const CLOSING_CHARS: [char; 7] = ['.', '!', '?', ']', ')', ':', '_'];

/// Decides if a line's first letter should be upper-cased, given the
/// previous rendered line and the gap before the current one
#[derive(Clone)]
pub struct SentenceBoundaryClassifier {
    rules: Arc<LocaleRules>,
    tags: Arc<dyn TagRecognizer>,
}

impl SentenceBoundaryClassifier {
    pub fn new(rules: Arc<LocaleRules>, tags: Arc<dyn TagRecognizer>) -> Self {
        Self { rules, tags }
    }

    /// Rules are checked in order; the first that applies decides
    pub fn should_start_upper(&self, line: &StrippedLine, previous_line: &str, gap_ms: f64) -> bool {
        let core: Vec<char> = line.core().chars().collect();

        // URLs stay as written
        if starts_with_ignore_case(&core, "www.") || starts_with_ignore_case(&core, "http") {
            return false;
        }

        if self.rules.camel_case_product_names() && is_camel_case_product(&core) {
            return false;
        }

        let prefix = line.prefix();
        if prefix.contains("...") || prefix.contains('…') {
            return false;
        }

        if gap_ms > self.rules.sentence_gap_ms() {
            return true;
        }

        let visible = remove_tags(previous_line, self.tags.as_ref());
        let previous = visible.trim_end().trim_end_matches(['"', '”']).trim_end();
        let Some(mut last) = previous.chars().next_back() else {
            return true;
        };

        if last == '♪' {
            let before = previous[..previous.len() - '♪'.len_utf8()].trim_end();
            if let Some(ch) = before.chars().next_back() {
                last = ch;
            }
        }

        if CLOSING_CHARS.contains(&last) {
            return true;
        }

        (previous.ends_with('♪') || previous.ends_with('♫')) && !prefix.contains(['♪', '♫'])
    }
}

/// "iPhone"-style: `i` followed by an upper-case letter
fn is_camel_case_product(core: &[char]) -> bool {
    match core {
        [first, second, ..] => *first == 'i' && second.is_uppercase(),
        _ => false,
    }
}
