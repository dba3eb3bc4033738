//! Missing period insertion at line ends
//!
//! Each paragraph is judged against its successor. A period is added when
//! the line ends open but the next line starts like a new sentence, and at
//! dialog breaks ("\n- ") where the first speaker's line ends in a letter.

use crate::{
    domain::{
        markup::{remove_tags, TagRecognizer},
        names::NameOracle,
        paragraph::{apply_fix, FixReporter, Paragraph, ParagraphSequence},
        strip::BoundaryStripper,
        text::{is_all_upper, to_upper},
    },
    language::LocaleRules,
};
use std::sync::Arc;

/// Rule id reported for inserted periods
pub const RULE_ADD_PERIOD: &str = "Add missing period at end of line";

const DO_NOT_ADD_AFTER: &str = ",.!?:;>-])♪♫…、。";
const CLOSED_ENDINGS: &str = ")]*#¶.!?";
const URL_PREFIXES: [&str; 3] = ["http://", "https://", "www."];
const DIALOG_BREAKS: [&str; 4] = ["\n -", "\n-", "\n<i>-", "\n<i> -"];

/// A single-line URL or a bare `name.domain.tld`-like token
pub fn is_one_line_url(text: &str) -> bool {
    if text.contains([' ', '\n']) {
        return false;
    }

    let lower = text.to_lowercase();
    if URL_PREFIXES.iter().any(|prefix| lower.starts_with(prefix)) {
        return true;
    }

    let parts: Vec<&str> = text.split('.').filter(|part| !part.is_empty()).collect();
    parts.len() == 3 && (2..=6).contains(&parts[2].chars().count())
}

#[derive(Clone)]
pub struct PeriodInsertionHeuristic {
    rules: Arc<LocaleRules>,
    tags: Arc<dyn TagRecognizer>,
    stripper: BoundaryStripper,
}

impl std::fmt::Debug for PeriodInsertionHeuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PeriodInsertionHeuristic")
            .field("locale", &self.rules.code())
            .finish_non_exhaustive()
    }
}

impl PeriodInsertionHeuristic {
    pub fn new(rules: Arc<LocaleRules>, tags: Arc<dyn TagRecognizer>) -> Self {
        Self {
            stripper: BoundaryStripper::new(&rules, tags.clone()),
            rules,
            tags,
        }
    }

    /// Add missing periods across `paragraphs`, returning the number of fixes
    pub fn run<S, O, R>(&self, paragraphs: &mut S, oracle: &O, reporter: &mut R) -> usize
    where
        S: ParagraphSequence + ?Sized,
        O: NameOracle + ?Sized,
        R: FixReporter + ?Sized,
    {
        let mut count = 0;

        for index in 0..paragraphs.len() {
            let next = paragraphs.get_at(index + 1).cloned();
            let fixed = paragraphs
                .get_at(index)
                .and_then(|paragraph| self.line_end_fix(paragraph, next.as_ref(), oracle));
            if let Some(fixed) = fixed {
                if apply_fix(paragraphs, index, fixed, RULE_ADD_PERIOD, reporter) {
                    count += 1;
                }
            }

            let fixed = paragraphs
                .get_at(index)
                .and_then(|paragraph| self.dialog_break_fix(&paragraph.text));
            if let Some(fixed) = fixed {
                if apply_fix(paragraphs, index, fixed, RULE_ADD_PERIOD, reporter) {
                    count += 1;
                }
            }
        }

        tracing::debug!(count, "period insertion finished");
        reporter.report_summary(count, RULE_ADD_PERIOD);
        count
    }

    /// Period (or `?`/`!`) at the end of `paragraph`, judged by the next line
    fn line_end_fix<O>(&self, paragraph: &Paragraph, next: Option<&Paragraph>, oracle: &O) -> Option<String>
    where
        O: NameOracle + ?Sized,
    {
        let text = paragraph.text.as_str();
        let next = next?;
        if is_one_line_url(text) || text.contains(['♪', '♫']) || text.ends_with('\'') {
            return None;
        }

        let next_visible = remove_tags(&next.text, self.tags.as_ref());
        let next_text = next_visible.trim_start_matches(['-', '"', '„']).trim_start();
        let visible = remove_tags(text, self.tags.as_ref()).replace(['\u{200B}', '\u{FEFF}'], "");
        let visible = visible.trim_end();

        let next_starts_upper = next_text.chars().next().is_some_and(char::is_uppercase);
        let ends_open = visible
            .chars()
            .next_back()
            .is_some_and(|c| !DO_NOT_ADD_AFTER.contains(c));

        if next_starts_upper && !next.text.is_empty() && ends_open {
            let unquoted = visible.trim_end_matches(['\'', '"', '“', '”']).trim_end();
            let unclosed = unquoted
                .chars()
                .next_back()
                .is_some_and(|c| !CLOSED_ENDINGS.contains(c));
            let is_close = next.start_ms - paragraph.end_ms < self.rules.close_gap_ms();

            if unclosed && !is_all_upper(text) && (!is_close || !self.is_known_uppercase_prefix(next_text, oracle)) {
                return Some(add_period(text, visible));
            }
            return None;
        }

        let ends_in_letter = text
            .chars()
            .next_back()
            .is_some_and(|c| self.rules.letters().is_letter_or_number(c));
        if !ends_in_letter || is_all_upper(text) {
            return None;
        }

        let next_line = self.stripper.strip(&next.text);
        let next_core = next_line.core();
        if !next_core.chars().next().is_some_and(char::is_uppercase) || is_all_upper(next_core) {
            return None;
        }

        let mark = match text.chars().rev().find(|c| ".!?¿¡".contains(*c)) {
            Some('¿') => '?',
            Some('¡') => '!',
            _ => '.',
        };
        let mut fixed = text.to_string();
        fixed.push(mark);
        Some(fixed)
    }

    /// Period before a "\n- " dialog break when the first line ends in a letter
    fn dialog_break_fix(&self, text: &str) -> Option<String> {
        let mut chars: Vec<char> = text.chars().collect();
        if chars.len() <= 4 {
            return None;
        }

        let at = DIALOG_BREAKS
            .iter()
            .find_map(|pattern| find_break(&chars, pattern, 3))?;
        if !to_upper(chars[at - 1]).is_uppercase() {
            return None;
        }

        let head: String = chars[..at].iter().collect();
        let line = self.stripper.strip(&head);
        let prefix = line.prefix().trim_end();
        let mark = if prefix.ends_with('¿') {
            '?'
        } else if prefix.ends_with('¡') {
            '!'
        } else {
            '.'
        };

        chars.insert(at, mark);
        Some(chars.into_iter().collect())
    }

    /// Next line starts with something that is always upper-case: "I",
    /// an honorific, or a name
    fn is_known_uppercase_prefix<O>(&self, text: &str, oracle: &O) -> bool
    where
        O: NameOracle + ?Sized,
    {
        let starts_with_any = |prefixes: &[String]| prefixes.iter().any(|p| text.starts_with(p.as_str()));
        if starts_with_any(self.rules.pronoun_prefixes()) || starts_with_any(self.rules.honorifics()) {
            return true;
        }

        // first word, then first two words ("Bill Gates")
        let mut words = 0;
        for (i, c) in text.char_indices() {
            if c.is_whitespace() {
                words += 1;
                if oracle.is_name(&text[..i]) {
                    return true;
                }
                if words == 2 {
                    return false;
                }
            }
        }

        oracle.is_name(text)
    }
}

fn add_period(text: &str, visible: &str) -> String {
    if text.ends_with('>') {
        let mut fixed = text.to_string();
        if let Some(pos) = text.rfind('<').filter(|&pos| pos > 0) {
            fixed.insert(pos, '.');
        }
        fixed
    } else if text.ends_with('“') && visible.starts_with('„') {
        format!("{}.“", text.trim_end_matches('“'))
    } else if text.ends_with('"') && visible.starts_with('"') {
        format!("{}.\"", text.trim_end_matches('"'))
    } else if text.lines().next_back().is_some_and(is_one_line_url) {
        text.to_string()
    } else {
        format!("{text}.")
    }
}

fn find_from(chars: &[char], pattern: &str, from: usize) -> Option<usize> {
    let pattern: Vec<char> = pattern.chars().collect();
    if chars.len() < pattern.len() {
        return None;
    }
    (from..=chars.len() - pattern.len()).find(|&i| chars[i..i + pattern.len()] == pattern[..])
}

/// First `pattern` hit whose line break, counting a preceding `\r`, starts at or after `from`
fn find_break(chars: &[char], pattern: &str, from: usize) -> Option<usize> {
    let mut start = from;
    while let Some(newline) = find_from(chars, pattern, start) {
        let at = if newline > 0 && chars[newline - 1] == '\r' { newline - 1 } else { newline };
        if at >= from {
            return Some(at);
        }
        start = newline + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{markup::DefaultTagRecognizer, names::NameList, paragraph::FixLog};

    fn heuristic() -> PeriodInsertionHeuristic {
        PeriodInsertionHeuristic::new(Arc::new(LocaleRules::default()), Arc::new(DefaultTagRecognizer::new()))
    }

    fn run_pair(first: &str, second: &str, gap_ms: f64) -> String {
        let mut paragraphs = vec![
            Paragraph::new(first, 0.0, 1000.0),
            Paragraph::new(second, 1000.0 + gap_ms, 3000.0),
        ];
        heuristic().run(&mut paragraphs, &NameList::parse("John\nBill Gates"), &mut FixLog::new());
        paragraphs.swap_remove(0).text
    }

    #[test]
    fn test_one_line_url() {
        assert!(is_one_line_url("www.example.com"));
        assert!(is_one_line_url("HTTPS://x.y"));
        assert!(is_one_line_url("subs.example.org"));
        assert!(!is_one_line_url("visit www.example.com"));
        assert!(!is_one_line_url("a.b.verylongtld"));
        assert!(!is_one_line_url("Hello"));
    }

    #[test]
    fn test_adds_period_before_new_sentence() {
        assert_eq!(run_pair("Good morning", "How are you?", 100.0), "Good morning.");
        assert_eq!(run_pair("<i>Good morning</i>", "How are you?", 100.0), "<i>Good morning.</i>");
        assert_eq!(run_pair("\"Good morning\"", "How are you?", 100.0), "\"Good morning.\"");
        assert_eq!(run_pair("„Guten Morgen“", "Wie geht's?", 100.0), "„Guten Morgen.“");
    }

    #[test]
    fn test_no_period_when_line_is_closed_or_next_is_lower() {
        assert_eq!(run_pair("Good morning,", "How are you?", 100.0), "Good morning,");
        assert_eq!(run_pair("Good morning", "how are you?", 100.0), "Good morning");
        assert_eq!(run_pair("GOOD MORNING", "How are you?", 100.0), "GOOD MORNING");
        assert_eq!(run_pair("Sing ♪", "How are you?", 100.0), "Sing ♪");
        assert_eq!(run_pair("www.example.com", "How are you?", 100.0), "www.example.com");
    }

    #[test]
    fn test_known_uppercase_prefix_only_when_close() {
        assert_eq!(run_pair("So what", "I think so", 100.0), "So what");
        assert_eq!(run_pair("So what", "I think so", 1000.0), "So what.");
        assert_eq!(run_pair("Ask", "Dr. Who", 100.0), "Ask");
        assert_eq!(run_pair("Ask", "John is here", 100.0), "Ask");
        assert_eq!(run_pair("Ask", "Bill Gates knows", 100.0), "Ask");
        assert_eq!(run_pair("Ask", "John", 100.0), "Ask");
        assert_eq!(run_pair("Ask", "Mary is here", 100.0), "Ask.");
    }

    #[test]
    fn test_ends_in_letter_rule() {
        assert_eq!(run_pair("Hello there", "...Bye", 100.0), "Hello there.");
        assert_eq!(run_pair("¿Qué pasa", "...Nada", 100.0), "¿Qué pasa?");
        assert_eq!(run_pair("¡Vamos", "...Ya", 100.0), "¡Vamos!");
        assert_eq!(run_pair("Hello there", "...bye", 100.0), "Hello there");
    }

    #[test]
    fn test_last_paragraph_untouched_without_dialog() {
        let mut paragraphs = vec![Paragraph::new("The end", 0.0, 1000.0)];
        assert_eq!(heuristic().run(&mut paragraphs, &NameList::new(), &mut FixLog::new()), 0);
        assert_eq!(paragraphs[0].text, "The end");
    }

    #[test]
    fn test_dialog_break() {
        let fix = |text: &str| {
            let mut paragraphs = vec![Paragraph::new(text, 0.0, 1000.0)];
            let mut log = FixLog::new();
            let count = heuristic().run(&mut paragraphs, &NameList::new(), &mut log);
            assert_eq!(log.summary(RULE_ADD_PERIOD), Some(count));
            paragraphs.swap_remove(0).text
        };

        assert_eq!(fix("- Hi there\n- Bye"), "- Hi there.\n- Bye");
        assert_eq!(fix("- ¿Qué pasa\n- Nada"), "- ¿Qué pasa?\n- Nada");
        assert_eq!(fix("- ¡Vamos\n- Sí"), "- ¡Vamos!\n- Sí");
        assert_eq!(fix("- Ok.\n- Bye"), "- Ok.\n- Bye");
        assert_eq!(fix("<i>- wait\r\n<i>- what"), "<i>- wait.\r\n<i>- what");
        assert_eq!(fix("- 42\n- Bye"), "- 42\n- Bye");
    }

    #[test]
    fn test_dialog_break_too_close_to_start() {
        let fix = |text: &str| {
            let mut paragraphs = vec![Paragraph::new(text, 0.0, 1000.0)];
            heuristic().run(&mut paragraphs, &NameList::new(), &mut FixLog::new());
            paragraphs.swap_remove(0).text
        };

        assert_eq!(fix("Hi\r\n- yo"), "Hi\r\n- yo");
        assert_eq!(fix("Hi\n- yo"), "Hi\n- yo");
        assert_eq!(fix("Hi\r\n- yo\r\n- Bye"), "Hi\r\n- yo.\r\n- Bye");
        assert_eq!(fix("Hey\r\n- yo"), "Hey.\r\n- yo");
    }
}
