//! Break-scan state machine
//!
//! Walks a core left to right. Each character is classified into a
//! [`Signal`] for the current state, and [`transition`] maps the pair to the
//! character's emission and the next state.

use crate::domain::{
    markup::{remove_tags, tag_len_at, TagRecognizer},
    names::NameTable,
    text::{is_punctuation, starts_with_ignore_case, to_upper},
};

/// Characters after which a sentence may end
pub(crate) const BREAK_CHARS: [char; 11] = ['.', '!', '?', ':', ';', ')', ']', '}', '(', '[', '{'];

/// Characters copied unchanged while waiting for the next sentence start
const PASS_CHARS: [char; 16] = [
    '"', '“', '`', '´', '\'', '(', ')', '<', '>', '!', '?', '.', '-', ' ', '\r', '\n',
];

/// State to return to after a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resume {
    Default,
    AfterBreak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasingState {
    Default,
    /// A sentence end was seen; the next visible letter is upper-cased
    AfterBreak,
    /// Inside a recognized tag ending at index `last`
    InTag { last: usize, resume: Resume },
}

impl From<Resume> for CasingState {
    fn from(resume: Resume) -> Self {
        match resume {
            Resume::Default => CasingState::Default,
            Resume::AfterBreak => CasingState::AfterBreak,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signal {
    TagStart { last: usize },
    TagChar { last: bool },
    SentenceEnd,
    Plain,
    Pass,
    EllipsisResume,
    Letter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Emit {
    Copy,
    Upper,
}

fn transition(state: CasingState, signal: Signal) -> (Emit, CasingState) {
    use CasingState::*;

    match (state, signal) {
        (InTag { resume, .. }, Signal::TagChar { last: true }) => (Emit::Copy, resume.into()),
        (InTag { .. }, _) => (Emit::Copy, state),

        (Default, Signal::TagStart { last }) => (
            Emit::Copy,
            InTag {
                last,
                resume: Resume::Default,
            },
        ),
        (Default, Signal::SentenceEnd) => (Emit::Copy, AfterBreak),
        (Default, _) => (Emit::Copy, Default),

        (AfterBreak, Signal::TagStart { last }) => (
            Emit::Copy,
            InTag {
                last,
                resume: Resume::AfterBreak,
            },
        ),
        (AfterBreak, Signal::EllipsisResume) => (Emit::Copy, Default),
        (AfterBreak, Signal::Letter) => (Emit::Upper, Default),
        (AfterBreak, _) => (Emit::Copy, AfterBreak),
    }
}

/// One run of the machine over a core
pub(crate) struct BreakScanner<'a> {
    core: &'a [char],
    prefix: &'a str,
    tags: &'a dyn TagRecognizer,
}

impl<'a> BreakScanner<'a> {
    pub(crate) fn new(core: &'a [char], prefix: &'a str, tags: &'a dyn TagRecognizer) -> Self {
        Self { core, prefix, tags }
    }

    /// Rewritten core; placeholders hit at a sentence start get their
    /// recorded original capitalized in `names`
    pub(crate) fn run(&self, names: &mut NameTable) -> String {
        let mut out = String::with_capacity(self.core.len());
        let mut state = CasingState::Default;

        for (i, &ch) in self.core.iter().enumerate() {
            let (emit, next) = transition(state, self.signal(state, i));
            match emit {
                Emit::Copy => out.push(ch),
                Emit::Upper => {
                    out.push(to_upper(ch));
                    if let Some((id, _)) = names.placeholder_at(self.core, i) {
                        names.capitalize_original(id);
                    }
                }
            }
            state = next;
        }

        out
    }

    fn signal(&self, state: CasingState, i: usize) -> Signal {
        if let CasingState::InTag { last, .. } = state {
            return Signal::TagChar { last: i >= last };
        }
        if let Some(len) = tag_len_at(self.core, i, self.tags) {
            return Signal::TagStart { last: i + len - 1 };
        }

        if state == CasingState::AfterBreak {
            self.after_break_signal(i)
        } else if self.is_sentence_end(i) {
            Signal::SentenceEnd
        } else {
            Signal::Plain
        }
    }

    fn after_break_signal(&self, i: usize) -> Signal {
        let ch = self.core[i];
        let seen = &self.core[..i];
        let next_is = |offset: usize, expected: char| self.core.get(i + offset) == Some(&expected);

        if PASS_CHARS.contains(&ch) {
            return Signal::Pass;
        }
        // body of an unrecognized one-letter tag: <x>, </x>
        if (seen.ends_with(&['<']) || seen.ends_with(&['<', '/'])) && next_is(1, '>') {
            return Signal::Pass;
        }
        if seen.ends_with(&['<']) && ch == '/' && next_is(2, '>') {
            return Signal::Pass;
        }
        if seen.ends_with(&['.', '.', '.', ' ']) {
            return Signal::EllipsisResume;
        }
        if BREAK_CHARS.contains(&ch) {
            return Signal::Pass;
        }
        Signal::Letter
    }

    fn is_sentence_end(&self, i: usize) -> bool {
        let ch = self.core[i];
        if BREAK_CHARS.contains(&ch) {
            let seen = &self.core[..=i];
            return match (ch, seen.iter().position(|&c| c == '[')) {
                // "I [motor roaring] love you"
                (']', Some(open)) if open > 1 => {
                    let before: String = seen[..open - 1].iter().collect();
                    before
                        .trim()
                        .chars()
                        .next_back()
                        .is_some_and(|c| !c.is_alphanumeric())
                }
                // "[ motor roaring ] hello"
                (']', None) if self.prefix.contains('[') => true,
                (':', _) => true,
                _ => self.ends_word(i),
            };
        }

        ch == '-' && self.prefix.contains('-') && self.closes_previous_line(i)
    }

    fn ends_word(&self, i: usize) -> bool {
        let after_word = self.core[..=i]
            .iter()
            .rposition(|&c| c == ' ')
            .is_some_and(|space| space + 1 < i && !is_in_middle_of_url(&self.core[space + 1..], i - space));

        after_word || matches!(self.core.get(i + 1), Some(' ' | '\r' | '\n'))
    }

    /// Dash right after a newline: does the line above end a sentence?
    fn closes_previous_line(&self, i: usize) -> bool {
        if i == 0 || self.core[i - 1] != '\n' {
            return false;
        }

        let above: String = self.core[..i - 1].iter().collect();
        let visible = remove_tags(above.trim_end(), self.tags);
        let visible = visible.trim_end();

        visible.ends_with(['.', '!', '?', ']', ')', ':'])
            || [". ♪", "! ♪", "? ♪"].iter().any(|end| visible.ends_with(end))
    }
}

/// `word` starts right after the last space; `idx` is the offset of the
/// character following the break candidate
fn is_in_middle_of_url(word: &[char], idx: usize) -> bool {
    if idx + 1 < word.len() && (word[idx].is_whitespace() || is_punctuation(word[idx])) {
        return false;
    }

    starts_with_ignore_case(word, "www.") || starts_with_ignore_case(word, "http")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{markup::DefaultTagRecognizer, names::NamePlaceholderCodec, strip::BoundaryStripper},
        language::{tables::GuardTable, LocaleRules},
    };
    use std::sync::Arc;

    fn scan(core: &str, prefix: &str) -> String {
        let chars: Vec<char> = core.chars().collect();
        let tags = DefaultTagRecognizer::new();
        BreakScanner::new(&chars, prefix, &tags).run(&mut NameTable::default())
    }

    #[test]
    fn test_transition_table() {
        assert_eq!(
            transition(CasingState::Default, Signal::SentenceEnd),
            (Emit::Copy, CasingState::AfterBreak)
        );
        assert_eq!(
            transition(CasingState::AfterBreak, Signal::Letter),
            (Emit::Upper, CasingState::Default)
        );
        assert_eq!(
            transition(CasingState::AfterBreak, Signal::EllipsisResume),
            (Emit::Copy, CasingState::Default)
        );
        let in_tag = CasingState::InTag {
            last: 3,
            resume: Resume::AfterBreak,
        };
        assert_eq!(
            transition(in_tag, Signal::TagChar { last: false }),
            (Emit::Copy, in_tag)
        );
        assert_eq!(
            transition(in_tag, Signal::TagChar { last: true }),
            (Emit::Copy, CasingState::AfterBreak)
        );
    }

    #[test]
    fn test_basic_break() {
        assert_eq!(scan("hello. world", ""), "hello. World");
        assert_eq!(scan("what? no! yes", ""), "what? No! Yes");
    }

    #[test]
    fn test_tag_after_break_keeps_waiting() {
        assert_eq!(scan("hello. <i>world</i>", ""), "hello. <i>World</i>");
        assert_eq!(scan("ok. {\\i1}fine", ""), "ok. {\\i1}Fine");
    }

    #[test]
    fn test_unknown_one_letter_tag_body_passes() {
        assert_eq!(scan("hi. <x>there", ""), "hi. <x>There");
    }

    #[test]
    fn test_bracket_rules() {
        assert_eq!(scan("I [motor roaring] love you", ""), "I [motor roaring] love you");
        assert_eq!(scan("Motor roaring ] hallo", "[ "), "Motor roaring ] Hallo");
        assert_eq!(scan("[noise] hey. you", ""), "[noise] Hey. You");
    }

    #[test]
    fn test_colon_always_breaks() {
        assert_eq!(scan("note:this", ""), "note:This");
    }

    #[test]
    fn test_url_is_not_a_break() {
        assert_eq!(scan("go to www.google.com now", ""), "go to www.google.com now");
        assert_eq!(scan("see http://a.b/c.d ok", ""), "see http://a.b/c.d ok");
    }

    #[test]
    fn test_ellipsis_continues_sentence() {
        assert_eq!(scan("well... you know", ""), "well... you know");
    }

    #[test]
    fn test_dash_continuation() {
        assert_eq!(scan("Sing! ♪\n- bye", "- "), "Sing! ♪\n- Bye");
        assert_eq!(scan("No way\n- yes", "- "), "No way\n- yes");
    }

    #[test]
    fn test_placeholder_original_capitalized() {
        let guards = GuardTable::default();
        let stripper = BoundaryStripper::new(&LocaleRules::default(), Arc::new(DefaultTagRecognizer::new()));
        let mut line = stripper.strip("ok. john came");
        let mut names = NamePlaceholderCodec::new(&guards).protect(&mut line, &["John"]);
        assert_eq!(line.core(), "ok. _@0_ came");

        let chars: Vec<char> = line.core().chars().collect();
        let out = BreakScanner::new(&chars, "", &DefaultTagRecognizer::new()).run(&mut names);
        assert_eq!(out, "ok. _@0_ came");
        assert_eq!(names.restore(&out, false), "ok. John came");
    }
}
