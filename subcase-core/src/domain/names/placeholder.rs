//! Name protection with placeholder tokens
//!
//! Known names in a core are swapped for `_@{n}_` tokens before casing runs,
//! so the casing state machine never touches them, and are swapped back
//! afterwards.

use crate::{
    domain::{
        strip::StrippedLine,
        text::{capitalize_first, find_ignore_case, to_lower},
    },
    language::tables::GuardTable,
};
use smallvec::SmallVec;

/// Marker that opens every placeholder token
pub const TOKEN_MARKER: &str = "_@";

/// One protected name occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePlaceholder {
    /// Casing as it appeared in the line
    pub original: String,
    /// Casing from the name list
    pub preferred: String,
}

/// Placeholders created for one line, indexed by token id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTable {
    entries: SmallVec<[NamePlaceholder; 4]>,
}

impl NameTable {
    /// Token text for placeholder `id`
    pub fn token(id: usize) -> String {
        format!("{TOKEN_MARKER}{id}_")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&NamePlaceholder> {
        self.entries.get(id)
    }

    fn push(&mut self, original: String, preferred: &str) -> usize {
        self.entries.push(NamePlaceholder {
            original,
            preferred: preferred.to_string(),
        });
        self.entries.len() - 1
    }

    /// Upper-case the first letter of the recorded original casing
    pub fn capitalize_original(&mut self, id: usize) {
        if let Some(entry) = self.entries.get_mut(id) {
            entry.original = capitalize_first(&entry.original);
        }
    }

    /// Placeholder token at `chars[start..]`: `(id, token length)`
    pub fn placeholder_at(&self, chars: &[char], start: usize) -> Option<(usize, usize)> {
        let rest = chars.get(start..)?;
        if rest.len() < 4 || rest[0] != '_' || rest[1] != '@' {
            return None;
        }

        let digits = rest[2..].iter().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 || rest.get(2 + digits) != Some(&'_') {
            return None;
        }

        let id: usize = rest[2..2 + digits].iter().collect::<String>().parse().ok()?;
        (id < self.entries.len()).then_some((id, digits + 3))
    }

    /// Swap every token back for its name, in one pass.
    ///
    /// `use_preferred` selects the name-list casing instead of the original.
    /// Text that only looks like a token is copied unchanged.
    pub fn restore(&self, text: &str, use_preferred: bool) -> String {
        if self.entries.is_empty() || !text.contains(TOKEN_MARKER) {
            return text.to_string();
        }

        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut i = 0;
        while i < chars.len() {
            match self.placeholder_at(&chars, i) {
                Some((id, len)) => {
                    let entry = &self.entries[id];
                    out.push_str(if use_preferred { &entry.preferred } else { &entry.original });
                    i += len;
                }
                None => {
                    out.push(chars[i]);
                    i += 1;
                }
            }
        }
        out
    }
}

#[inline]
fn may_precede_name(ch: char) -> bool {
    matches!(ch, ' ' | '-' | '"' | '\'' | '>' | '[' | '“' | '\n' | '\r')
}

#[inline]
fn may_follow_name(ch: char) -> bool {
    matches!(
        ch,
        ' ' | ',' | '.' | '!' | '?' | ':' | ';' | '\'' | ')' | ']' | '-' | '<' | '”' | '"' | '\r' | '\n'
    )
}

/// Replaces known names in a core with placeholders
#[derive(Debug, Clone, Copy)]
pub struct NamePlaceholderCodec<'a> {
    guards: &'a GuardTable,
}

impl<'a> NamePlaceholderCodec<'a> {
    pub fn new(guards: &'a GuardTable) -> Self {
        Self { guards }
    }

    /// Protect every whole-word occurrence of `names` in the line's core.
    ///
    /// Trailing periods are moved out of the core before and after matching.
    /// A core that already contains the token marker is left alone and an
    /// empty table is returned.
    pub fn protect<S: AsRef<str>>(&self, line: &mut StrippedLine, names: &[S]) -> NameTable {
        let mut table = NameTable::default();
        line.move_trailing_dots_to_suffix();

        if names.is_empty() {
            return table;
        }
        if line.core.contains(TOKEN_MARKER) {
            tracing::debug!(core = %line.core, "core already contains placeholder marker, names not protected");
            return table;
        }

        let mut text: Vec<char> = line.core.chars().collect();
        for name in names {
            let name = name.as_ref();
            let pattern: Vec<char> = name.chars().map(to_lower).collect();
            if pattern.is_empty() {
                continue;
            }

            let mut from = 0;
            while let Some(start) = find_ignore_case(&text, &pattern, from) {
                let end = start + pattern.len();
                let whole_word = (start == 0 || may_precede_name(text[start - 1]))
                    && text.get(end).map_or(true, |&c| may_follow_name(c));

                if whole_word && !self.guards.rejects(name, &text, start, pattern.len()) {
                    let original: String = text[start..end].iter().collect();
                    let id = table.push(original, name);
                    let token: Vec<char> = NameTable::token(id).chars().collect();
                    from = start + token.len();
                    text.splice(start..end, token);
                } else {
                    from = start + 1;
                }
            }
        }

        line.core = text.into_iter().collect();
        line.move_trailing_dots_to_suffix();
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{markup::DefaultTagRecognizer, strip::BoundaryStripper},
        language::LocaleRules,
    };
    use std::sync::Arc;

    fn strip(text: &str) -> StrippedLine {
        BoundaryStripper::new(&LocaleRules::default(), Arc::new(DefaultTagRecognizer::new())).strip(text)
    }

    #[test]
    fn test_protect_and_restore() {
        let rules = LocaleRules::default();
        let codec = NamePlaceholderCodec::new(rules.name_guards());
        let mut line = strip("i met JOHN and mary.");
        let table = codec.protect(&mut line, &["John", "Mary"]);

        assert_eq!(line.core(), "i met _@0_ and _@1_");
        assert_eq!(line.suffix(), ".");
        assert_eq!(table.len(), 2);
        assert_eq!(table.restore(line.core(), false), "i met JOHN and mary");
        assert_eq!(table.restore(line.core(), true), "i met John and Mary");
    }

    #[test]
    fn test_partial_words_not_protected() {
        let rules = LocaleRules::default();
        let codec = NamePlaceholderCodec::new(rules.name_guards());
        let mut line = strip("johnny and ajohn");
        let table = codec.protect(&mut line, &["John"]);
        assert!(table.is_empty());
        assert_eq!(line.core(), "johnny and ajohn");
    }

    #[test]
    fn test_dont_guard() {
        let rules = LocaleRules::default();
        let codec = NamePlaceholderCodec::new(rules.name_guards());
        let mut line = strip("don't go, don");
        let table = codec.protect(&mut line, &["Don"]);
        assert_eq!(line.core(), "don't go, _@0_");
        assert_eq!(table.restore(line.core(), true), "don't go, Don");
    }

    #[test]
    fn test_existing_marker_skips_protection() {
        let rules = LocaleRules::default();
        let codec = NamePlaceholderCodec::new(rules.name_guards());
        let mut line = strip("user _@0_ and john");
        let table = codec.protect(&mut line, &["John"]);
        assert!(table.is_empty());
        assert_eq!(line.core(), "user _@0_ and john");
    }

    #[test]
    fn test_restore_ignores_unknown_tokens() {
        let mut table = NameTable::default();
        table.push("bob".to_string(), "Bob");
        assert_eq!(table.restore("_@0_ _@7_ _@x_ _@", true), "Bob _@7_ _@x_ _@");
    }

    #[test]
    fn test_placeholder_at_and_capitalize() {
        let mut table = NameTable::default();
        table.push("bob".to_string(), "Bob");
        let chars: Vec<char> = "hi _@0_".chars().collect();
        assert_eq!(table.placeholder_at(&chars, 3), Some((0, 4)));
        assert_eq!(table.placeholder_at(&chars, 0), None);

        table.capitalize_original(0);
        assert_eq!(table.get(0).map(|e| e.original.as_str()), Some("Bob"));
    }

    #[test]
    fn test_dots_moved_even_without_names() {
        let rules = LocaleRules::default();
        let codec = NamePlaceholderCodec::new(rules.name_guards());
        let mut line = strip("so...");
        let table = codec.protect::<&str>(&mut line, &[]);
        assert!(table.is_empty());
        assert_eq!((line.core(), line.suffix()), ("so", "..."));
    }
}
