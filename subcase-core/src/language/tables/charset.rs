//! Character lookup sets with O(1) membership tests

use std::collections::HashSet;
use std::fmt;

/// Set of characters built from a string
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CharSet {
    chars: HashSet<char>,
}

impl CharSet {
    /// Create from every character of `chars`
    pub fn new(chars: &str) -> Self {
        Self {
            chars: chars.chars().collect(),
        }
    }

    /// Check membership
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Union with the characters of `more`
    pub fn with(mut self, more: impl IntoIterator<Item = char>) -> Self {
        self.chars.extend(more);
        self
    }
}

impl fmt::Debug for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sorted: Vec<char> = self.chars.iter().copied().collect();
        sorted.sort_unstable();
        f.debug_tuple("CharSet")
            .field(&sorted.into_iter().collect::<String>())
            .finish()
    }
}

/// Locale letter sets
#[derive(Debug, Clone)]
pub struct LetterTable {
    letters_and_numbers: CharSet,
}

impl LetterTable {
    /// Build from the configured upper-case letters plus lower-case extras
    pub fn new(uppercase: &str, extra_lowercase: &str) -> Self {
        let upper: String = uppercase.chars().map(crate::domain::text::to_upper).collect();
        let lower = upper
            .chars()
            .map(crate::domain::text::to_lower)
            .chain(extra_lowercase.chars());
        let letters_and_numbers = CharSet::new(&upper).with(lower).with('0'..='9');

        Self { letters_and_numbers }
    }

    /// Letter or ASCII digit known to the locale
    #[inline]
    pub fn is_letter_or_number(&self, ch: char) -> bool {
        self.letters_and_numbers.contains(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_membership() {
        let set = CharSet::new(" -\"♪");
        assert!(set.contains('♪'));
        assert!(set.contains(' '));
        assert!(!set.contains('a'));
        assert!(set.contains('"'));
        assert!(!set.contains('.'));
    }

    #[test]
    fn test_letter_table_derives_lowercase() {
        let table = LetterTable::new("ABCÆ", "ß");
        assert!(table.is_letter_or_number('a'));
        assert!(table.is_letter_or_number('Æ'));
        assert!(table.is_letter_or_number('æ'));
        assert!(table.is_letter_or_number('ß'));
        assert!(table.is_letter_or_number('7'));
        assert!(!table.is_letter_or_number('z'));
        assert!(!table.is_letter_or_number('.'));
    }
}
