//! Boundary stripping: split a line into prefix, core and suffix
//!
//! The prefix and suffix hold filler characters and recognized markup at the
//! line boundaries; the core is the text the casing and name engines work on.
//! `prefix + core + suffix` always reproduces the input.

use crate::{
    domain::markup::{closer_of, TagRecognizer},
    language::{tables::CharSet, LocaleRules},
};
use std::sync::Arc;

/// A line split at its filler boundaries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrippedLine {
    original: String,
    pub(crate) prefix: String,
    pub(crate) core: String,
    pub(crate) suffix: String,
}

impl StrippedLine {
    /// The line as it was before stripping
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn core(&self) -> &str {
        &self.core
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Replace the core, keeping prefix and suffix
    pub fn set_core(&mut self, core: impl Into<String>) {
        self.core = core.into();
    }

    /// `prefix + core + suffix`
    pub fn merged(&self) -> String {
        let mut out = String::with_capacity(self.prefix.len() + self.core.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(&self.core);
        out.push_str(&self.suffix);
        out
    }

    /// Move trailing periods of the core to the front of the suffix
    pub(crate) fn move_trailing_dots_to_suffix(&mut self) {
        let kept = self.core.trim_end_matches('.').len();
        if kept < self.core.len() {
            let dots = self.core.split_off(kept);
            self.suffix.insert_str(0, &dots);
        }
    }
}

/// Splits lines into [`StrippedLine`]s using locale strip sets and a tag recognizer
#[derive(Clone)]
pub struct BoundaryStripper {
    start: CharSet,
    end: CharSet,
    tags: Arc<dyn TagRecognizer>,
}

impl std::fmt::Debug for BoundaryStripper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundaryStripper")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}

impl BoundaryStripper {
    /// Stripper using the locale's filler sets
    pub fn new(rules: &LocaleRules, tags: Arc<dyn TagRecognizer>) -> Self {
        Self {
            start: rules.strip_start().clone(),
            end: rules.strip_end().clone(),
            tags,
        }
    }

    /// Stripper with explicit filler sets
    pub fn with_chars(start: &str, end: &str, tags: Arc<dyn TagRecognizer>) -> Self {
        Self {
            start: CharSet::new(start),
            end: CharSet::new(end),
            tags,
        }
    }

    pub fn tags(&self) -> &Arc<dyn TagRecognizer> {
        &self.tags
    }

    pub fn strip(&self, text: &str) -> StrippedLine {
        let chars: Vec<char> = text.chars().collect();
        let core_start = self.scan_start(&chars);
        let core_end = self.scan_end(&chars, core_start);

        StrippedLine {
            original: text.to_string(),
            prefix: chars[..core_start].iter().collect(),
            core: chars[core_start..core_end].iter().collect(),
            suffix: chars[core_end..].iter().collect(),
        }
    }

    fn is_known(&self, unit: &[char]) -> bool {
        let tag: String = unit.iter().collect();
        self.tags.is_known_tag(&tag)
    }

    /// Index where the core starts
    fn scan_start(&self, chars: &[char]) -> usize {
        let mut boundary = 0;
        let mut open: Option<usize> = None;

        for (r, &ch) in chars.iter().enumerate() {
            if closer_of(ch).is_some() {
                // a second opener leaves the first one unterminated
                if let Some(o) = open {
                    return o;
                }
                open = Some(r);
                boundary = r;
                continue;
            }

            if let Some(o) = open {
                if closer_of(chars[o]) == Some(ch) {
                    open = None;
                    if !self.is_known(&chars[o..=r]) {
                        if let Some(first) = (o + 1..r).find(|&i| self.is_content(chars[i], &self.start)) {
                            return first;
                        }
                    }
                    boundary = r + 1;
                }
                continue;
            }

            if self.start.contains(ch) {
                boundary = r + 1;
                continue;
            }

            return boundary;
        }

        boundary
    }

    /// Index where the suffix starts (exclusive end of the core)
    fn scan_end(&self, chars: &[char], core_start: usize) -> usize {
        let mut boundary = chars.len();
        let mut close: Option<usize> = None;

        for j in (core_start..chars.len()).rev() {
            let ch = chars[j];
            if ch == '>' || ch == '}' {
                if let Some(c) = close {
                    return c + 1;
                }
                close = Some(j);
                boundary = j + 1;
                continue;
            }

            if let Some(c) = close {
                if closer_of(ch) == Some(chars[c]) {
                    close = None;
                    if !self.is_known(&chars[j..=c]) {
                        if let Some(last) = (j + 1..c).rev().find(|&i| self.is_content(chars[i], &self.end)) {
                            return last + 1;
                        }
                    }
                    boundary = j;
                }
                continue;
            }

            if self.end.contains(ch) {
                boundary = j;
                continue;
            }

            return boundary;
        }

        boundary
    }

    /// Inside an unrecognized bracket, anything but filler and bracket chars is content
    fn is_content(&self, c: char, filler: &CharSet) -> bool {
        !filler.contains(c) && closer_of(c).is_none() && c != '>' && c != '}'
    }
}
