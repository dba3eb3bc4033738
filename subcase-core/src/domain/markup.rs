//! Markup tag recognition
//!
//! Tags are `<...>` (HTML-style) or `{...}` (ASS override) units. Whether a
//! bracketed unit is markup is decided by a [`TagRecognizer`]; everything the
//! recognizer rejects is ordinary text to the engines.

use regex::Regex;
use std::sync::OnceLock;

/// Decides whether a bracketed unit is known markup
pub trait TagRecognizer: Send + Sync {
    /// `tag` includes its delimiters, e.g. `"<i>"` or `"{\an8}"`
    fn is_known_tag(&self, tag: &str) -> bool;
}

impl<F> TagRecognizer for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_known_tag(&self, tag: &str) -> bool {
        self(tag)
    }
}

fn html_tag_regex() -> &'static Regex {
    static HTML: OnceLock<Regex> = OnceLock::new();
    HTML.get_or_init(|| {
        Regex::new(
            r#"(?i)^<\s*/?\s*(i|b|u|s|font|span|ruby|rt|rp|c|v|lang)(\s[^<>]*)?>$|^<\s*br\s*/?\s*>$"#,
        )
        .expect("HTML tag pattern should always compile")
    })
}

fn ass_tag_regex() -> &'static Regex {
    static ASS: OnceLock<Regex> = OnceLock::new();
    ASS.get_or_init(|| Regex::new(r"^\{\\[^{}]*\}$").expect("ASS tag pattern should always compile"))
}

/// Recognizes the subtitle HTML subset (`<i>`, `<b>`, `<u>`, `<font ...>`, ...)
/// and ASS override blocks (`{\an8}`, `{\i1}`)
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTagRecognizer;

impl DefaultTagRecognizer {
    pub fn new() -> Self {
        Self
    }
}

impl TagRecognizer for DefaultTagRecognizer {
    fn is_known_tag(&self, tag: &str) -> bool {
        if tag.starts_with('{') {
            ass_tag_regex().is_match(tag)
        } else {
            html_tag_regex().is_match(tag)
        }
    }
}

/// Closing delimiter for an opening one
#[inline]
pub(crate) fn closer_of(open: char) -> Option<char> {
    match open {
        '<' => Some('>'),
        '{' => Some('}'),
        _ => None,
    }
}

/// Length in chars of the recognized tag starting at `start`, if any
pub fn tag_len_at<R>(chars: &[char], start: usize, recognizer: &R) -> Option<usize>
where
    R: TagRecognizer + ?Sized,
{
    let close = closer_of(*chars.get(start)?)?;
    let end = start + 1 + chars.get(start + 1..)?.iter().position(|&c| c == close)?;
    let tag: String = chars[start..=end].iter().collect();
    recognizer.is_known_tag(&tag).then_some(end - start + 1)
}

/// Remove every recognized tag, keeping unrecognized brackets as text
pub fn remove_tags<R>(text: &str, recognizer: &R) -> String
where
    R: TagRecognizer + ?Sized,
{
    if !text.contains(['<', '{']) {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        match tag_len_at(&chars, i, recognizer) {
            Some(len) => i += len,
            None => {
                out.push(chars[i]);
                i += 1;
            }
        }
    }
    out
}
