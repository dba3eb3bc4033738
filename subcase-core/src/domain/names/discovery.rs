//! Name discovery and name-only casing over a paragraph list

use crate::domain::{
    casing::{CasingRulesEngine, FixCasingOptions},
    markup::remove_tags,
    paragraph::{apply_fix, FixReporter, Paragraph, ParagraphSequence},
    text::{contains_ignore_case, find_ignore_case, is_all_lower, is_all_upper, to_lower},
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Rule id reported for name casing fixes
pub const RULE_FIX_NAMES: &str = "Fix casing of names";

/// A proposed name casing change for one paragraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameFix {
    pub index: usize,
    pub before: String,
    pub after: String,
}

/// True if `text[start..end]` touches a letter or digit on either side
pub fn is_embedded_word(text: &[char], start: usize, end: usize) -> bool {
    let before = start > 0 && text[start - 1].is_alphanumeric();
    let after = text.get(end).is_some_and(|c| c.is_alphanumeric());
    before || after
}

/// Finds names used with the wrong casing and fixes only those names
#[derive(Debug, Clone, Copy)]
pub struct NameCasingPass<'a> {
    engine: &'a CasingRulesEngine,
}

impl<'a> NameCasingPass<'a> {
    pub fn new(engine: &'a CasingRulesEngine) -> Self {
        Self { engine }
    }

    /// Names from `names` that occur somewhere with a different casing.
    ///
    /// Single-character and all-lower-case names are ignored. The result
    /// keeps the order of `names` and has no duplicates.
    pub fn find_names<S, N>(&self, paragraphs: &S, names: &[N]) -> Vec<String>
    where
        S: ParagraphSequence + ?Sized,
        N: AsRef<str>,
    {
        let all = (0..paragraphs.len())
            .filter_map(|i| paragraphs.get_at(i))
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let text: Vec<char> = remove_tags(&all, self.engine.stripper().tags().as_ref())
            .chars()
            .collect();

        let mut seen = HashSet::new();
        let mut found = Vec::new();
        for name in names {
            let name = name.as_ref();
            if name.chars().count() <= 1 || is_all_lower(name) || seen.contains(name) {
                continue;
            }

            let name_chars: Vec<char> = name.chars().collect();
            let pattern: Vec<char> = name_chars.iter().map(|&c| to_lower(c)).collect();
            let mut from = 0;
            while let Some(start) = find_ignore_case(&text, &pattern, from) {
                let end = start + pattern.len();
                if !is_embedded_word(&text, start, end) && text[start..end] != name_chars[..] {
                    seen.insert(name.to_string());
                    found.push(name.to_string());
                    break;
                }
                from = end;
            }
        }

        tracing::debug!(found = found.len(), "name discovery finished");
        found
    }

    /// Whether a discovered name starts out enabled for the locale
    pub fn default_enabled(&self, name: &str) -> bool {
        self.engine.rules().name_enabled_by_default(name)
    }

    /// Proposed fixes, in paragraph order; nothing is modified
    pub fn preview<N>(&self, paragraphs: &[Paragraph], names: &[N]) -> Vec<NameFix>
    where
        N: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        let fixes: Vec<NameFix> = paragraphs
            .par_iter()
            .enumerate()
            .filter_map(|(index, paragraph)| self.preview_paragraph(index, paragraph, names))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let fixes: Vec<NameFix> = paragraphs
            .iter()
            .enumerate()
            .filter_map(|(index, paragraph)| self.preview_paragraph(index, paragraph, names))
            .collect();

        fixes
    }

    fn preview_paragraph<N: AsRef<str>>(&self, index: usize, paragraph: &Paragraph, names: &[N]) -> Option<NameFix> {
        let tags = self.engine.stripper().tags();
        let options = FixCasingOptions::names_only();
        let mut text = paragraph.text.clone();

        for name in names {
            let name = name.as_ref();
            if is_all_upper(&remove_tags(&text, tags.as_ref())) {
                continue;
            }
            if name.chars().count() > 1 && !is_all_lower(name) && contains_ignore_case(&text, name) {
                text = self.engine.fix_text(&text, &[name], &options);
            }
        }

        (text != paragraph.text).then(|| NameFix {
            index,
            before: paragraph.text.clone(),
            after: text,
        })
    }

    /// Write previewed fixes back; fixes whose paragraph changed since the
    /// preview are skipped
    pub fn apply<S, R>(&self, paragraphs: &mut S, fixes: &[NameFix], reporter: &mut R) -> usize
    where
        S: ParagraphSequence + ?Sized,
        R: FixReporter + ?Sized,
    {
        let mut count = 0;
        for fix in fixes {
            let current = paragraphs.get_at(fix.index).map(|p| p.text.as_str());
            if current != Some(fix.before.as_str()) {
                tracing::debug!(index = fix.index, "paragraph changed since preview, name fix skipped");
                continue;
            }
            if apply_fix(paragraphs, fix.index, fix.after.clone(), RULE_FIX_NAMES, reporter) {
                count += 1;
            }
        }

        reporter.report_summary(count, RULE_FIX_NAMES);
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{markup::DefaultTagRecognizer, paragraph::FixLog},
        language::LocaleRules,
    };
    use std::sync::Arc;

    fn engine() -> CasingRulesEngine {
        CasingRulesEngine::new(Arc::new(LocaleRules::default()), Arc::new(DefaultTagRecognizer::new()))
    }

    fn paragraphs(texts: &[&str]) -> Vec<Paragraph> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Paragraph::new(*t, i as f64 * 1000.0, i as f64 * 1000.0 + 900.0))
            .collect()
    }

    #[test]
    fn test_find_names() {
        let engine = engine();
        let subs = paragraphs(&["hi <i>john</i>", "Mary is here", "johnny and us"]);
        let found = NameCasingPass::new(&engine).find_names(&subs, &["John", "Mary", "US", "x", "bob", "John"]);
        assert_eq!(found, vec!["John".to_string(), "US".to_string()]);
    }

    #[test]
    fn test_default_enabled() {
        let engine = engine();
        let pass = NameCasingPass::new(&engine);
        assert!(!pass.default_enabled("US"));
        assert!(pass.default_enabled("John"));
    }

    #[test]
    fn test_preview_and_apply() {
        let engine = engine();
        let pass = NameCasingPass::new(&engine);
        let mut subs = paragraphs(&["hello john, bye.", "JOHN IS LOUD", "no names", "<i>ask mary</i>"]);

        let fixes = pass.preview(&subs, &["John", "Mary"]);
        assert_eq!(
            fixes,
            vec![
                NameFix {
                    index: 0,
                    before: "hello john, bye.".to_string(),
                    after: "hello John, bye.".to_string(),
                },
                NameFix {
                    index: 3,
                    before: "<i>ask mary</i>".to_string(),
                    after: "<i>ask Mary</i>".to_string(),
                },
            ]
        );

        subs[3].text = "edited".to_string();
        let mut log = FixLog::new();
        assert_eq!(pass.apply(&mut subs, &fixes, &mut log), 1);
        assert_eq!(subs[0].text, "hello John, bye.");
        assert_eq!(subs[3].text, "edited");
        assert_eq!(log.summary(RULE_FIX_NAMES), Some(1));
    }
}
