//! Subtitle paragraphs and fix reporting

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One timed subtitle entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
    #[serde(default)]
    pub start_ms: f64,
    #[serde(default)]
    pub end_ms: f64,
}

impl Paragraph {
    pub fn new(text: impl Into<String>, start_ms: f64, end_ms: f64) -> Self {
        Self {
            text: text.into(),
            start_ms,
            end_ms,
        }
    }
}

/// Indexed, mutable access to an ordered list of paragraphs
pub trait ParagraphSequence {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get_at(&self, index: usize) -> Option<&Paragraph>;

    fn text_mut(&mut self, index: usize) -> Option<&mut String>;
}

impl ParagraphSequence for [Paragraph] {
    fn len(&self) -> usize {
        <[Paragraph]>::len(self)
    }

    fn get_at(&self, index: usize) -> Option<&Paragraph> {
        self.get(index)
    }

    fn text_mut(&mut self, index: usize) -> Option<&mut String> {
        self.get_mut(index).map(|p| &mut p.text)
    }
}

impl ParagraphSequence for Vec<Paragraph> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get_at(&self, index: usize) -> Option<&Paragraph> {
        self.get(index)
    }

    fn text_mut(&mut self, index: usize) -> Option<&mut String> {
        self.get_mut(index).map(|p| &mut p.text)
    }
}

/// Receives fix decisions and results from the batch passes
pub trait FixReporter {
    /// Veto hook consulted before a fix is written back
    fn allow_fix(&mut self, _index: usize, _paragraph: &Paragraph, _rule: &str) -> bool {
        true
    }

    fn record_fix(&mut self, index: usize, paragraph: &Paragraph, rule: &str, before: &str, after: &str);

    fn report_summary(&mut self, _count: usize, _rule: &str) {}
}

/// A fix written back to a paragraph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixRecord {
    pub index: usize,
    pub rule: String,
    pub before: String,
    pub after: String,
}

/// In-memory [`FixReporter`]
#[derive(Debug, Clone, Default)]
pub struct FixLog {
    records: Vec<FixRecord>,
    summaries: Vec<(String, usize)>,
    skipped: BTreeSet<usize>,
}

impl FixLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse fixes for the paragraph at `index`
    pub fn skip_index(mut self, index: usize) -> Self {
        self.skipped.insert(index);
        self
    }

    pub fn records(&self) -> &[FixRecord] {
        &self.records
    }

    /// Count reported for `rule` by its last summary
    pub fn summary(&self, rule: &str) -> Option<usize> {
        self.summaries
            .iter()
            .rev()
            .find(|(r, _)| r == rule)
            .map(|(_, count)| *count)
    }

    pub fn into_records(self) -> Vec<FixRecord> {
        self.records
    }
}

impl FixReporter for FixLog {
    fn allow_fix(&mut self, index: usize, _paragraph: &Paragraph, _rule: &str) -> bool {
        !self.skipped.contains(&index)
    }

    fn record_fix(&mut self, index: usize, _paragraph: &Paragraph, rule: &str, before: &str, after: &str) {
        self.records.push(FixRecord {
            index,
            rule: rule.to_string(),
            before: before.to_string(),
            after: after.to_string(),
        });
    }

    fn report_summary(&mut self, count: usize, rule: &str) {
        self.summaries.push((rule.to_string(), count));
    }
}

/// Write `new_text` into paragraph `index` if the reporter allows it
pub(crate) fn apply_fix<S, R>(paragraphs: &mut S, index: usize, new_text: String, rule: &str, reporter: &mut R) -> bool
where
    S: ParagraphSequence + ?Sized,
    R: FixReporter + ?Sized,
{
    let Some(paragraph) = paragraphs.get_at(index) else {
        return false;
    };
    if paragraph.text == new_text || !reporter.allow_fix(index, paragraph, rule) {
        return false;
    }

    let before = paragraph.text.clone();
    if let Some(text) = paragraphs.text_mut(index) {
        *text = new_text;
    }
    if let Some(paragraph) = paragraphs.get_at(index) {
        tracing::debug!(index, rule, before = %before, after = %paragraph.text, "fix applied");
        reporter.record_fix(index, paragraph, rule, &before, &paragraph.text);
    }
    true
}
