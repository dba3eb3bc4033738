//! Name lists and the "is this a name" oracle

use std::collections::HashSet;

/// Answers whether a word or phrase is a known proper name
pub trait NameOracle {
    fn is_name(&self, candidate: &str) -> bool;
}

impl<F> NameOracle for F
where
    F: Fn(&str) -> bool,
{
    fn is_name(&self, candidate: &str) -> bool {
        self(candidate)
    }
}

/// Ordered list of names in their preferred casing
#[derive(Debug, Clone, Default)]
pub struct NameList {
    names: Vec<String>,
    lookup: HashSet<String>,
}

impl NameList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one name per line; blank lines and `#` comments are ignored
    pub fn parse(text: &str) -> Self {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect()
    }

    pub fn push(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.lookup.insert(name.clone()) {
            self.names.push(name);
        }
    }

    /// Add comma-separated extra names; entries shorter than two characters are ignored
    pub fn add_extra(&mut self, csv: &str) {
        for name in csv.split(',').map(str::trim) {
            if name.chars().count() > 1 {
                self.push(name);
            }
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for NameList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for name in iter {
            list.push(name);
        }
        list
    }
}

impl NameOracle for NameList {
    fn is_name(&self, candidate: &str) -> bool {
        self.lookup.contains(candidate)
    }
}
