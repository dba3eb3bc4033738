//! Runtime implementation of locale rules
//!
//! Bridges the TOML configuration and the lookups used by the engines.

use crate::language::{
    config::LocaleConfig,
    tables::{CharSet, GuardTable, LetterTable},
};

/// Locale rules used by stripping, casing and period insertion
#[derive(Debug, Clone)]
pub struct LocaleRules {
    code: String,
    name: String,

    /// Runtime tables
    strip_start: CharSet,
    strip_end: CharSet,
    letters: LetterTable,
    name_guards: GuardTable,

    disabled_names: Vec<String>,
    camel_case_product_names: bool,
    sentence_gap_ms: f64,
    close_gap_ms: f64,
    pronoun_prefixes: Vec<String>,
    honorifics: Vec<String>,
}

impl LocaleRules {
    /// Create from configuration
    pub fn from_config(config: &LocaleConfig) -> Result<Self, String> {
        config.validate()?;

        let name_guards = GuardTable::new(
            config
                .names
                .guards
                .iter()
                .map(|g| (g.name.clone(), g.followed_by.clone()))
                .collect(),
        );

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            strip_start: CharSet::new(&config.strip.start_chars),
            strip_end: CharSet::new(&config.strip.end_chars),
            letters: LetterTable::new(&config.letters.uppercase, &config.letters.extra_lowercase),
            name_guards,
            disabled_names: config.names.disabled_by_default.clone(),
            camel_case_product_names: config.casing.camel_case_product_names,
            sentence_gap_ms: config.casing.sentence_gap_ms,
            close_gap_ms: config.periods.close_gap_ms,
            pronoun_prefixes: config.periods.pronoun_prefixes.clone(),
            honorifics: config.periods.honorifics.clone(),
        })
    }

    /// Parse and build from a TOML document
    pub fn from_toml_str(toml_str: &str) -> Result<Self, String> {
        let config: LocaleConfig =
            toml::from_str(toml_str).map_err(|e| format!("Failed to parse locale config: {e}"))?;
        Self::from_config(&config)
    }

    /// Locale code ("en")
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable locale name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Filler characters stripped at the start of a line
    pub fn strip_start(&self) -> &CharSet {
        &self.strip_start
    }

    /// Filler characters stripped at the end of a line
    pub fn strip_end(&self) -> &CharSet {
        &self.strip_end
    }

    pub fn letters(&self) -> &LetterTable {
        &self.letters
    }

    pub fn name_guards(&self) -> &GuardTable {
        &self.name_guards
    }

    /// Whether a discovered name starts out enabled
    pub fn name_enabled_by_default(&self, name: &str) -> bool {
        !self.disabled_names.iter().any(|n| n == name)
    }

    pub fn camel_case_product_names(&self) -> bool {
        self.camel_case_product_names
    }

    pub fn sentence_gap_ms(&self) -> f64 {
        self.sentence_gap_ms
    }

    pub fn close_gap_ms(&self) -> f64 {
        self.close_gap_ms
    }

    pub fn pronoun_prefixes(&self) -> &[String] {
        &self.pronoun_prefixes
    }

    pub fn honorifics(&self) -> &[String] {
        &self.honorifics
    }

    /// Replace the strip sets (for callers with their own filler conventions)
    pub fn with_strip_chars(mut self, start: &str, end: &str) -> Self {
        self.strip_start = CharSet::new(start);
        self.strip_end = CharSet::new(end);
        self
    }
}

impl Default for LocaleRules {
    fn default() -> Self {
        crate::language::english()
    }
}
