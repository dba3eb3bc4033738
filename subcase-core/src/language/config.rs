//! Configuration structures and validation
//!
//! This module defines the TOML schema for locale configuration.

use serde::{Deserialize, Serialize};

/// Root locale configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub metadata: Metadata,
    pub letters: Letters,
    pub strip: Strip,
    #[serde(default)]
    pub casing: Casing,
    #[serde(default)]
    pub names: Names,
    #[serde(default)]
    pub periods: Periods,
}

/// Locale metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Letter sets used by the "ends in a letter or number" checks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Letters {
    /// Upper-case letters; their single code point lower-case forms are added automatically
    pub uppercase: String,
    /// Lower-case letters with no upper-case counterpart in `uppercase`
    #[serde(default)]
    pub extra_lowercase: String,
}

/// Filler characters stripped at line boundaries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Strip {
    pub start_chars: String,
    pub end_chars: String,
}

/// Casing classifier switches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Casing {
    /// Keep "iPhone"-style words lower-case at line start
    #[serde(default = "default_true")]
    pub camel_case_product_names: bool,
    /// Gap after which the previous line counts as closed
    #[serde(default = "default_sentence_gap_ms")]
    pub sentence_gap_ms: f64,
}

impl Default for Casing {
    fn default() -> Self {
        Self {
            camel_case_product_names: true,
            sentence_gap_ms: default_sentence_gap_ms(),
        }
    }
}

/// Name protection configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Names {
    /// Names that are found but not enabled by default
    #[serde(default)]
    pub disabled_by_default: Vec<String>,
    /// Word starts that must not be treated as a name
    #[serde(default)]
    pub guards: Vec<NameGuard>,
}

/// A name rejected when followed by a given continuation ("Don" + "'t")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameGuard {
    pub name: String,
    pub followed_by: String,
}

/// Period insertion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Periods {
    #[serde(default = "default_close_gap_ms")]
    pub close_gap_ms: f64,
    #[serde(default)]
    pub pronoun_prefixes: Vec<String>,
    #[serde(default)]
    pub honorifics: Vec<String>,
}

impl Default for Periods {
    fn default() -> Self {
        Self {
            close_gap_ms: default_close_gap_ms(),
            pronoun_prefixes: Vec::new(),
            honorifics: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_sentence_gap_ms() -> f64 {
    5000.0
}

fn default_close_gap_ms() -> f64 {
    400.0
}

impl LocaleConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("Locale code must not be empty".to_string());
        }

        if self.letters.uppercase.is_empty() {
            return Err("No upper-case letters defined".to_string());
        }

        if self.casing.sentence_gap_ms < 0.0 || self.periods.close_gap_ms < 0.0 {
            return Err("Timing thresholds must not be negative".to_string());
        }

        if let Some(guard) = self.names.guards.iter().find(|g| g.name.is_empty()) {
            return Err(format!(
                "Name guard with empty name (followed_by = {:?})",
                guard.followed_by
            ));
        }

        Ok(())
    }
}
