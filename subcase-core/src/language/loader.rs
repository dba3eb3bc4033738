//! Locale configuration loader
//!
//! Manages embedded and external locale rules with caching.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::language::rules::LocaleRules;

const ENGLISH_TOML: &str = include_str!("../../configs/languages/english.toml");
const SPANISH_TOML: &str = include_str!("../../configs/languages/spanish.toml");

/// Embedded locale configurations
static EMBEDDED: OnceLock<HashMap<String, Arc<LocaleRules>>> = OnceLock::new();

fn embedded() -> &'static HashMap<String, Arc<LocaleRules>> {
    EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        for (code, alias, source) in [
            ("en", "english", ENGLISH_TOML),
            ("es", "spanish", SPANISH_TOML),
        ] {
            match LocaleRules::from_toml_str(source) {
                Ok(rules) => {
                    let rules = Arc::new(rules);
                    map.insert(code.to_string(), rules.clone());
                    map.insert(alias.to_string(), rules);
                }
                Err(e) => {
                    tracing::warn!("Failed to load embedded {code} locale config: {e}");
                }
            }
        }

        map
    })
}

/// Load locale rules by code ("en", "english", "es", "spanish")
pub fn get_rules(code: &str) -> Result<Arc<LocaleRules>, String> {
    embedded()
        .get(&code.to_lowercase())
        .cloned()
        .ok_or_else(|| format!("Unknown locale code: {code}"))
}

/// Codes of the embedded locales
pub fn available_locales() -> Vec<&'static str> {
    vec!["en", "es"]
}

/// English rules, parsed from the embedded config
pub fn english() -> LocaleRules {
    LocaleRules::from_toml_str(ENGLISH_TOML).expect("Embedded English config should always be valid")
}
