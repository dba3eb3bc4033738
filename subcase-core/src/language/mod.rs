//! Locale rules for stripping, casing and period insertion
//!
//! Rules are data-driven: each locale is a TOML document, the built-in ones
//! are embedded in the binary and parsed once.

pub(crate) mod config;
pub(crate) mod loader;
pub(crate) mod rules;
pub mod tables;

pub use config::{LocaleConfig, NameGuard};
pub use loader::{available_locales, english, get_rules};
pub use rules::LocaleRules;
