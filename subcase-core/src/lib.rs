//! Subtitle line boundary stripping and casing normalization
//!
//! Subtitle lines wrap their text in dialog dashes, quotes, music notes and
//! markup. This crate separates that filler from the content, then applies
//! casing rules (capitalize after sentence breaks, restore proper-name casing)
//! and adds missing end-of-line periods, without touching the filler.
//!
//! # Architecture
//!
//! - **Language layer**: locale rules (strip sets, letters, name guards,
//!   thresholds) loaded from TOML, with English and Spanish embedded
//! - **Domain layer**: [`BoundaryStripper`], [`NamePlaceholderCodec`],
//!   [`CasingRulesEngine`], [`SentenceBoundaryClassifier`],
//!   [`PeriodInsertionHeuristic`] and the paragraph passes
//! - **API layer**: [`Config`]/[`ConfigBuilder`] and the [`Normalizer`] facade
//!
//! # Example
//!
//! ```rust
//! use subcase_core::{NameList, Normalizer, Paragraph};
//!
//! let normalizer = Normalizer::new();
//!
//! let line = normalizer.strip("  <i>- Hello!</i>  ");
//! assert_eq!(line.prefix(), "  <i>- ");
//! assert_eq!(line.core(), "Hello!");
//! assert_eq!(line.suffix(), "</i>  ");
//!
//! let mut paragraphs = vec![
//!     Paragraph::new("Good morning", 0.0, 1000.0),
//!     Paragraph::new("How are you?", 1200.0, 2000.0),
//! ];
//! let report = normalizer.normalize(&mut paragraphs, &NameList::parse("John"));
//! assert_eq!(paragraphs[0].text, "Good morning.");
//! assert_eq!(report.stats.periods_added, 1);
//! ```

pub mod api;
pub mod domain;
pub mod language;

pub use api::{Config, ConfigBuilder, Error, Language, Normalizer, Report, ReportStats};
pub use domain::*;
pub use language::{available_locales, get_rules, LocaleRules};
