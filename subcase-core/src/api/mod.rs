//! Public API for subcase-core
//!
//! [`Normalizer`] bundles the casing engine, the period heuristic and the
//! name passes behind one [`Config`].

mod config;
mod error;
mod language;
mod normalizer;
mod output;


pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use language::Language;
pub use normalizer::Normalizer;
pub use output::{Report, ReportStats};
