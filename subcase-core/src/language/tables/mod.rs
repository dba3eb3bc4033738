//! Runtime tables for locale rules
//!
//! All tables are allocation-free during lookup.

pub mod charset;
pub mod guards;

pub use charset::{CharSet, LetterTable};
pub use guards::GuardTable;
