//! Domain layer: line stripping, name protection, casing and period rules
//!
//! Everything here is synchronous and text-in/text-out. Engines hold only
//! immutable configuration and can be shared between threads.

pub mod casing;
pub mod markup;
pub mod names;
pub mod paragraph;
pub mod period;
pub mod strip;
pub mod text;

pub use casing::{
    CasingPass, CasingPassOptions, CasingRulesEngine, FixCasingOptions, PreviousLine,
    SentenceBoundaryClassifier, RULE_FIX_CASING,
};
pub use markup::{remove_tags, DefaultTagRecognizer, TagRecognizer};
pub use names::{
    NameCasingPass, NameFix, NameList, NameOracle, NamePlaceholderCodec, NameTable, RULE_FIX_NAMES,
};
pub use paragraph::{FixLog, FixRecord, FixReporter, Paragraph, ParagraphSequence};
pub use period::{is_one_line_url, PeriodInsertionHeuristic, RULE_ADD_PERIOD};
pub use strip::{BoundaryStripper, StrippedLine};
