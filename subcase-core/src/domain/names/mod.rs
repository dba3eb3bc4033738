//! Proper names: lists, placeholder protection, discovery

pub mod discovery;
pub mod list;
pub mod placeholder;

pub use discovery::{is_embedded_word, NameCasingPass, NameFix, RULE_FIX_NAMES};
pub use list::{NameList, NameOracle};
pub use placeholder::{NamePlaceholder, NamePlaceholderCodec, NameTable, TOKEN_MARKER};
