//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use subcase_core::{NameList, Paragraph};

/// Reads paragraph documents and name lists
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a JSON array of `{"text", "start_ms", "end_ms"}` objects
    pub fn read_paragraphs(path: &Path) -> Result<Vec<Paragraph>> {
        let content = Self::read_text(path)?;
        let paragraphs: Vec<Paragraph> = serde_json::from_str(&content)
            .map_err(|e| CliError::InvalidDocument(format!("{}: {e}", path.display())))?;

        log::debug!("Read {} paragraphs from {}", paragraphs.len(), path.display());
        Ok(paragraphs)
    }

    /// Read a name list, one name per line, plus comma separated extras
    pub fn read_names(path: Option<&Path>, extra: Option<&str>) -> Result<NameList> {
        let mut names = match path {
            Some(path) => {
                if !path.is_file() {
                    return Err(CliError::FileNotFound(path.display().to_string()).into());
                }
                NameList::parse(&Self::read_text(path)?)
            }
            None => NameList::new(),
        };

        if let Some(extra) = extra {
            names.add_extra(extra);
        }

        log::debug!("Loaded {} names", names.len());
        Ok(names)
    }
}
