//! Strip command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::LanguageArgs;
use crate::config::ProcessingConfig;
use crate::output::OutputFormat;

/// Arguments for the strip command
#[derive(Debug, Args)]
pub struct StripArgs {
    /// Subtitle line to split
    #[arg(value_name = "TEXT")]
    pub text: String,

    #[command(flatten)]
    pub language: LanguageArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct StripParts<'a> {
    prefix: &'a str,
    core: &'a str,
    suffix: &'a str,
}

impl StripArgs {
    /// Execute the strip command
    pub fn execute(&self) -> Result<()> {
        let normalizer = self.language.normalizer(&ProcessingConfig::default())?;
        let line = normalizer.strip(&self.text);
        let parts = StripParts {
            prefix: line.prefix(),
            core: line.core(),
            suffix: line.suffix(),
        };

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&parts)?),
            OutputFormat::Text => {
                println!("prefix: {:?}", parts.prefix);
                println!("core:   {:?}", parts.core);
                println!("suffix: {:?}", parts.suffix);
            }
        }
        Ok(())
    }
}
