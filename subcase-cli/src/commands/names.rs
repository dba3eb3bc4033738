//! Names command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use subcase_core::{FixLog, NameFix};

use super::{init_logging, LanguageArgs};
use crate::config::ProcessingConfig;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, open_sink, Document, OutputFormat};

/// Arguments for the names command
#[derive(Debug, Args)]
pub struct NamesArgs {
    /// Input paragraph documents or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Names file, one name per line
    #[arg(short, long, value_name = "FILE", required = true)]
    pub names: PathBuf,

    /// Additional comma separated names
    #[arg(long, value_name = "NAMES")]
    pub extra_names: Option<String>,

    #[command(flatten)]
    pub language: LanguageArgs,

    /// Apply the fixes for names enabled by default and write the documents
    #[arg(long)]
    pub apply: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress summary output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Names found in one document and the fixes they propose
#[derive(Debug, Serialize)]
pub struct NamePreview {
    pub source: String,
    pub names: Vec<FoundName>,
    pub fixes: Vec<NameFix>,
}

#[derive(Debug, Serialize)]
pub struct FoundName {
    pub name: String,
    pub enabled: bool,
}

impl NamesArgs {
    /// Execute the names command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let normalizer = self.language.normalizer(&ProcessingConfig::default())?;
        let names = FileReader::read_names(Some(self.names.as_path()), self.extra_names.as_deref())?;
        let files = resolve_patterns(&self.input)?;

        let sink = open_sink(self.output.as_deref())?;
        let mut documents = Vec::new();
        let mut previews = Vec::new();
        let mut total = 0;

        for path in &files {
            let mut paragraphs = FileReader::read_paragraphs(path)?;
            let found: Vec<FoundName> = normalizer
                .find_names(&paragraphs, &names)
                .into_iter()
                .map(|name| FoundName {
                    enabled: normalizer.name_enabled_by_default(&name),
                    name,
                })
                .collect();

            let enabled: Vec<&str> = found
                .iter()
                .filter(|n| n.enabled)
                .map(|n| n.name.as_str())
                .collect();
            let fixes = normalizer.preview_names(&paragraphs, &enabled);
            log::info!(
                "{}: {} names found, {} fixes",
                path.display(),
                found.len(),
                fixes.len()
            );

            let source = path.display().to_string();
            if self.apply {
                let mut log = FixLog::new();
                total += normalizer.apply_names(&mut paragraphs, &fixes, &mut log);
                documents.push(Document {
                    source,
                    paragraphs,
                    fixes: None,
                });
            } else {
                total += fixes.len();
                previews.push(NamePreview {
                    source,
                    names: found,
                    fixes,
                });
            }
        }

        if self.apply {
            let mut formatter = create_formatter(self.format, sink, true);
            for document in &documents {
                formatter.format_document(document)?;
            }
            formatter.finish()?;
        } else {
            write_previews(sink, &previews, self.format)?;
        }

        if !self.quiet {
            let verb = if self.apply { "applied" } else { "proposed" };
            eprintln!("{total} name fixes {verb}");
        }
        Ok(())
    }
}

fn write_previews<W: Write>(mut writer: W, previews: &[NamePreview], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, previews)?;
            writeln!(writer)?;
        }
        OutputFormat::Text => {
            for preview in previews {
                writeln!(writer, "==> {} <==", preview.source)?;
                for found in &preview.names {
                    let mark = if found.enabled { "x" } else { " " };
                    writeln!(writer, "[{mark}] {}", found.name)?;
                }
                for fix in &preview.fixes {
                    writeln!(writer, "{}: {:?} -> {:?}", fix.index, fix.before, fix.after)?;
                }
            }
        }
    }
    writer.flush()?;
    Ok(())
}
