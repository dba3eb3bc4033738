//! Fix command implementation

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::path::PathBuf;

use super::{init_logging, LanguageArgs};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, open_sink, Document, OutputFormat};
use crate::progress::ProgressReporter;

/// Arguments for the fix command
#[derive(Debug, Args)]
pub struct FixArgs {
    /// Input paragraph documents or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Names file, one name per line
    #[arg(short, long, value_name = "FILE")]
    pub names: Option<PathBuf>,

    /// Additional comma separated names
    #[arg(long, value_name = "NAMES")]
    pub extra_names: Option<String>,

    #[command(flatten)]
    pub language: LanguageArgs,

    /// Do not add missing end-of-line periods
    #[arg(long)]
    pub no_periods: bool,

    /// Do not run the casing pass
    #[arg(long)]
    pub no_casing: bool,

    /// Leave the casing of listed names unchanged
    #[arg(long)]
    pub keep_name_cases: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Include the applied fixes in the output
    #[arg(long)]
    pub show_fixes: bool,

    /// Number of worker threads (default: number of CPUs)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// CLI configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl FixArgs {
    /// Execute the fix command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting paragraph normalization");
        log::debug!("Arguments: {:?}", self);

        let mut cli_config = CliConfig::load_or_default(self.config.as_deref())?;
        let processing = &mut cli_config.processing;
        processing.add_periods &= !self.no_periods;
        processing.fix_casing &= !self.no_casing;
        processing.change_name_cases &= !self.keep_name_cases;

        let normalizer = self.language.normalizer(&cli_config.processing)?;
        let names = FileReader::read_names(self.names.as_deref(), self.extra_names.as_deref())?;
        let files = resolve_patterns(&self.input)?;

        let format = match self.format {
            Some(format) => format,
            None => <OutputFormat as clap::ValueEnum>::from_str(&cli_config.output.default_format, true).map_err(|_| {
                CliError::ConfigError(format!(
                    "unknown output format '{}'",
                    cli_config.output.default_format
                ))
            })?,
        };
        let show_fixes = self.show_fixes || cli_config.output.include_fixes;

        let threads = self
            .threads
            .or(Some(cli_config.performance.worker_threads).filter(|&n| n > 0))
            .unwrap_or_else(num_cpus::get);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build worker thread pool")?;
        log::debug!("Processing {} files on {} threads", files.len(), threads);

        let mut progress = ProgressReporter::new(self.quiet);
        progress.start(files.len() as u64);

        let results: Vec<Result<(Document, usize)>> = pool.install(|| {
            files
                .par_iter()
                .map(|path| {
                    let mut paragraphs = FileReader::read_paragraphs(path)?;
                    let report = normalizer.normalize(&mut paragraphs, &names);
                    log::info!(
                        "{}: {} periods added, {} casing fixes",
                        path.display(),
                        report.stats.periods_added,
                        report.stats.casing_fixes
                    );

                    let source = path.display().to_string();
                    let changed = report.paragraphs_changed();
                    progress.document_done(&source, changed);
                    Ok((
                        Document {
                            source,
                            paragraphs,
                            fixes: show_fixes.then_some(report.fixes),
                        },
                        changed,
                    ))
                })
                .collect()
        });
        progress.finish();

        let sink = open_sink(self.output.as_deref())?;
        let mut formatter = create_formatter(format, sink, cli_config.output.pretty_json);
        let mut changed = 0;
        for result in results {
            let (document, paragraphs_changed) = result?;
            formatter.format_document(&document)?;
            changed += paragraphs_changed;
        }
        formatter.finish()?;

        if !self.quiet {
            eprintln!("Processed {} files, {} paragraphs changed", files.len(), changed);
        }
        Ok(())
    }
}
