//! CLI command implementations

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::path::PathBuf;
use subcase_core::{available_locales, Config, Language, Normalizer};

use crate::config::ProcessingConfig;

pub mod fix;
pub mod names;
pub mod strip;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fix casing and add missing periods in paragraph documents
    Fix(fix::FixArgs),

    /// Find and fix the casing of known names
    Names(names::NamesArgs),

    /// Show how a single line splits into filler and content
    Strip(strip::StripArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available language rules
    Languages,

    /// List available output formats
    Formats,
}

/// Locale selection shared by the processing commands
#[derive(Debug, Clone, Default, Args)]
pub struct LanguageArgs {
    /// Language code for the embedded rules (en, es)
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<String>,

    /// Locale rules TOML file used instead of the embedded rules
    #[arg(short = 'c', long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,
}

impl LanguageArgs {
    /// Build a normalizer from these arguments and the processing defaults
    pub fn normalizer(&self, processing: &ProcessingConfig) -> Result<Normalizer> {
        let code = self
            .language
            .clone()
            .unwrap_or_else(|| processing.default_language.clone());

        let mut builder = Config::builder()
            .language(code.as_str())?
            .fix_casing(processing.fix_casing)
            .add_periods(processing.add_periods)
            .change_name_cases(processing.change_name_cases)
            .uppercase_after_break(processing.uppercase_after_break)
            .check_previous_line(processing.check_previous_line);

        if let Some(path) = &self.language_config {
            builder = builder.locale_file(path);
        }

        let config = match &self.language_config {
            Some(path) => builder
                .build()
                .with_context(|| format!("Failed to load locale rules: {}", path.display()))?,
            None => builder.build()?,
        };

        log::info!("Using locale rules: {}", config.locale().name());
        Ok(Normalizer::with_config(config))
    }
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Fix(args) => args.execute(),
            Commands::Names(args) => args.execute(),
            Commands::Strip(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Languages => {
                println!("Available languages:");
                for code in available_locales() {
                    let language: Language = code.parse()?;
                    println!("  {code:<4}{}", language.name());
                }
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                println!("  text  Paragraph texts separated by blank lines");
                println!("  json  JSON array of documents");
            }
        }
        Ok(())
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    }
}
