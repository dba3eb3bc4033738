//! Normalizer: the engines wired to one configuration

use crate::{
    api::{Config, Error, Report, ReportStats},
    domain::{
        CasingPass, CasingRulesEngine, FixCasingOptions, FixLog, FixReporter, NameCasingPass,
        NameFix, NameList, Paragraph, ParagraphSequence, PeriodInsertionHeuristic, PreviousLine,
        StrippedLine, RULE_ADD_PERIOD, RULE_FIX_CASING,
    },
};
use std::time::Instant;

/// Casing and period normalization for subtitle paragraphs
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: Config,
    engine: CasingRulesEngine,
    periods: PeriodInsertionHeuristic,
}

impl Normalizer {
    /// Create a normalizer with default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a normalizer with custom configuration
    pub fn with_config(config: Config) -> Self {
        let engine = CasingRulesEngine::new(config.locale.clone(), config.tags.clone());
        let periods = PeriodInsertionHeuristic::new(config.locale.clone(), config.tags.clone());
        Self {
            config,
            engine,
            periods,
        }
    }

    /// Create a normalizer for a specific language
    pub fn with_language(code: impl Into<String>) -> Result<Self, Error> {
        let config = Config::builder().language(code)?.build()?;
        Ok(Self::with_config(config))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn engine(&self) -> &CasingRulesEngine {
        &self.engine
    }

    /// Split a line into prefix, core and suffix
    pub fn strip(&self, text: &str) -> StrippedLine {
        self.engine.stripper().strip(text)
    }

    /// Fix the casing of a single line
    pub fn fix_line(&self, text: &str, names: &NameList, previous: Option<PreviousLine<'_>>) -> String {
        let options = FixCasingOptions {
            change_name_cases: self.config.casing.change_name_cases,
            uppercase_after_break: self.config.casing.uppercase_after_break,
            previous_line: previous.filter(|_| self.config.casing.check_previous_line),
        };
        self.engine.fix_text(text, names.names(), &options)
    }

    /// Run period insertion then casing (as enabled) and collect every fix
    pub fn normalize(&self, paragraphs: &mut [Paragraph], names: &NameList) -> Report {
        let start = Instant::now();
        let mut log = FixLog::new();
        self.normalize_with(paragraphs, names, &mut log);

        let stats = ReportStats {
            paragraphs: paragraphs.len(),
            periods_added: log.summary(RULE_ADD_PERIOD).unwrap_or(0),
            casing_fixes: log.summary(RULE_FIX_CASING).unwrap_or(0),
            duration: start.elapsed(),
        };
        tracing::debug!(
            paragraphs = stats.paragraphs,
            periods = stats.periods_added,
            casing = stats.casing_fixes,
            "normalization finished"
        );

        Report {
            fixes: log.into_records(),
            stats,
        }
    }

    /// Like [`normalize`](Self::normalize) with a caller-supplied reporter;
    /// returns the total number of fixes
    pub fn normalize_with<S, R>(&self, paragraphs: &mut S, names: &NameList, reporter: &mut R) -> usize
    where
        S: ParagraphSequence + ?Sized,
        R: FixReporter + ?Sized,
    {
        let mut total = 0;
        if self.config.add_periods {
            total += self.periods.run(paragraphs, names, reporter);
        }
        if self.config.fix_casing {
            total += CasingPass::new(&self.engine).fix_paragraphs(
                paragraphs,
                names.names(),
                &self.config.casing,
                reporter,
            );
        }
        total
    }

    /// Names from `names` used with a different casing somewhere in `paragraphs`
    pub fn find_names(&self, paragraphs: &[Paragraph], names: &NameList) -> Vec<String> {
        NameCasingPass::new(&self.engine).find_names(paragraphs, names.names())
    }

    /// Whether a discovered name is enabled by default for the locale
    pub fn name_enabled_by_default(&self, name: &str) -> bool {
        NameCasingPass::new(&self.engine).default_enabled(name)
    }

    /// Proposed name casing fixes; nothing is modified
    pub fn preview_names<N: AsRef<str> + Sync>(&self, paragraphs: &[Paragraph], names: &[N]) -> Vec<NameFix> {
        NameCasingPass::new(&self.engine).preview(paragraphs, names)
    }

    pub fn apply_names<S, R>(&self, paragraphs: &mut S, fixes: &[NameFix], reporter: &mut R) -> usize
    where
        S: ParagraphSequence + ?Sized,
        R: FixReporter + ?Sized,
    {
        NameCasingPass::new(&self.engine).apply(paragraphs, fixes, reporter)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
