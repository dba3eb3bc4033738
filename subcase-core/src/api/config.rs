//! Configuration API for normalization

use crate::{
    api::{Error, Language},
    domain::{CasingPassOptions, DefaultTagRecognizer, TagRecognizer},
    language::{get_rules, LocaleRules},
};
use std::{fmt, path::PathBuf, str::FromStr, sync::Arc};

/// Normalization configuration
#[derive(Clone)]
pub struct Config {
    pub(crate) language: Language,
    pub(crate) locale: Arc<LocaleRules>,
    pub(crate) tags: Arc<dyn TagRecognizer>,
    pub(crate) casing: CasingPassOptions,
    pub(crate) fix_casing: bool,
    pub(crate) add_periods: bool,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("language", &self.language)
            .field("locale", &self.locale.code())
            .field("casing", &self.casing)
            .field("fix_casing", &self.fix_casing)
            .field("add_periods", &self.add_periods)
            .finish_non_exhaustive()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::builder()
            .build()
            .expect("Default config should always be valid")
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn locale(&self) -> &Arc<LocaleRules> {
        &self.locale
    }

    pub fn casing(&self) -> &CasingPassOptions {
        &self.casing
    }

    pub fn fix_casing(&self) -> bool {
        self.fix_casing
    }

    pub fn add_periods(&self) -> bool {
        self.add_periods
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        let openers = ['<', '{'];
        if openers
            .iter()
            .any(|&c| self.locale.strip_start().contains(c) || self.locale.strip_end().contains(c))
        {
            return Err(Error::Configuration(
                "strip characters must not include tag openers".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Default)]
pub struct ConfigBuilder {
    language: Option<String>,
    locale_file: Option<PathBuf>,
    strip_chars: Option<(String, String)>,
    tags: Option<Arc<dyn TagRecognizer>>,
    casing: CasingPassOptions,
    fix_casing: Option<bool>,
    add_periods: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language by code
    pub fn language(mut self, code: impl Into<String>) -> Result<Self, Error> {
        let code = code.into();
        Language::from_str(&code)?;
        self.language = Some(code);
        Ok(self)
    }

    /// Load locale rules from a TOML file instead of the embedded ones
    pub fn locale_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.locale_file = Some(path.into());
        self
    }

    /// Override the locale's filler sets
    pub fn strip_chars(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.strip_chars = Some((start.into(), end.into()));
        self
    }

    /// Use a custom markup recognizer
    pub fn tag_recognizer(mut self, tags: Arc<dyn TagRecognizer>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn change_name_cases(mut self, enabled: bool) -> Self {
        self.casing.change_name_cases = enabled;
        self
    }

    pub fn uppercase_after_break(mut self, enabled: bool) -> Self {
        self.casing.uppercase_after_break = enabled;
        self
    }

    pub fn check_previous_line(mut self, enabled: bool) -> Self {
        self.casing.check_previous_line = enabled;
        self
    }

    /// Run the casing pass in [`Normalizer::normalize`](crate::Normalizer::normalize)
    pub fn fix_casing(mut self, enabled: bool) -> Self {
        self.fix_casing = Some(enabled);
        self
    }

    /// Run period insertion in [`Normalizer::normalize`](crate::Normalizer::normalize)
    pub fn add_periods(mut self, enabled: bool) -> Self {
        self.add_periods = Some(enabled);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let language = match &self.language {
            Some(code) => Language::from_str(code)?,
            None => Language::default(),
        };

        let locale = match &self.locale_file {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                tracing::debug!(path = %path.display(), "loading locale rules");
                Arc::new(LocaleRules::from_toml_str(&content).map_err(Error::Parse)?)
            }
            None => get_rules(language.code()).map_err(Error::InvalidLanguage)?,
        };

        let locale = match self.strip_chars {
            Some((start, end)) => Arc::new(locale.as_ref().clone().with_strip_chars(&start, &end)),
            None => locale,
        };

        let config = Config {
            language,
            locale,
            tags: self
                .tags
                .unwrap_or_else(|| Arc::new(DefaultTagRecognizer::new())),
            casing: self.casing,
            fix_casing: self.fix_casing.unwrap_or(true),
            add_periods: self.add_periods.unwrap_or(true),
        };

        config.validate()?;
        Ok(config)
    }
}
