//! Centralized configuration for prettylog output.
//!
//! `ConsoleConfig` is the single point of configuration: which vocabulary
//! to print, which timestamp pattern headers use, and whether output is
//! produced at all. It can be built programmatically, read from a TOML
//! file, or overridden from environment variables.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use prettylog_core::logging::{targets, warn};
use prettylog_core::{
    DateFormatSpec, DisplayOptions, IconSet, LayoutTemplate, LogFormatter, ThreadIcons,
    set_date_format,
};

use crate::detection::DisplayContext;
use crate::error::ConfigError;

/// Comprehensive configuration for prettylog output
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    // Gating
    /// Produce output at all. Stands in for "only print in debug builds".
    pub enabled: bool,

    // Display mode
    /// Override display context (None = auto-detect)
    #[serde(skip)]
    pub context: Option<DisplayContext>,
    /// Force styled output even in non-TTY
    pub force_color: Option<bool>,
    /// Force plain text mode (no styling)
    #[serde(rename = "plain")]
    pub force_plain: bool,

    // Rendering
    /// Process-wide timestamp pattern (None = leave the current one)
    pub date_format: Option<DateFormatSpec>,
    /// Thread indicator vocabulary
    pub thread_icons: ThreadIcons,
    /// Variant icon vocabulary
    pub icons: IconSet,
    /// Layout used when a call does not name one
    #[serde(rename = "layout")]
    pub default_layout: LayoutTemplate,
    /// Display options used when a call does not name them
    #[serde(rename = "options")]
    pub default_options: DisplayOptions,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            context: None,
            force_color: None,
            force_plain: false,
            date_format: None,
            thread_icons: ThreadIcons::VERBOSE,
            icons: IconSet::Standard,
            default_layout: LayoutTemplate::REPORT,
            default_options: DisplayOptions::Abbreviated,
        }
    }
}

impl ConsoleConfig {
    /// Create config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create config from environment variables
    ///
    /// # Environment Variables
    ///
    /// | Variable | Values | Description |
    /// |----------|--------|-------------|
    /// | `PRETTYLOG_ENABLED` | 0/1/true/false | Produce output at all |
    /// | `PRETTYLOG_DATE_FORMAT` | see [`DateFormatSpec`] | Timestamp pattern |
    /// | `PRETTYLOG_THREAD_ICONS` | verbose/compact | Thread vocabulary |
    /// | `PRETTYLOG_ICONS` | standard/classic | Variant vocabulary |
    /// | `PRETTYLOG_LAYOUT` | status-line/report | Default layout |
    /// | `PRETTYLOG_COMPLETE` | 0/1/true/false | Default to header + body |
    /// | `PRETTYLOG_FORCE_COLOR` | (set) | Force styled output |
    /// | `PRETTYLOG_PLAIN` | (set) | Force plain output |
    /// | `NO_COLOR` | (set) | Disable styling (standard) |
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().merge_env()
    }

    /// Parse a TOML document.
    ///
    /// ```toml
    /// enabled = true
    /// date_format = "rfc822-like"
    /// thread_icons = "compact"
    /// icons = "classic"
    /// layout = "status-line"
    /// options = "complete"
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Apply environment overrides on top of this config.
    ///
    /// Unrecognized values are reported through `log` and ignored.
    #[must_use]
    pub fn merge_env(self) -> Self {
        self.merge_vars(|name| env::var(name).ok())
    }

    /// Apply overrides read through `lookup` instead of the process
    /// environment. Variable names are those of [`from_env`](Self::from_env).
    ///
    /// `CI` is not an override: it only steers auto-detection, so an
    /// explicit `PRETTYLOG_FORCE_COLOR` still wins there.
    #[must_use]
    pub fn merge_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(enabled) = var_flag(&lookup, "PRETTYLOG_ENABLED") {
            self.enabled = enabled;
        }
        if let Some(spec) = var_parse::<DateFormatSpec>(&lookup, "PRETTYLOG_DATE_FORMAT") {
            self.date_format = Some(spec);
        }
        if let Some(icons) = var_parse::<ThreadIcons>(&lookup, "PRETTYLOG_THREAD_ICONS") {
            self.thread_icons = icons;
        }
        if let Some(icons) = var_parse::<IconSet>(&lookup, "PRETTYLOG_ICONS") {
            self.icons = icons;
        }
        if let Some(layout) = var_parse::<LayoutTemplate>(&lookup, "PRETTYLOG_LAYOUT") {
            self.default_layout = layout;
        }
        if let Some(complete) = var_flag(&lookup, "PRETTYLOG_COMPLETE") {
            self.default_options = if complete {
                DisplayOptions::Complete
            } else {
                DisplayOptions::Abbreviated
            };
        }

        // Display mode
        if lookup("PRETTYLOG_FORCE_COLOR").is_some() {
            self.force_color = Some(true);
        }
        if lookup("PRETTYLOG_PLAIN").is_some() || lookup("NO_COLOR").is_some() {
            self.force_plain = true;
        }

        self
    }

    // ─────────────────────────────────────────────────
    // Builder Methods
    // ─────────────────────────────────────────────────

    /// Enable or disable output
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Force color output
    #[must_use]
    pub fn force_color(mut self, force: bool) -> Self {
        self.force_color = Some(force);
        self
    }

    /// Enable plain text mode (no styling)
    #[must_use]
    pub fn plain_mode(mut self) -> Self {
        self.force_plain = true;
        self
    }

    /// Set display context explicitly
    #[must_use]
    pub fn with_context(mut self, context: DisplayContext) -> Self {
        self.context = Some(context);
        self
    }

    #[must_use]
    pub fn with_date_format(mut self, spec: DateFormatSpec) -> Self {
        self.date_format = Some(spec);
        self
    }

    #[must_use]
    pub fn with_thread_icons(mut self, icons: ThreadIcons) -> Self {
        self.thread_icons = icons;
        self
    }

    #[must_use]
    pub fn with_icons(mut self, icons: IconSet) -> Self {
        self.icons = icons;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: LayoutTemplate) -> Self {
        self.default_layout = layout;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: DisplayOptions) -> Self {
        self.default_options = options;
        self
    }

    // ─────────────────────────────────────────────────
    // Resolution Methods
    // ─────────────────────────────────────────────────

    /// Resolve the display context based on config and environment
    #[must_use]
    pub fn resolve_context(&self) -> DisplayContext {
        if self.force_plain {
            return DisplayContext::new_plain();
        }
        if let Some(force) = self.force_color {
            return if force {
                DisplayContext::new_rich()
            } else {
                DisplayContext::new_plain()
            };
        }
        self.context.unwrap_or_else(DisplayContext::detect)
    }

    /// Formatter carrying this config's vocabularies.
    ///
    /// The date format is not pinned: the formatter follows the
    /// process-wide setting published by [`apply`](Self::apply).
    #[must_use]
    pub fn formatter(&self) -> LogFormatter {
        LogFormatter::new()
            .with_icons(self.icons)
            .with_thread_icons(self.thread_icons.clone())
    }

    /// Publish process-wide settings (the timestamp pattern).
    pub fn apply(&self) {
        if let Some(spec) = self.date_format {
            set_date_format(spec);
        }
    }
}

fn var_flag(lookup: impl Fn(&str) -> Option<String>, name: &str) -> Option<bool> {
    let value = lookup(name)?;
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            warn!(target: targets::CONFIG, "ignoring {name}={value}: expected a boolean");
            None
        }
    }
}

fn var_parse<T>(lookup: impl Fn(&str) -> Option<String>, name: &str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = lookup(name)?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            warn!(target: targets::CONFIG, "ignoring {name}: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ConsoleConfig::new();
        assert!(config.enabled);
        assert!(!config.force_plain);
        assert_eq!(config.date_format, None);
        assert_eq!(config.thread_icons, ThreadIcons::VERBOSE);
        assert_eq!(config.icons, IconSet::Standard);
        assert_eq!(config.default_layout, LayoutTemplate::REPORT);
        assert_eq!(config.default_options, DisplayOptions::Abbreviated);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ConsoleConfig::new()
            .enabled(false)
            .with_date_format(DateFormatSpec::Rfc822Like)
            .with_thread_icons(ThreadIcons::COMPACT)
            .with_icons(IconSet::Classic)
            .with_layout(LayoutTemplate::STATUS_LINE)
            .with_options(DisplayOptions::Complete);

        assert!(!config.enabled);
        assert_eq!(config.date_format, Some(DateFormatSpec::Rfc822Like));
        assert_eq!(config.thread_icons, ThreadIcons::COMPACT);
        assert_eq!(config.icons, IconSet::Classic);
        assert_eq!(config.default_layout, LayoutTemplate::STATUS_LINE);
        assert_eq!(config.default_options, DisplayOptions::Complete);
    }

    #[test]
    fn test_plain_mode() {
        let config = ConsoleConfig::new().plain_mode().force_color(true);
        assert_eq!(config.resolve_context(), DisplayContext::Plain);
    }

    #[test]
    fn test_force_color() {
        let config = ConsoleConfig::new().force_color(true);
        assert_eq!(config.resolve_context(), DisplayContext::Rich);
        let config = ConsoleConfig::new().force_color(false);
        assert_eq!(config.resolve_context(), DisplayContext::Plain);
    }

    #[test]
    fn test_explicit_context() {
        let config = ConsoleConfig::new().with_context(DisplayContext::Rich);
        assert_eq!(config.resolve_context(), DisplayContext::Rich);
    }

    #[test]
    fn test_from_toml_str() {
        let config = ConsoleConfig::from_toml_str(
            r#"
            enabled = false
            date_format = "month-day-year-millis"
            thread_icons = "compact"
            icons = "classic"
            layout = "status-line"
            options = "complete"
            plain = true
            "#,
        )
        .unwrap();

        assert!(!config.enabled);
        assert_eq!(config.date_format, Some(DateFormatSpec::MonthDayYearMillis));
        assert_eq!(config.thread_icons, ThreadIcons::COMPACT);
        assert_eq!(config.icons, IconSet::Classic);
        assert_eq!(config.default_layout, LayoutTemplate::STATUS_LINE);
        assert_eq!(config.default_options, DisplayOptions::Complete);
        assert!(config.force_plain);
    }

    #[test]
    fn test_from_toml_str_partial_keeps_defaults() {
        let config = ConsoleConfig::from_toml_str("icons = \"classic\"").unwrap();
        assert_eq!(config.icons, IconSet::Classic);
        assert!(config.enabled);
        assert_eq!(config.default_layout, LayoutTemplate::REPORT);
    }

    #[test]
    fn test_from_toml_str_rejects_unknown_values() {
        let err = ConsoleConfig::from_toml_str("date_format = \"iso\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
        assert!(err.to_string().contains("date format"));

        let err = ConsoleConfig::from_toml_str("colour = true").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "layout = \"status-line\"").unwrap();
        let config = ConsoleConfig::from_file(file.path()).unwrap();
        assert_eq!(config.default_layout, LayoutTemplate::STATUS_LINE);
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConsoleConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_force_color_wins_under_ci() {
        let config = ConsoleConfig::new()
            .merge_vars(vars(&[("CI", "true"), ("PRETTYLOG_FORCE_COLOR", "1")]));
        assert!(!config.force_plain);
        assert_eq!(config.force_color, Some(true));
        assert_eq!(config.resolve_context(), DisplayContext::Rich);
    }

    #[test]
    fn test_ci_alone_is_not_forced_plain() {
        let config = ConsoleConfig::new().merge_vars(vars(&[("CI", "true")]));
        assert!(!config.force_plain);
        assert_eq!(config.force_color, None);
    }

    #[test]
    fn test_plain_requests_force_plain() {
        for name in ["PRETTYLOG_PLAIN", "NO_COLOR"] {
            let config = ConsoleConfig::new()
                .merge_vars(vars(&[(name, "1"), ("PRETTYLOG_FORCE_COLOR", "1")]));
            assert!(config.force_plain, "{name}");
            assert_eq!(config.resolve_context(), DisplayContext::Plain);
        }
    }

    #[test]
    fn test_merge_vars_overrides() {
        let config = ConsoleConfig::new().merge_vars(vars(&[
            ("PRETTYLOG_ENABLED", "off"),
            ("PRETTYLOG_DATE_FORMAT", "rfc822-like"),
            ("PRETTYLOG_THREAD_ICONS", "compact"),
            ("PRETTYLOG_ICONS", "classic"),
            ("PRETTYLOG_LAYOUT", "status-line"),
            ("PRETTYLOG_COMPLETE", "1"),
        ]));
        assert!(!config.enabled);
        assert_eq!(config.date_format, Some(DateFormatSpec::Rfc822Like));
        assert_eq!(config.thread_icons, ThreadIcons::COMPACT);
        assert_eq!(config.icons, IconSet::Classic);
        assert_eq!(config.default_layout, LayoutTemplate::STATUS_LINE);
        assert_eq!(config.default_options, DisplayOptions::Complete);
    }

    #[test]
    fn test_merge_vars_ignores_bad_values() {
        let config = ConsoleConfig::new().merge_vars(vars(&[
            ("PRETTYLOG_ENABLED", "maybe"),
            ("PRETTYLOG_LAYOUT", "sideways"),
        ]));
        assert_eq!(config, ConsoleConfig::new());
    }

    #[test]
    fn test_formatter_carries_vocabularies() {
        let formatter = ConsoleConfig::new()
            .with_icons(IconSet::Classic)
            .with_thread_icons(ThreadIcons::COMPACT)
            .formatter();
        assert_eq!(formatter.icons(), IconSet::Classic);
        assert_eq!(formatter.thread_icons(), &ThreadIcons::COMPACT);
    }
}
