//! Pretty-formatted output for `log` records.

use std::sync::Arc;

use log::{Level, LevelFilter, Log, Metadata, Record};

use prettylog_core::logging::targets;
use prettylog_core::{CallContext, DisplayOptions, LayoutTemplate, LogVariant};

use crate::config::ConsoleConfig;
use crate::console::PrettyConsole;
use crate::dispatch::PrettyLog;

/// The variant a record of `level` is printed as.
#[must_use]
pub fn variant_for_level(level: Level, message: String) -> LogVariant {
    match level {
        Level::Error => LogVariant::Error(message),
        Level::Warn => LogVariant::Warning(message),
        Level::Info | Level::Debug | Level::Trace => LogVariant::Line(message),
    }
}

/// `log` crate logger writing through a [`PrettyLog`].
pub struct PrettyLogger {
    log: PrettyLog,
    options: Option<DisplayOptions>,
    layout: Option<LayoutTemplate>,
    show_targets: bool,
}

impl PrettyLogger {
    /// Create a logger configured from the environment.
    #[must_use]
    pub fn new() -> Self {
        PrettyLoggerBuilder::new().build()
    }

    /// Create a logger using the builder pattern.
    #[must_use]
    pub fn builder() -> PrettyLoggerBuilder {
        PrettyLoggerBuilder::new()
    }

    /// Initialize as the global logger.
    ///
    /// Returns an error if a logger has already been set.
    pub fn init() -> Result<(), log::SetLoggerError> {
        PrettyLoggerBuilder::new().init()
    }

    /// Initialize as the global logger, ignoring errors if already set.
    pub fn try_init() {
        let _ = Self::init();
    }

    /// Convert a log::Record to variant, description and call context.
    fn record_to_entry(&self, record: &Record) -> (LogVariant, String, CallContext) {
        let variant = variant_for_level(record.level(), record.args().to_string());

        let describe = if self.show_targets {
            format!("[{}]", record.target())
        } else {
            String::new()
        };

        let context = CallContext::new(
            record.file().unwrap_or("<unknown>"),
            record.module_path().unwrap_or(record.target()),
            record.line().unwrap_or(0),
        );

        (variant, describe, context)
    }

    /// Render a record without writing it.
    #[must_use]
    pub fn render(&self, record: &Record) -> String {
        let (variant, describe, context) = self.record_to_entry(record);
        self.log.render(
            &variant,
            &describe,
            self.options.unwrap_or(self.log.default_options()),
            self.layout.as_ref().unwrap_or(self.log.default_layout()),
            &context,
        )
    }
}

impl Default for PrettyLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for PrettyLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // Sink failures are reported on the console target; routing them
        // back into the same sink would recurse.
        self.log.is_enabled() && !metadata.target().starts_with(targets::CONSOLE)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let (variant, describe, context) = self.record_to_entry(record);
        self.log.log(
            &variant,
            &describe,
            self.options.unwrap_or(self.log.default_options()),
            self.layout.as_ref().unwrap_or(self.log.default_layout()),
            &context,
        );
    }

    fn flush(&self) {}
}

/// Builder for configuring the pretty logger.
///
/// # Example
///
/// ```ignore
/// use prettylog_console::logging::PrettyLoggerBuilder;
/// use prettylog_core::{DisplayOptions, LayoutTemplate};
///
/// PrettyLoggerBuilder::new()
///     .options(DisplayOptions::Complete)
///     .layout(LayoutTemplate::STATUS_LINE)
///     .with_targets(true)
///     .init()
///     .expect("Failed to initialize logger");
/// ```
#[derive(Debug)]
pub struct PrettyLoggerBuilder {
    config: Option<ConsoleConfig>,
    console: Option<Arc<PrettyConsole>>,
    options: Option<DisplayOptions>,
    layout: Option<LayoutTemplate>,
    show_targets: bool,
}

impl Default for PrettyLoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PrettyLoggerBuilder {
    /// Create a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: None,
            console: None,
            options: None,
            layout: None,
            show_targets: false,
        }
    }

    /// Use this config instead of reading the environment.
    #[must_use]
    pub fn config(mut self, config: ConsoleConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Write to this console instead of stdout.
    #[must_use]
    pub fn console(mut self, console: Arc<PrettyConsole>) -> Self {
        self.console = Some(console);
        self
    }

    /// Display options for every record.
    #[must_use]
    pub fn options(mut self, options: DisplayOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Header layout for every record.
    #[must_use]
    pub fn layout(mut self, layout: LayoutTemplate) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Print the record target in place of the fallback label.
    #[must_use]
    pub fn with_targets(mut self, show: bool) -> Self {
        self.show_targets = show;
        self
    }

    /// Build the logger without installing it.
    #[must_use]
    pub fn build(self) -> PrettyLogger {
        let config = self.config.unwrap_or_else(ConsoleConfig::from_env);
        config.apply();

        let log = match self.console {
            Some(console) => PrettyLog::with_console(&config, console),
            None => PrettyLog::from_config(&config),
        };

        PrettyLogger {
            log,
            options: self.options,
            layout: self.layout,
            show_targets: self.show_targets,
        }
    }

    /// Build and install as the global logger.
    ///
    /// Returns an error if a logger has already been set.
    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let logger = Box::new(self.build());
        log::set_boxed_logger(logger)?;
        log::set_max_level(LevelFilter::Trace);
        Ok(())
    }

    /// Build and install, ignoring errors if already set.
    pub fn try_init(self) {
        let _ = self.init();
    }
}
