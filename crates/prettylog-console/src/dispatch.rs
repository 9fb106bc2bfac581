//! Log call dispatch: render an entry and write it to the console.
//!
//! [`PrettyLog`] pairs a [`LogFormatter`] with a [`PrettyConsole`] and the
//! enable flag. [`LogEntry`] is the call-site value the `prettylog` macros
//! build: the variant, the call context, and whichever of `describe`,
//! `options` and `layout` the caller spelled out.
//!
//! # Example
//!
//! ```ignore
//! use prettylog_console::{LogEntry, pretty_log};
//! use prettylog_core::{CallContext, DisplayOptions, LogVariant};
//!
//! LogEntry::new(LogVariant::warning("disk low"), CallContext::new(file!(), "main", line!()))
//!     .options(DisplayOptions::Complete)
//!     .emit();
//! ```

use std::sync::{Arc, OnceLock};

use prettylog_core::{
    CallContext, DisplayOptions, LayoutTemplate, LogFormatter, LogVariant, now,
};

use crate::config::ConsoleConfig;
use crate::console::PrettyConsole;

/// Renders log calls and writes them to a console.
#[derive(Debug)]
pub struct PrettyLog {
    formatter: LogFormatter,
    console: Arc<PrettyConsole>,
    enabled: bool,
    default_options: DisplayOptions,
    default_layout: LayoutTemplate,
}

impl PrettyLog {
    /// Build from a config, writing to stdout.
    #[must_use]
    pub fn from_config(config: &ConsoleConfig) -> Self {
        let console = Arc::new(PrettyConsole::with_context(config.resolve_context()));
        Self::with_console(config, console)
    }

    /// Build from a config, writing to the given console.
    #[must_use]
    pub fn with_console(config: &ConsoleConfig, console: Arc<PrettyConsole>) -> Self {
        Self {
            formatter: config.formatter(),
            console,
            enabled: config.enabled,
            default_options: config.default_options,
            default_layout: config.default_layout.clone(),
        }
    }

    /// Replace the formatter, e.g. to pin a date format.
    #[must_use]
    pub fn with_formatter(mut self, formatter: LogFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn formatter(&self) -> &LogFormatter {
        &self.formatter
    }

    #[must_use]
    pub fn console(&self) -> &PrettyConsole {
        &self.console
    }

    #[must_use]
    pub fn default_options(&self) -> DisplayOptions {
        self.default_options
    }

    #[must_use]
    pub fn default_layout(&self) -> &LayoutTemplate {
        &self.default_layout
    }

    /// Render a call to text without writing it.
    ///
    /// Rendering ignores the enable flag.
    #[must_use]
    pub fn render(
        &self,
        variant: &LogVariant,
        describe: &str,
        options: DisplayOptions,
        layout: &LayoutTemplate,
        context: &CallContext,
    ) -> String {
        self.formatter
            .render(variant, describe, options, layout, context)
    }

    /// Render a call and write it to the console.
    ///
    /// Does nothing when output is disabled.
    pub fn log(
        &self,
        variant: &LogVariant,
        describe: &str,
        options: DisplayOptions,
        layout: &LayoutTemplate,
        context: &CallContext,
    ) {
        if !self.enabled {
            return;
        }

        // Same composition as `LogFormatter::render_at`, split so the
        // console can style the header on its own.
        let header = options
            .is_complete()
            .then(|| self.formatter.header_at(layout, context, now()));
        let body = self.formatter.body(variant, describe);
        self.console.write_entry(header.as_deref(), &body);
    }
}

// ─────────────────────────────────────────────────────────
// Call-site Entries
// ─────────────────────────────────────────────────────────

/// One log call with its call-site context.
///
/// Unset `options` and `layout` fall back to the target [`PrettyLog`]'s
/// defaults when the entry is emitted or rendered.
#[derive(Debug, Clone)]
#[must_use = "a LogEntry does nothing until emitted"]
pub struct LogEntry {
    variant: LogVariant,
    describe: String,
    options: Option<DisplayOptions>,
    layout: Option<LayoutTemplate>,
    context: CallContext,
}

impl LogEntry {
    pub fn new(variant: LogVariant, context: CallContext) -> Self {
        Self {
            variant,
            describe: String::new(),
            options: None,
            layout: None,
            context,
        }
    }

    /// Text printed instead of the variant's fallback label.
    pub fn describe(mut self, describe: impl Into<String>) -> Self {
        self.describe = describe.into();
        self
    }

    pub fn options(mut self, options: DisplayOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn layout(mut self, layout: LayoutTemplate) -> Self {
        self.layout = Some(layout);
        self
    }

    #[must_use]
    pub fn variant(&self) -> &LogVariant {
        &self.variant
    }

    #[must_use]
    pub fn context(&self) -> &CallContext {
        &self.context
    }

    /// Render with `log`'s formatter and defaults.
    #[must_use]
    pub fn render_with(&self, log: &PrettyLog) -> String {
        log.render(
            &self.variant,
            &self.describe,
            self.options.unwrap_or(log.default_options()),
            self.layout.as_ref().unwrap_or(log.default_layout()),
            &self.context,
        )
    }

    /// Write through `log`.
    pub fn emit_to(self, log: &PrettyLog) {
        log.log(
            &self.variant,
            &self.describe,
            self.options.unwrap_or(log.default_options()),
            self.layout.as_ref().unwrap_or(log.default_layout()),
            &self.context,
        );
    }

    /// Write through the global [`pretty_log`].
    pub fn emit(self) {
        self.emit_to(pretty_log());
    }
}

// ─────────────────────────────────────────────────────────
// Global Dispatcher Accessor
// ─────────────────────────────────────────────────────────

static PRETTY_LOG: OnceLock<PrettyLog> = OnceLock::new();

/// Get the global dispatcher, configured from the environment on first use.
#[must_use]
pub fn pretty_log() -> &'static PrettyLog {
    PRETTY_LOG.get_or_init(|| {
        let config = ConsoleConfig::from_env();
        config.apply();
        PrettyLog::with_console(&config, crate::console::console())
    })
}

/// Initialize the global dispatcher with a specific config.
///
/// Publishes the config's process-wide settings. Must be called before any
/// output; returns error if already initialized.
pub fn init(config: &ConsoleConfig) -> Result<(), &'static str> {
    config.apply();
    install(PrettyLog::from_config(config))
}

/// Install a ready-built dispatcher as the global one, e.g. one writing to
/// a custom console. Returns error if already initialized.
pub fn install(log: PrettyLog) -> Result<(), &'static str> {
    PRETTY_LOG
        .set(log)
        .map_err(|_| "prettylog already initialized")
}
