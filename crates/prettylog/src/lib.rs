//! prettylog: emoji-annotated debug logging with call-site headers.
//!
//! ```ignore
//! use prettylog::{DisplayOptions, LayoutTemplate, LogVariant, debug_log, log_warning};
//!
//! log_warning!("disk usage at {}%", 91);
//! // ⚠️ (WARNING) disk usage at 91%
//!
//! debug_log!(
//!     LogVariant::success("migrated 12 tables"),
//!     describe = "schema",
//!     options = DisplayOptions::Complete,
//!     layout = LayoutTemplate::STATUS_LINE,
//! );
//! // [MAIN] [4 Mar 2022, 13:05:09] [main.rs -> app::migrate, AT LINE: 31]
//! // ✅ schema migrated 12 tables
//! ```
//!
//! # Call-site capture
//!
//! Headers need the caller's file, function and line. The macros capture
//! them with `file!()`, `line!()` and [`function_name!`], so the caller
//! never passes them by hand. Code that cannot use the macros builds a
//! [`CallContext`] itself and calls [`log`].
//!
//! # Configuration
//!
//! The global dispatcher reads `PRETTYLOG_*` environment variables on first
//! use. Call [`init`] with a [`ConsoleConfig`] at startup to configure it
//! explicitly instead.

#![forbid(unsafe_code)]

mod macros;

pub use prettylog_console::logging::{PrettyLogger, PrettyLoggerBuilder};
pub use prettylog_console::{
    ConfigError, ConsoleConfig, DisplayContext, LogEntry, PrettyConsole, PrettyLog, init,
    install, pretty_log,
};
pub use prettylog_core::{
    CallContext, DateFormatSpec, DisplayOptions, IconSet, LayoutTemplate, LogFormatter,
    LogVariant, ThreadIcons, date_format, set_date_format,
};

/// Log through the global dispatcher with an explicit call context.
pub fn log(
    variant: &LogVariant,
    describe: &str,
    options: DisplayOptions,
    layout: &LayoutTemplate,
    context: &CallContext,
) {
    pretty_log().log(variant, describe, options, layout, context);
}

/// Drop trailing closure segments from a type path.
#[doc(hidden)]
#[must_use]
pub fn __trim_function_path(path: &str) -> &str {
    let mut trimmed = path;
    while let Some(outer) = trimmed.strip_suffix("::{{closure}}") {
        trimmed = outer;
    }
    trimmed
}
