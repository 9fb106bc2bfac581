//! Bridge from the `log` facade into prettylog.
//!
//! - [`PrettyLogger`] - a `log` crate logger that renders records as
//!   prettylog entries
//! - [`PrettyLoggerBuilder`] - configures and installs it
//!
//! Records map onto variants by level: `Error` → error, `Warn` → warning,
//! everything else → plain line. There is no filtering beyond the config's
//! enable flag; the `log` max level stays fully open once installed.
//!
//! # Example
//!
//! ```ignore
//! use prettylog_console::logging::PrettyLogger;
//!
//! PrettyLogger::builder().with_targets(true).init()?;
//! log::warn!("cache miss rate above 40%");
//! ```

mod logger;

pub use logger::{PrettyLogger, PrettyLoggerBuilder, variant_for_level};
