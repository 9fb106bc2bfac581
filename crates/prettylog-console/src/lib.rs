//! Console output for prettylog.
//!
//! This crate turns the pure rendering in `prettylog-core` into output:
//! - [`PrettyConsole`] - mutex-guarded stdout sink, optionally styled
//! - [`PrettyLog`] and [`LogEntry`] - render a call and write it once
//! - [`ConsoleConfig`] - enable flag, vocabularies, defaults, env/TOML loading
//! - [`logging::PrettyLogger`] - `log` facade bridge
//! - [`testing::TestConsole`] - capture output in tests

#![forbid(unsafe_code)]

pub mod config;
pub mod console;
pub mod detection;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod testing;

pub use config::ConsoleConfig;
pub use self::console::{PrettyConsole, console, init_console};
pub use detection::{DisplayContext, should_enable_rich};
pub use dispatch::{LogEntry, PrettyLog, init, install, pretty_log};
pub use error::ConfigError;
pub use prettylog_core;
