//! Internal diagnostics for prettylog.
//!
//! prettylog reports its own problems (an unreadable config file, an
//! unknown environment value) through the standard [`log`] facade, never
//! through its own console sink. Applications decide where those records
//! go; installing [`PrettyLogger`] from `prettylog-console` routes them
//! back through the pretty formatter.
//!
//! [`PrettyLogger`]: https://docs.rs/prettylog-console
//!
//! # Log Targets
//!
//! - `prettylog`: Root target for all prettylog diagnostics
//! - `prettylog::config`: Configuration loading (env, TOML files)
//! - `prettylog::console`: Sink writes
//!
//! Filter on these targets in whichever logger the application installs.

// Re-export log macros for ergonomic use
pub use log::{debug, error, info, trace, warn};

// Re-export log level types for programmatic use
pub use log::{Level, LevelFilter};

/// Log targets used by prettylog components.
pub mod targets {
    /// Root target for all prettylog diagnostics.
    pub const PRETTYLOG: &str = "prettylog";

    /// Configuration loading from environment and files.
    pub const CONFIG: &str = "prettylog::config";

    /// Console sink writes.
    pub const CONSOLE: &str = "prettylog::console";
}

/// Returns whether logging is enabled at the given level for the given target.
#[inline]
#[must_use]
pub fn is_enabled(level: Level, target: &str) -> bool {
    log::log_enabled!(target: target, level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_targets_are_hierarchical() {
        assert!(targets::CONFIG.starts_with(targets::PRETTYLOG));
        assert!(targets::CONSOLE.starts_with(targets::PRETTYLOG));
    }

    #[test]
    fn disabled_without_logger() {
        // No logger is installed in unit tests, so max level is Off.
        assert!(!is_enabled(Level::Trace, targets::CONFIG));
    }
}
