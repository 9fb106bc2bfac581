//! prettylog CLI - emit formatted entries from shell scripts.
//!
//! Commands:
//! - `log` - Render one entry to stdout
//! - `formats` - List the supported timestamp patterns
//! - `layouts` - List the built-in header layouts

#![forbid(unsafe_code)]

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use log::{debug, info};

use prettylog::{
    CallContext, ConfigError, ConsoleConfig, DateFormatSpec, DisplayContext, DisplayOptions,
    IconSet, LayoutTemplate, LogVariant, PrettyConsole, PrettyLog, PrettyLogger, ThreadIcons,
};
use prettylog_core::{ParseFormatError, logging::targets};

/// prettylog CLI - Emoji-annotated debug lines with call-site headers.
#[derive(Parser)]
#[command(name = "prettylog")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Report configuration decisions on stderr.
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one log entry to stdout.
    ///
    /// Variants: line, success, warning, error, todo, link.
    ///
    /// Example: prettylog log warning "disk low" --complete --layout status-line
    Log(LogArgs),

    /// List the supported timestamp patterns with a sample of each.
    Formats,

    /// List the built-in header layouts.
    Layouts,
}

#[derive(Args)]
struct LogArgs {
    /// Entry kind (line, success, warning, error, todo, link).
    variant: String,

    /// Payload text.
    message: Option<String>,

    /// Text placed between the icon and the payload.
    #[arg(long, short = 'd', default_value = "")]
    describe: String,

    /// Print the call-site header above the entry.
    #[arg(long, short = 'c')]
    complete: bool,

    /// Header layout: status-line or report.
    #[arg(long, short = 'l')]
    layout: Option<LayoutTemplate>,

    /// Timestamp pattern name (see `prettylog formats`).
    #[arg(long)]
    date_format: Option<DateFormatSpec>,

    /// Thread indicator vocabulary: verbose or compact.
    #[arg(long)]
    thread_icons: Option<ThreadIcons>,

    /// Variant icon vocabulary: standard or classic.
    #[arg(long)]
    icons: Option<IconSet>,

    /// Config file (default: <config dir>/prettylog/config.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// File name reported in the header.
    #[arg(long, default_value = "prettylog")]
    file: String,

    /// Function name reported in the header.
    #[arg(long, default_value = "main")]
    function: String,

    /// Line number reported in the header.
    #[arg(long, default_value = "0")]
    line: u32,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug)]
enum CliError {
    /// The config file could not be read or parsed.
    Config(ConfigError),
    /// An argument named something that does not exist.
    Usage(ParseFormatError),
}

impl CliError {
    fn exit_code(&self) -> ExitCode {
        match self {
            Self::Usage(_) => ExitCode::FAILURE,
            Self::Config(_) => ExitCode::from(2),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "config: {err}"),
            Self::Usage(err) => write!(f, "{err}"),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<ParseFormatError> for CliError {
    fn from(err: ParseFormatError) -> Self {
        Self::Usage(err)
    }
}

// ============================================================================
// Commands
// ============================================================================

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        init_diagnostics();
    }

    let result = match cli.command {
        Commands::Log(args) => cmd_log(args),
        Commands::Formats => {
            cmd_formats();
            Ok(())
        }
        Commands::Layouts => {
            cmd_layouts();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}

/// Route `log` records to stderr so they never mix with entries on stdout.
fn init_diagnostics() {
    let stderr = PrettyConsole::with_writer(io::stderr(), DisplayContext::Plain);
    PrettyLogger::builder()
        .console(Arc::new(stderr))
        .options(DisplayOptions::Abbreviated)
        .with_targets(true)
        .try_init();
}

fn cmd_log(args: LogArgs) -> Result<(), CliError> {
    let message = args.message.as_deref().unwrap_or_default();
    let variant = LogVariant::from_name(&args.variant, message)?;
    let config = apply_overrides(load_config(args.config.as_deref())?.merge_env(), &args);
    config.apply();

    let log = PrettyLog::from_config(&config);
    if !log.is_enabled() {
        debug!(target: targets::CONFIG, "output disabled, dropping entry");
        return Ok(());
    }

    let options = if args.complete {
        DisplayOptions::Complete
    } else {
        log.default_options()
    };
    let context = CallContext::new(args.file, args.function, args.line);
    log.log(&variant, &args.describe, options, log.default_layout(), &context);
    Ok(())
}

/// Explicit `--config`, else the default location if it exists, else defaults.
fn load_config(explicit: Option<&Path>) -> Result<ConsoleConfig, ConfigError> {
    if let Some(path) = explicit {
        info!(target: targets::CONFIG, "loading config from {}", path.display());
        return ConsoleConfig::from_file(path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => {
            info!(target: targets::CONFIG, "loading config from {}", path.display());
            ConsoleConfig::from_file(path)
        }
        _ => {
            debug!(target: targets::CONFIG, "no config file, using defaults");
            Ok(ConsoleConfig::new())
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("prettylog").join("config.toml"))
}

/// Command-line flags win over the config file and the environment.
fn apply_overrides(mut config: ConsoleConfig, args: &LogArgs) -> ConsoleConfig {
    if let Some(layout) = &args.layout {
        config = config.with_layout(layout.clone());
    }
    if let Some(spec) = args.date_format {
        config = config.with_date_format(spec);
    }
    if let Some(icons) = &args.thread_icons {
        config = config.with_thread_icons(icons.clone());
    }
    if let Some(icons) = args.icons {
        config = config.with_icons(icons);
    }
    config
}

fn cmd_formats() {
    let at = prettylog_core::now();
    for spec in DateFormatSpec::ALL {
        println!("{:<24} {:<26} {}", spec.name(), spec.pattern(), spec.format(at));
    }
}

fn cmd_layouts() {
    for layout in LayoutTemplate::builtin() {
        println!("{}:", layout.name());
        for line in layout.pattern().lines() {
            println!("    {line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn log_args(extra: &[&str]) -> LogArgs {
        let mut argv = vec!["prettylog", "log", "line"];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Commands::Log(args) => args,
            _ => unreachable!("parsed a log command"),
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_config() {
        let args = log_args(&[
            "--layout",
            "status-line",
            "--icons",
            "classic",
            "--thread-icons",
            "compact",
            "--date-format",
            "rfc822-like",
        ]);
        let config = apply_overrides(ConsoleConfig::new(), &args);

        assert_eq!(config.default_layout, LayoutTemplate::STATUS_LINE);
        assert_eq!(config.icons, IconSet::Classic);
        assert_eq!(config.thread_icons, ThreadIcons::COMPACT);
        assert_eq!(config.date_format, Some(DateFormatSpec::Rfc822Like));
    }

    #[test]
    fn absent_flags_keep_config() {
        let base = ConsoleConfig::new().with_icons(IconSet::Classic);
        let config = apply_overrides(base.clone(), &log_args(&[]));
        assert_eq!(config, base);
    }

    #[test]
    fn header_defaults() {
        let args = log_args(&[]);
        assert_eq!(args.file, "prettylog");
        assert_eq!(args.function, "main");
        assert_eq!(args.line, 0);
        assert!(!args.complete);
    }

    #[test]
    fn config_errors_exit_with_two() {
        let err = CliError::from(ConsoleConfig::from_toml_str("enabled = 3").unwrap_err());
        assert_eq!(err.exit_code(), ExitCode::from(2));
        assert!(err.to_string().starts_with("config: "));
    }
}
