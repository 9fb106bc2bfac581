//! Mutex-guarded stdout sink

use std::io::{self, Write};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use prettylog_core::logging::{targets, trace};

use crate::detection::DisplayContext;

/// Console sink for rendered log entries.
///
/// Every entry is assembled into one string and written with a single
/// `write_all` while the writer lock is held, so concurrent callers never
/// interleave inside an entry. Write errors are dropped: logging never
/// fails the caller.
pub struct PrettyConsole {
    inner: Mutex<Box<dyn Write + Send>>,
    context: DisplayContext,
}

impl PrettyConsole {
    /// Create with automatic detection
    #[must_use]
    pub fn new() -> Self {
        Self::with_context(DisplayContext::detect())
    }

    /// Create writing to stdout with an explicit context
    #[must_use]
    pub fn with_context(context: DisplayContext) -> Self {
        Self::with_writer(io::stdout(), context)
    }

    /// Create with custom writer (for testing)
    #[must_use]
    pub fn with_writer<W: Write + Send + 'static>(writer: W, context: DisplayContext) -> Self {
        Self {
            inner: Mutex::new(Box::new(writer)),
            context,
        }
    }

    // ─────────────────────────────────────────────────
    // State Queries
    // ─────────────────────────────────────────────────

    /// Check if rich output is enabled
    pub fn is_rich(&self) -> bool {
        self.context.is_rich()
    }

    pub fn context(&self) -> DisplayContext {
        self.context
    }

    // ─────────────────────────────────────────────────
    // Output Methods
    // ─────────────────────────────────────────────────

    /// Write one log entry: the optional header block, then the body line.
    ///
    /// Header, `\n`, body, as `LogFormatter::render_at` composes them.
    pub fn write_entry(&self, header: Option<&str>, body: &str) {
        let mut entry = String::with_capacity(
            header.map_or(0, |h| h.len() + 16) + body.len() + 1,
        );
        if let Some(header) = header {
            if self.is_rich() {
                entry.push_str(&::console::style(header).dim().force_styling(true).to_string());
            } else {
                entry.push_str(header);
            }
            entry.push('\n');
        }
        entry.push_str(body);
        entry.push('\n');
        self.write_raw(&entry);
    }

    /// Print a line of plain text (no styling ever)
    pub fn print_plain(&self, text: &str) {
        let mut line = String::with_capacity(text.len() + 1);
        line.push_str(text);
        line.push('\n');
        self.write_raw(&line);
    }

    fn write_raw(&self, text: &str) {
        let mut writer = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = writer.write_all(text.as_bytes()).and_then(|()| writer.flush()) {
            trace!(target: targets::CONSOLE, "dropped log entry: {err}");
        }
    }
}

impl Default for PrettyConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PrettyConsole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyConsole")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

// ─────────────────────────────────────────────────────────
// Global Console Accessor
// ─────────────────────────────────────────────────────────

static CONSOLE: OnceLock<Arc<PrettyConsole>> = OnceLock::new();

/// Get the global console instance
#[must_use]
pub fn console() -> Arc<PrettyConsole> {
    CONSOLE
        .get_or_init(|| Arc::new(PrettyConsole::new()))
        .clone()
}

/// Initialize the global console with a specific context
/// Must be called before any output; returns error if already initialized
pub fn init_console(context: DisplayContext) -> Result<(), &'static str> {
    CONSOLE
        .set(Arc::new(PrettyConsole::with_context(context)))
        .map_err(|_| "Console already initialized")
}
