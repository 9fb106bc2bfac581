//! In-memory console for asserting on rendered entries.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use regex::Regex;

use crate::console::PrettyConsole;
use crate::detection::DisplayContext;

/// A [`PrettyConsole`] that records every write instead of printing it.
///
/// Each call to `write_entry` reaches the writer as a single write, so the
/// capture keeps one string per entry. [`entries`](Self::entries) exposes
/// that grouping; [`output`](Self::output) flattens it into lines.
///
/// ```ignore
/// let tc = TestConsole::new();
/// let log = PrettyLog::with_console(&ConsoleConfig::new(), tc.shared());
/// LogEntry::new(LogVariant::warning("disk low"), ctx).emit_to(&log);
/// assert_eq!(tc.output(), ["⚠️ (WARNING) disk low"]);
/// ```
#[derive(Clone)]
pub struct TestConsole {
    inner: Arc<PrettyConsole>,
    writes: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl TestConsole {
    /// Plain console: headers are written unstyled.
    #[must_use]
    pub fn new() -> Self {
        Self::with_context(DisplayContext::Plain)
    }

    /// Rich console: headers carry ANSI styling, visible in
    /// [`raw_output`](Self::raw_output).
    #[must_use]
    pub fn new_rich() -> Self {
        Self::with_context(DisplayContext::Rich)
    }

    fn with_context(context: DisplayContext) -> Self {
        let writes = Arc::new(Mutex::new(Vec::new()));
        let recorder = Recorder(Arc::clone(&writes));
        Self {
            inner: Arc::new(PrettyConsole::with_writer(recorder, context)),
            writes,
        }
    }

    #[must_use]
    pub fn console(&self) -> &PrettyConsole {
        &self.inner
    }

    /// Handle for building a `PrettyLog` that writes here.
    #[must_use]
    pub fn shared(&self) -> Arc<PrettyConsole> {
        Arc::clone(&self.inner)
    }

    /// One string per write, ANSI codes stripped, trailing newline removed.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.snapshot()
            .iter()
            .map(|bytes| {
                let mut text = decode(&strip_ansi_escapes::strip(bytes));
                if text.ends_with('\n') {
                    text.pop();
                }
                text
            })
            .collect()
    }

    /// Captured lines, ANSI codes stripped.
    #[must_use]
    pub fn output(&self) -> Vec<String> {
        self.snapshot()
            .iter()
            .flat_map(|bytes| split_lines(&decode(&strip_ansi_escapes::strip(bytes))))
            .collect()
    }

    /// Captured lines exactly as written.
    #[must_use]
    pub fn raw_output(&self) -> Vec<String> {
        self.snapshot()
            .iter()
            .flat_map(|bytes| split_lines(&decode(bytes)))
            .collect()
    }

    /// All captured lines joined with `\n`.
    #[must_use]
    pub fn output_string(&self) -> String {
        self.output().join("\n")
    }

    /// Case-sensitive substring check over [`output_string`](Self::output_string).
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.output_string().contains(needle)
    }

    /// Regex check over [`output_string`](Self::output_string). An invalid
    /// pattern never matches.
    #[must_use]
    pub fn matches(&self, pattern: &str) -> bool {
        Regex::new(pattern).is_ok_and(|re| re.is_match(&self.output_string()))
    }

    /// # Panics
    ///
    /// Panics if no captured line contains `needle`.
    pub fn assert_contains(&self, needle: &str) {
        assert!(
            self.contains(needle),
            "expected output to contain {needle:?}, got:\n{}",
            self.output_string()
        );
    }

    /// # Panics
    ///
    /// Panics if any captured line contains `needle`.
    pub fn assert_not_contains(&self, needle: &str) {
        assert!(
            !self.contains(needle),
            "expected output not to contain {needle:?}, got:\n{}",
            self.output_string()
        );
    }

    /// # Panics
    ///
    /// Panics if the number of captured lines differs from `expected`.
    pub fn assert_line_count(&self, expected: usize) {
        let lines = self.output();
        assert_eq!(
            lines.len(),
            expected,
            "unexpected line count, got:\n{}",
            lines.join("\n")
        );
    }

    /// Forget everything captured so far.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn snapshot(&self) -> Vec<Vec<u8>> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Vec<u8>>> {
        self.writes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for TestConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TestConsole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestConsole")
            .field("context", &self.inner.context())
            .field("entries", &self.lock().len())
            .finish()
    }
}

fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

struct Recorder(Arc<Mutex<Vec<Vec<u8>>>>);

impl Write for Recorder {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(buf.to_vec());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
