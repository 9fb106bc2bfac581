//! Call-site snapshot.

/// Where a log call happened.
///
/// Captured once at the call site and read by the template renderer. The
/// `prettylog` facade builds one with its `call_context!` macro; code that
/// bridges other loggers fills it from whatever location data it has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallContext {
    file: String,
    function: String,
    line: u32,
    is_primary_thread: bool,
}

impl CallContext {
    /// Create a context, detecting the thread flag from the current thread.
    pub fn new(file: impl Into<String>, function: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            function: function.into(),
            line,
            is_primary_thread: is_primary_thread(),
        }
    }

    /// Override the detected thread flag.
    #[must_use]
    pub fn with_primary_thread(mut self, is_primary: bool) -> Self {
        self.is_primary_thread = is_primary;
        self
    }

    /// Full file path as captured.
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    #[must_use]
    pub fn function(&self) -> &str {
        &self.function
    }

    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[must_use]
    pub fn is_primary_thread(&self) -> bool {
        self.is_primary_thread
    }
}

/// Whether the current thread is the process's primary thread.
///
/// The Rust runtime names the thread that runs `main` "main"; every other
/// thread is either unnamed or carries its own name. The libtest harness
/// runs tests on threads named after the test, so tests see `false`.
#[must_use]
pub fn is_primary_thread() -> bool {
    std::thread::current().name() == Some("main")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_captured_values() {
        let ctx = CallContext::new("src/lib.rs", "demo::run", 42).with_primary_thread(true);
        assert_eq!(ctx.file(), "src/lib.rs");
        assert_eq!(ctx.function(), "demo::run");
        assert_eq!(ctx.line(), 42);
        assert!(ctx.is_primary_thread());
    }

    #[test]
    fn spawned_thread_is_not_primary() {
        let handle = std::thread::Builder::new()
            .name("worker".into())
            .spawn(|| CallContext::new("a.rs", "f", 1).is_primary_thread());
        let is_primary = handle.unwrap().join().unwrap();
        assert!(!is_primary);
    }

    #[test]
    fn override_wins_over_detection() {
        let ctx = CallContext::new("a.rs", "f", 1).with_primary_thread(false);
        assert!(!ctx.is_primary_thread());
    }
}
