//! Plain/rich output detection
//!
//! Determines whether the header block may be styled with ANSI escapes.

/// Display context representing the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayContext {
    /// Plain text, written exactly as rendered
    #[default]
    Plain,
    /// Header dimmed with ANSI styling
    Rich,
}

impl DisplayContext {
    /// Create a plain context
    #[must_use]
    pub fn new_plain() -> Self {
        Self::Plain
    }

    /// Create a rich context
    #[must_use]
    pub fn new_rich() -> Self {
        Self::Rich
    }

    /// Auto-detect the display context from environment
    #[must_use]
    pub fn detect() -> Self {
        if should_enable_rich() {
            Self::Rich
        } else {
            Self::Plain
        }
    }

    #[must_use]
    pub fn is_rich(&self) -> bool {
        matches!(self, Self::Rich)
    }

    #[must_use]
    pub fn is_plain(&self) -> bool {
        matches!(self, Self::Plain)
    }
}

/// Whether the environment asks for plain output
#[must_use]
pub fn is_plain_requested() -> bool {
    std::env::var("PRETTYLOG_PLAIN").is_ok()
        || std::env::var("NO_COLOR").is_ok()
        || std::env::var("CI").is_ok()
}

/// Determine if rich output should be enabled
#[must_use]
pub fn should_enable_rich() -> bool {
    // Explicit enable always wins
    if std::env::var("PRETTYLOG_FORCE_COLOR").is_ok() {
        return true;
    }

    if is_plain_requested() {
        return false;
    }

    ::console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_context_new_plain() {
        let ctx = DisplayContext::new_plain();
        assert!(ctx.is_plain());
        assert!(!ctx.is_rich());
    }

    #[test]
    fn test_display_context_new_rich() {
        let ctx = DisplayContext::new_rich();
        assert!(ctx.is_rich());
        assert!(!ctx.is_plain());
    }

    #[test]
    fn test_display_context_default_is_plain() {
        assert!(DisplayContext::default().is_plain());
    }

    #[test]
    fn test_display_context_equality() {
        assert_eq!(DisplayContext::Plain, DisplayContext::Plain);
        assert_ne!(DisplayContext::Plain, DisplayContext::Rich);
    }
}
