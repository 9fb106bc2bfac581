use std::fmt;

/// Error returned when a name does not match any known preset.
///
/// Produced by the `FromStr` implementations of [`DateFormatSpec`],
/// [`ThreadIcons`], [`IconSet`], [`DisplayOptions`] and [`LayoutTemplate`].
///
/// [`DateFormatSpec`]: crate::DateFormatSpec
/// [`ThreadIcons`]: crate::ThreadIcons
/// [`IconSet`]: crate::IconSet
/// [`DisplayOptions`]: crate::DisplayOptions
/// [`LayoutTemplate`]: crate::LayoutTemplate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFormatError {
    /// What was being parsed (e.g. `date format`).
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
    /// Accepted names, for the error message.
    pub expected: &'static [&'static str],
}

impl ParseFormatError {
    pub(crate) fn new(kind: &'static str, value: &str, expected: &'static [&'static str]) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}

impl fmt::Display for ParseFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown {} '{}' (expected one of: {})",
            self.kind,
            self.value,
            self.expected.join(", ")
        )
    }
}

impl std::error::Error for ParseFormatError {}
