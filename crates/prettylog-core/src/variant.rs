//! The tagged message model.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ParseFormatError;

/// One log call's message: a category plus its payload.
///
/// The category picks the icon and fallback label; the payload is always
/// appended to the body line, even when empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogVariant {
    /// Plain line with no icon.
    Line(String),
    /// Something worked.
    Success(String),
    /// Suspicious but recoverable.
    Warning(String),
    /// Something failed.
    Error(String),
    /// Work left to do.
    Todo(String),
    /// A URL or API reference.
    Link(String),
}

impl LogVariant {
    /// Names accepted by [`LogVariant::from_name`].
    pub const NAMES: &'static [&'static str] =
        &["line", "success", "warning", "error", "todo", "link"];

    pub fn line(text: impl Into<String>) -> Self {
        Self::Line(text.into())
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::Success(text.into())
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::Warning(text.into())
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::Error(text.into())
    }

    pub fn todo(text: impl Into<String>) -> Self {
        Self::Todo(text.into())
    }

    pub fn link(text: impl Into<String>) -> Self {
        Self::Link(text.into())
    }

    /// Build a variant from its lowercase name and a payload.
    ///
    /// `ln`, `warn`, `to-do`, `url` and `api` are accepted as aliases.
    pub fn from_name(name: &str, text: impl Into<String>) -> Result<Self, ParseFormatError> {
        let text = text.into();
        match name.to_lowercase().as_str() {
            "line" | "ln" => Ok(Self::Line(text)),
            "success" => Ok(Self::Success(text)),
            "warning" | "warn" => Ok(Self::Warning(text)),
            "error" => Ok(Self::Error(text)),
            "todo" | "to-do" => Ok(Self::Todo(text)),
            "link" | "url" | "api" => Ok(Self::Link(text)),
            _ => Err(ParseFormatError::new("log variant", name, Self::NAMES)),
        }
    }

    /// The wrapped payload.
    #[must_use]
    pub fn payload(&self) -> &str {
        match self {
            Self::Line(text)
            | Self::Success(text)
            | Self::Warning(text)
            | Self::Error(text)
            | Self::Todo(text)
            | Self::Link(text) => text,
        }
    }

    /// Lowercase category name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Line(_) => "line",
            Self::Success(_) => "success",
            Self::Warning(_) => "warning",
            Self::Error(_) => "error",
            Self::Todo(_) => "todo",
            Self::Link(_) => "link",
        }
    }
}

impl Default for LogVariant {
    fn default() -> Self {
        Self::Line(String::new())
    }
}

/// Whether a call renders the call-context header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum DisplayOptions {
    /// Body line only.
    #[default]
    Abbreviated,
    /// Header block followed by the body line.
    Complete,
}

impl DisplayOptions {
    const NAMES: &'static [&'static str] = &["abbreviated", "complete"];

    #[must_use]
    pub fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl FromStr for DisplayOptions {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "abbreviated" | "abbreviate" | "short" => Ok(Self::Abbreviated),
            "complete" | "full" => Ok(Self::Complete),
            _ => Err(ParseFormatError::new("display option", s, Self::NAMES)),
        }
    }
}

impl TryFrom<String> for DisplayOptions {
    type Error = ParseFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for DisplayOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Abbreviated => f.write_str("abbreviated"),
            Self::Complete => f.write_str("complete"),
        }
    }
}
