//! Thread indicator vocabulary for the `THREAD` token.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ParseFormatError;

/// The pair of strings rendered for primary and non-primary threads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct ThreadIcons {
    primary: Cow<'static, str>,
    other: Cow<'static, str>,
}

impl ThreadIcons {
    /// `[MAIN]` / `[NOT MAIN]`
    pub const VERBOSE: ThreadIcons = ThreadIcons {
        primary: Cow::Borrowed("[MAIN]"),
        other: Cow::Borrowed("[NOT MAIN]"),
    };

    /// `[M]` / `[!=M]`
    pub const COMPACT: ThreadIcons = ThreadIcons {
        primary: Cow::Borrowed("[M]"),
        other: Cow::Borrowed("[!=M]"),
    };

    const NAMES: &'static [&'static str] = &["verbose", "compact"];

    /// A custom pair.
    pub fn custom(primary: impl Into<String>, other: impl Into<String>) -> Self {
        Self {
            primary: Cow::Owned(primary.into()),
            other: Cow::Owned(other.into()),
        }
    }

    /// The string for a thread with the given primacy.
    #[must_use]
    pub fn icon(&self, is_primary: bool) -> &str {
        if is_primary { &self.primary } else { &self.other }
    }

    #[must_use]
    pub fn primary(&self) -> &str {
        &self.primary
    }

    #[must_use]
    pub fn other(&self) -> &str {
        &self.other
    }
}

impl Default for ThreadIcons {
    fn default() -> Self {
        Self::VERBOSE
    }
}

impl FromStr for ThreadIcons {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" | "main" => Ok(Self::VERBOSE),
            "compact" | "m" => Ok(Self::COMPACT),
            _ => Err(ParseFormatError::new("thread icons", s, Self::NAMES)),
        }
    }
}

impl TryFrom<String> for ThreadIcons {
    type Error = ParseFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ThreadIcons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.primary, self.other)
    }
}
