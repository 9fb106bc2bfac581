//! Icon and fallback-label vocabularies for log variants.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ParseFormatError;
use crate::variant::LogVariant;

/// Which icon and fallback label each [`LogVariant`] gets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum IconSet {
    /// Labelled vocabulary; `Line` has no icon and no label.
    ///
    /// | Variant | Icon | Label |
    /// |---|---|---|
    /// | Success | ✅ | `(SUCCESS)` |
    /// | Warning | ⚠️ | `(WARNING)` |
    /// | Error | 🛑 | `(ERROR)` |
    /// | Todo | ✏️ | `(TO-DO)` |
    /// | Link | 🌐 | `(API)` |
    #[default]
    Standard,
    /// Icon-only vocabulary where every variant, `Line` included, has an
    /// icon and none has a fallback label.
    Classic,
}

impl IconSet {
    const NAMES: &'static [&'static str] = &["standard", "classic"];

    /// Icon for a variant, or `""` when the variant has none.
    #[must_use]
    pub fn icon(self, variant: &LogVariant) -> &'static str {
        match (self, variant) {
            (Self::Standard, LogVariant::Line(_)) => "",
            (Self::Standard, LogVariant::Success(_)) => "✅",
            (Self::Standard, LogVariant::Warning(_)) => "⚠️",
            (Self::Standard, LogVariant::Error(_)) => "🛑",
            (Self::Standard, LogVariant::Todo(_)) => "✏️",
            (Self::Standard, LogVariant::Link(_)) => "🌐",
            (Self::Classic, LogVariant::Line(_)) => "✏️",
            (Self::Classic, LogVariant::Success(_)) => "✅",
            (Self::Classic, LogVariant::Warning(_)) => "⚠️",
            (Self::Classic, LogVariant::Error(_)) => "🛑",
            (Self::Classic, LogVariant::Todo(_)) => "👨🏼‍💻",
            (Self::Classic, LogVariant::Link(_)) => "🌏",
        }
    }

    /// Label used when the caller passes an empty description.
    #[must_use]
    pub fn fallback_label(self, variant: &LogVariant) -> &'static str {
        match (self, variant) {
            (Self::Classic, _) | (Self::Standard, LogVariant::Line(_)) => "",
            (Self::Standard, LogVariant::Success(_)) => "(SUCCESS)",
            (Self::Standard, LogVariant::Warning(_)) => "(WARNING)",
            (Self::Standard, LogVariant::Error(_)) => "(ERROR)",
            (Self::Standard, LogVariant::Todo(_)) => "(TO-DO)",
            (Self::Standard, LogVariant::Link(_)) => "(API)",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }
}

impl FromStr for IconSet {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "classic" | "legacy" => Ok(Self::Classic),
            _ => Err(ParseFormatError::new("icon set", s, Self::NAMES)),
        }
    }
}

impl TryFrom<String> for IconSet {
    type Error = ParseFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for IconSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
