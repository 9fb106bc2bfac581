//! Timestamp patterns for the `DATE` token.
//!
//! The active pattern is process-wide: set it once at startup with
//! [`set_date_format`] and every header rendered afterwards uses it.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use serde::Deserialize;
use time::OffsetDateTime;
use time::macros::format_description;

use crate::error::ParseFormatError;

/// One of the five supported timestamp layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum DateFormatSpec {
    /// `03/04/2022 13:05:09:042`
    MonthDayYearMillis,
    /// `03-04-2022 13:05:09`
    MonthDayYearDashed,
    /// `Fri, 4 Mar 2022 13:05:09 +0000`
    Rfc822Like,
    /// `Mar 4, 13:05:09:042+0000`
    MonthDayMillisOffset,
    /// `4 Mar 2022, 13:05:09`
    #[default]
    DayMonthYear,
}

impl DateFormatSpec {
    /// Every pattern, in declaration order.
    pub const ALL: [DateFormatSpec; 5] = [
        Self::MonthDayYearMillis,
        Self::MonthDayYearDashed,
        Self::Rfc822Like,
        Self::MonthDayMillisOffset,
        Self::DayMonthYear,
    ];

    const NAMES: &'static [&'static str] = &[
        "month-day-year-millis",
        "month-day-year-dashed",
        "rfc822-like",
        "month-day-millis-offset",
        "day-month-year",
    ];

    /// Kebab-case name used in config files and on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    /// The pattern in `yyyy/MM/dd` date-pattern notation.
    ///
    /// Also accepted by [`FromStr`], so existing configs written with the
    /// raw patterns keep working.
    #[must_use]
    pub fn pattern(self) -> &'static str {
        match self {
            Self::MonthDayYearMillis => "MM/dd/yyyy HH:mm:ss:SSS",
            Self::MonthDayYearDashed => "MM-dd-yyyy HH:mm:ss",
            Self::Rfc822Like => "E, d MMM yyyy HH:mm:ss Z",
            Self::MonthDayMillisOffset => "MMM d, HH:mm:ss:SSSZ",
            Self::DayMonthYear => "d MMM yyyy, HH:mm:ss",
        }
    }

    /// Format a timestamp with this pattern.
    ///
    /// Formatting a valid `OffsetDateTime` with these descriptions cannot
    /// fail in practice; if it ever does, the result is an empty string.
    #[must_use]
    pub fn format(self, at: OffsetDateTime) -> String {
        let formatted = match self {
            Self::MonthDayYearMillis => at.format(format_description!(
                "[month]/[day]/[year] [hour]:[minute]:[second]:[subsecond digits:3]"
            )),
            Self::MonthDayYearDashed => at.format(format_description!(
                "[month]-[day]-[year] [hour]:[minute]:[second]"
            )),
            Self::Rfc822Like => at.format(format_description!(
                "[weekday repr:short], [day padding:none] [month repr:short] [year] [hour]:[minute]:[second] [offset_hour sign:mandatory][offset_minute]"
            )),
            Self::MonthDayMillisOffset => at.format(format_description!(
                "[month repr:short] [day padding:none], [hour]:[minute]:[second]:[subsecond digits:3][offset_hour sign:mandatory][offset_minute]"
            )),
            Self::DayMonthYear => at.format(format_description!(
                "[day padding:none] [month repr:short] [year], [hour]:[minute]:[second]"
            )),
        };
        formatted.unwrap_or_default()
    }

    fn from_index(index: u8) -> Self {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .unwrap_or_default()
    }
}

impl FromStr for DateFormatSpec {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|spec| spec.name() == lowered || spec.pattern() == s)
            .ok_or_else(|| ParseFormatError::new("date format", s, Self::NAMES))
    }
}

impl TryFrom<String> for DateFormatSpec {
    type Error = ParseFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for DateFormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─────────────────────────────────────────────────────────
// Process-wide Active Pattern
// ─────────────────────────────────────────────────────────

static ACTIVE_DATE_FORMAT: AtomicU8 = AtomicU8::new(DateFormatSpec::DayMonthYear as u8);

/// Select the pattern used by every subsequent header render.
pub fn set_date_format(spec: DateFormatSpec) {
    ACTIVE_DATE_FORMAT.store(spec as u8, Ordering::Relaxed);
}

/// The currently active pattern.
#[must_use]
pub fn date_format() -> DateFormatSpec {
    DateFormatSpec::from_index(ACTIVE_DATE_FORMAT.load(Ordering::Relaxed))
}

/// Current time in the local offset, falling back to UTC when the offset
/// cannot be determined.
#[must_use]
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}
