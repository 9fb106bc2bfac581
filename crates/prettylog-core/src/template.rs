//! Layout templates and token substitution.
//!
//! A layout is plain text containing `*{TOKEN}*` markers. Rendering scans
//! the pattern once and replaces every recognized marker with its value;
//! anything else, including unknown `*{...}*` markers, is copied through
//! untouched. Because the scan never revisits substituted text, a value
//! that happens to contain marker text (say, a function named
//! `*{LINE}*`) is never substituted a second time.
//!
//! # Example
//!
//! ```
//! use prettylog_core::{CallContext, HeaderValues, LayoutTemplate, substitute};
//!
//! let ctx = CallContext::new("/src/app/main.rs", "app::main", 7).with_primary_thread(true);
//! let layout = LayoutTemplate::custom("mini", "*{FILE}*:*{LINE}* *{THREAD}*");
//! let values = HeaderValues::new("[MAIN]", "now", &ctx);
//! assert_eq!(substitute(layout.pattern(), &values), "main.rs:7 [MAIN]");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use time::OffsetDateTime;

use crate::context::CallContext;
use crate::date::{self, DateFormatSpec};
use crate::error::ParseFormatError;
use crate::thread::ThreadIcons;

const TOKEN_OPEN: &str = "*{";

/// A placeholder recognized inside layout patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Thread,
    Date,
    File,
    Function,
    Line,
}

impl Token {
    pub const ALL: [Token; 5] = [
        Self::Thread,
        Self::Date,
        Self::File,
        Self::Function,
        Self::Line,
    ];

    /// The literal text of this token inside a pattern.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Self::Thread => "*{THREAD}*",
            Self::Date => "*{DATE}*",
            Self::File => "*{FILE}*",
            Self::Function => "*{FUNCTION}*",
            Self::Line => "*{LINE}*",
        }
    }

    fn at_start_of(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|token| text.starts_with(token.marker()))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

// ─────────────────────────────────────────────────────────
// Layouts
// ─────────────────────────────────────────────────────────

/// A named header pattern.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct LayoutTemplate {
    name: Cow<'static, str>,
    pattern: Cow<'static, str>,
}

impl LayoutTemplate {
    /// Single-line compact header.
    pub const STATUS_LINE: LayoutTemplate = LayoutTemplate {
        name: Cow::Borrowed("status-line"),
        pattern: Cow::Borrowed(
            "*{THREAD}* [*{DATE}*] [*{FILE}* -> *{FUNCTION}*, AT LINE: *{LINE}*]",
        ),
    };

    /// Multi-line verbose header, framed by blank lines.
    pub const REPORT: LayoutTemplate = LayoutTemplate {
        name: Cow::Borrowed("report"),
        pattern: Cow::Borrowed(
            "\n▶︎ DEBUG INFO:\n▶︎ THREAD: *{THREAD}*\n▶︎ DATE: *{DATE}*\n▶︎ FILE: *{FILE}*\n▶︎ FUNCTION: *{FUNCTION}*\n▶︎ LINE: *{LINE}*\n",
        ),
    };

    const NAMES: &'static [&'static str] = &["status-line", "report"];

    /// A caller-defined layout.
    pub fn custom(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            pattern: Cow::Owned(pattern.into()),
        }
    }

    /// Layouts shipped with prettylog.
    #[must_use]
    pub fn builtin() -> [LayoutTemplate; 2] {
        [Self::STATUS_LINE, Self::REPORT]
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Recognized tokens present in the pattern, in [`Token::ALL`] order.
    #[must_use]
    pub fn tokens(&self) -> Vec<Token> {
        Token::ALL
            .into_iter()
            .filter(|token| self.pattern.contains(token.marker()))
            .collect()
    }
}

impl Default for LayoutTemplate {
    fn default() -> Self {
        Self::REPORT
    }
}

impl FromStr for LayoutTemplate {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "status-line" | "statusline" | "status" => Ok(Self::STATUS_LINE),
            "report" => Ok(Self::REPORT),
            _ => Err(ParseFormatError::new("layout", s, Self::NAMES)),
        }
    }
}

impl TryFrom<String> for LayoutTemplate {
    type Error = ParseFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ─────────────────────────────────────────────────────────
// Substitution
// ─────────────────────────────────────────────────────────

/// The five substitution values for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderValues {
    thread: String,
    date: String,
    file: String,
    function: String,
    line: String,
}

impl HeaderValues {
    /// Values for `context` with an already-computed thread icon and date.
    pub fn new(thread: impl Into<String>, date: impl Into<String>, context: &CallContext) -> Self {
        Self {
            thread: thread.into(),
            date: date.into(),
            file: file_name(context.file()).to_string(),
            function: context.function().to_string(),
            line: context.line().to_string(),
        }
    }

    /// Compute every value for `context` at time `now`.
    pub fn capture(
        context: &CallContext,
        icons: &ThreadIcons,
        date_format: DateFormatSpec,
        now: OffsetDateTime,
    ) -> Self {
        Self::new(
            icons.icon(context.is_primary_thread()),
            date_format.format(now),
            context,
        )
    }

    #[must_use]
    pub fn get(&self, token: Token) -> &str {
        match token {
            Token::Thread => &self.thread,
            Token::Date => &self.date,
            Token::File => &self.file,
            Token::Function => &self.function,
            Token::Line => &self.line,
        }
    }
}

/// Replace every recognized token in `pattern` with its value.
#[must_use]
pub fn substitute(pattern: &str, values: &HeaderValues) -> String {
    let mut out = String::with_capacity(pattern.len() + 32);
    let mut rest = pattern;

    while let Some(start) = rest.find(TOKEN_OPEN) {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];
        match Token::at_start_of(candidate) {
            Some(token) => {
                out.push_str(values.get(token));
                rest = &candidate[token.marker().len()..];
            }
            None => {
                out.push_str(TOKEN_OPEN);
                rest = &candidate[TOKEN_OPEN.len()..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Render `layout` for `context` using the process-wide date format and
/// the current time.
#[must_use]
pub fn render_template(layout: &LayoutTemplate, context: &CallContext, icons: &ThreadIcons) -> String {
    render_template_at(layout, context, icons, date::date_format(), date::now())
}

/// Render `layout` with an explicit date format and time.
#[must_use]
pub fn render_template_at(
    layout: &LayoutTemplate,
    context: &CallContext,
    icons: &ThreadIcons,
    date_format: DateFormatSpec,
    now: OffsetDateTime,
) -> String {
    let values = HeaderValues::capture(context, icons, date_format, now);
    substitute(layout.pattern(), &values)
}

/// Last component of a path, accepting both `/` and `\` as separators.
///
/// Trailing separators are ignored, so `src/bin/` yields `bin`. A path made
/// only of separators is returned unchanged.
#[must_use]
pub fn file_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        return path;
    }
    trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed)
}
