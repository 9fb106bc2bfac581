//! Variant dispatch: icon and label selection plus header/body composition.

use time::OffsetDateTime;

use crate::context::CallContext;
use crate::date::{self, DateFormatSpec};
use crate::icons::IconSet;
use crate::template::{LayoutTemplate, render_template_at};
use crate::thread::ThreadIcons;
use crate::variant::{DisplayOptions, LogVariant};

/// Leads every body line that has no icon.
pub const MARKER_PREFIX: &str = "DEBUG: ";

/// Turns a log call into text.
///
/// The formatter holds the two vocabularies (variant icons and thread
/// icons) and, optionally, a date format that overrides the process-wide
/// one. It never writes anywhere; see `PrettyLog` in `prettylog-console`
/// for the sink side.
#[derive(Debug, Clone, Default)]
pub struct LogFormatter {
    icons: IconSet,
    thread_icons: ThreadIcons,
    date_format: Option<DateFormatSpec>,
}

impl LogFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_icons(mut self, icons: IconSet) -> Self {
        self.icons = icons;
        self
    }

    #[must_use]
    pub fn with_thread_icons(mut self, thread_icons: ThreadIcons) -> Self {
        self.thread_icons = thread_icons;
        self
    }

    /// Pin the date format instead of reading the process-wide setting.
    #[must_use]
    pub fn with_date_format(mut self, date_format: Option<DateFormatSpec>) -> Self {
        self.date_format = date_format;
        self
    }

    #[must_use]
    pub fn icons(&self) -> IconSet {
        self.icons
    }

    #[must_use]
    pub fn thread_icons(&self) -> &ThreadIcons {
        &self.thread_icons
    }

    /// The date format this formatter renders with right now.
    #[must_use]
    pub fn date_format(&self) -> DateFormatSpec {
        self.date_format.unwrap_or_else(date::date_format)
    }

    /// Render a log call at the current time.
    #[must_use]
    pub fn render(
        &self,
        variant: &LogVariant,
        describe: &str,
        options: DisplayOptions,
        layout: &LayoutTemplate,
        context: &CallContext,
    ) -> String {
        self.render_at(variant, describe, options, layout, context, date::now())
    }

    /// Render a log call as if it happened at `now`.
    #[must_use]
    pub fn render_at(
        &self,
        variant: &LogVariant,
        describe: &str,
        options: DisplayOptions,
        layout: &LayoutTemplate,
        context: &CallContext,
        now: OffsetDateTime,
    ) -> String {
        let body = self.body(variant, describe);
        if !options.is_complete() {
            return body;
        }

        let mut header = self.header_at(layout, context, now);
        header.push('\n');
        header.push_str(&body);
        header
    }

    /// Header block for `layout`, without the body.
    #[must_use]
    pub fn header_at(
        &self,
        layout: &LayoutTemplate,
        context: &CallContext,
        now: OffsetDateTime,
    ) -> String {
        render_template_at(layout, context, &self.thread_icons, self.date_format(), now)
    }

    /// The body line: icon, description (or fallback label), payload.
    ///
    /// `describe` is used whenever it is non-empty, whitespace included.
    #[must_use]
    pub fn body(&self, variant: &LogVariant, describe: &str) -> String {
        let icon = self.icons.icon(variant);
        let middle = if describe.is_empty() {
            self.icons.fallback_label(variant)
        } else {
            describe
        };
        let payload = variant.payload();

        let mut line = String::with_capacity(
            icon.len() + MARKER_PREFIX.len() + middle.len() + payload.len() + 2,
        );
        if icon.is_empty() {
            line.push_str(MARKER_PREFIX);
        } else {
            line.push_str(icon);
            line.push(' ');
        }
        line.push_str(middle);
        if !middle.is_empty() && !payload.is_empty() {
            line.push(' ');
        }
        line.push_str(payload);
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn ctx() -> CallContext {
        CallContext::new("/src/net/client.rs", "net::client::connect", 88)
            .with_primary_thread(false)
    }

    fn at() -> OffsetDateTime {
        datetime!(2022-03-04 13:05:09.042 UTC)
    }

    fn formatter() -> LogFormatter {
        LogFormatter::new().with_date_format(Some(DateFormatSpec::MonthDayYearDashed))
    }

    fn render(variant: &LogVariant, describe: &str) -> String {
        formatter().render_at(
            variant,
            describe,
            DisplayOptions::Abbreviated,
            &LayoutTemplate::REPORT,
            &ctx(),
            at(),
        )
    }

    #[test]
    fn empty_describe_uses_fallback_label() {
        assert_eq!(render(&LogVariant::success("saved"), ""), "✅ (SUCCESS) saved");
        assert_eq!(render(&LogVariant::warning("disk low"), ""), "⚠️ (WARNING) disk low");
        assert_eq!(render(&LogVariant::error("boom"), ""), "🛑 (ERROR) boom");
        assert_eq!(render(&LogVariant::todo("refactor"), ""), "✏️ (TO-DO) refactor");
        assert_eq!(
            render(&LogVariant::link("https://api.test/v1"), ""),
            "🌐 (API) https://api.test/v1"
        );
    }

    #[test]
    fn describe_replaces_fallback_label() {
        let variants = [
            LogVariant::success("p"),
            LogVariant::warning("p"),
            LogVariant::error("p"),
            LogVariant::todo("p"),
            LogVariant::link("p"),
            LogVariant::line("p"),
        ];
        for variant in &variants {
            let out = render(variant, "custom");
            assert!(out.contains("custom p"), "{out}");
            let label = IconSet::Standard.fallback_label(variant);
            if !label.is_empty() {
                assert!(!out.contains(label), "{out}");
            }
        }
    }

    #[test]
    fn line_without_describe_has_no_label() {
        assert_eq!(render(&LogVariant::line("plain"), ""), "DEBUG: plain");
    }

    #[test]
    fn line_with_describe_and_empty_payload() {
        assert_eq!(render(&LogVariant::line(""), "hello"), format!("{MARKER_PREFIX}hello"));
    }

    #[test]
    fn whitespace_describe_counts_as_non_empty() {
        assert_eq!(render(&LogVariant::warning("x"), "  "), "⚠️    x");
    }

    #[test]
    fn empty_everything_degrades_gracefully() {
        assert_eq!(render(&LogVariant::line(""), ""), MARKER_PREFIX);
        assert_eq!(render(&LogVariant::error(""), ""), "🛑 (ERROR)");
    }

    #[test]
    fn complete_prefixes_header() {
        let out = formatter().render_at(
            &LogVariant::warning("disk low"),
            "",
            DisplayOptions::Complete,
            &LayoutTemplate::STATUS_LINE,
            &ctx(),
            at(),
        );
        assert_eq!(
            out,
            "[NOT MAIN] [03-04-2022 13:05:09] [client.rs -> net::client::connect, AT LINE: 88]\n⚠️ (WARNING) disk low"
        );
    }

    #[test]
    fn complete_with_report_layout_is_multiline() {
        let out = formatter().render_at(
            &LogVariant::success("ok"),
            "",
            DisplayOptions::Complete,
            &LayoutTemplate::REPORT,
            &ctx(),
            at(),
        );
        assert!(out.starts_with("\n▶︎ DEBUG INFO:\n"));
        assert!(out.contains("▶︎ FILE: client.rs\n"));
        assert!(out.ends_with("\n\n✅ (SUCCESS) ok"));
    }

    #[test]
    fn classic_icons_have_no_labels_or_marker() {
        let classic = formatter().with_icons(IconSet::Classic);
        assert_eq!(classic.body(&LogVariant::line("hi"), ""), "✏️ hi");
        assert_eq!(classic.body(&LogVariant::link("u"), ""), "🌏 u");
        assert_eq!(classic.body(&LogVariant::todo("t"), "later"), "👨🏼‍💻 later t");
    }

    #[test]
    fn thread_icons_flow_into_header() {
        let compact = formatter().with_thread_icons(ThreadIcons::COMPACT);
        let header = compact.header_at(&LayoutTemplate::custom("t", "*{THREAD}*"), &ctx(), at());
        assert_eq!(header, "[!=M]");
    }

    #[test]
    fn pinned_date_format_overrides_process_wide() {
        assert_eq!(formatter().date_format(), DateFormatSpec::MonthDayYearDashed);
    }
}
