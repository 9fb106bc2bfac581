//! Shortcut macros and `log()` through the global dispatcher.
//!
//! Every test in this binary shares one installed dispatcher writing to a
//! `TestConsole`, so they take a lock and clear the capture first.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use prettylog::{
    CallContext, ConsoleConfig, DateFormatSpec, DisplayOptions, LayoutTemplate, LogVariant,
    PrettyLog, debug_log, init, install, log_error, log_line, log_link, log_success, log_todo,
    log_warning, pretty_log,
};
use prettylog_console::testing::TestConsole;

static CAPTURE: OnceLock<TestConsole> = OnceLock::new();
static SERIAL: Mutex<()> = Mutex::new(());

fn capture() -> (MutexGuard<'static, ()>, &'static TestConsole) {
    let guard = SERIAL.lock().unwrap_or_else(PoisonError::into_inner);
    let tc = CAPTURE.get_or_init(|| {
        let tc = TestConsole::new();
        let config = ConsoleConfig::new();
        let log = PrettyLog::with_console(&config, tc.shared()).with_formatter(
            config
                .formatter()
                .with_date_format(Some(DateFormatSpec::DayMonthYear)),
        );
        install(log).unwrap();
        tc
    });
    tc.clear();
    (guard, tc)
}

// ============================================================================
// Shortcut Macros
// ============================================================================

#[test]
fn warning_shortcut_formats_and_uses_defaults() {
    let (_guard, tc) = capture();

    log_warning!("disk {}", 91);

    // Abbreviated by default: body only, no header.
    assert_eq!(tc.output(), vec!["⚠️ (WARNING) disk 91".to_string()]);
}

#[test]
fn every_shortcut_picks_its_variant() {
    let (_guard, tc) = capture();

    log_line!("plain {}", "text");
    log_success!("saved");
    log_error!("code {code}", code = 7);
    log_todo!("split module");
    log_link!("https://{}", "docs.rs");

    assert_eq!(
        tc.output(),
        vec![
            "DEBUG: plain text",
            "✅ (SUCCESS) saved",
            "🛑 (ERROR) code 7",
            "✏️ (TO-DO) split module",
            "🌐 (API) https://docs.rs",
        ]
    );
}

#[test]
fn shortcuts_without_arguments_log_empty_payload() {
    let (_guard, tc) = capture();

    log_todo!();
    log_line!();

    assert_eq!(tc.output(), vec!["✏️ (TO-DO)", "DEBUG: "]);
}

// ============================================================================
// debug_log! and log()
// ============================================================================

#[test]
fn debug_log_with_describe() {
    let (_guard, tc) = capture();

    debug_log!(LogVariant::line("x"), describe = "d");

    assert_eq!(tc.output(), vec!["DEBUG: d x"]);
}

#[test]
fn debug_log_complete_uses_report_layout_by_default() {
    let (_guard, tc) = capture();

    debug_log!(LogVariant::success("ok"), options = DisplayOptions::Complete);

    let lines = tc.output();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[1], "▶︎ DEBUG INFO:");
    assert_eq!(lines[2], "▶︎ THREAD: [NOT MAIN]");
    assert_eq!(lines[4], "▶︎ FILE: global.rs");
    assert!(
        lines[5].ends_with("debug_log_complete_uses_report_layout_by_default"),
        "{}",
        lines[5]
    );
    assert_eq!(lines[8], "✅ (SUCCESS) ok");
}

#[test]
fn debug_log_with_layout_captures_call_site() {
    let (_guard, tc) = capture();

    let line = line!() + 1;
    debug_log!(
        LogVariant::link("https://docs.rs"),
        describe = "GET",
        options = DisplayOptions::Complete,
        layout = LayoutTemplate::custom("loc", "*{FILE}*:*{LINE}*"),
    );

    assert_eq!(
        tc.output(),
        vec![format!("global.rs:{line}"), "🌐 GET https://docs.rs".to_string()]
    );
}

#[test]
fn log_function_takes_explicit_context() {
    let (_guard, tc) = capture();

    prettylog::log(
        &LogVariant::error("boom"),
        "",
        DisplayOptions::Complete,
        &LayoutTemplate::custom("loc", "*{FILE}* *{FUNCTION}* *{LINE}* *{THREAD}*"),
        &CallContext::new("/srv/app/src/worker.rs", "app::worker::tick", 7)
            .with_primary_thread(true),
    );

    assert_eq!(
        tc.output(),
        vec!["worker.rs app::worker::tick 7 [MAIN]", "🛑 (ERROR) boom"]
    );
}

// ============================================================================
// Global Dispatcher
// ============================================================================

#[test]
fn installed_dispatcher_is_the_global_one() {
    let (_guard, _tc) = capture();

    let log = pretty_log();
    assert!(log.is_enabled());
    assert_eq!(log.default_options(), DisplayOptions::Abbreviated);
    assert_eq!(log.default_layout(), &LayoutTemplate::REPORT);
}

#[test]
fn second_initialization_is_rejected() {
    let (_guard, _tc) = capture();

    assert!(install(PrettyLog::from_config(&ConsoleConfig::new())).is_err());
    assert!(init(&ConsoleConfig::new().enabled(false)).is_err());
    assert!(pretty_log().is_enabled());
}
