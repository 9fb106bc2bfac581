/// Path of the enclosing function, e.g. `app::jobs::run`.
///
/// Closures report the function they are defined in.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __prettylog_here() {}
        fn __prettylog_type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __prettylog_type_name_of(__prettylog_here);
        let name = name.strip_suffix("::__prettylog_here").unwrap_or(name);
        $crate::__trim_function_path(name)
    }};
}

/// [`CallContext`](crate::CallContext) for the current source location.
#[macro_export]
macro_rules! call_context {
    () => {
        $crate::CallContext::new(::std::file!(), $crate::function_name!(), ::std::line!())
    };
}

/// Build a [`LogEntry`](crate::LogEntry) at the current location without
/// emitting it.
///
/// Optional `describe = ..`, `options = ..` and `layout = ..` arguments
/// follow the variant.
#[macro_export]
macro_rules! log_entry {
    ($variant:expr $(, $key:ident = $value:expr)* $(,)?) => {
        $crate::LogEntry::new($variant, $crate::call_context!())$(.$key($value))*
    };
}

/// Log a variant through the global dispatcher.
///
/// ```ignore
/// debug_log!(LogVariant::error(err.to_string()));
/// debug_log!(LogVariant::link(url), describe = "fetching", options = DisplayOptions::Complete);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($entry:tt)+) => {
        $crate::log_entry!($($entry)+).emit()
    };
}

/// Plain line, `format!` arguments. No arguments logs an empty payload.
#[macro_export]
macro_rules! log_line {
    () => {
        $crate::debug_log!($crate::LogVariant::Line(::std::string::String::new()))
    };
    ($($arg:tt)+) => {
        $crate::debug_log!($crate::LogVariant::Line(::std::format!($($arg)+)))
    };
}

/// ✅ success, `format!` arguments.
#[macro_export]
macro_rules! log_success {
    () => {
        $crate::debug_log!($crate::LogVariant::Success(::std::string::String::new()))
    };
    ($($arg:tt)+) => {
        $crate::debug_log!($crate::LogVariant::Success(::std::format!($($arg)+)))
    };
}

/// ⚠️ warning, `format!` arguments.
#[macro_export]
macro_rules! log_warning {
    () => {
        $crate::debug_log!($crate::LogVariant::Warning(::std::string::String::new()))
    };
    ($($arg:tt)+) => {
        $crate::debug_log!($crate::LogVariant::Warning(::std::format!($($arg)+)))
    };
}

/// 🛑 error, `format!` arguments.
#[macro_export]
macro_rules! log_error {
    () => {
        $crate::debug_log!($crate::LogVariant::Error(::std::string::String::new()))
    };
    ($($arg:tt)+) => {
        $crate::debug_log!($crate::LogVariant::Error(::std::format!($($arg)+)))
    };
}

/// ✏️ to-do, `format!` arguments.
#[macro_export]
macro_rules! log_todo {
    () => {
        $crate::debug_log!($crate::LogVariant::Todo(::std::string::String::new()))
    };
    ($($arg:tt)+) => {
        $crate::debug_log!($crate::LogVariant::Todo(::std::format!($($arg)+)))
    };
}

/// 🌐 link, `format!` arguments.
#[macro_export]
macro_rules! log_link {
    () => {
        $crate::debug_log!($crate::LogVariant::Link(::std::string::String::new()))
    };
    ($($arg:tt)+) => {
        $crate::debug_log!($crate::LogVariant::Link(::std::format!($($arg)+)))
    };
}
