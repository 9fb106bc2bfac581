//! Core types and rendering for prettylog.
//!
//! This crate provides the formatting engine shared by every prettylog
//! front end:
//! - [`LogVariant`] and [`DisplayOptions`], the tagged message model
//! - [`CallContext`], the call-site snapshot rendered into headers
//! - [`LayoutTemplate`] and [`render_template`], the token substitution engine
//! - [`DateFormatSpec`], the process-wide timestamp pattern
//! - [`LogFormatter`], the variant dispatcher producing header + body text
//!
//! Nothing in this crate writes to a sink. Output and configuration live in
//! `prettylog-console`.
//!
//! # Design Principles
//!
//! - Rendering is total: no operation here returns an error
//! - Unknown template tokens pass through untouched
//! - The only process-wide state is the active [`DateFormatSpec`]

#![forbid(unsafe_code)]

mod context;
mod date;
mod error;
mod formatter;
mod icons;
pub mod logging;
mod template;
mod thread;
mod variant;

pub use context::{CallContext, is_primary_thread};
pub use date::{DateFormatSpec, date_format, now, set_date_format};
pub use error::ParseFormatError;
pub use formatter::{LogFormatter, MARKER_PREFIX};
pub use icons::IconSet;
pub use template::{
    HeaderValues, LayoutTemplate, Token, file_name, render_template, render_template_at,
    substitute,
};
pub use thread::ThreadIcons;
pub use variant::{DisplayOptions, LogVariant};
