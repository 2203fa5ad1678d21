//! Askama filters shared by every template.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Current year, for the footer copyright line.
///
/// Templates call it as `{{ ""|current_year }}`.
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Content hash of the compiled stylesheet, baked in by `build.rs` so the
/// cache-busted filename stays in sync with the file on disk.
///
/// Templates call it as `{{ ""|css_hash }}`.
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}
