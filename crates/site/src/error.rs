//! Request error type and Sentry reporting helpers.
//!
//! Handlers that can fail return `Result<T, AppError>`; converting the
//! error into a response reports it to Sentry first. Content fetch
//! failures never surface here, the content layer falls back to built-in
//! data instead of erroring.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Application-level error type for the site.
#[derive(Debug, Error)]
pub enum AppError {
    /// Session load or store failed.
    #[error("Session failure: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Any other server-side failure, with context.
    #[error("Internal failure: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let event_id = sentry::capture_error(&self);
        tracing::error!(
            error = %self,
            sentry_event_id = %event_id,
            "Request error"
        );

        // Every variant is a server fault; details stay in the logs
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Record a visitor action as a Sentry breadcrumb.
///
/// When an error is later captured, its report carries the trail of
/// recorded actions.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("order", "Advanced to contact step", Some(&[("items", "2")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let data = data
        .unwrap_or_default()
        .iter()
        .map(|(key, value)| {
            (
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            )
        })
        .collect();

    sentry::add_breadcrumb(sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        data,
        ..Default::default()
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_error_display_keeps_context() {
        let err = AppError::Internal("template context".to_string());
        assert_eq!(err.to_string(), "Internal failure: template context");
    }

    #[test]
    fn test_errors_respond_with_500() {
        let response = AppError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
