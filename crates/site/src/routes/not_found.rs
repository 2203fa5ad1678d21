//! 404 fallback handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, http::StatusCode};
use tracing::instrument;

use axkan_core::SiteSettings;

use crate::filters;
use crate::state::AppState;

/// 404 page template.
#[derive(Template, WebTemplate)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub settings: SiteSettings,
    pub base_url: String,
}

/// Render the 404 page for any unmatched path.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> (StatusCode, NotFoundTemplate) {
    let settings = state.content().site_settings().await;
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            settings,
            base_url: state.config().base_url.clone(),
        },
    )
}
