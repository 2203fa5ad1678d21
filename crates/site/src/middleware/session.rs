//! Session layer for the order draft.
//!
//! Drafts live in a tower-sessions in-memory store. They are disposable,
//! so losing them on a process restart is fine and no external store is
//! involved.

use tower_sessions::cookie::SameSite;
use tower_sessions::cookie::time::Duration;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::SiteConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "axkan_session";

/// Idle time before a draft expires (2 hours).
const DRAFT_TTL_SECONDS: i64 = 2 * 60 * 60;

/// Build the session layer backed by an in-memory store.
///
/// The cookie is `HttpOnly`, `SameSite=Lax`, and `Secure` when `base_url`
/// is https.
#[must_use]
pub fn create_session_layer(config: &SiteConfig) -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(Duration::seconds(DRAFT_TTL_SECONDS)))
        .with_secure(config.base_url.starts_with("https://"))
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
