//! Session-stored order state.
//!
//! The in-progress order draft is the only thing the site keeps in the
//! session. It is written back after every wizard mutation and lives until
//! the session expires, so leaving the flow and returning resumes it.

use axkan_core::order::OrderDraft;
use tower_sessions::Session;

/// Session keys for order data.
pub mod keys {
    /// Key for the in-progress order draft.
    pub const ORDER_DRAFT: &str = "order_draft";
}

/// Load the order draft from the session.
///
/// Returns `None` when no draft exists. A stored draft that fails to
/// deserialize (stale schema from an older deploy) is also treated as
/// absent, so the wizard starts fresh instead of failing.
pub async fn load_order_draft(session: &Session) -> Option<OrderDraft> {
    session.get(keys::ORDER_DRAFT).await.ok().flatten()
}

/// Write the order draft back to the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn save_order_draft(
    session: &Session,
    draft: &OrderDraft,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::ORDER_DRAFT, draft).await
}
