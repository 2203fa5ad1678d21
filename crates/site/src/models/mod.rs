//! Session-backed models for the site.
//!
//! Catalog and content types live in `axkan-core`; this module only covers
//! what the site itself persists between requests.

pub mod session;

pub use session::{load_order_draft, save_order_draft};
