//! Integration tests for the AXKAN site.
//!
//! The tests assemble the site router in-process with an unconfigured
//! content source, so every page renders from the built-in fallback dataset
//! and no external services are involved. Requests are driven through the
//! `tower` service stack directly; the order-flow tests carry the session
//! cookie across requests the way a browser would.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p axkan-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `site_pages` - page rendering, catalog filtering, search, and sorting
//! - `site_order_flow` - the session-backed order wizard, end to end
