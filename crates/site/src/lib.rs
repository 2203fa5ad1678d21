//! AXKAN site library.
//!
//! The site's routes, content access, and middleware live here as a library
//! so the integration tests can assemble and drive the router in-process;
//! the binary in `main.rs` only adds process concerns (Sentry, tracing,
//! static file serving, graceful shutdown).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod content;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod sanity;
pub mod state;
