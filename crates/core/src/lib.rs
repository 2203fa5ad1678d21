//! AXKAN Core - domain library for the AXKAN storefront site.
//!
//! This crate holds everything the site derives on its own, independent of any
//! web framework or content source:
//! - catalog filtering, search, and sorting
//! - the three-step order draft and its price estimator
//! - serialization of a finished order into the WhatsApp hand-off message
//! - the content record types authored in the studio
//! - the built-in fallback datasets served when the content source is empty
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no async. Every derivation is recomputed in full from its inputs,
//! so callers never depend on hidden caching.
//!
//! # Modules
//!
//! - [`types`] - Category, Product, and the passthrough content records
//! - [`catalog`] - the filter/sort pipeline over a product list
//! - [`order`] - the order draft state machine and estimator
//! - [`pricing`] - the static price guide with its default pair
//! - [`whatsapp`] - message serialization and the `wa.me` URL
//! - [`format`] - peso display formatting
//! - [`fallback`] - built-in sample catalog and page content

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod fallback;
pub mod format;
pub mod order;
pub mod pricing;
pub mod types;
pub mod whatsapp;

pub use types::*;
