//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                            - Home page
//! GET  /health                      - Health check
//! GET  /catalogo                    - Catalog with filters (categoria, q, orden)
//! GET  /blog                        - Blog listing
//!
//! # Order wizard (session draft, POST-redirect-GET)
//! GET  /pedido                      - Wizard at the draft's current step
//! POST /pedido/productos/agregar    - Add a product row
//! POST /pedido/productos/eliminar   - Remove a product row
//! POST /pedido/productos/actualizar - Save fields and refresh price hints
//! POST /pedido/productos/siguiente  - Advance to contact data
//! POST /pedido/contacto/anterior    - Back to products
//! POST /pedido/contacto/siguiente   - Advance to confirmation
//! POST /pedido/confirmar/anterior   - Back to contact data
//! POST /pedido/paso                 - Jump back via the step indicator
//! ```
//!
//! Unmatched paths fall back to the 404 page.

pub mod blog;
pub mod catalog;
pub mod home;
pub mod not_found;
pub mod order;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the order wizard router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(order::show))
        .route("/productos/agregar", post(order::add_item))
        .route("/productos/eliminar", post(order::remove_item))
        .route("/productos/actualizar", post(order::refresh))
        .route("/productos/siguiente", post(order::products_next))
        .route("/contacto/anterior", post(order::contact_back))
        .route("/contacto/siguiente", post(order::contact_next))
        .route("/confirmar/anterior", post(order::confirm_back))
        .route("/paso", post(order::jump_step))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::show))
        .route("/catalogo", get(catalog::show))
        .route("/blog", get(blog::show))
        .nest("/pedido", order_routes())
        .fallback(not_found::show)
}
