//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /api/products           - Product listing with embedded categories
//! GET  /api/products/featured  - Featured products, same shape
//! GET  /api/categories         - Category listing
//! GET  /api/testimonials       - Active testimonials
//! POST /api/contact            - Contact form submission
//! GET  /api/health             - Liveness check (no database access)
//! *    (anything else)         - 404 with the requested path echoed
//! ```
//!
//! Everything is served under a single `/api` prefix; the public surface is
//! read-only apart from the contact form.

pub mod categories;
pub mod contact;
pub mod products;
pub mod testimonials;

use axum::http::{StatusCode, Uri};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use crate::state::AppState;

/// Create the `/api` routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::index))
        .route("/products/featured", get(products::featured))
        .route("/categories", get(categories::index))
        .route("/testimonials", get(testimonials::index))
        .route("/contact", post(contact::submit))
        .route("/health", get(health))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new().nest("/api", api_routes()).fallback(not_found)
}

/// Liveness health check endpoint.
///
/// Returns ok if the server is running. Deliberately does not touch the
/// database.
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "message": "Server is running" }))
}

/// Fallback for unrecognized routes: 404 echoing the requested path.
async fn not_found(uri: Uri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Not found", "path": uri.path() })),
    )
}
