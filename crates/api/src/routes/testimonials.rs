//! Testimonial listing route handler.

use axum::{Json, extract::State};
use tracing::instrument;

use showcase_core::Testimonial;

use crate::db::CatalogRepository;
use crate::error::Result;
use crate::state::AppState;

/// List active testimonials in display order.
///
/// GET /api/testimonials
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Testimonial>>> {
    let mongo = state.db().acquire().await?;
    let catalog = CatalogRepository::new(mongo.database());
    Ok(Json(catalog.list_testimonials().await?))
}
