//! Category listing route handler.

use axum::{Json, extract::State};
use tracing::instrument;

use showcase_core::Category;

use crate::db::CatalogRepository;
use crate::error::Result;
use crate::state::AppState;

/// List all categories in display order.
///
/// GET /api/categories
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let mongo = state.db().acquire().await?;
    let catalog = CatalogRepository::new(mongo.database());
    Ok(Json(catalog.list_categories().await?))
}
