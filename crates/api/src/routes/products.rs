//! Product listing route handlers.

use axum::{Json, extract::State};
use tracing::instrument;

use showcase_core::ProductWithCategory;

use crate::db::CatalogRepository;
use crate::error::Result;
use crate::state::AppState;

/// List all products with their embedded category.
///
/// GET /api/products
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<ProductWithCategory>>> {
    let mongo = state.db().acquire().await?;
    let catalog = CatalogRepository::new(mongo.database());
    Ok(Json(catalog.products_with_categories(false).await?))
}

/// List featured products with their embedded category.
///
/// GET /api/products/featured
#[instrument(skip(state))]
pub async fn featured(State(state): State<AppState>) -> Result<Json<Vec<ProductWithCategory>>> {
    let mongo = state.db().acquire().await?;
    let catalog = CatalogRepository::new(mongo.database());
    Ok(Json(catalog.products_with_categories(true).await?))
}
