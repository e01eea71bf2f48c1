//! Read-side repository for the catalog collections.

use futures_util::TryStreamExt;
use mongodb::Database;
use mongodb::bson::{Document, doc};

use showcase_core::{Category, Product, ProductWithCategory, Testimonial, embed_categories};

use super::{CATEGORIES, DbError, PRODUCTS, TESTIMONIALS};

/// Repository for product, category, and testimonial reads.
///
/// Every listing is sorted by `display_order` ascending database-side.
pub struct CatalogRepository<'a> {
    db: &'a Database,
}

impl<'a> CatalogRepository<'a> {
    /// Create a new catalog repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// List products in display order, optionally restricted to featured
    /// ones.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Query` if the find or cursor iteration fails.
    pub async fn list_products(&self, featured_only: bool) -> Result<Vec<Product>, DbError> {
        self.db
            .collection::<Product>(PRODUCTS)
            .find(product_filter(featured_only))
            .sort(doc! { "display_order": 1 })
            .await
            .map_err(DbError::Query)?
            .try_collect()
            .await
            .map_err(DbError::Query)
    }

    /// List all categories in display order.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Query` if the find or cursor iteration fails.
    pub async fn list_categories(&self) -> Result<Vec<Category>, DbError> {
        self.db
            .collection::<Category>(CATEGORIES)
            .find(Document::new())
            .sort(doc! { "display_order": 1 })
            .await
            .map_err(DbError::Query)?
            .try_collect()
            .await
            .map_err(DbError::Query)
    }

    /// List active testimonials in display order. Inactive ones are filtered
    /// database-side and never returned.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Query` if the find or cursor iteration fails.
    pub async fn list_testimonials(&self) -> Result<Vec<Testimonial>, DbError> {
        self.db
            .collection::<Testimonial>(TESTIMONIALS)
            .find(doc! { "is_active": true })
            .sort(doc! { "display_order": 1 })
            .await
            .map_err(DbError::Query)?
            .try_collect()
            .await
            .map_err(DbError::Query)
    }

    /// The listing shape served by /products and /products/featured:
    /// products in display order with their category embedded via the
    /// in-memory lookup.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Query` if either collection read fails.
    pub async fn products_with_categories(
        &self,
        featured_only: bool,
    ) -> Result<Vec<ProductWithCategory>, DbError> {
        let products = self.list_products(featured_only).await?;
        let categories = self.list_categories().await?;
        Ok(embed_categories(products, categories))
    }
}

/// Filter for the products collection: everything, or featured only.
fn product_filter(featured_only: bool) -> Document {
    if featured_only {
        doc! { "is_featured": true }
    } else {
        Document::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn full_listing_uses_an_empty_filter() {
        assert_eq!(product_filter(false), Document::new());
    }

    #[test]
    fn featured_listing_filters_on_the_flag() {
        // Featured results are a subset of the full listing restricted to
        // the flag; sorting is shared with the full listing.
        assert_eq!(product_filter(true), doc! { "is_featured": true });
    }
}
