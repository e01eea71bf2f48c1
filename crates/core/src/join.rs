//! In-memory product/category join.
//!
//! The catalog treats the product→category reference as an application-level
//! convenience, not a database relationship: listings fetch both collections
//! and embed each product's category by id lookup. A dangling or absent
//! reference embeds `null` rather than failing the listing.

use std::collections::HashMap;

use bson::oid::ObjectId;

use crate::types::{Category, Product, ProductWithCategory};

/// Embed each product's category, preserving product order.
///
/// Builds the id→category map once, then does one lookup per product.
#[must_use]
pub fn embed_categories(
    products: Vec<Product>,
    categories: Vec<Category>,
) -> Vec<ProductWithCategory> {
    let by_id: HashMap<ObjectId, Category> = categories
        .into_iter()
        .map(|category| (category.id, category))
        .collect();

    products
        .into_iter()
        .map(|product| {
            let category = product
                .category_id
                .and_then(|id| by_id.get(&id).cloned());
            ProductWithCategory { product, category }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bson::doc;

    use super::*;

    fn product(name: &str, order: i32, category_id: Option<ObjectId>) -> Product {
        let mut doc = doc! { "_id": ObjectId::new(), "name": name, "display_order": order };
        if let Some(id) = category_id {
            doc.insert("category_id", id);
        }
        bson::from_document(doc).unwrap()
    }

    fn category(id: ObjectId, name: &str) -> Category {
        bson::from_document(doc! { "_id": id, "name": name }).unwrap()
    }

    #[test]
    fn embeds_matching_category() {
        let cat_id = ObjectId::new();
        let joined = embed_categories(
            vec![product("Bench", 1, Some(cat_id))],
            vec![category(cat_id, "Outdoor")],
        );

        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].category.as_ref().unwrap().name, "Outdoor");
    }

    #[test]
    fn dangling_reference_embeds_null() {
        let joined = embed_categories(
            vec![product("Bench", 1, Some(ObjectId::new()))],
            vec![category(ObjectId::new(), "Outdoor")],
        );

        assert!(joined[0].category.is_none());
    }

    #[test]
    fn absent_reference_embeds_null() {
        let joined = embed_categories(
            vec![product("Bench", 1, None)],
            vec![category(ObjectId::new(), "Outdoor")],
        );

        assert!(joined[0].category.is_none());
    }

    #[test]
    fn preserves_product_order() {
        let cat_id = ObjectId::new();
        let joined = embed_categories(
            vec![
                product("First", 1, Some(cat_id)),
                product("Second", 2, None),
                product("Third", 3, Some(cat_id)),
            ],
            vec![category(cat_id, "Outdoor")],
        );

        let names: Vec<&str> = joined.iter().map(|p| p.product.name.as_str()).collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }

    #[test]
    fn shared_category_embeds_into_each_product() {
        let cat_id = ObjectId::new();
        let joined = embed_categories(
            vec![
                product("Bench", 1, Some(cat_id)),
                product("Table", 2, Some(cat_id)),
            ],
            vec![category(cat_id, "Outdoor")],
        );

        assert!(joined.iter().all(|p| p.category.is_some()));
    }
}
