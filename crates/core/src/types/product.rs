//! Product documents and the joined listing shape.

use bson::Document;
use bson::oid::ObjectId;
use bson::serde_helpers::serialize_object_id_as_hex_string;
use serde::{Deserialize, Serialize};

use super::Category;
use super::serialize_optional_object_id_as_hex_string;

/// A catalog product as stored in the `products` collection.
///
/// Only the fields the API interprets are typed; everything else the admin
/// tooling puts on a product (images, pricing copy, specs, ...) is carried
/// through `attributes` untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    pub name: String,
    /// Reference to a `Category` document. Best-effort: may be absent or
    /// point at a deleted category.
    #[serde(
        default,
        serialize_with = "serialize_optional_object_id_as_hex_string"
    )]
    pub category_id: Option<ObjectId>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub display_order: i32,
    #[serde(flatten)]
    pub attributes: Document,
}

/// A product with its category embedded, as returned by the listing
/// endpoints. `category` is `null` when the reference is missing or
/// dangling.
#[derive(Debug, Clone, Serialize)]
pub struct ProductWithCategory {
    #[serde(flatten)]
    pub product: Product,
    pub category: Option<Category>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bson::doc;

    use super::*;

    #[test]
    fn deserializes_from_bson_with_defaults() {
        let id = ObjectId::new();
        let doc = doc! {
            "_id": id,
            "name": "Teak Bench",
            "image_url": "https://cdn.example.com/bench.jpg",
        };

        let product: Product = bson::from_document(doc).unwrap();
        assert_eq!(product.id, id);
        assert_eq!(product.name, "Teak Bench");
        assert_eq!(product.category_id, None);
        assert!(!product.is_featured);
        assert_eq!(product.display_order, 0);
        assert_eq!(
            product.attributes.get_str("image_url").unwrap(),
            "https://cdn.example.com/bench.jpg"
        );
    }

    #[test]
    fn serializes_object_ids_as_hex_strings() {
        let id = ObjectId::new();
        let category_id = ObjectId::new();
        let product: Product = bson::from_document(doc! {
            "_id": id,
            "name": "Teak Bench",
            "category_id": category_id,
            "display_order": 3,
        })
        .unwrap();

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["_id"], id.to_hex());
        assert_eq!(json["category_id"], category_id.to_hex());
        assert_eq!(json["display_order"], 3);
    }

    #[test]
    fn missing_category_serializes_as_null() {
        let product: Product = bson::from_document(doc! {
            "_id": ObjectId::new(),
            "name": "Teak Bench",
        })
        .unwrap();

        let joined = ProductWithCategory {
            product,
            category: None,
        };
        let json = serde_json::to_value(&joined).unwrap();
        assert!(json["category_id"].is_null());
        assert!(json["category"].is_null());
        // Flattened: product fields sit at the top level of the response.
        assert_eq!(json["name"], "Teak Bench");
    }
}
