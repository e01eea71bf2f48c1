//! Testimonial documents.

use bson::Document;
use bson::oid::ObjectId;
use bson::serde_helpers::serialize_object_id_as_hex_string;
use serde::{Deserialize, Serialize};

/// A customer testimonial as stored in the `testimonials` collection.
///
/// Only active testimonials are ever returned by the API; the flag is
/// filtered database-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    pub content: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub display_order: i32,
    #[serde(flatten)]
    pub attributes: Document,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bson::doc;

    use super::*;

    #[test]
    fn deserializes_with_author_fields_preserved() {
        let testimonial: Testimonial = bson::from_document(doc! {
            "_id": ObjectId::new(),
            "content": "Great craftsmanship.",
            "is_active": true,
            "display_order": 1,
            "author_name": "R. Mehta",
        })
        .unwrap();

        assert!(testimonial.is_active);
        assert_eq!(
            testimonial.attributes.get_str("author_name").unwrap(),
            "R. Mehta"
        );
    }
}
