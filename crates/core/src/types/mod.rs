//! Entity types for the Showcase catalog.
//!
//! All documents live in MongoDB and are administered outside this system;
//! these types only need to survive a round trip from BSON to the JSON the
//! API returns. Fields the API does not interpret are preserved verbatim via
//! `#[serde(flatten)]` into a [`bson::Document`].

mod category;
mod contact;
mod product;
mod testimonial;

pub use category::Category;
pub use contact::{ContactSubmission, SubmissionStatus};
pub use product::{Product, ProductWithCategory};
pub use testimonial::Testimonial;

use bson::oid::ObjectId;
use serde::Serializer;

/// Serialize an optional `ObjectId` as a hex string, `None` as `null`.
///
/// Mirrors `bson::serde_helpers::serialize_object_id_as_hex_string` for the
/// optional foreign-key case (`Product::category_id`).
pub(crate) fn serialize_optional_object_id_as_hex_string<S>(
    id: &Option<ObjectId>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id {
        Some(oid) => serializer.serialize_some(&oid.to_hex()),
        None => serializer.serialize_none(),
    }
}
