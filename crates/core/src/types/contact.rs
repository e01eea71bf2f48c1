//! Contact form submissions.
//!
//! Submissions are write-only from the API's perspective: the form posts an
//! arbitrary JSON object, the server stamps a status and timestamp, and the
//! document is appended to `contact_submissions`. Reads and status changes
//! happen in external admin tooling.

use bson::Document;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Keys the server owns; stripped from the client payload so a submission
/// cannot spoof its own status or timestamp.
const RESERVED_KEYS: &[&str] = &["_id", "status", "created_at"];

/// Server-assigned submission status. New submissions are always `Pending`;
/// the other states are set by admin tooling when someone follows up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Pending,
    Contacted,
    Closed,
}

/// A contact form submission ready to be persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// Whatever the form sent: name, email, message, phone, ...
    #[serde(flatten)]
    pub fields: Document,
    pub status: SubmissionStatus,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl ContactSubmission {
    /// Build a pending submission from client-supplied fields, stamped with
    /// the current time. Reserved keys in the payload are dropped.
    #[must_use]
    pub fn new(mut fields: Document) -> Self {
        for key in RESERVED_KEYS {
            fields.remove(key);
        }
        Self {
            fields,
            status: SubmissionStatus::Pending,
            created_at: Utc::now(),
        }
    }
}
