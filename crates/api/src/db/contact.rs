//! Append-only repository for contact submissions.

use mongodb::Database;
use mongodb::bson::oid::ObjectId;

use showcase_core::ContactSubmission;

use super::{CONTACT_SUBMISSIONS, DbError};

/// Repository for contact submission writes.
///
/// Write-only: submissions are read and triaged by external admin tooling,
/// never through this API.
pub struct ContactRepository<'a> {
    db: &'a Database,
}

impl<'a> ContactRepository<'a> {
    /// Create a new contact repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Persist a submission and return its generated id.
    ///
    /// The insert is awaited before the caller responds, so a success
    /// response always means the document is durable.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Query` if the insert fails, or
    /// `DbError::UnexpectedInsertId` if the acknowledged id is not an
    /// `ObjectId`.
    pub async fn insert(&self, submission: &ContactSubmission) -> Result<ObjectId, DbError> {
        let result = self
            .db
            .collection::<ContactSubmission>(CONTACT_SUBMISSIONS)
            .insert_one(submission)
            .await
            .map_err(DbError::Query)?;

        result
            .inserted_id
            .as_object_id()
            .ok_or(DbError::UnexpectedInsertId)
    }
}
