//! Contact form route handler.
//!
//! The form posts an arbitrary JSON object; the server stamps it with a
//! pending status and a timestamp, persists it, and only then responds. The
//! optional webhook notification runs as a detached task and can never fail
//! the request.

use axum::{Json, extract::State};
use mongodb::bson;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::instrument;

use showcase_core::ContactSubmission;

use crate::db::ContactRepository;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Response for a persisted submission.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    /// Hex string of the generated submission id.
    pub id: String,
}

/// Submit the contact form.
///
/// POST /api/contact
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<Json<ContactResponse>> {
    let fields = bson::to_document(&payload)
        .map_err(|e| AppError::BadRequest(format!("invalid submission payload: {e}")))?;
    let submission = ContactSubmission::new(fields);

    let mongo = state.db().acquire().await?;
    let id = ContactRepository::new(mongo.database())
        .insert(&submission)
        .await?;
    tracing::info!(id = %id, "contact submission stored");

    // Durably persisted; the notification is best-effort from here on.
    if let Some(notifier) = state.notifier() {
        notifier.spawn_notify(id, payload);
    }

    Ok(Json(ContactResponse {
        success: true,
        id: id.to_hex(),
    }))
}
