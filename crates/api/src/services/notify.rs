//! Contact-submission notification webhook.
//!
//! When `CONTACT_NOTIFY_URL` is configured, every persisted submission is
//! POSTed to it as JSON. The call is fire-and-forget: the submission is
//! already durable when the notification is spawned, so a webhook failure is
//! logged and never surfaced to the client.

use mongodb::bson::oid::ObjectId;
use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde_json::{Map, Value, json};
use thiserror::Error;

use crate::config::ContactNotifyConfig;

/// Errors that can occur when notifying the webhook.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Webhook returned an error response.
    #[error("webhook returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Configuration cannot be turned into a client.
    #[error("invalid notification config: {0}")]
    Config(String),
}

/// Client for the contact-submission webhook.
#[derive(Clone, Debug)]
pub struct ContactNotifier {
    client: reqwest::Client,
    url: String,
}

impl ContactNotifier {
    /// Create a new notifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the bearer token is not a valid header value or
    /// the HTTP client fails to build.
    pub fn new(config: &ContactNotifyConfig) -> Result<Self, NotifyError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &config.token {
            let value = format!("Bearer {}", token.expose_secret());
            headers.insert(
                "Authorization",
                HeaderValue::from_str(&value)
                    .map_err(|e| NotifyError::Config(format!("invalid token: {e}")))?,
            );
        }

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    /// Send one notification and wait for the webhook's answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the webhook answers with a
    /// non-success status.
    pub async fn notify(&self, id: ObjectId, fields: &Map<String, Value>) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(&self.url)
            .json(&payload(id, fields))
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(NotifyError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }

    /// Detach the notification onto the runtime. Failure is logged at warn
    /// and goes no further.
    pub fn spawn_notify(&self, id: ObjectId, fields: Map<String, Value>) {
        let notifier = self.clone();
        tokio::spawn(async move {
            if let Err(e) = notifier.notify(id, &fields).await {
                tracing::warn!(id = %id, error = %e, "contact notification failed");
            }
        });
    }
}

/// The JSON body POSTed to the webhook.
fn payload(id: ObjectId, fields: &Map<String, Value>) -> Value {
    json!({
        "event": "contact_submission",
        "id": id.to_hex(),
        "submission": fields,
    })
}
