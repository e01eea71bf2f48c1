//! Database access: the connection cache and the collection repositories.
//!
//! # Connection cache
//!
//! The process holds at most one MongoDB client. Handlers call
//! [`ConnectionCache::acquire`], which connects on first use and hands back
//! the cached handle on every later call. Concurrent first calls collapse
//! into a single connection attempt via [`SingleFlight`]; a failed attempt
//! is cleared so the next request retries instead of caching the failure.
//!
//! # Collections
//!
//! - `products` - catalog products (read-only here)
//! - `categories` - product categories (read-only here)
//! - `testimonials` - customer testimonials (read-only here)
//! - `contact_submissions` - contact form submissions (append-only here)
//!
//! All documents are created and administered outside this service.

mod catalog;
mod contact;
mod single_flight;

pub use catalog::CatalogRepository;
pub use contact::ContactRepository;
pub use single_flight::SingleFlight;

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::config::ApiConfig;

/// Collection names.
pub const PRODUCTS: &str = "products";
pub const CATEGORIES: &str = "categories";
pub const TESTIMONIALS: &str = "testimonials";
pub const CONTACT_SUBMISSIONS: &str = "contact_submissions";

/// Database-layer errors.
///
/// `Clone` because a single connection attempt's failure is shared by every
/// concurrent waiter (the driver's own error is `Arc`-backed).
#[derive(Debug, Clone, Error)]
pub enum DbError {
    #[error("MONGO_URI environment variable is not set")]
    MissingUri,
    #[error("failed to connect to MongoDB: {0}")]
    Connect(mongodb::error::Error),
    #[error("database operation failed: {0}")]
    Query(mongodb::error::Error),
    #[error("insert was acknowledged with a non-ObjectId identifier")]
    UnexpectedInsertId,
}

/// An established, ready-to-query connection. Clones cheaply; all clones
/// share the driver's internal connection pool.
#[derive(Clone, Debug)]
pub struct Mongo {
    client: Client,
    db: Database,
}

impl Mongo {
    /// The target database handle.
    #[must_use]
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Close the underlying client and its pooled connections.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}

/// Process-wide lazily-initialized connection cache.
///
/// Owned by [`crate::state::AppState`] and injected into handlers; never
/// accessed as a global.
pub struct ConnectionCache {
    uri: Option<SecretString>,
    db_name: String,
    connect_timeout: Duration,
    cell: SingleFlight<Mongo, DbError>,
}

impl ConnectionCache {
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            uri: config.mongo_uri.clone(),
            db_name: config.mongo_db.clone(),
            connect_timeout: config.connect_timeout,
            cell: SingleFlight::new(),
        }
    }

    /// Return the cached handle, connecting on first use.
    ///
    /// # Errors
    ///
    /// `DbError::MissingUri` if no connection string is configured (checked
    /// before any attempt), or `DbError::Connect` if the attempt fails. A
    /// failed attempt is not cached; the next call retries.
    pub async fn acquire(&self) -> Result<Mongo, DbError> {
        let uri = self
            .uri
            .as_ref()
            .ok_or(DbError::MissingUri)?
            .expose_secret()
            .to_owned();
        let db_name = self.db_name.clone();
        let timeout = self.connect_timeout;

        self.cell
            .get_or_try_init(move || connect(uri, db_name, timeout))
            .await
    }

    /// Release the cached connection, if one was ever established. Called
    /// from the shutdown hook after the server stops accepting requests.
    pub async fn shutdown(&self) {
        if let Some(mongo) = self.cell.take().await {
            mongo.shutdown().await;
            tracing::info!("MongoDB connection closed");
        }
    }
}

/// Open a client and verify it with a `ping`.
///
/// `Client::with_options` does not touch the network, so without the ping a
/// bad URI or unreachable server would only surface on the first query and
/// the cache would hold a dud handle.
async fn connect(uri: String, db_name: String, timeout: Duration) -> Result<Mongo, DbError> {
    let mut options = ClientOptions::parse(&uri).await.map_err(DbError::Connect)?;
    options.connect_timeout = Some(timeout);
    options.server_selection_timeout = Some(timeout);

    let client = Client::with_options(options).map_err(DbError::Connect)?;
    let db = client.database(&db_name);
    db.run_command(doc! { "ping": 1 })
        .await
        .map_err(DbError::Connect)?;

    tracing::info!(database = %db_name, "connected to MongoDB");
    Ok(Mongo { client, db })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config_without_uri() -> ApiConfig {
        ApiConfig {
            mongo_uri: None,
            mongo_db: "showcase".to_string(),
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            connect_timeout: Duration::from_millis(100),
            contact_notify: None,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }

    #[tokio::test]
    async fn acquire_without_uri_fails_before_any_attempt() {
        let cache = ConnectionCache::new(&config_without_uri());

        let err = cache.acquire().await.unwrap_err();
        assert!(matches!(err, DbError::MissingUri));

        // Still fails the same way on retry; nothing was cached.
        let err = cache.acquire().await.unwrap_err();
        assert!(matches!(err, DbError::MissingUri));
    }

    #[tokio::test]
    async fn shutdown_without_connection_is_a_no_op() {
        let cache = ConnectionCache::new(&config_without_uri());
        cache.shutdown().await;
    }

    #[test]
    fn missing_uri_message_names_the_variable() {
        assert!(DbError::MissingUri.to_string().contains("MONGO_URI"));
    }
}
