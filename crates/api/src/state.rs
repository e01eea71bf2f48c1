//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::db::ConnectionCache;
use crate::services::{ContactNotifier, NotifyError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// connection cache and configuration. The cache is the only shared mutable
/// resource in the process; handlers receive it through this state rather
/// than via ambient globals.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    db: ConnectionCache,
    notifier: Option<ContactNotifier>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Does not connect to the database; the connection is established
    /// lazily on first [`ConnectionCache::acquire`].
    ///
    /// # Errors
    ///
    /// Returns an error if the contact-notification webhook is configured
    /// with an unusable token.
    pub fn new(config: ApiConfig) -> Result<Self, NotifyError> {
        let db = ConnectionCache::new(&config);
        let notifier = config
            .contact_notify
            .as_ref()
            .map(ContactNotifier::new)
            .transpose()?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                db,
                notifier,
            }),
        })
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the connection cache.
    #[must_use]
    pub fn db(&self) -> &ConnectionCache {
        &self.inner.db
    }

    /// Get the contact notifier, if one is configured.
    #[must_use]
    pub fn notifier(&self) -> Option<&ContactNotifier> {
        self.inner.notifier.as_ref()
    }
}
