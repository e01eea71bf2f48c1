//! Outbound side-channel services.

pub mod notify;

pub use notify::{ContactNotifier, NotifyError};
