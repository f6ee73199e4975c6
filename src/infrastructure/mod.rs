//! Infrastructure layer.

/// Application configuration.
pub mod config;
/// HTTP adapters for the backend APIs.
pub mod http;
/// Session persistence adapters.
pub mod storage;

pub use config::{AppConfig, LogLevel};
pub use http::{ApiClient, HubApiClient, WebsiteApiClient};
pub use storage::KeyringSessionStore;
