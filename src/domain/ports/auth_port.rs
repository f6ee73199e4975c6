//! Authentication port definition.

use async_trait::async_trait;

use crate::domain::entities::SessionToken;
use crate::domain::errors::ApiError;

/// Port for exchanging admin credentials for a session token.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Authenticates against the backend's public login endpoint.
    async fn login(&self, identifier: &str, secret: &str) -> Result<SessionToken, ApiError>;
}
