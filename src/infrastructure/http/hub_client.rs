//! Hub backend API adapter.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::api_client::ApiClient;
use super::dto::{LoginRequestDto, ModuleDto, TokenResponseDto};
use crate::domain::entities::{ModuleSummary, SessionToken};
use crate::domain::errors::ApiError;
use crate::domain::ports::{AuthPort, ModuleCatalogPort, SessionStorePort};

const LOGIN_PATH: &str = "/api/public/login";
const MODULES_PATH: &str = "/api/admin/modules";

/// Client for the hub backend: login and the enabled-module catalog.
pub struct HubApiClient {
    api: ApiClient,
}

impl HubApiClient {
    /// Creates a client for the given base URL.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        session_store: Arc<dyn SessionStorePort>,
    ) -> Result<Self, ApiError> {
        Ok(Self {
            api: ApiClient::new(base_url, session_store)?,
        })
    }
}

#[async_trait]
impl AuthPort for HubApiClient {
    async fn login(&self, identifier: &str, secret: &str) -> Result<SessionToken, ApiError> {
        debug!("Requesting hub login");

        let body = LoginRequestDto { identifier, secret };
        let response: TokenResponseDto = self.api.post_json(LOGIN_PATH, &body).await?;

        SessionToken::new(response.access_token)
            .ok_or_else(|| ApiError::decode("login response carried an empty token"))
    }
}

#[async_trait]
impl ModuleCatalogPort for HubApiClient {
    async fn list_modules(&self) -> Result<Vec<ModuleSummary>, ApiError> {
        debug!("Fetching module catalog");

        let response: Vec<ModuleDto> = self.api.get_json(MODULES_PATH, &[]).await?;
        Ok(response.into_iter().map(ModuleSummary::from).collect())
    }
}
