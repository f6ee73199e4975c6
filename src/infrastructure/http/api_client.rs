//! Shared HTTP request core.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::errors::ApiError;
use crate::domain::ports::SessionStorePort;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Request core shared by the backend API adapters.
///
/// Issues requests against a fixed base URL, re-reads the current session
/// token from the injected store on every call, and classifies response
/// statuses into the [`ApiError`] taxonomy. 401 and 403 are always
/// `Unauthorized`, whatever the body says.
pub struct ApiClient {
    client: Client,
    base_url: String,
    session_store: Arc<dyn SessionStorePort>,
}

impl ApiClient {
    /// Creates a client for the given base URL.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        session_store: Arc<dyn SessionStorePort>,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(concat!("casuse-admin-tui/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            session_store,
        })
    }

    /// Issues a GET request and decodes the JSON response.
    ///
    /// # Errors
    /// Returns a classified [`ApiError`] on any failure.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let mut request = self.client.get(self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        self.execute(request).await
    }

    /// Issues a POST request with a JSON body and decodes the JSON response.
    ///
    /// # Errors
    /// Returns a classified [`ApiError`] on any failure.
    pub async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.client.post(self.url(path)).json(body);
        self.execute(request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let request = self.authorize(request);

        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "Request could not complete");
            if e.is_timeout() {
                ApiError::network("request timed out")
            } else if e.is_connect() {
                ApiError::network("failed to connect to backend")
            } else {
                ApiError::network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = %status, "Request rejected");
            return Err(Self::classify_failure(status, &body));
        }

        response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to decode response body");
            ApiError::decode(e.to_string())
        })
    }

    /// Attaches the bearer token when a session is present.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session_store.get() {
            Some(token) => request.header(
                header::AUTHORIZATION,
                format!("Bearer {}", token.as_str()),
            ),
            None => request,
        }
    }

    /// Maps a non-success status to an error variant.
    fn classify_failure(status: StatusCode, body: &str) -> ApiError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized,
            _ => ApiError::request_failed(status.as_u16(), body),
        }
    }
}
