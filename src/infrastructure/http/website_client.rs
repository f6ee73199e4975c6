//! Website backend API adapter.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::api_client::ApiClient;
use super::dto::{CustomerDetailDto, CustomerListResponseDto, LoginRequestDto, TokenResponseDto};
use crate::domain::entities::{CustomerDetail, CustomerPage, SessionToken};
use crate::domain::errors::ApiError;
use crate::domain::ports::{AuthPort, CustomerDirectoryPort, SessionStorePort};

const LOGIN_PATH: &str = "/api/public/login";
const CUSTOMERS_PATH: &str = "/api/admin/customers";

/// Client for the website backend: admin login and the customer directory.
pub struct WebsiteApiClient {
    api: ApiClient,
}

impl WebsiteApiClient {
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

    /// Builds the query parameters for a customer search.
    ///
    /// The raw input is trimmed; a blank query produces no parameter at all
    /// rather than an empty `search=`.
    fn search_params(raw_query: Option<&str>) -> Vec<(&'static str, String)> {
        match raw_query.map(str::trim) {
            Some(q) if !q.is_empty() => vec![("search", q.to_string())],
            _ => vec![],
        }
    }
}

#[async_trait]
impl AuthPort for WebsiteApiClient {
    async fn login(&self, identifier: &str, secret: &str) -> Result<SessionToken, ApiError> {
        debug!("Requesting website admin login");

        let body = LoginRequestDto { identifier, secret };
        let response: TokenResponseDto = self.api.post_json(LOGIN_PATH, &body).await?;

        SessionToken::new(response.access_token)
            .ok_or_else(|| ApiError::decode("login response carried an empty token"))
    }
}

#[async_trait]
impl CustomerDirectoryPort for WebsiteApiClient {
    async fn list_customers(&self, query: Option<&str>) -> Result<CustomerPage, ApiError> {
        let params = Self::search_params(query);
        let params: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();

        debug!(filtered = !params.is_empty(), "Fetching customer list");

        let response: CustomerListResponseDto =
            self.api.get_json(CUSTOMERS_PATH, &params).await?;
        Ok(response.into())
    }

    async fn fetch_customer(&self, id: &str) -> Result<CustomerDetail, ApiError> {
        debug!(customer_id = %id, "Fetching customer detail");

        let path = format!("{CUSTOMERS_PATH}/{id}");
        let response: CustomerDetailDto = self.api.get_json(&path, &[]).await?;
        Ok(response.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_params_carry_trimmed_query() {
        let params = WebsiteApiClient::search_params(Some("  garcia "));
        assert_eq!(params, vec![("search", "garcia".to_string())]);
    }

    #[test]
    fn test_blank_query_sends_no_parameter() {
        assert!(WebsiteApiClient::search_params(None).is_empty());
        assert!(WebsiteApiClient::search_params(Some("")).is_empty());
        assert!(WebsiteApiClient::search_params(Some("   ")).is_empty());
    }
}
