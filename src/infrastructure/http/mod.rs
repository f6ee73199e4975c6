//! HTTP adapters for the backend APIs.

mod api_client;
mod dto;
mod hub_client;
mod website_client;

pub use api_client::ApiClient;
pub use hub_client::HubApiClient;
pub use website_client::WebsiteApiClient;
