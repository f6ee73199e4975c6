//! Customer directory port definition.

use async_trait::async_trait;

use crate::domain::entities::{CustomerDetail, CustomerPage};
use crate::domain::errors::ApiError;

/// Port for reading customer records from the website backend.
#[async_trait]
pub trait CustomerDirectoryPort: Send + Sync {
    /// Lists customers, optionally filtered by a free-text query.
    ///
    /// The query is expected to be pre-trimmed; `None` means no filter is
    /// sent at all.
    async fn list_customers(&self, query: Option<&str>) -> Result<CustomerPage, ApiError>;

    /// Fetches a single customer by identifier.
    async fn fetch_customer(&self, id: &str) -> Result<CustomerDetail, ApiError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use crate::domain::entities::CustomerSummary;
    use parking_lot::Mutex;

    /// Mock customer directory for testing.
    pub struct MockCustomerDirectory {
        customers: Vec<CustomerSummary>,
        details: Vec<CustomerDetail>,
        failure: Mutex<Option<fn() -> ApiError>>,
        last_query: Mutex<Option<Option<String>>>,
    }

    impl MockCustomerDirectory {
        /// Creates a mock serving the given records.
        pub fn new(customers: Vec<CustomerSummary>, details: Vec<CustomerDetail>) -> Self {
            Self {
                customers,
                details,
                failure: Mutex::new(None),
                last_query: Mutex::new(None),
            }
        }

        /// Creates an empty mock.
        pub fn empty() -> Self {
            Self::new(vec![], vec![])
        }

        /// Makes every call fail with the produced error.
        pub fn fail_with(&self, make: fn() -> ApiError) {
            *self.failure.lock() = Some(make);
        }

        /// Returns the query passed to the most recent list call.
        pub fn last_query(&self) -> Option<Option<String>> {
            self.last_query.lock().clone()
        }
    }

    #[async_trait]
    impl CustomerDirectoryPort for MockCustomerDirectory {
        async fn list_customers(&self, query: Option<&str>) -> Result<CustomerPage, ApiError> {
            *self.last_query.lock() = Some(query.map(str::to_string));

            if let Some(make) = *self.failure.lock() {
                return Err(make());
            }

            let items: Vec<CustomerSummary> = match query {
                Some(q) => {
                    let q = q.to_lowercase();
                    self.customers
                        .iter()
                        .filter(|c| {
                            c.full_name().to_lowercase().contains(&q)
                                || c.email.to_lowercase().contains(&q)
                        })
                        .cloned()
                        .collect()
                }
                None => self.customers.clone(),
            };

            let total = items.len() as u64;
            Ok(CustomerPage { items, total })
        }

        async fn fetch_customer(&self, id: &str) -> Result<CustomerDetail, ApiError> {
            if let Some(make) = *self.failure.lock() {
                return Err(make());
            }

            self.details
                .iter()
                .find(|d| d.summary.id == id)
                .cloned()
                .ok_or_else(|| ApiError::request_failed(404, "customer not found"))
        }
    }
}
