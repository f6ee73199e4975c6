//! Module catalog port definition.

use async_trait::async_trait;

use crate::domain::entities::ModuleSummary;
use crate::domain::errors::ApiError;

/// Port for listing the modules enabled for the current session.
#[async_trait]
pub trait ModuleCatalogPort: Send + Sync {
    /// Fetches the module list for the dashboard.
    async fn list_modules(&self) -> Result<Vec<ModuleSummary>, ApiError>;
}
