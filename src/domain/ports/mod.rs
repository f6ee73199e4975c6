//! Port definitions.

mod auth_port;
mod customer_directory_port;
mod module_catalog_port;
mod session_store_port;

pub use auth_port::AuthPort;
pub use customer_directory_port::CustomerDirectoryPort;
pub use module_catalog_port::ModuleCatalogPort;
pub use session_store_port::SessionStorePort;
