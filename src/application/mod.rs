//! Application layer.

/// Data transfer objects.
pub mod dto;
/// Shared application services.
pub mod services;
/// Use case implementations.
pub mod use_cases;
