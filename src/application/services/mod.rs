//! Shared application services.

mod remote;

pub use remote::{RemoteData, UnauthorizedSignal};
