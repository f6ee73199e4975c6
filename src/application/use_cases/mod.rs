//! Use case implementations.

mod login_use_case;
mod resolve_session_use_case;

pub use login_use_case::LoginUseCase;
pub use resolve_session_use_case::ResolveSessionUseCase;
