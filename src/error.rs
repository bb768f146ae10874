//! Application-level error types.

use thiserror::Error;

use crate::nav::Route;

/// Errors that can occur within the application.
///
/// Every variant here is a programming error: callers on the UI path use the
/// fail-fast wrappers (e.g. [`crate::nav::NavController::navigate`]) which
/// panic with this message instead of recovering.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("route `{route}` is not registered in the graph starting at `{start}`")]
    UnregisteredRoute { route: Route, start: Route },

    #[error("unknown theme `{0}`: expected system, light or dark")]
    UnknownTheme(String),
}

/// Convenience alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
