//! Application error definitions.

use thiserror::Error;

use crate::routing::RouterError;

/// Errors that can occur while bootstrapping or handling a request.
#[derive(Debug, Error)]
pub enum AppError {
    /// No route accepted the request path.
    #[error("No route matches path {0}")]
    NoRoute(String),

    /// The resolved controller is not registered.
    #[error("Controller {controller} does not exist in namespace {namespace}")]
    ControllerNotFound { namespace: String, controller: String },

    /// The controller exists but does not handle the action.
    #[error("Controller {controller} does not have action {action}")]
    ActionNotFound { controller: String, action: String },

    /// A controller failed while handling an action.
    #[error("Controller error: {0}")]
    Controller(String),

    /// Route table could not be built.
    #[error(transparent)]
    Router(#[from] RouterError),
}

impl AppError {
    /// True for errors that mean "nothing here" rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::NoRoute(_) | AppError::ControllerNotFound { .. } | AppError::ActionNotFound { .. }
        )
    }
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;
