//! Error types and HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::repository::RepositoryError;
use crate::responses::{FieldError, ValidationErrors};

/// Result type alias using the service error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the service.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(Box<figment::Error>),

    /// One or more request fields failed validation.
    #[error("request validation failed")]
    Validation(ValidationErrors),

    /// The requested record does not exist.
    #[error("{}", .0.msg)]
    NotFound(FieldError),

    /// Fault raised by the persistence collaborator.
    #[error("{0}")]
    Repository(#[from] RepositoryError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server error.
    #[error("internal server error: {0}")]
    Internal(String),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        Error::Validation(errors)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::Validation(errors) => errors.into_response(),

            Error::NotFound(error) => {
                (StatusCode::NOT_FOUND, Json(json!({ "errors": [error] }))).into_response()
            }

            Error::Repository(ref e) => {
                tracing::error!(
                    operation = %e.operation,
                    kind = %e.kind,
                    retriable = e.is_retriable(),
                    "repository error: {}", e.message
                );
                internal_error_response()
            }

            Error::Config(e) => {
                tracing::error!("configuration error: {e}");
                internal_error_response()
            }

            Error::Io(e) => {
                tracing::error!("I/O error: {e}");
                internal_error_response()
            }

            Error::Internal(msg) => {
                tracing::error!("{msg}");
                internal_error_response()
            }
        }
    }
}

// Collaborator faults always resolve the request: a generic 500 envelope
// goes to the client, the details stay in the logs.
fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "errors": [{ "type": "internal", "msg": "Internal server error" }] })),
    )
        .into_response()
}
