use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod auth;
pub mod checkout;
pub mod inventory;
pub mod locations;
pub mod menu;
pub mod notifications;
pub mod orders;
pub mod reports;
pub mod utilities;
pub mod welcome;

/// Errors surfaced by the service layer, mapped onto HTTP statuses with a
/// JSON `{"error": ...}` body.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed or rejected request payload.
    #[error("{0}")]
    Form(String),
    /// Login failed or the caller lacks access.
    #[error("unauthorized")]
    Unauthorized,
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    /// Password hashing backend failure.
    #[error("internal error")]
    Password,
    #[error("internal error")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self::NotFound("record".to_string()),
            RepositoryError::Conflict(message) => Self::Conflict(message),
            other => {
                log::error!("repository failure: {other}");
                Self::Repository(other)
            }
        }
    }
}

impl actix_web::ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Form(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Password | Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
