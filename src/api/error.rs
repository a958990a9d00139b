use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::types::ErrorBody;
use crate::domain::MalformedId;
use crate::services::CatalogError;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),

    /// A path segment that should have been an integer. Reported as a
    /// server fault to keep the public contract stable.
    MalformedIdentifier(String),

    DatabaseError(String),

    ExternalApiError { service: String, message: String },

    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) | Self::MalformedIdentifier(msg) => write!(f, "{msg}"),
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::ExternalApiError { service, message } => {
                write!(f, "{service} error: {message}")
            }
            Self::InternalError(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MalformedIdentifier(_)
            | Self::DatabaseError(_)
            | Self::ExternalApiError { .. }
            | Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorBody {
        let status = self.status_code();

        let message = match self {
            Self::NotFound(msg) | Self::MalformedIdentifier(msg) => msg.clone(),
            Self::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                "A database error occurred".to_string()
            }
            Self::ExternalApiError { service, message } => {
                tracing::error!("{} API error: {}", service, message);
                format!("{service} service is unavailable")
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        };

        let stack = (cfg!(debug_assertions) && status.is_server_error()).then(|| self.to_string());

        ErrorBody {
            status: status.as_u16(),
            message,
            stack,
        }
    }

    #[must_use]
    pub fn route_not_found() -> Self {
        Self::NotFound("Not Found".to_string())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::InternalError(msg.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = self.body();
        (self.status_code(), Json(body)).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(_) => Self::NotFound(err.to_string()),
            CatalogError::Database(msg) => Self::DatabaseError(msg),
            CatalogError::Upstream { service, message } => {
                Self::ExternalApiError { service, message }
            }
        }
    }
}

impl From<MalformedId> for ApiError {
    fn from(err: MalformedId) -> Self {
        Self::MalformedIdentifier(err.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::InternalError(format!("{err:#}"))
    }
}

/// Fallback for paths outside the routing table.
pub async fn not_found() -> ApiError {
    ApiError::route_not_found()
}
