use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use propman_core::error::CoreError;
use propman_db::error::{classify, StoreErrorKind};
use serde::Serialize;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and carries unclassified storage
/// failures. Implements [`IntoResponse`] to produce `{ code, message }` bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `propman_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage error that is neither a missing row nor a malformed id.
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// The HTTP status code, repeated in the body.
    pub code: u16,
    pub message: String,
}

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => (
                    StatusCode::NOT_FOUND,
                    format!("No {} found with the specified ID", entity.to_lowercase()),
                ),
                CoreError::InvalidId { entity, .. } => (
                    StatusCode::BAD_REQUEST,
                    format!("Invalid {entity} ID format - must be a valid UUID"),
                ),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Unauthorized(reason) => {
                    tracing::debug!(%reason, "Rejected unauthenticated request");
                    (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
                }
            },
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
        };

        let body = ErrorBody {
            code: status.as_u16(),
            message,
        };
        (status, axum::Json(body)).into_response()
    }
}

/// Map a storage error for `entity` into the HTTP taxonomy.
///
/// Every entity handler funnels repository errors through here so the same
/// classification applies everywhere.
pub fn store_error(entity: &'static str, id: &str, err: sqlx::Error) -> AppError {
    match classify(&err) {
        StoreErrorKind::NotFound => CoreError::NotFound {
            entity,
            id: id.to_string(),
        }
        .into(),
        StoreErrorKind::InvalidIdentifier => CoreError::InvalidId {
            entity,
            id: id.to_string(),
        }
        .into(),
        StoreErrorKind::Internal => AppError::Database(err),
    }
}

/// Attach entity context to repository results.
pub trait StoreResultExt<T> {
    /// Classify an error for an operation on a single record.
    fn for_record(self, entity: &'static str, id: &str) -> AppResult<T>;

    /// Classify an error for an operation not addressed by id (create, list).
    fn for_entity(self, entity: &'static str) -> AppResult<T>;
}

impl<T> StoreResultExt<T> for Result<T, sqlx::Error> {
    fn for_record(self, entity: &'static str, id: &str) -> AppResult<T> {
        self.map_err(|err| store_error(entity, id, err))
    }

    fn for_entity(self, entity: &'static str) -> AppResult<T> {
        self.map_err(|err| store_error(entity, "", err))
    }
}
