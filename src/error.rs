use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::gate::ValidationError;

/// Storage-layer failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The UNIQUE constraint on the address column fired.
    #[error("address already allocated")]
    Duplicate,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        match self {
            StoreError::Duplicate => (
                StatusCode::CONFLICT,
                ValidationError::DuplicateAddress.message(),
            )
                .into_response(),
            StoreError::Database(err) => {
                tracing::error!("database error: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "database error").into_response()
            }
        }
    }
}
