use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Request-level failures. Every variant maps to an empty-bodied status;
/// clients never see error detail.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("malformed form body")]
    BadRequest,

    #[error("chirp not found")]
    NotFound,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Storage(e) => {
                error!("Storage failure: {:#}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        status.into_response()
    }
}
