use super::responses::ApiResponse;
use crate::sizing::SizingError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{error, warn};

/// Failures a handler can return; each maps to an HTTP status.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error(transparent)]
    InvalidInput(#[from] SizingError),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Search task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ApiError {
    pub(crate) const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("{self}");
        } else {
            warn!("Rejected request: {self}");
        }
        (status, Json(ApiResponse::<()>::err(self.to_string()))).into_response()
    }
}
