use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::suggestions::SuggestionError;
use crate::window::WindowError;

pub const INTERNAL_ERROR_DETAIL: &str =
    "An internal server error occurred. Please contact your belly's diary maintainers";

/// Failure of the backing store. Never retried here.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    /// Body, query or path could not be extracted.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Suggestion(#[from] SuggestionError),
}

macro_rules! from_rejection {
    ($($rejection:ty),*) => {$(
        impl From<$rejection> for AppError {
            fn from(r: $rejection) -> Self {
                AppError::Rejected {
                    status: r.status(),
                    message: r.body_text(),
                }
            }
        }
    )*};
}

from_rejection!(JsonRejection, QueryRejection, PathRejection);

/// Out-of-range `days`/`offset` style input.
impl From<WindowError> for AppError {
    fn from(e: WindowError) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Rejected { status, message } => (*status, message.clone()),
            AppError::Store(_) | AppError::Suggestion(_) => {
                error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_DETAIL.to_string(),
                )
            }
        };

        (status, Json(json!({ "detail": [detail] }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(res: Response) -> serde_json::Value {
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn unauthorized_maps_to_401_with_detail_list() {
        let res = AppError::Unauthorized("Authorization header is required".into()).into_response();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(res).await;
        assert_eq!(body["detail"][0], "Authorization header is required");
    }

    #[tokio::test]
    async fn window_errors_are_bad_requests() {
        let res = AppError::from(WindowError::OutOfRange("days")).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = body_json(res).await;
        assert_eq!(body["detail"][0], "days is out of range");
    }

    #[tokio::test]
    async fn store_errors_hide_internals() {
        let err = AppError::from(StoreError::Unavailable(sqlx::Error::PoolTimedOut));
        let res = err.into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(res).await;
        assert_eq!(body["detail"][0], INTERNAL_ERROR_DETAIL);
    }
}
