use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Unified error type for the HTTP surface.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The identifier could not be decoded.
    #[error("invalid identifier: {0}")]
    Codec(#[from] quotid::Error),

    /// A date field could not be parsed.
    #[error("unparseable date: {0}")]
    InvalidDate(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Codec(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidDate(_) => StatusCode::BAD_REQUEST,
        };
        tracing::debug!(error = %self, "request rejected");
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
