//! Error types for the sum service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::render;

// == Sum Error Enum ==
/// Unified error type for the sum service.
#[derive(Error, Debug)]
pub enum SumError {
    /// The `len` query parameter is missing or not a positive integer
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The key-value store failed a get or put
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for SumError {
    fn into_response(self) -> Response {
        match self {
            SumError::InvalidInput(ref reason) => {
                (StatusCode::BAD_REQUEST, Html(render::usage_page(reason))).into_response()
            }
            SumError::StoreUnavailable(_) | SumError::Internal(_) => {
                // Details stay in the logs, the caller gets a generic body.
                error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                    "Internal Server Error",
                )
                    .into_response()
            }
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the sum service.
pub type Result<T> = std::result::Result<T, SumError>;
