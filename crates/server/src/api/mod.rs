//! API endpoint modules.
//!
//! Shared response types live here in mod.rs.

mod download;
mod generate;
mod health;
mod pages;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

pub use download::download;
pub use generate::generate;
pub use health::health;
pub use pages::index;

/// JSON error body for every non-success response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub(crate) type ApiError = (StatusCode, Json<ErrorResponse>);

pub(crate) fn bad_request(message: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse { error: message.into() }),
    )
}

pub(crate) fn server_error(message: impl std::fmt::Display) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: format!("An error occurred: {message}"),
        }),
    )
}
