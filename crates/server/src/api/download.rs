use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;

use super::ErrorResponse;

/// GET /download/{filename}: explicitly not implemented.
///
/// Generated documents are written to scratch storage without any
/// durable index, so on-demand retrieval is declared unimplemented
/// (501) for the filename shapes the service hands out, and 404 for
/// anything else.
pub async fn download(Path(filename): Path<String>) -> (StatusCode, Json<ErrorResponse>) {
    if filename.ends_with(".pdf") || filename.ends_with(".txt") {
        (
            StatusCode::NOT_IMPLEMENTED,
            Json(ErrorResponse {
                error: "Download of generated documents is not implemented.".into(),
            }),
        )
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("No such document: {filename}"),
            }),
        )
    }
}
