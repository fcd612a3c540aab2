use axum::response::Html;

use super::{server_error, ApiError};

/// The upload form.
pub async fn index() -> Result<Html<String>, ApiError> {
    mcqgen_render::index_page()
        .map(Html)
        .map_err(server_error)
}
