//! The `/generate` pipeline: validate → persist → extract → generate →
//! render → respond, with guaranteed scratch cleanup.

use std::path::Path;
use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::response::Html;
use tokio::fs;
use tracing::info;
use uuid::Uuid;

use mcqgen_llm::generator::DEFAULT_NUM_QUESTIONS;

use super::{bad_request, server_error, ApiError};
use crate::state::AppState;

/// The upload and form values pulled out of the multipart body.
struct GenerateRequest {
    filename: String,
    bytes: Vec<u8>,
    num_questions: Option<String>,
}

/// POST /generate, a multipart form with `file` and optional `num_questions`.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Html<String>, ApiError> {
    let request = read_multipart(multipart).await?;

    if !mcqgen_extract::allowed_file(&request.filename) {
        return Err(bad_request(
            "Invalid file format. Please upload PDF, DOCX, or TXT files.",
        ));
    }

    // Scratch names carry a per-request token so concurrent uploads of
    // same-named files cannot collide.
    let token = Uuid::new_v4();
    let sanitized = mcqgen_extract::sanitize_filename(&request.filename);
    let upload_path = state.scratch_dir.join(format!("{token}_{sanitized}"));

    fs::write(&upload_path, &request.bytes)
        .await
        .map_err(server_error)?;

    let result = process_upload(&state, &upload_path, &sanitized, &token, &request).await;

    // Cleanup always runs; removal errors are suppressed.
    let _ = fs::remove_file(&upload_path).await;

    result
}

/// Everything after the upload is persisted. Kept separate from the
/// handler so cleanup runs no matter how this returns.
async fn process_upload(
    state: &AppState,
    upload_path: &Path,
    sanitized: &str,
    token: &Uuid,
    request: &GenerateRequest,
) -> Result<Html<String>, ApiError> {
    let text = mcqgen_extract::extract_file(upload_path).map_err(server_error)?;
    let text = match text {
        Some(text) if !text.trim().is_empty() => text,
        _ => return Err(bad_request("Could not extract text from the file.")),
    };

    let num_questions = match &request.num_questions {
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|_| server_error(format!("invalid number of questions: '{raw}'")))?,
        None => DEFAULT_NUM_QUESTIONS,
    };

    let mcqs = state
        .generator
        .generate(&text, num_questions)
        .await
        .map_err(server_error)?;

    // Validate the block structure before rendering anything.
    let blocks = mcqgen_llm::parse_question_set(&mcqs).map_err(server_error)?;

    let pdf_bytes = mcqgen_render::render_pdf(&mcqs).map_err(server_error)?;
    let pdf_filename = mcqgen_render::document_filename(sanitized);
    let pdf_path = state.scratch_dir.join(format!("{token}_{pdf_filename}"));
    fs::write(&pdf_path, &pdf_bytes).await.map_err(server_error)?;

    info!(
        "Generated {} MCQs from '{}' ({} bytes of PDF)",
        blocks.len(),
        sanitized,
        pdf_bytes.len()
    );

    mcqgen_render::results_page(&mcqs, &pdf_filename)
        .map(Html)
        .map_err(server_error)
}

/// Drain the multipart body into a `GenerateRequest`.
async fn read_multipart(mut multipart: Multipart) -> Result<GenerateRequest, ApiError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut num_questions: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| bad_request(format!("Failed to read file: {e}")))?;
                file = Some((filename, bytes.to_vec()));
            }
            Some("num_questions") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| bad_request(format!("Failed to read form field: {e}")))?;
                if !value.trim().is_empty() {
                    num_questions = Some(value);
                }
            }
            _ => {}
        }
    }

    let (filename, bytes) = file.ok_or_else(|| bad_request("No file uploaded."))?;

    Ok(GenerateRequest {
        filename,
        bytes,
        num_questions,
    })
}
