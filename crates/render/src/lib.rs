//! Rendering of generated question text into a PDF document and HTML views.

mod html;
mod pdf;

use thiserror::Error;

pub use html::{index_page, results_page};
pub use pdf::render_pdf;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),
    #[error("template rendering failed: {0}")]
    Template(String),
}

/// Client-facing name of the generated document: the upload's basename
/// with a fixed prefix and a `.pdf` extension.
pub fn document_filename(original: &str) -> String {
    let base = original
        .rsplit_once('.')
        .map(|(base, _)| base)
        .unwrap_or(original);
    format!("generated_mcqs_{base}.pdf")
}
