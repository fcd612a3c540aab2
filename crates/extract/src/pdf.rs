/// Extract text from a PDF, concatenating page texts with no separator.
///
/// pdf-extract returns all text as one string with form feed characters
/// (\x0C) separating pages; each page is trimmed before concatenation.
/// A corrupt or unparseable PDF yields `None` rather than an error.
pub fn extract_pdf(bytes: &[u8]) -> Option<String> {
    let text = match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("PDF extraction failed: {}", e);
            return None;
        }
    };

    let joined: String = text
        .split('\x0C')
        .map(|page| page.trim())
        .filter(|page| !page.is_empty())
        .collect();

    Some(joined)
}
