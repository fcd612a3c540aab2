use super::ExtractError;

/// Decode a plain-text file as UTF-8, returning the content verbatim.
///
/// Unlike the PDF/DOCX paths, a decode failure here is a hard error
/// rather than a "no text" outcome.
pub fn extract_txt(bytes: &[u8]) -> Result<String, ExtractError> {
    Ok(String::from_utf8(bytes.to_vec())?)
}
