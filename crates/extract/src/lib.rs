//! Upload validation and text extraction for PDF, DOCX, and TXT files.

mod docx;
mod pdf;
mod txt;

use std::path::Path;

use thiserror::Error;

use mcqgen_core::ALLOWED_EXTENSIONS;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("file is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Check a filename against the upload allow-list.
///
/// A file is allowed when it has an extension (something after a `.`)
/// and that extension is one of pdf/txt/docx, case-insensitively.
pub fn allowed_file(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
        None => false,
    }
}

/// Reduce a client-supplied filename to a safe basename.
///
/// Path components are stripped and anything outside `[A-Za-z0-9._-]`
/// becomes `_`, so the result is usable as a scratch-file name.
pub fn sanitize_filename(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);
    base.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Extract text from file bytes based on the filename's extension.
///
/// Returns `Ok(None)` when the document is corrupt or of an unsupported
/// type, so callers can report "no usable text". The only hard error at
/// this layer is a TXT file that is not valid UTF-8.
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<Option<String>, ExtractError> {
    let ext = filename.rsplit('.').next().unwrap_or("").to_lowercase();
    match ext.as_str() {
        "pdf" => Ok(pdf::extract_pdf(bytes)),
        "docx" => Ok(docx::extract_docx(bytes)),
        "txt" => txt::extract_txt(bytes).map(Some),
        other => {
            tracing::warn!("unsupported extension '{}' reached extraction", other);
            Ok(None)
        }
    }
}

/// Read a scratch file and extract its text.
pub fn extract_file(path: &Path) -> Result<Option<String>, ExtractError> {
    let bytes = std::fs::read(path)?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    extract_text(&bytes, filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_known_extensions_case_insensitively() {
        assert!(allowed_file("notes.pdf"));
        assert!(allowed_file("notes.txt"));
        assert!(allowed_file("notes.docx"));
        assert!(allowed_file("NOTES.PDF"));
        assert!(allowed_file("archive.tar.TxT"));
    }

    #[test]
    fn rejects_disallowed_extensions() {
        assert!(!allowed_file("malware.exe"));
        assert!(!allowed_file("notes.doc"));
        assert!(!allowed_file("notes.md"));
        assert!(!allowed_file("notes.pdf.zip"));
    }

    #[test]
    fn rejects_names_without_extension() {
        assert!(!allowed_file("README"));
        assert!(!allowed_file(""));
    }

    #[test]
    fn sanitize_strips_paths_and_odd_characters() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\Users\\me\\report.pdf"), "report.pdf");
        assert_eq!(sanitize_filename("my notes (v2).txt"), "my_notes__v2_.txt");
        assert_eq!(sanitize_filename("plain.docx"), "plain.docx");
    }

    #[test]
    fn unsupported_extension_yields_no_text() {
        let result = extract_text(b"binary", "tool.exe").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn extract_file_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.txt");
        std::fs::write(&path, "known content").unwrap();

        let text = extract_file(&path).unwrap();
        assert_eq!(text.as_deref(), Some("known content"));
    }
}
