/// Extract text from a DOCX, joining paragraph texts with single spaces.
///
/// Every paragraph contributes one entry to the join, matching the
/// "one space between paragraphs" contract. Tables and other document
/// children are skipped. A corrupt archive yields `None`.
pub fn extract_docx(bytes: &[u8]) -> Option<String> {
    let doc = match docx_rs::read_docx(bytes) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::warn!("DOCX extraction failed: {}", e);
            return None;
        }
    };

    let mut paragraphs: Vec<String> = Vec::new();
    for child in doc.document.children {
        if let docx_rs::DocumentChild::Paragraph(p) = child {
            let mut text = String::new();
            for child in p.children {
                if let docx_rs::ParagraphChild::Run(run) = child {
                    for child in run.children {
                        if let docx_rs::RunChild::Text(t) = child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            paragraphs.push(text);
        }
    }

    Some(paragraphs.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};

    fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }
        let mut cursor = std::io::Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn joins_paragraphs_with_single_space() {
        let bytes = build_docx(&["Hello", "World"]);
        let text = extract_docx(&bytes).unwrap();
        assert_eq!(text, "Hello World");
    }

    #[test]
    fn single_paragraph_is_returned_as_is() {
        let bytes = build_docx(&["Just one paragraph."]);
        let text = extract_docx(&bytes).unwrap();
        assert_eq!(text, "Just one paragraph.");
    }

    #[test]
    fn corrupt_docx_yields_none() {
        assert!(extract_docx(b"not a zip archive").is_none());
    }
}
