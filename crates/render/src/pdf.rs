//! Paginated PDF output for generated question text, built with lopdf.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use mcqgen_core::BLOCK_MARKER;

use crate::RenderError;

// A4 page, 12pt Helvetica, fixed margins.
const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN: i64 = 56;
const FONT_SIZE: i64 = 12;
const LEADING: i64 = 16;
const WRAP_COLUMNS: usize = 90;

/// Lines that fit between the top and bottom margins of one page.
const LINES_PER_PAGE: usize = ((PAGE_HEIGHT - 2 * MARGIN) / LEADING) as usize;

/// Render raw generated text as a paginated PDF.
///
/// The text is split on the block marker; each non-empty segment becomes
/// a wrapped text block followed by a blank-line gap, flowing onto new
/// pages as needed.
pub fn render_pdf(raw_text: &str) -> Result<Vec<u8>, RenderError> {
    let lines = layout_lines(raw_text);
    build_document(&lines)
}

/// Split on the marker, wrap each segment, and insert the block gaps.
fn layout_lines(raw_text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for segment in raw_text.split(BLOCK_MARKER) {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        for source_line in segment.lines() {
            for wrapped in wrap_line(source_line.trim_end(), WRAP_COLUMNS) {
                lines.push(wrapped);
            }
        }
        lines.push(String::new());
    }
    lines
}

/// Greedy word wrap at a fixed column width.
///
/// Words longer than the width are hard-split so no line ever exceeds it.
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if line.chars().count() <= width {
        return vec![line.to_string()];
    }

    let mut wrapped = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in line.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            wrapped.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if word_len > width {
            // Hard-split an overlong word across lines.
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(width) {
                if current_len > 0 {
                    wrapped.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                current = chunk.iter().collect();
                current_len = current.chars().count();
            }
            continue;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() {
        wrapped.push(current);
    }
    wrapped
}

/// Assemble the lopdf document: one content stream per page of lines.
fn build_document(lines: &[String]) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    // At least one page, even for an empty line list.
    let pages: Vec<&[String]> = if lines.is_empty() {
        vec![&[]]
    } else {
        lines.chunks(LINES_PER_PAGE).collect()
    };

    let mut kids: Vec<Object> = Vec::new();
    for page_lines in pages {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), FONT_SIZE.into()]),
            Operation::new("TL", vec![LEADING.into()]),
            Operation::new("Td", vec![MARGIN.into(), (PAGE_HEIGHT - MARGIN).into()]),
        ];
        for line in page_lines {
            operations.push(Operation::new("Tj", vec![Object::string_literal(line.as_str())]));
            operations.push(Operation::new("T*", vec![]));
        }
        operations.push(Operation::new("ET", vec![]));

        let encoded = Content { operations }
            .encode()
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_short_lines_intact() {
        assert_eq!(wrap_line("short line", 90), vec!["short line"]);
    }

    #[test]
    fn wrap_breaks_at_word_boundaries() {
        let wrapped = wrap_line("one two three four", 9);
        assert_eq!(wrapped, vec!["one two", "three", "four"]);
        for line in &wrapped {
            assert!(line.chars().count() <= 9);
        }
    }

    #[test]
    fn wrap_hard_splits_overlong_words() {
        let wrapped = wrap_line("abcdefghijkl", 5);
        assert_eq!(wrapped, vec!["abcde", "fghij", "kl"]);
    }

    #[test]
    fn layout_produces_one_segment_per_block() {
        let raw = "## MCQ\nQuestion: one\n## MCQ\nQuestion: two";
        let lines = layout_lines(raw);
        // Two non-empty segments, each followed by a gap line.
        let gaps = lines.iter().filter(|l| l.is_empty()).count();
        assert_eq!(gaps, 2);
        assert!(lines.contains(&"Question: one".to_string()));
        assert!(lines.contains(&"Question: two".to_string()));
    }

    #[test]
    fn layout_skips_empty_segments() {
        assert!(layout_lines("").is_empty());
        assert!(layout_lines("## MCQ\n   \n## MCQ").is_empty());
    }

    #[test]
    fn renders_a_readable_pdf() {
        let raw = "## MCQ\nQuestion: What is Rust?\nA) A language\nB) A fungus\n\
                   C) Both\nD) Neither\nCorrect Answer: C\n\
                   ## MCQ\nQuestion: Second question here\nA) 1\nB) 2\nC) 3\nD) 4\n\
                   Correct Answer: A";
        let bytes = render_pdf(raw).unwrap();
        assert!(bytes.starts_with(b"%PDF"));

        let text = pdf_extract::extract_text_from_mem(&bytes).unwrap();
        assert!(text.contains("What is Rust?"));
        assert!(text.contains("Second question here"));
    }

    #[test]
    fn long_content_paginates() {
        let mut raw = String::new();
        for i in 0..30 {
            raw.push_str(&format!(
                "## MCQ\nQuestion: Question number {i}?\nA) a\nB) b\nC) c\nD) d\nCorrect Answer: A\n"
            ));
        }
        let bytes = render_pdf(&raw).unwrap();
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert!(doc.get_pages().len() > 1, "30 blocks should overflow one page");
    }

    #[test]
    fn empty_text_still_produces_a_document() {
        let bytes = render_pdf("").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }
}
