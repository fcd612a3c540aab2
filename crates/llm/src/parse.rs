//! Validation of the generation service's block format.
//!
//! The service is asked for `## MCQ` blocks, each with a question line,
//! four labeled options, and a correct-answer line. That contract is
//! only a promise; this parser checks it and reports a structured
//! error instead of letting malformed text flow into rendering.

use thiserror::Error;

use mcqgen_core::BLOCK_MARKER;

/// Option labels every block must carry, in order.
const OPTION_LABELS: [&str; 4] = ["A)", "B)", "C)", "D)"];

/// One validated question block.
#[derive(Debug, Clone, PartialEq)]
pub struct McqBlock {
    pub question: String,
    /// Option texts in A–D order, label stripped.
    pub options: [String; 4],
    pub correct_answer: String,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("generation response contains no '{BLOCK_MARKER}' blocks")]
    NoBlocks,
    #[error("block {index} has no 'Question:' line")]
    MissingQuestion { index: usize },
    #[error("block {index} is missing option '{label}'")]
    MissingOption { index: usize, label: &'static str },
    #[error("block {index} has no 'Correct Answer:' line")]
    MissingAnswer { index: usize },
}

/// Split raw generated text on the block marker and validate each block.
///
/// Block indices in errors are 1-based, matching what a reader counting
/// `## MCQ` headers in the raw text would see.
pub fn parse_question_set(raw: &str) -> Result<Vec<McqBlock>, ParseError> {
    let blocks: Vec<McqBlock> = raw
        .split(BLOCK_MARKER)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .enumerate()
        .map(|(i, segment)| parse_block(i + 1, segment))
        .collect::<Result<_, _>>()?;

    if blocks.is_empty() {
        return Err(ParseError::NoBlocks);
    }
    Ok(blocks)
}

fn parse_block(index: usize, segment: &str) -> Result<McqBlock, ParseError> {
    let question = find_prefixed(segment, "Question:")
        .ok_or(ParseError::MissingQuestion { index })?;

    let mut options: [String; 4] = Default::default();
    for (slot, label) in options.iter_mut().zip(OPTION_LABELS) {
        *slot = find_prefixed(segment, label)
            .ok_or(ParseError::MissingOption { index, label })?;
    }

    let correct_answer = find_prefixed(segment, "Correct Answer:")
        .ok_or(ParseError::MissingAnswer { index })?;

    Ok(McqBlock {
        question,
        options,
        correct_answer,
    })
}

/// Find the first line starting with `prefix` and return the trimmed rest.
fn find_prefixed(segment: &str, prefix: &str) -> Option<String> {
    segment
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(prefix))
        .map(|rest| rest.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_block(question: &str) -> String {
        format!(
            "## MCQ\n\
             Question: {question}\n\
             A) Mercury\n\
             B) Venus\n\
             C) Earth\n\
             D) Mars\n\
             Correct Answer: C\n"
        )
    }

    #[test]
    fn parses_two_well_formed_blocks() {
        let raw = format!("{}{}", sample_block("Which planet is ours?"), sample_block("Second?"));
        let blocks = parse_question_set(&raw).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].question, "Which planet is ours?");
        assert_eq!(blocks[0].options[1], "Venus");
        assert_eq!(blocks[0].correct_answer, "C");
        assert_eq!(blocks[1].question, "Second?");
    }

    #[test]
    fn empty_response_is_no_blocks() {
        assert!(matches!(parse_question_set(""), Err(ParseError::NoBlocks)));
        assert!(matches!(parse_question_set("   \n  "), Err(ParseError::NoBlocks)));
    }

    #[test]
    fn text_without_marker_fails_validation() {
        // One implicit segment, but it has none of the required lines.
        let result = parse_question_set("The service ignored the format entirely.");
        assert!(matches!(result, Err(ParseError::MissingQuestion { index: 1 })));
    }

    #[test]
    fn missing_option_is_reported_with_label() {
        let raw = "## MCQ\nQuestion: Q?\nA) one\nB) two\nD) four\nCorrect Answer: A\n";
        match parse_question_set(raw) {
            Err(ParseError::MissingOption { index: 1, label: "C)" }) => {}
            other => panic!("expected MissingOption for C), got {other:?}"),
        }
    }

    #[test]
    fn missing_answer_is_reported() {
        let raw = "## MCQ\nQuestion: Q?\nA) 1\nB) 2\nC) 3\nD) 4\n";
        assert!(matches!(
            parse_question_set(raw),
            Err(ParseError::MissingAnswer { index: 1 })
        ));
    }

    #[test]
    fn second_bad_block_gets_its_own_index() {
        let raw = format!("{}## MCQ\nnot a question\n", sample_block("Fine?"));
        assert!(matches!(
            parse_question_set(&raw),
            Err(ParseError::MissingQuestion { index: 2 })
        ));
    }
}
