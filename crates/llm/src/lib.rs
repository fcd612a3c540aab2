pub mod generator;
pub mod parse;
pub mod provider;
pub mod providers;

pub use generator::McqGenerator;
pub use parse::{parse_question_set, McqBlock, ParseError};
pub use provider::{LlmError, LlmProvider, Message, Role};
