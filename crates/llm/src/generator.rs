use tracing::{debug, info};

use crate::provider::{LlmError, LlmProvider, Message, Role};

/// Default number of questions when the client does not ask for a count.
pub const DEFAULT_NUM_QUESTIONS: u32 = 5;

/// Turns extracted document text into multiple-choice questions via an
/// external generation service.
pub struct McqGenerator {
    provider: Box<dyn LlmProvider>,
    temperature: f32,
    max_tokens: u32,
}

impl McqGenerator {
    pub fn new(provider: Box<dyn LlmProvider>, temperature: f32, max_tokens: u32) -> Self {
        Self {
            provider,
            temperature,
            max_tokens,
        }
    }

    /// Build from config, creating the Gemini provider.
    pub fn from_config(llm_config: &mcqgen_core::config::LlmConfig) -> Result<Self, LlmError> {
        let provider = crate::providers::create_provider(llm_config)?;
        Ok(Self::new(provider, llm_config.temperature, llm_config.max_tokens))
    }

    /// Generate `num_questions` MCQs from the source text.
    ///
    /// Returns the service's raw formatted text with surrounding
    /// whitespace trimmed. Provider errors propagate unchanged, with
    /// no retry and no local fallback.
    pub async fn generate(&self, text: &str, num_questions: u32) -> Result<String, LlmError> {
        let prompt = build_prompt(text, num_questions);

        info!(
            "Generating {} MCQs from {} chars of source text",
            num_questions,
            text.len()
        );

        let messages = vec![Message {
            role: Role::User,
            content: prompt,
        }];

        let response = self
            .provider
            .complete(messages, self.temperature, self.max_tokens)
            .await?;

        debug!("Generation response: {} chars", response.len());

        Ok(response.trim().to_string())
    }
}

/// Build the generation instruction embedding the full source text, the
/// requested count, and the `## MCQ` output format contract.
fn build_prompt(text: &str, num_questions: u32) -> String {
    format!(
        "You are an AI assistant helping the user generate multiple-choice questions (MCQs) \
         from the text below:\n\
         \n\
         Text:\n\
         {text}\n\
         \n\
         Generate {num_questions} MCQs. Each should include:\n\
         - A clear question\n\
         - Four answer options labeled A, B, C, and D\n\
         - The correct answer clearly indicated at the end\n\
         \n\
         Format:\n\
         ## MCQ\n\
         Question: [question]\n\
         A) [option A]\n\
         B) [option B]\n\
         C) [option C]\n\
         D) [option D]\n\
         Correct Answer: [correct option]\n"
    )
}
