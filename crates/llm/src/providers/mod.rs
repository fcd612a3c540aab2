pub mod gemini;

use mcqgen_core::config::LlmConfig;

use crate::provider::{LlmError, LlmProvider};

/// Create the Gemini provider from config.
///
/// Fails with `NotConfigured` when no API key is present. There is no
/// fallback credential.
pub fn create_provider(llm_config: &LlmConfig) -> Result<Box<dyn LlmProvider>, LlmError> {
    let api_key = llm_config
        .api_key
        .as_ref()
        .ok_or_else(|| LlmError::NotConfigured("GEMINI_API_KEY not set".into()))?;
    Ok(Box::new(gemini::GeminiProvider::new(
        api_key.clone(),
        llm_config.model.clone(),
    )))
}
