use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::gemini;

use super::{ChatSession, ProviderError, ReplyProvider};

/// Google Gemini through rig.
///
/// A client and agent are built per call, so requests share no state. The
/// Gemini API is stateless; the session identifier only tags the log records.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeminiProvider;

fn create_client(api_key: &str) -> Result<gemini::Client, ProviderError> {
    gemini::Client::builder()
        .api_key(api_key)
        .build()
        .map_err(|e| ProviderError::Client(e.to_string()))
}

#[async_trait::async_trait]
impl ReplyProvider for GeminiProvider {
    async fn send_message(
        &self,
        session: &ChatSession,
        text: &str,
    ) -> Result<String, ProviderError> {
        let client = create_client(&session.api_key)?;
        let agent = client
            .agent(&session.model)
            .preamble(&session.system_instruction)
            .build();

        log::debug!(
            "session {}: sending {} chars to {}",
            session.session_id,
            text.len(),
            session.model
        );

        let response = agent
            .prompt(text)
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        log::debug!(
            "session {}: received {} chars",
            session.session_id,
            response.len()
        );

        Ok(response)
    }
}
