mod gemini;

pub use gemini::GeminiProvider;

/// Everything the provider needs to open a conversation for one request.
#[derive(Clone)]
pub struct ChatSession {
    pub api_key: String,
    pub session_id: String,
    pub system_instruction: String,
    pub model: String,
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("session_id", &self.session_id)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ProviderError {
    #[error("failed to create client: {0}")]
    Client(String),

    #[error("model request failed: {0}")]
    Request(String),

    #[error("provider returned an empty reply")]
    EmptyReply,
}

/// External text-generation capability.
#[async_trait::async_trait]
pub trait ReplyProvider: Send + Sync {
    /// Send one user message in `session` and return the generated text.
    async fn send_message(&self, session: &ChatSession, text: &str)
        -> Result<String, ProviderError>;
}
