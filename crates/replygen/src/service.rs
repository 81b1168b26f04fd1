use std::sync::Arc;

use replygen_core::reply::{build_prompt, clean_reply, validate_request, GenerationRequest};
use replygen_core::session::session_id;

use crate::config::Config;
use crate::error::Error;
use crate::provider::{ChatSession, ProviderError, ReplyProvider};

/// Validates requests, builds prompts and makes the single provider call.
pub struct ReplyService {
    config: Config,
    provider: Arc<dyn ReplyProvider>,
}

impl ReplyService {
    pub fn new(config: Config, provider: Arc<dyn ReplyProvider>) -> Self {
        Self { config, provider }
    }

    /// Generate a reply for `request`.
    ///
    /// Input is validated before the credential is checked, and no provider
    /// call happens unless both pass.
    pub async fn generate_reply(&self, request: &GenerationRequest) -> Result<String, Error> {
        let validated = validate_request(request)?;

        let api_key = self.config.api_key.as_deref().ok_or(Error::Configuration)?;

        if !validated.tone.is_recognized() {
            log::debug!(
                "unrecognized tone '{}', using '{}'",
                request.tone,
                validated.tone.description()
            );
        }

        let prompt = build_prompt(&validated);
        let session = ChatSession {
            api_key: api_key.to_string(),
            session_id: session_id(self.config.session_mode, rand::random()),
            system_instruction: prompt.system_instruction,
            model: self.config.model.clone(),
        };

        let response = self
            .provider
            .send_message(&session, &prompt.user_message)
            .await
            .map_err(|e| {
                log::error!("Error generating email reply: {e}");
                Error::GenerationFailed(e)
            })?;

        let reply = clean_reply(&response);
        if reply.is_empty() {
            log::error!(
                "Error generating email reply: session {} returned no text",
                session.session_id
            );
            return Err(Error::GenerationFailed(ProviderError::EmptyReply));
        }

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MODEL;
    use crate::provider::testing::ScriptedProvider;
    use replygen_core::session::{SessionMode, FIXED_SESSION_ID};

    fn config(api_key: Option<&str>, session_mode: SessionMode) -> Config {
        Config {
            api_key: api_key.map(String::from),
            model: DEFAULT_MODEL.to_string(),
            session_mode,
        }
    }

    fn request(situation: &str, tone: &str) -> GenerationRequest {
        GenerationRequest {
            situation: situation.to_string(),
            tone: tone.to_string(),
        }
    }

    fn service(config: Config, provider: &Arc<ScriptedProvider>) -> ReplyService {
        ReplyService::new(config, provider.clone())
    }

    #[tokio::test]
    async fn test_reply_is_trimmed() {
        let provider = Arc::new(ScriptedProvider::replying("\n  Thursday works for me.  \n"));
        let service = service(config(Some("key"), SessionMode::PerRequest), &provider);

        let reply = service
            .generate_reply(&request("Move the meeting to Thursday", "friendly"))
            .await
            .unwrap();

        assert_eq!(reply, "Thursday works for me.");
        assert_eq!(provider.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_session_carries_prompt_and_model() {
        let provider = Arc::new(ScriptedProvider::replying("ok"));
        let service = service(config(Some("key"), SessionMode::Fixed), &provider);

        service
            .generate_reply(&request("Accept the offer", "formal"))
            .await
            .unwrap();

        let calls = provider.calls();
        let (session, text) = &calls[0];
        assert_eq!(session.api_key, "key");
        assert_eq!(session.model, "gemini-2.5-flash");
        assert_eq!(session.session_id, FIXED_SESSION_ID);
        assert!(session
            .system_instruction
            .contains("Generate a formal and professional email reply"));
        assert_eq!(
            text,
            "Write a formal and professional email reply for this situation:\n\nAccept the offer"
        );
    }

    #[tokio::test]
    async fn test_per_request_sessions_differ() {
        let provider = Arc::new(ScriptedProvider::replying("ok"));
        let service = service(config(Some("key"), SessionMode::PerRequest), &provider);

        for _ in 0..2 {
            service
                .generate_reply(&request("Say thanks", "friendly"))
                .await
                .unwrap();
        }

        let calls = provider.calls();
        assert!(calls[0].0.session_id.starts_with("email-reply-"));
        assert_ne!(calls[0].0.session_id, calls[1].0.session_id);
    }

    #[tokio::test]
    async fn test_invalid_input_checked_before_configuration() {
        let provider = Arc::new(ScriptedProvider::replying("ok"));
        let service = service(config(None, SessionMode::PerRequest), &provider);

        let err = service
            .generate_reply(&request("   ", "formal"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_key_skips_provider() {
        let provider = Arc::new(ScriptedProvider::replying("ok"));
        let service = service(config(None, SessionMode::PerRequest), &provider);

        let err = service
            .generate_reply(&request("Say thanks", "formal"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Configuration));
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_provider_failure_is_wrapped() {
        let provider = Arc::new(ScriptedProvider::failing("network unreachable"));
        let service = service(config(Some("key"), SessionMode::PerRequest), &provider);

        let err = service
            .generate_reply(&request("Say thanks", "formal"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::GenerationFailed(ProviderError::Request(ref cause)) if cause == "network unreachable"
        ));
    }

    #[tokio::test]
    async fn test_blank_reply_is_a_failure() {
        let provider = Arc::new(ScriptedProvider::replying(" \n "));
        let service = service(config(Some("key"), SessionMode::PerRequest), &provider);

        let err = service
            .generate_reply(&request("Say thanks", "formal"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::GenerationFailed(ProviderError::EmptyReply)));
    }
}
