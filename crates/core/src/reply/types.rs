use serde::{Deserialize, Serialize};

use super::tone::Tone;

/// A reply generation request as received from the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Free-text description of the email that needs a reply.
    #[serde(rename = "email_situation")]
    pub situation: String,
    /// Requested register. Unknown values fall back to a generic description.
    pub tone: String,
}

/// The generated reply returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationResponse {
    pub reply: String,
}

/// A request whose situation passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    /// Situation text exactly as supplied.
    pub situation: String,
    pub tone: Tone,
}

/// System instruction and user message sent to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system_instruction: String,
    pub user_message: String,
}
