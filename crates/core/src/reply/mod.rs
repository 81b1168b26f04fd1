pub mod extract;
pub mod prompt;
pub mod tone;
pub mod types;
pub mod validate;

pub use extract::clean_reply;
pub use prompt::{build_prompt, system_instruction, user_message};
pub use tone::Tone;
pub use types::{GenerationRequest, GenerationResponse, Prompt, ValidatedRequest};
pub use validate::{validate_request, ValidationError};
