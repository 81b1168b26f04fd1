use super::tone::Tone;
use super::types::{GenerationRequest, ValidatedRequest};

/// Caller-supplied data that fails a precondition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Email situation cannot be empty")]
    EmptySituation,
}

/// Check the request preconditions and resolve its tone.
///
/// The situation must contain something other than whitespace. It is kept
/// untrimmed; the tone never fails validation.
pub fn validate_request(request: &GenerationRequest) -> Result<ValidatedRequest, ValidationError> {
    if request.situation.trim().is_empty() {
        return Err(ValidationError::EmptySituation);
    }

    Ok(ValidatedRequest {
        situation: request.situation.clone(),
        tone: Tone::from_label(&request.tone),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(situation: &str, tone: &str) -> GenerationRequest {
        GenerationRequest {
            situation: situation.to_string(),
            tone: tone.to_string(),
        }
    }

    #[test]
    fn test_empty_situation_rejected() {
        for tone in ["formal", "semi-formal", "friendly", "invalid_tone"] {
            assert_eq!(
                validate_request(&request("", tone)),
                Err(ValidationError::EmptySituation)
            );
        }
    }

    #[test]
    fn test_whitespace_situation_rejected() {
        assert_eq!(
            validate_request(&request("  \n\t ", "formal")),
            Err(ValidationError::EmptySituation)
        );
    }

    #[test]
    fn test_situation_kept_verbatim() {
        let validated = validate_request(&request("  decline the meeting \n", "friendly")).unwrap();
        assert_eq!(validated.situation, "  decline the meeting \n");
        assert_eq!(validated.tone, Tone::Friendly);
    }

    #[test]
    fn test_unknown_tone_accepted() {
        let validated = validate_request(&request("Say thanks", "invalid_tone")).unwrap();
        assert_eq!(validated.tone, Tone::Default);
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            ValidationError::EmptySituation.to_string(),
            "Email situation cannot be empty"
        );
    }
}
