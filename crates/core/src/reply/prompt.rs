use super::tone::Tone;
use super::types::{Prompt, ValidatedRequest};

const OUTPUT_RULES: &str = "\
Rules:
- Only output the email body text, no subject line
- Do not include greetings like \"Dear [Name]\" unless specifically needed
- Do not include closing signatures like \"Best regards, [Name]\"
- Keep the response concise and to the point
- Maintain the specified tone throughout
- Be polite and professional regardless of the tone selected";

/// System instruction describing the output rules for the given tone.
pub fn system_instruction(tone: Tone) -> String {
    format!(
        "You are an expert email writer. Generate a {} email reply based on the situation provided.\n\n{}",
        tone.description(),
        OUTPUT_RULES
    )
}

/// User message embedding the tone description and the raw situation.
pub fn user_message(tone: Tone, situation: &str) -> String {
    format!(
        "Write a {} email reply for this situation:\n\n{}",
        tone.description(),
        situation
    )
}

/// Assemble the provider prompt for a validated request.
pub fn build_prompt(request: &ValidatedRequest) -> Prompt {
    Prompt {
        system_instruction: system_instruction(request.tone),
        user_message: user_message(request.tone, &request.situation),
    }
}
