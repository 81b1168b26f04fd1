/// Normalize a provider response into the reply returned to the caller.
///
/// Only leading and trailing whitespace is removed; inner formatting such as
/// paragraph breaks is preserved.
pub fn clean_reply(response: &str) -> String {
    response.trim().to_string()
}
