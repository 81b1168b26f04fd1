/// Origins permitted by the CORS policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// Every origin is allowed.
    Any,
    /// Only the listed origins are allowed.
    List(Vec<String>),
}

/// Parse a comma-separated origin list such as `CORS_ORIGINS`.
///
/// Entries are trimmed and blank entries dropped. A `*` anywhere in the list
/// allows every origin.
pub fn parse_origins(raw: &str) -> AllowedOrigins {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect();

    if origins.iter().any(|origin| origin == "*") {
        AllowedOrigins::Any
    } else {
        AllowedOrigins::List(origins)
    }
}
