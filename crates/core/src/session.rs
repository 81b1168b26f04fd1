//! Session identifiers handed to the provider.
//!
//! A provider may associate requests sharing an identifier with one
//! conversation. `PerRequest` keeps unrelated callers apart; `Fixed` reuses a
//! single constant identifier for every request.

use std::str::FromStr;

/// Identifier used by every request in [`SessionMode::Fixed`].
pub const FIXED_SESSION_ID: &str = "email-reply-generator";

const PER_REQUEST_PREFIX: &str = "email-reply";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionMode {
    /// A fresh identifier for each request.
    #[default]
    PerRequest,
    /// The constant [`FIXED_SESSION_ID`].
    Fixed,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown session mode '{0}' (expected 'per-request' or 'fixed')")]
pub struct SessionModeParseError(pub String);

impl FromStr for SessionMode {
    type Err = SessionModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "per-request" => Ok(SessionMode::PerRequest),
            "fixed" => Ok(SessionMode::Fixed),
            other => Err(SessionModeParseError(other.to_string())),
        }
    }
}

impl std::fmt::Display for SessionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionMode::PerRequest => f.write_str("per-request"),
            SessionMode::Fixed => f.write_str("fixed"),
        }
    }
}

/// Build the session identifier for one request.
///
/// `nonce` is only used in [`SessionMode::PerRequest`]; the caller supplies
/// it so this stays deterministic.
pub fn session_id(mode: SessionMode, nonce: u64) -> String {
    match mode {
        SessionMode::PerRequest => format!("{PER_REQUEST_PREFIX}-{nonce:016x}"),
        SessionMode::Fixed => FIXED_SESSION_ID.to_string(),
    }
}
