use replygen_core::session::SessionMode;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Provider settings shared by every subcommand.
#[derive(Debug, Clone, clap::Args)]
pub struct ProviderOptions {
    /// Gemini API key
    #[clap(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Gemini model used for generation
    #[clap(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Session identifier policy: 'per-request' or 'fixed'
    #[clap(long, env = "REPLYGEN_SESSION_MODE", default_value = "per-request")]
    pub session_mode: SessionMode,
}

/// Immutable service configuration, built once at startup.
#[derive(Clone)]
pub struct Config {
    /// `None` when the key is unset or blank.
    pub api_key: Option<String>,
    pub model: String,
    pub session_mode: SessionMode,
}

impl From<ProviderOptions> for Config {
    fn from(options: ProviderOptions) -> Self {
        Self {
            api_key: options.api_key.filter(|key| !key.trim().is_empty()),
            model: options.model,
            session_mode: options.session_mode,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("session_mode", &self.session_mode)
            .finish()
    }
}
