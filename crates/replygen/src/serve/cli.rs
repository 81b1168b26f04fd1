use crate::config::ProviderOptions;

#[derive(Debug, clap::Parser)]
#[command(name = "serve")]
#[command(about = "Run the reply generation HTTP API")]
pub struct App {
    /// Port to listen on
    #[arg(short, long, env = "REPLYGEN_PORT", default_value = "8001")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "REPLYGEN_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Comma-separated list of allowed CORS origins ('*' allows any)
    #[arg(long, env = "CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    #[clap(flatten)]
    pub provider: ProviderOptions,
}
