use crate::config::{Config, ProviderOptions};
use crate::prelude::{eprintln, println, *};
use crate::provider::GeminiProvider;
use crate::service::ReplyService;
use replygen_core::reply::{GenerationRequest, Tone};
use std::sync::Arc;

#[derive(Debug, clap::Parser)]
#[command(name = "generate")]
#[command(about = "Generate a single email reply and print it")]
pub struct App {
    /// Description of the email situation to reply to
    pub situation: String,

    /// Reply tone: formal, semi-formal or friendly (anything else is treated as professional)
    #[clap(long, short, default_value = "formal")]
    pub tone: String,

    #[clap(flatten)]
    pub provider: ProviderOptions,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let config = Config::from(app.provider);

    if global.verbose {
        eprintln!("Model: {}", config.model);
        eprintln!("Session mode: {}", config.session_mode);
        eprintln!("Tone: {}", Tone::from_label(&app.tone));
    }

    let service = ReplyService::new(config, Arc::new(GeminiProvider));
    let request = GenerationRequest {
        situation: app.situation,
        tone: app.tone,
    };

    let reply = service.generate_reply(&request).await.map_err(|e| eyre!(e))?;

    println!("{reply}");

    Ok(())
}
