mod cli;
mod routes;

pub use cli::App;
pub use routes::{cors_layer, router};

use crate::config::Config;
use crate::prelude::{eprintln, *};
use crate::provider::GeminiProvider;
use crate::service::ReplyService;
use replygen_core::cors::parse_origins;
use std::sync::Arc;

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let config = Config::from(app.provider);
    if config.api_key.is_none() {
        log::warn!("GEMINI_API_KEY is not set; reply generation requests will fail");
    }

    let origins = parse_origins(&app.cors_origins);
    let cors = cors_layer(&origins)?;

    if global.verbose {
        eprintln!("Model: {}", config.model);
        eprintln!("Session mode: {}", config.session_mode);
        eprintln!("CORS origins: {:?}", origins);
    }

    let service = Arc::new(ReplyService::new(config, Arc::new(GeminiProvider)));
    let app_router = router(service, cors);

    let addr = f!("{}:{}", app.host, app.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("listening on http://{addr}");
    if global.verbose {
        eprintln!("Root endpoint: http://{}/api/", addr);
        eprintln!("Generate endpoint: http://{}/api/generate-reply", addr);
    }

    axum::serve(listener, app_router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    log::info!("server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
