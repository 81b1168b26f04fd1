use crate::prelude::*;
use crate::service::ReplyService;
use axum::{
    extract::State,
    http::HeaderValue,
    routing::{get, post},
    Json, Router,
};
use replygen_core::cors::AllowedOrigins;
use replygen_core::reply::{GenerationRequest, GenerationResponse};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Build the API router.
pub fn router(service: Arc<ReplyService>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/api", get(root_handler))
        .route("/api/", get(root_handler))
        .route("/api/generate-reply", post(generate_reply_handler))
        .layer(cors)
        .with_state(service)
}

/// CORS policy allowing every method and header, with credentials.
///
/// Wildcards cannot be combined with credentials, so "any" mirrors the
/// request's origin, method and headers back instead.
pub fn cors_layer(origins: &AllowedOrigins) -> Result<CorsLayer> {
    let allow_origin = match origins {
        AllowedOrigins::Any => AllowOrigin::mirror_request(),
        AllowedOrigins::List(list) => {
            let values = list
                .iter()
                .map(|origin| {
                    HeaderValue::from_str(origin)
                        .map_err(|e| eyre!("Invalid CORS origin '{}': {}", origin, e))
                })
                .collect::<Result<Vec<_>>>()?;
            AllowOrigin::list(values)
        }
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

async fn root_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Email Reply Generator API" }))
}

async fn generate_reply_handler(
    State(service): State<Arc<ReplyService>>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GenerationResponse>, Error> {
    let reply = service.generate_reply(&request).await?;
    Ok(Json(GenerationResponse { reply }))
}
