use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use replygen_core::reply::ValidationError;
use serde::Serialize;

use crate::provider::ProviderError;

/// Failures of a reply generation request, as reported to the caller.
///
/// The display text of each variant is the detail sent back over HTTP, so
/// provider causes stay in `source` and only reach the logs.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    InvalidInput(#[from] ValidationError),

    #[error("Gemini API key not configured")]
    Configuration,

    #[error("Failed to generate email reply. Please try again.")]
    GenerationFailed(#[source] ProviderError),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Error::Configuration | Error::GenerationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = Json(ErrorDetail {
            detail: self.to_string(),
        });

        (self.status(), body).into_response()
    }
}
