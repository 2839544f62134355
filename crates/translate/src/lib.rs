#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod http_client;
mod provider;
mod request;
mod server;
mod types;

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};

pub use error::{Result, TranslateError};
pub use request::ExtractPayload;
pub use server::{Server, TranslateServerBuilder};
pub use types::{TranslationRequest, TranslationResponse};

/// Build the translation server from configuration
///
/// # Errors
///
/// Returns an error if the server fails to initialize
pub fn build_server(config: &parley_config::TranslateConfig) -> anyhow::Result<Arc<Server>> {
    let server = Arc::new(
        TranslateServerBuilder::new(config)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize translation server: {e}"))?,
    );
    Ok(server)
}

/// Create the endpoint router for translation, mounted at `path`
pub fn endpoint_router(path: &str) -> Router<Arc<Server>> {
    Router::new().route(path, post(translate))
}

/// Handle translation requests
async fn translate(
    State(server): State<Arc<Server>>,
    ExtractPayload(request): ExtractPayload<TranslationRequest>,
) -> Result<Json<TranslationResponse>> {
    tracing::debug!("Translation handler called for target {}", request.target_language_code);

    let response = server.translate(request).await?;

    Ok(Json(response))
}
