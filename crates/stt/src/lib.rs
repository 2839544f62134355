#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod artifact;
mod error;
mod http_client;
mod intake;
mod metadata;
mod normalize;
mod provider;
mod request;
mod server;
#[cfg(test)]
mod testing;
mod types;

use std::sync::Arc;

use axum::{Json, Router, extract::DefaultBodyLimit, extract::State, routing::post};

pub use error::{Result, SttError};
pub use normalize::TargetFormat;
pub use request::ExtractMultipart;
pub use server::{Server, SttServerBuilder};
pub use types::{AudioContainer, TranscriptionForm, TranscriptionResponse, UploadedAudio};

/// Build the STT server from configuration
///
/// # Errors
///
/// Returns an error if the server fails to initialize
pub fn build_server(config: &parley_config::SttConfig) -> anyhow::Result<Arc<Server>> {
    let server = Arc::new(
        SttServerBuilder::new(config)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize STT server: {e}"))?,
    );
    Ok(server)
}

/// Create the endpoint router for STT, mounted at `path`
pub fn endpoint_router(path: &str) -> Router<Arc<Server>> {
    Router::new()
        .route(path, post(transcribe))
        .layer(DefaultBodyLimit::max(request::BODY_LIMIT_BYTES))
}

/// Handle transcription requests
///
/// The pipeline runs on its own task: if the client goes away, the
/// in-flight recognition still finishes and temporary files are removed.
async fn transcribe(
    State(server): State<Arc<Server>>,
    ExtractMultipart(form): ExtractMultipart,
) -> Result<Json<TranscriptionResponse>> {
    tracing::debug!("STT transcription handler called for {}", form.audio.filename);

    let response = tokio::spawn(async move { server.transcribe(form).await })
        .await
        .map_err(|e| {
            tracing::error!("Transcription task failed: {e}");
            SttError::InternalError(e.to_string())
        })??;

    tracing::debug!("Transcription complete");

    Ok(Json(response))
}
