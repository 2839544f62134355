//! Assembles the Parley HTTP server from configuration

mod cors;
mod health;

use std::net::SocketAddr;

use axum::Router;
use parley_config::Config;
use tower_http::trace::TraceLayer;

const TRANSCRIBE_PATH: &str = "/transcribe/";
const TRANSLATE_PATH: &str = "/translate/";

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the transcription or translation service fails
    /// to initialize
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let listen_address = config.server.listen_address();

        let mut app = Router::new();

        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        if let Some(ref stt_config) = config.stt {
            let path = config.server.route(TRANSCRIBE_PATH);
            let state = stt::build_server(stt_config)?;
            app = app.merge(stt::endpoint_router(&path).with_state(state));
            tracing::info!(%path, "transcription endpoint enabled");
        }

        if let Some(ref translate_config) = config.translate {
            let path = config.server.route(TRANSLATE_PATH);
            let state = translate::build_server(translate_config)?;
            app = app.merge(translate::endpoint_router(&path).with_state(state));
            tracing::info!(%path, "translation endpoint enabled");
        }

        // Apply middleware layers (innermost first)
        app = app.layer(TraceLayer::new_for_http());

        if let Some(ref cors_config) = config.server.cors {
            app = app.layer(cors::cors_layer(cors_config));
        }

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Override the listen address
    #[must_use]
    pub const fn with_listen_address(mut self, listen_address: SocketAddr) -> Self {
        self.listen_address = listen_address;
        self
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
