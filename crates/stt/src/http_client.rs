use std::{sync::OnceLock, time::Duration};

use axum::http;
use reqwest::Client;

/// HTTP client shared by every recognition request
///
/// Cloning a `reqwest::Client` shares its connection pool.
pub fn http_client() -> Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();

    CLIENT
        .get_or_init(|| {
            let mut headers = http::HeaderMap::new();
            headers.insert(http::header::CONNECTION, http::HeaderValue::from_static("keep-alive"));

            Client::builder()
                .user_agent(concat!("parley-stt/", env!("CARGO_PKG_VERSION")))
                .timeout(Duration::from_secs(120))
                .pool_idle_timeout(Some(Duration::from_secs(30)))
                .tcp_keepalive(Some(Duration::from_secs(60)))
                .default_headers(headers)
                .build()
                .expect("Failed to build default HTTP client")
        })
        .clone()
}
