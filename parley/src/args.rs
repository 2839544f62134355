use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Parley translation and transcription gateway
#[derive(Debug, Parser)]
#[command(name = "parley", about = "HTTP gateway for text translation and speech transcription")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "parley.toml", env = "PARLEY_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "PARLEY_LISTEN")]
    pub listen: Option<SocketAddr>,

    /// Log filter, e.g. `info` or `stt=debug,tower_http=debug`
    #[arg(long, default_value = "info", env = "PARLEY_LOG")]
    pub log_level: String,
}
