//! mathtext - math and text analysis utilities over HTTP
//!
//! Serves statistics, quadratic solving, advanced math, text analysis,
//! text transformation and pattern extraction as JSON endpoints.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use mathtext::config::{Config, ServerConfig};

#[derive(Parser)]
#[command(name = "mathtext")]
#[command(about = "Math and text analysis utilities served over HTTP")]
#[command(version)]
struct Args {
    /// Bind address (default: 0.0.0.0)
    #[arg(long, env = "MATHTEXT_HOST")]
    host: Option<String>,

    /// HTTP server port (default: 8000)
    #[arg(long, short = 'p', env = "MATHTEXT_PORT")]
    port: Option<u16>,

    /// Per-request timeout in seconds (default: 30)
    #[arg(long, env = "MATHTEXT_REQUEST_TIMEOUT_SECS")]
    request_timeout_secs: Option<u64>,

    /// Config file path (default: ~/.mathtext/config.toml)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env from the current dir if present
    let _ = dotenvy::dotenv();

    // Initialize logging (RUST_LOG, default info)
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    // An explicit --config must exist and parse; the default path is optional
    let file_config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };

    let config = ServerConfig::resolve(args.host, args.port, args.request_timeout_secs, file_config);

    info!("Starting mathtext {}", env!("CARGO_PKG_VERSION"));
    mathtext::server::run(config).await
}
