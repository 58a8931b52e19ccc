use anyhow::Result;
use clap::Parser;
use sqlgen_core::providers::llm::ollama::OllamaClient;
use sqlgen_server::config::ServerConfig;
use sqlgen_server::server::{self, AppState};
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    #[arg(long, default_value_t = 8000)]
    port: u16,
}

use tracing_subscriber::{fmt, EnvFilter};

fn init_logging(log_level: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_current_span(false)
        .with_span_list(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let cfg = ServerConfig::from_env();

    init_logging(&cfg.log_level);

    tracing::info!(
        event = "server_start",
        host = %args.host,
        port = args.port,
        model = %cfg.model,
        backend = %cfg.backend_url,
    );

    let client = Arc::new(OllamaClient::new(cfg.backend_url, cfg.model));
    let state = Arc::new(AppState { client });

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    server::run(addr, state).await
}
