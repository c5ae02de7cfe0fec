//! filereq Server Binary
//!
//! Starts the validating UDP server.

use clap::Parser;
use filereq::{Config, Server};
use tracing_subscriber::{fmt, EnvFilter};

/// filereq server
#[derive(Parser, Debug)]
#[command(name = "filereq-server")]
#[command(about = "Validates and acknowledges file-transfer requests")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:69")]
    listen: String,

    /// Receive deadline in milliseconds (0 = block forever)
    #[arg(short, long, default_value = "0")]
    timeout_ms: u64,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,filereq=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::info!("filereq server v{}", filereq::VERSION);
    tracing::info!("Listen address: {}", args.listen);

    let config = Config::builder()
        .server_addr(args.listen)
        .recv_timeout_ms(args.timeout_ms)
        .build();

    let server = match Server::bind(&config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to bind server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
