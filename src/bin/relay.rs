//! filereq Relay Binary
//!
//! Starts the intermediate host relaying datagrams between client and server.

use clap::Parser;
use filereq::{Config, RelayHost};
use tracing_subscriber::{fmt, EnvFilter};

/// filereq relay host
#[derive(Parser, Debug)]
#[command(name = "filereq-relay")]
#[command(about = "Store-and-forward relay between client and server")]
#[command(version)]
struct Args {
    /// Client-facing listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:23")]
    listen: String,

    /// Server address requests are forwarded to
    #[arg(short, long, default_value = "127.0.0.1:69")]
    server: String,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,filereq=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::info!("filereq relay v{}", filereq::VERSION);
    tracing::info!("Client-facing address: {}", args.listen);
    tracing::info!("Forwarding to server: {}", args.server);

    let config = Config::builder()
        .relay_addr(args.listen)
        .server_addr(args.server)
        .build();

    let relay = match RelayHost::bind(&config) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Failed to bind relay: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = relay.run() {
        tracing::error!("Relay error: {}", e);
        std::process::exit(1);
    }
}
