//! filereq Client Binary
//!
//! Runs the fixed 11-request script against the relay host.

use clap::Parser;
use filereq::{Client, Config};
use tracing_subscriber::{fmt, EnvFilter};

/// filereq scripted client
#[derive(Parser, Debug)]
#[command(name = "filereq-client")]
#[command(about = "Sends the scripted read/write requests through the relay host")]
#[command(version)]
struct Args {
    /// Relay host address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:23")]
    relay: String,

    /// Receive deadline in milliseconds (0 = block forever; the final,
    /// deliberately malformed request then hangs the client, as the server
    /// drops it without replying)
    #[arg(short, long, default_value = "5000")]
    timeout_ms: u64,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,filereq=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::info!("filereq client v{}", filereq::VERSION);
    tracing::info!("Relay address: {}", args.relay);

    let config = Config::builder()
        .relay_addr(args.relay)
        .recv_timeout_ms(args.timeout_ms)
        .build();

    let client = match Client::connect(&config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to bind client socket: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = client.run_script() {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Script complete");
}
