//! Service entry point: parses CLI flags, initialises tracing, and runs the
//! HTTP server.

use std::net::SocketAddr;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use filmorate::server::{ServerConfig, run};

/// In-memory film and user catalogue service.
#[derive(Debug, Parser)]
#[command(name = "filmorate")]
struct Args {
    /// Socket address for the HTTP listener.
    #[arg(long, default_value = "0.0.0.0:8080")]
    bind: SocketAddr,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = Args::parse();
    let server = run(&ServerConfig::new(args.bind))?;
    info!(bind = %args.bind, "filmorate listening");
    server.await
}
