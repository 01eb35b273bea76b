//! notesvc binary — wire config, store, and the gRPC server together.

use std::net::SocketAddr;
use std::process;

use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use notesvc::config::Config;
use notesvc::grpc;
use notesvc::store::MongoStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        error!(error = %e, "fatal");
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    let addr: SocketAddr = config.listen_addr.parse()?;

    info!(uri = %config.mongo_uri, "connecting to mongodb");
    let store = MongoStore::connect(&config).await?;
    let client = store.clone();

    info!(%addr, "the server is running");
    grpc::serve(store, addr, shutdown_signal()).await?;

    info!("closing mongodb connection");
    client.disconnect().await;
    info!("server stopped");
    Ok(())
}

/// Resolves on Ctrl-C; `serve` then drains in-flight requests and returns.
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    info!("stopping server");
}
