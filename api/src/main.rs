use std::{net::SocketAddr, sync::Arc};

use clap::Parser;
use nutrilens_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LogArgs},
};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logger(log: &LogArgs) {
    let filter = EnvFilter::try_new(&log.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log.json {
        registry.with(fmt::layer().with_target(true).json()).init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}

async fn shutdown_signal(token: CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
    token.cancel();
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port).parse()?;
    let state = state(args).await?;
    let shutdown = state.shutdown.clone();
    let app = router(state)?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "NutriLens API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    Ok(())
}
