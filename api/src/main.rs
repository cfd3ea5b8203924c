use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use civitas_core::application::scheduler::EnrichmentScheduler;

use crate::application::http::server::http_server;
use crate::args::Args;

mod application;
mod args;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if args.log_json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let state = http_server::state(args.clone()).await?;

    let scheduler = EnrichmentScheduler::new(
        Duration::from_secs(args.scheduler.sweep_interval_secs),
        args.scheduler.sweep_batch_size,
    );
    let sweep_handle = args
        .scheduler
        .sweep_enabled
        .then(|| scheduler.start(state.service.clone()));

    let router = http_server::router(state)?;

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port).parse()?;
    tracing::info!(%addr, "Listening");

    let server = axum_server::bind(addr).serve(router.into_make_service());

    tokio::select! {
        result = server => result?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    scheduler.stop();
    if let Some(handle) = sweep_handle {
        let _ = handle.await;
    }

    Ok(())
}
