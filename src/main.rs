use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use webserver::config::Config;
use webserver::server;
use webserver::store::MemoryUserStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;
    let store = Arc::new(MemoryUserStore::new());
    let router = Arc::new(server::build_router(&cfg, store));

    tokio::select! {
        res = server::listener::run(&cfg, router) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
