use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use goldtracker::api::{self, ApiState};
use goldtracker::config::AppConfig;
use goldtracker::observability;
use goldtracker::scheduler::RefreshScheduler;
use goldtracker::scrape::fetcher::Fetcher;
use goldtracker::scrape::job::{ScrapedSource, SourceJob};
use goldtracker::snapshot::SnapshotStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init_tracing();
    observability::metrics::register_metrics();

    let config = AppConfig::load().context("failed to load configuration")?;

    let fetcher = Fetcher::new()?;
    let jobs = config
        .sources
        .iter()
        .map(|rule| SourceJob::new(ScrapedSource::new(fetcher.clone(), rule.clone())))
        .collect();

    let store = Arc::new(SnapshotStore::new());
    let scheduler = Arc::new(RefreshScheduler::new(
        jobs,
        store.clone(),
        Duration::from_secs(config.scheduler.refresh_interval_secs),
    ));
    tokio::spawn(scheduler.run());

    let app = api::create_router(Arc::new(ApiState { store }));
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("server running on port {}", config.server.port);
    axum::serve(listener, app).await?;

    Ok(())
}
