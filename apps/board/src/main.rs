mod board;
mod config;
mod dataset;
mod errors;
mod models;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::board::transform::transform;
use crate::board::sessions::spawn_idle_sweeper;
use crate::board::SessionStore;
use crate::config::Config;
use crate::dataset::source_for;
use crate::models::job::JobListing;
use crate::render::LogoResolver;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Board v{}", env!("CARGO_PKG_VERSION"));

    // Load the dataset once; listings are immutable from here on
    let records = source_for(config.jobs_data_path.clone()).load()?;
    let listings: Arc<[JobListing]> = transform(&records).into();
    info!("Prepared {} listings", listings.len());

    if let Some(dir) = &config.logo_dir {
        info!("Resolving logos under {}", dir.display());
    }
    let logos = LogoResolver::new(config.logo_dir.clone(), &listings);

    let sessions = Arc::new(SessionStore::new(
        listings,
        config.max_sessions,
        Duration::from_secs(config.idle_timeout_secs),
    ));
    spawn_idle_sweeper(Arc::clone(&sessions));

    let state = AppState {
        sessions,
        logos,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
