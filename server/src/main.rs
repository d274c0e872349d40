//! roi-server: HTTP transport for the invoicing ROI estimator.
//!
//! Usage:
//!   roi-server
//!   ROI_BIND_ADDR=0.0.0.0:5000 ROI_DB_PATH=/var/lib/roi.db roi-server

use std::sync::Arc;

use anyhow::Result;
use roi_core::store::RoiStore;
use roi_server::{config::ServerConfig, create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = ServerConfig::from_env();

    let store = RoiStore::open(&config.db_path)?;
    store.migrate()?;

    let state = Arc::new(AppState::new(store, config.history_limit));
    let app = create_app(state);

    log::info!(
        "listening on {} (db: {}, history limit: {})",
        config.bind_addr,
        config.db_path,
        config.history_limit
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
