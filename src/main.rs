//! Team Poll server - binary entry point

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use team_poll::api::http::create_router;
use team_poll::api::websocket::state::AppState;
use team_poll::config::{demo_activities, ServerConfig};
use team_poll::store::VoteStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("team_poll=info")),
        )
        .init();

    let config = ServerConfig::from_env();

    let store = if config.seed_demo {
        Arc::new(VoteStore::with_seed(demo_activities()))
    } else {
        Arc::new(VoteStore::new())
    };

    let state = Arc::new(AppState::new(store));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, mode = ?config.vote_mode, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
