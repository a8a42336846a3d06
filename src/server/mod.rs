//! HTTP surface of the dashboard: the page, the view endpoint and a health check.

pub mod handlers;

use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::events::EventRegistry;
use crate::forecast::loader::ForecastLoader;
use crate::forecast::table::ForecastTable;
use axum::routing::get;
use axum::Router;
use log::{error, info};
use std::sync::Arc;
use tokio::net::TcpListener;

/// State shared by every request. The table is loaded once and only read afterwards.
#[derive(Debug, Clone)]
pub struct AppState {
    pub table: Arc<ForecastTable>,
    pub events: Arc<EventRegistry>,
}

impl AppState {
    pub fn new(table: ForecastTable) -> Self {
        Self {
            table: Arc::new(table),
            events: Arc::new(EventRegistry::with_projector()),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/view", get(handlers::view))
        .route("/api/range", get(handlers::date_range))
        .route("/health", get(handlers::health))
        .with_state(state)
}

/// Loads the forecast, then serves the dashboard until the server stops.
///
/// The table is ready before the listener binds, so the first request already sees it.
pub async fn run(config: DashboardConfig) -> Result<(), DashboardError> {
    let table = ForecastLoader::new(&config).load().await?;
    let app = create_router(AppState::new(table));

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .map_err(|e| DashboardError::Bind(config.bind_address.clone(), e))?;
    info!("Dashboard running on http://{}", config.bind_address);

    axum::serve(listener, app).await.map_err(|e| {
        error!("Server error: {}", e);
        DashboardError::Serve(e)
    })
}
