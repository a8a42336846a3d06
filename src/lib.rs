//! A small weather dashboard: one hourly forecast fetch from Open-Meteo at startup, then a
//! date-filterable line chart, scatter chart and max/min temperature served over HTTP.

pub mod config;
mod error;
pub mod events;
pub mod forecast;
pub mod server;
pub mod view;

pub use config::{DashboardConfig, LatLon, OPEN_METEO_FORECAST_URL};
pub use error::DashboardError;
pub use events::{DateRange, EventRegistry, DATE_RANGE_CHANGED};
pub use forecast::error::ForecastError;
pub use forecast::loader::{load, parse_payload, ForecastLoader};
pub use forecast::table::{ForecastRow, ForecastTable};
pub use server::{create_router, run, AppState};
pub use view::chart::{AxisValues, ChartKind, ChartSpec, Series};
pub use view::projector::project;
pub use view::{ViewModel, ViewState, NOT_AVAILABLE};
