use log::error;
use std::error::Error;
use meteo_dashboard::{run, DashboardConfig};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(DashboardConfig::default()).await {
        error!("Dashboard failed: {}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            error!("  caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}
