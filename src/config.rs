//! Fixed settings for the dashboard process: which location to forecast, which endpoint
//! to ask, and where to serve the page.

use bon::Builder;

/// Default Open-Meteo forecast endpoint.
pub const OPEN_METEO_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use meteo_dashboard::LatLon;
///
/// let buenos_aires = LatLon(-34.61, -58.38);
/// assert_eq!(buenos_aires.0, -34.61); // Latitude
/// assert_eq!(buenos_aires.1, -58.38); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// Settings the dashboard is started with.
///
/// Every field has a default, so `DashboardConfig::default()` gives the production setup
/// (Buenos Aires, Open-Meteo, port 8050). Tests point `endpoint` at a local server.
///
/// ```
/// use meteo_dashboard::{DashboardConfig, LatLon};
///
/// let config = DashboardConfig::builder()
///     .location(LatLon(52.52, 13.40))
///     .timezone("Europe/Berlin".to_string())
///     .build();
/// assert_eq!(config.bind_address, "0.0.0.0:8050");
/// ```
#[derive(Debug, Clone, Builder)]
pub struct DashboardConfig {
    #[builder(default = LatLon(-34.61, -58.38))]
    pub location: LatLon,

    /// IANA timezone the API reports local timestamps in.
    #[builder(default = "America/Argentina/Buenos_Aires".to_string())]
    pub timezone: String,

    #[builder(default = OPEN_METEO_FORECAST_URL.to_string())]
    pub endpoint: String,

    #[builder(default = "0.0.0.0:8050".to_string())]
    pub bind_address: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
