//! Renderer-agnostic description of what the dashboard shows for a date range.

pub mod chart;
pub mod projector;

use crate::view::chart::ChartSpec;
use serde::Serialize;

/// Placeholder shown instead of a summary value that cannot be computed.
pub const NOT_AVAILABLE: &str = "N/A";

pub const TITLE_UNAVAILABLE: &str = "No data available";
pub const TITLE_NO_DATA_IN_RANGE: &str = "No data in this range";
pub const TITLE_WEATHER_EVOLUTION: &str = "Weather evolution";
pub const TITLE_TEMPERATURE_HUMIDITY: &str = "Temperature/humidity relationship";

/// Which of the three projection outcomes a [`ViewModel`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    /// The table is empty or one of the dates is unset.
    Unavailable,
    /// There is data, but none of it falls inside the selected range.
    NoDataInRange,
    Ready,
}

/// Everything the page needs for one date range: two charts and two indicators.
///
/// A new view model is built for every range change, it is never patched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub state: ViewState,
    pub line_chart: ChartSpec,
    pub scatter_chart: ChartSpec,
    pub temp_max: String,
    pub temp_min: String,
}

impl ViewModel {
    pub fn unavailable() -> Self {
        Self::placeholder(ViewState::Unavailable, TITLE_UNAVAILABLE)
    }

    pub fn no_data_in_range() -> Self {
        Self::placeholder(ViewState::NoDataInRange, TITLE_NO_DATA_IN_RANGE)
    }

    fn placeholder(state: ViewState, title: &str) -> Self {
        Self {
            state,
            line_chart: ChartSpec::placeholder(title),
            scatter_chart: ChartSpec::placeholder(title),
            temp_max: NOT_AVAILABLE.to_string(),
            temp_min: NOT_AVAILABLE.to_string(),
        }
    }
}

/// Formats a temperature for the summary indicators, e.g. `22.5 °C`.
pub fn format_temperature(value: f64) -> String {
    format!("{:.1} °C", value)
}
