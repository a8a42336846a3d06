use polars::error::PolarsError;
use thiserror::Error;

/// Errors that make a forecast payload unusable.
///
/// Transport problems and non-2xx statuses are not listed here: the loader recovers from
/// those by returning an empty table. Everything below means the upstream contract was
/// broken and the process should stop instead of serving corrupt rows.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Forecast payload is not valid JSON or is missing required keys")]
    PayloadDecode(#[source] serde_json::Error),

    #[error("Hourly arrays differ in length: time={time}, temperature_2m={temperature}, relative_humidity_2m={humidity}")]
    LengthMismatch {
        time: usize,
        temperature: usize,
        humidity: usize,
    },

    #[error("Missing value in column '{column}' at index {index}")]
    MissingValue { column: &'static str, index: usize },

    #[error("Unparseable timestamp '{value}' at index {index}")]
    TimestampParse {
        value: String,
        index: usize,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
