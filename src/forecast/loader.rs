//! Fetches the hourly forecast once and turns it into a [`ForecastTable`].

use crate::config::{DashboardConfig, LatLon, OPEN_METEO_FORECAST_URL};
use crate::forecast::error::ForecastError;
use crate::forecast::table::{ForecastRow, ForecastTable, HUMIDITY, TEMPERATURE, TIME};
use chrono::NaiveDateTime;
use log::{debug, info, warn};
use reqwest::Client;
use serde::Deserialize;

/// Hourly variables requested from the API, comma joined.
pub const HOURLY_FIELDS: &str = "temperature_2m,relative_humidity_2m";

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

#[derive(Debug, Deserialize)]
struct ForecastPayload {
    hourly: HourlyPayload,
}

// Values are optional so that a `null` is reported with its position instead of
// failing the whole decode.
#[derive(Debug, Deserialize)]
struct HourlyPayload {
    time: Vec<Option<String>>,
    temperature_2m: Vec<Option<f64>>,
    relative_humidity_2m: Vec<Option<f64>>,
}

/// Loads the hourly forecast for one fixed location.
///
/// Transport failures and non-2xx statuses are logged and resolved to an empty table.
/// A payload that arrives but breaks the expected shape is returned as an error.
pub struct ForecastLoader {
    client: Client,
    endpoint: String,
    location: LatLon,
    timezone: String,
}

impl ForecastLoader {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint.clone(),
            location: config.location,
            timezone: config.timezone.clone(),
        }
    }

    pub async fn load(&self) -> Result<ForecastTable, ForecastError> {
        let body = match self.fetch().await {
            Ok(body) => body,
            Err(e) => {
                warn!(
                    "Could not fetch forecast from {}, continuing without data: {}",
                    self.endpoint, e
                );
                return Ok(ForecastTable::empty());
            }
        };
        let table = parse_payload(&body)?;
        info!(
            "Loaded {} hourly forecast rows for ({}, {}) in {}",
            table.height(),
            self.location.0,
            self.location.1,
            self.timezone
        );
        Ok(table)
    }

    async fn fetch(&self) -> Result<Vec<u8>, reqwest::Error> {
        info!("Requesting forecast from {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("latitude", self.location.0.to_string()),
                ("longitude", self.location.1.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("timezone", self.timezone.clone()),
            ])
            .send()
            .await?
            .error_for_status()?;
        let body = response.bytes().await?;
        debug!("Received {} bytes of forecast payload", body.len());
        Ok(body.to_vec())
    }
}

/// Loads the forecast for `location` from the public Open-Meteo endpoint.
pub async fn load(location: LatLon, timezone: &str) -> Result<ForecastTable, ForecastError> {
    let config = DashboardConfig::builder()
        .location(location)
        .timezone(timezone.to_string())
        .endpoint(OPEN_METEO_FORECAST_URL.to_string())
        .build();
    ForecastLoader::new(&config).load().await
}

/// Parses a raw forecast response body into a table.
///
/// The three hourly arrays are zipped by position. Different lengths, `null` values and
/// timestamps in an unknown format are all errors.
pub fn parse_payload(body: &[u8]) -> Result<ForecastTable, ForecastError> {
    let payload: ForecastPayload =
        serde_json::from_slice(body).map_err(ForecastError::PayloadDecode)?;
    let hourly = payload.hourly;

    if hourly.time.len() != hourly.temperature_2m.len()
        || hourly.time.len() != hourly.relative_humidity_2m.len()
    {
        return Err(ForecastError::LengthMismatch {
            time: hourly.time.len(),
            temperature: hourly.temperature_2m.len(),
            humidity: hourly.relative_humidity_2m.len(),
        });
    }

    let rows = hourly
        .time
        .into_iter()
        .zip(hourly.temperature_2m)
        .zip(hourly.relative_humidity_2m)
        .enumerate()
        .map(|(index, ((time, temperature), humidity))| {
            let time = time.ok_or(ForecastError::MissingValue { column: TIME, index })?;
            Ok(ForecastRow {
                timestamp: parse_timestamp(&time, index)?,
                temperature_c: temperature.ok_or(ForecastError::MissingValue {
                    column: TEMPERATURE,
                    index,
                })?,
                humidity_pct: humidity.ok_or(ForecastError::MissingValue {
                    column: HUMIDITY,
                    index,
                })?,
            })
        })
        .collect::<Result<Vec<_>, ForecastError>>()?;

    ForecastTable::from_rows(&rows)
}

fn parse_timestamp(value: &str, index: usize) -> Result<NaiveDateTime, ForecastError> {
    let mut last_error = None;
    for format in TIMESTAMP_FORMATS {
        match NaiveDateTime::parse_from_str(value, format) {
            Ok(timestamp) => return Ok(timestamp),
            Err(e) => last_error = Some(e),
        }
    }
    match last_error {
        Some(source) => Err(ForecastError::TimestampParse {
            value: value.to_string(),
            index,
            source,
        }),
        None => Err(ForecastError::MissingValue { column: TIME, index }),
    }
}
