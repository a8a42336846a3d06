//! The in-memory hourly forecast table.

use crate::forecast::error::ForecastError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use polars::prelude::*;
use serde::Serialize;

/// Column holding the hourly timestamp (naive, local to the requested timezone).
pub const TIME: &str = "time";
/// Column holding the air temperature at 2 m, in °C.
pub const TEMPERATURE: &str = "temperature_2m";
/// Column holding the relative humidity at 2 m, in %.
pub const HUMIDITY: &str = "relative_humidity_2m";

/// A single hour of forecast data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastRow {
    pub timestamp: NaiveDateTime,
    pub temperature_c: f64,
    pub humidity_pct: f64,
}

/// An immutable table of hourly forecast rows backed by a Polars `DataFrame`.
///
/// The frame always has the three columns [`TIME`], [`TEMPERATURE`] and [`HUMIDITY`],
/// in ascending timestamp order as the API returned them. Either every row carries all
/// three values or the table has no rows at all.
#[derive(Debug, Clone)]
pub struct ForecastTable {
    frame: DataFrame,
}

fn ms_to_datetime(ms: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(ms).map(|dt| dt.naive_utc())
}

impl ForecastTable {
    fn schema() -> Schema {
        Schema::from_iter([
            Field::new(
                TIME.into(),
                DataType::Datetime(TimeUnit::Milliseconds, None),
            ),
            Field::new(TEMPERATURE.into(), DataType::Float64),
            Field::new(HUMIDITY.into(), DataType::Float64),
        ])
    }

    /// A table with the forecast schema and zero rows.
    pub fn empty() -> Self {
        Self {
            frame: DataFrame::empty_with_schema(&Self::schema()),
        }
    }

    /// Builds a table from rows, keeping their order.
    pub fn from_rows(rows: &[ForecastRow]) -> Result<Self, ForecastError> {
        if rows.is_empty() {
            return Ok(Self::empty());
        }
        let time = DatetimeChunked::from_naive_datetime(
            TIME.into(),
            rows.iter().map(|row| row.timestamp),
            TimeUnit::Milliseconds,
        )
        .into_series();
        let temperature: Vec<f64> = rows.iter().map(|row| row.temperature_c).collect();
        let humidity: Vec<f64> = rows.iter().map(|row| row.humidity_pct).collect();

        let frame = DataFrame::new(vec![
            Column::from(time),
            Column::new(TEMPERATURE.into(), temperature),
            Column::new(HUMIDITY.into(), humidity),
        ])?;
        Ok(Self { frame })
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// Collects the table back into rows, in stored order.
    pub fn rows(&self) -> Result<Vec<ForecastRow>, ForecastError> {
        let times = self.frame.column(TIME)?.datetime()?;
        let temperatures = self.frame.column(TEMPERATURE)?.f64()?;
        let humidities = self.frame.column(HUMIDITY)?.f64()?;

        times
            .into_iter()
            .zip(temperatures)
            .zip(humidities)
            .enumerate()
            .map(|(index, ((time, temperature), humidity))| {
                let timestamp = time
                    .and_then(ms_to_datetime)
                    .ok_or(ForecastError::MissingValue { column: TIME, index })?;
                let temperature_c = temperature.ok_or(ForecastError::MissingValue {
                    column: TEMPERATURE,
                    index,
                })?;
                let humidity_pct = humidity.ok_or(ForecastError::MissingValue {
                    column: HUMIDITY,
                    index,
                })?;
                Ok(ForecastRow {
                    timestamp,
                    temperature_c,
                    humidity_pct,
                })
            })
            .collect()
    }

    /// Rows with `start <= time <= end`, both bounds inclusive.
    ///
    /// The filter runs lazily on a clone of the frame, the stored table is untouched.
    pub fn between(&self, start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, ForecastError> {
        let frame = self
            .frame
            .clone()
            .lazy()
            .filter(
                col(TIME)
                    .gt_eq(lit(start))
                    .and(col(TIME).lt_eq(lit(end))),
            )
            .collect()?;
        Ok(Self { frame })
    }

    pub fn temperature_max(&self) -> Result<Option<f64>, ForecastError> {
        Ok(self.frame.column(TEMPERATURE)?.f64()?.max())
    }

    pub fn temperature_min(&self) -> Result<Option<f64>, ForecastError> {
        Ok(self.frame.column(TEMPERATURE)?.f64()?.min())
    }

    /// First and last calendar date covered by the table, `None` when it is empty.
    pub fn date_span(&self) -> Result<Option<(NaiveDate, NaiveDate)>, ForecastError> {
        let times = self.frame.column(TIME)?.datetime()?;
        let first = times.min().and_then(ms_to_datetime);
        let last = times.max().and_then(ms_to_datetime);
        Ok(first.zip(last).map(|(first, last)| (first.date(), last.date())))
    }
}

impl Default for ForecastTable {
    fn default() -> Self {
        Self::empty()
    }
}
