//! Turns the forecast table and a date range into a [`ViewModel`].

use crate::forecast::error::ForecastError;
use crate::forecast::table::ForecastTable;
use crate::view::chart::ChartSpec;
use crate::view::{
    format_temperature, ViewModel, ViewState, NOT_AVAILABLE, TITLE_TEMPERATURE_HUMIDITY,
    TITLE_WEATHER_EVOLUTION,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use log::{debug, error};

/// Builds the view for `start_date..=end_date`.
///
/// The outcome is decided in this order:
/// 1. empty table or an unset date: [`ViewModel::unavailable`]
/// 2. no row inside the range: [`ViewModel::no_data_in_range`]
/// 3. otherwise both charts and the max/min temperature of the rows in range.
///
/// Both dates are inclusive. A row belongs to the range when its timestamp lies between
/// `start_date 00:00` and the last millisecond of `end_date`. Bounds are compared as
/// dates against the stored local timestamps, with no timezone conversion.
/// A start after the end selects nothing.
///
/// This never fails; an unexpected frame error is logged and shown as unavailable.
pub fn project(
    table: &ForecastTable,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> ViewModel {
    let (Some(start), Some(end)) = (start_date, end_date) else {
        return ViewModel::unavailable();
    };
    if table.is_empty() {
        return ViewModel::unavailable();
    }

    match project_range(table, start, end) {
        Ok(view) => view,
        Err(e) => {
            error!("Projection for {} to {} failed: {}", start, end, e);
            ViewModel::unavailable()
        }
    }
}

fn project_range(
    table: &ForecastTable,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<ViewModel, ForecastError> {
    let filtered = table.between(start.and_time(NaiveTime::MIN), end_of_day(end))?;
    debug!(
        "{} of {} rows between {} and {}",
        filtered.height(),
        table.height(),
        start,
        end
    );
    if filtered.is_empty() {
        return Ok(ViewModel::no_data_in_range());
    }

    let rows = filtered.rows()?;
    let summary = |value: Option<f64>| {
        value
            .map(format_temperature)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    };

    Ok(ViewModel {
        state: ViewState::Ready,
        line_chart: ChartSpec::weather_evolution(TITLE_WEATHER_EVOLUTION, &rows),
        scatter_chart: ChartSpec::temperature_humidity(TITLE_TEMPERATURE_HUMIDITY, &rows),
        temp_max: summary(filtered.temperature_max()?),
        temp_min: summary(filtered.temperature_min()?),
    })
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or_else(|| date.and_time(NaiveTime::MIN))
}
