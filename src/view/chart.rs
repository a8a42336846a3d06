use crate::forecast::table::ForecastRow;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Scatter,
}

/// X values of a series: timestamps for time-series charts, plain numbers otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AxisValues {
    Time(Vec<NaiveDateTime>),
    Number(Vec<f64>),
}

impl AxisValues {
    pub fn len(&self) -> usize {
        match self {
            AxisValues::Time(values) => values.len(),
            AxisValues::Number(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub x: AxisValues,
    pub y: Vec<f64>,
}

/// Shape of one chart: kind, title, axis labels and the plotted series.
///
/// Pixel-level rendering is left to whoever draws it (plotly.js on the served page).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_axis: String,
    pub y_axis: String,
    pub series: Vec<Series>,
    pub empty: bool,
}

pub const TEMPERATURE_LABEL: &str = "Temperature (°C)";
pub const HUMIDITY_LABEL: &str = "Humidity (%)";
pub const TIME_LABEL: &str = "Date";

impl ChartSpec {
    /// An empty chart carrying only a title.
    pub fn placeholder(title: &str) -> Self {
        Self {
            kind: ChartKind::Scatter,
            title: title.to_string(),
            x_axis: String::new(),
            y_axis: String::new(),
            series: Vec::new(),
            empty: true,
        }
    }

    /// Temperature and humidity against time, one series each.
    pub fn weather_evolution(title: &str, rows: &[ForecastRow]) -> Self {
        let times: Vec<NaiveDateTime> = rows.iter().map(|row| row.timestamp).collect();
        let series = vec![
            Series {
                name: TEMPERATURE_LABEL.to_string(),
                x: AxisValues::Time(times.clone()),
                y: rows.iter().map(|row| row.temperature_c).collect(),
            },
            Series {
                name: HUMIDITY_LABEL.to_string(),
                x: AxisValues::Time(times),
                y: rows.iter().map(|row| row.humidity_pct).collect(),
            },
        ];
        Self {
            kind: ChartKind::Line,
            title: title.to_string(),
            x_axis: TIME_LABEL.to_string(),
            y_axis: String::new(),
            empty: rows.is_empty(),
            series,
        }
    }

    /// Humidity (y) against temperature (x).
    pub fn temperature_humidity(title: &str, rows: &[ForecastRow]) -> Self {
        let series = vec![Series {
            name: HUMIDITY_LABEL.to_string(),
            x: AxisValues::Number(rows.iter().map(|row| row.temperature_c).collect()),
            y: rows.iter().map(|row| row.humidity_pct).collect(),
        }];
        Self {
            kind: ChartKind::Scatter,
            title: title.to_string(),
            x_axis: TEMPERATURE_LABEL.to_string(),
            y_axis: HUMIDITY_LABEL.to_string(),
            empty: rows.is_empty(),
            series,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rows() -> Vec<ForecastRow> {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        vec![
            ForecastRow {
                timestamp: day.and_hms_opt(0, 0, 0).unwrap(),
                temperature_c: 20.0,
                humidity_pct: 50.0,
            },
            ForecastRow {
                timestamp: day.and_hms_opt(1, 0, 0).unwrap(),
                temperature_c: 22.5,
                humidity_pct: 45.0,
            },
        ]
    }

    #[test]
    fn test_weather_evolution_has_a_series_per_metric() {
        let chart = ChartSpec::weather_evolution("t", &rows());
        assert_eq!(chart.kind, ChartKind::Line);
        assert!(!chart.empty);
        let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec![TEMPERATURE_LABEL, HUMIDITY_LABEL]);
        assert_eq!(chart.series[0].y, vec![20.0, 22.5]);
        assert_eq!(chart.series[1].y, vec![50.0, 45.0]);
        assert!(matches!(chart.series[1].x, AxisValues::Time(ref t) if t.len() == 2));
    }

    #[test]
    fn test_temperature_humidity_binds_axes() {
        let chart = ChartSpec::temperature_humidity("t", &rows());
        assert_eq!(chart.kind, ChartKind::Scatter);
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].x, AxisValues::Number(vec![20.0, 22.5]));
        assert_eq!(chart.series[0].y, vec![50.0, 45.0]);
        assert_eq!(chart.x_axis, TEMPERATURE_LABEL);
    }

    #[test]
    fn test_time_axis_serializes_as_iso_strings() {
        let chart = ChartSpec::weather_evolution("t", &rows());
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["series"][0]["x"][1], "2024-01-01T01:00:00");
        assert_eq!(json["kind"], "line");
    }
}
