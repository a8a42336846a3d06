use crate::error::DashboardError;
use crate::events::{DateRange, DATE_RANGE_CHANGED};
use crate::server::AppState;
use crate::view::ViewModel;
use axum::extract::{Query, State};
use axum::response::Html;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const DASHBOARD_PAGE: &str = include_str!("../../assets/dashboard.html");

/// Raw query of `/api/view`. Both values are optional and may be empty.
#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DateSpanResponse {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub rows: usize,
}

pub async fn index() -> Html<&'static str> {
    Html(DASHBOARD_PAGE)
}

pub async fn view(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Result<Json<ViewModel>, DashboardError> {
    let range = DateRange {
        start_date: parse_date_param("start_date", query.start_date.as_deref())?,
        end_date: parse_date_param("end_date", query.end_date.as_deref())?,
    };
    let view = state.events.dispatch(DATE_RANGE_CHANGED, &state.table, range)?;
    Ok(Json(view))
}

/// The initial picker bounds: first and last date in the table.
pub async fn date_range(
    State(state): State<AppState>,
) -> Result<Json<DateSpanResponse>, DashboardError> {
    let span = state.table.date_span()?;
    Ok(Json(DateSpanResponse {
        start_date: span.map(|(first, _)| first),
        end_date: span.map(|(_, last)| last),
    }))
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        rows: state.table.height(),
    })
}

/// Reads a picker value. Empty means unset; a full timestamp contributes its date part.
fn parse_date_param(
    param: &'static str,
    value: Option<&str>,
) -> Result<Option<NaiveDate>, DashboardError> {
    let value = match value.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(value) => value,
    };
    let date_part = value.split(['T', ' ']).next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(Some)
        .map_err(|source| DashboardError::InvalidDate {
            param,
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::table::{ForecastRow, ForecastTable};
    use crate::server::create_router;
    use axum::http::StatusCode;
    use axum_test::TestServer;

    fn sample_table() -> ForecastTable {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        ForecastTable::from_rows(&[
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
        ])
        .unwrap()
    }

    fn server_with(table: ForecastTable) -> TestServer {
        TestServer::new(create_router(AppState::new(table))).unwrap()
    }

    #[test]
    fn test_parse_date_param() {
        let jan_first = NaiveDate::from_ymd_opt(2024, 1, 1);
        assert_eq!(parse_date_param("start_date", None).unwrap(), None);
        assert_eq!(parse_date_param("start_date", Some("")).unwrap(), None);
        assert_eq!(parse_date_param("start_date", Some("2024-01-01")).unwrap(), jan_first);
        assert_eq!(
            parse_date_param("start_date", Some("2024-01-01T00:00:00")).unwrap(),
            jan_first
        );
        assert!(matches!(
            parse_date_param("end_date", Some("01/02/2024")),
            Err(DashboardError::InvalidDate { param: "end_date", .. })
        ));
    }

    #[tokio::test]
    async fn test_health_reports_row_count() {
        let server = server_with(sample_table());
        let response = server.get("/health").await;
        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.rows, 2);
    }

    #[tokio::test]
    async fn test_index_serves_dashboard_page() {
        let server = server_with(ForecastTable::empty());
        let response = server.get("/").await;
        response.assert_status(StatusCode::OK);
        assert!(response.text().contains("date-range-changed"));
    }

    #[tokio::test]
    async fn test_view_for_single_day() {
        let server = server_with(sample_table());
        let response = server
            .get("/api/view")
            .add_query_param("start_date", "2024-01-01")
            .add_query_param("end_date", "2024-01-01")
            .await;
        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["state"], "ready");
        assert_eq!(body["temp_max"], "22.5 °C");
        assert_eq!(body["temp_min"], "20.0 °C");
        assert_eq!(body["line_chart"]["series"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_view_without_dates_is_unavailable() {
        let server = server_with(sample_table());
        let response = server.get("/api/view").await;
        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["state"], "unavailable");
        assert_eq!(body["temp_min"], "N/A");
    }

    #[tokio::test]
    async fn test_view_rejects_invalid_date() {
        let server = server_with(sample_table());
        let response = server
            .get("/api/view")
            .add_query_param("start_date", "yesterday")
            .add_query_param("end_date", "2024-01-01")
            .expect_failure()
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert!(body["error"].as_str().unwrap().contains("start_date"));
    }

    #[tokio::test]
    async fn test_date_range_follows_table() {
        let server = server_with(sample_table());
        let body: DateSpanResponse = server.get("/api/range").await.json();
        assert_eq!(body.start_date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(body.end_date, NaiveDate::from_ymd_opt(2024, 1, 1));

        let empty = server_with(ForecastTable::empty());
        let body: DateSpanResponse = empty.get("/api/range").await.json();
        assert_eq!(body.start_date, None);
        assert_eq!(body.end_date, None);
    }
}
