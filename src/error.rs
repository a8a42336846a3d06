use crate::forecast::error::ForecastError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error("Failed to bind listener to '{0}'")]
    Bind(String, #[source] std::io::Error),

    #[error("Server stopped with an error")]
    Serve(#[source] std::io::Error),

    #[error("Invalid {param} '{value}', expected a date like YYYY-MM-DD")]
    InvalidDate {
        param: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("No handler registered for event '{0}'")]
    UnknownEvent(String),
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = match self {
            DashboardError::InvalidDate { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
