use analytics::AnalyticsError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dashboard::DashboardError;
use dataset::DatasetError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Dashboard error: {0}")]
    Dashboard(#[from] DashboardError),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Render task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Dashboard(DashboardError::Dataset(DatasetError::Resource { .. })) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Dashboard(DashboardError::Dataset(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Dashboard(DashboardError::Analytics(AnalyticsError::Calculation(_))) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Dashboard(DashboardError::Analytics(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Dashboard(_) | AppError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match &self {
            AppError::Dashboard(DashboardError::Dataset(DatasetError::Resource { .. })) => {
                tracing::error!(error = %self, "Dataset unavailable.");
                "The sales dataset could not be opened".to_string()
            }
            AppError::Dashboard(err) if status == StatusCode::UNPROCESSABLE_ENTITY => {
                tracing::warn!(error = %err, "Dashboard cannot be rendered from this dataset.");
                err.to_string()
            }
            AppError::Dashboard(err) => {
                tracing::error!(error = ?err, "Dashboard error.");
                "An internal error occurred while rendering the dashboard".to_string()
            }
            AppError::Task(err) => {
                tracing::error!(error = %err, "Render task failed.");
                "An internal error occurred while rendering the dashboard".to_string()
            }
            AppError::BadRequest(message) => message.clone(),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
