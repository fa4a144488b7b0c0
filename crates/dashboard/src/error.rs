use analytics::AnalyticsError;
use charts::ChartError;
use dataset::DatasetError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Analytics error: {0}")]
    Analytics(#[from] AnalyticsError),

    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    #[error("Failed to write the dashboard page: {0}")]
    Page(#[from] std::fmt::Error),

    #[error("Failed to serialize the dashboard: {0}")]
    Serialization(#[from] serde_json::Error),
}
