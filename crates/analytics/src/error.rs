use core_types::MetricField;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("The dataset has no records, so there is no current year")]
    EmptyDataset,

    #[error("No records found for order year {0}")]
    MissingYear(i32),

    #[error("Calculation error: Division by zero encountered in metric '{0}'")]
    DivisionByZero(MetricField),

    #[error("Metric '{field}' is undefined for year {year}")]
    UndefinedMetric { field: MetricField, year: i32 },

    #[error("Calculation error: {0}")]
    Calculation(String),
}

impl AnalyticsError {
    /// Conditions that make a single delta undefined without invalidating the rest of the page.
    pub fn is_undefined_value(&self) -> bool {
        matches!(
            self,
            AnalyticsError::DivisionByZero(_) | AnalyticsError::UndefinedMetric { .. }
        )
    }
}
