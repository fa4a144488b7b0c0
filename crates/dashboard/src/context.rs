use analytics::{AnalyticsError, YearAggregator, YearlyMetrics};
use dataset::SalesTable;

/// Everything one render pass reads: the loaded table, its yearly summaries
/// and the pair of years being compared.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub table: SalesTable,
    pub yearly: YearlyMetrics,
    pub current_year: i32,
    pub previous_year: i32,
}

impl RenderContext {
    /// Aggregates `table` and fixes the current year to its latest order year.
    ///
    /// An empty table has no current year and is rejected. Whether the
    /// previous year has rows is checked when the metric tiles are built.
    pub fn new(table: SalesTable) -> Result<Self, AnalyticsError> {
        let yearly = YearAggregator::new().aggregate(table.records())?;
        let current_year = yearly.current_year()?;
        let previous_year = yearly.previous_year()?;

        tracing::info!(current_year, previous_year, rows = table.len(), "Render context ready.");

        Ok(Self {
            table,
            yearly,
            current_year,
            previous_year,
        })
    }
}
