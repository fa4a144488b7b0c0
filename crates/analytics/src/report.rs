use core_types::MetricField;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::AnalyticsError;

/// Aggregates for a single order year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSummary {
    pub year: i32,
    pub sales: Decimal,
    pub profit: Decimal,
    /// Number of distinct order ids.
    pub order_count: usize,
    /// Number of distinct customer ids.
    pub customer_count: usize,
    /// `100 * profit / sales`. `None` when sales sum to zero.
    pub profit_ratio: Option<Decimal>,
}

impl YearSummary {
    /// The value of `field` for this year, `None` when it is undefined.
    pub fn value(&self, field: MetricField) -> Option<Decimal> {
        match field {
            MetricField::Sales => Some(self.sales),
            MetricField::Profit => Some(self.profit),
            MetricField::Orders => Some(Decimal::from(self.order_count)),
            MetricField::Customers => Some(Decimal::from(self.customer_count)),
            MetricField::ProfitRatio => self.profit_ratio,
        }
    }
}

/// One `YearSummary` per distinct order year, ascending by year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<YearSummary>", from = "Vec<YearSummary>")]
pub struct YearlyMetrics {
    summaries: Vec<YearSummary>,
}

impl From<Vec<YearSummary>> for YearlyMetrics {
    fn from(summaries: Vec<YearSummary>) -> Self {
        Self::new(summaries)
    }
}

impl From<YearlyMetrics> for Vec<YearSummary> {
    fn from(metrics: YearlyMetrics) -> Self {
        metrics.summaries
    }
}

impl YearlyMetrics {
    /// Builds the table, sorting by year.
    pub fn new(mut summaries: Vec<YearSummary>) -> Self {
        summaries.sort_by_key(|s| s.year);
        Self { summaries }
    }

    pub fn summaries(&self) -> &[YearSummary] {
        &self.summaries
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    /// The latest order year present.
    pub fn current_year(&self) -> Result<i32, AnalyticsError> {
        self.summaries
            .last()
            .map(|s| s.year)
            .ok_or(AnalyticsError::EmptyDataset)
    }

    /// The year before the current one. It may have no summary.
    pub fn previous_year(&self) -> Result<i32, AnalyticsError> {
        Ok(self.current_year()? - 1)
    }

    pub fn get(&self, year: i32) -> Result<&YearSummary, AnalyticsError> {
        self.summaries
            .binary_search_by_key(&year, |s| s.year)
            .map(|idx| &self.summaries[idx])
            .map_err(|_| AnalyticsError::MissingYear(year))
    }
}

/// A headline number with its change against the previous year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDelta {
    pub label: String,
    pub field: MetricField,
    /// Current-year value; `None` when undefined.
    pub value: Option<Decimal>,
    /// Percentage change against the previous year; `None` when it cannot be computed.
    pub delta_pct: Option<Decimal>,
}

impl MetricDelta {
    /// The delta as shown on a metric tile, e.g. `-25.00%`, or `N/A`.
    pub fn delta_display(&self) -> String {
        match self.delta_pct {
            Some(pct) => format!("{}%", two_places(pct)),
            None => "N/A".to_string(),
        }
    }

    /// The value as shown on a metric tile. Ratios and amounts use two decimals.
    pub fn value_display(&self) -> String {
        match (self.value, self.field) {
            (None, _) => "N/A".to_string(),
            (Some(v), MetricField::Orders | MetricField::Customers) => v.trunc().to_string(),
            (Some(v), _) => two_places(v),
        }
    }
}

/// Rounds half away from zero to two decimals and always prints both.
///
/// `{:.2}` on a `Decimal` truncates, so rounding happens first.
pub fn two_places(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}
