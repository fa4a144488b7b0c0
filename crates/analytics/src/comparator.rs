use crate::error::AnalyticsError;
use crate::report::{MetricDelta, YearSummary, YearlyMetrics};
use core_types::MetricField;
use rust_decimal::Decimal;

/// The headline metrics in display order, with their tile labels.
///
/// The "Profit" tile shows the profit ratio, not the profit sum.
pub const SUMMARY_METRICS: [(&str, MetricField); 4] = [
    ("Sales", MetricField::Sales),
    ("Order", MetricField::Orders),
    ("Customer", MetricField::Customers),
    ("Profit", MetricField::ProfitRatio),
];

/// Compares the current year against the previous one.
#[derive(Debug, Default)]
pub struct MetricComparator {}

impl MetricComparator {
    pub fn new() -> Self {
        Self::default()
    }

    /// `100 * (current - previous) / previous` for `field`.
    ///
    /// Fails with `DivisionByZero` when the previous value is zero and with
    /// `UndefinedMetric` when either value is undefined.
    pub fn delta_pct(
        &self,
        current: &YearSummary,
        previous: &YearSummary,
        field: MetricField,
    ) -> Result<Decimal, AnalyticsError> {
        let curr = current.value(field).ok_or(AnalyticsError::UndefinedMetric {
            field,
            year: current.year,
        })?;
        let prev = previous.value(field).ok_or(AnalyticsError::UndefinedMetric {
            field,
            year: previous.year,
        })?;

        if prev.is_zero() {
            return Err(AnalyticsError::DivisionByZero(field));
        }

        curr.checked_sub(prev)
            .and_then(|diff| diff.checked_mul(Decimal::ONE_HUNDRED))
            .and_then(|scaled| scaled.checked_div(prev))
            .ok_or_else(|| AnalyticsError::Calculation(format!("overflow computing delta of '{field}'")))
    }

    /// Builds the tile for `field`.
    ///
    /// A missing current or previous year is an error. An undefined delta is
    /// not: the tile carries `delta_pct: None` and the condition is logged.
    pub fn compare(
        &self,
        yearly: &YearlyMetrics,
        label: &str,
        field: MetricField,
    ) -> Result<MetricDelta, AnalyticsError> {
        let current = yearly.get(yearly.current_year()?)?;
        let previous = yearly.get(yearly.previous_year()?)?;

        let delta_pct = match self.delta_pct(current, previous, field) {
            Ok(pct) => Some(pct),
            Err(e) if e.is_undefined_value() => {
                tracing::warn!(metric = %field, error = %e, "Delta reported as undefined.");
                None
            }
            Err(e) => return Err(e),
        };

        Ok(MetricDelta {
            label: label.to_string(),
            field,
            value: current.value(field),
            delta_pct,
        })
    }

    /// The four headline tiles: Sales, Order, Customer and Profit (ratio).
    pub fn summary_cards(&self, yearly: &YearlyMetrics) -> Result<Vec<MetricDelta>, AnalyticsError> {
        SUMMARY_METRICS
            .iter()
            .map(|(label, field)| self.compare(yearly, label, *field))
            .collect()
    }
}
