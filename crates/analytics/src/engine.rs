use crate::error::AnalyticsError;
use crate::report::{YearSummary, YearlyMetrics};
use core_types::Record;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashSet};

/// A stateless calculator that groups records by order year.
#[derive(Debug, Default)]
pub struct YearAggregator {}

/// Running totals for one year while the records are scanned.
#[derive(Default)]
struct YearAccumulator<'a> {
    sales: Decimal,
    profit: Decimal,
    orders: HashSet<&'a str>,
    customers: HashSet<&'a str>,
}

impl YearAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes one `YearSummary` per distinct order year.
    ///
    /// Order and customer counts are distinct counts: an order id repeated on
    /// several lines of the same year counts once. A yearly sum that leaves
    /// the `Decimal` range is a `Calculation` error.
    pub fn aggregate(&self, records: &[Record]) -> Result<YearlyMetrics, AnalyticsError> {
        let mut by_year: BTreeMap<i32, YearAccumulator<'_>> = BTreeMap::new();

        for record in records {
            let year = record.order_year();
            let acc = by_year.entry(year).or_default();
            acc.sales = acc
                .sales
                .checked_add(record.sales)
                .ok_or_else(|| overflow("sales", year))?;
            acc.profit = acc
                .profit
                .checked_add(record.profit)
                .ok_or_else(|| overflow("profit", year))?;
            acc.orders.insert(record.order_id.as_str());
            acc.customers.insert(record.customer_id.as_str());
        }

        let summaries = by_year
            .into_iter()
            .map(|(year, acc)| {
                let profit_ratio = profit_ratio(acc.profit, acc.sales);
                if profit_ratio.is_none() {
                    if acc.sales.is_zero() {
                        tracing::warn!(year, "Sales sum to zero; profit ratio is undefined.");
                    } else {
                        tracing::warn!(year, "Profit ratio overflowed; treating it as undefined.");
                    }
                }
                YearSummary {
                    year,
                    sales: acc.sales,
                    profit: acc.profit,
                    order_count: acc.orders.len(),
                    customer_count: acc.customers.len(),
                    profit_ratio,
                }
            })
            .collect::<Vec<_>>();

        tracing::debug!(years = summaries.len(), records = records.len(), "Aggregated records by year.");

        Ok(YearlyMetrics::new(summaries))
    }
}

fn overflow(column: &str, year: i32) -> AnalyticsError {
    AnalyticsError::Calculation(format!("{column} total for {year} overflows"))
}

/// `100 * profit / sales`, or `None` when sales is zero or the result
/// does not fit in a `Decimal`.
pub fn profit_ratio(profit: Decimal, sales: Decimal) -> Option<Decimal> {
    if sales.is_zero() {
        return None;
    }
    Decimal::ONE_HUNDRED
        .checked_mul(profit)?
        .checked_div(sales)
}
