use core_types::{Record, Region};
use std::collections::BTreeSet;

/// The loaded sales rows. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesTable {
    records: Vec<Record>,
}

impl SalesTable {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct order years, ascending.
    pub fn years(&self) -> BTreeSet<i32> {
        self.records.iter().map(Record::order_year).collect()
    }

    /// The most recent order year, if the table has any rows.
    pub fn latest_year(&self) -> Option<i32> {
        self.records.iter().map(Record::order_year).max()
    }

    /// Rows ordered in `year`, in file order.
    pub fn for_year(&self, year: i32) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|r| r.order_year() == year)
            .collect()
    }

    /// Rows ordered in `year` whose region is exactly `region`.
    pub fn for_year_and_region(&self, year: i32, region: Region) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|r| r.order_year() == year && r.is_in_region(region))
            .collect()
    }
}

impl From<Vec<Record>> for SalesTable {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn record(date: (i32, u32, u32), region: &str) -> Record {
        let order_date = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
        Record {
            order_date,
            ship_date: order_date,
            sales: dec!(10),
            profit: dec!(1),
            order_id: format!("O-{}", date.0),
            customer_id: "C-1".to_string(),
            region: region.to_string(),
            category: "Technology".to_string(),
        }
    }

    #[test]
    fn years_are_distinct_and_sorted() {
        let table = SalesTable::new(vec![
            record((2024, 1, 1), "West"),
            record((2022, 5, 1), "East"),
            record((2024, 7, 1), "South"),
        ]);
        assert_eq!(table.years().into_iter().collect::<Vec<_>>(), [2022, 2024]);
        assert_eq!(table.latest_year(), Some(2024));
        assert_eq!(SalesTable::default().latest_year(), None);
    }

    #[test]
    fn region_filter_excludes_unknown_regions() {
        let table = SalesTable::new(vec![
            record((2024, 1, 1), "West"),
            record((2024, 1, 2), "Northwest"),
            record((2024, 1, 3), "west"),
            record((2023, 1, 3), "West"),
        ]);
        assert_eq!(table.for_year(2024).len(), 3);
        assert_eq!(table.for_year_and_region(2024, Region::West).len(), 1);
        assert_eq!(table.len(), 4);
    }
}
