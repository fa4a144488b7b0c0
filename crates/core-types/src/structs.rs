use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::Region;

/// One row of the sales dataset.
///
/// `region` and `category` are kept verbatim. Rows whose region is not one of
/// the known `Region`s still belong to the table; they are only left out of the
/// per-region views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub order_date: NaiveDate,
    pub ship_date: NaiveDate,
    pub sales: Decimal,
    pub profit: Decimal,
    pub order_id: String,
    pub customer_id: String,
    pub region: String,
    pub category: String,
}

impl Record {
    /// The calendar year of the order date.
    pub fn order_year(&self) -> i32 {
        self.order_date.year()
    }

    /// The known region of this record, if its region field matches one exactly.
    pub fn known_region(&self) -> Option<Region> {
        self.region.parse().ok()
    }

    pub fn is_in_region(&self, region: Region) -> bool {
        self.region == region.as_str()
    }
}
