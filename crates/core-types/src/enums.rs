use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// The sales regions shown as separate panels, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    West,
    East,
    South,
    Central,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::West, Region::East, Region::South, Region::Central];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::West => "West",
            Region::East => "East",
            Region::South => "South",
            Region::Central => "Central",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a region name. Matching is exact and case-sensitive.
impl FromStr for Region {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| CoreError::InvalidInput("region".to_string(), s.to_string()))
    }
}

/// Time bucketing of the configurable sales chart.
///
/// The user-facing labels are the Indonesian "Harian" (daily) and
/// "Bulanan" (monthly); English names are accepted as aliases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Granularity {
    #[default]
    #[serde(rename = "Harian", alias = "harian", alias = "daily", alias = "Daily")]
    #[cfg_attr(feature = "clap", value(name = "harian", alias = "daily"))]
    Daily,
    #[serde(rename = "Bulanan", alias = "bulanan", alias = "monthly", alias = "Monthly")]
    #[cfg_attr(feature = "clap", value(name = "bulanan", alias = "monthly"))]
    Monthly,
}

impl Granularity {
    pub const ALL: [Granularity; 2] = [Granularity::Daily, Granularity::Monthly];

    /// The label shown in the selection control.
    pub fn label(&self) -> &'static str {
        match self {
            Granularity::Daily => "Harian",
            Granularity::Monthly => "Bulanan",
        }
    }

    /// The Vega-Lite `timeUnit` used to bucket the date axis.
    pub fn time_unit(&self) -> &'static str {
        match self {
            Granularity::Daily => "yearmonthdate",
            Granularity::Monthly => "yearmonth",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Granularity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "harian" | "daily" => Ok(Granularity::Daily),
            "bulanan" | "monthly" => Ok(Granularity::Monthly),
            _ => Err(CoreError::InvalidInput("granularity".to_string(), s.to_string())),
        }
    }
}

/// Selects one value of a yearly summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricField {
    Sales,
    Profit,
    Orders,
    Customers,
    ProfitRatio,
}

impl MetricField {
    /// The dataset column (or derived column) the metric is computed from.
    pub fn column(&self) -> &'static str {
        match self {
            MetricField::Sales => "sales",
            MetricField::Profit => "profit",
            MetricField::Orders => "order_id",
            MetricField::Customers => "customer_id",
            MetricField::ProfitRatio => "profit_ratio",
        }
    }
}

impl fmt::Display for MetricField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_keep_display_order() {
        let names: Vec<_> = Region::ALL.iter().map(Region::as_str).collect();
        assert_eq!(names, ["West", "East", "South", "Central"]);
    }

    #[test]
    fn granularity_parses_labels_and_aliases() {
        assert_eq!("Harian".parse::<Granularity>(), Ok(Granularity::Daily));
        assert_eq!("bulanan".parse::<Granularity>(), Ok(Granularity::Monthly));
        assert_eq!("monthly".parse::<Granularity>(), Ok(Granularity::Monthly));
        assert!("weekly".parse::<Granularity>().is_err());
    }

    #[test]
    fn granularity_maps_to_time_units() {
        assert_eq!(Granularity::Daily.time_unit(), "yearmonthdate");
        assert_eq!(Granularity::Monthly.time_unit(), "yearmonth");
        assert_eq!(Granularity::default(), Granularity::Daily);
    }
}
