use chrono::NaiveDate;
use core_types::Record;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// A complete Vega-Lite chart with its data inlined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    #[serde(rename = "$schema")]
    pub schema: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Always `"container"`: the chart stretches to its panel.
    pub width: String,
    pub data: InlineData,
    pub mark: Mark,
    pub encoding: Encoding,
}

impl ChartSpec {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineData {
    pub values: Vec<ChartRow>,
}

/// A record as handed to the renderer: dates as local midnight timestamps,
/// money as numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    #[serde(with = "local_midnight")]
    pub order_date: NaiveDate,
    #[serde(with = "local_midnight")]
    pub ship_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub sales: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub profit: Decimal,
    pub order_id: String,
    pub customer_id: String,
    pub region: String,
    pub category: String,
}

impl From<&Record> for ChartRow {
    fn from(record: &Record) -> Self {
        Self {
            order_date: record.order_date,
            ship_date: record.ship_date,
            sales: record.sales,
            profit: record.profit,
            order_id: record.order_id.clone(),
            customer_id: record.customer_id.clone(),
            region: record.region.clone(),
            category: record.category.clone(),
        }
    }
}

/// Dates travel as `YYYY-MM-DDT00:00:00`. The browser reads a bare
/// `YYYY-MM-DD` as UTC midnight while `yearmonth`/`yearmonthdate` bucket in
/// local time, which would move first-of-month rows into the previous month.
mod local_midnight {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer, de};

    const FORMAT: &str = "%Y-%m-%dT00:00:00";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let value = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&value, "%Y-%m-%dT%H:%M:%S")
            .map(|dt| dt.date())
            .or_else(|_| NaiveDate::parse_from_str(&value, "%Y-%m-%d"))
            .map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkKind {
    Line,
    Bar,
    Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub kind: MarkKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filled: Option<bool>,
}

impl Mark {
    pub fn line() -> Self {
        Self { kind: MarkKind::Line, filled: None }
    }

    pub fn bar() -> Self {
        Self { kind: MarkKind::Bar, filled: None }
    }

    pub fn point(filled: bool) -> Self {
        Self { kind: MarkKind::Point, filled: Some(filled) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encoding {
    pub x: Channel,
    pub y: Channel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Channel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Channel>,
}

/// The dataset columns a chart can encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    OrderDate,
    Sales,
    Profit,
    OrderId,
    CustomerId,
    Region,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Temporal,
    Nominal,
    Quantitative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregate {
    Sum,
    Distinct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    #[serde(rename = "labelAngle")]
    pub label_angle: i32,
}

/// One encoding channel (`x`, `y`, `color` or `size`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub field: Column,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<Aggregate>,
    #[serde(rename = "timeUnit", default, skip_serializing_if = "Option::is_none")]
    pub time_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis: Option<Axis>,
}

impl Channel {
    pub fn new(field: Column, field_type: FieldType) -> Self {
        Self {
            field,
            field_type,
            title: None,
            aggregate: None,
            time_unit: None,
            axis: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Aggregated channels are always quantitative.
    pub fn aggregate(mut self, aggregate: Aggregate) -> Self {
        self.aggregate = Some(aggregate);
        self.field_type = FieldType::Quantitative;
        self
    }

    pub fn time_unit(mut self, time_unit: impl Into<String>) -> Self {
        self.time_unit = Some(time_unit.into());
        self
    }

    pub fn label_angle(mut self, angle: i32) -> Self {
        self.axis = Some(Axis { label_angle: angle });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(order_date: NaiveDate) -> ChartRow {
        ChartRow {
            order_date,
            ship_date: order_date,
            sales: dec!(1),
            profit: dec!(0),
            order_id: "O-1".to_string(),
            customer_id: "C-1".to_string(),
            region: "West".to_string(),
            category: "Technology".to_string(),
        }
    }

    #[test]
    fn dates_are_sent_as_local_midnight() {
        let first_of_month = row(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let value = serde_json::to_value(&first_of_month).unwrap();
        assert_eq!(value["order_date"], "2024-01-01T00:00:00");
        assert_eq!(value["ship_date"], "2024-01-01T00:00:00");

        let back: ChartRow = serde_json::from_value(value).unwrap();
        assert_eq!(back, first_of_month);
    }

    #[test]
    fn plain_dates_are_still_read() {
        let mut value = serde_json::to_value(row(NaiveDate::from_ymd_opt(2024, 5, 20).unwrap())).unwrap();
        value["order_date"] = serde_json::json!("2024-05-20");
        let back: ChartRow = serde_json::from_value(value).unwrap();
        assert_eq!(back.order_date, NaiveDate::from_ymd_opt(2024, 5, 20).unwrap());
    }
}
