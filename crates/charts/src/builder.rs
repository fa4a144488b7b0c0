use crate::error::ChartError;
use crate::spec::{Channel, ChartRow, ChartSpec, Encoding, InlineData, Mark, VEGA_LITE_SCHEMA};
use core_types::Record;

/// Assembles a `ChartSpec` from a slice of records and its encodings.
///
/// `x` and `y` are required; `color` and `size` are optional.
#[derive(Debug, Clone)]
pub struct ChartBuilder {
    mark: Mark,
    rows: Vec<ChartRow>,
    title: Option<String>,
    x: Option<Channel>,
    y: Option<Channel>,
    color: Option<Channel>,
    size: Option<Channel>,
}

impl ChartBuilder {
    pub fn new<'a>(mark: Mark, records: impl IntoIterator<Item = &'a Record>) -> Self {
        Self {
            mark,
            rows: records.into_iter().map(ChartRow::from).collect(),
            title: None,
            x: None,
            y: None,
            color: None,
            size: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn x(mut self, channel: Channel) -> Self {
        self.x = Some(channel);
        self
    }

    pub fn y(mut self, channel: Channel) -> Self {
        self.y = Some(channel);
        self
    }

    pub fn color(mut self, channel: Channel) -> Self {
        self.color = Some(channel);
        self
    }

    pub fn size(mut self, channel: Channel) -> Self {
        self.size = Some(channel);
        self
    }

    pub fn build(self) -> Result<ChartSpec, ChartError> {
        let x = self.x.ok_or(ChartError::MissingChannel("x"))?;
        let y = self.y.ok_or(ChartError::MissingChannel("y"))?;

        Ok(ChartSpec {
            schema: VEGA_LITE_SCHEMA.to_string(),
            title: self.title,
            width: "container".to_string(),
            data: InlineData { values: self.rows },
            mark: self.mark,
            encoding: Encoding {
                x,
                y,
                color: self.color,
                size: self.size,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{Aggregate, Column, FieldType};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn record() -> Record {
        Record {
            order_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            ship_date: NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
            sales: dec!(12.5),
            profit: dec!(-3.25),
            order_id: "O-1".to_string(),
            customer_id: "C-1".to_string(),
            region: "East".to_string(),
            category: "Furniture".to_string(),
        }
    }

    #[test]
    fn serializes_to_vega_lite() {
        let records = [record()];
        let spec = ChartBuilder::new(Mark::bar(), &records)
            .x(Channel::new(Column::Category, FieldType::Nominal)
                .title("Category")
                .label_angle(0))
            .y(Channel::new(Column::Sales, FieldType::Quantitative)
                .title("Sales")
                .aggregate(Aggregate::Sum))
            .build()
            .unwrap();

        assert_eq!(
            serde_json::to_value(&spec).unwrap(),
            json!({
                "$schema": VEGA_LITE_SCHEMA,
                "width": "container",
                "data": { "values": [{
                    "order_date": "2024-01-02T00:00:00",
                    "ship_date": "2024-01-04T00:00:00",
                    "sales": 12.5,
                    "profit": -3.25,
                    "order_id": "O-1",
                    "customer_id": "C-1",
                    "region": "East",
                    "category": "Furniture"
                }]},
                "mark": { "type": "bar" },
                "encoding": {
                    "x": { "field": "category", "type": "nominal", "title": "Category", "axis": { "labelAngle": 0 } },
                    "y": { "field": "sales", "type": "quantitative", "title": "Sales", "aggregate": "sum" }
                }
            })
        );
    }

    #[test]
    fn x_and_y_are_required() {
        let records: [Record; 0] = [];
        let err = ChartBuilder::new(Mark::line(), &records)
            .y(Channel::new(Column::Sales, FieldType::Quantitative))
            .build()
            .unwrap_err();
        assert_eq!(err, ChartError::MissingChannel("x"));

        let err = ChartBuilder::new(Mark::line(), &records)
            .x(Channel::new(Column::OrderDate, FieldType::Temporal))
            .build()
            .unwrap_err();
        assert_eq!(err, ChartError::MissingChannel("y"));
    }

    #[test]
    fn aggregate_forces_quantitative() {
        let channel = Channel::new(Column::CustomerId, FieldType::Nominal).aggregate(Aggregate::Distinct);
        assert_eq!(channel.field_type, FieldType::Quantitative);
    }
}
