//! The charts shown on the dashboard. Every chart covers a single order year.

use crate::builder::ChartBuilder;
use crate::error::ChartError;
use crate::spec::{Aggregate, Channel, ChartSpec, Column, FieldType, Mark};
use core_types::{Granularity, Region};
use dataset::SalesTable;

fn order_date_axis() -> Channel {
    Channel::new(Column::OrderDate, FieldType::Temporal).title("Order date")
}

fn summed_sales_axis() -> Channel {
    Channel::new(Column::Sales, FieldType::Quantitative)
        .title("Sales")
        .aggregate(Aggregate::Sum)
}

/// Total sales per order date.
pub fn daily_sales_line(table: &SalesTable, year: i32) -> Result<ChartSpec, ChartError> {
    ChartBuilder::new(Mark::line(), table.for_year(year))
        .x(order_date_axis())
        .y(summed_sales_axis())
        .build()
}

/// Total sales bucketed by day or by month.
pub fn sales_line(
    table: &SalesTable,
    year: i32,
    granularity: Granularity,
) -> Result<ChartSpec, ChartError> {
    ChartBuilder::new(Mark::line(), table.for_year(year))
        .x(order_date_axis().time_unit(granularity.time_unit()))
        .y(summed_sales_axis())
        .build()
}

/// Total sales by category, one bar chart per region in `Region::ALL` order.
///
/// Only rows whose region matches exactly are plotted.
pub fn region_sales_bars(
    table: &SalesTable,
    year: i32,
) -> Result<Vec<(Region, ChartSpec)>, ChartError> {
    Region::ALL
        .into_iter()
        .map(|region| {
            let spec = ChartBuilder::new(Mark::bar(), table.for_year_and_region(year, region))
                .x(Channel::new(Column::Category, FieldType::Nominal)
                    .title("Category")
                    .label_angle(0))
                .y(summed_sales_axis())
                .build()?;
            Ok((region, spec))
        })
        .collect()
}

/// Distinct customers against distinct orders, coloured by region and sized by sales.
pub fn region_scatter(table: &SalesTable, year: i32) -> Result<ChartSpec, ChartError> {
    ChartBuilder::new(Mark::point(true), table.for_year(year))
        .x(Channel::new(Column::CustomerId, FieldType::Nominal).aggregate(Aggregate::Distinct))
        .y(Channel::new(Column::OrderId, FieldType::Nominal).aggregate(Aggregate::Distinct))
        .color(Channel::new(Column::Region, FieldType::Nominal))
        .size(Channel::new(Column::Sales, FieldType::Quantitative).aggregate(Aggregate::Sum))
        .build()
}
