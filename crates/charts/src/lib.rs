//! # Superstore Charts
//!
//! Declarative chart specifications (Vega-Lite v5) for the dashboard. This
//! crate never aggregates: a spec states which field to sum or distinct-count
//! and the renderer does the work.
//!
//! - `ChartBuilder` / `Channel`: assemble a `ChartSpec` from rows and encodings.
//! - `catalog`: the fixed set of charts the dashboard shows.

pub mod builder;
pub mod catalog;
pub mod error;
pub mod spec;

pub use builder::ChartBuilder;
pub use catalog::{daily_sales_line, region_sales_bars, region_scatter, sales_line};
pub use error::ChartError;
pub use spec::{Aggregate, Axis, Channel, ChartRow, ChartSpec, Column, Encoding, FieldType, Mark, MarkKind};
