//! # Superstore Core Types
//!
//! Layer 0 of the workspace: plain data shared by every other crate. Nothing
//! here performs I/O or aggregation.
//!
//! - `Record`: one row of the sales dataset.
//! - `Region`: the four regions the dashboard breaks sales down by.
//! - `Granularity`: time bucketing for the configurable sales chart.
//! - `MetricField`: selects a value out of a yearly summary.

pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{Granularity, MetricField, Region};
pub use error::CoreError;
pub use structs::Record;
