//! # Superstore Analytics Engine
//!
//! Year-over-year metrics for the sales dashboard.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of files,
//!   charts or pages. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** `YearAggregator` turns a slice of `Record`s into
//!   `YearlyMetrics`; `MetricComparator` turns `YearlyMetrics` into `MetricDelta`s.
//!   Undefined results are `None`, never NaN or infinity.
//!
//! ## Public API
//!
//! - `YearAggregator`: groups records by order year.
//! - `MetricComparator`: percentage change between the current and previous year.
//! - `YearSummary`, `YearlyMetrics`, `MetricDelta`: the reports.
//! - `AnalyticsError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod comparator;
pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use comparator::MetricComparator;
pub use engine::YearAggregator;
pub use error::AnalyticsError;
pub use report::{MetricDelta, YearSummary, YearlyMetrics, two_places};
