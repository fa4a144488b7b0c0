//! # Superstore Dataset Crate
//!
//! Turns the delimited sales file into an in-memory `SalesTable`. This is the
//! only crate that touches the filesystem for data.
//!
//! ## Public API
//!
//! - `load_records`: opens a file and parses it into a `SalesTable`.
//! - `read_records`: the same parsing from any `io::Read`.
//! - `LoadOptions`: delimiter and accepted date formats.
//! - `SalesTable`: the loaded rows plus the year/region filters the dashboard needs.
//! - `DatasetError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod loader;
pub mod table;

// Re-export the key components to create a clean, public-facing API.
pub use error::DatasetError;
pub use loader::{LoadOptions, load_records, read_records};
pub use table::SalesTable;
