//! # Superstore Dashboard
//!
//! One render pass of the sales dashboard: load the table, aggregate it by
//! year, build the metric tiles and the chart panels. The result is a
//! `Dashboard` value that renderers (the HTML page, the terminal report, the
//! JSON API) only have to lay out.
//!
//! Nothing is cached between passes; a refresh runs `render_dashboard` again.

pub mod builder;
pub mod context;
pub mod error;
pub mod model;
pub mod page;

pub use builder::DashboardBuilder;
pub use context::RenderContext;
pub use error::DashboardError;
pub use model::{ChartPanel, Dashboard};
pub use page::{PageOptions, render_html};

use configuration::{DatasetConfig, Settings};
use core_types::Granularity;
use dataset::LoadOptions;

/// Translates the dataset section of the settings into loader options.
pub fn load_options(config: &DatasetConfig) -> LoadOptions {
    LoadOptions {
        // Settings validation guarantees an ASCII delimiter.
        delimiter: config.delimiter as u8,
        date_formats: config.date_formats.clone(),
    }
}

/// Runs the full pipeline from the dataset file to a `Dashboard`.
pub fn render_dashboard(
    settings: &Settings,
    granularity: Granularity,
) -> Result<Dashboard, DashboardError> {
    let table = dataset::load_records(&settings.dataset.path, &load_options(&settings.dataset))?;
    let context = RenderContext::new(table)?;
    DashboardBuilder::new(&settings.dashboard.title).render(&context, granularity)
}
