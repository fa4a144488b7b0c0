use crate::context::RenderContext;
use crate::error::DashboardError;
use crate::model::{ChartPanel, Dashboard};
use analytics::MetricComparator;
use core_types::Granularity;

pub const SALES_PANEL: &str = "sales";
pub const SALES_CUSTOM_PANEL: &str = "sales-custom";
pub const REGION_SCATTER_PANEL: &str = "region-scatter";

/// Panel id of the bar chart for `region`, e.g. `region-west`.
pub fn region_panel_id(region: core_types::Region) -> String {
    format!("region-{}", region.as_str().to_ascii_lowercase())
}

/// Composes metric tiles and chart panels from a `RenderContext`.
#[derive(Debug, Clone)]
pub struct DashboardBuilder {
    title: String,
}

impl DashboardBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }

    /// Builds the dashboard for the context's current year.
    ///
    /// `granularity` only affects the "Sales Custom" panel.
    pub fn render(
        &self,
        ctx: &RenderContext,
        granularity: Granularity,
    ) -> Result<Dashboard, DashboardError> {
        let metrics = MetricComparator::new().summary_cards(&ctx.yearly)?;
        let year = ctx.current_year;

        let mut panels = vec![
            ChartPanel::new(
                SALES_PANEL,
                Some("Sales"),
                charts::daily_sales_line(&ctx.table, year)?,
            ),
            ChartPanel::new(
                SALES_CUSTOM_PANEL,
                Some("Sales Custom"),
                charts::sales_line(&ctx.table, year, granularity)?,
            ),
        ];
        for (region, spec) in charts::region_sales_bars(&ctx.table, year)? {
            panels.push(ChartPanel::new(region_panel_id(region), Some(region.as_str()), spec));
        }
        panels.push(ChartPanel::new(
            REGION_SCATTER_PANEL,
            None,
            charts::region_scatter(&ctx.table, year)?,
        ));

        tracing::info!(
            year,
            granularity = %granularity,
            panels = panels.len(),
            "Dashboard rendered."
        );

        Ok(Dashboard {
            title: self.title.clone(),
            current_year: ctx.current_year,
            previous_year: ctx.previous_year,
            granularity,
            records: ctx.table.records().to_vec(),
            yearly: ctx.yearly.clone(),
            metrics,
            panels,
        })
    }
}
