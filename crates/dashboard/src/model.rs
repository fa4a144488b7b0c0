use analytics::{MetricDelta, YearlyMetrics};
use charts::ChartSpec;
use core_types::{Granularity, Record};
use serde::{Deserialize, Serialize};

/// The output of one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub title: String,
    pub current_year: i32,
    pub previous_year: i32,
    /// Selected bucketing of the "Sales Custom" panel.
    pub granularity: Granularity,
    /// The full table, every year and every region.
    pub records: Vec<Record>,
    pub yearly: YearlyMetrics,
    /// Sales, Order, Customer and Profit tiles, in that order.
    pub metrics: Vec<MetricDelta>,
    pub panels: Vec<ChartPanel>,
}

impl Dashboard {
    pub fn panel(&self, id: &str) -> Option<&ChartPanel> {
        self.panels.iter().find(|p| p.id == id)
    }
}

/// One chart with its place on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPanel {
    /// Stable identifier, also used as the DOM id suffix.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub spec: ChartSpec,
}

impl ChartPanel {
    pub fn new(id: impl Into<String>, heading: Option<&str>, spec: ChartSpec) -> Self {
        Self {
            id: id.into(),
            heading: heading.map(String::from),
            spec,
        }
    }
}
