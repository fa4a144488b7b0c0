use crate::{AppState, error::AppError};
use analytics::{MetricComparator, MetricDelta, YearlyMetrics};
use axum::{
    Json,
    extract::{Query, State},
    response::Html,
};
use core_types::Granularity;
use dashboard::{ChartPanel, Dashboard, DashboardError, PageOptions, RenderContext};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct GranularityQuery {
    pub granularity: Option<String>,
}

impl GranularityQuery {
    /// The requested granularity, or the configured default when none is given.
    fn resolve(&self, default: Granularity) -> Result<Granularity, AppError> {
        match self.granularity.as_deref() {
            None | Some("") => Ok(default),
            Some(value) => value
                .parse()
                .map_err(|_| AppError::BadRequest(format!("unknown granularity {value:?}; expected Harian or Bulanan"))),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MetricsResponse {
    pub current_year: i32,
    pub previous_year: i32,
    pub yearly: YearlyMetrics,
    pub metrics: Vec<MetricDelta>,
}

/// Runs a fresh render pass on a blocking thread.
async fn render(state: &AppState, granularity: Granularity) -> Result<Dashboard, AppError> {
    let settings = state.settings.clone();
    let dashboard =
        tokio::task::spawn_blocking(move || dashboard::render_dashboard(&settings, granularity))
            .await??;
    Ok(dashboard)
}

/// # GET /
/// The dashboard page. `?granularity=Harian|Bulanan` picks the custom sales bucketing.
pub async fn get_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GranularityQuery>,
) -> Result<Html<String>, AppError> {
    let granularity = query.resolve(state.settings.dashboard.default_granularity)?;
    let dashboard = render(&state, granularity).await?;
    let options = PageOptions {
        table_row_limit: state.settings.dashboard.table_row_limit,
    };
    let html = dashboard::render_html(&dashboard, options)?;
    Ok(Html(html))
}

/// # GET /api/dashboard
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GranularityQuery>,
) -> Result<Json<Dashboard>, AppError> {
    let granularity = query.resolve(state.settings.dashboard.default_granularity)?;
    Ok(Json(render(&state, granularity).await?))
}

/// # GET /api/metrics
/// Yearly summaries plus the four headline tiles. No charts are built.
pub async fn get_metrics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MetricsResponse>, AppError> {
    let settings = state.settings.clone();
    let response = tokio::task::spawn_blocking(move || -> Result<MetricsResponse, DashboardError> {
        let options = dashboard::load_options(&settings.dataset);
        let table = dataset::load_records(&settings.dataset.path, &options)?;
        let ctx = RenderContext::new(table)?;
        let metrics = MetricComparator::new().summary_cards(&ctx.yearly)?;
        Ok(MetricsResponse {
            current_year: ctx.current_year,
            previous_year: ctx.previous_year,
            yearly: ctx.yearly,
            metrics,
        })
    })
    .await??;
    Ok(Json(response))
}

/// # GET /api/charts
pub async fn get_charts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GranularityQuery>,
) -> Result<Json<Vec<ChartPanel>>, AppError> {
    let granularity = query.resolve(state.settings.dashboard.default_granularity)?;
    Ok(Json(render(&state, granularity).await?.panels))
}
