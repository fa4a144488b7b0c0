//! Lays a `Dashboard` out as a single HTML page.
//!
//! The page hands the chart specifications to Vega-Embed in the browser;
//! all chart aggregation happens there.

use crate::builder::{REGION_SCATTER_PANEL, SALES_CUSTOM_PANEL, SALES_PANEL, region_panel_id};
use crate::error::DashboardError;
use crate::model::{ChartPanel, Dashboard};
use analytics::MetricDelta;
use core_types::{Granularity, Record, Region};
use std::collections::BTreeMap;
use std::fmt::{self, Write};

const VEGA_SCRIPTS: [&str; 3] = [
    "https://cdn.jsdelivr.net/npm/vega@5",
    "https://cdn.jsdelivr.net/npm/vega-lite@5",
    "https://cdn.jsdelivr.net/npm/vega-embed@6",
];

const STYLE: &str = "body{font-family:sans-serif;margin:2rem;}\
.row{display:grid;grid-template-columns:repeat(4,1fr);gap:1rem;}\
.tile{border:1px solid #ddd;border-radius:6px;padding:1rem;}\
.tile .value{font-size:1.8rem;}\
.up{color:#09ab3b;}.down{color:#ff2b2b;}.na{color:#888;}\
.table{max-height:24rem;overflow:auto;}\
table{border-collapse:collapse;font-size:.85rem;}\
td,th{border-bottom:1px solid #eee;padding:.2rem .6rem;text-align:left;}\
.chart{width:100%;}";

/// Presentation knobs that are not part of the dashboard data itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
    /// Maximum number of rows drawn in the data table.
    pub table_row_limit: usize,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self { table_row_limit: 500 }
    }
}

/// Renders the whole page.
pub fn render_html(dashboard: &Dashboard, options: PageOptions) -> Result<String, DashboardError> {
    let mut html = String::new();
    let title = escape(&dashboard.title);

    write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n"
    )?;
    for src in VEGA_SCRIPTS {
        writeln!(html, "<script src=\"{src}\"></script>")?;
    }
    write!(html, "</head>\n<body>\n<h1>{title}</h1>\n")?;

    write_table(&mut html, &dashboard.records, options.table_row_limit)?;
    write_metrics(&mut html, &dashboard.metrics)?;

    write_panel(&mut html, dashboard.panel(SALES_PANEL))?;
    write_granularity_control(&mut html, dashboard.granularity)?;
    write_panel(&mut html, dashboard.panel(SALES_CUSTOM_PANEL))?;

    html.push_str("<div class=\"row\">\n");
    for region in Region::ALL {
        write_panel(&mut html, dashboard.panel(&region_panel_id(region)))?;
    }
    html.push_str("</div>\n");
    write_panel(&mut html, dashboard.panel(REGION_SCATTER_PANEL))?;

    write_embed_script(&mut html, &dashboard.panels)?;
    html.push_str("</body>\n</html>\n");

    Ok(html)
}

fn write_table(html: &mut String, records: &[Record], limit: usize) -> fmt::Result {
    html.push_str(
        "<div class=\"table\"><table>\n<thead><tr><th>order_id</th><th>order_date</th>\
         <th>ship_date</th><th>customer_id</th><th>region</th><th>category</th>\
         <th>sales</th><th>profit</th></tr></thead>\n<tbody>\n",
    );
    for r in records.iter().take(limit) {
        writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&r.order_id),
            r.order_date,
            r.ship_date,
            escape(&r.customer_id),
            escape(&r.region),
            escape(&r.category),
            r.sales,
            r.profit,
        )?;
    }
    html.push_str("</tbody></table></div>\n");
    if records.len() > limit {
        writeln!(html, "<p class=\"na\">Showing {limit} of {} rows.</p>", records.len())?;
    }
    Ok(())
}

fn write_metrics(html: &mut String, metrics: &[MetricDelta]) -> fmt::Result {
    html.push_str("<div class=\"row\">\n");
    for metric in metrics {
        let class = match metric.delta_pct {
            None => "na",
            Some(pct) if pct.is_sign_negative() => "down",
            Some(_) => "up",
        };
        writeln!(
            html,
            "<div class=\"tile\"><div>{}</div><div class=\"value\">{}</div><div class=\"{class}\">{}</div></div>",
            escape(&metric.label),
            metric.value_display(),
            metric.delta_display(),
        )?;
    }
    html.push_str("</div>\n");
    Ok(())
}

fn write_granularity_control(html: &mut String, selected: Granularity) -> fmt::Result {
    html.push_str(
        "<form method=\"get\"><label>Pilih frekuensi \
         <select name=\"granularity\" onchange=\"this.form.submit()\">\n",
    );
    for option in Granularity::ALL {
        let marker = if option == selected { " selected" } else { "" };
        writeln!(html, "<option value=\"{0}\"{marker}>{0}</option>", option.label())?;
    }
    html.push_str("</select></label><noscript><button>OK</button></noscript></form>\n");
    Ok(())
}

fn write_panel(html: &mut String, panel: Option<&ChartPanel>) -> fmt::Result {
    let Some(panel) = panel else { return Ok(()) };
    html.push_str("<section>\n");
    if let Some(heading) = &panel.heading {
        writeln!(html, "<h2>{}</h2>", escape(heading))?;
    }
    writeln!(html, "<div id=\"chart-{}\" class=\"chart\"></div>", escape(&panel.id))?;
    html.push_str("</section>\n");
    Ok(())
}

fn write_embed_script(html: &mut String, panels: &[ChartPanel]) -> Result<(), DashboardError> {
    let specs: BTreeMap<&str, _> = panels.iter().map(|p| (p.id.as_str(), &p.spec)).collect();
    // "</" would close the script element early.
    let json = serde_json::to_string(&specs)?.replace("</", "<\\/");
    write!(
        html,
        "<script>\nconst specs = {json};\n\
         for (const [id, spec] of Object.entries(specs)) {{\n  \
         vegaEmbed('#chart-' + id, spec, {{actions: false}});\n}}\n</script>\n"
    )?;
    Ok(())
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
