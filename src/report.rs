use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL};
use analytics::two_places;
use dashboard::Dashboard;

/// Renders the dashboard as plain-text tables: data preview, metric tiles,
/// yearly summaries and the chart panels that the page would draw.
pub fn render_report(dashboard: &Dashboard, preview_rows: usize) -> String {
    let mut out = format!(
        "{} ({} vs {})\n\n",
        dashboard.title, dashboard.current_year, dashboard.previous_year
    );

    let mut data = Table::new();
    data.load_preset(UTF8_FULL).set_header(vec![
        "order_id",
        "order_date",
        "ship_date",
        "customer_id",
        "region",
        "category",
        "sales",
        "profit",
    ]);
    for r in dashboard.records.iter().take(preview_rows) {
        data.add_row(vec![
            Cell::new(&r.order_id),
            Cell::new(r.order_date),
            Cell::new(r.ship_date),
            Cell::new(&r.customer_id),
            Cell::new(&r.region),
            Cell::new(&r.category),
            Cell::new(r.sales).set_alignment(CellAlignment::Right),
            Cell::new(r.profit).set_alignment(CellAlignment::Right),
        ]);
    }
    out.push_str(&data.to_string());
    out.push_str(&format!(
        "\n{} of {} rows\n\n",
        preview_rows.min(dashboard.records.len()),
        dashboard.records.len()
    ));

    let mut metrics = Table::new();
    metrics
        .load_preset(UTF8_FULL)
        .set_header(vec!["Metric", "Value", "vs previous year"]);
    for m in &dashboard.metrics {
        metrics.add_row(vec![
            Cell::new(&m.label),
            Cell::new(m.value_display()).set_alignment(CellAlignment::Right),
            Cell::new(m.delta_display()).set_alignment(CellAlignment::Right),
        ]);
    }
    out.push_str(&metrics.to_string());
    out.push_str("\n\n");

    let mut yearly = Table::new();
    yearly.load_preset(UTF8_FULL).set_header(vec![
        "Year",
        "Sales",
        "Profit",
        "Orders",
        "Customers",
        "Profit ratio",
    ]);
    for s in dashboard.yearly.summaries() {
        yearly.add_row(vec![
            Cell::new(s.year),
            Cell::new(two_places(s.sales)),
            Cell::new(two_places(s.profit)),
            Cell::new(s.order_count),
            Cell::new(s.customer_count),
            Cell::new(
                s.profit_ratio
                    .map(|r| format!("{}%", two_places(r)))
                    .unwrap_or_else(|| "N/A".to_string()),
            ),
        ]);
    }
    out.push_str(&yearly.to_string());
    out.push_str("\n\n");

    let mut panels = Table::new();
    panels
        .load_preset(UTF8_FULL)
        .set_header(vec!["Panel", "Mark", "Rows", "Time unit"]);
    for p in &dashboard.panels {
        panels.add_row(vec![
            Cell::new(p.heading.as_deref().unwrap_or(p.id.as_str())),
            Cell::new(format!("{:?}", p.spec.mark.kind).to_lowercase()),
            Cell::new(p.spec.data.values.len()),
            Cell::new(p.spec.encoding.x.time_unit.as_deref().unwrap_or("-")),
        ]);
    }
    out.push_str(&panels.to_string());
    out.push('\n');

    out
}
