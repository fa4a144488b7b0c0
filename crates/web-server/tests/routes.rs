use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use axum::Router;
use configuration::Settings;
use serde_json::Value;
use std::io::Write;
use tempfile::NamedTempFile;
use tower::ServiceExt;

fn dataset(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "order_id,order_date,ship_date,customer_id,region,category,sales,profit").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file
}

fn app(file: &NamedTempFile) -> Router {
    let mut settings = Settings::default();
    settings.dataset.path = file.path().to_path_buf();
    web_server::router(settings)
}

fn sample() -> NamedTempFile {
    dataset(&[
        "CA-1,2023-02-01,2023-02-03,C-1,West,Technology,1000,200",
        "CA-2,2024-02-01,2024-02-03,C-1,West,Technology,900,100",
        "CA-3,2024-03-01,2024-03-03,C-2,East,Furniture,600,125",
    ])
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

/// Decimals travel as strings.
fn pct(value: &Value) -> f64 {
    value.as_str().unwrap().parse().unwrap()
}

#[tokio::test]
async fn health() {
    let file = sample();
    let (status, body) = get(app(&file), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn metrics_endpoint_reports_deltas() {
    let file = sample();
    let (status, json) = get_json(app(&file), "/api/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["current_year"], 2024);
    assert_eq!(json["previous_year"], 2023);
    assert_eq!(json["yearly"].as_array().unwrap().len(), 2);
    assert_eq!(json["metrics"][0]["label"], "Sales");
    assert_eq!(pct(&json["metrics"][0]["delta_pct"]), 50.0);
    assert_eq!(json["metrics"][3]["label"], "Profit");
    assert_eq!(pct(&json["metrics"][3]["delta_pct"]), -25.0);
}

#[tokio::test]
async fn charts_follow_the_granularity_query() {
    let file = sample();
    let (status, json) = get_json(app(&file), "/api/charts?granularity=Bulanan").await;
    assert_eq!(status, StatusCode::OK);
    let panels = json.as_array().unwrap();
    assert_eq!(panels.len(), 7);
    assert_eq!(panels[1]["id"], "sales-custom");
    assert_eq!(panels[1]["spec"]["encoding"]["x"]["timeUnit"], "yearmonth");

    let (_, json) = get_json(app(&file), "/api/charts").await;
    assert_eq!(json[1]["spec"]["encoding"]["x"]["timeUnit"], "yearmonthdate");
}

#[tokio::test]
async fn unknown_granularity_is_a_bad_request() {
    let file = sample();
    let (status, json) = get_json(app(&file), "/api/dashboard?granularity=weekly").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("weekly"));
}

#[tokio::test]
async fn missing_previous_year_is_unprocessable() {
    let file = dataset(&["CA-1,2024-02-01,2024-02-03,C-1,West,Technology,10,1"]);
    let (status, json) = get_json(app(&file), "/api/dashboard").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["error"].as_str().unwrap().contains("2023"));
}

#[tokio::test]
async fn missing_dataset_is_a_server_error() {
    let file = sample();
    let mut settings = Settings::default();
    settings.dataset.path = file.path().with_extension("gone");
    let (status, _) = get_json(web_server::router(settings), "/api/metrics").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn page_renders_html() {
    let file = sample();
    let (status, body) = get(app(&file), "/?granularity=harian").await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("<title>Superstore Dashboard</title>"));
    assert!(html.contains("<option value=\"Harian\" selected>Harian</option>"));
}
