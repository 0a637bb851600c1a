#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use tower::ServiceExt;

use inventario_api::config::ServerConfig;
use inventario_api::router::build_app_router;
use inventario_api::state::AppState;
use inventario_api::store::AssetStore;
use inventario_core::asset::{Asset, AssetStatus};
use inventario_core::clock::FixedClock;
use inventario_core::rates::DepreciationRateTable;
use inventario_reports::ReportConfig;

/// Date every test app treats as "today".
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:4200".to_string()],
        request_timeout_secs: 30,
        json_logs: false,
        reports: ReportConfig::default(),
    }
}

/// State with the given inventory and a clock pinned to [`today`].
pub fn test_state(assets: Vec<Asset>) -> AppState {
    let config = test_config();
    AppState {
        store: Arc::new(AssetStore::with_assets(assets)),
        rates: Arc::new(DepreciationRateTable::default()),
        clock: Arc::new(FixedClock::at_date(today())),
        reports: Arc::new(config.reports.clone()),
        config: Arc::new(config),
    }
}

/// Build the full application router, with the production middleware stack,
/// over `state`. Clone the state to send several requests to one inventory.
pub fn build_test_app(state: AppState) -> Router {
    build_app_router(state, &test_config())
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn asset(id: i64, name: &str, asset_type: &str, price: f64, quantity: i64) -> Asset {
    Asset {
        id,
        name: name.into(),
        asset_type: asset_type.into(),
        price,
        quantity,
        status: AssetStatus::Assigned,
        responsible: "Ana Zambrano".into(),
        location: "Facultad de Ingeniería".into(),
        date: NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(),
    }
}

/// Two laptops bought a year before [`today`], and an idle server.
pub fn sample_inventory() -> Vec<Asset> {
    let mut server = asset(2, "Servidor Rack", "Equipos de cómputo y software", 1500.0, 1);
    server.status = AssetStatus::Available;
    server.location = "Centro de Cómputo".into();
    server.date = NaiveDate::from_ymd_opt(2021, 3, 10).unwrap();

    vec![
        asset(1, "Laptop Dell", "Equipos de cómputo y software", 1000.0, 2),
        server,
    ]
}

pub fn new_asset_json(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "type": "Equipos de Laboratorio",
        "price": 250.0,
        "quantity": 3,
        "status": "Disponible",
        "responsible": "María Vera",
        "location": "Laboratorio de Química",
        "date": "2022-01-10",
    })
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, json).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, json).await
}

async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    json: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&json).unwrap()))
        .unwrap();
    send(app, request).await
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
