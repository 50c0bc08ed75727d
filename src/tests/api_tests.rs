use crate::api;
use crate::config::AppConfig;
use crate::sizing::{CapacityTable, SearchEngine};
use crate::AppState;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let config = AppConfig::default();
    let engine = SearchEngine::new(Arc::new(CapacityTable::builtin()), config.max_cabinet_ru);
    api::router(Arc::new(AppState::new(config, engine)))
}

async fn send(req: Request<Body>) -> (StatusCode, Value) {
    let res = app().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_calculate(body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/calculate")
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    send(req).await
}

#[tokio::test]
async fn test_calculate_with_defaults() {
    let (status, json) = post_calculate("{}").await;
    assert_eq!(status, StatusCode::OK);

    let optimal = json["optimal"].as_object().unwrap();
    for key in
        ["maxCapa", "maxNfsRead", "maxNfsWrite", "maxS3Read", "maxS3Write", "maxSpeedToSpace"]
    {
        assert!(optimal.contains_key(key), "missing objective {key}");
        assert!(optimal[key].get("error").is_none(), "{key} reported no configuration");
    }
    assert_eq!(optimal["maxCapa"]["nc"], 9);
    assert_eq!(optimal["maxCapa"]["nd"], 17);
    assert_eq!(optimal["maxCapa"]["metrics"]["capacity_tb"], 20324.5);

    let points = json["feasiblePoints"].as_array().unwrap();
    assert!(!points.is_empty());
    assert!(points[0].get("total_nfs_gbps").is_some(), "points carry flattened metrics");
}

#[tokio::test]
async fn test_calculate_accepts_numeric_strings() {
    let (from_strings, a) =
        post_calculate(r#"{"cabinetRU": "42", "cabinetPower": "28.50", "percentRU": "80", "percentPower": "70"}"#)
            .await;
    let (from_numbers, b) =
        post_calculate(r#"{"cabinetRU": 42, "cabinetPower": 28.5, "percentRU": 80, "percentPower": 70}"#)
            .await;
    assert_eq!(from_strings, StatusCode::OK);
    assert_eq!(from_numbers, StatusCode::OK);
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_calculate_zero_percent_marks_every_objective() {
    let (status, json) = post_calculate(r#"{"percentRU": 0}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["feasiblePoints"].as_array().map(Vec::len), Some(0));
    for record in json["optimal"].as_object().unwrap().values() {
        assert_eq!(record["nc"], 0);
        assert!(record["error"].is_string(), "sentinel without error marker: {record}");
    }
}

#[tokio::test]
async fn test_calculate_rejects_non_numeric_input() {
    for body in [r#"{"percentRU": "abc"}"#, r#"{"percentRU": true}"#, r#"{"percentRU": [80]}"#] {
        let (status, json) = post_calculate(body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body}");
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().contains("percentRU"), "body {body}: {json}");
    }
}

#[tokio::test]
async fn test_calculate_rejects_malformed_body() {
    let (status, json) = post_calculate("{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_status_reports_capacity_source() {
    let req = Request::builder().uri("/api/status").body(Body::empty()).unwrap();
    let (status, json) = send(req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["data"]["capacity"]["source"]["kind"], "builtin");
    assert_eq!(json["data"]["capacity"]["entries"], 7);
}

#[tokio::test]
async fn test_index_serves_page() {
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let res = app().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("/calculate"));
}
