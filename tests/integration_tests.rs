use std::sync::{Arc, Mutex};

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use computer::app::disk::model::StoredData;
use computer::core::{error::ErrorResponse, response::ApiResponse};
use computer::{ComputerModule, PowerSupply};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

#[derive(Default)]
struct RecordingPower {
    calls: Mutex<Vec<u32>>,
}

impl PowerSupply for RecordingPower {
    fn supply_power(&self, amount: u32) {
        self.calls.lock().unwrap().push(amount);
    }
}

fn app_with_recorder() -> (Router, Arc<RecordingPower>) {
    let power = Arc::new(RecordingPower::default());
    let module = ComputerModule::with_power(power.clone());
    (module.router(), power)
}

fn store_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/disk")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json<T: DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_store_data_round_trip() {
    let (app, power) = app_with_recorder();

    let response = app
        .oneshot(store_request(r#"{"data":"file.txt"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: ApiResponse<StoredData> = read_json(response).await;
    assert!(body.success);
    assert_eq!(body.data.data, "file.txt");
    assert_eq!(*power.calls.lock().unwrap(), vec![10]);
}

#[tokio::test]
async fn test_store_empty_data() {
    let (app, power) = app_with_recorder();

    let response = app.oneshot(store_request(r#"{"data":""}"#)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: ApiResponse<StoredData> = read_json(response).await;
    assert_eq!(body.data.data, "");
    assert_eq!(*power.calls.lock().unwrap(), vec![10]);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let (app, power) = app_with_recorder();

    let response = app.oneshot(store_request("{not json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: ErrorResponse = read_json(response).await;
    assert_eq!(body.error, "BAD_REQUEST");
    assert_eq!(body.code, 400);
    assert!(power.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_field_is_bad_request() {
    let (app, power) = app_with_recorder();

    let response = app.oneshot(store_request(r#"{"other":1}"#)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(power.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (app, _) = app_with_recorder();

    let response = app
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: ErrorResponse = read_json(response).await;
    assert_eq!(body.error, "NOT_FOUND");
}

#[tokio::test]
async fn test_health_check() {
    let app = ComputerModule::new().router();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = read_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[test]
fn test_default_module_wiring() {
    let module = ComputerModule::default();
    assert_eq!(module.disk_service().store_data("file.txt"), "file.txt");
}
