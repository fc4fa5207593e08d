use std::net::SocketAddr;

use axum::{Json, Router, http::StatusCode, routing::get};
use backend::api::doctors::fetch_doctors;
use common::{doctor::ConsultationType, error::FetchError};
use serde_json::json;

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn loads_the_whole_list() {
    let app = Router::new().route(
        "/doctors.json",
        get(|| async {
            Json(json!([
                {
                    "id": "1",
                    "name": "Dr. Ayesha Khan",
                    "specialities": [{"name": "Dentist"}],
                    "fees": "₹ 500",
                    "experience": "13 Years of experience",
                    "video_consult": true,
                    "in_clinic": false
                },
                {
                    "id": 2,
                    "name": "Dr. Bob",
                    "specialties": ["ENT"],
                    "fee": 300,
                    "experience": 20,
                    "consultationType": "In Clinic"
                }
            ]))
        }),
    );
    let addr = serve(app).await;
    let client = reqwest::Client::new();
    let doctors = fetch_doctors(&client, &format!("http://{addr}/doctors.json")).await.unwrap();
    assert_eq!(doctors.len(), 2);
    assert_eq!(doctors[0].fee, 500);
    assert!(doctors[0].offers(ConsultationType::VideoConsult));
    assert_eq!(doctors[1].id, "2");
    assert!(doctors[1].offers(ConsultationType::InClinic));
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let app = Router::new().route(
        "/doctors.json",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "try later") }),
    );
    let addr = serve(app).await;
    let client = reqwest::Client::new();
    let err = fetch_doctors(&client, &format!("http://{addr}/doctors.json")).await.unwrap_err();
    assert_eq!(err, FetchError::Status { status: 503, body: "try later".to_string() });
}

#[tokio::test]
async fn missing_route_is_an_error() {
    let addr = serve(Router::new()).await;
    let client = reqwest::Client::new();
    let err = fetch_doctors(&client, &format!("http://{addr}/doctors.json")).await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 404, .. }));
}

#[tokio::test]
async fn non_array_body_is_malformed() {
    let app = Router::new().route(
        "/doctors.json",
        get(|| async { Json(json!({"doctors": []})) }),
    );
    let addr = serve(app).await;
    let client = reqwest::Client::new();
    let err = fetch_doctors(&client, &format!("http://{addr}/doctors.json")).await.unwrap_err();
    assert!(matches!(err, FetchError::Malformed(_)));
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    // bind and drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = reqwest::Client::new();
    let err = fetch_doctors(&client, &format!("http://{addr}/doctors.json")).await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)));
}
