use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use clap::Parser;
use menulens_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};

/// Server with every API key explicitly blank, so no route reaches the network.
fn test_server(extra_args: &[&str]) -> TestServer {
    let mut argv = vec![
        "menulens-api",
        "--gemini-api-key=",
        "--yelp-api-key=",
        "--google-places-api-key=",
    ];
    argv.extend_from_slice(extra_args);

    let args = Arc::new(Args::parse_from(argv));
    let app_state = state(args).unwrap();
    TestServer::new(router(app_state).unwrap()).unwrap()
}

fn jpeg_part() -> Part {
    Part::bytes(vec![0xFF, 0xD8, 0xFF, 0xE0])
        .file_name("menu.jpg")
        .mime_type("image/jpeg")
}

#[tokio::test]
async fn health_check_reports_ok() {
    let server = test_server(&[]);

    let response = server.get("/").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "status": "ok", "message": "Menu AI Backend is running" })
    );
}

#[tokio::test]
async fn routes_are_prefixed_with_root_path() {
    let server = test_server(&["--root-path", "/menulens"]);

    server.get("/menulens/").await.assert_status_ok();
    server
        .post("/menulens/api/v1/restaurant/search")
        .json(&json!({ "name": "", "location": "Paris" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn parse_menu_requires_image() {
    let server = test_server(&["--gemini-api-key", "configured"]);

    let response = server
        .post("/api/v1/menu/parse")
        .multipart(MultipartForm::new().add_text("target_language", "English"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "E_BAD_REQUEST");
    assert_eq!(body["status"], 400);
    assert_eq!(body["message"], "Missing image field");
}

#[tokio::test]
async fn parse_menu_rejects_oversized_image() {
    let server = test_server(&["--gemini-api-key", "configured"]);
    let image = Part::bytes(vec![0u8; 10 * 1024 * 1024 + 1])
        .file_name("menu.jpg")
        .mime_type("image/jpeg");

    let response = server
        .post("/api/v1/menu/parse")
        .multipart(MultipartForm::new().add_part("image", image))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(
        response.json::<Value>()["message"]
            .as_str()
            .unwrap()
            .starts_with("Image too large")
    );
}

#[tokio::test]
async fn parse_menu_without_gemini_key_is_server_error() {
    let server = test_server(&[]);

    let response = server
        .post("/api/v1/menu/parse")
        .multipart(
            MultipartForm::new()
                .add_part("image", jpeg_part())
                .add_text("target_language", "  "),
        )
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>()["message"],
        "GEMINI_API_KEY environment variable not set"
    );
}

#[tokio::test]
async fn parse_menu_checks_gemini_key_before_upload() {
    let server = test_server(&[]);

    let response = server
        .post("/api/v1/menu/parse")
        .multipart(MultipartForm::new().add_text("target_language", "English"))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>()["message"],
        "GEMINI_API_KEY environment variable not set"
    );
}

#[tokio::test]
async fn restaurant_search_validates_payload() {
    let server = test_server(&[]);

    let response = server
        .post("/api/v1/restaurant/search")
        .json(&json!({ "name": "Tartine Bakery", "location": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(
        response.json::<Value>()["message"]
            .as_str()
            .unwrap()
            .contains("location is required")
    );
}

#[tokio::test]
async fn restaurant_search_without_yelp_key_is_server_error() {
    let server = test_server(&[]);

    let response = server
        .post("/api/v1/restaurant/search")
        .json(&json!({ "name": "Tartine Bakery", "location": "San Francisco" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>()["message"],
        "YELP_API_KEY environment variable not set"
    );
}

#[tokio::test]
async fn restaurant_lookup_checks_gemini_key_first() {
    let server = test_server(&["--yelp-api-key", "configured"]);

    let response = server.get("/api/v1/restaurant/tartine-bakery-san-francisco").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>()["message"],
        "GEMINI_API_KEY environment variable not set"
    );
}

#[tokio::test]
async fn places_search_requires_query() {
    let server = test_server(&[]);

    server
        .post("/api/v1/places/search")
        .json(&json!({ "location": "Seattle" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn places_search_without_key_is_server_error() {
    let server = test_server(&[]);

    let response = server
        .post("/api/v1/places/search")
        .json(&json!({ "query": "best sushi", "location": "Seattle" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>()["message"],
        "GOOGLE_PLACES_API_KEY environment variable not set"
    );
}

#[tokio::test]
async fn place_lookup_without_gemini_key_is_server_error() {
    let server = test_server(&[]);

    server
        .get("/api/v1/places/ChIJ0000")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let server = test_server(&[]);

    let response = server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    let paths = &response.json::<Value>()["paths"];
    assert!(paths.get("/api/v1/menu/parse").is_some());
    assert!(paths.get("/api/v1/restaurant/search").is_some());
    assert!(paths.get("/api/v1/places/{place_id}").is_some());
}

#[tokio::test]
async fn metrics_are_exposed() {
    let server = test_server(&[]);

    server.get("/metrics").await.assert_status_ok();
}
