//! Cross-cutting HTTP behaviour: trace headers, CORS, error bodies, seed files.

use std::sync::Arc;

use actix_web::http::header::{
    ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_METHOD, ORIGIN,
};
use actix_web::http::{Method, StatusCode};
use actix_web::test::{TestRequest, call_service, init_service};
use autofill_backend::domain::TRACE_ID_HEADER;
use autofill_backend::outbound::seed::{SeedData, SeedError};
use autofill_backend::test_support::{MemoryBackend, send, write_temp_file};
use mockable::DefaultClock;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case::success(TestRequest::get().uri("/credential"))]
#[case::client_error(TestRequest::get().uri("/auth/me"))]
#[case::unknown_route(TestRequest::get().uri("/nowhere"))]
#[actix_web::test]
async fn every_response_carries_a_trace_id(#[case] request: TestRequest) {
    let app = init_service(MemoryBackend::seeded().app()).await;

    let response = call_service(&app, request.to_request()).await;

    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace-id header")
        .to_str()
        .expect("ascii header");
    assert!(header.parse::<autofill_backend::TraceId>().is_ok());
}

const EXTENSION_ORIGIN: &str = "http://localhost:5173";

#[rstest]
#[case::preflight(
    TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/credential")
        .insert_header((ACCESS_CONTROL_REQUEST_METHOD, "POST"))
)]
#[case::simple(TestRequest::get().uri("/credential"))]
#[case::failing(TestRequest::get().uri("/auth/me"))]
#[actix_web::test]
async fn any_origin_is_allowed(#[case] request: TestRequest) {
    let app = init_service(MemoryBackend::seeded().app()).await;

    let response = call_service(
        &app,
        request.insert_header((ORIGIN, EXTENSION_ORIGIN)).to_request(),
    )
    .await;

    let allowed = response
        .headers()
        .get(ACCESS_CONTROL_ALLOW_ORIGIN)
        .expect("allow-origin header")
        .to_str()
        .expect("ascii header");
    assert_eq!(allowed, EXTENSION_ORIGIN);
    assert!(response.headers().contains_key(TRACE_ID_HEADER));
}

#[actix_web::test]
async fn preflight_is_answered_without_reaching_handlers() {
    let app = init_service(MemoryBackend::seeded().app()).await;

    let response = call_service(
        &app,
        TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/credential/fdcd")
            .insert_header((ORIGIN, EXTENSION_ORIGIN))
            .insert_header((ACCESS_CONTROL_REQUEST_METHOD, "DELETE"))
            .to_request(),
    )
    .await;
    let (_, list) = send(&app, TestRequest::get().uri("/credential")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(list[0]["id"], "fdcd");
}

#[actix_web::test]
async fn error_body_trace_id_matches_header() {
    let app = init_service(MemoryBackend::seeded().app()).await;

    let response = call_service(&app, TestRequest::get().uri("/auth/me").to_request()).await;
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace-id header")
        .to_str()
        .expect("ascii header")
        .to_owned();
    let body: serde_json::Value = actix_web::test::read_body_json(response).await;

    assert_eq!(body["traceId"], header.as_str());
    assert_eq!(body["message"], "No token provided");
}

#[actix_web::test]
async fn custom_seed_file_replaces_builtin_data() {
    let file = write_temp_file(
        &json!({
            "users": [{"id": "u1", "email": "ada@example.com", "password": "pw"}],
            "credentials": []
        })
        .to_string(),
    );
    let seed = SeedData::load(file.path()).expect("seed loads");
    let app = init_service(MemoryBackend::new(seed, Arc::new(DefaultClock)).app()).await;

    let (legacy, _) = send(
        &app,
        TestRequest::post()
            .uri("/user")
            .set_json(json!({"email": "thong1", "password": "111"})),
    )
    .await;
    let (status, session) = send(
        &app,
        TestRequest::post()
            .uri("/user")
            .set_json(json!({"email": "ada@example.com", "password": "pw"})),
    )
    .await;
    let (_, credentials) = send(&app, TestRequest::get().uri("/credential")).await;

    assert_eq!(legacy, StatusCode::UNAUTHORIZED);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["user"]["id"], "u1");
    assert_eq!(credentials, json!([]));
}

#[test]
fn malformed_seed_file_is_rejected() {
    let file = write_temp_file("{\"users\": [");

    let error = SeedData::load(file.path()).expect_err("malformed seed");

    assert!(matches!(error, SeedError::Parse { .. }));
}
