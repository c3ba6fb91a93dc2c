mod common;

use axum::http::StatusCode;
use common::{bearer, offline_app, send};
use serde_json::json;

#[tokio::test]
async fn health_is_public() {
    let app = offline_app();
    let (status, body) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = offline_app();
    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/applications"].is_object());
}

#[tokio::test]
async fn protected_routes_require_a_bearer_token() {
    let app = offline_app();

    let (status, body) = send(&app, "GET", "/api/applications", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "missing_authorization");

    let (status, body) = send(&app, "GET", "/api/interviews", Some("Basic abc"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "unsupported_scheme");

    let (status, body) = send(&app, "GET", "/api/auth/me", Some("Bearer not.a.jwt"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "invalid_token");
}

#[tokio::test]
async fn malformed_range_bounds_are_client_errors() {
    let app = offline_app();
    let auth = bearer();

    let (status, body) = send(
        &app,
        "GET",
        "/api/interviews?start=last-week&end=2024-03-01",
        Some(&auth),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid start time format");

    let (status, body) = send(
        &app,
        "GET",
        "/api/interviews?start=2024-03-01&end=03/02/2024",
        Some(&auth),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid end time format");
}

#[tokio::test]
async fn unknown_status_values_are_rejected_at_the_boundary() {
    let app = offline_app();
    let auth = bearer();

    let (status, body) = send(
        &app,
        "GET",
        "/api/applications?status=OFFER,HIRED",
        Some(&auth),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("HIRED"));

    let (status, body) = send(
        &app,
        "POST",
        "/api/applications",
        Some(&auth),
        Some(json!({ "company_name": "Acme", "current_status": "GHOSTED" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "bad_request");
}

#[tokio::test]
async fn malformed_ids_and_payloads_are_client_errors() {
    let app = offline_app();
    let auth = bearer();

    let (status, body) = send(&app, "GET", "/api/applications/abc", Some(&auth), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid id");

    let (status, _) = send(
        &app,
        "POST",
        "/api/applications",
        Some(&auth),
        Some(json!({ "company_name": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        "POST",
        "/api/interviews",
        Some(&auth),
        Some(json!({
            "application_id": 1,
            "round_name": "HR",
            "start_time": "2024-03-01 10:00",
            "end_time": "2024-03-01T11:00:00Z"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("start_time"));
}

#[tokio::test]
async fn registration_validates_before_touching_storage() {
    let app = offline_app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "username": "ab", "password": "secret1" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "bad_request");
}

#[tokio::test]
async fn body_rejections_use_the_json_error_shape() {
    let app = offline_app();
    let auth = bearer();

    let (status, body) = send(
        &app,
        "POST",
        "/api/applications",
        Some(&auth),
        Some(json!({ "job_title": "Dev" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "bad_request");
    assert!(body["error"].as_str().unwrap().contains("company_name"));

    let (status, body) = send(
        &app,
        "POST",
        "/api/interviews",
        Some(&auth),
        Some(json!({ "application_id": "one", "round_name": "HR" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "bad_request");

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": "alice" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("password"));
}

#[tokio::test]
async fn overlong_update_fields_are_client_errors() {
    let app = offline_app();
    let auth = bearer();

    let (status, body) = send(
        &app,
        "PUT",
        "/api/applications/1",
        Some(&auth),
        Some(json!({ "job_title": "x".repeat(101) })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "job_title must be at most 100 characters");

    let (status, body) = send(
        &app,
        "PUT",
        "/api/applications/1",
        Some(&auth),
        Some(json!({ "salary": "9".repeat(101) })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "salary must be at most 100 characters");

    let (status, body) = send(
        &app,
        "PATCH",
        "/api/interviews/1",
        Some(&auth),
        Some(json!({ "meeting_link": "l".repeat(501) })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "meeting_link must be at most 500 characters");
}
