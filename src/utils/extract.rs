//! Request extractors whose rejections render as [`Error`] bodies.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::Error;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ApiJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Error))]
pub struct ApiQuery<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct ApiPath<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::application_dto::CreateApplicationPayload;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };

    fn json_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/applications")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn missing_required_field_is_a_bad_request() {
        let req = json_request(r#"{"job_title":"Dev"}"#);
        let result = ApiJson::<CreateApplicationPayload>::from_request(req, &()).await;
        let Err(err) = result else {
            panic!("payload without company_name must be rejected");
        };
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "bad_request");
        assert!(err.to_string().contains("company_name"));
    }

    #[tokio::test]
    async fn syntax_errors_are_bad_requests() {
        let req = json_request("{\"company_name\":");
        let result = ApiJson::<CreateApplicationPayload>::from_request(req, &()).await;
        let Err(err) = result else {
            panic!("truncated JSON must be rejected");
        };
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn well_formed_body_is_extracted() {
        let req = json_request(r#"{"company_name":"Acme"}"#);
        let result = ApiJson::<CreateApplicationPayload>::from_request(req, &()).await;
        let Ok(ApiJson(payload)) = result else {
            panic!("valid payload must be accepted");
        };
        assert_eq!(payload.company_name, "Acme");
    }
}
