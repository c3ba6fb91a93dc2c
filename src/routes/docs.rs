use axum::Json;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::dto::{
    application_dto::{ApplicationResponse, CreateApplicationPayload, UpdateApplicationPayload},
    auth_dto::{LoginPayload, LoginResponse, RegisterPayload, UserResponse},
    interview_dto::{
        CreateInterviewPayload, InterviewResponse, UpdateInterviewPayload, UpdateReviewPayload,
    },
};
use crate::models::{application::ApplicationStatus, interview::InterviewStatus};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::health::health,
        super::auth::register,
        super::auth::login,
        super::auth::me,
        super::application::list_applications,
        super::application::get_application,
        super::application::create_application,
        super::application::update_application,
        super::application::delete_application,
        super::interview::list_interviews,
        super::interview::get_interview,
        super::interview::create_interview,
        super::interview::update_interview,
        super::interview::update_review,
        super::interview::delete_interview,
    ),
    components(schemas(
        ApplicationStatus,
        InterviewStatus,
        ApplicationResponse,
        CreateApplicationPayload,
        UpdateApplicationPayload,
        InterviewResponse,
        CreateInterviewPayload,
        UpdateInterviewPayload,
        UpdateReviewPayload,
        RegisterPayload,
        LoginPayload,
        LoginResponse,
        UserResponse,
    )),
    modifiers(&BearerAuth),
    tags((name = "offermatrix", description = "Job application and interview tracking"))
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/api/auth/register",
            "/api/auth/login",
            "/api/auth/me",
            "/api/applications",
            "/api/applications/{id}",
            "/api/interviews",
            "/api/interviews/{id}",
            "/api/interviews/{id}/review",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer"));
    }
}
