use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::{
    dto::application_dto::{
        ApplicationListQuery, ApplicationResponse, CreateApplicationPayload,
        UpdateApplicationPayload,
    },
    error::Result,
    utils::{
        extract::{ApiJson, ApiPath, ApiQuery},
        validation::{parse_id, validate},
    },
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/applications",
    params(
        ("keyword" = Option<String>, Query, description = "Substring of company name or job title"),
        ("status" = Option<String>, Query, description = "Comma-separated statuses: IN_PROCESS,OFFER,REJECTED")
    ),
    responses(
        (status = 200, description = "Applications, most recently updated first", body = [ApplicationResponse]),
        (status = 400, description = "Unknown status in filter")
    ),
    security(("bearer" = []))
)]
pub async fn list_applications(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ApplicationListQuery>,
) -> Result<impl IntoResponse> {
    let filter = query.into_filter()?;
    let items = state
        .application_service
        .search_with_filters(&filter)
        .await?;
    let body: Vec<ApplicationResponse> = items.into_iter().map(Into::into).collect();
    Ok(Json(body))
}

#[utoipa::path(
    get,
    path = "/api/applications/{id}",
    params(
        ("id" = i64, Path, description = "Application ID")
    ),
    responses(
        (status = 200, description = "Application with its interviews", body = ApplicationResponse),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Application not found")
    ),
    security(("bearer" = []))
)]
pub async fn get_application(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&id)?;
    let app = state.application_service.find_by_id(id).await?;
    Ok(Json(ApplicationResponse::from(app)))
}

#[utoipa::path(
    post,
    path = "/api/applications",
    request_body = CreateApplicationPayload,
    responses(
        (status = 201, description = "Application created", body = ApplicationResponse),
        (status = 400, description = "Invalid payload")
    ),
    security(("bearer" = []))
)]
pub async fn create_application(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateApplicationPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let app = state
        .application_service
        .create(payload.into_new()?)
        .await?;
    Ok((StatusCode::CREATED, Json(ApplicationResponse::from(app))))
}

#[utoipa::path(
    put,
    path = "/api/applications/{id}",
    params(
        ("id" = i64, Path, description = "Application ID")
    ),
    request_body = UpdateApplicationPayload,
    responses(
        (status = 200, description = "Application updated", body = ApplicationResponse),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Application not found")
    ),
    security(("bearer" = []))
)]
pub async fn update_application(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(payload): ApiJson<UpdateApplicationPayload>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&id)?;
    validate(&payload)?;
    payload.check_lengths()?;

    let mut app = state.application_service.get_by_id(id).await?;
    payload.apply_to(&mut app)?;
    let app = state.application_service.update(&app).await?;
    Ok(Json(ApplicationResponse::from(app)))
}

#[utoipa::path(
    delete,
    path = "/api/applications/{id}",
    params(
        ("id" = i64, Path, description = "Application ID")
    ),
    responses(
        (status = 200, description = "Application and its interviews deleted"),
        (status = 404, description = "Application not found")
    ),
    security(("bearer" = []))
)]
pub async fn delete_application(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&id)?;
    state.application_service.delete(id).await?;
    Ok(Json(json!({ "message": "deleted" })))
}
