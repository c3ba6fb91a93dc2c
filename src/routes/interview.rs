use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::{
    dto::interview_dto::{
        CreateInterviewPayload, InterviewListQuery, InterviewResponse, UpdateInterviewPayload,
        UpdateReviewPayload,
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
    path = "/api/interviews",
    params(
        ("start" = Option<String>, Query, description = "RFC 3339 timestamp or YYYY-MM-DD"),
        ("end" = Option<String>, Query, description = "RFC 3339 timestamp or YYYY-MM-DD (whole day)")
    ),
    responses(
        (status = 200, description = "Interviews ordered by start time", body = [InterviewResponse]),
        (status = 400, description = "Malformed start or end")
    ),
    security(("bearer" = []))
)]
pub async fn list_interviews(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<InterviewListQuery>,
) -> Result<impl IntoResponse> {
    let items = match query.time_range()? {
        Some((start, end)) => {
            state
                .interview_service
                .find_by_time_range(start, end)
                .await?
        }
        None => state.interview_service.find_all().await?,
    };
    let body: Vec<InterviewResponse> = items.into_iter().map(Into::into).collect();
    Ok(Json(body))
}

#[utoipa::path(
    get,
    path = "/api/interviews/{id}",
    params(
        ("id" = i64, Path, description = "Interview ID")
    ),
    responses(
        (status = 200, description = "Interview with its application", body = InterviewResponse),
        (status = 404, description = "Interview not found")
    ),
    security(("bearer" = []))
)]
pub async fn get_interview(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&id)?;
    let interview = state.interview_service.find_by_id(id).await?;
    Ok(Json(InterviewResponse::from(interview)))
}

#[utoipa::path(
    post,
    path = "/api/interviews",
    request_body = CreateInterviewPayload,
    responses(
        (status = 201, description = "Interview created", body = InterviewResponse),
        (status = 400, description = "Invalid payload or unknown application")
    ),
    security(("bearer" = []))
)]
pub async fn create_interview(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateInterviewPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let interview = state
        .interview_service
        .create(payload.into_new()?)
        .await?;
    Ok((StatusCode::CREATED, Json(InterviewResponse::from(interview))))
}

#[utoipa::path(
    put,
    path = "/api/interviews/{id}",
    params(
        ("id" = i64, Path, description = "Interview ID")
    ),
    request_body = UpdateInterviewPayload,
    responses(
        (status = 200, description = "Interview updated", body = InterviewResponse),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Interview not found")
    ),
    security(("bearer" = []))
)]
pub async fn update_interview(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(payload): ApiJson<UpdateInterviewPayload>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&id)?;
    validate(&payload)?;
    payload.check_lengths()?;

    let mut interview = state.interview_service.get_by_id(id).await?;
    payload.apply_to(&mut interview)?;
    state.interview_service.update(&interview).await?;

    let interview = state.interview_service.find_by_id(id).await?;
    Ok(Json(InterviewResponse::from(interview)))
}

#[utoipa::path(
    patch,
    path = "/api/interviews/{id}/review",
    params(
        ("id" = i64, Path, description = "Interview ID")
    ),
    request_body = UpdateReviewPayload,
    responses(
        (status = 200, description = "Review saved", body = InterviewResponse),
        (status = 404, description = "Interview not found")
    ),
    security(("bearer" = []))
)]
pub async fn update_review(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(payload): ApiJson<UpdateReviewPayload>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&id)?;
    state
        .interview_service
        .update_review(id, &payload.review_content)
        .await?;

    let interview = state.interview_service.find_by_id(id).await?;
    Ok(Json(InterviewResponse::from(interview)))
}

#[utoipa::path(
    delete,
    path = "/api/interviews/{id}",
    params(
        ("id" = i64, Path, description = "Interview ID")
    ),
    responses(
        (status = 200, description = "Interview deleted"),
        (status = 404, description = "Interview not found")
    ),
    security(("bearer" = []))
)]
pub async fn delete_interview(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&id)?;
    state.interview_service.delete(id).await?;
    Ok(Json(json!({ "message": "deleted" })))
}
