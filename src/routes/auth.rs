use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};

use crate::{
    dto::auth_dto::{LoginPayload, LoginResponse, RegisterPayload, UserResponse},
    error::{Error, Result},
    middleware::auth::Claims,
    utils::{
        crypto::{hash_password, verify_password},
        extract::ApiJson,
        token::issue_token,
        validation::validate,
    },
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterPayload,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, description = "Invalid username or password"),
        (status = 409, description = "Username already exists")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;

    if state
        .user_service
        .exists_by_username(&payload.username)
        .await?
    {
        return Err(Error::Conflict("username already exists".to_string()));
    }

    let password_hash = hash_password(&payload.password)?;
    let user = state
        .user_service
        .create(&payload.username, &password_hash)
        .await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Login succeeded", body = LoginResponse),
        (status = 401, description = "Invalid username or password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let invalid = || Error::Unauthorized("invalid username or password".to_string());

    let Some(user) = state
        .user_service
        .find_by_username(&payload.username)
        .await?
    else {
        return Err(invalid());
    };
    if !verify_password(&payload.password, &user.password)? {
        tracing::info!(user_id = user.id, "login rejected: wrong password");
        return Err(invalid());
    }

    let token = issue_token(
        user.id,
        &user.username,
        &state.config.jwt_secret,
        state.config.jwt_expire_hours,
    )?;
    Ok(Json(LoginResponse {
        token,
        user: user.into(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "User no longer exists")
    ),
    security(("bearer" = []))
)]
pub async fn me(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let user = state.user_service.find_by_id(claims.user_id).await?;
    Ok(Json(UserResponse::from(user)))
}
