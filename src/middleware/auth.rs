use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::utils::token::verify_token;
use crate::AppState;

pub use crate::utils::token::Claims;

fn unauthorized(code: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": code, "code": "unauthorized" })),
    )
        .into_response()
}

/// Rejects requests without a valid bearer token. On success the verified
/// [`Claims`] are stored in the request extensions.
pub async fn require_bearer_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(auth_header) = req.headers().get(axum::http::header::AUTHORIZATION) else {
        return unauthorized("missing_authorization");
    };
    let Ok(auth_str) = auth_header.to_str() else {
        return unauthorized("bad_authorization");
    };
    let Some(token) = auth_str.strip_prefix("Bearer ") else {
        return unauthorized("unsupported_scheme");
    };

    match verify_token(token.trim(), &state.config.jwt_secret) {
        Ok(claims) => {
            tracing::debug!(user_id = claims.user_id, "request authenticated");
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(_) => unauthorized("invalid_token"),
    }
}
