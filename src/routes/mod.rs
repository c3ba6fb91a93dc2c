pub mod application;
pub mod auth;
pub mod docs;
pub mod health;
pub mod interview;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, patch, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{middleware, AppState};

/// Builds the full HTTP surface. `/health`, the OpenAPI document and the
/// register/login endpoints are public; everything else needs a bearer token.
pub fn router(state: AppState) -> Router {
    let public_api = Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login));

    let protected_api = Router::new()
        .route("/api/auth/me", get(auth::me))
        .route(
            "/api/applications",
            get(application::list_applications).post(application::create_application),
        )
        .route(
            "/api/applications/:id",
            get(application::get_application)
                .put(application::update_application)
                .delete(application::delete_application),
        )
        .route(
            "/api/interviews",
            get(interview::list_interviews).post(interview::create_interview),
        )
        .route(
            "/api/interviews/:id",
            get(interview::get_interview)
                .put(interview::update_interview)
                .patch(interview::update_interview)
                .delete(interview::delete_interview),
        )
        .route("/api/interviews/:id/review", patch(interview::update_review))
        .layer(from_fn_with_state(
            state.clone(),
            middleware::auth::require_bearer_auth,
        ));

    let cors = middleware::cors::cors_layer(&state.config.cors_allowed_origins);

    Router::new()
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .merge(public_api)
        .merge(protected_api)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
