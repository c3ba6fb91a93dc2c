pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;
pub mod utils;

use std::sync::Arc;

use crate::config::Config;
use crate::services::{
    application_service::ApplicationService, interview_service::InterviewService,
    user_service::UserService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub user_service: UserService,
    pub application_service: ApplicationService,
    pub interview_service: InterviewService,
}

impl AppState {
    pub fn new(pool: PgPool, config: Config) -> Self {
        let user_service = UserService::new(pool.clone());
        let application_service = ApplicationService::new(pool.clone());
        let interview_service = InterviewService::new(pool.clone());

        Self {
            pool,
            config: Arc::new(config),
            user_service,
            application_service,
            interview_service,
        }
    }
}
