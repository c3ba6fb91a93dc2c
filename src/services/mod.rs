pub mod application_service;
pub mod interview_service;
pub mod user_service;
