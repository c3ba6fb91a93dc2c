use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use super::application::Application;
use super::InvalidStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterviewStatus {
    #[default]
    Scheduled,
    #[serde(alias = "COMPLETED")]
    Finished,
    Cancelled,
}

impl InterviewStatus {
    pub const ALL: [InterviewStatus; 3] = [Self::Scheduled, Self::Finished, Self::Cancelled];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::Finished => "FINISHED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for InterviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterviewStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "COMPLETED" {
            return Ok(Self::Finished);
        }
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| InvalidStatus(s.to_string()))
    }
}

impl TryFrom<String> for InterviewStatus {
    type Error = InvalidStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Interview {
    pub id: i64,
    pub application_id: i64,
    pub round_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[sqlx(try_from = "String")]
    pub status: InterviewStatus,
    pub meeting_link: Option<String>,
    pub review_content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewInterview {
    pub application_id: i64,
    pub round_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: Option<InterviewStatus>,
    pub meeting_link: Option<String>,
    pub review_content: Option<String>,
}

/// An interview together with the application it belongs to.
#[derive(Debug, Clone)]
pub struct InterviewWithApplication {
    pub interview: Interview,
    pub application: Option<Application>,
}
