use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use super::InvalidStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    #[default]
    InProcess,
    Offer,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 3] = [Self::InProcess, Self::Offer, Self::Rejected];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProcess => "IN_PROCESS",
            Self::Offer => "OFFER",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| InvalidStatus(s.to_string()))
    }
}

impl TryFrom<String> for ApplicationStatus {
    type Error = InvalidStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Application {
    pub id: i64,
    pub company_name: String,
    pub job_title: Option<String>,
    #[sqlx(try_from = "String")]
    pub current_status: ApplicationStatus,
    pub salary: Option<String>,
    pub job_description: Option<String>,
    pub jd_analysis: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Values for a row that has not been inserted yet.
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub company_name: String,
    pub job_title: Option<String>,
    pub current_status: Option<ApplicationStatus>,
    pub salary: Option<String>,
    pub job_description: Option<String>,
    pub jd_analysis: Option<String>,
}
