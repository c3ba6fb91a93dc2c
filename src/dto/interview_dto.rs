use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::application_dto::ApplicationResponse;
use crate::error::{Error, Result};
use crate::models::interview::{Interview, InterviewStatus, InterviewWithApplication, NewInterview};
use crate::utils::patch::{double_option, merge_nullable, merge_required};
use crate::utils::time::{parse_rfc3339_field, resolve_range};
use crate::utils::validation::check_max_chars;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateInterviewPayload {
    pub application_id: i64,
    #[validate(length(min = 1, max = 50))]
    pub round_name: String,
    /// RFC 3339 timestamp.
    pub start_time: String,
    /// RFC 3339 timestamp.
    pub end_time: String,
    /// One of `SCHEDULED`, `FINISHED`, `CANCELLED`. Defaults to `SCHEDULED`.
    pub status: Option<String>,
    #[validate(length(max = 500))]
    pub meeting_link: Option<String>,
    pub review_content: Option<String>,
}

impl CreateInterviewPayload {
    pub fn into_new(self) -> Result<NewInterview> {
        let start_time = parse_rfc3339_field("start_time", &self.start_time)?;
        let end_time = parse_rfc3339_field("end_time", &self.end_time)?;
        ensure_ordered(start_time, end_time)?;

        Ok(NewInterview {
            application_id: self.application_id,
            round_name: self.round_name,
            start_time,
            end_time,
            status: parse_status(self.status.as_deref())?,
            meeting_link: self.meeting_link.filter(|v| !v.is_empty()),
            review_content: self.review_content.filter(|v| !v.is_empty()),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateInterviewPayload {
    #[validate(length(max = 50))]
    pub round_name: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub meeting_link: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub review_content: Option<Option<String>>,
}

impl UpdateInterviewPayload {
    pub fn check_lengths(&self) -> Result<()> {
        check_max_chars("meeting_link", &self.meeting_link, 500)
    }

    pub fn apply_to(self, interview: &mut Interview) -> Result<()> {
        if let Some(raw) = self.start_time.as_deref().filter(|s| !s.is_empty()) {
            interview.start_time = parse_rfc3339_field("start_time", raw)?;
        }
        if let Some(raw) = self.end_time.as_deref().filter(|s| !s.is_empty()) {
            interview.end_time = parse_rfc3339_field("end_time", raw)?;
        }
        ensure_ordered(interview.start_time, interview.end_time)?;

        if let Some(status) = parse_status(self.status.as_deref())? {
            interview.status = status;
        }
        merge_required(&mut interview.round_name, self.round_name);
        merge_nullable(&mut interview.meeting_link, self.meeting_link);
        merge_nullable(&mut interview.review_content, self.review_content);
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateReviewPayload {
    #[serde(default)]
    pub review_content: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct InterviewListQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl InterviewListQuery {
    pub fn time_range(&self) -> Result<Option<(DateTime<Utc>, DateTime<Utc>)>> {
        resolve_range(self.start.as_deref(), self.end.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InterviewResponse {
    pub id: i64,
    pub application_id: i64,
    pub round_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: InterviewStatus,
    pub meeting_link: Option<String>,
    pub review_content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<ApplicationResponse>,
}

impl From<Interview> for InterviewResponse {
    fn from(value: Interview) -> Self {
        Self {
            id: value.id,
            application_id: value.application_id,
            round_name: value.round_name,
            start_time: value.start_time,
            end_time: value.end_time,
            status: value.status,
            meeting_link: value.meeting_link,
            review_content: value.review_content,
            created_at: value.created_at,
            updated_at: value.updated_at,
            application: None,
        }
    }
}

impl From<InterviewWithApplication> for InterviewResponse {
    fn from(value: InterviewWithApplication) -> Self {
        let mut response = InterviewResponse::from(value.interview);
        response.application = value.application.map(Into::into);
        response
    }
}

fn parse_status(raw: Option<&str>) -> Result<Option<InterviewStatus>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|e| Error::BadRequest(format!("invalid status: {}", e))),
    }
}

fn ensure_ordered(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<()> {
    if end < start {
        return Err(Error::BadRequest(
            "end_time must not be earlier than start_time".to_string(),
        ));
    }
    Ok(())
}
