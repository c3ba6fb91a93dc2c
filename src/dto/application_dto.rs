use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::interview_dto::InterviewResponse;
use crate::error::{Error, Result};
use crate::models::application::{Application, ApplicationStatus, NewApplication};
use crate::services::application_service::{ApplicationFilter, ApplicationWithInterviews};
use crate::utils::patch::{double_option, merge_nullable, merge_required};
use crate::utils::validation::check_max_chars;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateApplicationPayload {
    #[validate(length(min = 1, max = 100))]
    pub company_name: String,
    #[validate(length(max = 100))]
    pub job_title: Option<String>,
    /// One of `IN_PROCESS`, `OFFER`, `REJECTED`. Defaults to `IN_PROCESS`.
    pub current_status: Option<String>,
    #[validate(length(max = 100))]
    pub salary: Option<String>,
    pub job_description: Option<String>,
    pub jd_analysis: Option<String>,
}

impl CreateApplicationPayload {
    pub fn into_new(self) -> Result<NewApplication> {
        Ok(NewApplication {
            company_name: self.company_name,
            job_title: non_empty(self.job_title),
            current_status: parse_status(self.current_status.as_deref())?,
            salary: non_empty(self.salary),
            job_description: non_empty(self.job_description),
            jd_analysis: non_empty(self.jd_analysis),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateApplicationPayload {
    #[validate(length(max = 100))]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub job_title: Option<Option<String>>,
    pub current_status: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub salary: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub job_description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub jd_analysis: Option<Option<String>>,
}

impl UpdateApplicationPayload {
    /// Column limits for the nullable fields, checked before any lookup.
    pub fn check_lengths(&self) -> Result<()> {
        check_max_chars("job_title", &self.job_title, 100)?;
        check_max_chars("salary", &self.salary, 100)
    }

    /// Merges the supplied fields into `app`. Absent or empty fields keep the
    /// stored value; `null` clears a nullable field.
    pub fn apply_to(self, app: &mut Application) -> Result<()> {
        if let Some(status) = parse_status(self.current_status.as_deref())? {
            app.current_status = status;
        }
        merge_required(&mut app.company_name, self.company_name);
        merge_nullable(&mut app.job_title, self.job_title);
        merge_nullable(&mut app.salary, self.salary);
        merge_nullable(&mut app.job_description, self.job_description);
        merge_nullable(&mut app.jd_analysis, self.jd_analysis);
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ApplicationListQuery {
    pub keyword: Option<String>,
    /// Comma-separated list, e.g. `OFFER,REJECTED`.
    pub status: Option<String>,
}

impl ApplicationListQuery {
    pub fn into_filter(self) -> Result<ApplicationFilter> {
        let keyword = self.keyword.filter(|k| !k.is_empty());

        let mut statuses = Vec::new();
        for raw in self.status.as_deref().unwrap_or_default().split(',') {
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }
            let status = raw
                .parse::<ApplicationStatus>()
                .map_err(|e| Error::BadRequest(format!("invalid status filter: {}", e)))?;
            if !statuses.contains(&status) {
                statuses.push(status);
            }
        }

        Ok(ApplicationFilter { keyword, statuses })
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApplicationResponse {
    pub id: i64,
    pub company_name: String,
    pub job_title: Option<String>,
    pub current_status: ApplicationStatus,
    pub salary: Option<String>,
    pub job_description: Option<String>,
    pub jd_analysis: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interviews: Option<Vec<InterviewResponse>>,
}

impl From<Application> for ApplicationResponse {
    fn from(value: Application) -> Self {
        Self {
            id: value.id,
            company_name: value.company_name,
            job_title: value.job_title,
            current_status: value.current_status,
            salary: value.salary,
            job_description: value.job_description,
            jd_analysis: value.jd_analysis,
            created_at: value.created_at,
            updated_at: value.updated_at,
            interviews: None,
        }
    }
}

impl From<ApplicationWithInterviews> for ApplicationResponse {
    fn from(value: ApplicationWithInterviews) -> Self {
        let mut response = ApplicationResponse::from(value.application);
        response.interviews = Some(value.interviews.into_iter().map(Into::into).collect());
        response
    }
}

fn parse_status(raw: Option<&str>) -> Result<Option<ApplicationStatus>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|e| Error::BadRequest(format!("invalid current_status: {}", e))),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
