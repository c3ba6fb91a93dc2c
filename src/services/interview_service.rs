use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::models::application::Application;
use crate::models::interview::{Interview, InterviewWithApplication, NewInterview};
use crate::services::application_service::APPLICATION_COLUMNS;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

const INTERVIEW_COLUMNS: &str = "id, application_id, round_name, start_time, end_time, \
     status, meeting_link, review_content, created_at, updated_at";

#[derive(Clone)]
pub struct InterviewService {
    pool: PgPool,
}

impl InterviewService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new: NewInterview) -> Result<Interview> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM applications WHERE id = $1)")
                .bind(new.application_id)
                .fetch_one(&self.pool)
                .await?;
        if !exists {
            return Err(Error::BadRequest(format!(
                "application_id {} does not refer to an existing application",
                new.application_id
            )));
        }

        let status = new.status.unwrap_or_default();
        let query = format!(
            "INSERT INTO interviews (
                application_id, round_name, start_time, end_time, status, meeting_link, review_content
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}",
            INTERVIEW_COLUMNS
        );
        let interview = sqlx::query_as::<_, Interview>(&query)
            .bind(new.application_id)
            .bind(&new.round_name)
            .bind(new.start_time)
            .bind(new.end_time)
            .bind(status.as_str())
            .bind(&new.meeting_link)
            .bind(&new.review_content)
            .fetch_one(&self.pool)
            .await?;

        tracing::info!(
            interview_id = interview.id,
            application_id = interview.application_id,
            "interview created"
        );
        Ok(interview)
    }

    pub async fn find_all(&self) -> Result<Vec<InterviewWithApplication>> {
        let query = format!(
            "SELECT {} FROM interviews ORDER BY start_time ASC, id ASC",
            INTERVIEW_COLUMNS
        );
        let interviews = sqlx::query_as::<_, Interview>(&query)
            .fetch_all(&self.pool)
            .await?;
        self.attach_applications(interviews).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Interview> {
        let query = format!("SELECT {} FROM interviews WHERE id = $1", INTERVIEW_COLUMNS);
        sqlx::query_as::<_, Interview>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("interview not found".to_string()))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<InterviewWithApplication> {
        let interview = self.get_by_id(id).await?;
        let mut items = self.attach_applications(vec![interview]).await?;
        items
            .pop()
            .ok_or_else(|| Error::NotFound("interview not found".to_string()))
    }

    /// Interviews starting within `[start, end]`, both ends inclusive.
    pub async fn find_by_time_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<InterviewWithApplication>> {
        let query = format!(
            "SELECT {} FROM interviews
            WHERE start_time >= $1 AND start_time <= $2
            ORDER BY start_time ASC, id ASC",
            INTERVIEW_COLUMNS
        );
        let interviews = sqlx::query_as::<_, Interview>(&query)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await?;
        self.attach_applications(interviews).await
    }

    pub async fn find_by_application_id(&self, application_id: i64) -> Result<Vec<Interview>> {
        let query = format!(
            "SELECT {} FROM interviews WHERE application_id = $1 ORDER BY start_time ASC, id ASC",
            INTERVIEW_COLUMNS
        );
        let interviews = sqlx::query_as::<_, Interview>(&query)
            .bind(application_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(interviews)
    }

    /// Replaces every mutable column with the values in `interview`.
    pub async fn update(&self, interview: &Interview) -> Result<Interview> {
        let query = format!(
            "UPDATE interviews
            SET
                round_name = $2,
                start_time = $3,
                end_time = $4,
                status = $5,
                meeting_link = $6,
                review_content = $7,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}",
            INTERVIEW_COLUMNS
        );
        sqlx::query_as::<_, Interview>(&query)
            .bind(interview.id)
            .bind(&interview.round_name)
            .bind(interview.start_time)
            .bind(interview.end_time)
            .bind(interview.status.as_str())
            .bind(&interview.meeting_link)
            .bind(&interview.review_content)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("interview not found".to_string()))
    }

    pub async fn update_review(&self, id: i64, content: &str) -> Result<()> {
        let res = sqlx::query(
            "UPDATE interviews SET review_content = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(content)
        .execute(&self.pool)
        .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound("interview not found".to_string()));
        }
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM interviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound("interview not found".to_string()));
        }
        tracing::info!(interview_id = id, "interview deleted");
        Ok(())
    }

    async fn attach_applications(
        &self,
        interviews: Vec<Interview>,
    ) -> Result<Vec<InterviewWithApplication>> {
        let mut ids: Vec<i64> = interviews.iter().map(|i| i.application_id).collect();
        ids.sort_unstable();
        ids.dedup();

        let mut applications: HashMap<i64, Application> = HashMap::new();
        if !ids.is_empty() {
            let query = format!(
                "SELECT {} FROM applications WHERE id = ANY($1)",
                APPLICATION_COLUMNS
            );
            let rows = sqlx::query_as::<_, Application>(&query)
                .bind(&ids)
                .fetch_all(&self.pool)
                .await?;
            applications.extend(rows.into_iter().map(|a| (a.id, a)));
        }

        Ok(interviews
            .into_iter()
            .map(|interview| InterviewWithApplication {
                application: applications.get(&interview.application_id).cloned(),
                interview,
            })
            .collect())
    }
}
