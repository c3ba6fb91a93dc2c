use crate::error::{Error, Result};
use crate::models::application::{Application, ApplicationStatus, NewApplication};
use crate::models::interview::Interview;
use crate::services::interview_service::InterviewService;
use sqlx::PgPool;

pub(crate) const APPLICATION_COLUMNS: &str = "id, company_name, job_title, current_status, salary, \
     job_description, jd_analysis, created_at, updated_at";

#[derive(Clone)]
pub struct ApplicationService {
    pool: PgPool,
    interviews: InterviewService,
}

/// Listing filter. An empty filter matches every application.
#[derive(Debug, Clone, Default)]
pub struct ApplicationFilter {
    pub keyword: Option<String>,
    pub statuses: Vec<ApplicationStatus>,
}

pub struct ApplicationWithInterviews {
    pub application: Application,
    pub interviews: Vec<Interview>,
}

impl ApplicationService {
    pub fn new(pool: PgPool) -> Self {
        let interviews = InterviewService::new(pool.clone());
        Self { pool, interviews }
    }

    pub async fn create(&self, new: NewApplication) -> Result<Application> {
        let status = new.current_status.unwrap_or_default();
        let query = format!(
            "INSERT INTO applications (
                company_name, job_title, current_status, salary, job_description, jd_analysis
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}",
            APPLICATION_COLUMNS
        );
        let application = sqlx::query_as::<_, Application>(&query)
            .bind(&new.company_name)
            .bind(&new.job_title)
            .bind(status.as_str())
            .bind(&new.salary)
            .bind(&new.job_description)
            .bind(&new.jd_analysis)
            .fetch_one(&self.pool)
            .await?;

        tracing::info!(
            application_id = application.id,
            status = %application.current_status,
            "application created"
        );
        Ok(application)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Application> {
        let query = format!("SELECT {} FROM applications WHERE id = $1", APPLICATION_COLUMNS);
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("application not found".to_string()))
    }

    /// Loads an application with its interviews ordered by start time.
    pub async fn find_by_id(&self, id: i64) -> Result<ApplicationWithInterviews> {
        let application = self.get_by_id(id).await?;
        let interviews = self.interviews.find_by_application_id(id).await?;

        Ok(ApplicationWithInterviews {
            application,
            interviews,
        })
    }

    pub async fn find_all(&self) -> Result<Vec<Application>> {
        self.search_with_filters(&ApplicationFilter::default()).await
    }

    /// Keyword matches company name or job title (case-insensitive substring);
    /// statuses restrict to the given set. Both conditions must hold.
    pub async fn search_with_filters(&self, filter: &ApplicationFilter) -> Result<Vec<Application>> {
        let mut filters = Vec::new();
        let mut arg_count = 0;

        let pattern = filter
            .keyword
            .as_deref()
            .filter(|k| !k.is_empty())
            .map(|k| format!("%{}%", escape_like(k)));
        if pattern.is_some() {
            arg_count += 1;
            filters.push(format!(
                "(company_name ILIKE ${n} OR job_title ILIKE ${n})",
                n = arg_count
            ));
        }

        let statuses: Vec<String> = filter
            .statuses
            .iter()
            .map(|s| s.as_str().to_string())
            .collect();
        if !statuses.is_empty() {
            arg_count += 1;
            filters.push(format!("current_status = ANY(${})", arg_count));
        }

        let where_clause = if filters.is_empty() {
            "".to_string()
        } else {
            format!("WHERE {}", filters.join(" AND "))
        };

        let query = format!(
            "SELECT {} FROM applications {} ORDER BY updated_at DESC, id DESC",
            APPLICATION_COLUMNS, where_clause
        );

        let mut statement = sqlx::query_as::<_, Application>(&query);
        if let Some(pattern) = &pattern {
            statement = statement.bind(pattern);
        }
        if !statuses.is_empty() {
            statement = statement.bind(&statuses);
        }
        let items = statement.fetch_all(&self.pool).await?;

        tracing::debug!(
            keyword = ?filter.keyword,
            statuses = ?statuses,
            count = items.len(),
            "applications listed"
        );
        Ok(items)
    }

    /// Persists every mutable column of `app`.
    pub async fn update(&self, app: &Application) -> Result<Application> {
        let query = format!(
            "UPDATE applications
            SET
                company_name = $2,
                job_title = $3,
                current_status = $4,
                salary = $5,
                job_description = $6,
                jd_analysis = $7,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}",
            APPLICATION_COLUMNS
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(app.id)
            .bind(&app.company_name)
            .bind(&app.job_title)
            .bind(app.current_status.as_str())
            .bind(&app.salary)
            .bind(&app.job_description)
            .bind(&app.jd_analysis)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("application not found".to_string()))
    }

    /// Deletes the application and all of its interviews in one transaction.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let interviews = sqlx::query("DELETE FROM interviews WHERE application_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let res = sqlx::query("DELETE FROM applications WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if res.rows_affected() == 0 {
            // tx is dropped here and rolled back
            return Err(Error::NotFound("application not found".to_string()));
        }

        tx.commit().await?;

        tracing::info!(
            application_id = id,
            interviews_removed = interviews.rows_affected(),
            "application deleted"
        );
        Ok(())
    }
}

/// Escapes LIKE wildcards so the keyword is matched literally.
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("acme"), "acme");
        assert_eq!(escape_like("100%_off\\"), "100\\%\\_off\\\\");
    }
}
