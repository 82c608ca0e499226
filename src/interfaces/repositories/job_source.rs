use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::job_source::{JobSource, JobSourceInsert},
    errors::{is_unique_violation, violated_constraint, AppError},
    repositories::sqlx_repo::SqlxJobSourceRepo,
};

const JOB_SOURCE_COLUMNS: &str = "id, name, slug, website_url, description, is_active, created_at";

#[async_trait]
pub trait JobSourceRepository: Send + Sync {
    async fn create_job_source(&self, source: &JobSourceInsert) -> Result<JobSource, AppError>;

    async fn get_job_source_by_id(&self, id: &Uuid) -> Result<JobSource, AppError>;

    /// Lists job sources by name
    async fn list_job_sources(&self, active_only: bool) -> Result<Vec<JobSource>, AppError>;

    async fn update_job_source(&self, source: &JobSource) -> Result<JobSource, AppError>;

    /// Deletes a job source; résumés referencing it keep existing without a source
    async fn delete_job_source(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxJobSourceRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxJobSourceRepo { pool }
    }
}

#[async_trait]
impl JobSourceRepository for SqlxJobSourceRepo {
    async fn create_job_source(&self, source: &JobSourceInsert) -> Result<JobSource, AppError> {
        sqlx::query_as::<_, JobSource>(&format!(
            r#"
            INSERT INTO job_sources (name, slug, website_url, description, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {JOB_SOURCE_COLUMNS}
            "#
        ))
        .bind(&source.name)
        .bind(&source.slug)
        .bind(&source.website_url)
        .bind(&source.description)
        .bind(source.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(duplicate_error)
    }

    async fn get_job_source_by_id(&self, id: &Uuid) -> Result<JobSource, AppError> {
        sqlx::query_as::<_, JobSource>(&format!("SELECT {JOB_SOURCE_COLUMNS} FROM job_sources WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Job source not found".into()))
    }

    async fn list_job_sources(&self, active_only: bool) -> Result<Vec<JobSource>, AppError> {
        let sources = sqlx::query_as::<_, JobSource>(&format!(
            "SELECT {JOB_SOURCE_COLUMNS} FROM job_sources WHERE is_active OR NOT $1 ORDER BY name"
        ))
        .bind(active_only)
        .fetch_all(&self.pool)
        .await?;

        Ok(sources)
    }

    async fn update_job_source(&self, source: &JobSource) -> Result<JobSource, AppError> {
        sqlx::query_as::<_, JobSource>(&format!(
            r#"
            UPDATE job_sources SET
                name = $1, slug = $2, website_url = $3, description = $4, is_active = $5
            WHERE id = $6
            RETURNING {JOB_SOURCE_COLUMNS}
            "#
        ))
        .bind(&source.name)
        .bind(&source.slug)
        .bind(&source.website_url)
        .bind(&source.description)
        .bind(source.is_active)
        .bind(source.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(duplicate_error)?
        .ok_or_else(|| AppError::NotFound("Job source not found".into()))
    }

    async fn delete_job_source(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM job_sources WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Job source not found".into()));
        }
        Ok(())
    }
}

fn duplicate_error(err: sqlx::Error) -> AppError {
    if is_unique_violation(&err) {
        let message = match violated_constraint(&err) {
            Some("job_sources_slug_key") => "Slug already exists",
            _ => "Job source name already exists",
        };
        return AppError::Conflict(message.into());
    }
    AppError::from(err)
}
