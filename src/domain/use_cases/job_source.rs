use validator::Validate;

use crate::{
    entities::job_source::{JobSource, NewJobSourceRequest, UpdateJobSourceRequest},
    errors::AppError,
    repositories::job_source::JobSourceRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct JobSourceHandler<R>
where
    R: JobSourceRepository,
{
    pub job_source_repo: R,
}

impl<R> JobSourceHandler<R>
where
    R: JobSourceRepository,
{
    pub fn new(job_source_repo: R) -> Self {
        JobSourceHandler { job_source_repo }
    }

    /// Creates a job source, deriving the slug from the name when none is given
    pub async fn create_job_source(&self, request: NewJobSourceRequest) -> Result<JobSource, AppError> {
        request.validate()?;

        let source = self
            .job_source_repo
            .create_job_source(&request.prepare_for_insert())
            .await?;

        tracing::info!(slug = %source.slug, "Job source created");
        Ok(source)
    }

    pub async fn get_job_source(&self, id: &str) -> Result<JobSource, AppError> {
        let valid_id = valid_uuid(id)?;
        self.job_source_repo.get_job_source_by_id(&valid_id).await
    }

    pub async fn list_job_sources(&self, active_only: bool) -> Result<Vec<JobSource>, AppError> {
        self.job_source_repo.list_job_sources(active_only).await
    }

    pub async fn update_job_source(&self, id: &str, request: UpdateJobSourceRequest) -> Result<JobSource, AppError> {
        request.validate()?;
        let valid_id = valid_uuid(id)?;

        let request = request.normalized();
        if request.slug.value_ref().is_some_and(|s| s.is_empty()) {
            return Err(AppError::InvalidInput("Slug must contain letters or digits".into()));
        }

        let mut source = self.job_source_repo.get_job_source_by_id(&valid_id).await?;
        request.apply(&mut source);

        self.job_source_repo.update_job_source(&source).await
    }

    pub async fn delete_job_source(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.job_source_repo.delete_job_source(&valid_id).await
    }
}
