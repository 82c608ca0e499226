use validator::Validate;

use crate::{
    entities::{
        choices::Language,
        experience::{Experience, NewExperienceRequest, UpdateExperienceRequest},
        translation::{ExperienceTranslation, NewExperienceTranslationRequest},
    },
    errors::AppError,
    repositories::experience::ExperienceRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct ExperienceHandler<R>
where
    R: ExperienceRepository,
{
    pub experience_repo: R,
}

impl<R> ExperienceHandler<R>
where
    R: ExperienceRepository,
{
    pub fn new(experience_repo: R) -> Self {
        ExperienceHandler { experience_repo }
    }

    pub async fn create_experience(&self, person_id: &str, request: NewExperienceRequest) -> Result<Experience, AppError> {
        request.validate()?;
        let person_id = valid_uuid(person_id)?;

        let id = self
            .experience_repo
            .create_experience(&request.prepare_for_insert(person_id))
            .await?;
        self.experience_repo.get_experience_by_id(&id).await
    }

    pub async fn get_experience(&self, id: &str) -> Result<Experience, AppError> {
        let valid_id = valid_uuid(id)?;
        self.experience_repo.get_experience_by_id(&valid_id).await
    }

    pub async fn list_experiences(&self, person_id: &str) -> Result<Vec<Experience>, AppError> {
        let person_id = valid_uuid(person_id)?;
        self.experience_repo.list_experiences(&person_id).await
    }

    pub async fn update_experience(&self, id: &str, request: UpdateExperienceRequest) -> Result<Experience, AppError> {
        request.validate()?;
        let valid_id = valid_uuid(id)?;

        let request = request.sanitized();
        let mut experience = self.experience_repo.get_experience_by_id(&valid_id).await?;
        request
            .apply(&mut experience)
            .map_err(|e| AppError::invalid_field("end_date", e))?;

        self.experience_repo.update_experience(&experience).await
    }

    /// Deletes an experience; résumés that listed it simply lose the entry
    pub async fn delete_experience(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.experience_repo.delete_experience(&valid_id).await
    }

    pub async fn add_translation(
        &self,
        experience_id: &str,
        request: NewExperienceTranslationRequest,
    ) -> Result<ExperienceTranslation, AppError> {
        request.validate()?;
        let experience_id = valid_uuid(experience_id)?;

        let translation = self
            .experience_repo
            .create_translation(&experience_id, &request.sanitized())
            .await?;

        tracing::info!(%experience_id, language = %translation.language, "Experience translation added");
        Ok(translation)
    }

    pub async fn list_translations(&self, experience_id: &str) -> Result<Vec<ExperienceTranslation>, AppError> {
        let experience_id = valid_uuid(experience_id)?;
        self.experience_repo.list_translations(&experience_id).await
    }

    pub async fn delete_translation(&self, experience_id: &str, language: Language) -> Result<(), AppError> {
        let experience_id = valid_uuid(experience_id)?;
        self.experience_repo.delete_translation(&experience_id, language).await
    }
}
