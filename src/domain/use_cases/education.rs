use validator::Validate;

use crate::{
    entities::{
        choices::Language,
        education::{Education, NewEducationRequest, UpdateEducationRequest},
        translation::{EducationTranslation, NewEducationTranslationRequest},
    },
    errors::AppError,
    repositories::education::EducationRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct EducationHandler<R>
where
    R: EducationRepository,
{
    pub education_repo: R,
}

impl<R> EducationHandler<R>
where
    R: EducationRepository,
{
    pub fn new(education_repo: R) -> Self {
        EducationHandler { education_repo }
    }

    pub async fn create_education(&self, person_id: &str, request: NewEducationRequest) -> Result<Education, AppError> {
        request.validate()?;
        let person_id = valid_uuid(person_id)?;

        let id = self
            .education_repo
            .create_education(&request.prepare_for_insert(person_id))
            .await?;
        self.education_repo.get_education_by_id(&id).await
    }

    pub async fn get_education(&self, id: &str) -> Result<Education, AppError> {
        let valid_id = valid_uuid(id)?;
        self.education_repo.get_education_by_id(&valid_id).await
    }

    pub async fn list_educations(&self, person_id: &str) -> Result<Vec<Education>, AppError> {
        let person_id = valid_uuid(person_id)?;
        self.education_repo.list_educations(&person_id).await
    }

    pub async fn update_education(&self, id: &str, request: UpdateEducationRequest) -> Result<Education, AppError> {
        request.validate()?;
        let valid_id = valid_uuid(id)?;

        let request = request.normalized();
        let mut education = self.education_repo.get_education_by_id(&valid_id).await?;
        request
            .apply(&mut education)
            .map_err(|e| AppError::invalid_field("end_date", e))?;

        self.education_repo.update_education(&education).await
    }

    pub async fn delete_education(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.education_repo.delete_education(&valid_id).await
    }

    pub async fn add_translation(
        &self,
        education_id: &str,
        request: NewEducationTranslationRequest,
    ) -> Result<EducationTranslation, AppError> {
        request.validate()?;
        let education_id = valid_uuid(education_id)?;

        self.education_repo
            .create_translation(&education_id, &request.trimmed())
            .await
    }

    pub async fn list_translations(&self, education_id: &str) -> Result<Vec<EducationTranslation>, AppError> {
        let education_id = valid_uuid(education_id)?;
        self.education_repo.list_translations(&education_id).await
    }

    pub async fn delete_translation(&self, education_id: &str, language: Language) -> Result<(), AppError> {
        let education_id = valid_uuid(education_id)?;
        self.education_repo.delete_translation(&education_id, language).await
    }
}
