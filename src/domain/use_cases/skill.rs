use validator::Validate;

use crate::{
    entities::{
        choices::Language,
        skill::{NewSkillRequest, Skill, UpdateSkillRequest},
        translation::{NewSkillTranslationRequest, SkillTranslation},
    },
    errors::AppError,
    repositories::skill::SkillRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct SkillHandler<R>
where
    R: SkillRepository,
{
    pub skill_repo: R,
}

impl<R> SkillHandler<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repo: R) -> Self {
        SkillHandler { skill_repo }
    }

    pub async fn create_skill(&self, person_id: &str, request: NewSkillRequest) -> Result<Skill, AppError> {
        request.validate()?;
        let person_id = valid_uuid(person_id)?;

        let id = self.skill_repo.create_skill(&request.prepare_for_insert(person_id)).await?;
        self.skill_repo.get_skill_by_id(&id).await
    }

    pub async fn get_skill(&self, id: &str) -> Result<Skill, AppError> {
        let valid_id = valid_uuid(id)?;
        self.skill_repo.get_skill_by_id(&valid_id).await
    }

    pub async fn list_skills(&self, person_id: &str, active_only: bool) -> Result<Vec<Skill>, AppError> {
        let person_id = valid_uuid(person_id)?;
        self.skill_repo.list_skills(&person_id, active_only).await
    }

    pub async fn update_skill(&self, id: &str, request: UpdateSkillRequest) -> Result<Skill, AppError> {
        request.validate()?;
        let valid_id = valid_uuid(id)?;

        let mut skill = self.skill_repo.get_skill_by_id(&valid_id).await?;
        request.apply(&mut skill);
        skill.name = skill.name.trim().to_string();

        self.skill_repo.update_skill(&skill).await
    }

    pub async fn delete_skill(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.skill_repo.delete_skill(&valid_id).await
    }

    pub async fn add_translation(
        &self,
        skill_id: &str,
        request: NewSkillTranslationRequest,
    ) -> Result<SkillTranslation, AppError> {
        request.validate()?;
        let skill_id = valid_uuid(skill_id)?;
        self.skill_repo.create_translation(&skill_id, &request).await
    }

    pub async fn list_translations(&self, skill_id: &str) -> Result<Vec<SkillTranslation>, AppError> {
        let skill_id = valid_uuid(skill_id)?;
        self.skill_repo.list_translations(&skill_id).await
    }

    pub async fn delete_translation(&self, skill_id: &str, language: Language) -> Result<(), AppError> {
        let skill_id = valid_uuid(skill_id)?;
        self.skill_repo.delete_translation(&skill_id, language).await
    }
}
