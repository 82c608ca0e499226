use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::{
        choices::Language,
        skill::{Skill, SkillInsert},
        translation::{NewSkillTranslationRequest, SkillTranslation},
    },
    errors::AppError,
    repositories::sqlx_repo::{owner_error, translation_error, SqlxSkillRepo},
};

const SKILL_COLUMNS: &str = "id, person_id, name, category, is_active";
const TRANSLATION_COLUMNS: &str = "id, skill_id, language, name";

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn create_skill(&self, skill: &SkillInsert) -> Result<Uuid, AppError>;

    async fn get_skill_by_id(&self, id: &Uuid) -> Result<Skill, AppError>;

    /// Lists a person's skills by category then name
    async fn list_skills(&self, person_id: &Uuid, active_only: bool) -> Result<Vec<Skill>, AppError>;

    async fn update_skill(&self, skill: &Skill) -> Result<Skill, AppError>;

    async fn delete_skill(&self, id: &Uuid) -> Result<(), AppError>;

    async fn create_translation(
        &self,
        skill_id: &Uuid,
        translation: &NewSkillTranslationRequest,
    ) -> Result<SkillTranslation, AppError>;

    async fn list_translations(&self, skill_id: &Uuid) -> Result<Vec<SkillTranslation>, AppError>;

    async fn get_translations(&self, ids: &[Uuid], language: Language) -> Result<Vec<SkillTranslation>, AppError>;

    async fn delete_translation(&self, skill_id: &Uuid, language: Language) -> Result<(), AppError>;
}

impl SqlxSkillRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxSkillRepo { pool }
    }
}

#[async_trait]
impl SkillRepository for SqlxSkillRepo {
    async fn create_skill(&self, skill: &SkillInsert) -> Result<Uuid, AppError> {
        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO skills (person_id, name, category, is_active) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(skill.person_id)
        .bind(&skill.name)
        .bind(skill.category)
        .bind(skill.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| owner_error(e, "Person not found"))
    }

    async fn get_skill_by_id(&self, id: &Uuid) -> Result<Skill, AppError> {
        sqlx::query_as::<_, Skill>(&format!("SELECT {SKILL_COLUMNS} FROM skills WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Skill not found".into()))
    }

    async fn list_skills(&self, person_id: &Uuid, active_only: bool) -> Result<Vec<Skill>, AppError> {
        let skills = sqlx::query_as::<_, Skill>(&format!(
            r#"
            SELECT {SKILL_COLUMNS} FROM skills
            WHERE person_id = $1 AND (is_active OR NOT $2)
            ORDER BY category, name
            "#
        ))
        .bind(person_id)
        .bind(active_only)
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }

    async fn update_skill(&self, skill: &Skill) -> Result<Skill, AppError> {
        sqlx::query_as::<_, Skill>(&format!(
            "UPDATE skills SET name = $1, category = $2, is_active = $3 WHERE id = $4 RETURNING {SKILL_COLUMNS}"
        ))
        .bind(&skill.name)
        .bind(skill.category)
        .bind(skill.is_active)
        .bind(skill.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Skill not found".into()))
    }

    async fn delete_skill(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Skill not found".into()));
        }
        Ok(())
    }

    async fn create_translation(
        &self,
        skill_id: &Uuid,
        translation: &NewSkillTranslationRequest,
    ) -> Result<SkillTranslation, AppError> {
        sqlx::query_as::<_, SkillTranslation>(&format!(
            "INSERT INTO skill_translations (skill_id, language, name) VALUES ($1, $2, $3) RETURNING {TRANSLATION_COLUMNS}"
        ))
        .bind(skill_id)
        .bind(translation.language)
        .bind(translation.name.trim())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| translation_error(e, "Skill not found"))
    }

    async fn list_translations(&self, skill_id: &Uuid) -> Result<Vec<SkillTranslation>, AppError> {
        let translations = sqlx::query_as::<_, SkillTranslation>(&format!(
            "SELECT {TRANSLATION_COLUMNS} FROM skill_translations WHERE skill_id = $1 ORDER BY language"
        ))
        .bind(skill_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(translations)
    }

    async fn get_translations(&self, ids: &[Uuid], language: Language) -> Result<Vec<SkillTranslation>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let translations = sqlx::query_as::<_, SkillTranslation>(&format!(
            "SELECT {TRANSLATION_COLUMNS} FROM skill_translations WHERE skill_id = ANY($1) AND language = $2"
        ))
        .bind(ids)
        .bind(language)
        .fetch_all(&self.pool)
        .await?;

        Ok(translations)
    }

    async fn delete_translation(&self, skill_id: &Uuid, language: Language) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM skill_translations WHERE skill_id = $1 AND language = $2")
            .bind(skill_id)
            .bind(language)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Translation not found".into()));
        }
        Ok(())
    }
}
