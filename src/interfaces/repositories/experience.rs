use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::{
        choices::Language,
        experience::{Experience, ExperienceInsert},
        translation::{ExperienceTranslation, NewExperienceTranslationRequest},
    },
    errors::AppError,
    repositories::sqlx_repo::{owner_error, translation_error, SqlxExperienceRepo},
};

const EXPERIENCE_COLUMNS: &str = "id, person_id, company, position, start_date, end_date, is_current, description";
const TRANSLATION_COLUMNS: &str = "id, experience_id, language, position, company, description";

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn create_experience(&self, experience: &ExperienceInsert) -> Result<Uuid, AppError>;

    async fn get_experience_by_id(&self, id: &Uuid) -> Result<Experience, AppError>;

    /// Lists a person's experiences, newest first
    async fn list_experiences(&self, person_id: &Uuid) -> Result<Vec<Experience>, AppError>;

    async fn update_experience(&self, experience: &Experience) -> Result<Experience, AppError>;

    async fn delete_experience(&self, id: &Uuid) -> Result<(), AppError>;

    /// Adds a translation; a second one for the same language is a conflict
    async fn create_translation(
        &self,
        experience_id: &Uuid,
        translation: &NewExperienceTranslationRequest,
    ) -> Result<ExperienceTranslation, AppError>;

    async fn list_translations(&self, experience_id: &Uuid) -> Result<Vec<ExperienceTranslation>, AppError>;

    /// Translations of several experiences into one language
    async fn get_translations(&self, ids: &[Uuid], language: Language) -> Result<Vec<ExperienceTranslation>, AppError>;

    async fn delete_translation(&self, experience_id: &Uuid, language: Language) -> Result<(), AppError>;
}

impl SqlxExperienceRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxExperienceRepo { pool }
    }
}

#[async_trait]
impl ExperienceRepository for SqlxExperienceRepo {
    async fn create_experience(&self, experience: &ExperienceInsert) -> Result<Uuid, AppError> {
        sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO experiences (person_id, company, position, start_date, end_date, is_current, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(experience.person_id)
        .bind(&experience.company)
        .bind(&experience.position)
        .bind(experience.start_date)
        .bind(experience.end_date)
        .bind(experience.is_current)
        .bind(&experience.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| owner_error(e, "Person not found"))
    }

    async fn get_experience_by_id(&self, id: &Uuid) -> Result<Experience, AppError> {
        sqlx::query_as::<_, Experience>(&format!("SELECT {EXPERIENCE_COLUMNS} FROM experiences WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Experience not found".into()))
    }

    async fn list_experiences(&self, person_id: &Uuid) -> Result<Vec<Experience>, AppError> {
        let experiences = sqlx::query_as::<_, Experience>(&format!(
            "SELECT {EXPERIENCE_COLUMNS} FROM experiences WHERE person_id = $1 ORDER BY start_date DESC"
        ))
        .bind(person_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(experiences)
    }

    async fn update_experience(&self, experience: &Experience) -> Result<Experience, AppError> {
        sqlx::query_as::<_, Experience>(&format!(
            r#"
            UPDATE experiences SET
                company = $1, position = $2, start_date = $3, end_date = $4,
                is_current = $5, description = $6
            WHERE id = $7
            RETURNING {EXPERIENCE_COLUMNS}
            "#
        ))
        .bind(&experience.company)
        .bind(&experience.position)
        .bind(experience.start_date)
        .bind(experience.end_date)
        .bind(experience.is_current)
        .bind(&experience.description)
        .bind(experience.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Experience not found".into()))
    }

    async fn delete_experience(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM experiences WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Experience not found".into()));
        }
        Ok(())
    }

    async fn create_translation(
        &self,
        experience_id: &Uuid,
        translation: &NewExperienceTranslationRequest,
    ) -> Result<ExperienceTranslation, AppError> {
        sqlx::query_as::<_, ExperienceTranslation>(&format!(
            r#"
            INSERT INTO experience_translations (experience_id, language, position, company, description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {TRANSLATION_COLUMNS}
            "#
        ))
        .bind(experience_id)
        .bind(translation.language)
        .bind(&translation.position)
        .bind(&translation.company)
        .bind(&translation.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| translation_error(e, "Experience not found"))
    }

    async fn list_translations(&self, experience_id: &Uuid) -> Result<Vec<ExperienceTranslation>, AppError> {
        let translations = sqlx::query_as::<_, ExperienceTranslation>(&format!(
            "SELECT {TRANSLATION_COLUMNS} FROM experience_translations WHERE experience_id = $1 ORDER BY language"
        ))
        .bind(experience_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(translations)
    }

    async fn get_translations(&self, ids: &[Uuid], language: Language) -> Result<Vec<ExperienceTranslation>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let translations = sqlx::query_as::<_, ExperienceTranslation>(&format!(
            "SELECT {TRANSLATION_COLUMNS} FROM experience_translations WHERE experience_id = ANY($1) AND language = $2"
        ))
        .bind(ids)
        .bind(language)
        .fetch_all(&self.pool)
        .await?;

        Ok(translations)
    }

    async fn delete_translation(&self, experience_id: &Uuid, language: Language) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM experience_translations WHERE experience_id = $1 AND language = $2")
            .bind(experience_id)
            .bind(language)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Translation not found".into()));
        }
        Ok(())
    }
}
