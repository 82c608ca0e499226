use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::{
        choices::Language,
        education::{Education, EducationInsert},
        translation::{EducationTranslation, NewEducationTranslationRequest},
    },
    errors::AppError,
    repositories::sqlx_repo::{owner_error, translation_error, SqlxEducationRepo},
};

const EDUCATION_COLUMNS: &str = "id, person_id, degree, field, university, start_date, end_date, is_current, gpa";
const TRANSLATION_COLUMNS: &str = "id, education_id, language, degree, field, university";

#[async_trait]
pub trait EducationRepository: Send + Sync {
    async fn create_education(&self, education: &EducationInsert) -> Result<Uuid, AppError>;

    async fn get_education_by_id(&self, id: &Uuid) -> Result<Education, AppError>;

    /// Lists a person's education, newest first
    async fn list_educations(&self, person_id: &Uuid) -> Result<Vec<Education>, AppError>;

    async fn update_education(&self, education: &Education) -> Result<Education, AppError>;

    async fn delete_education(&self, id: &Uuid) -> Result<(), AppError>;

    async fn create_translation(
        &self,
        education_id: &Uuid,
        translation: &NewEducationTranslationRequest,
    ) -> Result<EducationTranslation, AppError>;

    async fn list_translations(&self, education_id: &Uuid) -> Result<Vec<EducationTranslation>, AppError>;

    async fn get_translations(&self, ids: &[Uuid], language: Language) -> Result<Vec<EducationTranslation>, AppError>;

    async fn delete_translation(&self, education_id: &Uuid, language: Language) -> Result<(), AppError>;
}

impl SqlxEducationRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxEducationRepo { pool }
    }
}

#[async_trait]
impl EducationRepository for SqlxEducationRepo {
    async fn create_education(&self, education: &EducationInsert) -> Result<Uuid, AppError> {
        sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO educations (person_id, degree, field, university, start_date, end_date, is_current, gpa)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(education.person_id)
        .bind(&education.degree)
        .bind(&education.field)
        .bind(&education.university)
        .bind(education.start_date)
        .bind(education.end_date)
        .bind(education.is_current)
        .bind(education.gpa)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| owner_error(e, "Person not found"))
    }

    async fn get_education_by_id(&self, id: &Uuid) -> Result<Education, AppError> {
        sqlx::query_as::<_, Education>(&format!("SELECT {EDUCATION_COLUMNS} FROM educations WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Education not found".into()))
    }

    async fn list_educations(&self, person_id: &Uuid) -> Result<Vec<Education>, AppError> {
        let educations = sqlx::query_as::<_, Education>(&format!(
            "SELECT {EDUCATION_COLUMNS} FROM educations WHERE person_id = $1 ORDER BY start_date DESC"
        ))
        .bind(person_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(educations)
    }

    async fn update_education(&self, education: &Education) -> Result<Education, AppError> {
        sqlx::query_as::<_, Education>(&format!(
            r#"
            UPDATE educations SET
                degree = $1, field = $2, university = $3, start_date = $4,
                end_date = $5, is_current = $6, gpa = $7
            WHERE id = $8
            RETURNING {EDUCATION_COLUMNS}
            "#
        ))
        .bind(&education.degree)
        .bind(&education.field)
        .bind(&education.university)
        .bind(education.start_date)
        .bind(education.end_date)
        .bind(education.is_current)
        .bind(education.gpa)
        .bind(education.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Education not found".into()))
    }

    async fn delete_education(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM educations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Education not found".into()));
        }
        Ok(())
    }

    async fn create_translation(
        &self,
        education_id: &Uuid,
        translation: &NewEducationTranslationRequest,
    ) -> Result<EducationTranslation, AppError> {
        sqlx::query_as::<_, EducationTranslation>(&format!(
            r#"
            INSERT INTO education_translations (education_id, language, degree, field, university)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {TRANSLATION_COLUMNS}
            "#
        ))
        .bind(education_id)
        .bind(translation.language)
        .bind(&translation.degree)
        .bind(&translation.field)
        .bind(&translation.university)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| translation_error(e, "Education not found"))
    }

    async fn list_translations(&self, education_id: &Uuid) -> Result<Vec<EducationTranslation>, AppError> {
        let translations = sqlx::query_as::<_, EducationTranslation>(&format!(
            "SELECT {TRANSLATION_COLUMNS} FROM education_translations WHERE education_id = $1 ORDER BY language"
        ))
        .bind(education_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(translations)
    }

    async fn get_translations(&self, ids: &[Uuid], language: Language) -> Result<Vec<EducationTranslation>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let translations = sqlx::query_as::<_, EducationTranslation>(&format!(
            "SELECT {TRANSLATION_COLUMNS} FROM education_translations WHERE education_id = ANY($1) AND language = $2"
        ))
        .bind(ids)
        .bind(language)
        .fetch_all(&self.pool)
        .await?;

        Ok(translations)
    }

    async fn delete_translation(&self, education_id: &Uuid, language: Language) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM education_translations WHERE education_id = $1 AND language = $2")
            .bind(education_id)
            .bind(language)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Translation not found".into()));
        }
        Ok(())
    }
}
