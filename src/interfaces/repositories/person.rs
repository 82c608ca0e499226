use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::person::{Person, PersonInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxPersonRepo,
};

const PERSON_COLUMNS: &str = "id, name, email, phone, address, linkedin, github, website, summary, \
    marital_status, military_status, expected_salary, created_at, updated_at";

#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Creates a person and returns its id
    async fn create_person(&self, person: &PersonInsert) -> Result<Uuid, AppError>;

    /// Retrieves a person by id
    async fn get_person_by_id(&self, id: &Uuid) -> Result<Person, AppError>;

    /// Lists every person by name
    async fn list_persons(&self) -> Result<Vec<Person>, AppError>;

    /// Persists every column of an already patched person
    async fn update_person(&self, person: &Person) -> Result<Person, AppError>;

    /// Deletes a person together with everything it owns
    async fn delete_person(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxPersonRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxPersonRepo { pool }
    }
}

#[async_trait]
impl PersonRepository for SqlxPersonRepo {
    async fn create_person(&self, person: &PersonInsert) -> Result<Uuid, AppError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO persons (
                name, email, phone, address, linkedin, github, website,
                summary, marital_status, military_status, expected_salary
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            "#,
        )
        .bind(&person.name)
        .bind(&person.email)
        .bind(&person.phone)
        .bind(&person.address)
        .bind(&person.linkedin)
        .bind(&person.github)
        .bind(&person.website)
        .bind(&person.summary)
        .bind(person.marital_status)
        .bind(person.military_status)
        .bind(person.expected_salary)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn get_person_by_id(&self, id: &Uuid) -> Result<Person, AppError> {
        sqlx::query_as::<_, Person>(&format!("SELECT {PERSON_COLUMNS} FROM persons WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Person not found".into()))
    }

    async fn list_persons(&self) -> Result<Vec<Person>, AppError> {
        let persons = sqlx::query_as::<_, Person>(&format!("SELECT {PERSON_COLUMNS} FROM persons ORDER BY name"))
            .fetch_all(&self.pool)
            .await?;

        Ok(persons)
    }

    async fn update_person(&self, person: &Person) -> Result<Person, AppError> {
        sqlx::query_as::<_, Person>(&format!(
            r#"
            UPDATE persons SET
                name = $1, email = $2, phone = $3, address = $4, linkedin = $5,
                github = $6, website = $7, summary = $8, marital_status = $9,
                military_status = $10, expected_salary = $11, updated_at = NOW()
            WHERE id = $12
            RETURNING {PERSON_COLUMNS}
            "#
        ))
        .bind(&person.name)
        .bind(&person.email)
        .bind(&person.phone)
        .bind(&person.address)
        .bind(&person.linkedin)
        .bind(&person.github)
        .bind(&person.website)
        .bind(&person.summary)
        .bind(person.marital_status)
        .bind(person.military_status)
        .bind(person.expected_salary)
        .bind(person.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Person not found".into()))
    }

    async fn delete_person(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM persons WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Person not found".into()));
        }
        Ok(())
    }
}
