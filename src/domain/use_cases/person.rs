use validator::Validate;

use crate::{
    entities::person::{NewPersonRequest, Person, PersonCreatedResponse, UpdatePersonRequest},
    errors::AppError,
    repositories::person::PersonRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct PersonHandler<R>
where
    R: PersonRepository,
{
    pub person_repo: R,
}

impl<R> PersonHandler<R>
where
    R: PersonRepository,
{
    pub fn new(person_repo: R) -> Self {
        PersonHandler { person_repo }
    }

    pub async fn create_person(&self, request: NewPersonRequest) -> Result<PersonCreatedResponse, AppError> {
        request.validate()?;

        let insert = request.prepare_for_insert();
        let id = self.person_repo.create_person(&insert).await?;

        tracing::info!(person_id = %id, "Person created");
        Ok(PersonCreatedResponse {
            id,
            message: "Person created successfully".to_string(),
        })
    }

    pub async fn get_person(&self, id: &str) -> Result<Person, AppError> {
        let valid_id = valid_uuid(id)?;
        self.person_repo.get_person_by_id(&valid_id).await
    }

    pub async fn list_persons(&self) -> Result<Vec<Person>, AppError> {
        self.person_repo.list_persons().await
    }

    /// Patches a person: absent fields stay, `null` clears optional fields
    pub async fn update_person(&self, id: &str, request: UpdatePersonRequest) -> Result<Person, AppError> {
        request.validate()?;
        let valid_id = valid_uuid(id)?;

        let request = request.sanitized();
        let mut person = self.person_repo.get_person_by_id(&valid_id).await?;
        request.apply(&mut person);

        self.person_repo.update_person(&person).await
    }

    pub async fn delete_person(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.person_repo.delete_person(&valid_id).await?;

        tracing::info!(person_id = %valid_id, "Person deleted with all owned records");
        Ok(())
    }
}
