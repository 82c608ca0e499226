use async_trait::async_trait;
use chrono::Utc;
use mockall::{mock, predicate::*};
use resume_manager::{
    entities::job_source::{JobSource, JobSourceInsert, NewJobSourceRequest, UpdateJobSourceRequest},
    errors::AppError,
    repositories::job_source::JobSourceRepository,
    use_cases::job_source::JobSourceHandler,
};
use uuid::Uuid;

mock! {
    pub JobSourceRepo {}

    #[async_trait]
    impl JobSourceRepository for JobSourceRepo {
        async fn create_job_source(&self, source: &JobSourceInsert) -> Result<JobSource, AppError>;
        async fn get_job_source_by_id(&self, id: &Uuid) -> Result<JobSource, AppError>;
        async fn list_job_sources(&self, active_only: bool) -> Result<Vec<JobSource>, AppError>;
        async fn update_job_source(&self, source: &JobSource) -> Result<JobSource, AppError>;
        async fn delete_job_source(&self, id: &Uuid) -> Result<(), AppError>;
    }
}

fn stored(insert: &JobSourceInsert) -> JobSource {
    JobSource {
        id: Uuid::new_v4(),
        name: insert.name.clone(),
        slug: insert.slug.clone(),
        website_url: insert.website_url.clone(),
        description: insert.description.clone(),
        is_active: insert.is_active,
        created_at: Utc::now(),
    }
}

fn existing(id: Uuid) -> JobSource {
    JobSource {
        id,
        name: "Jobinja".into(),
        slug: "jobinja".into(),
        website_url: Some("https://jobinja.ir".into()),
        description: String::new(),
        is_active: true,
        created_at: Utc::now(),
    }
}

fn new_request(json: serde_json::Value) -> NewJobSourceRequest {
    serde_json::from_value(json).unwrap()
}

#[actix_rt::test]
async fn create_derives_slug_from_name() {
    let mut repo = MockJobSourceRepo::new();
    repo.expect_create_job_source()
        .withf(|insert| insert.slug == "e-estekhdam-com" && insert.name == "E-Estekhdam com")
        .times(1)
        .returning(|insert| Ok(stored(insert)));

    let handler = JobSourceHandler::new(repo);
    let source = handler
        .create_job_source(new_request(serde_json::json!({ "name": "  E-Estekhdam com " })))
        .await
        .unwrap();

    assert_eq!(source.slug, "e-estekhdam-com");
    assert!(source.is_active);
}

#[actix_rt::test]
async fn create_rejects_bad_website_before_touching_the_store() {
    let mut repo = MockJobSourceRepo::new();
    repo.expect_create_job_source().times(0);

    let handler = JobSourceHandler::new(repo);
    let err = handler
        .create_job_source(new_request(serde_json::json!({ "name": "Jobvision", "website_url": "not a url" })))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::ValidationError(_)));
}

#[actix_rt::test]
async fn duplicate_slug_surfaces_as_conflict() {
    let mut repo = MockJobSourceRepo::new();
    repo.expect_create_job_source()
        .returning(|_| Err(AppError::Conflict("Slug already exists".into())));

    let handler = JobSourceHandler::new(repo);
    let err = handler
        .create_job_source(new_request(serde_json::json!({ "name": "Jobinja" })))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
}

#[actix_rt::test]
async fn update_normalizes_slug_and_clears_website() {
    let id = Uuid::new_v4();
    let mut repo = MockJobSourceRepo::new();
    repo.expect_get_job_source_by_id()
        .with(eq(id))
        .times(1)
        .returning(|id| Ok(existing(*id)));
    repo.expect_update_job_source()
        .withf(|source| source.slug == "jobinja-careers" && source.website_url.is_none() && !source.is_active)
        .times(1)
        .returning(|source| Ok(source.clone()));

    let handler = JobSourceHandler::new(repo);
    let request: UpdateJobSourceRequest =
        serde_json::from_str(r#"{"slug": "Jobinja Careers", "website_url": null, "is_active": false}"#).unwrap();
    let updated = handler.update_job_source(&id.to_string(), request).await.unwrap();

    assert_eq!(updated.name, "Jobinja");
    assert_eq!(updated.slug, "jobinja-careers");
}

#[actix_rt::test]
async fn update_rejects_slug_without_letters_or_digits() {
    let mut repo = MockJobSourceRepo::new();
    repo.expect_get_job_source_by_id().times(0);
    repo.expect_update_job_source().times(0);

    let handler = JobSourceHandler::new(repo);
    let request: UpdateJobSourceRequest = serde_json::from_str(r#"{"slug": "!!!"}"#).unwrap();
    let err = handler
        .update_job_source(&Uuid::new_v4().to_string(), request)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[actix_rt::test]
async fn malformed_id_never_reaches_the_store() {
    let mut repo = MockJobSourceRepo::new();
    repo.expect_delete_job_source().times(0);

    let handler = JobSourceHandler::new(repo);
    let err = handler.delete_job_source("42").await.unwrap_err();

    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[actix_rt::test]
async fn list_passes_the_active_filter_through() {
    let mut repo = MockJobSourceRepo::new();
    repo.expect_list_job_sources()
        .with(eq(true))
        .times(1)
        .returning(|_| Ok(vec![existing(Uuid::new_v4())]));

    let handler = JobSourceHandler::new(repo);
    assert_eq!(handler.list_job_sources(true).await.unwrap().len(), 1);
}
