//! Runs against a real PostgreSQL database:
//! `TEST_DATABASE_URL=postgres://... cargo test --test db_tests -- --ignored`


use resume_manager::{
    auth::password::hash_password,
    db::postgres::{create_pool, run_migrations},
    domain::ordering::OrderedSection,
    entities::{
        choices::{JobCategory, Language},
        resume::{CopyResumeRequest, ResumeSearchQuery, SetPositionRequest, SetSkillsRequest},
        translation::NewSkillTranslationRequest,
    },
    errors::AppError,
    repositories::resume::ResumeRepository,
    AppState,
};
use test_utils::{new_resume_request, test_config};
use uuid::Uuid;

async fn state() -> AppState {
    let config = test_config(hash_password("db-test-password").unwrap());
    let pool = create_pool(&config.database_url).await.expect("Failed to create test DB pool");
    run_migrations(&pool).await.expect("Failed to run migrations");
    AppState::new(&config, pool)
}

async fn seed_person(state: &AppState) -> Uuid {
    let request = serde_json::from_value(serde_json::json!({
        "name": "Sara Ahmadi",
        "email": "sara@example.com",
        "phone": "09121234567"
    }))
    .unwrap();
    state.person_handler.create_person(request).await.unwrap().id
}

#[actix_rt::test]
#[ignore]
async fn copy_preserves_order_ties_and_skills_in_postgres() {
    let state = state().await;
    let person = seed_person(&state).await;
    let pid = person.to_string();

    let mut experiences = Vec::new();
    for (company, start) in [("Digikala", "2018-02-01"), ("Snapp", "2020-05-01"), ("Cafe Bazaar", "2022-09-01")] {
        let request = serde_json::from_value(serde_json::json!({
            "company": company,
            "position": "Developer",
            "start_date": start,
            "description": "APIs"
        }))
        .unwrap();
        experiences.push(state.experience_handler.create_experience(&pid, request).await.unwrap().id);
    }
    let skill_request = serde_json::from_value(serde_json::json!({ "name": "Rust", "category": "programming" })).unwrap();
    let skill = state.skill_handler.create_skill(&pid, skill_request).await.unwrap().id;

    let resume = state
        .resume_handler
        .create_resume(new_resume_request(person, "Divar", JobCategory::Fullstack))
        .await
        .unwrap();
    let rid = resume.id.to_string();

    for (entity, position) in experiences.iter().zip([5, 1, 5]) {
        state
            .resume_handler
            .set_position(&rid, OrderedSection::Experiences, &entity.to_string(), SetPositionRequest { position })
            .await
            .unwrap();
    }
    state
        .resume_handler
        .set_skills(&rid, SetSkillsRequest { skill_ids: vec![skill] })
        .await
        .unwrap();

    let copy = state
        .resume_handler
        .copy_resume(&rid, CopyResumeRequest::new("Snapp CV", "Snapp"))
        .await
        .unwrap();

    let second = state
        .resume_handler
        .copy_resume(&copy.id.to_string(), CopyResumeRequest::new("Tapsi CV", "Tapsi"))
        .await
        .unwrap();
    assert_eq!(copy.copied_from, Some(resume.id));
    assert_eq!(second.copied_from, Some(copy.id));
    assert_eq!(copy.company_match_reason, "");

    let expected = vec![experiences[1], experiences[0], experiences[2]];
    for generation in [&copy, &second] {
        let ordered: Vec<Uuid> = state
            .resume_handler
            .ordered_experiences(&generation.id.to_string())
            .await
            .unwrap()
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ordered, expected);

        let order = state
            .resume_handler
            .resume_repo
            .get_order(&generation.id, OrderedSection::Experiences)
            .await
            .unwrap();
        let positions: Vec<Option<i32>> = expected.iter().map(|id| order.position_of(*id)).collect();
        assert_eq!(positions, vec![Some(1), Some(5), Some(5)]);

        let skills = state.resume_handler.selected_skills(&generation.id.to_string()).await.unwrap();
        assert_eq!(skills.len(), 1);
    }

    let found = state
        .resume_handler
        .search_resumes(ResumeSearchQuery { company_search: Some("snapp cv".into()), ..Default::default() })
        .await
        .unwrap();
    assert!(found.resumes.iter().any(|r| r.id == copy.id));

    state.person_handler.delete_person(&pid).await.unwrap();
    assert!(matches!(
        state.resume_handler.get_resume(&copy.id.to_string()).await,
        Err(AppError::NotFound(_))
    ));
}

#[actix_rt::test]
#[ignore]
async fn duplicate_translation_is_a_conflict_in_postgres() {
    let state = state().await;
    let person = seed_person(&state).await;
    let pid = person.to_string();

    let skill_request = serde_json::from_value(serde_json::json!({ "name": "پایتون" })).unwrap();
    let skill = state.skill_handler.create_skill(&pid, skill_request).await.unwrap().id.to_string();

    let translation = || NewSkillTranslationRequest { language: Language::En, name: "Python".into() };
    state.skill_handler.add_translation(&skill, translation()).await.unwrap();

    let err = state.skill_handler.add_translation(&skill, translation()).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    state.person_handler.delete_person(&pid).await.unwrap();
}
