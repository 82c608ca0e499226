use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    entities::{
        choices::Language,
        skill::{NewSkillRequest, UpdateSkillRequest},
        translation::NewSkillTranslationRequest,
    },
    errors::AppError,
    use_cases::extractors::AdminClaims,
    AppState,
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SkillListQuery {
    pub active_only: bool,
}

#[instrument(skip(_claims, person_id, state, data))]
pub async fn create_skill(
    _claims: AdminClaims,
    person_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<NewSkillRequest>,
) -> Result<impl Responder, AppError> {
    let skill = state.skill_handler.create_skill(&person_id, data.into_inner()).await?;
    Ok(HttpResponse::Created().json(skill))
}

#[instrument(skip(person_id, state, query))]
pub async fn list_skills(
    person_id: web::Path<String>,
    state: web::Data<AppState>,
    query: web::Query<SkillListQuery>,
) -> Result<impl Responder, AppError> {
    let skills = state.skill_handler.list_skills(&person_id, query.active_only).await?;
    Ok(HttpResponse::Ok().json(skills))
}

#[instrument(skip(skill_id, state))]
pub async fn get_skill(
    skill_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let skill = state.skill_handler.get_skill(&skill_id).await?;
    Ok(HttpResponse::Ok().json(skill))
}

#[instrument(skip(_claims, skill_id, state, data))]
pub async fn update_skill(
    _claims: AdminClaims,
    skill_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateSkillRequest>,
) -> Result<impl Responder, AppError> {
    let skill = state.skill_handler.update_skill(&skill_id, data.into_inner()).await?;
    Ok(HttpResponse::Ok().json(skill))
}

#[instrument(skip(_claims, skill_id, state))]
pub async fn delete_skill(
    _claims: AdminClaims,
    skill_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.skill_handler.delete_skill(&skill_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[instrument(skip(_claims, skill_id, state, data))]
pub async fn add_translation(
    _claims: AdminClaims,
    skill_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<NewSkillTranslationRequest>,
) -> Result<impl Responder, AppError> {
    let translation = state
        .skill_handler
        .add_translation(&skill_id, data.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(translation))
}

#[instrument(skip(skill_id, state))]
pub async fn list_translations(
    skill_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let translations = state.skill_handler.list_translations(&skill_id).await?;
    Ok(HttpResponse::Ok().json(translations))
}

#[instrument(skip(_claims, path, state))]
pub async fn delete_translation(
    _claims: AdminClaims,
    path: web::Path<(String, Language)>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let (skill_id, language) = path.into_inner();
    state.skill_handler.delete_translation(&skill_id, language).await?;
    Ok(HttpResponse::NoContent().finish())
}
