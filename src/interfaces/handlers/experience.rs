use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::{
        choices::Language,
        experience::{NewExperienceRequest, UpdateExperienceRequest},
        translation::NewExperienceTranslationRequest,
    },
    errors::AppError,
    use_cases::extractors::AdminClaims,
    AppState,
};

#[instrument(skip(_claims, person_id, state, data))]
pub async fn create_experience(
    _claims: AdminClaims,
    person_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<NewExperienceRequest>,
) -> Result<impl Responder, AppError> {
    let experience = state
        .experience_handler
        .create_experience(&person_id, data.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(experience))
}

#[instrument(skip(person_id, state))]
pub async fn list_experiences(
    person_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let experiences = state.experience_handler.list_experiences(&person_id).await?;
    Ok(HttpResponse::Ok().json(experiences))
}

#[instrument(skip(experience_id, state))]
pub async fn get_experience(
    experience_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let experience = state.experience_handler.get_experience(&experience_id).await?;
    Ok(HttpResponse::Ok().json(experience))
}

#[instrument(skip(_claims, experience_id, state, data))]
pub async fn update_experience(
    _claims: AdminClaims,
    experience_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateExperienceRequest>,
) -> Result<impl Responder, AppError> {
    let experience = state
        .experience_handler
        .update_experience(&experience_id, data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(experience))
}

#[instrument(skip(_claims, experience_id, state))]
pub async fn delete_experience(
    _claims: AdminClaims,
    experience_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.experience_handler.delete_experience(&experience_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[instrument(skip(_claims, experience_id, state, data))]
pub async fn add_translation(
    _claims: AdminClaims,
    experience_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<NewExperienceTranslationRequest>,
) -> Result<impl Responder, AppError> {
    let translation = state
        .experience_handler
        .add_translation(&experience_id, data.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(translation))
}

#[instrument(skip(experience_id, state))]
pub async fn list_translations(
    experience_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let translations = state.experience_handler.list_translations(&experience_id).await?;
    Ok(HttpResponse::Ok().json(translations))
}

#[instrument(skip(_claims, path, state))]
pub async fn delete_translation(
    _claims: AdminClaims,
    path: web::Path<(String, Language)>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let (experience_id, language) = path.into_inner();
    state
        .experience_handler
        .delete_translation(&experience_id, language)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
