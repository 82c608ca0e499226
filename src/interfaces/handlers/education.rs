use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::{
        choices::Language,
        education::{NewEducationRequest, UpdateEducationRequest},
        translation::NewEducationTranslationRequest,
    },
    errors::AppError,
    use_cases::extractors::AdminClaims,
    AppState,
};

#[instrument(skip(_claims, person_id, state, data))]
pub async fn create_education(
    _claims: AdminClaims,
    person_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<NewEducationRequest>,
) -> Result<impl Responder, AppError> {
    let education = state
        .education_handler
        .create_education(&person_id, data.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(education))
}

#[instrument(skip(person_id, state))]
pub async fn list_educations(
    person_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let educations = state.education_handler.list_educations(&person_id).await?;
    Ok(HttpResponse::Ok().json(educations))
}

#[instrument(skip(education_id, state))]
pub async fn get_education(
    education_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let education = state.education_handler.get_education(&education_id).await?;
    Ok(HttpResponse::Ok().json(education))
}

#[instrument(skip(_claims, education_id, state, data))]
pub async fn update_education(
    _claims: AdminClaims,
    education_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateEducationRequest>,
) -> Result<impl Responder, AppError> {
    let education = state
        .education_handler
        .update_education(&education_id, data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(education))
}

#[instrument(skip(_claims, education_id, state))]
pub async fn delete_education(
    _claims: AdminClaims,
    education_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.education_handler.delete_education(&education_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[instrument(skip(_claims, education_id, state, data))]
pub async fn add_translation(
    _claims: AdminClaims,
    education_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<NewEducationTranslationRequest>,
) -> Result<impl Responder, AppError> {
    let translation = state
        .education_handler
        .add_translation(&education_id, data.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(translation))
}

#[instrument(skip(education_id, state))]
pub async fn list_translations(
    education_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let translations = state.education_handler.list_translations(&education_id).await?;
    Ok(HttpResponse::Ok().json(translations))
}

#[instrument(skip(_claims, path, state))]
pub async fn delete_translation(
    _claims: AdminClaims,
    path: web::Path<(String, Language)>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let (education_id, language) = path.into_inner();
    state
        .education_handler
        .delete_translation(&education_id, language)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
