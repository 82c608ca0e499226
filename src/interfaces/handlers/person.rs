use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::person::{NewPersonRequest, UpdatePersonRequest},
    errors::AppError,
    use_cases::extractors::AdminClaims,
    AppState,
};

#[instrument(skip(_claims, state, data))]
pub async fn create_person(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    data: web::Json<NewPersonRequest>,
) -> Result<impl Responder, AppError> {
    let response = state.person_handler.create_person(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(state))]
pub async fn list_persons(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let persons = state.person_handler.list_persons().await?;
    Ok(HttpResponse::Ok().json(persons))
}

#[instrument(skip(person_id, state))]
pub async fn get_person(
    person_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let person = state.person_handler.get_person(&person_id).await?;
    Ok(HttpResponse::Ok().json(person))
}

#[instrument(skip(_claims, person_id, state, data))]
pub async fn update_person(
    _claims: AdminClaims,
    person_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdatePersonRequest>,
) -> Result<impl Responder, AppError> {
    let person = state
        .person_handler
        .update_person(&person_id, data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(person))
}

#[instrument(skip(_claims, person_id, state))]
pub async fn delete_person(
    _claims: AdminClaims,
    person_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.person_handler.delete_person(&person_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
