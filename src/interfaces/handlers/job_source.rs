use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::job_source::{NewJobSourceRequest, UpdateJobSourceRequest},
    errors::AppError,
    use_cases::extractors::AdminClaims,
    AppState,
};

#[instrument(skip(_claims, state, data))]
pub async fn create_job_source(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    data: web::Json<NewJobSourceRequest>,
) -> Result<impl Responder, AppError> {
    let source = state.job_source_handler.create_job_source(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(source))
}

#[instrument(skip(state, query))]
pub async fn list_job_sources(
    state: web::Data<AppState>,
    query: web::Query<std::collections::HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let active_only = query.get("active_only").map_or(false, |v| v == "true");
    let sources = state.job_source_handler.list_job_sources(active_only).await?;
    Ok(HttpResponse::Ok().json(sources))
}

#[instrument(skip(source_id, state))]
pub async fn get_job_source(
    source_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let source = state.job_source_handler.get_job_source(&source_id).await?;
    Ok(HttpResponse::Ok().json(source))
}

#[instrument(skip(_claims, source_id, state, data))]
pub async fn update_job_source(
    _claims: AdminClaims,
    source_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateJobSourceRequest>,
) -> Result<impl Responder, AppError> {
    let source = state
        .job_source_handler
        .update_job_source(&source_id, data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(source))
}

#[instrument(skip(_claims, source_id, state))]
pub async fn delete_job_source(
    _claims: AdminClaims,
    source_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.job_source_handler.delete_job_source(&source_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
