use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    domain::ordering::OrderedSection,
    entities::resume::{
        CopyResumeRequest, NewResumeRequest, ResumeSearchQuery, SetPositionRequest, SetSkillsRequest,
        UpdateResumeRequest,
    },
    errors::AppError,
    use_cases::extractors::AdminClaims,
    AppState,
};

#[instrument(skip(_claims, state, data))]
pub async fn create_resume(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    data: web::Json<NewResumeRequest>,
) -> Result<impl Responder, AppError> {
    let resume = state.resume_handler.create_resume(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(resume))
}

#[instrument(skip(state, query))]
pub async fn search_resumes(
    state: web::Data<AppState>,
    query: web::Query<ResumeSearchQuery>,
) -> Result<impl Responder, AppError> {
    let response = state.resume_handler.search_resumes(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(resume_id, state))]
pub async fn get_resume(
    resume_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let resume = state.resume_handler.get_resume(&resume_id).await?;
    Ok(HttpResponse::Ok().json(resume))
}

#[instrument(skip(_claims, resume_id, state, data))]
pub async fn update_resume(
    _claims: AdminClaims,
    resume_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateResumeRequest>,
) -> Result<impl Responder, AppError> {
    let resume = state
        .resume_handler
        .update_resume(&resume_id, data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(resume))
}

#[instrument(skip(_claims, resume_id, state))]
pub async fn delete_resume(
    _claims: AdminClaims,
    resume_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.resume_handler.delete_resume(&resume_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[instrument(skip(_claims, resume_id, state, data))]
pub async fn copy_resume(
    _claims: AdminClaims,
    resume_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<CopyResumeRequest>,
) -> Result<impl Responder, AppError> {
    let copy = state
        .resume_handler
        .copy_resume(&resume_id, data.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(copy))
}

#[instrument(skip(resume_id, state))]
pub async fn get_document(
    resume_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let document = state.resume_handler.document(&resume_id).await?;
    Ok(HttpResponse::Ok().json(document))
}

/// Experiences or educations of a résumé in display order.
#[instrument(skip(path, state))]
pub async fn get_ordered(
    path: web::Path<(String, OrderedSection)>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let (resume_id, section) = path.into_inner();
    let handler = &state.resume_handler;

    let response = match section {
        OrderedSection::Experiences => HttpResponse::Ok().json(handler.ordered_experiences(&resume_id).await?),
        OrderedSection::Educations => HttpResponse::Ok().json(handler.ordered_educations(&resume_id).await?),
    };
    Ok(response)
}

#[instrument(skip(_claims, path, state, data))]
pub async fn set_position(
    _claims: AdminClaims,
    path: web::Path<(String, OrderedSection, String)>,
    state: web::Data<AppState>,
    data: web::Json<SetPositionRequest>,
) -> Result<impl Responder, AppError> {
    let (resume_id, section, entity_id) = path.into_inner();
    let entry = state
        .resume_handler
        .set_position(&resume_id, section, &entity_id, data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(entry))
}

#[instrument(skip(_claims, path, state))]
pub async fn remove_from_order(
    _claims: AdminClaims,
    path: web::Path<(String, OrderedSection, String)>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let (resume_id, section, entity_id) = path.into_inner();
    state
        .resume_handler
        .remove_from_order(&resume_id, section, &entity_id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[instrument(skip(resume_id, state))]
pub async fn get_skills(
    resume_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let skills = state.resume_handler.selected_skills(&resume_id).await?;
    Ok(HttpResponse::Ok().json(skills))
}

#[instrument(skip(_claims, resume_id, state, data))]
pub async fn set_skills(
    _claims: AdminClaims,
    resume_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<SetSkillsRequest>,
) -> Result<impl Responder, AppError> {
    let skills = state
        .resume_handler
        .set_skills(&resume_id, data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(skills))
}

#[instrument(skip(resume_id, state))]
pub async fn get_relevant_skills(
    resume_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let skills = state.resume_handler.relevant_skills(&resume_id).await?;
    Ok(HttpResponse::Ok().json(skills))
}
