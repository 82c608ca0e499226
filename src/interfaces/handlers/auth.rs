use actix_web::{get, post, web, HttpResponse, Responder};
use tracing::instrument;

use crate::entities::token::LoginRequest;
use crate::errors::AuthError;
use crate::use_cases::extractors::AdminClaims;
use crate::AppState;

#[instrument(skip(state, credentials))]
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    credentials: web::Json<LoginRequest>,
) -> Result<impl Responder, AuthError> {
    let auth_response = state.auth_handler.login(credentials.into_inner())?;
    Ok(HttpResponse::Ok().json(auth_response))
}

/// Echoes the subject of a valid admin token.
#[get("/me")]
pub async fn me(admin: AdminClaims) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "username": admin.0.sub,
        "admin": admin.0.admin,
    }))
}
