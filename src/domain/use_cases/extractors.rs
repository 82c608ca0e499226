use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::{entities::token::Claims, errors::AuthError};

/// Extractor for admin claims placed on the request by `AuthMiddleware`.
/// Returns 401 when no valid token was sent and 403 when the token is not an
/// admin token.
/// Usage: add `_claims: AdminClaims` as a parameter to a write handler.
#[derive(Debug)]
pub struct AdminClaims(pub Claims);

impl FromRequest for AdminClaims {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<Claims>() {
            Some(claims) if claims.admin => ready(Ok(AdminClaims(claims.clone()))),
            Some(_) => ready(Err(AuthError::Forbidden("Admin access required".into()).into())),
            None => ready(Err(AuthError::MissingCredentials.into())),
        }
    }
}
