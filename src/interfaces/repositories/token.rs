use jsonwebtoken::TokenData;

use crate::{entities::token::Claims, errors::AuthError};

pub trait TokenServiceRepository: Send + Sync {
    /// Creates a new admin JWT for the given subject
    fn create_jwt(&self, subject: &str) -> Result<String, AuthError>;

    /// Decodes a JWT and returns the claims
    fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError>;

    /// Lifetime of issued tokens, in seconds
    fn expires_in(&self) -> i64;
}
