use jsonwebtoken::TokenData;
use validator::Validate;

use crate::auth::password::verify_password;
use crate::entities::token::{AuthResponse, Claims, LoginRequest};
use crate::errors::AuthError;
use crate::repositories::token::TokenServiceRepository;
use crate::settings::AppConfig;

/// Issues admin tokens for the single configured administrator.
pub struct AuthHandler<T>
where
    T: TokenServiceRepository,
{
    pub token_service: T,
    admin_username: String,
    admin_password_hash: String,
}

impl<T> AuthHandler<T>
where
    T: TokenServiceRepository,
{
    pub fn new(config: &AppConfig, token_service: T) -> Self {
        AuthHandler {
            token_service,
            admin_username: config.admin_username.clone(),
            admin_password_hash: config.admin_password_hash.clone(),
        }
    }

    /// Checks the admin credentials and returns a bearer token
    pub fn login(&self, request: LoginRequest) -> Result<AuthResponse, AuthError> {
        request.validate()?;

        if request.username.trim() != self.admin_username {
            tracing::warn!("Login attempt with unknown username");
            return Err(AuthError::WrongCredentials);
        }

        let is_password_valid = verify_password(&request.password, &self.admin_password_hash)?;
        if !is_password_valid {
            tracing::warn!("Login attempt with wrong password");
            return Err(AuthError::WrongCredentials);
        }

        let access_token = self.token_service.create_jwt(&self.admin_username).map_err(|e| {
            tracing::warn!("Failed to create JWT: {}", e);
            AuthError::TokenCreation
        })?;

        tracing::info!("Admin logged in successfully");
        Ok(AuthResponse::new(access_token, self.token_service.expires_in()))
    }

    pub fn decode(&self, token: &str) -> Result<TokenData<Claims>, AuthError> {
        self.token_service.decode_jwt(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{jwt::JwtService, password::hash_password};
    use crate::settings::tests::test_config;

    fn handler() -> AuthHandler<JwtService> {
        let mut config = test_config();
        config.admin_password_hash = hash_password("s3cret-pass").unwrap();
        AuthHandler::new(&config, JwtService::new(&config))
    }

    fn login(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.into(),
            password: password.into(),
        }
    }

    #[test]
    fn correct_credentials_issue_admin_token() {
        let handler = handler();
        let response = handler.login(login("admin", "s3cret-pass")).unwrap();

        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 3600);
        let claims = handler.decode(&response.access_token).unwrap().claims;
        assert_eq!(claims.sub, "admin");
        assert!(claims.admin);
    }

    #[test]
    fn wrong_password_or_username_is_rejected() {
        let handler = handler();
        assert!(matches!(handler.login(login("admin", "nope")), Err(AuthError::WrongCredentials)));
        assert!(matches!(handler.login(login("root", "s3cret-pass")), Err(AuthError::WrongCredentials)));
    }

    #[test]
    fn empty_fields_are_missing_credentials() {
        assert!(matches!(handler().login(login("", "")), Err(AuthError::MissingCredentials)));
    }
}
