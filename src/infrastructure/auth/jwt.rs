use jsonwebtoken::{encode, Header, decode, Validation, TokenData, Algorithm};
use chrono::{Utc, Duration};

use crate::entities::token::Claims;
use crate::repositories::token::TokenServiceRepository;
use crate::settings::{AppConfig, JwtKeys};
use crate::errors::AuthError;

const JWT_ALGORITHM: Algorithm = Algorithm::HS512;

#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    access_expiration: Duration,
}

impl JwtService {
    pub fn new(config: &AppConfig) -> Self {
        JwtService {
            keys: JwtKeys::from(config),
            access_expiration: Duration::minutes(config.jwt_expiration_minutes),
        }
    }

    pub fn create_jwt(&self, subject: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = (now + self.access_expiration).timestamp() as usize;

        let claims = Claims {
            sub: subject.to_string(),
            admin: true,
            exp,
            iat: now.timestamp() as usize,
        };

        encode(&Header::new(JWT_ALGORITHM), &claims, &self.keys.encoding).map_err(AuthError::from)
    }

    pub fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError> {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.validate_exp = true;

        decode::<Claims>(token, &self.keys.decoding, &validation).map_err(AuthError::from)
    }
}

impl TokenServiceRepository for JwtService {
    fn create_jwt(&self, subject: &str) -> Result<String, AuthError> {
        self.create_jwt(subject)
    }

    fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError> {
        self.decode_jwt(token)
    }

    fn expires_in(&self) -> i64 {
        self.access_expiration.num_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::tests::test_config;

    #[test]
    fn issued_token_round_trips_claims() {
        let service = JwtService::new(&test_config());
        let token = service.create_jwt("admin").unwrap();

        let claims = service.decode_jwt(&token).unwrap().claims;
        assert_eq!(claims.sub, "admin");
        assert!(claims.admin);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn tampered_token_is_rejected() {
        let service = JwtService::new(&test_config());
        let mut token = service.create_jwt("admin").unwrap();
        token.push('x');

        assert!(matches!(service.decode_jwt(&token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let service = JwtService::new(&test_config());
        let mut other_config = test_config();
        other_config.jwt_secret = "another_secret_that_is_long_enough_for_hs512".into();
        let other = JwtService::new(&other_config);

        let token = other.create_jwt("admin").unwrap();
        assert!(service.decode_jwt(&token).is_err());
    }
}
