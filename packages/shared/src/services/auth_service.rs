use std::sync::Arc;

use argon2::password_hash::PasswordHash;
use argon2::{Argon2, PasswordVerifier};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::models::auth::responses::{LoginResponse, TokenClaims};
use crate::services::errors::auth_service_errors::AuthServiceError;
use crate::services::errors::user_service_errors::UserServiceError;
use crate::services::user_service::UserService;

pub trait AuthServiceTrait: Send + Sync {
    async fn authenticate_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, AuthServiceError>;
    fn verify_token(&self, token: &str) -> Result<TokenClaims, AuthServiceError>;
    fn extract_user_id_from_token(&self, token: &str) -> Result<String, AuthServiceError>;
    fn generate_token(&self, user_id: &str) -> Result<LoginResponse, AuthServiceError>;
}

pub struct AuthService {
    user_service: Arc<UserService>,
    jwt_secret: String,
}

impl AuthService {
    pub fn new(user_service: Arc<UserService>) -> Self {
        let jwt_secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET environment variable must be set");
        AuthService {
            user_service,
            jwt_secret,
        }
    }

    pub fn with_jwt_secret(user_service: Arc<UserService>, jwt_secret: String) -> Self {
        AuthService {
            user_service,
            jwt_secret,
        }
    }
}

impl AuthServiceTrait for AuthService {
    async fn authenticate_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, AuthServiceError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthServiceError::ValidationError(
                "Username or password cannot be empty".to_string(),
            ));
        }

        match self.user_service.get_user_by_username(username).await {
            Ok(user) => {
                let parsed_hash = PasswordHash::new(&user.password_hash)
                    .map_err(|_| AuthServiceError::InvalidCredentials)?;
                if Argon2::default()
                    .verify_password(password.as_bytes(), &parsed_hash)
                    .is_ok()
                {
                    self.generate_token(&user.id)
                } else {
                    Err(AuthServiceError::InvalidCredentials)
                }
            }
            Err(UserServiceError::UserNotFound) => Err(AuthServiceError::InvalidCredentials),
            Err(err) => Err(AuthServiceError::UserServiceError(err)),
        }
    }

    fn generate_token(&self, user_id: &str) -> Result<LoginResponse, AuthServiceError> {
        let now = Utc::now();
        let expires_in = 24 * 60 * 60;
        let claims = TokenClaims {
            sub: user_id.to_string(),
            exp: (now + Duration::hours(24)).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(|e| AuthServiceError::JwtError(e.to_string()))?;

        Ok(LoginResponse {
            token,
            token_type: "Bearer".to_string(),
            expires_in,
        })
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, AuthServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let validation = Validation::default();

        match decode::<TokenClaims>(token, &decoding_key, &validation) {
            Ok(token_data) => Ok(token_data.claims),
            Err(err) => match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    Err(AuthServiceError::ExpiredToken)
                }
                _ => Err(AuthServiceError::InvalidToken),
            },
        }
    }

    fn extract_user_id_from_token(&self, token: &str) -> Result<String, AuthServiceError> {
        let claims = self.verify_token(token)?;
        Ok(claims.sub)
    }
}
