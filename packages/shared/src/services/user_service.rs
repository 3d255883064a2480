use std::sync::Arc;

use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};
use argon2::Argon2;
use chrono::NaiveDate;
use tracing::debug;

use crate::models::auth::requests::UpdateProfileRequest;
use crate::models::user::User;
use crate::repositories::errors::user_repository_errors::UserRepositoryError;
use crate::repositories::user_repository::UserRepository;
use crate::services::errors::user_service_errors::UserServiceError;

pub struct UserService {
    repository: Arc<dyn UserRepository + Send + Sync>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository + Send + Sync>) -> Self {
        UserService { repository }
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
        birth_date: Option<NaiveDate>,
    ) -> Result<User, UserServiceError> {
        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(UserServiceError::ValidationError(
                "Username, email and password cannot be empty".to_string(),
            ));
        }

        if self
            .repository
            .username_exists(username)
            .await
            .map_err(|e| UserServiceError::RepositoryError(e.to_string()))?
        {
            return Err(UserServiceError::UserAlreadyExists);
        }
        if self
            .repository
            .email_exists(email)
            .await
            .map_err(|e| UserServiceError::RepositoryError(e.to_string()))?
        {
            return Err(UserServiceError::UserAlreadyExists);
        }

        let password_hash = hash_password(password)?;
        let user = User::new(
            username.to_string(),
            email.to_string(),
            password_hash,
            first_name.to_string(),
            last_name.to_string(),
            birth_date,
        );
        self.repository
            .create_user(&user)
            .await
            .map_err(|e| match e {
                UserRepositoryError::AlreadyExists => UserServiceError::UserAlreadyExists,
                _ => UserServiceError::RepositoryError(e.to_string()),
            })?;
        debug!(username = %user.username, "user registered");
        Ok(user)
    }

    pub async fn get_user_by_id(&self, user_id: &str) -> Result<User, UserServiceError> {
        if user_id.is_empty() {
            return Err(UserServiceError::ValidationError(
                "User ID cannot be empty".to_string(),
            ));
        }
        self.repository
            .get_user_by_id(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => UserServiceError::UserNotFound,
                _ => UserServiceError::RepositoryError(e.to_string()),
            })
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<User, UserServiceError> {
        if username.is_empty() {
            return Err(UserServiceError::ValidationError(
                "Username cannot be empty".to_string(),
            ));
        }
        self.repository
            .get_user_by_username(username)
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => UserServiceError::UserNotFound,
                _ => UserServiceError::RepositoryError(e.to_string()),
            })
    }

    /// Applies profile edits. The email-uniqueness check only runs when the
    /// email actually changed, so users can resubmit their own address.
    pub async fn update_profile(
        &self,
        user_id: &str,
        update: &UpdateProfileRequest,
    ) -> Result<User, UserServiceError> {
        let mut user = self.get_user_by_id(user_id).await?;

        if update.email != user.email
            && self
                .repository
                .email_exists(&update.email)
                .await
                .map_err(|e| UserServiceError::RepositoryError(e.to_string()))?
        {
            return Err(UserServiceError::UserAlreadyExists);
        }

        user.first_name = update.first_name.clone();
        user.last_name = update.last_name.clone();
        user.email = update.email.clone();
        user.birth_date = update.birth_date;
        if let Some(password) = update.password.as_deref().filter(|p| !p.is_empty()) {
            user.password_hash = hash_password(password)?;
        }

        self.repository
            .update_user(&user)
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => UserServiceError::UserNotFound,
                _ => UserServiceError::RepositoryError(e.to_string()),
            })?;
        Ok(user)
    }
}

fn hash_password(password: &str) -> Result<String, UserServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| UserServiceError::HashingError(e.to_string()))
}
