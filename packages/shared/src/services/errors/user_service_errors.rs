use std::fmt;

#[derive(Debug)]
pub enum UserServiceError {
    UserAlreadyExists,
    UserNotFound,
    ValidationError(String),
    HashingError(String),
    RepositoryError(String),
}

impl fmt::Display for UserServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UserServiceError::UserAlreadyExists => write!(f, "User already exists"),
            UserServiceError::UserNotFound => write!(f, "User not found"),
            UserServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            UserServiceError::HashingError(msg) => write!(f, "Password hashing error: {}", msg),
            UserServiceError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for UserServiceError {}
