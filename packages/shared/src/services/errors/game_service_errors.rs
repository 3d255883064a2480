use std::fmt;

#[derive(Debug)]
pub enum GameServiceError {
    ValidationError(String),
    RepositoryError(String),
}

impl fmt::Display for GameServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            GameServiceError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for GameServiceError {}
