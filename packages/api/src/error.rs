use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use shared::models::auth::responses::ErrorResponse;
use shared::services::errors::{
    auth_service_errors::AuthServiceError, game_service_errors::GameServiceError,
    invitation_service_errors::InvitationServiceError, user_service_errors::UserServiceError,
};

#[derive(Debug)]
pub enum ApiError {
    UserService(UserServiceError),
    AuthService(AuthServiceError),
    InvitationService(InvitationServiceError),
    GameService(GameServiceError),
}

impl From<UserServiceError> for ApiError {
    fn from(error: UserServiceError) -> Self {
        ApiError::UserService(error)
    }
}

impl From<AuthServiceError> for ApiError {
    fn from(error: AuthServiceError) -> Self {
        ApiError::AuthService(error)
    }
}

impl From<InvitationServiceError> for ApiError {
    fn from(error: InvitationServiceError) -> Self {
        ApiError::InvitationService(error)
    }
}

impl From<GameServiceError> for ApiError {
    fn from(error: GameServiceError) -> Self {
        ApiError::GameService(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::UserService(UserServiceError::UserAlreadyExists) => {
                (StatusCode::CONFLICT, self.to_message())
            }
            ApiError::UserService(UserServiceError::UserNotFound) => {
                (StatusCode::NOT_FOUND, self.to_message())
            }
            ApiError::UserService(UserServiceError::ValidationError(_)) => {
                (StatusCode::BAD_REQUEST, self.to_message())
            }
            ApiError::UserService(
                UserServiceError::RepositoryError(_) | UserServiceError::HashingError(_),
            ) => (StatusCode::INTERNAL_SERVER_ERROR, generic_error()),

            ApiError::AuthService(AuthServiceError::InvalidCredentials) => {
                (StatusCode::UNAUTHORIZED, self.to_message())
            }
            ApiError::AuthService(AuthServiceError::ValidationError(_)) => {
                (StatusCode::BAD_REQUEST, self.to_message())
            }
            ApiError::AuthService(
                AuthServiceError::InvalidToken | AuthServiceError::ExpiredToken,
            ) => (StatusCode::UNAUTHORIZED, self.to_message()),
            ApiError::AuthService(
                AuthServiceError::JwtError(_) | AuthServiceError::UserServiceError(_),
            ) => (StatusCode::INTERNAL_SERVER_ERROR, generic_error()),

            ApiError::InvitationService(InvitationServiceError::InvitationNotFound) => {
                (StatusCode::NOT_FOUND, self.to_message())
            }
            ApiError::InvitationService(
                InvitationServiceError::OwnGame
                | InvitationServiceError::NotInvited
                | InvitationServiceError::NotOwner
                | InvitationServiceError::GameInProgress,
            ) => (StatusCode::FORBIDDEN, self.to_message()),
            ApiError::InvitationService(InvitationServiceError::ValidationError(_)) => {
                (StatusCode::BAD_REQUEST, self.to_message())
            }
            ApiError::InvitationService(
                InvitationServiceError::RepositoryError(_)
                | InvitationServiceError::UserNotFound,
            ) => (StatusCode::INTERNAL_SERVER_ERROR, generic_error()),

            ApiError::GameService(GameServiceError::ValidationError(_)) => {
                (StatusCode::BAD_REQUEST, self.to_message())
            }
            ApiError::GameService(GameServiceError::RepositoryError(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, generic_error())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl ApiError {
    fn to_message(&self) -> String {
        match self {
            ApiError::UserService(e) => e.to_string(),
            ApiError::AuthService(e) => e.to_string(),
            ApiError::InvitationService(e) => e.to_string(),
            ApiError::GameService(e) => e.to_string(),
        }
    }
}

fn generic_error() -> String {
    "Internal server error".to_string()
}
