use std::fmt;

#[derive(Debug)]
pub enum InvitationServiceError {
    InvitationNotFound,
    OwnGame,
    NotInvited,
    NotOwner,
    GameInProgress,
    UserNotFound,
    ValidationError(String),
    RepositoryError(String),
}

impl fmt::Display for InvitationServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvitationServiceError::InvitationNotFound => {
                write!(f, "Invitation not found or expired")
            }
            InvitationServiceError::OwnGame => write!(f, "Cannot join your own game"),
            InvitationServiceError::NotInvited => {
                write!(f, "Invitation is addressed to another player")
            }
            InvitationServiceError::NotOwner => write!(f, "Only the game owner may do this"),
            InvitationServiceError::GameInProgress => {
                write!(f, "Game is in progress with an opponent")
            }
            InvitationServiceError::UserNotFound => write!(f, "User not found"),
            InvitationServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            InvitationServiceError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for InvitationServiceError {}
