pub mod game_repository_errors;
pub mod invitation_repository_errors;
pub mod user_repository_errors;
