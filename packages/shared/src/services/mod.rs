pub mod auth_service;
pub mod chess_service;
pub mod errors;
pub mod game_service;
pub mod invitation_service;
pub mod match_service;
pub mod user_service;
