pub mod auth;
pub mod board;
pub mod game;
pub mod invitation;
pub mod live;
pub mod user;
