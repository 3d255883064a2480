pub mod auth;
pub mod game;
pub mod health;
pub mod invitation;
pub mod live;
pub mod user;
