use serde::{Deserialize, Serialize};

use crate::models::game::{GameHistoryEntry, PlayerStats};
use crate::models::user::PublicUser;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub user: PublicUser,
    pub stats: PlayerStats,
    pub history: Vec<GameHistoryEntry>,
}
