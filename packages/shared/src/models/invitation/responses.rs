use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::board::Color;
use crate::models::game::{GameResult, GameStatus};
use crate::models::invitation::InvitationStatus;

#[derive(Debug, Serialize)]
pub struct CreateGameResponse {
    pub success: bool,
    pub message: String,
    pub game_id: String,
    pub invitation_id: String,
    pub owner_color: Color,
}

#[derive(Debug, Serialize)]
pub struct JoinGameResponse {
    pub success: bool,
    pub game_id: String,
    pub opponent_name: String,
    pub player_color: Color,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
}

/// A pending invitation as listed on the private-games page.
#[derive(Debug, Serialize)]
pub struct PendingInvitationSummary {
    pub invitation_id: String,
    pub owner_name: String,
    pub owner_color: Color,
    pub created_at: DateTime<Utc>,
}

/// An active game the user participates in.
#[derive(Debug, Serialize)]
pub struct ActiveGameSummary {
    pub game_id: String,
    pub opponent_name: Option<String>,
    pub status: GameStatus,
    pub is_owner: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct PrivateGamesResponse {
    pub pending_invitations: Vec<PendingInvitationSummary>,
    pub active_games: Vec<ActiveGameSummary>,
}

/// An invitation the user created, as listed on the my-games page.
#[derive(Debug, Serialize)]
pub struct OwnedInvitationSummary {
    pub invitation_id: String,
    pub game_id: String,
    pub status: InvitationStatus,
    pub owner_color: Color,
    pub invited_email: Option<String>,
    pub accepted_by_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_expired: bool,
}

#[derive(Debug, Serialize)]
pub struct OwnedGameSummary {
    pub game_id: String,
    pub opponent_name: Option<String>,
    pub status: GameStatus,
    pub result: GameResult,
    pub created_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct MyGamesResponse {
    pub invitations: Vec<OwnedInvitationSummary>,
    pub games: Vec<OwnedGameSummary>,
}
