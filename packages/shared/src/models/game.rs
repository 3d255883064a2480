use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Waiting,
    Playing,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameResult {
    Victory,
    Defeat,
    Draw,
    InProgress,
}

/// Persisted record of a match, kept for history and profile statistics.
/// Distinct from the in-memory live match used for move validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub game_id: String,
    pub owner: String,
    pub opponent: Option<String>,
    pub status: GameStatus,
    pub result: GameResult,
    pub winner: Option<String>,
    pub created_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl Game {
    /// A game that just got its second player.
    pub fn started(game_id: String, owner: String, opponent: String) -> Self {
        Game {
            game_id,
            owner,
            opponent: Some(opponent),
            status: GameStatus::Playing,
            result: GameResult::InProgress,
            winner: None,
            created_at: Utc::now(),
            finished_at: None,
        }
    }

    /// A finished game recorded after the fact, as posted by the board page.
    pub fn finished(owner: String, result: GameResult, winner: Option<String>) -> Self {
        Game {
            game_id: Uuid::new_v4().to_string()[..8].to_string(),
            owner,
            opponent: None,
            status: GameStatus::Finished,
            result,
            winner,
            created_at: Utc::now(),
            finished_at: Some(Utc::now()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PlayerStats {
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
}

impl PlayerStats {
    pub fn from_games(games: &[Game]) -> Self {
        let mut stats = PlayerStats::default();
        for game in games {
            match game.result {
                GameResult::Victory => stats.wins += 1,
                GameResult::Defeat => stats.losses += 1,
                GameResult::Draw => stats.draws += 1,
                GameResult::InProgress => {}
            }
        }
        stats
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GameHistoryEntry {
    pub game_id: String,
    pub result: GameResult,
    pub date: DateTime<Utc>,
}
