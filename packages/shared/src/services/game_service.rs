use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use crate::models::game::{Game, GameHistoryEntry, GameResult, GameStatus, PlayerStats};
use crate::models::invitation::responses::{ActiveGameSummary, OwnedGameSummary};
use crate::repositories::game_repository::GameRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::errors::game_service_errors::GameServiceError;

pub struct GameService {
    games: Arc<dyn GameRepository + Send + Sync>,
    users: Arc<dyn UserRepository + Send + Sync>,
}

impl GameService {
    pub fn new(
        games: Arc<dyn GameRepository + Send + Sync>,
        users: Arc<dyn UserRepository + Send + Sync>,
    ) -> Self {
        GameService { games, users }
    }

    /// Records the outcome posted by the board page once a live match ends.
    /// The result is computed relative to the submitting user, who the board
    /// page reports as having played white.
    pub async fn record_finished(
        &self,
        user_id: &str,
        winner: &str,
        final_status: &str,
    ) -> Result<Game, GameServiceError> {
        let result = if final_status == "empate" {
            GameResult::Draw
        } else if winner == "blanca" {
            GameResult::Victory
        } else {
            GameResult::Defeat
        };
        let winner_id = match result {
            GameResult::Draw => None,
            _ => Some(user_id.to_string()),
        };

        let game = Game::finished(user_id.to_string(), result, winner_id);
        self.games
            .create_game(&game)
            .await
            .map_err(|e| GameServiceError::RepositoryError(e.to_string()))?;
        info!(game_id = %game.game_id, result = ?game.result, "finished game recorded");
        Ok(game)
    }

    /// Games created by the user, newest first.
    pub async fn games_of(
        &self,
        owner_id: &str,
    ) -> Result<Vec<OwnedGameSummary>, GameServiceError> {
        let mut games = self
            .games
            .find_by_owner(owner_id)
            .await
            .map_err(|e| GameServiceError::RepositoryError(e.to_string()))?;
        games.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let mut summaries = Vec::new();
        for game in games {
            let opponent_name = self.username_of(game.opponent.as_deref()).await?;
            summaries.push(OwnedGameSummary {
                game_id: game.game_id,
                opponent_name,
                status: game.status,
                result: game.result,
                created_at: game.created_at,
                finished_at: game.finished_at,
            });
        }
        Ok(summaries)
    }

    /// Currently playing games the user participates in, either side.
    pub async fn active_games(
        &self,
        user_id: &str,
    ) -> Result<Vec<ActiveGameSummary>, GameServiceError> {
        let mut games = self.participant_games(user_id).await?;
        games.retain(|g| g.status == GameStatus::Playing);

        let mut summaries = Vec::new();
        for game in games {
            let is_owner = game.owner == user_id;
            let other = if is_owner {
                game.opponent.as_deref()
            } else {
                Some(game.owner.as_str())
            };
            let opponent_name = self.username_of(other).await?;
            summaries.push(ActiveGameSummary {
                game_id: game.game_id,
                opponent_name,
                status: game.status,
                is_owner,
                created_at: game.created_at,
            });
        }
        Ok(summaries)
    }

    /// Win/loss/draw statistics and history for the profile page, most
    /// recently finished first.
    pub async fn profile_of(
        &self,
        user_id: &str,
    ) -> Result<(PlayerStats, Vec<GameHistoryEntry>), GameServiceError> {
        let mut games = self.participant_games(user_id).await?;
        games.sort_by(|a, b| {
            b.finished_at
                .unwrap_or(b.created_at)
                .cmp(&a.finished_at.unwrap_or(a.created_at))
        });

        let stats = PlayerStats::from_games(&games);
        let history = games
            .into_iter()
            .map(|game| GameHistoryEntry {
                date: game.finished_at.unwrap_or(game.created_at),
                game_id: game.game_id,
                result: game.result,
            })
            .collect();
        Ok((stats, history))
    }

    async fn participant_games(&self, user_id: &str) -> Result<Vec<Game>, GameServiceError> {
        let owned = self
            .games
            .find_by_owner(user_id)
            .await
            .map_err(|e| GameServiceError::RepositoryError(e.to_string()))?;
        let joined = self
            .games
            .find_by_opponent(user_id)
            .await
            .map_err(|e| GameServiceError::RepositoryError(e.to_string()))?;

        // The two index queries can overlap only if a user played themselves;
        // dedupe by game id all the same.
        let mut by_id: HashMap<String, Game> = HashMap::new();
        for game in owned.into_iter().chain(joined) {
            by_id.insert(game.game_id.clone(), game);
        }
        Ok(by_id.into_values().collect())
    }

    async fn username_of(
        &self,
        user_id: Option<&str>,
    ) -> Result<Option<String>, GameServiceError> {
        match user_id {
            Some(id) => match self.users.get_user_by_id(id).await {
                Ok(user) => Ok(Some(user.username)),
                Err(crate::repositories::errors::user_repository_errors::UserRepositoryError::NotFound) => {
                    Ok(None)
                }
                Err(e) => Err(GameServiceError::RepositoryError(e.to_string())),
            },
            None => Ok(None),
        }
    }
}
