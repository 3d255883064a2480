use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use tracing::error;

use crate::{error::ApiError, middleware::auth::AuthenticatedUser, state::AppState};
use shared::models::invitation::responses::{MyGamesResponse, StatusResponse};
use shared::models::live::requests::FinishRequest;
use shared::models::live::responses::FinishResponse;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/game/finish", post(finish_game))
        .route("/my-games", get(my_games))
        .route("/delete-game/{game_id}", delete(delete_game))
}

async fn finish_game(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Json(payload): Json<FinishRequest>,
) -> Result<Json<FinishResponse>, ApiError> {
    state
        .game_service
        .record_finished(
            &authenticated_user.user_id,
            &payload.winner,
            &payload.final_status,
        )
        .await
        .map_err(|e| {
            error!(
                "Failed to record finished game for {}: {}",
                authenticated_user.user_id, e
            );
            ApiError::from(e)
        })?;

    Ok(Json(FinishResponse {
        success: true,
        message: "Partida guardada correctamente".to_string(),
    }))
}

async fn my_games(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<MyGamesResponse>, ApiError> {
    let invitations = state
        .invitation_service
        .invitations_of(&authenticated_user.user_id)
        .await
        .map_err(|e| {
            error!(
                "Failed to list invitations for {}: {}",
                authenticated_user.user_id, e
            );
            ApiError::from(e)
        })?;
    let games = state
        .game_service
        .games_of(&authenticated_user.user_id)
        .await
        .map_err(|e| {
            error!(
                "Failed to list games for {}: {}",
                authenticated_user.user_id, e
            );
            ApiError::from(e)
        })?;

    Ok(Json(MyGamesResponse { invitations, games }))
}

async fn delete_game(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Path(game_id): Path<String>,
) -> Result<Json<StatusResponse>, ApiError> {
    state
        .invitation_service
        .delete_game(&game_id, &authenticated_user.user_id)
        .await
        .map_err(|e| {
            error!("Failed to delete game {}: {}", game_id, e);
            ApiError::from(e)
        })?;

    Ok(Json(StatusResponse {
        success: true,
        message: "Partida eliminada exitosamente".to_string(),
    }))
}
