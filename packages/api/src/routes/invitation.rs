use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::error;

use crate::{error::ApiError, middleware::auth::AuthenticatedUser, state::AppState};
use shared::models::invitation::requests::CreateGameRequest;
use shared::models::invitation::responses::{
    CreateGameResponse, JoinGameResponse, PrivateGamesResponse, StatusResponse,
};
use shared::models::user::User;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/creategame", post(create_game))
        .route("/join-game/{invitation_id}", get(join_game))
        .route("/decline-invitation/{invitation_id}", post(decline_invitation))
        .route("/privategame", get(private_games))
}

async fn create_game(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Json(payload): Json<CreateGameRequest>,
) -> Result<Json<CreateGameResponse>, ApiError> {
    let user = current_user(&state, &authenticated_user).await?;
    let invitation = state
        .invitation_service
        .create_game(&user, payload.color, payload.email)
        .await
        .map_err(|e| {
            error!("Failed to create game for {}: {}", user.username, e);
            ApiError::from(e)
        })?;

    let message = match &invitation.invited_email {
        Some(email) => format!("Partida creada. Enlace de invitación generado para {}", email),
        None => "Partida creada. Comparte el enlace para que alguien se una".to_string(),
    };
    Ok(Json(CreateGameResponse {
        success: true,
        message,
        game_id: invitation.game_id,
        invitation_id: invitation.invitation_id,
        owner_color: invitation.owner_color,
    }))
}

async fn join_game(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Path(invitation_id): Path<String>,
) -> Result<Json<JoinGameResponse>, ApiError> {
    let user = current_user(&state, &authenticated_user).await?;
    let joined = state
        .invitation_service
        .join_game(&invitation_id, &user)
        .await
        .map_err(|e| {
            error!("Failed to join invitation {}: {}", invitation_id, e);
            ApiError::from(e)
        })?;

    Ok(Json(JoinGameResponse {
        success: true,
        game_id: joined.game_id,
        opponent_name: joined.opponent_name,
        player_color: joined.player_color,
    }))
}

async fn decline_invitation(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Path(invitation_id): Path<String>,
) -> Result<Json<StatusResponse>, ApiError> {
    let user = current_user(&state, &authenticated_user).await?;
    state
        .invitation_service
        .decline(&invitation_id, &user)
        .await
        .map_err(|e| {
            error!("Failed to decline invitation {}: {}", invitation_id, e);
            ApiError::from(e)
        })?;

    Ok(Json(StatusResponse {
        success: true,
        message: "Invitación rechazada exitosamente".to_string(),
    }))
}

async fn private_games(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<PrivateGamesResponse>, ApiError> {
    let user = current_user(&state, &authenticated_user).await?;
    let pending_invitations = state
        .invitation_service
        .pending_for(&user)
        .await
        .map_err(|e| {
            error!("Failed to list invitations for {}: {}", user.username, e);
            ApiError::from(e)
        })?;
    let active_games = state
        .game_service
        .active_games(&user.id)
        .await
        .map_err(|e| {
            error!("Failed to list active games for {}: {}", user.username, e);
            ApiError::from(e)
        })?;

    Ok(Json(PrivateGamesResponse {
        pending_invitations,
        active_games,
    }))
}

async fn current_user(
    state: &AppState,
    authenticated_user: &AuthenticatedUser,
) -> Result<User, ApiError> {
    state
        .user_service
        .get_user_by_id(&authenticated_user.user_id)
        .await
        .map_err(ApiError::from)
}
