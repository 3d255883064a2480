use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::error;

use crate::{error::ApiError, middleware::auth::AuthenticatedUser, state::AppState};
use shared::models::auth::requests::UpdateProfileRequest;
use shared::models::auth::responses::ProfileResponse;
use shared::models::user::PublicUser;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(profile))
        .route("/edit", post(edit_profile))
}

async fn profile(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = state
        .user_service
        .get_user_by_id(&authenticated_user.user_id)
        .await
        .map_err(|e| {
            error!(
                "Failed to retrieve user {}: {}",
                authenticated_user.user_id, e
            );
            ApiError::from(e)
        })?;

    let (stats, history) = state
        .game_service
        .profile_of(&authenticated_user.user_id)
        .await
        .map_err(|e| {
            error!(
                "Failed to load game history for {}: {}",
                authenticated_user.user_id, e
            );
            ApiError::from(e)
        })?;

    Ok(Json(ProfileResponse {
        user: PublicUser::from(&user),
        stats,
        history,
    }))
}

async fn edit_profile(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<PublicUser>, ApiError> {
    let user = state
        .user_service
        .update_profile(&authenticated_user.user_id, &payload)
        .await
        .map_err(|e| {
            error!(
                "Failed to update profile for {}: {}",
                authenticated_user.user_id, e
            );
            ApiError::from(e)
        })?;
    Ok(Json(PublicUser::from(&user)))
}
