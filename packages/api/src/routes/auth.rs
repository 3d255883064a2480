use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::{debug, error};

use crate::{error::ApiError, state::AppState};
use shared::models::auth::requests::{LoginRequest, RegisterRequest};
use shared::models::auth::responses::LoginResponse;
use shared::services::auth_service::AuthServiceTrait;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .user_service
        .register(
            &payload.username,
            &payload.email,
            &payload.password,
            &payload.first_name,
            &payload.last_name,
            payload.birth_date,
        )
        .await
        .map_err(|e| {
            error!("Failed to register user {}: {}", payload.username, e);
            ApiError::from(e)
        })?;
    debug!("User registered successfully: {}", payload.username);
    Ok(StatusCode::CREATED)
}

async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    state
        .auth_service
        .authenticate_user(&payload.username, &payload.password)
        .await
        .map(Json)
        .map_err(|e| {
            error!("Failed to authenticate user {}: {}", payload.username, e);
            ApiError::from(e)
        })
}
