//! In-process test harness: the full router wired to in-memory repositories,
//! plus small helpers for driving it with `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use api::state::AppState;
use shared::models::game::Game;
use shared::models::invitation::{Invitation, InvitationStatus};
use shared::models::user::User;
use shared::repositories::errors::game_repository_errors::GameRepositoryError;
use shared::repositories::errors::invitation_repository_errors::InvitationRepositoryError;
use shared::repositories::errors::user_repository_errors::UserRepositoryError;
use shared::repositories::game_repository::GameRepository;
use shared::repositories::invitation_repository::InvitationRepository;
use shared::repositories::user_repository::UserRepository;
use shared::services::auth_service::AuthService;
use shared::services::game_service::GameService;
use shared::services::invitation_service::InvitationService;
use shared::services::match_service::MatchService;
use shared::services::user_service::UserService;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<String, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(&user.id) {
            return Err(UserRepositoryError::AlreadyExists);
        }
        users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn get_user_by_id(&self, user_id: &str) -> Result<User, UserRepositoryError> {
        self.users
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .ok_or(UserRepositoryError::NotFound)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<User, UserRepositoryError> {
        self.users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.username == username)
            .cloned()
            .ok_or(UserRepositoryError::NotFound)
    }

    async fn update_user(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        if !users.contains_key(&user.id) {
            return Err(UserRepositoryError::NotFound);
        }
        users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn username_exists(&self, username: &str) -> Result<bool, UserRepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .any(|u| u.username == username))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, UserRepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .any(|u| u.email == email))
    }
}

#[derive(Default)]
pub struct InMemoryGameRepository {
    games: Mutex<HashMap<String, Game>>,
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn create_game(&self, game: &Game) -> Result<(), GameRepositoryError> {
        self.games
            .lock()
            .unwrap()
            .insert(game.game_id.clone(), game.clone());
        Ok(())
    }

    async fn get_game(&self, game_id: &str) -> Result<Option<Game>, GameRepositoryError> {
        Ok(self.games.lock().unwrap().get(game_id).cloned())
    }

    async fn delete_game(&self, game_id: &str) -> Result<(), GameRepositoryError> {
        self.games
            .lock()
            .unwrap()
            .remove(game_id)
            .map(|_| ())
            .ok_or(GameRepositoryError::NotFound)
    }

    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<Game>, GameRepositoryError> {
        Ok(self
            .games
            .lock()
            .unwrap()
            .values()
            .filter(|g| g.owner == owner_id)
            .cloned()
            .collect())
    }

    async fn find_by_opponent(&self, opponent_id: &str) -> Result<Vec<Game>, GameRepositoryError> {
        Ok(self
            .games
            .lock()
            .unwrap()
            .values()
            .filter(|g| g.opponent.as_deref() == Some(opponent_id))
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryInvitationRepository {
    invitations: Mutex<HashMap<String, Invitation>>,
}

#[async_trait]
impl InvitationRepository for InMemoryInvitationRepository {
    async fn create_invitation(
        &self,
        invitation: &Invitation,
    ) -> Result<(), InvitationRepositoryError> {
        self.invitations
            .lock()
            .unwrap()
            .insert(invitation.invitation_id.clone(), invitation.clone());
        Ok(())
    }

    async fn get_invitation(
        &self,
        invitation_id: &str,
    ) -> Result<Option<Invitation>, InvitationRepositoryError> {
        Ok(self
            .invitations
            .lock()
            .unwrap()
            .get(invitation_id)
            .cloned())
    }

    async fn get_by_game_id(
        &self,
        game_id: &str,
    ) -> Result<Option<Invitation>, InvitationRepositoryError> {
        Ok(self
            .invitations
            .lock()
            .unwrap()
            .values()
            .find(|inv| inv.game_id == game_id)
            .cloned())
    }

    async fn update_invitation(
        &self,
        invitation: &Invitation,
    ) -> Result<(), InvitationRepositoryError> {
        let mut invitations = self.invitations.lock().unwrap();
        if !invitations.contains_key(&invitation.invitation_id) {
            return Err(InvitationRepositoryError::NotFound);
        }
        invitations.insert(invitation.invitation_id.clone(), invitation.clone());
        Ok(())
    }

    async fn delete_invitation(
        &self,
        invitation_id: &str,
    ) -> Result<(), InvitationRepositoryError> {
        self.invitations.lock().unwrap().remove(invitation_id);
        Ok(())
    }

    async fn find_pending(&self) -> Result<Vec<Invitation>, InvitationRepositoryError> {
        Ok(self
            .invitations
            .lock()
            .unwrap()
            .values()
            .filter(|inv| inv.status == InvitationStatus::Pending)
            .cloned()
            .collect())
    }

    async fn find_by_owner(
        &self,
        owner_id: &str,
    ) -> Result<Vec<Invitation>, InvitationRepositoryError> {
        Ok(self
            .invitations
            .lock()
            .unwrap()
            .values()
            .filter(|inv| inv.owner == owner_id)
            .cloned()
            .collect())
    }
}

pub fn test_app() -> Router {
    let user_repository = Arc::new(InMemoryUserRepository::default());
    let game_repository = Arc::new(InMemoryGameRepository::default());
    let invitation_repository = Arc::new(InMemoryInvitationRepository::default());

    let user_service = Arc::new(UserService::new(user_repository.clone()));
    let auth_service = Arc::new(AuthService::with_jwt_secret(
        user_service.clone(),
        "test-secret-key".to_string(),
    ));
    let invitation_service = Arc::new(InvitationService::new(
        invitation_repository,
        game_repository.clone(),
        user_repository.clone(),
    ));
    let game_service = Arc::new(GameService::new(game_repository, user_repository));
    let match_service = Arc::new(MatchService::new());

    api::app(AppState {
        auth_service,
        user_service,
        invitation_service,
        game_service,
        match_service,
    })
}

pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    request(app, "GET", uri, None, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    request(app, "POST", uri, None, Some(body)).await
}

pub async fn register_user(app: &Router, username: &str) -> String {
    let (status, _) = post_json(
        app,
        "/register",
        serde_json::json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "password": "secret123",
            "first_name": username,
            "last_name": "Test",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "registration should succeed");

    let (status, body) = post_json(
        app,
        "/login",
        serde_json::json!({ "username": username, "password": "secret123" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login should succeed");
    body["token"].as_str().expect("login token").to_string()
}
