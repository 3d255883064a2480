use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use api::{app, state::AppState};
use shared::repositories::game_repository::DynamoDbGameRepository;
use shared::repositories::invitation_repository::DynamoDbInvitationRepository;
use shared::repositories::user_repository::DynamoDbUserRepository;
use shared::services::auth_service::AuthService;
use shared::services::game_service::GameService;
use shared::services::invitation_service::InvitationService;
use shared::services::match_service::MatchService;
use shared::services::user_service::UserService;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Set up services
    let config = aws_config::load_from_env().await;
    let client = aws_sdk_dynamodb::Client::new(&config);

    let user_repository = Arc::new(DynamoDbUserRepository::new(client.clone()));
    let game_repository = Arc::new(DynamoDbGameRepository::new(client.clone()));
    let invitation_repository = Arc::new(DynamoDbInvitationRepository::new(client.clone()));

    let user_service = Arc::new(UserService::new(user_repository.clone()));
    let auth_service = Arc::new(AuthService::new(user_service.clone()));
    let invitation_service = Arc::new(InvitationService::new(
        invitation_repository,
        game_repository.clone(),
        user_repository.clone(),
    ));
    let game_service = Arc::new(GameService::new(game_repository, user_repository));
    let match_service = Arc::new(MatchService::new());

    let app_state = AppState {
        auth_service,
        user_service,
        invitation_service,
        game_service,
        match_service,
    };

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    tracing::info!("listening on {}", addr);
    axum::serve(listener, app(app_state))
        .await
        .expect("server error");
}
