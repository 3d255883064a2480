use std::sync::Arc;

use shared::services::auth_service::AuthService;
use shared::services::game_service::GameService;
use shared::services::invitation_service::InvitationService;
use shared::services::match_service::MatchService;
use shared::services::user_service::UserService;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub invitation_service: Arc<InvitationService>,
    pub game_service: Arc<GameService>,
    pub match_service: Arc<MatchService>,
}
