use std::sync::Arc;

use tracing::{debug, info};

use crate::models::board::Color;
use crate::models::game::{Game, GameStatus};
use crate::models::invitation::responses::{OwnedInvitationSummary, PendingInvitationSummary};
use crate::models::invitation::{Invitation, InvitationStatus};
use crate::models::user::User;
use crate::repositories::errors::user_repository_errors::UserRepositoryError;
use crate::repositories::game_repository::GameRepository;
use crate::repositories::invitation_repository::InvitationRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::errors::invitation_service_errors::InvitationServiceError;

/// What a player gets back after accepting an invitation: the created game
/// and the color they will play (opposite of the owner's choice).
#[derive(Debug, Clone)]
pub struct JoinedGame {
    pub game_id: String,
    pub opponent_name: String,
    pub player_color: Color,
}

pub struct InvitationService {
    invitations: Arc<dyn InvitationRepository + Send + Sync>,
    games: Arc<dyn GameRepository + Send + Sync>,
    users: Arc<dyn UserRepository + Send + Sync>,
}

impl InvitationService {
    pub fn new(
        invitations: Arc<dyn InvitationRepository + Send + Sync>,
        games: Arc<dyn GameRepository + Send + Sync>,
        users: Arc<dyn UserRepository + Send + Sync>,
    ) -> Self {
        InvitationService {
            invitations,
            games,
            users,
        }
    }

    pub async fn create_game(
        &self,
        owner: &User,
        color: Color,
        invited_email: Option<String>,
    ) -> Result<Invitation, InvitationServiceError> {
        let invited_email = invited_email.filter(|e| !e.is_empty());
        let invitation = Invitation::new(owner.id.clone(), color, invited_email);
        self.invitations
            .create_invitation(&invitation)
            .await
            .map_err(|e| InvitationServiceError::RepositoryError(e.to_string()))?;
        info!(
            game_id = %invitation.game_id,
            owner = %owner.username,
            color = %color,
            "private game created"
        );
        Ok(invitation)
    }

    /// Accepts a pending invitation and creates the playing game record.
    /// The owner cannot join their own game.
    pub async fn join_game(
        &self,
        invitation_id: &str,
        user: &User,
    ) -> Result<JoinedGame, InvitationServiceError> {
        let mut invitation = self
            .invitations
            .get_invitation(invitation_id)
            .await
            .map_err(|e| InvitationServiceError::RepositoryError(e.to_string()))?
            .ok_or(InvitationServiceError::InvitationNotFound)?;

        if invitation.status != InvitationStatus::Pending || invitation.is_expired() {
            return Err(InvitationServiceError::InvitationNotFound);
        }
        if invitation.owner == user.id {
            return Err(InvitationServiceError::OwnGame);
        }

        invitation.status = InvitationStatus::Accepted;
        invitation.accepted_by = Some(user.id.clone());
        self.invitations
            .update_invitation(&invitation)
            .await
            .map_err(|e| InvitationServiceError::RepositoryError(e.to_string()))?;

        let owner = self.get_user(&invitation.owner).await?;

        let game = Game::started(
            invitation.game_id.clone(),
            invitation.owner.clone(),
            user.id.clone(),
        );
        self.games
            .create_game(&game)
            .await
            .map_err(|e| InvitationServiceError::RepositoryError(e.to_string()))?;
        info!(
            game_id = %game.game_id,
            owner = %owner.username,
            opponent = %user.username,
            "player joined private game"
        );

        Ok(JoinedGame {
            game_id: invitation.game_id,
            opponent_name: owner.username,
            player_color: invitation.owner_color.opposite(),
        })
    }

    /// Declining marks the invitation expired. A directed invitation may only
    /// be declined by its addressee.
    pub async fn decline(
        &self,
        invitation_id: &str,
        user: &User,
    ) -> Result<(), InvitationServiceError> {
        let mut invitation = self
            .invitations
            .get_invitation(invitation_id)
            .await
            .map_err(|e| InvitationServiceError::RepositoryError(e.to_string()))?
            .filter(|inv| inv.status == InvitationStatus::Pending)
            .ok_or(InvitationServiceError::InvitationNotFound)?;

        if let Some(invited) = &invitation.invited_email {
            if invited != &user.email {
                return Err(InvitationServiceError::NotInvited);
            }
        }

        invitation.status = InvitationStatus::Expired;
        self.invitations
            .update_invitation(&invitation)
            .await
            .map_err(|e| InvitationServiceError::RepositoryError(e.to_string()))?;
        debug!(invitation_id = %invitation.invitation_id, "invitation declined");
        Ok(())
    }

    /// Pending invitations the user could act on: addressed to their email,
    /// or open invitations from other players.
    pub async fn pending_for(
        &self,
        user: &User,
    ) -> Result<Vec<PendingInvitationSummary>, InvitationServiceError> {
        let pending = self
            .invitations
            .find_pending()
            .await
            .map_err(|e| InvitationServiceError::RepositoryError(e.to_string()))?;

        let mut summaries = Vec::new();
        for invitation in pending {
            if invitation.is_expired() {
                continue;
            }
            let addressed_to_user = match &invitation.invited_email {
                Some(email) => email == &user.email,
                None => invitation.owner != user.id,
            };
            if !addressed_to_user {
                continue;
            }
            let owner = self.get_user(&invitation.owner).await?;
            summaries.push(PendingInvitationSummary {
                invitation_id: invitation.invitation_id,
                owner_name: owner.username,
                owner_color: invitation.owner_color,
                created_at: invitation.created_at,
            });
        }
        Ok(summaries)
    }

    /// Invitations created by the user, newest first.
    pub async fn invitations_of(
        &self,
        owner_id: &str,
    ) -> Result<Vec<OwnedInvitationSummary>, InvitationServiceError> {
        let mut invitations = self
            .invitations
            .find_by_owner(owner_id)
            .await
            .map_err(|e| InvitationServiceError::RepositoryError(e.to_string()))?;
        invitations.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let mut summaries = Vec::new();
        for invitation in invitations {
            let accepted_by_name = match &invitation.accepted_by {
                Some(user_id) => Some(self.get_user(user_id).await?.username),
                None => None,
            };
            summaries.push(OwnedInvitationSummary {
                is_expired: invitation.is_expired(),
                invitation_id: invitation.invitation_id,
                game_id: invitation.game_id,
                status: invitation.status,
                owner_color: invitation.owner_color,
                invited_email: invitation.invited_email,
                accepted_by_name,
                created_at: invitation.created_at,
            });
        }
        Ok(summaries)
    }

    /// Deletes a created game and its invitation. Owner only, and refused
    /// while the game is being played with an opponent.
    pub async fn delete_game(
        &self,
        game_id: &str,
        user_id: &str,
    ) -> Result<(), InvitationServiceError> {
        let invitation = self
            .invitations
            .get_by_game_id(game_id)
            .await
            .map_err(|e| InvitationServiceError::RepositoryError(e.to_string()))?
            .ok_or(InvitationServiceError::InvitationNotFound)?;

        if invitation.owner != user_id {
            return Err(InvitationServiceError::NotOwner);
        }

        let game = self
            .games
            .get_game(game_id)
            .await
            .map_err(|e| InvitationServiceError::RepositoryError(e.to_string()))?;

        if let Some(game) = &game {
            if game.opponent.is_some() && game.status == GameStatus::Playing {
                return Err(InvitationServiceError::GameInProgress);
            }
        }

        self.invitations
            .delete_invitation(&invitation.invitation_id)
            .await
            .map_err(|e| InvitationServiceError::RepositoryError(e.to_string()))?;
        if game.is_some() {
            self.games
                .delete_game(game_id)
                .await
                .map_err(|e| InvitationServiceError::RepositoryError(e.to_string()))?;
        }
        info!(game_id = %game_id, "private game deleted");
        Ok(())
    }

    async fn get_user(&self, user_id: &str) -> Result<User, InvitationServiceError> {
        self.users.get_user_by_id(user_id).await.map_err(|e| match e {
            UserRepositoryError::NotFound => InvitationServiceError::UserNotFound,
            _ => InvitationServiceError::RepositoryError(e.to_string()),
        })
    }
}
