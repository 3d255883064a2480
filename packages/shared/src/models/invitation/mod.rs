pub mod requests;
pub mod responses;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::board::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Expired,
}

/// A time-limited offer to join a specific private match. `expires_at` is an
/// epoch-seconds timestamp the invitations table uses as its TTL attribute,
/// so stale invitations disappear from the store on their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invitation {
    pub invitation_id: String,
    pub game_id: String,
    pub owner: String,
    pub owner_color: Color,
    pub invited_email: Option<String>,
    pub status: InvitationStatus,
    pub accepted_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: i64,
}

impl Invitation {
    pub fn new(owner: String, owner_color: Color, invited_email: Option<String>) -> Self {
        Invitation {
            invitation_id: Uuid::new_v4().to_string(),
            game_id: Uuid::new_v4().to_string()[..8].to_string(),
            owner,
            owner_color,
            invited_email,
            status: InvitationStatus::Pending,
            accepted_by: None,
            created_at: Utc::now(),
            expires_at: (Utc::now() + Duration::hours(24)).timestamp(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.status == InvitationStatus::Expired || Utc::now().timestamp() >= self.expires_at
    }
}
