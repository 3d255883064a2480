use serde::Deserialize;

use crate::models::board::Color;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateGameRequest {
    pub color: Color,
    pub email: Option<String>,
}
