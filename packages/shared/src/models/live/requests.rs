use serde::Deserialize;

/// A proposed move as posted by the board page. Every field is optional so
/// that incomplete submissions reach the validator and come back as a
/// structured rejection rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveRequest {
    #[serde(rename = "pieza")]
    pub piece: Option<String>,
    pub color: Option<String>,
    #[serde(rename = "inicial")]
    pub from: Option<String>,
    #[serde(rename = "final")]
    pub to: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResignRequest {
    #[serde(rename = "jugador")]
    pub player: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FinishRequest {
    #[serde(rename = "ganador")]
    pub winner: String,
    #[serde(rename = "estadoJuego")]
    pub final_status: String,
}
