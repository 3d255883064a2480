use serde::Serialize;

use crate::models::board::{Board, Color};
use crate::models::live::{MatchStatus, MoveRecord};

#[derive(Debug, Serialize)]
pub struct TurnResponse {
    #[serde(rename = "turno")]
    pub turn: Color,
}

#[derive(Debug, Serialize)]
pub struct MatchSnapshotResponse {
    #[serde(rename = "turnoActual")]
    pub current_turn: Color,
    #[serde(rename = "tablero")]
    pub board: Board,
    #[serde(rename = "estadoJuego")]
    pub status: MatchStatus,
}

#[derive(Debug, Serialize)]
pub struct MoveResponse {
    #[serde(rename = "valido")]
    pub valid: bool,
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "nuevoTurno")]
    pub new_turn: Color,
    #[serde(rename = "movimiento")]
    pub movement: Option<MoveRecord>,
    #[serde(rename = "contadorMovimientos")]
    pub move_counter: u32,
}

#[derive(Debug, Serialize)]
pub struct ResignResponse {
    pub success: bool,
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "ganador", skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    #[serde(rename = "estadoJuego", skip_serializing_if = "Option::is_none")]
    pub status: Option<MatchStatus>,
}

/// Answer to the counter-based poll. `movement` is present only when the
/// client is behind, and holds the single most recent move.
#[derive(Debug, Serialize)]
pub struct SyncResponse {
    #[serde(rename = "hayNuevoMovimiento")]
    pub has_new_move: bool,
    #[serde(rename = "movimiento", skip_serializing_if = "Option::is_none")]
    pub movement: Option<MoveRecord>,
    #[serde(rename = "turnoActual")]
    pub current_turn: Color,
    #[serde(rename = "contadorMovimientos")]
    pub move_counter: u32,
    #[serde(rename = "estadoJuego")]
    pub status: MatchStatus,
}

/// Parameterless variant used by clients at page load.
#[derive(Debug, Serialize)]
pub struct LastMoveResponse {
    #[serde(rename = "hayNuevoMovimiento")]
    pub has_new_move: bool,
    #[serde(rename = "turnoActual")]
    pub current_turn: Color,
    #[serde(rename = "contadorMovimientos")]
    pub move_counter: u32,
    #[serde(rename = "estadoJuego")]
    pub status: MatchStatus,
    #[serde(rename = "ultimoMovimiento")]
    pub last_move: Option<MoveRecord>,
}

#[derive(Debug, Serialize)]
pub struct NewMatchResponse {
    pub success: bool,
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "turnoActual")]
    pub current_turn: Color,
    #[serde(rename = "estadoJuego")]
    pub status: MatchStatus,
    #[serde(rename = "contadorMovimientos")]
    pub move_counter: u32,
}

#[derive(Debug, Serialize)]
pub struct FinishResponse {
    pub success: bool,
    pub message: String,
}
