//! The live-match authority.
//!
//! Holds the single process-wide [`LiveMatch`] and applies every state
//! transition: move validation, resignation, reset and the counter-based
//! synchronization query. Validation and state rejections are returned as
//! structured outcomes, never as errors, and leave the match untouched.

use std::str::FromStr;
use std::sync::Mutex;

use tracing::{debug, info};

use crate::models::board::{Board, Color, Coord, PieceType};
use crate::models::live::{LiveMatch, MatchStatus, MoveRecord};
use crate::services::chess_service;

pub struct MatchService {
    state: Mutex<LiveMatch>,
}

/// Why a proposed move was turned down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveRejection {
    GameOver,
    IncompleteData,
    NotYourTurn(Color),
    InvalidPieceType,
    InvalidMove,
}

impl MoveRejection {
    pub fn message(&self) -> String {
        match self {
            MoveRejection::GameOver => "La partida ya ha terminado".to_string(),
            MoveRejection::IncompleteData => "Datos incompletos".to_string(),
            MoveRejection::NotYourTurn(turn) => {
                format!("No es tu turno. Turno actual: {}", turn)
            }
            MoveRejection::InvalidPieceType => "Tipo de pieza no válido".to_string(),
            MoveRejection::InvalidMove => "Movimiento inválido".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MoveVerdict {
    Accepted(MoveRecord),
    Rejected(MoveRejection),
}

/// Result of a move validation, together with the (possibly unchanged) turn
/// and counter the client must converge to.
#[derive(Debug, Clone)]
pub struct MoveOutcome {
    pub verdict: MoveVerdict,
    pub turn: Color,
    pub move_counter: u32,
}

impl MoveOutcome {
    pub fn accepted(&self) -> bool {
        matches!(self.verdict, MoveVerdict::Accepted(_))
    }
}

#[derive(Debug, Clone)]
pub struct ResignOutcome {
    pub accepted: bool,
    pub message: String,
    pub winner: Option<&'static str>,
    pub status: Option<MatchStatus>,
}

#[derive(Debug, Clone)]
pub struct MatchSnapshot {
    pub turn: Color,
    pub board: Board,
    pub status: MatchStatus,
}

/// Answer to "anything newer than move N?".
#[derive(Debug, Clone)]
pub struct SyncSnapshot {
    pub new_move: Option<MoveRecord>,
    pub turn: Color,
    pub move_counter: u32,
    pub status: MatchStatus,
}

#[derive(Debug, Clone)]
pub struct LastMoveSnapshot {
    pub turn: Color,
    pub move_counter: u32,
    pub status: MatchStatus,
    pub last_move: Option<MoveRecord>,
}

#[derive(Debug, Clone)]
pub struct ResetSummary {
    pub turn: Color,
    pub status: MatchStatus,
    pub move_counter: u32,
}

impl MatchService {
    pub fn new() -> Self {
        MatchService {
            state: Mutex::new(LiveMatch::new()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LiveMatch> {
        self.state.lock().expect("live match lock poisoned")
    }

    pub fn current_turn(&self) -> Color {
        self.lock().turn
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        let state = self.lock();
        MatchSnapshot {
            turn: state.turn,
            board: state.board.clone(),
            status: state.status,
        }
    }

    /// Validates a proposed move against the current turn and the geometric
    /// generator, recording it on acceptance. Fields arrive raw off the wire;
    /// missing or empty ones reject as incomplete data.
    pub fn validate_move(
        &self,
        piece: Option<&str>,
        color: Option<&str>,
        from: Option<&str>,
        to: Option<&str>,
    ) -> MoveOutcome {
        let mut state = self.lock();

        let reject = |rejection: MoveRejection, state: &LiveMatch| {
            debug!(reason = ?rejection, "move rejected");
            MoveOutcome {
                verdict: MoveVerdict::Rejected(rejection),
                turn: state.turn,
                move_counter: state.move_counter,
            }
        };

        if state.status.is_over() {
            return reject(MoveRejection::GameOver, &*state);
        }

        let (piece, color, from, to) = match (
            non_empty(piece),
            non_empty(color),
            non_empty(from),
            non_empty(to),
        ) {
            (Some(p), Some(c), Some(f), Some(t)) => (p, c, f, t),
            _ => return reject(MoveRejection::IncompleteData, &*state),
        };

        if color != state.turn.as_str() {
            return reject(MoveRejection::NotYourTurn(state.turn), &*state);
        }
        let color = state.turn;

        let piece = match PieceType::from_str(piece) {
            Ok(piece) => piece,
            Err(()) => return reject(MoveRejection::InvalidPieceType, &*state),
        };

        let (origin, destination) = match (Coord::from_str(from), Coord::from_str(to)) {
            (Ok(o), Ok(d)) => (o, d),
            _ => return reject(MoveRejection::InvalidMove, &*state),
        };

        if !chess_service::legal_targets(piece, origin, color).contains(&destination) {
            return reject(MoveRejection::InvalidMove, &*state);
        }

        let record = state.record_move(piece, color, from.to_string(), to.to_string());
        info!(
            id = record.id,
            piece = ?piece,
            from = %origin,
            to = %destination,
            new_turn = %state.turn,
            "move accepted"
        );
        MoveOutcome {
            verdict: MoveVerdict::Accepted(record),
            turn: state.turn,
            move_counter: state.move_counter,
        }
    }

    /// Player-initiated forfeiture. Only the color whose turn it is may
    /// resign; the opposite color wins and the match stops accepting moves.
    pub fn resign(&self, player: &str) -> ResignOutcome {
        let mut state = self.lock();

        if state.status.is_over() {
            return ResignOutcome {
                accepted: false,
                message: "La partida ya ha terminado".to_string(),
                winner: None,
                status: None,
            };
        }

        if player != state.turn.as_str() {
            return ResignOutcome {
                accepted: false,
                message: "Solo puedes rendirte en tu turno".to_string(),
                winner: None,
                status: None,
            };
        }

        let loser = state.turn;
        let winner = loser.opposite();
        state.status = MatchStatus::win_for(winner);
        info!(loser = %loser, winner = %winner, "resignation accepted");

        ResignOutcome {
            accepted: true,
            message: format!("{} se han rendido", capitalized_plural(loser)),
            winner: Some(winner.plural()),
            status: Some(state.status),
        }
    }

    /// Replaces the whole match with a fresh one. Always succeeds.
    pub fn reset(&self) -> ResetSummary {
        let mut state = self.lock();
        *state = LiveMatch::new();
        info!("new match started");
        ResetSummary {
            turn: state.turn,
            status: state.status,
            move_counter: state.move_counter,
        }
    }

    /// Poll query: returns the single most recent move when the client's
    /// counter is behind the server's. Intermediate moves are not replayed;
    /// clients catch up to the latest state only.
    pub fn sync_since(&self, client_counter: u32) -> SyncSnapshot {
        let state = self.lock();
        let new_move = if client_counter < state.move_counter {
            state.last_move.clone()
        } else {
            None
        };
        SyncSnapshot {
            new_move,
            turn: state.turn,
            move_counter: state.move_counter,
            status: state.status,
        }
    }

    pub fn last_move(&self) -> LastMoveSnapshot {
        let state = self.lock();
        LastMoveSnapshot {
            turn: state.turn,
            move_counter: state.move_counter,
            status: state.status,
            last_move: state.last_move.clone(),
        }
    }
}

impl Default for MatchService {
    fn default() -> Self {
        MatchService::new()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

fn capitalized_plural(color: Color) -> &'static str {
    match color {
        Color::White => "Blancas",
        Color::Black => "Negras",
    }
}
