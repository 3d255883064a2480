pub mod requests;
pub mod responses;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::models::board::{Board, Color, PieceType};

/// Overall state of the live match. Wire literals match what the board page
/// switches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    #[serde(rename = "en-curso")]
    InProgress,
    #[serde(rename = "blancas-ganan")]
    WhiteWins,
    #[serde(rename = "negras-ganan")]
    BlackWins,
    #[serde(rename = "empate")]
    Draw,
}

impl MatchStatus {
    pub fn is_over(self) -> bool {
        self != MatchStatus::InProgress
    }

    pub fn win_for(color: Color) -> Self {
        match color {
            Color::White => MatchStatus::WhiteWins,
            Color::Black => MatchStatus::BlackWins,
        }
    }
}

/// An accepted move as stored in the log and replayed by polling clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub id: u32,
    #[serde(rename = "pieza")]
    pub piece: PieceType,
    pub color: Color,
    #[serde(rename = "inicial")]
    pub from: String,
    #[serde(rename = "final")]
    pub to: String,
    pub timestamp: i64,
}

/// The single process-wide live match: whose turn it is, the authoritative
/// board snapshot used for initial rendering, and the accepted-move log.
///
/// There is exactly one of these per process; concurrent matches are not
/// partitioned (see DESIGN.md).
#[derive(Debug, Clone)]
pub struct LiveMatch {
    pub turn: Color,
    pub status: MatchStatus,
    pub board: Board,
    pub move_counter: u32,
    pub last_move: Option<MoveRecord>,
    pub move_log: Vec<MoveRecord>,
}

impl LiveMatch {
    pub fn new() -> Self {
        LiveMatch {
            turn: Color::White,
            status: MatchStatus::InProgress,
            board: Board::starting_position(),
            move_counter: 0,
            last_move: None,
            move_log: Vec::new(),
        }
    }

    /// Records an accepted move: flips the turn, bumps the counter and
    /// appends to the log. The board snapshot is left untouched; relocating
    /// piece representations is the client's responsibility.
    pub fn record_move(&mut self, piece: PieceType, color: Color, from: String, to: String) -> MoveRecord {
        self.turn = self.turn.opposite();
        self.move_counter += 1;
        let record = MoveRecord {
            id: self.move_counter,
            piece,
            color,
            from,
            to,
            timestamp: Utc::now().timestamp_millis(),
        };
        self.move_log.push(record.clone());
        self.last_move = Some(record.clone());
        record
    }
}

impl Default for LiveMatch {
    fn default() -> Self {
        LiveMatch::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_starts_white_in_progress() {
        let m = LiveMatch::new();
        assert_eq!(m.turn, Color::White);
        assert_eq!(m.status, MatchStatus::InProgress);
        assert_eq!(m.move_counter, 0);
        assert!(m.last_move.is_none());
        assert!(m.move_log.is_empty());
    }

    #[test]
    fn test_record_move_flips_turn_and_logs() {
        let mut m = LiveMatch::new();
        let record = m.record_move(
            PieceType::Pawn,
            Color::White,
            "e2".to_string(),
            "e4".to_string(),
        );

        assert_eq!(m.turn, Color::Black);
        assert_eq!(m.move_counter, 1);
        assert_eq!(record.id, 1);
        assert_eq!(m.last_move.as_ref(), Some(&record));
        assert_eq!(m.move_log, vec![record]);
    }

    #[test]
    fn test_move_log_ids_are_consecutive() {
        let mut m = LiveMatch::new();
        m.record_move(PieceType::Pawn, Color::White, "e2".into(), "e4".into());
        m.record_move(PieceType::Pawn, Color::Black, "e7".into(), "e5".into());
        m.record_move(PieceType::Knight, Color::White, "g1".into(), "f3".into());

        let ids: Vec<u32> = m.move_log.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_status_wire_literals() {
        assert_eq!(
            serde_json::to_string(&MatchStatus::InProgress).unwrap(),
            "\"en-curso\""
        );
        assert_eq!(
            serde_json::to_string(&MatchStatus::WhiteWins).unwrap(),
            "\"blancas-ganan\""
        );
        assert_eq!(
            serde_json::to_string(&MatchStatus::BlackWins).unwrap(),
            "\"negras-ganan\""
        );
    }

    #[test]
    fn test_move_record_wire_field_names() {
        let record = MoveRecord {
            id: 3,
            piece: PieceType::Pawn,
            color: Color::White,
            from: "e2".to_string(),
            to: "e4".to_string(),
            timestamp: 1_700_000_000_000,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["pieza"], "peon");
        assert_eq!(json["color"], "blanca");
        assert_eq!(json["inicial"], "e2");
        assert_eq!(json["final"], "e4");
        assert_eq!(json["timestamp"], 1_700_000_000_000i64);
    }
}
