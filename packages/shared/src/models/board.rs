use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Piece color. Wire literals are the Spanish words used by the board UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "blanca")]
    White,
    #[serde(rename = "negra")]
    Black,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Color::White => "blanca",
            Color::Black => "negra",
        }
    }

    /// Plural form used when announcing a winner ("blancas ganan").
    pub fn plural(self) -> &'static str {
        match self {
            Color::White => "blancas",
            Color::Black => "negras",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PieceType {
    #[serde(rename = "peon")]
    Pawn,
    #[serde(rename = "caballo")]
    Knight,
    #[serde(rename = "alfil")]
    Bishop,
    #[serde(rename = "torre")]
    Rook,
    #[serde(rename = "reina")]
    Queen,
    #[serde(rename = "rey")]
    King,
}

impl FromStr for PieceType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "peon" => Ok(PieceType::Pawn),
            "caballo" => Ok(PieceType::Knight),
            "alfil" => Ok(PieceType::Bishop),
            "torre" => Ok(PieceType::Rook),
            "reina" => Ok(PieceType::Queen),
            "rey" => Ok(PieceType::King),
            _ => Err(()),
        }
    }
}

/// Board coordinate. Column 0–7 maps to files a–h, row 0–7 runs from the
/// eighth rank down to the first (row = 8 − rank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub col: i8,
    pub row: i8,
}

impl Coord {
    pub const fn new(col: i8, row: i8) -> Self {
        Coord { col, row }
    }

    pub fn in_bounds(self) -> bool {
        (0..8).contains(&self.col) && (0..8).contains(&self.row)
    }

    pub fn offset(self, dc: i8, dr: i8) -> Coord {
        Coord::new(self.col + dc, self.row + dr)
    }
}

impl FromStr for Coord {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(());
        }
        let file = bytes[0];
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(());
        }
        Ok(Coord::new(
            (file - b'a') as i8,
            8 - (rank - b'0') as i8,
        ))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col as u8) as char;
        let rank = 8 - self.row;
        write!(f, "{}{}", file, rank)
    }
}

/// Display color of a square, alternating by coordinate parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SquareColor {
    #[serde(rename = "blanco")]
    Light,
    #[serde(rename = "negro")]
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    #[serde(rename = "tipo")]
    pub kind: PieceType,
    pub color: Color,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Square {
    pub pos: String,
    pub color: SquareColor,
    #[serde(rename = "pieza")]
    pub piece: Option<Piece>,
}

/// The 8×8 board, serialized as an array of rows from the eighth rank down
/// to the first, matching the layout the board page renders from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    pub rows: Vec<Vec<Square>>,
}

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

impl Board {
    /// Deterministic standard starting layout. Squares alternate light/dark
    /// by parity; pieces sit on ranks 1, 2, 7 and 8.
    pub fn starting_position() -> Self {
        let mut rows = Vec::with_capacity(8);
        for row in 0..8i8 {
            let mut squares = Vec::with_capacity(8);
            for col in 0..8i8 {
                let coord = Coord::new(col, row);
                let color = if (row + col) % 2 == 0 {
                    SquareColor::Light
                } else {
                    SquareColor::Dark
                };
                squares.push(Square {
                    pos: coord.to_string(),
                    color,
                    piece: initial_piece(col, row),
                });
            }
            rows.push(squares);
        }
        Board { rows }
    }

    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.rows.iter().flatten()
    }
}

fn initial_piece(col: i8, row: i8) -> Option<Piece> {
    let kind_and_color = match row {
        0 => (BACK_RANK[col as usize], Color::Black),
        1 => (PieceType::Pawn, Color::Black),
        6 => (PieceType::Pawn, Color::White),
        7 => (BACK_RANK[col as usize], Color::White),
        _ => return None,
    };
    Some(Piece {
        kind: kind_and_color.0,
        color: kind_and_color.1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_coord_parses_algebraic_notation() {
        let coord: Coord = "e2".parse().unwrap();
        assert_eq!(coord, Coord::new(4, 6));
        assert_eq!(coord.to_string(), "e2");

        assert_eq!("a8".parse::<Coord>().unwrap(), Coord::new(0, 0));
        assert_eq!("h1".parse::<Coord>().unwrap(), Coord::new(7, 7));
    }

    #[test]
    fn test_coord_rejects_garbage() {
        assert!("".parse::<Coord>().is_err());
        assert!("e".parse::<Coord>().is_err());
        assert!("e9".parse::<Coord>().is_err());
        assert!("i1".parse::<Coord>().is_err());
        assert!("e22".parse::<Coord>().is_err());
    }

    #[test]
    fn test_board_has_64_unique_squares() {
        let board = Board::starting_position();
        let positions: HashSet<String> =
            board.squares().map(|s| s.pos.clone()).collect();
        assert_eq!(board.squares().count(), 64);
        assert_eq!(positions.len(), 64);
    }

    #[test]
    fn test_square_colors_alternate_by_parity() {
        let board = Board::starting_position();
        assert_eq!(board.rows[0][0].color, SquareColor::Light); // a8
        assert_eq!(board.rows[0][1].color, SquareColor::Dark); // b8
        assert_eq!(board.rows[7][7].color, SquareColor::Light); // h1
    }

    #[test]
    fn test_starting_position_standard_layout() {
        let board = Board::starting_position();

        let piece_at = |pos: &str| {
            board
                .squares()
                .find(|s| s.pos == pos)
                .and_then(|s| s.piece)
        };

        assert_eq!(
            piece_at("e1"),
            Some(Piece {
                kind: PieceType::King,
                color: Color::White
            })
        );
        assert_eq!(
            piece_at("d8"),
            Some(Piece {
                kind: PieceType::Queen,
                color: Color::Black
            })
        );
        assert_eq!(
            piece_at("e2"),
            Some(Piece {
                kind: PieceType::Pawn,
                color: Color::White
            })
        );
        assert_eq!(piece_at("e4"), None);
    }

    #[test]
    fn test_starting_position_one_king_per_color() {
        let board = Board::starting_position();
        let kings = |color: Color| {
            board
                .squares()
                .filter(|s| {
                    s.piece
                        == Some(Piece {
                            kind: PieceType::King,
                            color,
                        })
                })
                .count()
        };
        assert_eq!(kings(Color::White), 1);
        assert_eq!(kings(Color::Black), 1);
    }

    #[test]
    fn test_starting_position_sixteen_pieces_per_color() {
        let board = Board::starting_position();
        let count = |color: Color| {
            board
                .squares()
                .filter(|s| s.piece.map(|p| p.color) == Some(color))
                .count()
        };
        assert_eq!(count(Color::White), 16);
        assert_eq!(count(Color::Black), 16);
    }

    #[test]
    fn test_color_wire_literals() {
        assert_eq!(serde_json::to_string(&Color::White).unwrap(), "\"blanca\"");
        assert_eq!(serde_json::to_string(&Color::Black).unwrap(), "\"negra\"");
        assert_eq!(
            serde_json::to_string(&PieceType::Knight).unwrap(),
            "\"caballo\""
        );
        assert_eq!(
            serde_json::to_string(&SquareColor::Dark).unwrap(),
            "\"negro\""
        );
    }

    #[test]
    fn test_square_serialization_shape() {
        let board = Board::starting_position();
        let json = serde_json::to_value(&board.rows[7][4]).unwrap();
        assert_eq!(json["pos"], "e1");
        assert_eq!(json["pieza"]["tipo"], "rey");
        assert_eq!(json["pieza"]["color"], "blanca");
    }
}
