//! Geometric move generation.
//!
//! Every function here is pure and occupancy-blind: it answers "which squares
//! could this piece type reach from this coordinate on an empty board". Rays
//! run to the board edge without stopping at other pieces, and pawns get
//! unconditional one- and two-square forward offsets. Board-aware filtering
//! (blocking, check, captures) is deliberately not done here; the live match
//! validates by geometry and turn only.

use crate::models::board::{Color, Coord, PieceType};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

const DIAGONAL_RAYS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONAL_RAYS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Squares a piece of the given type could reach from `origin`, ignoring
/// occupancy. Off-board coordinates are discarded.
pub fn legal_targets(piece: PieceType, origin: Coord, color: Color) -> Vec<Coord> {
    match piece {
        PieceType::Pawn => pawn_targets(origin, color),
        PieceType::Knight => knight_targets(origin),
        PieceType::Bishop => bishop_targets(origin),
        PieceType::Rook => rook_targets(origin),
        PieceType::Queen => queen_targets(origin),
        PieceType::King => king_targets(origin),
    }
}

pub fn knight_targets(origin: Coord) -> Vec<Coord> {
    offset_targets(origin, &KNIGHT_OFFSETS)
}

pub fn king_targets(origin: Coord) -> Vec<Coord> {
    offset_targets(origin, &KING_OFFSETS)
}

pub fn bishop_targets(origin: Coord) -> Vec<Coord> {
    ray_targets(origin, &DIAGONAL_RAYS)
}

pub fn rook_targets(origin: Coord) -> Vec<Coord> {
    ray_targets(origin, &ORTHOGONAL_RAYS)
}

pub fn queen_targets(origin: Coord) -> Vec<Coord> {
    let mut targets = bishop_targets(origin);
    targets.extend(rook_targets(origin));
    targets
}

/// Forward offsets only, parameterized by color: white advances toward
/// decreasing row index, black toward increasing. The two-square advance is
/// unconditional, as is the single step.
pub fn pawn_targets(origin: Coord, color: Color) -> Vec<Coord> {
    let dir: i8 = match color {
        Color::White => -1,
        Color::Black => 1,
    };
    [(0, dir), (0, 2 * dir)]
        .iter()
        .map(|&(dc, dr)| origin.offset(dc, dr))
        .filter(|c| c.in_bounds())
        .collect()
}

fn offset_targets(origin: Coord, offsets: &[(i8, i8)]) -> Vec<Coord> {
    offsets
        .iter()
        .map(|&(dc, dr)| origin.offset(dc, dr))
        .filter(|c| c.in_bounds())
        .collect()
}

fn ray_targets(origin: Coord, rays: &[(i8, i8)]) -> Vec<Coord> {
    let mut targets = Vec::new();
    for &(dc, dr) in rays {
        let mut current = origin.offset(dc, dr);
        while current.in_bounds() {
            targets.push(current);
            current = current.offset(dc, dr);
        }
    }
    targets
}
