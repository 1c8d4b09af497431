//! Geometric building blocks shared by the per-piece generators.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::geometry::{Direction, Square};
use crate::game_state::piece_move::PieceMove;

/// Fixed-offset movement (knight, king): keep every in-bounds target not held
/// by a friendly piece.
pub fn push_leaping_moves(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[Direction],
    out: &mut Vec<PieceMove>,
) {
    for offset in offsets {
        let Some(to) = from.add_direction(*offset) else {
            continue;
        };
        match board.piece_at(to) {
            Some(piece) if piece.color() == color => {}
            _ => out.push(PieceMove::new(from, to)),
        }
    }
}

/// Ray movement (rook, bishop, queen): walk each direction until the edge,
/// stopping before a friendly piece and on an enemy piece.
pub fn push_sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[Direction],
    out: &mut Vec<PieceMove>,
) {
    for direction in directions {
        let mut cursor = from;
        while let Some(to) = cursor.add_direction(*direction) {
            match board.piece_at(to) {
                None => out.push(PieceMove::new(from, to)),
                Some(piece) => {
                    if piece.color() != color {
                        out.push(PieceMove::new(from, to));
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
}
