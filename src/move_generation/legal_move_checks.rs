//! King safety.
//!
//! Both tests are built on the pseudo-legal generator only. Using the
//! filtered generator here would recurse without end.

use crate::chess_errors::InvariantViolation;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::piece_move::PieceMove;
use crate::move_generation::legal_move_generator::pseudo_legal_moves;

/// True when `color`'s king square is among the pseudo-legal destinations of
/// any opposing piece.
pub fn is_king_in_check(board: &Board, color: Color) -> Result<bool, InvariantViolation> {
    let king = board.king_square(color)?;
    Ok(board
        .pieces_of(color.opposite())
        .any(|(square, _)| pseudo_legal_moves(board, square).iter().any(|m| m.end == king)))
}

/// Simulates `piece_move` on a copy of `board` and tests the mover's king.
pub fn is_king_in_check_after(
    board: &Board,
    piece_move: PieceMove,
) -> Result<bool, InvariantViolation> {
    let mover = board
        .piece_at(piece_move.start)
        .ok_or(InvariantViolation::EmptyOrigin(piece_move.start))?
        .color();
    let next = board.apply(piece_move)?;
    is_king_in_check(&next, mover)
}
