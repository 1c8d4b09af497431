//! Per-square move generation in two explicit flavours.
//!
//! `pseudo_legal_moves` is purely geometric. `legal_moves` re-tests each
//! pseudo-legal move by simulating it and asking whether the mover's king is
//! attacked afterwards. The attack test itself only ever uses the pseudo-legal
//! generator, which keeps the mutual recursion finite.

use crate::chess_errors::InvariantViolation;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::geometry::Square;
use crate::game_state::piece::Piece;
use crate::game_state::piece_move::PieceMove;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_king_in_check_after};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::{castle_side, generate_king_moves};
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Geometrically valid moves of the piece on `from`, ignoring king safety.
/// Empty when the square is empty.
pub fn pseudo_legal_moves(board: &Board, from: Square) -> Vec<PieceMove> {
    let mut out = Vec::with_capacity(28);
    let Some(piece) = board.piece_at(from) else {
        return out;
    };
    match piece {
        Piece::Pawn { color, moved, .. } => generate_pawn_moves(board, from, color, moved, &mut out),
        Piece::Knight { color } => generate_knight_moves(board, from, color, &mut out),
        Piece::Bishop { color } => generate_bishop_moves(board, from, color, &mut out),
        Piece::Rook { color, .. } => generate_rook_moves(board, from, color, &mut out),
        Piece::Queen { color } => generate_queen_moves(board, from, color, &mut out),
        Piece::King { color, moved } => generate_king_moves(board, from, color, moved, &mut out),
    }
    out
}

/// Pseudo-legal moves of the piece on `from` that do not leave its own king
/// attacked. Castling is also refused out of check and across an attacked
/// square.
pub fn legal_moves(board: &Board, from: Square) -> Result<Vec<PieceMove>, InvariantViolation> {
    let Some(piece) = board.piece_at(from) else {
        return Ok(Vec::new());
    };
    let mut legal = Vec::new();
    for candidate in pseudo_legal_moves(board, from) {
        if !passes_check_filter(board, piece.color(), candidate)? {
            continue;
        }
        legal.push(candidate);
    }
    Ok(legal)
}

/// Every legal move available to `color`, regardless of whose turn it is.
pub fn all_legal_moves(board: &Board, color: Color) -> Result<Vec<PieceMove>, InvariantViolation> {
    let mut legal = Vec::new();
    for (square, _) in board.pieces_of(color) {
        legal.extend(legal_moves(board, square)?);
    }
    Ok(legal)
}

/// Short-circuiting form of `!all_legal_moves(..).is_empty()`.
pub fn has_any_legal_move(board: &Board, color: Color) -> Result<bool, InvariantViolation> {
    for (square, _) in board.pieces_of(color) {
        for candidate in pseudo_legal_moves(board, square) {
            if passes_check_filter(board, color, candidate)? {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

fn passes_check_filter(
    board: &Board,
    color: Color,
    candidate: PieceMove,
) -> Result<bool, InvariantViolation> {
    if let Some(side) = castle_side(board, candidate) {
        if is_king_in_check(board, color)? {
            return Ok(false);
        }
        let Some(crossed) =
            Square::from_indices(side.rook_destination_column(), candidate.start.row().index())
        else {
            return Ok(false);
        };
        if is_king_in_check_after(board, PieceMove::new(candidate.start, crossed))? {
            return Ok(false);
        }
    }
    Ok(!is_king_in_check_after(board, candidate)?)
}
