//! Geometric traits of a move, independent of check status.
//!
//! The classifier turns these into one `MoveType`; the log codec turns them
//! into markers. A capture that gives check is a `Check` for the classifier
//! but still carries an `x` in the log, which is why the two are kept apart.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastleSide, PieceKind};
use crate::game_state::piece_move::PieceMove;
use crate::move_generation::legal_moves_king::castle_side;
use crate::move_generation::legal_moves_pawn::is_en_passant;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveTraits {
    pub castle: Option<CastleSide>,
    pub promotion: Option<PieceKind>,
    pub en_passant: bool,
    pub capture: bool,
}

/// Traits of `piece_move` on `board`. An empty origin yields no traits.
pub fn move_traits(board: &Board, piece_move: PieceMove) -> MoveTraits {
    let Some(piece) = board.piece_at(piece_move.start) else {
        return MoveTraits::default();
    };
    let en_passant = is_en_passant(board, piece_move);
    let capture = en_passant
        || board
            .piece_at(piece_move.end)
            .is_some_and(|target| target.color() != piece.color());
    let promotion = (piece.kind() == PieceKind::Pawn
        && piece_move.end.row().index() == piece.color().promotion_row())
    .then_some(PieceKind::Queen);

    MoveTraits {
        castle: castle_side(board, piece_move),
        promotion,
        en_passant,
        capture,
    }
}
