//! King steps and castling destinations.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastleSide, Color, PieceKind};
use crate::game_state::geometry::{Square, ALL_DIRECTIONS};
use crate::game_state::piece_move::PieceMove;
use crate::move_generation::legal_move_shared::push_leaping_moves;

pub fn generate_king_moves(
    board: &Board,
    from: Square,
    color: Color,
    moved: bool,
    out: &mut Vec<PieceMove>,
) {
    push_leaping_moves(board, from, color, &ALL_DIRECTIONS, out);

    if moved {
        return;
    }
    for side in [CastleSide::KingSide, CastleSide::QueenSide] {
        let Some(to) = Square::from_indices(side.king_destination_column(), from.row().index())
        else {
            continue;
        };
        let candidate = PieceMove::new(from, to);
        if can_castle(board, candidate) {
            out.push(candidate);
        }
    }
}

/// Wing a king move castles towards, if it is shaped like castling.
pub fn castle_side(board: &Board, piece_move: PieceMove) -> Option<CastleSide> {
    let king = board.piece_at(piece_move.start)?;
    if king.kind() != PieceKind::King
        || piece_move.row_delta() != 0
        || piece_move.column_delta().abs() != 2
    {
        return None;
    }
    CastleSide::from_king_destination(piece_move.end.column().index())
}

/// Structural castling precondition: unmoved king on its home square, unmoved
/// friendly rook on the wing's corner, and nothing between them.
///
/// Attacked squares are not considered here; the check filter in
/// `legal_move_generator` rejects castling out of or through check.
pub fn can_castle(board: &Board, piece_move: PieceMove) -> bool {
    let Some(side) = castle_side(board, piece_move) else {
        return false;
    };
    let Some(king) = board.piece_at(piece_move.start) else {
        return false;
    };
    let color = king.color();
    let row = color.home_row();
    if king.has_moved()
        || piece_move.start.row().index() != row
        || piece_move.start.column().index() != CastleSide::KING_START_COLUMN
    {
        return false;
    }

    let Some(rook_square) = Square::from_indices(side.rook_column(), row) else {
        return false;
    };
    match board.piece_at(rook_square) {
        Some(rook) if rook.kind() == PieceKind::Rook && rook.color() == color && !rook.has_moved() => {}
        _ => return false,
    }

    let king_column = CastleSide::KING_START_COLUMN;
    let rook_column = side.rook_column();
    let (low, high) = if king_column < rook_column {
        (king_column + 1, rook_column)
    } else {
        (rook_column + 1, king_column)
    };
    (low..high)
        .filter_map(|column| Square::from_indices(column, row))
        .all(|sq| board.is_empty_at(sq))
}
