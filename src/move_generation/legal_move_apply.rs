//! Applying a move to a board.
//!
//! The board infers every side effect from geometry and piece identity:
//! castling moves the rook, en passant removes the pawn beside the origin,
//! and a pawn reaching its farthest row becomes a queen. Every pawn counter
//! ages by one ply and the moved piece gets fresh movement flags.

use crate::chess_errors::InvariantViolation;
use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::geometry::Square;
use crate::game_state::piece::Piece;
use crate::game_state::piece_move::PieceMove;
use crate::move_generation::legal_moves_king::castle_side;
use crate::move_generation::legal_moves_pawn::is_en_passant;

impl Board {
    /// Returns the board after `piece_move`, with the opposite side to move.
    /// Legality is the caller's business; a missing origin piece is not.
    pub fn apply(&self, piece_move: PieceMove) -> Result<Board, InvariantViolation> {
        let PieceMove { start, end } = piece_move;
        let color = self
            .piece_at(start)
            .ok_or(InvariantViolation::EmptyOrigin(start))?
            .color();

        let castling = castle_side(self, piece_move);
        let en_passant = is_en_passant(self, piece_move);

        let mut cells = (*self.cells()).map(|cell| cell.map(Piece::aged));
        let moving = cells[start.index()]
            .take()
            .ok_or(InvariantViolation::EmptyOrigin(start))?;

        if let Some(side) = castling {
            let row = start.row().index();
            if let (Some(rook_from), Some(rook_to)) = (
                Square::from_indices(side.rook_column(), row),
                Square::from_indices(side.rook_destination_column(), row),
            ) {
                if let Some(rook) = cells[rook_from.index()].take() {
                    cells[rook_to.index()] = Some(rook.after_move(false));
                }
            }
        }

        if en_passant {
            if let Some(victim) = en_passant_capture_square(piece_move) {
                cells[victim.index()] = None;
            }
        }

        let promotes =
            moving.kind() == PieceKind::Pawn && end.row().index() == color.promotion_row();
        let landed = if promotes {
            Piece::new(PieceKind::Queen, color)
        } else {
            moving.after_move(is_double_step(moving, piece_move))
        };
        cells[end.index()] = Some(landed);

        Ok(Board::from_cells(cells, color.opposite()))
    }
}

fn is_double_step(piece: Piece, piece_move: PieceMove) -> bool {
    piece.kind() == PieceKind::Pawn && piece_move.row_delta().abs() == 2
}

/// Square the pawn taken en passant is removed from: beside the origin, not
/// the destination.
pub fn en_passant_capture_square(piece_move: PieceMove) -> Option<Square> {
    Square::from_indices(
        piece_move.end.column().index(),
        piece_move.start.row().index(),
    )
}

/// Applies moves in order without any legality check.
pub fn apply_all(board: &Board, moves: &[PieceMove]) -> Result<Board, InvariantViolation> {
    moves
        .iter()
        .try_fold(board.clone(), |current, mv| current.apply(*mv))
}
