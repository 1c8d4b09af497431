//! Pawn pushes, double steps, diagonal captures and en passant.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::geometry::{Direction, Square};
use crate::game_state::piece_move::PieceMove;

pub fn generate_pawn_moves(
    board: &Board,
    from: Square,
    color: Color,
    moved: bool,
    out: &mut Vec<PieceMove>,
) {
    let step = color.pawn_step();
    let forward = Direction::new(0, step);

    if let Some(one) = from.add_direction(forward) {
        if board.is_empty_at(one) {
            out.push(PieceMove::new(from, one));
            if !moved {
                if let Some(two) = one.add_direction(forward) {
                    if board.is_empty_at(two) {
                        out.push(PieceMove::new(from, two));
                    }
                }
            }
        }
    }

    for d_column in [-1, 1] {
        let Some(target) = from.add_direction(Direction::new(d_column, step)) else {
            continue;
        };
        match board.piece_at(target) {
            Some(piece) if piece.color() != color => out.push(PieceMove::new(from, target)),
            Some(_) => {}
            None => {
                if en_passant_victim(board, from, d_column, color).is_some() {
                    out.push(PieceMove::new(from, target));
                }
            }
        }
    }
}

/// Square of the enemy pawn beside `from` (in direction `d_column`) that
/// advanced two squares on the immediately preceding ply.
pub fn en_passant_victim(board: &Board, from: Square, d_column: i8, color: Color) -> Option<Square> {
    let beside = from.add_direction(Direction::new(d_column, 0))?;
    let piece = board.piece_at(beside)?;
    if piece.color() != color && piece.kind() == PieceKind::Pawn && piece.is_en_passant_target() {
        Some(beside)
    } else {
        None
    }
}

/// True when `piece_move` is a pawn's diagonal step onto an empty square
/// behind a freshly double-stepped enemy pawn.
pub fn is_en_passant(board: &Board, piece_move: PieceMove) -> bool {
    let Some(piece) = board.piece_at(piece_move.start) else {
        return false;
    };
    piece.kind() == PieceKind::Pawn
        && piece_move.column_delta().abs() == 1
        && piece_move.row_delta() == piece.color().pawn_step()
        && board.is_empty_at(piece_move.end)
        && en_passant_victim(board, piece_move.start, piece_move.column_delta(), piece.color())
            .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(text: &str) -> Square {
        text.parse().expect("square should parse")
    }

    fn targets(board: &Board, from: &str) -> Vec<String> {
        let from = sq(from);
        let piece = board.piece_at(from).expect("pawn should be present");
        let mut out = Vec::new();
        generate_pawn_moves(board, from, piece.color(), piece.has_moved(), &mut out);
        out.iter().map(|m| m.end.to_string()).collect()
    }

    #[test]
    fn unmoved_pawn_may_advance_one_or_two() {
        let board = Board::new_game();
        assert_eq!(targets(&board, "e2"), vec!["e3", "e4"]);
        assert_eq!(targets(&board, "d7"), vec!["d6", "d5"]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let board = Board::from_diagram(
            "
            ....k...
            ........
            ........
            ........
            ........
            ....n...
            ....P...
            ....K...
            ",
            Color::Light,
        )
        .expect("diagram should parse");
        assert!(targets(&board, "e2").is_empty());
    }

    #[test]
    fn pawn_captures_diagonally_only_enemies() {
        let board = Board::from_diagram(
            "
            ....k...
            ........
            ........
            ........
            ........
            ...n.N..
            ....P...
            ....K...
            ",
            Color::Light,
        )
        .expect("diagram should parse");
        assert_eq!(targets(&board, "e2"), vec!["e3", "e4", "d3"]);
    }

    #[test]
    fn stale_double_step_is_not_capturable() {
        // A diagram pawn never counts as freshly double-stepped.
        let board = Board::from_diagram(
            "
            ....k...
            ........
            ........
            ...pP...
            ........
            ........
            ........
            ....K...
            ",
            Color::Light,
        )
        .expect("diagram should parse");
        assert_eq!(targets(&board, "e5"), vec!["e6"]);
        assert!(!is_en_passant(&board, PieceMove::new(sq("e5"), sq("d6"))));
    }
}
