//! Canonical chess-rule constants.
//!
//! The standard starting layout, both as the back-rank order used by
//! `Board::new_game` and as a board diagram (row 8 first).

use crate::game_state::chess_types::PieceKind;

/// Piece order along each side's home row, column `a` to `h`.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const STARTING_POSITION_DIAGRAM: &str = "\
rnbqkbnr
pppppppp
........
........
........
........
PPPPPPPP
RNBQKBNR";

/// Empty diagram square.
pub const EMPTY_SQUARE_CHAR: char = '.';
