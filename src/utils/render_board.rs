//! Terminal-oriented Unicode board renderer.
//!
//! Used by the console front end and handy when a test fails and the
//! position needs eyeballing.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::EMPTY_SQUARE_CHAR;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::geometry::Square;

/// Render the board to a Unicode string for terminal output, white at the
/// bottom, followed by the side to move.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in (0..8u8).rev() {
        out.push(char::from(b'1' + row));
        out.push(' ');

        for column in 0..8u8 {
            let piece = Square::from_indices(column, row).and_then(|sq| board.piece_at(sq));
            match piece {
                Some(piece) => out.push(piece_to_unicode(piece.color(), piece.kind())),
                None => out.push('·'),
            }

            if column < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + row));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h\n");
    out.push_str(&format!("{} to move", board.side_to_move()));

    out
}

/// Plain ASCII diagram in the format `Board::from_diagram` reads.
pub fn render_diagram(board: &Board) -> String {
    (0..8u8)
        .rev()
        .map(|row| {
            (0..8u8)
                .map(|column| {
                    Square::from_indices(column, row)
                        .and_then(|sq| board.piece_at(sq))
                        .map_or(EMPTY_SQUARE_CHAR, |piece| piece.diagram_char())
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}
