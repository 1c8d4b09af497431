//! Pieces as immutable values.
//!
//! Pawns, rooks and kings carry a "has moved" flag (castling and the pawn
//! double step depend on it). Pawns also carry a move counter: the number of
//! plies elapsed since the pawn's double advance, `0` when it never made one.
//! A counter of exactly `1` means the pawn advanced two squares on the ply
//! just played and may be taken en passant.
//!
//! Moving a piece never mutates it; `after_move` and `aged` return new values.

use crate::game_state::chess_types::{Color, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Pawn {
        color: Color,
        moved: bool,
        move_counter: u16,
    },
    Rook {
        color: Color,
        moved: bool,
    },
    Knight {
        color: Color,
    },
    Bishop {
        color: Color,
    },
    Queen {
        color: Color,
    },
    King {
        color: Color,
        moved: bool,
    },
}

impl Piece {
    /// A fresh, unmoved piece.
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        match kind {
            PieceKind::Pawn => Piece::Pawn {
                color,
                moved: false,
                move_counter: 0,
            },
            PieceKind::Rook => Piece::Rook {
                color,
                moved: false,
            },
            PieceKind::Knight => Piece::Knight { color },
            PieceKind::Bishop => Piece::Bishop { color },
            PieceKind::Queen => Piece::Queen { color },
            PieceKind::King => Piece::King {
                color,
                moved: false,
            },
        }
    }

    #[inline]
    pub const fn color(self) -> Color {
        match self {
            Piece::Pawn { color, .. }
            | Piece::Rook { color, .. }
            | Piece::Knight { color }
            | Piece::Bishop { color }
            | Piece::Queen { color }
            | Piece::King { color, .. } => color,
        }
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self {
            Piece::Pawn { .. } => PieceKind::Pawn,
            Piece::Rook { .. } => PieceKind::Rook,
            Piece::Knight { .. } => PieceKind::Knight,
            Piece::Bishop { .. } => PieceKind::Bishop,
            Piece::Queen { .. } => PieceKind::Queen,
            Piece::King { .. } => PieceKind::King,
        }
    }

    /// Knights, bishops and queens do not track movement and report `false`.
    #[inline]
    pub const fn has_moved(self) -> bool {
        match self {
            Piece::Pawn { moved, .. } | Piece::Rook { moved, .. } | Piece::King { moved, .. } => {
                moved
            }
            Piece::Knight { .. } | Piece::Bishop { .. } | Piece::Queen { .. } => false,
        }
    }

    #[inline]
    pub const fn move_counter(self) -> u16 {
        match self {
            Piece::Pawn { move_counter, .. } => move_counter,
            _ => 0,
        }
    }

    /// A pawn that advanced two squares on the immediately preceding ply.
    #[inline]
    pub const fn is_en_passant_target(self) -> bool {
        matches!(self, Piece::Pawn { move_counter: 1, .. })
    }

    /// The piece as it stands after making a move. `double_step` marks a
    /// pawn's two-square advance.
    pub const fn after_move(self, double_step: bool) -> Self {
        match self {
            Piece::Pawn {
                color,
                move_counter,
                ..
            } => Piece::Pawn {
                color,
                moved: true,
                move_counter: if double_step { 1 } else { move_counter },
            },
            Piece::Rook { color, .. } => Piece::Rook { color, moved: true },
            Piece::King { color, .. } => Piece::King { color, moved: true },
            other => other,
        }
    }

    /// The piece one ply later. Only a started pawn counter changes.
    pub const fn aged(self) -> Self {
        match self {
            Piece::Pawn {
                color,
                moved,
                move_counter,
            } if move_counter > 0 => Piece::Pawn {
                color,
                moved,
                move_counter: move_counter.saturating_add(1),
            },
            other => other,
        }
    }

    /// Diagram letter: upper case for Light, lower case for Dark.
    pub fn diagram_char(self) -> char {
        let letter = self.kind().letter();
        match self.color() {
            Color::Light => letter,
            Color::Dark => letter.to_ascii_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_step_starts_the_counter_and_aging_moves_it_on() {
        let pawn = Piece::new(PieceKind::Pawn, Color::Light);
        assert!(!pawn.has_moved());
        assert_eq!(pawn.aged(), pawn);

        let advanced = pawn.after_move(true);
        assert!(advanced.has_moved());
        assert!(advanced.is_en_passant_target());

        let later = advanced.aged();
        assert_eq!(later.move_counter(), 2);
        assert!(!later.is_en_passant_target());
    }

    #[test]
    fn single_step_keeps_counter_at_zero() {
        let pawn = Piece::new(PieceKind::Pawn, Color::Dark).after_move(false);
        assert_eq!(pawn.move_counter(), 0);
        assert!(!pawn.is_en_passant_target());
    }

    #[test]
    fn moving_produces_a_new_value() {
        let rook = Piece::new(PieceKind::Rook, Color::Light);
        let moved = rook.after_move(false);
        assert!(!rook.has_moved());
        assert!(moved.has_moved());
        assert_eq!(moved.kind(), PieceKind::Rook);

        let queen = Piece::new(PieceKind::Queen, Color::Dark);
        assert_eq!(queen.after_move(false), queen);
        assert_eq!(queen.diagram_char(), 'q');
    }
}
