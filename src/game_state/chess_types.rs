//! Small closed vocabularies shared by the whole engine: sides, piece kinds
//! and castling wings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side to move. Light moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row holding this side's king and rooks at the start.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }

    /// Row holding this side's pawns at the start.
    #[inline]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Color::Light => 1,
            Color::Dark => 6,
        }
    }

    /// Farthest row for this side's pawns.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }

    /// Row delta of a single pawn step.
    #[inline]
    pub const fn pawn_step(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "white"),
            Color::Dark => write!(f, "black"),
        }
    }
}

/// Piece kind without owner or per-instance state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Upper-case letter used in move text.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Accepts either case.
    pub fn from_letter(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// Castling wing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const KING_START_COLUMN: u8 = 4;

    /// Column of the rook that takes part in castling on this wing.
    #[inline]
    pub const fn rook_column(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// Column the king lands on.
    #[inline]
    pub const fn king_destination_column(self) -> u8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// Column the rook lands on, which is also the square the king crosses.
    #[inline]
    pub const fn rook_destination_column(self) -> u8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Wing implied by a king destination column, if any.
    pub const fn from_king_destination(column: u8) -> Option<Self> {
        match column {
            6 => Some(CastleSide::KingSide),
            2 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_letters_round_trip_in_either_case() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_letter(kind.letter()), Some(kind));
            assert_eq!(
                PieceKind::from_letter(kind.letter().to_ascii_lowercase()),
                Some(kind)
            );
        }
        assert_eq!(PieceKind::from_letter('x'), None);
    }

    #[test]
    fn sides_mirror_each_other() {
        assert_eq!(Color::Light.opposite(), Color::Dark);
        assert_eq!(Color::Light.home_row() + Color::Dark.home_row(), 7);
        assert_eq!(Color::Light.pawn_row() + Color::Dark.pawn_row(), 7);
        assert_eq!(Color::Light.pawn_step(), -Color::Dark.pawn_step());
        assert_eq!(Color::Dark.to_string(), "black");
    }
}
