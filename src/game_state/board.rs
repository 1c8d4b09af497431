//! Immutable board position.
//!
//! `Board` is 64 optional piece slots plus the side to move. It is never
//! updated in place: `Board::apply` (in `move_generation::legal_move_apply`)
//! returns a new value, so simulations can clone freely without aliasing.

use crate::chess_errors::{InputError, InvariantViolation};
use crate::game_state::chess_rules::{BACK_RANK, EMPTY_SQUARE_CHAR};
use crate::game_state::chess_types::{CastleSide, Color, PieceKind};
use crate::game_state::geometry::Square;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_checks::is_king_in_check;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; 64],
    side_to_move: Color,
}

impl Default for Board {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Board {
    /// Standard initial position, Light to move.
    pub fn new_game() -> Self {
        let mut cells = [None; 64];
        for color in [Color::Light, Color::Dark] {
            for (column, kind) in BACK_RANK.iter().enumerate() {
                cells[color.home_row() as usize * 8 + column] = Some(Piece::new(*kind, color));
                cells[color.pawn_row() as usize * 8 + column] =
                    Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        Self {
            cells,
            side_to_move: Color::Light,
        }
    }

    pub(crate) const fn from_cells(cells: [Option<Piece>; 64], side_to_move: Color) -> Self {
        Self {
            cells,
            side_to_move,
        }
    }

    pub(crate) const fn cells(&self) -> &[Option<Piece>; 64] {
        &self.cells
    }

    /// Builds a position from an 8-line diagram, row 8 first, `.` for empty
    /// squares, upper case for Light and lower case for Dark.
    ///
    /// Movement flags are inferred from placement: pawns on their starting
    /// row, and kings and rooks on their original squares, count as unmoved.
    /// No pawn counts as having just double-stepped.
    pub fn from_diagram(diagram: &str, side_to_move: Color) -> Result<Self, InputError> {
        let rows: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != 8 {
            return Err(InputError::InvalidDiagram(format!(
                "expected 8 rows, found {}",
                rows.len()
            )));
        }

        let mut cells = [None; 64];
        for (i, text) in rows.iter().enumerate() {
            let row = 7 - i as u8;
            let chars: Vec<char> = text.chars().collect();
            if chars.len() != 8 {
                return Err(InputError::InvalidDiagram(format!(
                    "row {} has {} squares",
                    row + 1,
                    chars.len()
                )));
            }
            for (column, ch) in chars.into_iter().enumerate() {
                if ch == EMPTY_SQUARE_CHAR {
                    continue;
                }
                let kind = PieceKind::from_letter(ch).ok_or_else(|| {
                    InputError::InvalidDiagram(format!("unknown piece character {ch:?}"))
                })?;
                let color = if ch.is_ascii_uppercase() {
                    Color::Light
                } else {
                    Color::Dark
                };
                let piece = infer_piece_state(kind, color, column as u8, row)?;
                cells[row as usize * 8 + column] = Some(piece);
            }
        }

        let board = Self {
            cells,
            side_to_move,
        };
        for color in [Color::Light, Color::Dark] {
            let kings = board
                .pieces_of(color)
                .filter(|(_, piece)| piece.kind() == PieceKind::King)
                .count();
            if kings != 1 {
                return Err(InputError::InvalidDiagram(format!(
                    "{color} has {kings} kings"
                )));
            }
        }
        if is_king_in_check(&board, side_to_move.opposite())
            .map_err(|err| InputError::InvalidDiagram(err.to_string()))?
        {
            return Err(InputError::InvalidDiagram(format!(
                "{} is in check but it is {side_to_move}'s turn",
                side_to_move.opposite()
            )));
        }
        Ok(board)
    }

    #[inline]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.index()]
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.cells[square.index()].is_none()
    }

    /// Every occupied square, a1 to h8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color() == color)
    }

    /// The square of `color`'s king. A board without one is corrupt.
    pub fn king_square(&self, color: Color) -> Result<Square, InvariantViolation> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind() == PieceKind::King)
            .map(|(sq, _)| sq)
            .ok_or(InvariantViolation::MissingKing(color))
    }
}

fn infer_piece_state(
    kind: PieceKind,
    color: Color,
    column: u8,
    row: u8,
) -> Result<Piece, InputError> {
    let home = color.home_row();
    let piece = match kind {
        PieceKind::Pawn => {
            if row == Color::Light.home_row() || row == Color::Dark.home_row() {
                return Err(InputError::InvalidDiagram(format!(
                    "{color} pawn on back row {}",
                    row + 1
                )));
            }
            Piece::Pawn {
                color,
                moved: row != color.pawn_row(),
                move_counter: 0,
            }
        }
        PieceKind::King => Piece::King {
            color,
            moved: !(row == home && column == CastleSide::KING_START_COLUMN),
        },
        PieceKind::Rook => Piece::Rook {
            color,
            moved: !(row == home
                && (column == CastleSide::KingSide.rook_column()
                    || column == CastleSide::QueenSide.rook_column())),
        },
        other => Piece::new(other, color),
    };
    Ok(piece)
}
