//! Play-form move text.
//!
//! Two input shapes are accepted:
//!
//! - full: `<PieceLetter><fromFile><fromRank><toFile><toRank>`, e.g. `Ng1f3`;
//! - abbreviated: `<fromFile><fromRank><toFile><toRank>`, e.g. `e2e4`, where
//!   the piece letter is read off the origin square.
//!
//! The canonical play form is always the full shape with an upper-case
//! letter. It carries no capture, promotion, en passant or castle markers;
//! the board infers all of those when the move is applied.

use std::fmt;

use crate::chess_errors::InputError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::geometry::Square;
use crate::game_state::piece_move::PieceMove;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    piece: PieceKind,
    piece_move: PieceMove,
}

impl Move {
    /// Builds a move for the piece standing on `piece_move.start`.
    pub fn for_board(board: &Board, piece_move: PieceMove) -> Result<Self, InputError> {
        let piece = board
            .piece_at(piece_move.start)
            .ok_or(InputError::EmptyOrigin(piece_move.start))?;
        Ok(Self {
            piece: piece.kind(),
            piece_move,
        })
    }

    /// Parses user or log text in either accepted shape against `board`.
    pub fn parse(text: &str, board: &Board) -> Result<Self, InputError> {
        let trimmed = text.trim();
        let chars: Vec<char> = trimmed.chars().collect();
        let (named, squares) = match chars.len() {
            4 => (None, &chars[..]),
            5 => {
                let letter = chars[0];
                let kind = PieceKind::from_letter(letter)
                    .ok_or(InputError::UnknownPieceLetter(letter))?;
                (Some(kind), &chars[1..])
            }
            _ => return Err(InputError::MalformedMove(text.to_owned())),
        };

        let start = parse_square(&squares[0..2])?;
        let end = parse_square(&squares[2..4])?;
        let mv = Self::for_board(board, PieceMove::new(start, end))?;

        if let Some(named) = named {
            if named != mv.piece {
                return Err(InputError::PieceMismatch {
                    square: start,
                    named,
                    found: mv.piece,
                });
            }
        }
        Ok(mv)
    }

    #[inline]
    pub const fn piece(&self) -> PieceKind {
        self.piece
    }

    #[inline]
    pub const fn piece_move(&self) -> PieceMove {
        self.piece_move
    }
}

/// Canonical play form, e.g. `Pa2a4`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.piece.letter(), self.piece_move)
    }
}

pub(crate) fn parse_square(chars: &[char]) -> Result<Square, InputError> {
    let text: String = chars.iter().collect();
    text.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::move_classifier::{classify, MoveType};
    use crate::game_state::chess_types::Color;
    use crate::move_generation::legal_move_generator::all_legal_moves;

    #[test]
    fn abbreviated_form_infers_the_piece() {
        let board = Board::new_game();
        let mv = Move::parse("g1f3", &board).expect("move should parse");
        assert_eq!(mv.piece(), PieceKind::Knight);
        assert_eq!(mv.to_string(), "Ng1f3");

        let pawn = Move::parse("a2a4", &board).expect("move should parse");
        assert_eq!(pawn.to_string(), "Pa2a4");
    }

    #[test]
    fn full_form_must_name_the_right_piece() {
        let board = Board::new_game();
        assert!(Move::parse("Ng1f3", &board).is_ok());
        assert!(Move::parse("ng1f3", &board).is_ok());
        assert_eq!(
            Move::parse("Bg1f3", &board),
            Err(InputError::PieceMismatch {
                square: "g1".parse().expect("g1"),
                named: PieceKind::Bishop,
                found: PieceKind::Knight,
            })
        );
    }

    #[test]
    fn malformed_text_is_rejected() {
        let board = Board::new_game();
        assert!(matches!(
            Move::parse("e2", &board),
            Err(InputError::MalformedMove(_))
        ));
        assert!(matches!(
            Move::parse("Ne2e4x", &board),
            Err(InputError::MalformedMove(_))
        ));
        assert!(matches!(
            Move::parse("e9e4", &board),
            Err(InputError::InvalidSquare(_))
        ));
        assert!(matches!(
            Move::parse("Xe2e4", &board),
            Err(InputError::UnknownPieceLetter('X'))
        ));
        assert_eq!(
            Move::parse("e4e5", &board),
            Err(InputError::EmptyOrigin("e4".parse().expect("e4")))
        );
    }

    #[test]
    fn play_form_round_trips_for_every_legal_move() {
        let board = Board::new_game();
        for candidate in all_legal_moves(&board, Color::Light).expect("moves") {
            let mv = Move::for_board(&board, candidate).expect("piece on origin");
            assert_ne!(classify(&board, candidate), Ok(MoveType::Illegal));
            assert_eq!(Move::parse(&mv.to_string(), &board), Ok(mv));
        }
    }
}
