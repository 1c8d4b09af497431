//! Log-form move text, the only thing persisted for replay.
//!
//! A log entry starts from the play form and adds markers the board does not
//! need but a reader of the log does:
//!
//! - `x` between origin and destination for captures (`Pe4xd5`);
//! - `=Q` after the destination for promotions (`Pa7a8=Q`);
//! - `.ep` at the end for en passant (`Pe5xd6.ep`);
//! - castling is written as a bare marker instead: `O-O` for the king side
//!   and `o-o-o` for the queen side. The two literals are kept exactly as
//!   they are; neither is normalised to the other's casing.
//!
//! Decoding checks every marker against what the board infers, so an entry
//! that no longer fits the replayed position is reported rather than
//! silently accepted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chess_errors::InputError;
use crate::classification::special_moves::{move_traits, MoveTraits};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastleSide, PieceKind};
use crate::game_state::geometry::Square;
use crate::game_state::piece_move::PieceMove;
use crate::notation::play_notation::{parse_square, Move};

pub const KING_SIDE_CASTLE_MARKER: &str = "O-O";
pub const QUEEN_SIDE_CASTLE_MARKER: &str = "o-o-o";
pub const CAPTURE_MARKER: char = 'x';
pub const PROMOTION_MARKER: char = '=';
pub const EN_PASSANT_SUFFIX: &str = ".ep";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogEntry(String);

impl LogEntry {
    /// Wraps persisted text without interpreting it.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Log text for `mv` played on `board`.
    pub fn record(board: &Board, mv: &Move) -> Self {
        let traits = move_traits(board, mv.piece_move());
        Self(encode(mv, traits))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The move this entry denotes on `board`.
    pub fn decode(&self, board: &Board) -> Result<Move, InputError> {
        let text = self.0.as_str();
        if let Some(side) = castle_marker_side(text) {
            return decode_castle(text, side, board);
        }

        let parsed = ParsedEntry::parse(text)?;
        let mv = Move::parse(&parsed.play_text(), board)?;
        let traits = move_traits(board, mv.piece_move());

        let mismatch = |detail: &str| InputError::LogEntryMismatch {
            entry: text.to_owned(),
            detail: detail.to_owned(),
        };
        if traits.castle.is_some() {
            return Err(mismatch("castling must be written with a castle marker"));
        }
        if traits.capture != parsed.capture {
            return Err(mismatch("capture marker does not match the board"));
        }
        if traits.promotion != parsed.promotion {
            return Err(mismatch("promotion marker does not match the board"));
        }
        if traits.en_passant != parsed.en_passant {
            return Err(mismatch("en passant marker does not match the board"));
        }
        Ok(mv)
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn encode(mv: &Move, traits: MoveTraits) -> String {
    match traits.castle {
        Some(CastleSide::KingSide) => return KING_SIDE_CASTLE_MARKER.to_owned(),
        Some(CastleSide::QueenSide) => return QUEEN_SIDE_CASTLE_MARKER.to_owned(),
        None => {}
    }

    let piece_move = mv.piece_move();
    let mut out = String::with_capacity(12);
    out.push(mv.piece().letter());
    out.push_str(&piece_move.start.to_string());
    if traits.capture {
        out.push(CAPTURE_MARKER);
    }
    out.push_str(&piece_move.end.to_string());
    if let Some(kind) = traits.promotion {
        out.push(PROMOTION_MARKER);
        out.push(kind.letter());
    }
    if traits.en_passant {
        out.push_str(EN_PASSANT_SUFFIX);
    }
    out
}

fn castle_marker_side(text: &str) -> Option<CastleSide> {
    match text {
        KING_SIDE_CASTLE_MARKER => Some(CastleSide::KingSide),
        QUEEN_SIDE_CASTLE_MARKER => Some(CastleSide::QueenSide),
        _ => None,
    }
}

fn decode_castle(text: &str, side: CastleSide, board: &Board) -> Result<Move, InputError> {
    let row = board.side_to_move().home_row();
    let squares = (
        Square::from_indices(CastleSide::KING_START_COLUMN, row),
        Square::from_indices(side.king_destination_column(), row),
    );
    let (Some(start), Some(end)) = squares else {
        return Err(InputError::MalformedLogEntry(text.to_owned()));
    };
    let mv = Move::for_board(board, PieceMove::new(start, end))?;
    if mv.piece() != PieceKind::King {
        return Err(InputError::LogEntryMismatch {
            entry: text.to_owned(),
            detail: format!("no king on {start} to castle with"),
        });
    }
    Ok(mv)
}

/// Structural pieces of a non-castling entry.
struct ParsedEntry {
    letter: char,
    start: Square,
    end: Square,
    capture: bool,
    promotion: Option<PieceKind>,
    en_passant: bool,
}

impl ParsedEntry {
    fn parse(text: &str) -> Result<Self, InputError> {
        let malformed = || InputError::MalformedLogEntry(text.to_owned());

        let (body, en_passant) = match text.strip_suffix(EN_PASSANT_SUFFIX) {
            Some(body) => (body, true),
            None => (text, false),
        };
        let chars: Vec<char> = body.chars().collect();
        if chars.len() < 5 {
            return Err(malformed());
        }

        let letter = chars[0];
        let start = parse_square(&chars[1..3]).map_err(|_| malformed())?;
        let mut cursor = 3;
        let capture = chars[cursor] == CAPTURE_MARKER;
        if capture {
            cursor += 1;
        }
        let end = chars
            .get(cursor..cursor + 2)
            .ok_or_else(malformed)
            .and_then(|sq| parse_square(sq).map_err(|_| malformed()))?;
        cursor += 2;

        let promotion = match &chars[cursor..] {
            [] => None,
            [PROMOTION_MARKER, letter] => {
                Some(PieceKind::from_letter(*letter).ok_or_else(malformed)?)
            }
            _ => return Err(malformed()),
        };

        Ok(Self {
            letter,
            start,
            end,
            capture,
            promotion,
            en_passant,
        })
    }

    fn play_text(&self) -> String {
        format!("{}{}{}", self.letter, self.start, self.end)
    }
}
