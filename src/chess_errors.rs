//! Errors used throughout the crate.
//!
//! `ChessError` is the single error type returned by session operations. It
//! wraps three distinct kinds so callers can tell gameplay mistakes apart from
//! infrastructure failures and from programming defects:
//!
//! - `InputError`: the caller supplied something malformed (move text, game
//!   identifier, board diagram). Nothing changed; present it to the user.
//! - `StoreError`: the persisted log could not be read or written. Nothing was
//!   swallowed; the caller decides whether to retry.
//! - `InvariantViolation`: the engine reached a state that should be
//!   impossible (missing king, a persisted entry that no longer replays).
//!   These are bugs or corrupted data and must not be papered over.
//!
//! Illegal moves and out-of-turn plays are not errors at all; they come back
//! as `SessionOutcome::Empty`.

use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::geometry::Square;

/// Umbrella error for every fallible public operation.
#[derive(Debug, thiserror::Error)]
pub enum ChessError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

impl ChessError {
    /// True for errors caused by the caller's input rather than the engine.
    pub fn is_input(&self) -> bool {
        matches!(self, ChessError::Input(_))
    }

    /// True for programming defects and corrupted persisted state.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, ChessError::Invariant(_))
    }
}

/// Recoverable, user-facing rejections. Raised before any state changes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("malformed move text: {0:?}")]
    MalformedMove(String),

    #[error("invalid square notation: {0:?}")]
    InvalidSquare(String),

    #[error("unknown piece letter: {0:?}")]
    UnknownPieceLetter(char),

    #[error("no piece stands on {0}")]
    EmptyOrigin(Square),

    #[error("move names a {named:?} but {square} holds a {found:?}")]
    PieceMismatch {
        square: Square,
        named: PieceKind,
        found: PieceKind,
    },

    #[error("malformed log entry: {0:?}")]
    MalformedLogEntry(String),

    #[error("log entry {entry:?} disagrees with the board: {detail}")]
    LogEntryMismatch { entry: String, detail: String },

    #[error("game identifier is missing or blank")]
    BlankGameId,

    #[error("game identifier {0:?} contains whitespace")]
    GameIdContainsWhitespace(String),

    #[error("no game named {0} exists")]
    UnknownGame(String),

    #[error("game {0} is already under way; join it instead")]
    GameAlreadyStarted(String),

    #[error("no game is open in this session")]
    NoOpenGame,

    #[error("invalid board diagram: {0}")]
    InvalidDiagram(String),
}

/// Failures of the persisted log. Never mapped to "empty log".
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed game document: {0}")]
    Document(#[from] serde_json::Error),

    #[error("store lock poisoned")]
    Poisoned,

    #[error("game id {0} cannot be used as a store key")]
    UnsupportedKey(String),

    #[error("cannot append to game {0}: document does not exist")]
    MissingDocument(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Programming defects and corrupted state. Fatal for the current operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("board holds no {0} king")]
    MissingKing(Color),

    #[error("tried to apply a move from empty square {0}")]
    EmptyOrigin(Square),

    #[error("replaying ply {ply} ({entry:?}) failed: {reason}")]
    ReplayEntryRejected {
        ply: usize,
        entry: String,
        reason: String,
    },

    #[error("persisted log shrank from {observed} to {stored} entries")]
    LogShrank { observed: usize, stored: usize },

    #[error("persisted log no longer matches the replayed entry at ply {ply}")]
    LogDiverged { ply: usize },
}
