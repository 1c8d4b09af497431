//! Rebuilding a board from the persisted log.
//!
//! Replay is a strict left fold from the initial position: each entry is
//! decoded against the board it was recorded on, re-classified, and applied.
//! A persisted entry that fails any of those steps means the log and the
//! rules disagree, which is reported as an invariant violation rather than
//! producing a plausible board.

use log::debug;

use crate::chess_errors::InvariantViolation;
use crate::classification::move_classifier::{classify_move, MoveType};
use crate::game_state::board::Board;
use crate::notation::log_entry::LogEntry;

/// Applies the entry at zero-based position `ply` to `board`.
pub fn replay_step(board: &Board, ply: usize, entry: &LogEntry) -> Result<Board, InvariantViolation> {
    let rejected = |reason: String| InvariantViolation::ReplayEntryRejected {
        ply,
        entry: entry.as_str().to_owned(),
        reason,
    };

    let mv = entry.decode(board).map_err(|err| rejected(err.to_string()))?;
    let classified = classify_move(board, mv.piece_move())?;
    if classified.move_type == MoveType::Illegal {
        return Err(rejected(format!(
            "{mv} is illegal for {} in the replayed position",
            board.side_to_move()
        )));
    }
    debug!("replay ply {ply}: {entry} -> {}", classified.move_type);

    classified
        .board_after
        .ok_or_else(|| rejected("classified move produced no board".to_owned()))
}

/// Folds every entry onto the initial position. An empty log is the
/// initial position.
pub fn replay_log(entries: &[LogEntry]) -> Result<Board, InvariantViolation> {
    entries
        .iter()
        .enumerate()
        .try_fold(Board::new_game(), |board, (ply, entry)| {
            replay_step(&board, ply, entry)
        })
}
