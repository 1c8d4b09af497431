//! Tagged results handed to the presentation layer after every session
//! operation. Errors travel separately as `ChessError`.

use std::fmt;

use crate::chess_errors::InvariantViolation;
use crate::classification::move_classifier::{is_checkmate, is_stalemate, MoveType};
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::notation::log_entry::LogEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Ok {
        board: Board,
        log: Vec<LogEntry>,
    },
    Check {
        board: Board,
        side_in_check: Color,
        log: Vec<LogEntry>,
    },
    Checkmate {
        board: Board,
        losing_side: Color,
        log: Vec<LogEntry>,
    },
    Stalemate {
        board: Board,
        log: Vec<LogEntry>,
    },
    /// Nothing changed.
    Empty(EmptyReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmptyReason {
    NotYourTurn,
    /// The persisted log moved on since this session last looked.
    StaleSession,
    IllegalMove,
    NoNewEntries,
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            EmptyReason::NotYourTurn => "not your turn",
            EmptyReason::StaleSession => "board is stale, refresh first",
            EmptyReason::IllegalMove => "illegal move",
            EmptyReason::NoNewEntries => "no new moves",
        };
        f.write_str(text)
    }
}

impl SessionOutcome {
    pub fn board(&self) -> Option<&Board> {
        match self {
            SessionOutcome::Ok { board, .. }
            | SessionOutcome::Check { board, .. }
            | SessionOutcome::Checkmate { board, .. }
            | SessionOutcome::Stalemate { board, .. } => Some(board),
            SessionOutcome::Empty(_) => None,
        }
    }

    pub fn log(&self) -> Option<&[LogEntry]> {
        match self {
            SessionOutcome::Ok { log, .. }
            | SessionOutcome::Check { log, .. }
            | SessionOutcome::Checkmate { log, .. }
            | SessionOutcome::Stalemate { log, .. } => Some(log),
            SessionOutcome::Empty(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SessionOutcome::Empty(_))
    }
}

/// Status of `board` from the point of view of the side to move.
pub fn outcome_for_position(
    board: Board,
    log: Vec<LogEntry>,
) -> Result<SessionOutcome, InvariantViolation> {
    let side = board.side_to_move();
    if is_checkmate(&board)? {
        return Ok(SessionOutcome::Checkmate {
            board,
            losing_side: side,
            log,
        });
    }
    if is_king_in_check(&board, side)? {
        return Ok(SessionOutcome::Check {
            board,
            side_in_check: side,
            log,
        });
    }
    if is_stalemate(&board)? {
        return Ok(SessionOutcome::Stalemate { board, log });
    }
    Ok(SessionOutcome::Ok { board, log })
}

/// Outcome of a move already classified as `move_type`; `board` is the
/// position after it.
pub fn outcome_for_move(move_type: MoveType, board: Board, log: Vec<LogEntry>) -> SessionOutcome {
    let defender = board.side_to_move();
    match move_type {
        MoveType::Illegal => SessionOutcome::Empty(EmptyReason::IllegalMove),
        MoveType::Checkmate => SessionOutcome::Checkmate {
            board,
            losing_side: defender,
            log,
        },
        MoveType::Check => SessionOutcome::Check {
            board,
            side_in_check: defender,
            log,
        },
        MoveType::Stalemate => SessionOutcome::Stalemate { board, log },
        MoveType::Castle
        | MoveType::Promotion
        | MoveType::EnPassant
        | MoveType::Capture
        | MoveType::Regular => SessionOutcome::Ok { board, log },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::replay::replay_log;

    fn entries(texts: &[&str]) -> Vec<LogEntry> {
        texts.iter().map(|t| LogEntry::from_text(*t)).collect()
    }

    #[test]
    fn position_status_follows_the_side_to_move() {
        let quiet = outcome_for_position(Board::new_game(), Vec::new()).expect("status");
        assert!(matches!(quiet, SessionOutcome::Ok { .. }));

        let log = entries(&["Pf2f3", "Pe7e5", "Pg2g4", "Qd8h4"]);
        let mated = replay_log(&log).expect("replay");
        assert!(matches!(
            outcome_for_position(mated, log),
            Ok(SessionOutcome::Checkmate {
                losing_side: Color::Light,
                ..
            })
        ));

        let log = entries(&["Pf2f3", "Pe7e5", "Pd2d4", "Qd8h4"]);
        let checked = replay_log(&log).expect("replay");
        assert!(matches!(
            outcome_for_position(checked, log),
            Ok(SessionOutcome::Check {
                side_in_check: Color::Light,
                ..
            })
        ));
    }

    #[test]
    fn stalemated_position_reports_stalemate() {
        let board = Board::from_diagram(
            "
            .......k
            .....K..
            ......Q.
            ........
            ........
            ........
            ........
            ........
            ",
            Color::Dark,
        )
        .expect("diagram");
        assert!(matches!(
            outcome_for_position(board, Vec::new()),
            Ok(SessionOutcome::Stalemate { .. })
        ));
    }

    #[test]
    fn move_types_map_onto_outcomes() {
        let board = Board::new_game();
        assert_eq!(
            outcome_for_move(MoveType::Illegal, board.clone(), Vec::new()),
            SessionOutcome::Empty(EmptyReason::IllegalMove)
        );
        assert!(matches!(
            outcome_for_move(MoveType::Capture, board.clone(), Vec::new()),
            SessionOutcome::Ok { .. }
        ));
        assert!(matches!(
            outcome_for_move(MoveType::Check, board, Vec::new()),
            SessionOutcome::Check {
                side_in_check: Color::Light,
                ..
            }
        ));
    }
}
