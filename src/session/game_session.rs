//! Client-side game session.
//!
//! A session caches the board and the log entries it has replayed for one
//! game. The persisted log is the only source of truth: `open` and `join`
//! fold it from the initial position, `refresh` catches up with entries the
//! other client appended, and `play` appends exactly one new entry after the
//! move passed every local check. Nothing is appended for a rejected play.

use log::{debug, info, warn};

use crate::chess_errors::{ChessError, InputError, InvariantViolation, StoreError};
use crate::classification::move_classifier::{classify_move, MoveType};
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::notation::log_entry::LogEntry;
use crate::notation::play_notation::Move;
use crate::session::game_id::GameId;
use crate::session::game_store::GameStore;
use crate::session::replay::{replay_log, replay_step};
use crate::session::session_config::SessionConfig;
use crate::session::session_outcome::{
    outcome_for_move, outcome_for_position, EmptyReason, SessionOutcome,
};

pub type SessionResult = Result<SessionOutcome, ChessError>;

#[derive(Debug, Clone)]
struct OpenGame {
    id: GameId,
    side: Color,
    board: Board,
    log: Vec<LogEntry>,
}

#[derive(Debug)]
pub struct GameSession<S: GameStore> {
    store: S,
    config: SessionConfig,
    game: Option<OpenGame>,
}

impl<S: GameStore> GameSession<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, SessionConfig::default())
    }

    pub fn with_config(store: S, config: SessionConfig) -> Self {
        Self {
            store,
            config,
            game: None,
        }
    }

    /// Opens `id`, creating the game when it does not exist yet. The opener
    /// plays white, so a game whose log already holds moves can only be
    /// joined.
    pub fn open(&mut self, id: &str) -> SessionResult {
        let id = GameId::new(id)?;
        if self.store.create_if_absent(&id)? {
            info!("created game {id}");
        } else if self.store.entry_count(&id)? > 0 {
            return Err(InputError::GameAlreadyStarted(id.to_string()).into());
        }
        self.load(id, Color::Light)
    }

    /// Joins an existing game as black.
    pub fn join(&mut self, id: &str) -> SessionResult {
        let id = GameId::new(id)?;
        if !self.store.exists(&id)? {
            return Err(InputError::UnknownGame(id.to_string()).into());
        }
        self.load(id, Color::Dark)
    }

    fn load(&mut self, id: GameId, side: Color) -> SessionResult {
        let log = self.store.all_entries(&id)?;
        let board = replay_log(&log)?;
        info!("playing {side} in game {id} after {} entries", log.len());

        let outcome = outcome_for_position(board.clone(), log.clone())?;
        self.game = Some(OpenGame {
            id,
            side,
            board,
            log,
        });
        Ok(outcome)
    }

    /// Plays `text` (play form, full or abbreviated) for this session's side.
    pub fn play(&mut self, text: &str) -> SessionResult {
        let game = self.game.as_mut().ok_or(InputError::NoOpenGame)?;
        if game.board.side_to_move() != game.side {
            return Ok(SessionOutcome::Empty(EmptyReason::NotYourTurn));
        }

        let mv = Move::parse(text, &game.board)?;

        let stored = self.store.entry_count(&game.id)?;
        if stored != game.log.len() {
            debug!(
                "stale play in {}: stored {stored}, seen {}",
                game.id,
                game.log.len()
            );
            return Ok(SessionOutcome::Empty(EmptyReason::StaleSession));
        }

        let classified = classify_move(&game.board, mv.piece_move())?;
        let Some(next) = classified.board_after else {
            return Ok(SessionOutcome::Empty(EmptyReason::IllegalMove));
        };
        if classified.move_type == MoveType::Illegal {
            return Ok(SessionOutcome::Empty(EmptyReason::IllegalMove));
        }

        let entry = LogEntry::record(&game.board, &mv);
        if !self.store.append_entry(&game.id, &entry)? {
            warn!("game {} vanished before {entry} could be appended", game.id);
            return Err(StoreError::MissingDocument(game.id.to_string()).into());
        }
        debug!("{} played {entry} ({})", game.side, classified.move_type);

        game.board = next;
        game.log.push(entry);
        Ok(outcome_for_move(
            classified.move_type,
            game.board.clone(),
            game.log.clone(),
        ))
    }

    /// Catches up with the persisted log. The log is read once; entries
    /// past the ones already seen are applied to the cached board in order,
    /// or the whole log is refolded when so configured.
    pub fn refresh(&mut self) -> SessionResult {
        let game = self.game.as_mut().ok_or(InputError::NoOpenGame)?;
        let seen = game.log.len();
        let log = self.store.all_entries(&game.id)?;

        if log.len() < seen {
            return Err(InvariantViolation::LogShrank {
                observed: seen,
                stored: log.len(),
            }
            .into());
        }
        if let Some(ply) = (0..seen).find(|&ply| log[ply] != game.log[ply]) {
            return Err(InvariantViolation::LogDiverged { ply }.into());
        }
        if log.len() == seen {
            return Ok(SessionOutcome::Empty(EmptyReason::NoNewEntries));
        }

        game.board = if self.config.always_full_replay {
            replay_log(&log)?
        } else {
            log.iter()
                .enumerate()
                .skip(seen)
                .try_fold(game.board.clone(), |board, (ply, entry)| {
                    replay_step(&board, ply, entry)
                })?
        };
        game.log = log;
        debug!("refreshed {} to {} entries", game.id, game.log.len());

        Ok(outcome_for_position(game.board.clone(), game.log.clone())?)
    }

    pub fn game_id(&self) -> Option<&GameId> {
        self.game.as_ref().map(|game| &game.id)
    }

    pub fn side(&self) -> Option<Color> {
        self.game.as_ref().map(|game| game.side)
    }

    pub fn board(&self) -> Option<&Board> {
        self.game.as_ref().map(|game| &game.board)
    }

    pub fn log(&self) -> &[LogEntry] {
        self.game.as_ref().map_or(&[], |game| game.log.as_slice())
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
