//! Line-oriented console front end.
//!
//! Reads one command per line from stdin, drives a `GameSession` over a
//! directory of JSON game documents, and prints boards and statuses to
//! stdout. Two consoles pointed at the same `--store` directory play each
//! other: one runs `new` or `open <id>`, the other `join <id>`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::session::game_id::GameId;
use crate::session::game_session::{GameSession, SessionResult};
use crate::session::game_store::GameStore;
use crate::session::json_file_store::JsonFileGameStore;
use crate::session::session_config::SessionConfig;
use crate::session::session_outcome::SessionOutcome;
use crate::utils::render_board::render_board;

const HELP_TEXT: &str = "\
commands:
  new               start a game with a random id and play white
  open <id>         create <id>, or reopen it before any move, and play white
  join <id>         join an existing game as black
  play <move>       play a move, e.g. e2e4 or Ng1f3
  refresh           pick up the opponent's moves
  board             show the current board
  log               show the persisted move log
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub store_dir: PathBuf,
    pub id_length: usize,
    pub verbose: bool,
    pub session: SessionConfig,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from("games"),
            id_length: 6,
            verbose: false,
            session: SessionConfig::default(),
        }
    }
}

impl ConsoleConfig {
    /// Parses `--store <dir>`, `--id-length <n>`, `--verbose` and
    /// `--full-replay`. The program name must already be stripped.
    pub fn from_args<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--store" => {
                    let dir = args.next().ok_or("--store needs a directory")?;
                    config.store_dir = PathBuf::from(dir);
                }
                "--id-length" => {
                    let value = args.next().ok_or("--id-length needs a number")?;
                    config.id_length = value
                        .parse::<usize>()
                        .ok()
                        .filter(|n| *n > 0)
                        .ok_or_else(|| format!("invalid --id-length value '{}'", value))?;
                }
                "--verbose" | "-v" => config.verbose = true,
                "--full-replay" => config.session.always_full_replay = true,
                other => return Err(format!("unknown argument '{}'", other)),
            }
        }
        Ok(config)
    }
}

pub fn run_stdio_loop(config: &ConsoleConfig) -> Result<(), String> {
    let store = JsonFileGameStore::open(&config.store_dir)
        .map_err(|err| format!("cannot open store {}: {}", config.store_dir.display(), err))?;
    let mut console = ConsoleState::new(
        GameSession::with_config(store, config.session),
        config.id_length,
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{HELP_TEXT}").map_err(|err| err.to_string())?;

    for line in stdin.lock().lines() {
        let line = line.map_err(|err| err.to_string())?;
        let should_quit = console
            .handle_command(&line, &mut stdout)
            .map_err(|err| err.to_string())?;
        stdout.flush().map_err(|err| err.to_string())?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

struct ConsoleState<S: GameStore> {
    session: GameSession<S>,
    id_length: usize,
}

impl<S: GameStore> ConsoleState<S> {
    fn new(session: GameSession<S>, id_length: usize) -> Self {
        Self {
            session,
            id_length,
        }
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let arg = parts.next().unwrap_or_default();

        match cmd {
            "new" => {
                let id = GameId::random(&mut rand::rng(), self.id_length);
                writeln!(out, "game {id}")?;
                let result = self.session.open(id.as_str());
                write_result(out, result)?;
            }
            "open" => {
                let result = self.session.open(arg);
                write_result(out, result)?;
            }
            "join" => {
                let result = self.session.join(arg);
                write_result(out, result)?;
            }
            "play" => {
                let result = self.session.play(arg);
                write_result(out, result)?;
            }
            "refresh" => {
                let result = self.session.refresh();
                write_result(out, result)?;
            }
            "board" => match self.session.board() {
                Some(board) => writeln!(out, "{}", render_board(board))?,
                None => writeln!(out, "no game open")?,
            },
            "log" => {
                let entries: Vec<&str> = self.session.log().iter().map(|e| e.as_str()).collect();
                writeln!(out, "log {}", entries.join(" "))?;
            }
            "help" => {
                writeln!(out, "{HELP_TEXT}")?;
            }
            "quit" => {
                return Ok(true);
            }
            other => {
                writeln!(out, "unknown command '{}', try help", other)?;
            }
        }

        Ok(false)
    }
}

fn write_result(out: &mut impl Write, result: SessionResult) -> io::Result<()> {
    let outcome = match result {
        Ok(outcome) => outcome,
        Err(err) if err.is_invariant_violation() => {
            return writeln!(out, "fatal: {err}");
        }
        Err(err) => return writeln!(out, "error: {err}"),
    };

    if let Some(board) = outcome.board() {
        writeln!(out, "{}", render_board(board))?;
    }
    match outcome {
        SessionOutcome::Ok { .. } => writeln!(out, "ok"),
        SessionOutcome::Check { side_in_check, .. } => {
            writeln!(out, "check: {side_in_check} is in check")
        }
        SessionOutcome::Checkmate { losing_side, .. } => {
            writeln!(out, "checkmate: {} wins", losing_side.opposite())
        }
        SessionOutcome::Stalemate { .. } => writeln!(out, "stalemate: draw"),
        SessionOutcome::Empty(reason) => writeln!(out, "rejected: {reason}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::game_store::InMemoryGameStore;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn run(console: &mut ConsoleState<InMemoryGameStore>, line: &str) -> String {
        let mut out = Vec::new();
        console
            .handle_command(line, &mut out)
            .expect("write to buffer");
        String::from_utf8(out).expect("utf-8 output")
    }

    #[test]
    fn parses_command_line_flags() {
        let config = ConsoleConfig::from_args(args(&[
            "--store",
            "/tmp/games",
            "--id-length",
            "10",
            "--verbose",
        ]))
        .expect("valid args");
        assert_eq!(config.store_dir, PathBuf::from("/tmp/games"));
        assert_eq!(config.id_length, 10);
        assert!(config.verbose);
        assert!(!config.session.always_full_replay);

        assert_eq!(ConsoleConfig::from_args(Vec::new()), Ok(ConsoleConfig::default()));
        assert!(ConsoleConfig::from_args(args(&["--id-length", "0"])).is_err());
        assert!(ConsoleConfig::from_args(args(&["--store"])).is_err());
        assert!(ConsoleConfig::from_args(args(&["--bogus"])).is_err());
    }

    #[test]
    fn two_consoles_share_a_game() {
        let store = InMemoryGameStore::new();
        let mut white = ConsoleState::new(GameSession::new(store.clone()), 6);
        let mut black = ConsoleState::new(GameSession::new(store), 6);

        assert!(run(&mut white, "open g1").ends_with("ok\n"));
        assert!(run(&mut black, "join g1").ends_with("ok\n"));
        assert!(run(&mut black, "play e7e5").ends_with("rejected: not your turn\n"));
        assert!(run(&mut white, "play e2e4").ends_with("ok\n"));
        assert!(run(&mut black, "refresh").contains("black to move"));
        assert!(run(&mut black, "play e7e5").ends_with("ok\n"));
        assert_eq!(run(&mut white, "refresh").lines().last(), Some("ok"));
        assert_eq!(run(&mut white, "log"), "log Pe2e4 Pe7e5\n");
    }

    #[test]
    fn errors_are_reported_not_fatal() {
        let mut console = ConsoleState::new(GameSession::new(InMemoryGameStore::new()), 6);
        assert!(run(&mut console, "play e2e4").starts_with("error: "));
        assert!(run(&mut console, "join missing").starts_with("error: "));
        assert_eq!(run(&mut console, "board"), "no game open\n");
        assert!(run(&mut console, "frobnicate").starts_with("unknown command"));

        let started = run(&mut console, "new");
        assert!(started.starts_with("game "));
        assert!(console.session.game_id().is_some());

        let mut out = Vec::new();
        assert_eq!(console.handle_command("quit", &mut out).ok(), Some(true));
    }
}
