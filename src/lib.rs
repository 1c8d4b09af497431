//! Crate root module declarations for the ledger chess engine.
//!
//! The engine validates and classifies moves on an immutable board and
//! derives every game's state from an append-only log of moves shared by
//! two clients. Module groups: board state, move generation, move
//! classification, move notation, log-backed sessions, and utilities.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod geometry;
    pub mod piece;
    pub mod piece_move;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod classification {
    pub mod move_classifier;
    pub mod special_moves;
}

pub mod notation {
    pub mod log_entry;
    pub mod play_notation;
}

pub mod session {
    pub mod game_id;
    pub mod game_session;
    pub mod game_store;
    pub mod json_file_store;
    pub mod replay;
    pub mod session_config;
    pub mod session_outcome;
}

pub mod utils {
    pub mod console;
    pub mod diagnostics;
    pub mod render_board;
}
