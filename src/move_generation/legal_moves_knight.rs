use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::geometry::{Square, KNIGHT_JUMPS};
use crate::game_state::piece_move::PieceMove;
use crate::move_generation::legal_move_shared::push_leaping_moves;

pub fn generate_knight_moves(board: &Board, from: Square, color: Color, out: &mut Vec<PieceMove>) {
    push_leaping_moves(board, from, color, &KNIGHT_JUMPS, out);
}
