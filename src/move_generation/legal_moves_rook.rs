use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::geometry::{Square, ORTHOGONAL_DIRECTIONS};
use crate::game_state::piece_move::PieceMove;
use crate::move_generation::legal_move_shared::push_sliding_moves;

pub fn generate_rook_moves(board: &Board, from: Square, color: Color, out: &mut Vec<PieceMove>) {
    push_sliding_moves(board, from, color, &ORTHOGONAL_DIRECTIONS, out);
}
