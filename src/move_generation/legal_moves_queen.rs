use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::geometry::{Square, ALL_DIRECTIONS};
use crate::game_state::piece_move::PieceMove;
use crate::move_generation::legal_move_shared::push_sliding_moves;

pub fn generate_queen_moves(board: &Board, from: Square, color: Color, out: &mut Vec<PieceMove>) {
    push_sliding_moves(board, from, color, &ALL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Color;

    #[test]
    fn central_queen_on_open_board_reaches_27_squares() {
        let board = Board::from_diagram(
            "
            K.......
            ........
            ........
            ........
            ...Q....
            ........
            ........
            .......k
            ",
            Color::Light,
        )
        .expect("diagram should parse");
        let mut out = Vec::new();
        generate_queen_moves(&board, "d4".parse().expect("d4"), Color::Light, &mut out);
        assert_eq!(out.len(), 27);
    }
}
