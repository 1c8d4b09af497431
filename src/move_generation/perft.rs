//! Perft: exhaustive legal-move tree counts used to validate generation.
//!
//! Leaf moves are tallied by what they do, so the totals can be compared with
//! published reference tables. Promotions always yield a queen here, so
//! positions with promotions reachable inside the horizon count one move per
//! promotion rather than four.

use crate::chess_errors::InvariantViolation;
use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::piece_move::PieceMove;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{all_legal_moves, has_any_legal_move};
use crate::move_generation::legal_moves_king::castle_side;
use crate::move_generation::legal_moves_pawn::is_en_passant;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(board: &Board, depth: u8) -> Result<PerftCounts, InvariantViolation> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in all_legal_moves(board, board.side_to_move())? {
        let next = board.apply(mv)?;
        if depth == 1 {
            total.merge(leaf_counts(board, mv, &next)?);
        } else {
            total.merge(perft(&next, depth - 1)?);
        }
    }
    Ok(total)
}

/// Node count only, without leaf tallies.
pub fn perft_nodes(board: &Board, depth: u8) -> Result<u64, InvariantViolation> {
    if depth == 0 {
        return Ok(1);
    }
    let moves = all_legal_moves(board, board.side_to_move())?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }
    let mut nodes = 0u64;
    for mv in moves {
        nodes += perft_nodes(&board.apply(mv)?, depth - 1)?;
    }
    Ok(nodes)
}

fn leaf_counts(
    board: &Board,
    mv: PieceMove,
    next: &Board,
) -> Result<PerftCounts, InvariantViolation> {
    let en_passant = is_en_passant(board, mv);
    let captures = en_passant || board.piece_at(mv.end).is_some();
    let promotion = board
        .piece_at(mv.start)
        .map(|p| {
            p.kind() == PieceKind::Pawn && mv.end.row().index() == p.color().promotion_row()
        })
        .unwrap_or(false);
    let defender = next.side_to_move();
    let check = is_king_in_check(next, defender)?;
    let checkmate = check && !has_any_legal_move(next, defender)?;

    Ok(PerftCounts {
        nodes: 1,
        captures: usize::from(captures),
        en_passant: usize::from(en_passant),
        castles: usize::from(castle_side(board, mv).is_some()),
        promotions: usize::from(promotion),
        checks: usize::from(check),
        checkmates: usize::from(checkmate),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;

    // "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -" from the standard perft suite.
    const POSITION_3: &str = "
        ........
        ..p.....
        ...p....
        KP.....r
        .R...p.k
        ........
        ....P.P.
        ........
    ";

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let counts = perft(&Board::new_game(), 0).expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_matches_reference_counts() {
        let board = Board::new_game();
        assert_eq!(perft_nodes(&board, 1), Ok(20));
        assert_eq!(perft_nodes(&board, 2), Ok(400));

        let counts = perft(&board, 3).expect("perft should run");
        assert_eq!(counts.nodes, 8902);
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.checks, 12);
        assert_eq!(counts.checkmates, 0);
    }

    #[test]
    fn endgame_position_matches_reference_counts() {
        let board = Board::from_diagram(POSITION_3, Color::Light).expect("diagram");

        let depth_1 = perft(&board, 1).expect("perft should run");
        assert_eq!(depth_1.nodes, 14);
        assert_eq!(depth_1.captures, 1);
        assert_eq!(depth_1.checks, 2);

        let depth_2 = perft(&board, 2).expect("perft should run");
        assert_eq!(depth_2.nodes, 191);
        assert_eq!(depth_2.captures, 14);
        assert_eq!(depth_2.checks, 10);
    }
}
