//! Move classification.
//!
//! Every candidate move gets exactly one `MoveType`, decided in a fixed
//! priority order where the first match wins:
//!
//! 1. `Illegal`: not among the mover's check-filtered moves, or not the
//!    mover's turn.
//! 2. `Checkmate`: the opponent is attacked and has no legal reply.
//! 3. `Check`: the opponent is attacked.
//! 4. `Stalemate`: the opponent has no legal reply and is not attacked, or
//!    the move was the mover's only legal move and the mover was not in check.
//! 5. `Castle`, 6. `Promotion`, 7. `EnPassant`, 8. `Capture`, 9. `Regular`.
//!
//! The classifier is a pure function; nothing about the result is stored.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chess_errors::InvariantViolation;
use crate::classification::special_moves::{move_traits, MoveTraits};
use crate::game_state::board::Board;
use crate::game_state::piece_move::PieceMove;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{
    all_legal_moves, has_any_legal_move, legal_moves,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveType {
    Illegal,
    Checkmate,
    Check,
    Stalemate,
    Castle,
    Promotion,
    EnPassant,
    Capture,
    Regular,
}

impl fmt::Display for MoveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveType::Illegal => "ILLEGAL",
            MoveType::Checkmate => "CHECKMATE",
            MoveType::Check => "CHECK",
            MoveType::Stalemate => "STALEMATE",
            MoveType::Castle => "CASTLE",
            MoveType::Promotion => "PROMOTION",
            MoveType::EnPassant => "ENPASSANT",
            MoveType::Capture => "CAPTURE",
            MoveType::Regular => "REGULAR",
        };
        f.write_str(name)
    }
}

/// Classification plus what it took to reach it, so callers do not repeat
/// the simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedMove {
    pub piece_move: PieceMove,
    pub move_type: MoveType,
    pub traits: MoveTraits,
    /// `None` exactly when the move is illegal.
    pub board_after: Option<Board>,
}

pub fn classify(board: &Board, piece_move: PieceMove) -> Result<MoveType, InvariantViolation> {
    classify_move(board, piece_move).map(|classified| classified.move_type)
}

pub fn classify_move(
    board: &Board,
    piece_move: PieceMove,
) -> Result<ClassifiedMove, InvariantViolation> {
    let illegal = ClassifiedMove {
        piece_move,
        move_type: MoveType::Illegal,
        traits: MoveTraits::default(),
        board_after: None,
    };

    let Some(piece) = board.piece_at(piece_move.start) else {
        return Ok(illegal);
    };
    if piece.color() != board.side_to_move()
        || !legal_moves(board, piece_move.start)?.contains(&piece_move)
    {
        return Ok(illegal);
    }

    let traits = move_traits(board, piece_move);
    let next = board.apply(piece_move)?;
    let opponent = piece.color().opposite();
    let opponent_in_check = is_king_in_check(&next, opponent)?;
    let opponent_can_reply = has_any_legal_move(&next, opponent)?;
    let forced = mover_has_no_other_move(board, piece_move)?;

    let move_type = if opponent_in_check && !opponent_can_reply {
        MoveType::Checkmate
    } else if opponent_in_check {
        MoveType::Check
    } else if !opponent_can_reply || forced {
        MoveType::Stalemate
    } else if traits.castle.is_some() {
        MoveType::Castle
    } else if traits.promotion.is_some() {
        MoveType::Promotion
    } else if traits.en_passant {
        MoveType::EnPassant
    } else if traits.capture {
        MoveType::Capture
    } else {
        MoveType::Regular
    };

    Ok(ClassifiedMove {
        piece_move,
        move_type,
        traits,
        board_after: Some(next),
    })
}

/// The side to move has no legal move and is not attacked: the position on
/// the board is already a draw.
pub fn is_stalemate(board: &Board) -> Result<bool, InvariantViolation> {
    let side = board.side_to_move();
    Ok(!is_king_in_check(board, side)? && !has_any_legal_move(board, side)?)
}

/// After `piece_move`, the opponent has no legal move and is not attacked.
/// Independent of `is_stalemate`, which looks at the position before it.
pub fn is_stalemate_after(
    board: &Board,
    piece_move: PieceMove,
) -> Result<bool, InvariantViolation> {
    is_stalemate(&board.apply(piece_move)?)
}

/// `piece_move` is the only legal move of the side to move, whose king is
/// not attacked. Independent of `is_stalemate_after`, which looks at the
/// opponent after the move.
pub fn mover_has_no_other_move(
    board: &Board,
    piece_move: PieceMove,
) -> Result<bool, InvariantViolation> {
    let side = board.side_to_move();
    if is_king_in_check(board, side)? {
        return Ok(false);
    }
    Ok(all_legal_moves(board, side)? == [piece_move])
}

/// The side to move is attacked and has no legal move.
pub fn is_checkmate(board: &Board) -> Result<bool, InvariantViolation> {
    let side = board.side_to_move();
    Ok(is_king_in_check(board, side)? && !has_any_legal_move(board, side)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::game_state::geometry::Square;
    use crate::move_generation::legal_move_apply::apply_all;

    fn sq(text: &str) -> Square {
        text.parse().expect("square should parse")
    }

    fn mv(text: &str) -> PieceMove {
        PieceMove::new(sq(&text[0..2]), sq(&text[2..4]))
    }

    fn play(moves: &[&str]) -> Board {
        let moves: Vec<PieceMove> = moves.iter().map(|m| mv(m)).collect();
        apply_all(&Board::new_game(), &moves).expect("moves should apply")
    }

    #[test]
    fn opening_pawn_move_is_regular() {
        let board = Board::new_game();
        let classified = classify_move(&board, mv("a2a4")).expect("classify");
        assert_eq!(classified.move_type, MoveType::Regular);

        let next = classified.board_after.expect("legal move has a board");
        let pawn = next.piece_at(sq("a4")).expect("pawn on a4");
        assert_eq!((pawn.kind(), pawn.color()), (PieceKind::Pawn, Color::Light));
        assert_eq!(next.side_to_move(), Color::Dark);
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let board = play(&["f2f3", "e7e5", "g2g4"]);
        assert_eq!(classify(&board, mv("d8h4")), Ok(MoveType::Checkmate));
    }

    #[test]
    fn blockable_queen_check_is_only_check() {
        let board = play(&["f2f3", "e7e5", "d2d4"]);
        assert_eq!(classify(&board, mv("d8h4")), Ok(MoveType::Check));
    }

    #[test]
    fn castling_is_recognised() {
        let board = play(&["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"]);
        assert_eq!(classify(&board, mv("e1g1")), Ok(MoveType::Castle));
    }

    #[test]
    fn en_passant_is_recognised_only_right_after_the_double_step() {
        let board = play(&["e2e4", "a7a6", "e4e5", "d7d5"]);
        assert_eq!(classify(&board, mv("e5d6")), Ok(MoveType::EnPassant));

        let late = play(&["e2e4", "a7a6", "e4e5", "d7d5", "h2h3", "h7h6"]);
        assert_eq!(classify(&late, mv("e5d6")), Ok(MoveType::Illegal));
    }

    #[test]
    fn capture_and_illegal_moves() {
        let board = play(&["e2e4", "d7d5"]);
        assert_eq!(classify(&board, mv("e4d5")), Ok(MoveType::Capture));
        assert_eq!(classify(&board, mv("e4e6")), Ok(MoveType::Illegal));
        // Not Light's piece.
        assert_eq!(classify(&board, mv("d5e4")), Ok(MoveType::Illegal));
        // Empty origin.
        assert_eq!(classify(&board, mv("a3a4")), Ok(MoveType::Illegal));
    }

    #[test]
    fn pawn_reaching_last_row_is_promotion_never_regular() {
        let board = Board::from_diagram(
            "
            .r......
            P.......
            ........
            ........
            ........
            ..K....k
            ........
            ........
            ",
            Color::Light,
        )
        .expect("diagram");
        assert_eq!(classify(&board, mv("a7a8")), Ok(MoveType::Promotion));
        assert_eq!(classify(&board, mv("a7b8")), Ok(MoveType::Promotion));

        let dark = Board::from_diagram(
            "
            ........
            ........
            ..k.....
            ........
            ........
            ...K....
            .......p
            ........
            ",
            Color::Dark,
        )
        .expect("diagram");
        assert_eq!(classify(&dark, mv("h2h1")), Ok(MoveType::Promotion));
    }

    #[test]
    fn every_legal_move_classifies_as_something_other_than_illegal() {
        let board = play(&["e2e4", "e7e5", "g1f3", "b8c6"]);
        for candidate in all_legal_moves(&board, Color::Light).expect("moves") {
            assert_ne!(classify(&board, candidate), Ok(MoveType::Illegal));
        }
    }

    const QUEEN_STALEMATE: &str = "
        .......k
        .....K..
        ........
        ........
        ........
        ........
        ........
        ......Q.
    ";

    #[test]
    fn opponent_without_moves_after_the_move_is_stalemate() {
        let board = Board::from_diagram(QUEEN_STALEMATE, Color::Light).expect("diagram");
        assert_eq!(is_stalemate(&board), Ok(false));
        assert_eq!(is_stalemate_after(&board, mv("g1g6")), Ok(true));
        assert_eq!(classify(&board, mv("g1g6")), Ok(MoveType::Stalemate));
        assert_eq!(is_stalemate_after(&board, mv("g1g5")), Ok(false));
    }

    const ONLY_KING_STEP: &str = "
        k.......
        ........
        ........
        ........
        ........
        ........
        r.......
        .......K
    ";

    #[test]
    fn mover_with_a_single_legal_move_is_stalemate() {
        let board = Board::from_diagram(ONLY_KING_STEP, Color::Light).expect("diagram");
        assert_eq!(all_legal_moves(&board, Color::Light), Ok(vec![mv("h1g1")]));
        assert_eq!(mover_has_no_other_move(&board, mv("h1g1")), Ok(true));
        assert_eq!(is_stalemate_after(&board, mv("h1g1")), Ok(false));
        assert_eq!(classify(&board, mv("h1g1")), Ok(MoveType::Stalemate));
        assert_eq!(mover_has_no_other_move(&board, mv("h1h2")), Ok(false));
    }

    #[test]
    fn mover_in_check_never_triggers_the_single_move_rule() {
        let board = Board::from_diagram(
            "
            k.....r.
            ........
            ........
            ........
            ........
            ........
            ........
            r......K
            ",
            Color::Light,
        )
        .expect("diagram");
        assert_eq!(all_legal_moves(&board, Color::Light), Ok(vec![mv("h1h2")]));
        assert_eq!(mover_has_no_other_move(&board, mv("h1h2")), Ok(false));
        assert_eq!(classify(&board, mv("h1h2")), Ok(MoveType::Regular));
        assert_eq!(mover_has_no_other_move(&Board::new_game(), mv("e2e4")), Ok(false));
    }

    #[test]
    fn side_to_move_without_moves_is_stalemate() {
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
        assert_eq!(is_stalemate(&board), Ok(true));
        assert_eq!(is_checkmate(&board), Ok(false));
        assert_eq!(all_legal_moves(&board, Color::Dark), Ok(Vec::new()));
    }

    #[test]
    fn mated_side_to_move_is_not_stalemated() {
        let board = play(&["f2f3", "e7e5", "g2g4", "d8h4"]);
        assert_eq!(is_checkmate(&board), Ok(true));
        assert_eq!(is_stalemate(&board), Ok(false));
    }
}
