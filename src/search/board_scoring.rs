//! Static evaluation.
//!
//! The search only needs `Evaluator::evaluate`, which scores a position from
//! Light's point of view; the negamax core flips the sign for Dark. Scores
//! are in centipawns.

use crate::game_state::bit_utils::Squares;
use crate::game_state::chess_types::*;

pub trait Evaluator {
    /// Light-minus-Dark score, independent of the side to move.
    fn evaluate(&self, game_state: &GameState) -> i32;
}

/// Material values indexed by `PieceKind::index()`; kings are never traded so they count zero.
pub const PIECE_VALUES: [i32; 6] = [100, 325, 326, 550, 1000, 0];

#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.index()]
}

fn material_balance(game_state: &GameState) -> i32 {
    PieceKind::ALL
        .into_iter()
        .map(|kind| {
            let light = game_state.piece_board(Color::Light, kind).count_ones() as i32;
            let dark = game_state.piece_board(Color::Dark, kind).count_ones() as i32;
            (light - dark) * piece_value(kind)
        })
        .sum()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEvaluator;

impl Evaluator for MaterialEvaluator {
    fn evaluate(&self, game_state: &GameState) -> i32 {
        material_balance(game_state)
    }
}

// Piece-square bonuses from Light's side, a1 first. Dark reads them through `square ^ 56`.
#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    10, 10,  0,-10,-10,  0, 10, 10,
     5,  0,  0,  5,  5,  0,  0,  5,
     0,  0, 10, 20, 20, 10,  0,  0,
     5,  5,  5, 10, 10,  5,  5,  5,
    10, 10, 10, 20, 20, 10, 10, 10,
    20, 20, 20, 30, 30, 20, 20, 20,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
     0,-10,  0,  0,  0,  0,-10,  0,
     0,  0,  0,  5,  5,  0,  0,  0,
     0,  0, 10, 10, 10, 10,  0,  0,
     0,  0, 10, 20, 20, 10,  5,  0,
     5, 10, 15, 20, 20, 15, 10,  5,
     5, 10, 10, 20, 20, 10, 10,  5,
     0,  0,  5, 10, 10,  5,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
     0,  0,-10,  0,  0,-10,  0,  0,
     0,  0,  0, 10, 10,  0,  0,  0,
     0,  0, 10, 15, 15, 10,  0,  0,
     0, 10, 15, 20, 20, 15, 10,  0,
     0, 10, 15, 20, 20, 15, 10,  0,
     0,  0, 10, 15, 15, 10,  0,  0,
     0,  0,  0, 10, 10,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
     0,  0,  5, 10, 10,  5,  0,  0,
     0,  0,  5, 10, 10,  5,  0,  0,
     0,  0,  5, 10, 10,  5,  0,  0,
     0,  0,  5, 10, 10,  5,  0,  0,
     0,  0,  5, 10, 10,  5,  0,  0,
     0,  0,  5, 10, 10,  5,  0,  0,
    25, 25, 25, 25, 25, 25, 25, 25,
     0,  0,  5, 10, 10,  5,  0,  0,
];

const fn placement_table(kind: PieceKind) -> Option<&'static [i32; 64]> {
    match kind {
        PieceKind::Pawn => Some(&PAWN_TABLE),
        PieceKind::Knight => Some(&KNIGHT_TABLE),
        PieceKind::Bishop => Some(&BISHOP_TABLE),
        PieceKind::Rook => Some(&ROOK_TABLE),
        PieceKind::Queen | PieceKind::King => None,
    }
}

/// Material plus piece-square bonuses for pawns, knights, bishops and rooks.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceSquareEvaluator;

impl PieceSquareEvaluator {
    fn placement(game_state: &GameState) -> i32 {
        let mut score = 0;
        for kind in PieceKind::ALL {
            let Some(table) = placement_table(kind) else {
                continue;
            };
            for square in Squares(game_state.piece_board(Color::Light, kind)) {
                score += table[square as usize];
            }
            for square in Squares(game_state.piece_board(Color::Dark, kind)) {
                score -= table[(square ^ 56) as usize];
            }
        }
        score
    }
}

impl Evaluator for PieceSquareEvaluator {
    fn evaluate(&self, game_state: &GameState) -> i32 {
        material_balance(game_state) + Self::placement(game_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_is_balanced() {
        let game = GameState::new_game();
        assert_eq!(MaterialEvaluator.evaluate(&game), 0);
        assert_eq!(PieceSquareEvaluator.evaluate(&game), 0);
    }

    #[test]
    fn material_counts_from_light_side() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/3QK3 b - - 0 1").expect("FEN should parse");
        assert_eq!(MaterialEvaluator.evaluate(&game), 1000);
    }

    #[test]
    fn colour_flip_negates_piece_square_score() {
        for fen in [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        ] {
            let game = GameState::from_fen(fen).expect("FEN should parse");
            let score = PieceSquareEvaluator.evaluate(&game);
            assert_eq!(PieceSquareEvaluator.evaluate(&game.color_flipped()), -score);
        }
    }

    #[test]
    fn advanced_pawn_scores_more_than_home_pawn() {
        let home = GameState::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
        let advanced = GameState::from_fen("4k3/4P3/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(PieceSquareEvaluator.evaluate(&advanced) > PieceSquareEvaluator.evaluate(&home));
    }
}
