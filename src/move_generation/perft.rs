//! Move-path enumeration for generator validation.
//!
//! Everything runs in place on one mutable position through `MoveGuard`, so
//! perft also checks that apply/undo leave no residue behind.

use tracing::trace;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{is_in_check, is_legal};
use crate::move_generation::legal_move_generator::generate_moves;
use crate::move_generation::move_guard::MoveGuard;

/// Leaf statistics gathered by [`perft_counts`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
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

/// Number of legal move sequences of length `depth`.
pub fn perft(game_state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let side = game_state.side_to_move;
    let mut nodes = 0;
    for mv in generate_moves(game_state, side, false) {
        let mut child = MoveGuard::new(game_state, mv);
        if !is_legal(&child) {
            continue;
        }
        nodes += if depth == 1 { 1 } else { perft(&mut child, depth - 1) };
    }
    nodes
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let side = game_state.side_to_move;
    let mut divided = Vec::new();
    for mv in generate_moves(game_state, side, false) {
        let mut child = MoveGuard::new(game_state, mv);
        if !is_legal(&child) {
            continue;
        }
        let nodes = perft(&mut child, depth - 1);
        trace!(%mv, nodes, "perft divide");
        divided.push((Move { score: 0, ..mv }, nodes));
    }
    divided
}

/// Perft with capture / special-move / check tallies at the leaves.
pub fn perft_counts(game_state: &mut GameState, depth: u8) -> PerftCounts {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return total;
    }

    let side = game_state.side_to_move;
    for mv in generate_moves(game_state, side, false) {
        let mut child = MoveGuard::new(game_state, mv);
        if !is_legal(&child) {
            continue;
        }
        if depth > 1 {
            total.merge(perft_counts(&mut child, depth - 1));
            continue;
        }

        let undo = *child.undo_state();
        total.nodes += 1;
        total.captures += u64::from(undo.captured_piece.is_some());
        total.en_passant += u64::from(undo.is_en_passant());
        total.castles += u64::from(undo.is_castling());
        total.promotions += u64::from(mv.promotion.is_some());
        if is_in_check(&child) {
            total.checks += 1;
            if !has_legal_move(&mut child) {
                total.checkmates += 1;
            }
        }
    }
    total
}

fn has_legal_move(game_state: &mut GameState) -> bool {
    let side = game_state.side_to_move;
    generate_moves(game_state, side, false)
        .into_iter()
        .any(|mv| is_legal(&MoveGuard::new(game_state, mv)))
}
