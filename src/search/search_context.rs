//! Per-search ordering tables and counters.
//!
//! One `SearchContext` lives for a single top-level `search` call. It is
//! shared by every iterative-deepening iteration, so shallow results order
//! the deeper passes, and dropped afterwards so unrelated positions never
//! inherit stale hints.

use std::collections::HashMap;
use std::time::Instant;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::move_generation::legal_move_shared::{HistoryTable, OrderingHints};

/// Deepest ply the killer table covers; also the cap on `max_depth`.
pub const MAX_PLY: usize = 128;

#[derive(Debug)]
pub struct SearchContext {
    /// Best move found at each position, keyed by Zobrist key.
    pub pv_cache: HashMap<u64, Move>,
    pub killers: [[Option<Move>; 2]; MAX_PLY],
    pub history: HistoryTable,

    pub nodes: u64,
    pub fail_high: u64,
    pub fail_high_first: u64,

    deadline: Option<Instant>,
    max_nodes: Option<u64>,
    stopped: bool,
}

impl SearchContext {
    pub fn new(deadline: Option<Instant>, max_nodes: Option<u64>) -> Self {
        Self {
            pv_cache: HashMap::new(),
            killers: [[None; 2]; MAX_PLY],
            history: [[0; 64]; 12],
            nodes: 0,
            fail_high: 0,
            fail_high_first: 0,
            deadline,
            max_nodes,
            stopped: false,
        }
    }

    /// Ordering hints for the node at `ply` with the given key.
    pub fn hints(&self, zobrist_key: u64, ply: usize) -> OrderingHints<'_> {
        OrderingHints {
            pv_move: self.pv_cache.get(&zobrist_key).copied(),
            killers: self.killers.get(ply).copied().unwrap_or([None; 2]),
            history: Some(&self.history),
        }
    }

    /// Remember a quiet move that caused a cutoff, bumping the previous first killer.
    pub fn record_killer(&mut self, ply: usize, mv: Move) {
        let Some(slots) = self.killers.get_mut(ply) else {
            return;
        };
        if slots[0] != Some(mv) {
            slots[1] = slots[0];
            slots[0] = Some(mv);
        }
    }

    /// Credit a quiet move that raised alpha, weighted by remaining depth.
    pub fn record_history(&mut self, piece: Piece, to: Square, depth: u8) {
        let entry = &mut self.history[piece.index()][to as usize];
        *entry = entry.saturating_add(i32::from(depth));
    }

    /// Count a node and report whether the search has to stop.
    ///
    /// Limits are sticky: once tripped, every later call reports a stop too.
    pub fn visit_node(&mut self) -> bool {
        self.nodes += 1;
        if self.stopped {
            return true;
        }
        if self.max_nodes.is_some_and(|limit| self.nodes > limit) {
            self.stopped = true;
        } else if self.nodes % 1024 == 0 && self.deadline.is_some_and(|d| Instant::now() >= d) {
            self.stopped = true;
        }
        self.stopped
    }

    #[inline]
    pub fn stopped(&self) -> bool {
        self.stopped
    }

    /// Fraction of cutoffs produced by the first legal move tried.
    pub fn ordering_efficiency(&self) -> f64 {
        if self.fail_high == 0 {
            0.0
        } else {
            self.fail_high_first as f64 / self.fail_high as f64
        }
    }

    /// Walk the PV cache from `game_state`, stopping on a repeat, a missing
    /// entry, an illegal cached move, or after `max_len` moves.
    pub fn principal_variation(&self, game_state: &GameState, max_len: usize) -> Vec<Move> {
        let mut line = Vec::new();
        let mut walk = game_state.clone();
        let mut seen = Vec::new();
        while line.len() < max_len {
            if seen.contains(&walk.zobrist_key) {
                break;
            }
            seen.push(walk.zobrist_key);
            let Some(mv) = self.pv_cache.get(&walk.zobrist_key).copied() else {
                break;
            };
            if !legal_moves(&walk).contains(&mv) {
                break;
            }
            apply_move(&mut walk, mv);
            line.push(Move { score: 0, ..mv });
        }
        line
    }
}
