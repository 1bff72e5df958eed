//! Iterative deepening search with negamax alpha-beta pruning.
//!
//! Each iteration runs a full-window fail-hard alpha-beta to the next depth,
//! handing off to a capture-only quiescence search at the horizon. The
//! `SearchContext` carries PV, killer and history tables between
//! iterations, so every pass is ordered by what the previous one learned.
//!
//! All scores inside the tree are relative to the side to move at that node.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{is_in_check, is_legal};
use crate::move_generation::legal_move_generator::{generate_moves, generate_moves_with_hints};
use crate::move_generation::move_guard::MoveGuard;
use crate::search::board_scoring::Evaluator;
use crate::search::search_context::{SearchContext, MAX_PLY};

/// Score of being checkmated at the root; a mate found `n` plies deep scores `MATE_SCORE - n`.
pub const MATE_SCORE: i32 = 100_000;

/// Open window bound, strictly outside every reachable score.
const INFINITY: i32 = MATE_SCORE + 1;

const MAX_QUIESCENCE_PLY: u8 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
    /// Capture plies allowed past the horizon.
    pub quiescence_max_ply: u8,
    pub max_nodes: Option<u64>,
    pub movetime_ms: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            quiescence_max_ply: 8,
            max_nodes: None,
            movetime_ms: None,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> ChessResult<()> {
        if self.max_depth == 0 || usize::from(self.max_depth) > MAX_PLY {
            return Err(ChessError::InvalidConfig {
                reason: format!("max_depth must be in 1..={MAX_PLY}, got {}", self.max_depth),
            });
        }
        if self.quiescence_max_ply > MAX_QUIESCENCE_PLY {
            return Err(ChessError::InvalidConfig {
                reason: format!(
                    "quiescence_max_ply must be at most {MAX_QUIESCENCE_PLY}, got {}",
                    self.quiescence_max_ply
                ),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResult {
    /// `None` only when the side to move has no legal move.
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub reached_depth: u8,
    pub nodes: u64,
    /// Share of beta cutoffs that came from the first legal move tried.
    pub ordering_efficiency: f64,
    pub elapsed_ms: u64,
    pub principal_variation: Vec<Move>,
}

impl SearchResult {
    /// Whether `best_score` reports a forced mate for either side.
    pub fn is_mate_score(&self) -> bool {
        self.best_score.abs() > MATE_SCORE - MAX_PLY as i32 * 2
    }
}

/// Iteratively deepen from `game_state` and return the best move found.
///
/// The position is searched in place and is back in its original state when
/// this returns. When a node or time limit stops an iteration part-way, that
/// iteration is discarded unless it was the first one.
pub fn search<E: Evaluator>(
    game_state: &mut GameState,
    evaluator: &E,
    config: &SearchConfig,
) -> ChessResult<SearchResult> {
    config.validate()?;

    let started = Instant::now();
    let deadline = config
        .movetime_ms
        .map(|ms| started + Duration::from_millis(ms));
    let mut context = SearchContext::new(deadline, config.max_nodes);
    let mut result = SearchResult::default();

    for depth in 1..=config.max_depth {
        let outcome = search_root(game_state, evaluator, &mut context, depth, config.quiescence_max_ply);

        if !outcome.completed {
            if result.reached_depth == 0 {
                result.best_move = outcome.best_move;
                result.best_score = outcome.score;
            }
            warn!(
                depth,
                nodes = context.nodes,
                kept_depth = result.reached_depth,
                "search limit reached; discarding unfinished iteration"
            );
            break;
        }

        result.best_move = outcome.best_move;
        result.best_score = outcome.score;
        result.reached_depth = depth;

        debug!(
            depth,
            score = outcome.score,
            nodes = context.nodes,
            ordering_efficiency = context.ordering_efficiency(),
            best_move = ?outcome.best_move.map(|mv| mv.to_string()),
            "iteration complete"
        );
    }

    result.nodes = context.nodes;
    result.ordering_efficiency = context.ordering_efficiency();
    result.elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    result.principal_variation =
        context.principal_variation(game_state, usize::from(result.reached_depth.max(1)));

    info!(
        best_move = ?result.best_move.map(|mv| mv.to_string()),
        score = result.best_score,
        depth = result.reached_depth,
        nodes = result.nodes,
        elapsed_ms = result.elapsed_ms,
        "search finished"
    );

    Ok(result)
}

struct RootOutcome {
    score: i32,
    best_move: Option<Move>,
    completed: bool,
}

/// Root node: like `alpha_beta`, but keeps the best move itself so a stopped
/// iteration can still report one.
fn search_root<E: Evaluator>(
    game_state: &mut GameState,
    evaluator: &E,
    context: &mut SearchContext,
    depth: u8,
    quiescence_max_ply: u8,
) -> RootOutcome {
    context.visit_node();

    let side = game_state.side_to_move;
    let moves = {
        let hints = context.hints(game_state.zobrist_key, 0);
        generate_moves_with_hints(game_state, side, false, &hints)
    };

    let mut alpha = -INFINITY;
    let mut best_move = None;
    let mut first_legal = None;

    for mv in moves {
        let mut child = MoveGuard::new(game_state, mv);
        if !is_legal(&child) {
            continue;
        }
        first_legal.get_or_insert(mv);
        let undo = *child.undo_state();

        let score = -alpha_beta(
            &mut child,
            evaluator,
            context,
            depth - 1,
            -INFINITY,
            -alpha,
            1,
            quiescence_max_ply,
        );
        if context.stopped() {
            break;
        }

        if score > alpha {
            alpha = score;
            best_move = Some(mv);
            if is_quiet(&undo) {
                context.record_history(undo.moved_piece, mv.to, depth);
            }
        }
    }

    if first_legal.is_none() {
        return RootOutcome {
            score: terminal_score(game_state, 0),
            best_move: None,
            completed: !context.stopped(),
        };
    }

    let completed = !context.stopped();
    if completed {
        if let Some(best) = best_move {
            context.pv_cache.insert(game_state.zobrist_key, Move { score: 0, ..best });
        }
    }

    // Stopped before any root move was scored: fall back to the static score.
    let score = match best_move {
        Some(_) => alpha,
        None => side_relative(evaluator.evaluate(game_state), side),
    };

    RootOutcome {
        score,
        best_move: best_move.or(first_legal).map(|mv| Move { score: 0, ..mv }),
        completed,
    }
}

/// Fail-hard negamax: the result is clamped to `[alpha, beta]`.
#[allow(clippy::too_many_arguments)]
fn alpha_beta<E: Evaluator>(
    game_state: &mut GameState,
    evaluator: &E,
    context: &mut SearchContext,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    ply: usize,
    quiescence_max_ply: u8,
) -> i32 {
    if depth == 0 {
        return quiescence(game_state, evaluator, context, alpha, beta, quiescence_max_ply);
    }
    if context.visit_node() {
        return 0;
    }

    let side = game_state.side_to_move;
    let moves = {
        let hints = context.hints(game_state.zobrist_key, ply);
        generate_moves_with_hints(game_state, side, false, &hints)
    };

    let mut legal_count = 0u32;
    let mut best_move = None;

    for mv in moves {
        let mut child = MoveGuard::new(game_state, mv);
        if !is_legal(&child) {
            continue;
        }
        legal_count += 1;
        let undo = *child.undo_state();

        let score = -alpha_beta(
            &mut child,
            evaluator,
            context,
            depth - 1,
            -beta,
            -alpha,
            ply + 1,
            quiescence_max_ply,
        );
        if context.stopped() {
            return 0;
        }

        if score >= beta {
            context.fail_high += 1;
            if legal_count == 1 {
                context.fail_high_first += 1;
            }
            if is_quiet(&undo) {
                context.record_killer(ply, mv);
            }
            return beta;
        }
        if score > alpha {
            alpha = score;
            best_move = Some(mv);
            if is_quiet(&undo) {
                context.record_history(undo.moved_piece, mv.to, depth);
            }
        }
    }

    if legal_count == 0 {
        return terminal_score(game_state, ply);
    }

    if let Some(best) = best_move {
        context.pv_cache.insert(game_state.zobrist_key, Move { score: 0, ..best });
    }

    alpha
}

/// Capture-only extension past the horizon; the static score is a lower bound.
fn quiescence<E: Evaluator>(
    game_state: &mut GameState,
    evaluator: &E,
    context: &mut SearchContext,
    mut alpha: i32,
    beta: i32,
    plies_left: u8,
) -> i32 {
    if context.visit_node() {
        return 0;
    }

    let side = game_state.side_to_move;
    let stand_pat = side_relative(evaluator.evaluate(game_state), side);
    if stand_pat >= beta {
        return beta;
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }
    if plies_left == 0 {
        return alpha;
    }

    for mv in generate_moves(game_state, side, true) {
        let mut child = MoveGuard::new(game_state, mv);
        if !is_legal(&child) {
            continue;
        }

        let score = -quiescence(
            &mut child,
            evaluator,
            context,
            -beta,
            -alpha,
            plies_left - 1,
        );
        if context.stopped() {
            return 0;
        }

        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}

/// Score of a node without legal moves: mated (nearer mates are worse) or stalemate.
fn terminal_score(game_state: &GameState, ply: usize) -> i32 {
    if is_in_check(game_state) {
        -(MATE_SCORE - ply as i32)
    } else {
        0
    }
}

#[inline]
fn side_relative(light_score: i32, side: Color) -> i32 {
    match side {
        Color::Light => light_score,
        Color::Dark => -light_score,
    }
}

#[inline]
fn is_quiet(undo: &UndoState) -> bool {
    undo.captured_piece.is_none() && undo.mv.promotion.is_none()
}
