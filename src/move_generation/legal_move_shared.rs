//! Move collection and ordering scores shared by the per-piece generators.
//!
//! Scores are assigned as moves are produced so the search can sort once.
//! Bands, highest first: principal-variation move, captures (offset by the
//! victim/attacker table), first killer, second killer, history credit.

use crate::game_state::bit_utils::Squares;
use crate::game_state::chess_types::*;
use crate::moves::capture_scores::capture_score;

pub const PV_MOVE_SCORE: i32 = 2_000_000;
pub const CAPTURE_BASE_SCORE: i32 = 1_000_000;
pub const PRIMARY_KILLER_SCORE: i32 = 90_000;
pub const SECONDARY_KILLER_SCORE: i32 = 80_000;
/// History credit is clamped below the killer band.
pub const HISTORY_SCORE_CAP: i32 = 50_000;

/// History table indexed by `[piece.index()][to]`.
pub type HistoryTable = [[i32; 64]; 12];

/// Search-supplied ordering knowledge for the node being generated.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderingHints<'a> {
    pub pv_move: Option<Move>,
    pub killers: [Option<Move>; 2],
    pub history: Option<&'a HistoryTable>,
}

/// Accumulates scored pseudo-legal moves for one colour.
pub struct MoveCollector<'a> {
    pub color: Color,
    pub captures_only: bool,
    hints: &'a OrderingHints<'a>,
    moves: Vec<Move>,
}

impl<'a> MoveCollector<'a> {
    pub fn new(color: Color, captures_only: bool, hints: &'a OrderingHints<'a>) -> Self {
        Self {
            color,
            captures_only,
            hints,
            moves: Vec::with_capacity(64),
        }
    }

    /// Non-capturing move by `kind`.
    pub fn push_quiet(
        &mut self,
        from: Square,
        to: Square,
        kind: PieceKind,
        promotion: Option<PieceKind>,
    ) {
        let mut mv = Move {
            from,
            to,
            promotion,
            score: 0,
        };
        mv.score = if self.hints.pv_move == Some(mv) {
            PV_MOVE_SCORE
        } else if self.hints.killers[0] == Some(mv) {
            PRIMARY_KILLER_SCORE
        } else if self.hints.killers[1] == Some(mv) {
            SECONDARY_KILLER_SCORE
        } else {
            self.hints.history.map_or(0, |history| {
                let piece = Piece::new(self.color, kind);
                history[piece.index()][to as usize].min(HISTORY_SCORE_CAP)
            })
        };
        self.moves.push(mv);
    }

    /// Capture of `victim` by `attacker`.
    pub fn push_capture(
        &mut self,
        from: Square,
        to: Square,
        attacker: PieceKind,
        victim: PieceKind,
        promotion: Option<PieceKind>,
    ) {
        let mut mv = Move {
            from,
            to,
            promotion,
            score: 0,
        };
        mv.score = if self.hints.pv_move == Some(mv) {
            PV_MOVE_SCORE
        } else {
            CAPTURE_BASE_SCORE + capture_score(victim, attacker)
        };
        self.moves.push(mv);
    }

    /// Squares a non-pawn piece may land on: not friendly, never the enemy king,
    /// and only enemy-occupied when collecting captures.
    pub fn destination_mask(&self, game_state: &GameState) -> Bitboard {
        let enemy = self.color.opposite();
        let mut mask = !game_state.occupancy(self.color)
            & !game_state.piece_board(enemy, PieceKind::King);
        if self.captures_only {
            mask &= game_state.occupancy(enemy);
        }
        mask
    }

    /// Emit one move per square in `targets`, classifying each as capture or quiet.
    pub fn push_targets(
        &mut self,
        game_state: &GameState,
        from: Square,
        kind: PieceKind,
        targets: Bitboard,
    ) {
        let enemy = self.color.opposite();
        for to in Squares(targets) {
            match piece_kind_on(game_state, enemy, to) {
                Some(victim) => self.push_capture(from, to, kind, victim, None),
                None => self.push_quiet(from, to, kind, None),
            }
        }
    }

    /// Moves sorted best-first; ties keep generation order.
    pub fn into_sorted(mut self) -> Vec<Move> {
        self.moves.sort_by_key(|mv| std::cmp::Reverse(mv.score));
        self.moves
    }
}

/// Kind of the `color` piece on `square`, if any.
#[inline]
pub fn piece_kind_on(game_state: &GameState, color: Color, square: Square) -> Option<PieceKind> {
    let mask = 1u64 << square;
    PieceKind::ALL
        .into_iter()
        .find(|kind| game_state.piece_board(color, *kind) & mask != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_rank_pv_then_captures_then_killers_then_history() {
        let mut history: HistoryTable = [[0; 64]; 12];
        history[Piece::new(Color::Light, PieceKind::Knight).index()][21] = 1_000_000;
        history[Piece::new(Color::Light, PieceKind::Bishop).index()][20] = 7;

        let hints = OrderingHints {
            pv_move: Some(Move::new(1, 18)),
            killers: [Some(Move::new(12, 20)), Some(Move::new(12, 28))],
            history: Some(&history),
        };
        let mut collector = MoveCollector::new(Color::Light, false, &hints);
        collector.push_quiet(5, 20, PieceKind::Bishop, None);
        collector.push_quiet(6, 21, PieceKind::Knight, None);
        collector.push_quiet(12, 28, PieceKind::Pawn, None);
        collector.push_quiet(12, 20, PieceKind::Pawn, None);
        collector.push_capture(27, 36, PieceKind::Queen, PieceKind::Pawn, None);
        collector.push_quiet(1, 18, PieceKind::Knight, None);

        let sorted = collector.into_sorted();
        let order: Vec<String> = sorted.iter().map(Move::to_string).collect();
        assert_eq!(order, ["b1c3", "d4e5", "e2e3", "e2e4", "g1f3", "f1e3"]);
        assert_eq!(sorted[4].score, HISTORY_SCORE_CAP);
        assert_eq!(sorted[5].score, 7);
    }
}
