//! Move generation entry points.
//!
//! `generate_moves` produces scored pseudo-legal moves for one colour; king
//! safety is left to the caller (apply, `is_legal`, undo). `legal_moves` and
//! `find_legal_move` run that filter for callers outside the search.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_legal;
use crate::move_generation::legal_move_shared::{MoveCollector, OrderingHints};
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_sliders::generate_slider_moves;
use crate::move_generation::move_guard::MoveGuard;
use crate::utils::long_algebraic::parse_long_algebraic;

/// Pseudo-legal moves for `color`, best ordering score first.
#[inline]
pub fn generate_moves(game_state: &GameState, color: Color, captures_only: bool) -> Vec<Move> {
    generate_moves_with_hints(game_state, color, captures_only, &OrderingHints::default())
}

/// As [`generate_moves`], scoring quiet moves with the search's PV, killer and history knowledge.
pub fn generate_moves_with_hints(
    game_state: &GameState,
    color: Color,
    captures_only: bool,
    hints: &OrderingHints<'_>,
) -> Vec<Move> {
    let mut collector = MoveCollector::new(color, captures_only, hints);

    generate_pawn_moves(game_state, &mut collector);
    generate_knight_moves(game_state, &mut collector);
    generate_slider_moves(game_state, &mut collector);
    generate_king_moves(game_state, &mut collector);

    collector.into_sorted()
}

/// Fully legal moves for the side to move.
pub fn legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut scratch = game_state.clone();
    generate_moves(game_state, game_state.side_to_move, false)
        .into_iter()
        .filter(|mv| is_legal(&MoveGuard::new(&mut scratch, *mv)))
        .collect()
}

/// Resolve long algebraic `text` to a member of the legal move list.
///
/// A pawn reaching the last rank without a promotion letter is read as a queen promotion.
pub fn find_legal_move(game_state: &GameState, text: &str) -> ChessResult<Move> {
    let requested = parse_long_algebraic(text)?;
    let candidates = legal_moves(game_state);

    let exact = candidates.iter().find(|mv| **mv == requested);
    let implied_queen = || {
        let promoted = Move::with_promotion(requested.from, requested.to, PieceKind::Queen);
        candidates
            .iter()
            .find(|mv| requested.promotion.is_none() && **mv == promoted)
    };

    exact
        .or_else(implied_queen)
        .map(|mv| Move { score: 0, ..*mv })
        .ok_or_else(|| ChessError::IllegalMove {
            text: text.trim().to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_shared::{HistoryTable, CAPTURE_BASE_SCORE, PV_MOVE_SCORE};

    #[test]
    fn starting_position_has_twenty_moves_for_each_side() {
        let game = GameState::new_game();
        assert_eq!(generate_moves(&game, Color::Light, false).len(), 20);
        assert_eq!(generate_moves(&game, Color::Dark, false).len(), 20);
        assert!(generate_moves(&game, Color::Light, true).is_empty());
        assert_eq!(legal_moves(&game).len(), 20);
    }

    #[test]
    fn legal_filter_drops_pinned_piece_moves() {
        // The e2 knight is pinned by the e8 rook.
        let game = GameState::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN should parse");
        let pseudo = generate_moves(&game, Color::Light, false);
        let legal = legal_moves(&game);
        assert!(pseudo.iter().any(|mv| mv.from == 12));
        assert!(legal.iter().all(|mv| mv.from != 12));
        assert_eq!(legal.len(), 4);
    }

    #[test]
    fn captures_come_before_quiet_moves() {
        let game = GameState::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .expect("FEN should parse");
        let moves = generate_moves(&game, Color::Light, false);
        let first_quiet = moves
            .iter()
            .position(|mv| mv.score < CAPTURE_BASE_SCORE)
            .expect("position has quiet moves");
        assert!(moves[..first_quiet].len() >= 8);
        assert!(moves[first_quiet..].iter().all(|mv| mv.score < CAPTURE_BASE_SCORE));
    }

    #[test]
    fn hints_lift_pv_and_killer_moves() {
        let game = GameState::new_game();
        let history: HistoryTable = [[0; 64]; 12];
        let hints = OrderingHints {
            pv_move: Some(Move::new(6, 21)),
            killers: [Some(Move::new(12, 28)), None],
            history: Some(&history),
        };
        let moves = generate_moves_with_hints(&game, Color::Light, false, &hints);
        assert_eq!(moves[0], Move::new(6, 21));
        assert_eq!(moves[0].score, PV_MOVE_SCORE);
        assert_eq!(moves[1], Move::new(12, 28));
    }

    #[test]
    fn find_legal_move_resolves_text() {
        let game = GameState::new_game();
        assert_eq!(find_legal_move(&game, "e2e4"), Ok(Move::new(12, 28)));
        assert_eq!(
            find_legal_move(&game, "e2e5"),
            Err(ChessError::IllegalMove {
                text: "e2e5".to_owned()
            })
        );
        assert!(matches!(
            find_legal_move(&game, "zz"),
            Err(ChessError::InvalidMoveText { .. })
        ));

        let promotion = GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(
            find_legal_move(&promotion, "a7a8"),
            Ok(Move::with_promotion(48, 56, PieceKind::Queen))
        );
        assert_eq!(
            find_legal_move(&promotion, "a7a8n"),
            Ok(Move::with_promotion(48, 56, PieceKind::Knight))
        );
    }
}
