use crate::game_state::bit_utils::Squares;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::MoveCollector;
use crate::moves::knight_moves::knight_attacks;

pub fn generate_knight_moves(game_state: &GameState, out: &mut MoveCollector<'_>) {
    let destinations = out.destination_mask(game_state);
    let knights = game_state.piece_board(out.color, PieceKind::Knight);

    for from in Squares(knights) {
        out.push_targets(
            game_state,
            from,
            PieceKind::Knight,
            knight_attacks(from) & destinations,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_shared::{MoveCollector, OrderingHints};

    fn knight_moves(fen: &str, captures_only: bool) -> Vec<Move> {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let hints = OrderingHints::default();
        let mut collector = MoveCollector::new(game.side_to_move, captures_only, &hints);
        generate_knight_moves(&game, &mut collector);
        collector.into_sorted()
    }

    #[test]
    fn knight_skips_friendly_squares_and_enemy_king() {
        // Knight on d4; own pawn on e6, enemy rook on c6, enemy king on b5.
        let moves = knight_moves("8/8/2r1P3/1k6/3N4/8/8/4K3 w - - 0 1", false);
        assert_eq!(moves.len(), 6);
        assert_eq!(moves[0], Move::new(27, 42));
        assert!(moves[0].score > 0);
        assert!(!moves.contains(&Move::new(27, 44)));
        assert!(!moves.contains(&Move::new(27, 33)));
    }

    #[test]
    fn captures_only_keeps_just_the_capture() {
        let moves = knight_moves("8/8/2r1P3/1k6/3N4/8/8/4K3 w - - 0 1", true);
        assert_eq!(moves, vec![Move::new(27, 42)]);
    }
}
