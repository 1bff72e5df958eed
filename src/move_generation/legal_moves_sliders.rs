use crate::game_state::bit_utils::Squares;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::MoveCollector;
use crate::moves::sliding_attacks::{sliding_attacks, SlideAxis};

const SLIDERS: [(PieceKind, SlideAxis); 3] = [
    (PieceKind::Bishop, SlideAxis::Diagonal),
    (PieceKind::Rook, SlideAxis::Orthogonal),
    (PieceKind::Queen, SlideAxis::Both),
];

/// Bishop, rook and queen moves.
pub fn generate_slider_moves(game_state: &GameState, out: &mut MoveCollector<'_>) {
    let occupancy = game_state.occupancy_all();
    let destinations = out.destination_mask(game_state);

    for (kind, axis) in SLIDERS {
        for from in Squares(game_state.piece_board(out.color, kind)) {
            let targets = sliding_attacks(from, occupancy, axis) & destinations;
            out.push_targets(game_state, from, kind, targets);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_slider_moves;
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_shared::{MoveCollector, OrderingHints};

    fn slider_moves(fen: &str, captures_only: bool) -> Vec<Move> {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let hints = OrderingHints::default();
        let mut collector = MoveCollector::new(game.side_to_move, captures_only, &hints);
        generate_slider_moves(&game, &mut collector);
        collector.into_sorted()
    }

    #[test]
    fn lone_queen_in_centre_reaches_twenty_seven_squares() {
        let moves = slider_moves("7k/8/8/8/3Q4/8/8/K7 w - - 0 1", false);
        // a1 holds the own king, h8 the enemy king.
        assert_eq!(moves.len(), 25);
    }

    #[test]
    fn captures_are_ranked_by_victim_then_attacker() {
        // Rook a1 and bishop c1 both reach a3; only the bishop reaches h6.
        let moves = slider_moves("6k1/8/7q/8/8/p7/8/R1B1K3 w - - 0 1", true);
        let order: Vec<String> = moves.iter().map(Move::to_string).collect();
        assert_eq!(order, ["c1h6", "c1a3", "a1a3"]);
    }
}
