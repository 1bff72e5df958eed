//! King steps and castling.

use crate::game_state::chess_rules::castling_geometry;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::attacked_squares;
use crate::move_generation::legal_move_shared::MoveCollector;
use crate::moves::king_moves::king_attacks;

pub fn generate_king_moves(game_state: &GameState, out: &mut MoveCollector<'_>) {
    let Some(from) = game_state.king_square(out.color) else {
        return;
    };

    let destinations = out.destination_mask(game_state);
    out.push_targets(game_state, from, PieceKind::King, king_attacks(from) & destinations);

    if !out.captures_only {
        generate_castling_moves(game_state, out);
    }
}

/// Castling needs the right, king and rook on their home squares, an empty
/// path between them, and no attacked square from the king's start to its landing.
fn generate_castling_moves(game_state: &GameState, out: &mut MoveCollector<'_>) {
    let color = out.color;
    let kings = game_state.piece_board(color, PieceKind::King);
    let rooks = game_state.piece_board(color, PieceKind::Rook);
    let occupancy = game_state.occupancy_all();

    let candidates: Vec<_> = castling_geometry(color)
        .into_iter()
        .filter(|geometry| {
            game_state.has_castling_right(geometry.right)
                && kings & (1u64 << geometry.king_from) != 0
                && rooks & (1u64 << geometry.rook_from) != 0
                && occupancy & geometry.empty_mask == 0
        })
        .collect();
    if candidates.is_empty() {
        return;
    }

    let attacked = attacked_squares(color.opposite(), game_state);
    for geometry in candidates {
        if attacked & geometry.safe_mask == 0 {
            out.push_quiet(geometry.king_from, geometry.king_to, PieceKind::King, None);
        }
    }
}
