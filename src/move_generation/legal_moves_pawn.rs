//! Pawn pushes, captures, en passant and promotions.
//!
//! Targets are computed for all pawns at once with the shifts in
//! `moves::pawn_moves`; each target square is then mapped back to its origin
//! by the shift distance.

use crate::game_state::bit_utils::{bit, Squares, RANK_1, RANK_8};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{piece_kind_on, MoveCollector};
use crate::moves::pawn_moves::{
    double_pushes, forward_offset, pawn_attacks, pawn_attacks_east, pawn_attacks_west,
    single_pushes,
};

pub fn generate_pawn_moves(game_state: &GameState, out: &mut MoveCollector<'_>) {
    let color = out.color;
    let enemy = color.opposite();
    let pawns = game_state.piece_board(color, PieceKind::Pawn);
    if pawns == 0 {
        return;
    }

    let empty = game_state.empty_squares();
    let last_rank = match color {
        Color::Light => RANK_8,
        Color::Dark => RANK_1,
    };
    let forward = forward_offset(color);

    // Quiet promotions are suppressed with every other quiet move.
    if !out.captures_only {
        for to in Squares(single_pushes(color, pawns, empty)) {
            let from = origin(to, forward);
            if bit(to) & last_rank != 0 {
                for kind in PieceKind::PROMOTIONS {
                    out.push_quiet(from, to, PieceKind::Pawn, Some(kind));
                }
            } else {
                out.push_quiet(from, to, PieceKind::Pawn, None);
            }
        }
        for to in Squares(double_pushes(color, pawns, empty)) {
            out.push_quiet(origin(to, 2 * forward), to, PieceKind::Pawn, None);
        }
    }

    let victims = game_state.occupancy(enemy) & !game_state.piece_board(enemy, PieceKind::King);
    let diagonals = [
        (pawn_attacks_west(color, pawns), forward - 1),
        (pawn_attacks_east(color, pawns), forward + 1),
    ];
    for (targets, offset) in diagonals {
        for to in Squares(targets & victims) {
            let from = origin(to, offset);
            let Some(victim) = piece_kind_on(game_state, enemy, to) else {
                continue;
            };
            if bit(to) & last_rank != 0 {
                for kind in PieceKind::PROMOTIONS {
                    out.push_capture(from, to, PieceKind::Pawn, victim, Some(kind));
                }
            } else {
                out.push_capture(from, to, PieceKind::Pawn, victim, None);
            }
        }
    }

    if let Some(target) = en_passant_target_for(game_state, color) {
        // Pawns that could capture onto `target` are those an enemy pawn there would attack.
        for from in Squares(pawn_attacks(enemy, bit(target)) & pawns) {
            out.push_capture(from, target, PieceKind::Pawn, PieceKind::Pawn, None);
        }
    }
}

/// The recorded target, if it is one `color` can capture onto (sixth rank for Light, third for Dark).
fn en_passant_target_for(game_state: &GameState, color: Color) -> Option<Square> {
    let target = game_state.en_passant_square?;
    let capture_rank = match color {
        Color::Light => 5,
        Color::Dark => 2,
    };
    (target / 8 == capture_rank && bit(target) & game_state.empty_squares() != 0).then_some(target)
}

#[inline]
fn origin(to: Square, offset: i8) -> Square {
    (to as i8 - offset) as Square
}
