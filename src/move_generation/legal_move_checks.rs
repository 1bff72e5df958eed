//! Attacked-square sets and check tests.
//!
//! `attacked_squares` ignores what stands on the target squares, so it also
//! covers squares defended by the attacker's own pieces. It is used for
//! king safety and castling transit tests, never to generate moves.

use crate::game_state::bit_utils::{bit, Squares};
use crate::game_state::chess_types::*;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::sliding_attacks::{bishop_attacks, rook_attacks};

/// Every square attacked by `by_color`.
pub fn attacked_squares(by_color: Color, game_state: &GameState) -> Bitboard {
    let occupancy = game_state.occupancy_all();
    let board = |kind| game_state.piece_board(by_color, kind);

    let mut attacked = pawn_attacks(by_color, board(PieceKind::Pawn));

    for square in Squares(board(PieceKind::Knight)) {
        attacked |= knight_attacks(square);
    }

    let queens = board(PieceKind::Queen);
    for square in Squares(board(PieceKind::Bishop) | queens) {
        attacked |= bishop_attacks(square, occupancy);
    }
    for square in Squares(board(PieceKind::Rook) | queens) {
        attacked |= rook_attacks(square, occupancy);
    }

    for square in Squares(board(PieceKind::King)) {
        attacked |= king_attacks(square);
    }

    attacked
}

/// Reverse lookup from `square`: cheaper than a full attack set when only one square matters.
pub fn is_square_attacked(game_state: &GameState, square: Square, by_color: Color) -> bool {
    let occupancy = game_state.occupancy_all();
    let board = |kind| game_state.piece_board(by_color, kind);

    // A pawn of `by_color` attacks `square` iff a defender pawn on `square` would attack it back.
    if pawn_attacks(by_color.opposite(), bit(square)) & board(PieceKind::Pawn) != 0 {
        return true;
    }
    if knight_attacks(square) & board(PieceKind::Knight) != 0 {
        return true;
    }
    if king_attacks(square) & board(PieceKind::King) != 0 {
        return true;
    }

    let queens = board(PieceKind::Queen);
    if bishop_attacks(square, occupancy) & (board(PieceKind::Bishop) | queens) != 0 {
        return true;
    }
    rook_attacks(square, occupancy) & (board(PieceKind::Rook) | queens) != 0
}

/// Whether `color`'s king is attacked. A side without a king is never in check.
#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    game_state
        .king_square(color)
        .is_some_and(|king| is_square_attacked(game_state, king, color.opposite()))
}

/// Whether the side to move is in check.
#[inline]
pub fn is_in_check(game_state: &GameState) -> bool {
    is_king_in_check(game_state, game_state.side_to_move)
}

/// Post-move test: the side that just moved did not leave its own king attacked.
#[inline]
pub fn is_legal(game_state: &GameState) -> bool {
    !is_king_in_check(game_state, game_state.side_to_move.opposite())
}
