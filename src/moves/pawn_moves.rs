//! Set-wise pawn shifts.
//!
//! All pawns of one colour are moved at once; diagonal shifts drop the bit
//! that would wrap from the h-file onto the a-file (and vice versa).

use crate::game_state::bit_utils::{FILE_A, FILE_H, RANK_3, RANK_6};
use crate::game_state::chess_types::{Bitboard, Color};

/// Squares attacked diagonally forward by every pawn in `pawns`.
#[inline]
pub const fn pawn_attacks(color: Color, pawns: Bitboard) -> Bitboard {
    pawn_attacks_west(color, pawns) | pawn_attacks_east(color, pawns)
}

/// Captures toward the a-file.
#[inline]
pub const fn pawn_attacks_west(color: Color, pawns: Bitboard) -> Bitboard {
    match color {
        Color::Light => (pawns << 7) & !FILE_H,
        Color::Dark => (pawns >> 9) & !FILE_H,
    }
}

/// Captures toward the h-file.
#[inline]
pub const fn pawn_attacks_east(color: Color, pawns: Bitboard) -> Bitboard {
    match color {
        Color::Light => (pawns << 9) & !FILE_A,
        Color::Dark => (pawns >> 7) & !FILE_A,
    }
}

/// One step forward onto an empty square.
#[inline]
pub const fn single_pushes(color: Color, pawns: Bitboard, empty: Bitboard) -> Bitboard {
    match color {
        Color::Light => (pawns << 8) & empty,
        Color::Dark => (pawns >> 8) & empty,
    }
}

/// Two steps forward from the start rank; both squares crossed must be empty.
#[inline]
pub const fn double_pushes(color: Color, pawns: Bitboard, empty: Bitboard) -> Bitboard {
    let singles = single_pushes(color, pawns, empty);
    match color {
        Color::Light => ((singles & RANK_3) << 8) & empty,
        Color::Dark => ((singles & RANK_6) >> 8) & empty,
    }
}

/// Signed distance of a forward step, in squares.
#[inline]
pub const fn forward_offset(color: Color) -> i8 {
    match color {
        Color::Light => 8,
        Color::Dark => -8,
    }
}
