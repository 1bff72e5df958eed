//! King attack masks.
//!
//! Built from the e5-centred king span shifted onto each square, with the
//! opposite edge file masked off so a king on a or h never wraps around.

use crate::game_state::bit_utils::{translate_span, FILE_A, FILE_H, KING_SPAN};
use crate::game_state::chess_types::{Bitboard, Square};

pub const KING_ATTACKS: [Bitboard; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square: Square) -> Bitboard {
    KING_ATTACKS[square as usize]
}

const fn king_wrap_mask(file: usize) -> Bitboard {
    match file {
        0 => !FILE_H,
        7 => !FILE_A,
        _ => !0,
    }
}

const fn generate_king_attacks() -> [Bitboard; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        table[sq] = translate_span(KING_SPAN, sq as Square) & king_wrap_mask(sq % 8);
        sq += 1;
    }

    table
}
