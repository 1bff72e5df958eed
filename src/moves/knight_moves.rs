use crate::game_state::bit_utils::{translate_span, FILE_A, FILE_B, FILE_G, FILE_H, KNIGHT_SPAN};
use crate::game_state::chess_types::{Bitboard, Square};

pub const KNIGHT_ATTACKS: [Bitboard; 64] = generate_knight_attacks();

#[inline]
pub const fn knight_attacks(square: Square) -> Bitboard {
    KNIGHT_ATTACKS[square as usize]
}

/// Squares a translated knight span must not reach from a piece on `file`.
const fn knight_wrap_mask(file: usize) -> Bitboard {
    match file {
        0 | 1 => !(FILE_G | FILE_H),
        6 | 7 => !(FILE_A | FILE_B),
        _ => !0,
    }
}

const fn generate_knight_attacks() -> [Bitboard; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        table[sq] = translate_span(KNIGHT_SPAN, sq as Square) & knight_wrap_mask(sq % 8);
        sq += 1;
    }

    table
}
