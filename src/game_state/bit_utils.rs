//! Bitboard primitives and fixed mask tables.
//!
//! Bit `i` is square `i` (a1 = 0, h1 = 7, a8 = 56, h8 = 63).

use crate::game_state::chess_types::{Bitboard, Square};

pub const EMPTY: Bitboard = 0;
pub const ALL_SQUARES: Bitboard = !0;

pub const RANK_1: Bitboard = 0x0000_0000_0000_00ff;
pub const RANK_2: Bitboard = 0x0000_0000_0000_ff00;
pub const RANK_3: Bitboard = 0x0000_0000_00ff_0000;
pub const RANK_4: Bitboard = 0x0000_0000_ff00_0000;
pub const RANK_5: Bitboard = 0x0000_00ff_0000_0000;
pub const RANK_6: Bitboard = 0x0000_ff00_0000_0000;
pub const RANK_7: Bitboard = 0x00ff_0000_0000_0000;
pub const RANK_8: Bitboard = 0xff00_0000_0000_0000;

pub const FILE_A: Bitboard = 0x0101_0101_0101_0101;
pub const FILE_B: Bitboard = 0x0202_0202_0202_0202;
pub const FILE_C: Bitboard = 0x0404_0404_0404_0404;
pub const FILE_D: Bitboard = 0x0808_0808_0808_0808;
pub const FILE_E: Bitboard = 0x1010_1010_1010_1010;
pub const FILE_F: Bitboard = 0x2020_2020_2020_2020;
pub const FILE_G: Bitboard = 0x4040_4040_4040_4040;
pub const FILE_H: Bitboard = 0x8080_8080_8080_8080;

pub const RANKS: [Bitboard; 8] = [
    RANK_1, RANK_2, RANK_3, RANK_4, RANK_5, RANK_6, RANK_7, RANK_8,
];
pub const FILES: [Bitboard; 8] = [
    FILE_A, FILE_B, FILE_C, FILE_D, FILE_E, FILE_F, FILE_G, FILE_H,
];

/// Lines of constant `rank + file`, indexed by that sum (a1 first, h8 last).
#[rustfmt::skip]
pub const DIAGONAL_MASKS: [Bitboard; 15] = [
    0x1, 0x102, 0x10204, 0x1020408, 0x102040810, 0x10204081020, 0x1020408102040,
    0x102040810204080, 0x204081020408000, 0x408102040800000, 0x810204080000000,
    0x1020408000000000, 0x2040800000000000, 0x4080000000000000, 0x8000000000000000,
];

/// Lines of constant `rank - file`, indexed by `rank + 7 - file` (h1 first, a8 last).
#[rustfmt::skip]
pub const ANTI_DIAGONAL_MASKS: [Bitboard; 15] = [
    0x80, 0x8040, 0x804020, 0x80402010, 0x8040201008, 0x804020100804, 0x80402010080402,
    0x8040201008040201, 0x4020100804020100, 0x2010080402010000, 0x1008040201000000,
    0x804020100000000, 0x402010000000000, 0x201000000000000, 0x100000000000000,
];

/// Square the knight and king spans are centred on (e5).
pub const SPAN_CENTER: Square = 36;

/// Knight targets from e5.
pub const KNIGHT_SPAN: Bitboard = 0x0028_4400_4428_0000;

/// King targets from e5.
pub const KING_SPAN: Bitboard = 0x0000_3828_3800_0000;

/// Single-bit mask for `square`.
#[inline]
pub const fn bit(square: Square) -> Bitboard {
    1u64 << square
}

/// Index of the highest set bit.
///
/// # Panics
///
/// Panics on an empty bitboard; callers only scan masks known to be non-empty.
#[inline]
pub fn msb(board: Bitboard) -> Square {
    assert!(board != EMPTY, "msb called on an empty bitboard");
    (63 - board.leading_zeros()) as Square
}

/// Clear the highest set bit, returning the remaining board and the bit's index.
///
/// # Panics
///
/// Panics on an empty bitboard.
#[inline]
pub fn pop_msb(board: Bitboard) -> (Bitboard, Square) {
    let index = msb(board);
    (board & !bit(index), index)
}

/// Full 64-bit reversal: bit 0 swaps with bit 63, bit 1 with bit 62, ...
#[inline]
pub const fn reverse(board: Bitboard) -> Bitboard {
    board.reverse_bits()
}

/// Iterator draining a bitboard from its highest set bit downwards.
#[derive(Debug, Clone, Copy)]
pub struct Squares(pub Bitboard);

impl Iterator for Squares {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == EMPTY {
            return None;
        }
        let (rest, index) = pop_msb(self.0);
        self.0 = rest;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

#[inline]
pub const fn file_of(square: Square) -> usize {
    (square % 8) as usize
}

#[inline]
pub const fn rank_of(square: Square) -> usize {
    (square / 8) as usize
}

/// Move a span defined around e5 onto `square`; file wraparound is left to the caller's mask.
#[inline]
pub const fn translate_span(span: Bitboard, square: Square) -> Bitboard {
    if square > SPAN_CENTER {
        span << (square - SPAN_CENTER)
    } else {
        span >> (SPAN_CENTER - square)
    }
}
