//! Sliding-piece attacks by hyperbola quintessence.
//!
//! For a line mask `L` through the slider bit `p`, the squares reached in the
//! increasing direction are `(occ & L) - 2p`; reversing the board turns the
//! decreasing direction into the same subtraction. XOR of both, masked to `L`,
//! is every square up to and including the first blocker on each side.
//! No ray tables are needed: each axis costs one reversal and two subtractions.

use crate::game_state::bit_utils::{
    bit, file_of, rank_of, reverse, ANTI_DIAGONAL_MASKS, DIAGONAL_MASKS, FILES, RANKS,
};
use crate::game_state::chess_types::{Bitboard, Square};

/// Which movement lines a slider uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideAxis {
    /// File and rank (rook).
    Orthogonal,
    /// Both diagonals (bishop).
    Diagonal,
    /// All four lines (queen).
    Both,
}

/// Attacks along a single line mask that contains `square`.
#[inline]
pub fn line_attacks(square: Square, occupancy: Bitboard, line: Bitboard) -> Bitboard {
    let piece = bit(square);
    let occupied = occupancy & line;
    let forward = occupied.wrapping_sub(piece.wrapping_mul(2));
    let backward = reverse(reverse(occupied).wrapping_sub(reverse(piece).wrapping_mul(2)));
    (forward ^ backward) & line
}

#[inline]
pub fn rook_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    line_attacks(square, occupancy, FILES[file_of(square)])
        | line_attacks(square, occupancy, RANKS[rank_of(square)])
}

#[inline]
pub fn bishop_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    let (rank, file) = (rank_of(square), file_of(square));
    line_attacks(square, occupancy, DIAGONAL_MASKS[rank + file])
        | line_attacks(square, occupancy, ANTI_DIAGONAL_MASKS[rank + 7 - file])
}

#[inline]
pub fn queen_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    rook_attacks(square, occupancy) | bishop_attacks(square, occupancy)
}

/// Attacks from `square` along the lines selected by `axis`.
#[inline]
pub fn sliding_attacks(square: Square, occupancy: Bitboard, axis: SlideAxis) -> Bitboard {
    match axis {
        SlideAxis::Orthogonal => rook_attacks(square, occupancy),
        SlideAxis::Diagonal => bishop_attacks(square, occupancy),
        SlideAxis::Both => queen_attacks(square, occupancy),
    }
}
