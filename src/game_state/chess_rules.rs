//! Canonical chess-rule constants.
//!
//! Starting position plus the fixed castling geometry: which squares the
//! king crosses, which must be empty, and where the rook goes.

use crate::game_state::bit_utils::bit;
use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Static description of one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingGeometry {
    pub right: CastlingRights,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares the king starts on, passes through and lands on; none may be attacked.
    pub safe_mask: Bitboard,
    /// Squares between king and rook; all must be empty.
    pub empty_mask: Bitboard,
}

pub const LIGHT_KINGSIDE: CastlingGeometry = CastlingGeometry {
    right: CASTLE_LIGHT_KINGSIDE,
    king_from: 4,
    king_to: 6,
    rook_from: 7,
    rook_to: 5,
    safe_mask: bit(4) | bit(5) | bit(6),
    empty_mask: bit(5) | bit(6),
};

pub const LIGHT_QUEENSIDE: CastlingGeometry = CastlingGeometry {
    right: CASTLE_LIGHT_QUEENSIDE,
    king_from: 4,
    king_to: 2,
    rook_from: 0,
    rook_to: 3,
    safe_mask: bit(4) | bit(3) | bit(2),
    empty_mask: bit(1) | bit(2) | bit(3),
};

pub const DARK_KINGSIDE: CastlingGeometry = CastlingGeometry {
    right: CASTLE_DARK_KINGSIDE,
    king_from: 60,
    king_to: 62,
    rook_from: 63,
    rook_to: 61,
    safe_mask: bit(60) | bit(61) | bit(62),
    empty_mask: bit(61) | bit(62),
};

pub const DARK_QUEENSIDE: CastlingGeometry = CastlingGeometry {
    right: CASTLE_DARK_QUEENSIDE,
    king_from: 60,
    king_to: 58,
    rook_from: 56,
    rook_to: 59,
    safe_mask: bit(60) | bit(59) | bit(58),
    empty_mask: bit(57) | bit(58) | bit(59),
};

/// Kingside then queenside geometry for `color`.
#[inline]
pub const fn castling_geometry(color: Color) -> [CastlingGeometry; 2] {
    match color {
        Color::Light => [LIGHT_KINGSIDE, LIGHT_QUEENSIDE],
        Color::Dark => [DARK_KINGSIDE, DARK_QUEENSIDE],
    }
}

/// Castling right lost when a rook leaves, or is captured on, `square`.
#[inline]
pub const fn rook_home_right(square: Square) -> CastlingRights {
    match square {
        0 => CASTLE_LIGHT_QUEENSIDE,
        7 => CASTLE_LIGHT_KINGSIDE,
        56 => CASTLE_DARK_QUEENSIDE,
        63 => CASTLE_DARK_KINGSIDE,
        _ => 0,
    }
}

/// Both rights of `color`.
#[inline]
pub const fn color_rights(color: Color) -> CastlingRights {
    match color {
        Color::Light => CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE,
        Color::Dark => CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE,
    }
}
