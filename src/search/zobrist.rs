//! Zobrist hashing for position identity.
//!
//! Keys are drawn once per process from a seeded `StdRng` so hashes are
//! reproducible across runs, which keeps test failures and logs comparable.

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_state::bit_utils::Squares;
use crate::game_state::chess_types::*;

const ZOBRIST_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug)]
struct ZobristTables {
    // [piece.index()][square]
    piece_square: [[u64; 64]; 12],
    side_to_move: u64,
    // One key per castling-right bit.
    castling: [u64; 4],
    en_passant_file: [u64; 8],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);

    let mut piece_square = [[0u64; 64]; 12];
    for piece in &mut piece_square {
        for key in piece.iter_mut() {
            *key = rng.random();
        }
    }

    let side_to_move = rng.random();

    let mut castling = [0u64; 4];
    for key in &mut castling {
        *key = rng.random();
    }

    let mut en_passant_file = [0u64; 8];
    for key in &mut en_passant_file {
        *key = rng.random();
    }

    ZobristTables {
        piece_square,
        side_to_move,
        castling,
        en_passant_file,
    }
}

/// Key for `piece` standing on `square`.
#[inline]
pub fn piece_square_key(piece: Piece, square: Square) -> u64 {
    tables().piece_square[piece.index()][square as usize]
}

/// XOR of one key per right held in `castling_rights`.
#[inline]
pub fn castling_key(castling_rights: CastlingRights) -> u64 {
    let keys = &tables().castling;
    (0..4)
        .filter(|bit| castling_rights & (1 << bit) != 0)
        .fold(0, |acc, bit| acc ^ keys[bit])
}

#[inline]
pub fn en_passant_file_key(file: u8) -> u64 {
    tables().en_passant_file[file as usize]
}

/// Toggle key, xored in while Dark is to move.
#[inline]
pub fn side_to_move_key() -> u64 {
    tables().side_to_move
}

/// Full key computed from scratch; `apply_move` keeps `zobrist_key` equal to this incrementally.
pub fn compute_zobrist_key(game_state: &GameState) -> u64 {
    let mut key = 0u64;

    for color in Color::ALL {
        for kind in PieceKind::ALL {
            let piece = Piece::new(color, kind);
            for square in Squares(game_state.piece_board(color, kind)) {
                key ^= piece_square_key(piece, square);
            }
        }
    }

    if game_state.side_to_move == Color::Dark {
        key ^= side_to_move_key();
    }

    key ^= castling_key(game_state.castling_rights);

    if let Some(ep_square) = game_state.en_passant_square {
        key ^= en_passant_file_key(ep_square % 8);
    }

    key
}
