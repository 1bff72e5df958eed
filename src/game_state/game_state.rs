//! Bitboard position model.
//!
//! `GameState` holds twelve piece bitboards plus the flags needed to generate
//! moves from scratch. Occupancy unions are derived on demand rather than
//! cached, so there is nothing to keep in sync besides the Zobrist key, which
//! `set_piece` maintains incrementally.

use std::fmt;

use crate::errors::ChessResult;
use crate::game_state::bit_utils::{bit, EMPTY};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::search::zobrist::{compute_zobrist_key, piece_square_key};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game_state::render_game_state;

/// Complete game state, mutated in place by `apply_move` / `undo_move`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // [color][piece_kind]
    pub pieces: [[Bitboard; 6]; 2],

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    pub zobrist_key: u64,
}

impl Default for GameState {
    fn default() -> Self {
        let mut game_state = Self {
            pieces: [[EMPTY; 6]; 2],
            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            zobrist_key: 0,
        };
        game_state.refresh_zobrist_key();
        game_state
    }
}

impl GameState {
    /// Empty board, Light to move, no rights.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position.
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN)
            .unwrap_or_else(|err| panic!("starting FEN must parse: {err}"))
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Clear `square` on all twelve masks, then place `piece` there (if any).
    pub fn set_piece(&mut self, piece: Option<Piece>, square: Square) {
        debug_assert!(square < 64, "square {square} out of range");
        let mask = bit(square);
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let board = &mut self.pieces[color.index()][kind.index()];
                if *board & mask != 0 {
                    *board &= !mask;
                    self.zobrist_key ^= piece_square_key(Piece::new(color, kind), square);
                }
            }
        }
        if let Some(piece) = piece {
            self.pieces[piece.color.index()][piece.kind.index()] |= mask;
            self.zobrist_key ^= piece_square_key(piece, square);
        }
    }

    /// Which piece stands on `square`, testing the side to move first.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let mask = bit(square);
        for color in [self.side_to_move, self.side_to_move.opposite()] {
            for kind in PieceKind::LOOKUP_ORDER {
                if self.pieces[color.index()][kind.index()] & mask != 0 {
                    return Some(Piece::new(color, kind));
                }
            }
        }
        None
    }

    #[inline]
    pub fn piece_board(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.pieces[color.index()][kind.index()]
    }

    /// Union of one side's pieces.
    #[inline]
    pub fn occupancy(&self, color: Color) -> Bitboard {
        self.pieces[color.index()]
            .iter()
            .fold(EMPTY, |acc, board| acc | board)
    }

    /// Union of all pieces.
    #[inline]
    pub fn occupancy_all(&self) -> Bitboard {
        self.occupancy(Color::Light) | self.occupancy(Color::Dark)
    }

    #[inline]
    pub fn empty_squares(&self) -> Bitboard {
        !self.occupancy_all()
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let kings = self.piece_board(color, PieceKind::King);
        if kings == EMPTY {
            None
        } else {
            Some(kings.trailing_zeros() as Square)
        }
    }

    #[inline]
    pub fn has_castling_right(&self, right: CastlingRights) -> bool {
        self.castling_rights & right != 0
    }

    /// Recompute the Zobrist key from scratch.
    pub fn refresh_zobrist_key(&mut self) {
        self.zobrist_key = compute_zobrist_key(self);
    }

    /// The same position seen from the other side: ranks mirrored, colours swapped.
    pub fn color_flipped(&self) -> GameState {
        let mut flipped = GameState::new_empty();
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                flipped.pieces[color.opposite().index()][kind.index()] =
                    self.piece_board(color, kind).swap_bytes();
            }
        }
        flipped.side_to_move = self.side_to_move.opposite();
        flipped.castling_rights = ((self.castling_rights & 0b0011) << 2)
            | ((self.castling_rights & 0b1100) >> 2);
        flipped.en_passant_square = self.en_passant_square.map(|square| square ^ 56);
        flipped.halfmove_clock = self.halfmove_clock;
        flipped.fullmove_number = self.fullmove_number;
        flipped.refresh_zobrist_key();
        flipped
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game_state(self))
    }
}
