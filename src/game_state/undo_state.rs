use crate::game_state::chess_types::*;

/// Single undo record for `apply_move` / `undo_move`.
///
/// Holds the pre-move values of everything `apply_move` touches, so undoing
/// never has to re-derive state. Records are consumed in strict LIFO order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    /// Set when the capture took the pawn behind `mv.to` rather than a piece on it.
    pub en_passant: bool,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,

    pub prev_zobrist_key: u64,
}

impl UndoState {
    /// Square the captured piece stood on (differs from `mv.to` for en passant).
    #[inline]
    pub fn capture_square(&self) -> Square {
        if self.is_en_passant() {
            match self.moved_piece.color {
                Color::Light => self.mv.to - 8,
                Color::Dark => self.mv.to + 8,
            }
        } else {
            self.mv.to
        }
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.en_passant
    }

    #[inline]
    pub fn is_castling(&self) -> bool {
        self.moved_piece.kind == PieceKind::King && self.mv.from.abs_diff(self.mv.to) == 2
    }
}
