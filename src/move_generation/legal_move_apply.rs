//! In-place move application and its exact inverse.
//!
//! `apply_move` mutates the position and hands back an `UndoState`;
//! `undo_move` consumes that record and restores every field, the Zobrist
//! key included. Records must be undone in strict LIFO order.

use crate::game_state::chess_rules::{castling_geometry, color_rights, rook_home_right};
use crate::game_state::chess_types::*;
use crate::search::zobrist::{castling_key, en_passant_file_key, side_to_move_key};

/// Apply `mv` to `game_state` in place.
///
/// The move is trusted to be pseudo-legal for the side to move; king safety
/// is checked by the caller afterwards with `is_legal`.
///
/// # Panics
///
/// Panics if `mv.from` is empty, which means the position and move list have
/// drifted apart.
pub fn apply_move(game_state: &mut GameState, mv: Move) -> UndoState {
    let moved_piece = game_state
        .piece_at(mv.from)
        .unwrap_or_else(|| panic!("apply_move: no piece on square {} for move {mv}", mv.from));
    let side = moved_piece.color;

    let is_en_passant = moved_piece.kind == PieceKind::Pawn
        && game_state.en_passant_square == Some(mv.to)
        && mv.from % 8 != mv.to % 8
        && game_state.piece_at(mv.to).is_none();
    let capture_square = if is_en_passant {
        en_passant_victim_square(side, mv.to)
    } else {
        mv.to
    };

    let undo = UndoState {
        mv,
        moved_piece,
        captured_piece: game_state.piece_at(capture_square),
        en_passant: is_en_passant,
        prev_castling_rights: game_state.castling_rights,
        prev_en_passant_square: game_state.en_passant_square,
        prev_halfmove_clock: game_state.halfmove_clock,
        prev_fullmove_number: game_state.fullmove_number,
        prev_zobrist_key: game_state.zobrist_key,
    };

    // Retire the hash terms for state that is about to change.
    game_state.zobrist_key ^= castling_key(game_state.castling_rights);
    if let Some(ep_square) = game_state.en_passant_square {
        game_state.zobrist_key ^= en_passant_file_key(ep_square % 8);
    }

    if is_en_passant {
        game_state.set_piece(None, capture_square);
    }
    game_state.set_piece(None, mv.from);
    let placed = mv
        .promotion
        .map_or(moved_piece, |kind| Piece::new(side, kind));
    game_state.set_piece(Some(placed), mv.to);

    if undo.is_castling() {
        if let Some(geometry) = castling_geometry(side)
            .into_iter()
            .find(|geometry| geometry.king_to == mv.to)
        {
            game_state.set_piece(None, geometry.rook_from);
            game_state.set_piece(Some(Piece::new(side, PieceKind::Rook)), geometry.rook_to);
        }
    }

    if moved_piece.kind == PieceKind::King {
        game_state.castling_rights &= !color_rights(side);
    }
    game_state.castling_rights &= !(rook_home_right(mv.from) | rook_home_right(mv.to));

    game_state.en_passant_square =
        if moved_piece.kind == PieceKind::Pawn && mv.from.abs_diff(mv.to) == 16 {
            Some((mv.from + mv.to) / 2)
        } else {
            None
        };

    game_state.zobrist_key ^= castling_key(game_state.castling_rights);
    if let Some(ep_square) = game_state.en_passant_square {
        game_state.zobrist_key ^= en_passant_file_key(ep_square % 8);
    }

    if moved_piece.kind == PieceKind::Pawn || undo.captured_piece.is_some() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
    if side == Color::Dark {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }

    game_state.side_to_move = side.opposite();
    game_state.zobrist_key ^= side_to_move_key();

    undo
}

/// Restore the position exactly as it was before the `apply_move` that produced `undo`.
pub fn undo_move(game_state: &mut GameState, undo: UndoState) {
    let UndoState { mv, moved_piece, .. } = undo;
    let side = moved_piece.color;

    game_state.set_piece(None, mv.to);
    game_state.set_piece(Some(moved_piece), mv.from);

    if undo.is_castling() {
        if let Some(geometry) = castling_geometry(side)
            .into_iter()
            .find(|geometry| geometry.king_to == mv.to)
        {
            game_state.set_piece(None, geometry.rook_to);
            game_state.set_piece(Some(Piece::new(side, PieceKind::Rook)), geometry.rook_from);
        }
    }

    if let Some(captured) = undo.captured_piece {
        game_state.set_piece(Some(captured), undo.capture_square());
    }

    game_state.side_to_move = side;
    game_state.castling_rights = undo.prev_castling_rights;
    game_state.en_passant_square = undo.prev_en_passant_square;
    game_state.halfmove_clock = undo.prev_halfmove_clock;
    game_state.fullmove_number = undo.prev_fullmove_number;
    game_state.zobrist_key = undo.prev_zobrist_key;
}

#[inline]
fn en_passant_victim_square(side: Color, target: Square) -> Square {
    match side {
        Color::Light => target - 8,
        Color::Dark => target + 8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::zobrist::compute_zobrist_key;
    use crate::utils::long_algebraic::parse_long_algebraic;

    fn play(game_state: &mut GameState, text: &str) -> UndoState {
        apply_move(game_state, parse_long_algebraic(text).expect("move text should parse"))
    }

    fn assert_round_trip(fen: &str, text: &str) -> GameState {
        let original = GameState::from_fen(fen).expect("FEN should parse");
        let mut game = original.clone();
        let undo = play(&mut game, text);
        assert_eq!(game.zobrist_key, compute_zobrist_key(&game), "{text} key drift");
        let after = game.clone();
        undo_move(&mut game, undo);
        assert_eq!(game, original, "{text} did not undo cleanly");
        after
    }

    #[test]
    fn double_push_sets_en_passant_target() {
        let after = assert_round_trip(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "e2e4",
        );
        assert_eq!(after.en_passant_square, Some(20));
        assert_eq!(after.side_to_move, Color::Dark);
        assert_eq!(after.halfmove_clock, 0);
        assert_eq!(after.fullmove_number, 1);
        assert_eq!(
            after.get_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
    }

    #[test]
    fn en_passant_capture_removes_the_passed_pawn() {
        let after = assert_round_trip("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 3", "e5d6");
        assert_eq!(after.piece_at(35), None);
        assert_eq!(after.piece_at(43), Some(Piece::new(Color::Light, PieceKind::Pawn)));
        assert_eq!(after.en_passant_square, None);

        let after = assert_round_trip("4k3/8/8/8/3pP3/8/8/4K3 b - e3 0 3", "d4e3");
        assert_eq!(after.piece_at(28), None);
        assert_eq!(after.fullmove_number, 4);
    }

    #[test]
    fn diagonal_onto_an_occupied_target_is_a_plain_capture() {
        // A stale target under a piece must not turn the capture into en passant.
        let mut original =
            GameState::from_fen("4k3/4p3/3N4/8/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        original.en_passant_square = Some(43);
        original.refresh_zobrist_key();

        let mut game = original.clone();
        let undo = play(&mut game, "e7d6");
        assert!(!undo.is_en_passant());
        assert_eq!(undo.captured_piece, Some(Piece::new(Color::Light, PieceKind::Knight)));
        assert_eq!(undo.capture_square(), 43);
        assert_eq!(game.piece_at(35), None);

        undo_move(&mut game, undo);
        assert_eq!(game, original);
        assert_eq!(game.piece_at(43), Some(Piece::new(Color::Light, PieceKind::Knight)));
    }

    #[test]
    fn plain_king_step_drops_both_rights() {
        let after = assert_round_trip("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1f1");
        assert_eq!(after.castling_rights, CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE);
        assert_eq!(after.halfmove_clock, 1);

        let after = assert_round_trip("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", "e8d7");
        assert_eq!(after.castling_rights, CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE);
    }

    #[test]
    fn castling_moves_the_rook_and_drops_both_rights() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 5 10";
        let after = assert_round_trip(fen, "e1g1");
        assert_eq!(after.piece_at(5), Some(Piece::new(Color::Light, PieceKind::Rook)));
        assert_eq!(after.piece_at(7), None);
        assert_eq!(after.castling_rights, CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE);
        assert_eq!(after.halfmove_clock, 6);

        let after = assert_round_trip("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 5 10", "e8c8");
        assert_eq!(after.piece_at(59), Some(Piece::new(Color::Dark, PieceKind::Rook)));
        assert_eq!(after.piece_at(56), None);
        assert_eq!(after.castling_rights, CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE);
    }

    #[test]
    fn rook_move_or_capture_on_home_square_drops_that_right() {
        let after = assert_round_trip("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "h1h8");
        assert_eq!(after.castling_rights, CASTLE_LIGHT_QUEENSIDE | CASTLE_DARK_QUEENSIDE);
        assert_eq!(after.halfmove_clock, 0);

        let after = assert_round_trip("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "a1b1");
        assert_eq!(
            after.castling_rights,
            CASTLE_LIGHT_KINGSIDE | CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE
        );
    }

    #[test]
    fn promotion_capture_restores_both_pieces() {
        let fen = "1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1";
        let after = assert_round_trip(fen, "a7b8q");
        assert_eq!(after.piece_at(57), Some(Piece::new(Color::Light, PieceKind::Queen)));
        assert_eq!(after.piece_board(Color::Light, PieceKind::Pawn), 0);
        assert_eq!(after.piece_board(Color::Dark, PieceKind::Knight), 0);
    }

    #[test]
    #[should_panic(expected = "no piece on square")]
    fn applying_from_an_empty_square_panics() {
        let mut game = GameState::new_game();
        let _ = play(&mut game, "e4e5");
    }
}
