//! FEN-to-GameState parser.
//!
//! Builds a fully-populated state from a Forsyth-Edwards Notation record,
//! including the Zobrist key. The two clock fields may be omitted and then
//! default to `0 1`.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessError::fen("board", "missing piece placement"))?;
    let side_part = parts
        .next()
        .ok_or_else(|| ChessError::fen("side to move", "missing field"))?;
    let castling_part = parts
        .next()
        .ok_or_else(|| ChessError::fen("castling rights", "missing field"))?;
    let en_passant_part = parts
        .next()
        .ok_or_else(|| ChessError::fen("en passant", "missing field"))?;
    let halfmove_part = parts.next().unwrap_or("0");
    let fullmove_part = parts.next().unwrap_or("1");

    if let Some(extra) = parts.next() {
        return Err(ChessError::fen("record", format!("unexpected trailing field '{extra}'")));
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_square = parse_en_passant_square(en_passant_part, &game_state)?;
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| ChessError::fen("halfmove clock", format!("'{halfmove_part}' is not a number")))?;
    game_state.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| ChessError::fen("fullmove number", format!("'{fullmove_part}' is not a number")))?;
    if game_state.fullmove_number == 0 {
        return Err(ChessError::fen("fullmove number", "must start at 1"));
    }

    game_state.refresh_zobrist_key();
    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::fen(
            "board",
            format!("expected 8 ranks, found {}", ranks.len()),
        ));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::fen("board", format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as usize;
                continue;
            }

            let piece = Piece::from_symbol(ch)
                .ok_or_else(|| ChessError::fen("board", format!("invalid piece character '{ch}'")))?;

            if file >= 8 {
                return Err(ChessError::fen(
                    "board",
                    format!("rank {} has too many files", board_rank + 1),
                ));
            }

            if piece.kind == PieceKind::Pawn && (board_rank == 0 || board_rank == 7) {
                return Err(ChessError::fen(
                    "board",
                    format!("pawn '{ch}' on rank {}", board_rank + 1),
                ));
            }

            let square = (board_rank * 8 + file) as Square;
            game_state.pieces[piece.color.index()][piece.kind.index()] |= 1u64 << square;
            file += 1;
        }

        if file != 8 {
            return Err(ChessError::fen(
                "board",
                format!("rank {} does not cover exactly 8 files", board_rank + 1),
            ));
        }
    }

    for color in Color::ALL {
        let kings = game_state.piece_board(color, PieceKind::King).count_ones();
        if kings != 1 {
            return Err(ChessError::fen(
                "board",
                format!("{color:?} must have exactly one king, found {kings}"),
            ));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessError::fen("side to move", format!("expected 'w' or 'b', found '{side_part}'"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_LIGHT_KINGSIDE,
            'Q' => rights |= CASTLE_LIGHT_QUEENSIDE,
            'k' => rights |= CASTLE_DARK_KINGSIDE,
            'q' => rights |= CASTLE_DARK_QUEENSIDE,
            _ => {
                return Err(ChessError::fen(
                    "castling rights",
                    format!("invalid character '{ch}'"),
                ))
            }
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str, game_state: &GameState) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|err| ChessError::fen("en passant", err.to_string()))?;
    let invalid = |reason: &str| ChessError::fen("en passant", format!("'{en_passant_part}' {reason}"));

    // Only the square the opponent's last double push skipped over can be a target.
    let (capture_rank, mover) = match game_state.side_to_move {
        Color::Light => (5, Color::Dark),
        Color::Dark => (2, Color::Light),
    };
    if square / 8 != capture_rank {
        return Err(invalid(match game_state.side_to_move {
            Color::Light => "must be on the sixth rank with white to move",
            Color::Dark => "must be on the third rank with black to move",
        }));
    }
    let passed_pawn_square = match mover {
        Color::Dark => square - 8,
        Color::Light => square + 8,
    };
    if game_state.piece_at(square).is_some() {
        return Err(invalid("is occupied"));
    }
    if game_state.piece_at(passed_pawn_square) != Some(Piece::new(mover, PieceKind::Pawn)) {
        return Err(invalid("has no pawn that just passed it"));
    }
    Ok(Some(square))
}
