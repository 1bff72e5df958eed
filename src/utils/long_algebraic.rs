//! Long algebraic move text (`e2e4`, `e7e8q`).
//!
//! Parsing here only checks shape; whether the move is playable is decided
//! against the generated move list by `find_legal_move`.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_long_algebraic(text: &str) -> ChessResult<Move> {
    let text = text.trim();
    let invalid = || ChessError::InvalidMoveText {
        text: text.to_owned(),
    };

    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(invalid());
    }

    let from = algebraic_to_square(&text[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_square(&text[2..4]).map_err(|_| invalid())?;
    if from == to {
        return Err(invalid());
    }

    match text[4..].chars().next() {
        None => Ok(Move::new(from, to)),
        Some(letter) => {
            let kind = char_to_promotion(letter)?;
            Ok(Move::with_promotion(from, to, kind))
        }
    }
}

fn char_to_promotion(letter: char) -> ChessResult<PieceKind> {
    match PieceKind::from_letter(letter) {
        Some(kind) if PieceKind::PROMOTIONS.contains(&kind) => Ok(kind),
        _ => Err(ChessError::InvalidPromotion { piece: letter }),
    }
}
