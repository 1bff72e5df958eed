//! Square conversions between coordinates (`e4`) and board indices.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert a coordinate such as `"e4"` to a square index.
#[inline]
pub fn algebraic_to_square(text: &str) -> ChessResult<Square> {
    let invalid = || ChessError::InvalidSquare {
        text: text.to_owned(),
    };

    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(invalid());
    }

    let (file, rank) = (bytes[0], bytes[1]);
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(invalid());
    }

    Ok((rank - b'1') * 8 + (file - b'a'))
}

/// Convert a square index (`0..=63`) to its coordinate.
#[inline]
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    let square = square_from_index(square as usize)?;
    let file_char = char::from(b'a' + square % 8);
    let rank_char = char::from(b'1' + square / 8);
    Ok(format!("{file_char}{rank_char}"))
}

/// Range-checked conversion from a raw index.
#[inline]
pub fn square_from_index(index: usize) -> ChessResult<Square> {
    if index < 64 {
        Ok(index as Square)
    } else {
        Err(ChessError::SquareOutOfRange { index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), 0);
        assert_eq!(algebraic_to_square("e4").expect("e4 should parse"), 28);
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), 63);
        assert_eq!(square_to_algebraic(0).expect("0 should convert"), "a1");
        assert_eq!(square_to_algebraic(63).expect("63 should convert"), "h8");
    }

    #[test]
    fn rejects_malformed_coordinates() {
        for text in ["", "e", "e44", "i4", "e9", "E4", "4e"] {
            assert_eq!(
                algebraic_to_square(text),
                Err(ChessError::InvalidSquare {
                    text: text.to_owned()
                })
            );
        }
    }

    #[test]
    fn index_past_h8_is_out_of_range() {
        assert_eq!(square_from_index(63), Ok(63));
        assert_eq!(
            square_from_index(64),
            Err(ChessError::SquareOutOfRange { index: 64 })
        );
        assert!(square_to_algebraic(200).is_err());
    }
}
