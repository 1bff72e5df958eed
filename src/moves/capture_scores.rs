//! Victim/attacker capture ordering table.
//!
//! A bigger victim always outranks a smaller one; among equal victims the
//! cheaper attacker comes first.

use crate::game_state::chess_types::PieceKind;

/// Ordering weights indexed by `PieceKind::index()`.
const ORDERING_VALUE: [i32; 6] = [100, 200, 300, 400, 500, 600];

/// `[victim][attacker]`.
pub const CAPTURE_SCORE: [[i32; 6]; 6] = build_capture_scores();

const fn build_capture_scores() -> [[i32; 6]; 6] {
    let mut table = [[0i32; 6]; 6];
    let mut victim = 0;
    while victim < 6 {
        let mut attacker = 0;
        while attacker < 6 {
            table[victim][attacker] =
                ORDERING_VALUE[victim] + 6 - ORDERING_VALUE[attacker] / 100;
            attacker += 1;
        }
        victim += 1;
    }
    table
}

#[inline]
pub const fn capture_score(victim: PieceKind, attacker: PieceKind) -> i32 {
    CAPTURE_SCORE[victim.index()][attacker.index()]
}

#[cfg(test)]
mod tests {
    use super::capture_score;
    use crate::game_state::chess_types::PieceKind;

    #[test]
    fn most_valuable_victim_least_valuable_attacker() {
        assert!(
            capture_score(PieceKind::Queen, PieceKind::Pawn)
                > capture_score(PieceKind::Queen, PieceKind::Rook)
        );
        assert!(
            capture_score(PieceKind::Queen, PieceKind::King)
                > capture_score(PieceKind::Rook, PieceKind::Pawn)
        );
        assert!(
            capture_score(PieceKind::Knight, PieceKind::Pawn)
                > capture_score(PieceKind::Pawn, PieceKind::Pawn)
        );
        assert_eq!(capture_score(PieceKind::Pawn, PieceKind::King), 100);
    }
}
