use quint_chess::game_state::chess_types::GameState;
use quint_chess::move_generation::perft::{perft, perft_counts};

fn assert_perft(fen: &str, expected: &[u64]) {
    let mut game = GameState::from_fen(fen).expect("reference FEN should parse");
    let before = game.clone();
    for (depth_idx, nodes) in expected.iter().enumerate() {
        let depth = (depth_idx + 1) as u8;
        assert_eq!(perft(&mut game, depth), *nodes, "{fen} at depth {depth}");
    }
    assert_eq!(game, before, "perft must leave {fen} untouched");
}

#[test]
fn starting_position() {
    assert_perft(
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        &[20, 400, 8902, 197_281],
    );
}

#[test]
fn kiwipete() {
    assert_perft(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        &[48, 2039, 97_862],
    );
}

#[test]
fn rook_and_pawn_endgame() {
    assert_perft(
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        &[14, 191, 2812, 43_238],
    );
}

#[test]
fn promotions_and_castling_under_fire() {
    assert_perft(
        "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
        &[6, 264, 9467],
    );
}

#[test]
fn mirrored_promotion_position_matches() {
    assert_perft(
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        &[6, 264, 9467],
    );
}

#[test]
fn discovered_checks_and_underpromotion() {
    assert_perft(
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        &[44, 1486, 62_379],
    );
}

#[test]
fn rook_endgame_tallies_en_passant() {
    let mut game =
        GameState::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").expect("FEN should parse");
    let counts = perft_counts(&mut game, 3);
    assert_eq!(counts.nodes, 2812);
    assert_eq!(counts.captures, 209);
    assert_eq!(counts.en_passant, 2);
    assert_eq!(counts.checks, 267);
}
