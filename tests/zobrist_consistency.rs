use quint_chess::game_state::chess_types::GameState;
use quint_chess::move_generation::legal_move_generator::find_legal_move;
use quint_chess::move_generation::legal_move_apply::apply_move;
use quint_chess::search::zobrist::compute_zobrist_key;

fn play(fen: &str, line: &[&str]) -> GameState {
    let mut game = GameState::from_fen(fen).expect("FEN should parse");
    for text in line {
        let mv = find_legal_move(&game, text).expect("line should be legal");
        apply_move(&mut game, mv);
    }
    game
}

fn play_from_start(line: &[&str]) -> GameState {
    play(
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        line,
    )
}

#[test]
fn transposed_move_orders_share_a_key() {
    let a = play_from_start(&["g1f3", "g8f6", "b1c3"]);
    let b = play_from_start(&["b1c3", "g8f6", "g1f3"]);
    assert_eq!(a.zobrist_key, b.zobrist_key);
    assert_eq!(a.zobrist_key, compute_zobrist_key(&a));
}

#[test]
fn knight_shuffle_returns_to_the_start_key() {
    let start = GameState::new_game();
    let shuffled = play_from_start(&["g1f3", "g8f6", "f3g1", "f6g8"]);
    assert_eq!(shuffled.zobrist_key, start.zobrist_key);
    assert_ne!(shuffled.fullmove_number, start.fullmove_number);
}

#[test]
fn lost_castling_right_changes_the_key() {
    let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
    let original = GameState::from_fen(fen).expect("FEN should parse");
    let shuffled = play(fen, &["h1g1", "h8g8", "g1h1", "g8h8"]);
    assert_eq!(shuffled.get_fen(), "r3k2r/8/8/8/8/8/8/R3K2R w Qq - 4 3");
    assert_ne!(shuffled.zobrist_key, original.zobrist_key);
    assert_eq!(shuffled.zobrist_key, compute_zobrist_key(&shuffled));
}

#[test]
fn en_passant_square_is_part_of_the_key() {
    let with_target = play_from_start(&["e2e4"]);
    let mut without_target = with_target.clone();
    without_target.en_passant_square = None;
    without_target.refresh_zobrist_key();
    assert_ne!(with_target.zobrist_key, without_target.zobrist_key);
}

#[test]
fn fen_round_trip_preserves_the_key() {
    let game = play_from_start(&["e2e4", "c7c5", "g1f3", "d7d6", "e1e2"]);
    let reparsed = GameState::from_fen(&game.get_fen()).expect("generated FEN should parse");
    assert_eq!(reparsed.zobrist_key, game.zobrist_key);
}
