//! Line-oriented command front-end for interactive play.
//!
//! Holds the current position plus the undo stack of every move played
//! through it. Bad input is reported on the output stream and never ends
//! the loop; only `quit`/`exit` or end of input does.

use std::io::{self, BufRead, Write};

use crate::errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::{find_legal_move, legal_moves};
use crate::move_generation::perft::{perft, perft_divide};
use crate::search::board_scoring::PieceSquareEvaluator;
use crate::search::iterative_deepening::{search, SearchConfig, SearchResult};
use crate::utils::long_algebraic::parse_long_algebraic;

const HELP_TEXT: &str = "\
commands:
  new                 start a new game
  load <fen>          set up a position from FEN
  fen                 print the current FEN
  print               draw the board
  moves               list legal moves
  <move>              play a move in long algebraic, e.g. e2e4 or e7e8q
  undo                take back the last move
  search [depth]      search and report the best move
  go [depth]          search and play the best move
  perft <depth>       count leaf nodes
  divide <depth>      perft split by root move
  help                show this text
  quit | exit         leave";

/// Deepest perft/divide the loop will start; deeper counts run for hours.
const MAX_PERFT_DEPTH: u8 = 8;

pub fn run_stdio_loop(config: SearchConfig, game_state: GameState) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = CommandLoop::new(config, game_state);

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct CommandLoop {
    game_state: GameState,
    played: Vec<UndoState>,
    config: SearchConfig,
    evaluator: PieceSquareEvaluator,
}

impl CommandLoop {
    pub fn new(config: SearchConfig, game_state: GameState) -> Self {
        Self {
            game_state,
            played: Vec::new(),
            config,
            evaluator: PieceSquareEvaluator,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Run one input line. Returns `Ok(true)` when the session should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let arg = parts.next();

        match cmd {
            "new" => {
                self.game_state = GameState::new_game();
                self.played.clear();
                writeln!(out, "{}", self.game_state)?;
            }
            "load" => {
                let fen = trimmed["load".len()..].trim();
                match GameState::from_fen(fen) {
                    Ok(game_state) => {
                        self.game_state = game_state;
                        self.played.clear();
                        writeln!(out, "{}", self.game_state)?;
                        self.report_status(out)?;
                    }
                    Err(err) => writeln!(out, "error: {err}")?,
                }
            }
            "fen" => writeln!(out, "{}", self.game_state.get_fen())?,
            "print" => writeln!(out, "{}", self.game_state)?,
            "moves" => {
                let moves = legal_moves(&self.game_state)
                    .iter()
                    .map(Move::to_string)
                    .collect::<Vec<_>>();
                writeln!(out, "{}", moves.join(" "))?;
            }
            "undo" => match self.played.pop() {
                Some(undo) => {
                    undo_move(&mut self.game_state, undo);
                    writeln!(out, "undid {}", undo.mv)?;
                }
                None => writeln!(out, "error: nothing to undo")?,
            },
            "search" | "go" if arg.is_some() && parse_depth(arg, u8::MAX).is_none() => {
                writeln!(out, "error: usage: {cmd} [depth]")?;
            }
            "search" => match self.run_search(arg) {
                Ok(result) => write_search_result(out, &result)?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "go" => match self.run_search(arg) {
                Ok(result) => {
                    write_search_result(out, &result)?;
                    if let Some(best) = result.best_move {
                        self.play(best);
                        writeln!(out, "played {best}")?;
                    }
                    self.report_status(out)?;
                }
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "perft" => match parse_depth(arg, MAX_PERFT_DEPTH) {
                Some(depth) => {
                    let nodes = perft(&mut self.game_state, depth);
                    writeln!(out, "perft {depth}: {nodes}")?;
                }
                None => writeln!(out, "error: usage: perft <depth 0..={MAX_PERFT_DEPTH}>")?,
            },
            "divide" => match parse_depth(arg, MAX_PERFT_DEPTH) {
                Some(depth) => {
                    let divided = perft_divide(&mut self.game_state, depth);
                    for (mv, nodes) in &divided {
                        writeln!(out, "{mv}: {nodes}")?;
                    }
                    let total: u64 = divided.iter().map(|(_, nodes)| nodes).sum();
                    writeln!(out, "total: {total}")?;
                }
                None => writeln!(out, "error: usage: divide <depth 0..={MAX_PERFT_DEPTH}>")?,
            },
            "help" => writeln!(out, "{HELP_TEXT}")?,
            "quit" | "exit" => return Ok(true),
            text => {
                if parse_long_algebraic(text).is_err() {
                    writeln!(out, "error: unknown command '{text}' (try 'help')")?;
                    return Ok(false);
                }
                match find_legal_move(&self.game_state, text) {
                    Ok(mv) => {
                        self.play(mv);
                        self.report_status(out)?;
                    }
                    Err(err) => writeln!(out, "error: {err}")?,
                }
            }
        }

        Ok(false)
    }

    fn play(&mut self, mv: Move) {
        let undo = apply_move(&mut self.game_state, mv);
        self.played.push(undo);
    }

    fn run_search(&mut self, depth_arg: Option<&str>) -> ChessResult<SearchResult> {
        let mut config = self.config;
        if let Some(depth) = parse_depth(depth_arg, u8::MAX) {
            config.max_depth = depth;
        }
        search(&mut self.game_state, &self.evaluator, &config)
    }

    fn report_status(&self, out: &mut impl Write) -> io::Result<()> {
        if !legal_moves(&self.game_state).is_empty() {
            return Ok(());
        }
        if is_in_check(&self.game_state) {
            let winner = match self.game_state.side_to_move {
                Color::Light => "black",
                Color::Dark => "white",
            };
            writeln!(out, "checkmate, {winner} wins")
        } else {
            writeln!(out, "stalemate")
        }
    }
}

fn parse_depth(arg: Option<&str>, max: u8) -> Option<u8> {
    arg.and_then(|text| text.parse::<u8>().ok())
        .filter(|&depth| depth <= max)
}

fn write_search_result(out: &mut impl Write, result: &SearchResult) -> io::Result<()> {
    let best = result
        .best_move
        .map_or_else(|| "0000".to_owned(), |mv| mv.to_string());
    let pv = result
        .principal_variation
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(
        out,
        "bestmove {best} score {} depth {} nodes {} time {}ms pv {pv}",
        result.best_score, result.reached_depth, result.nodes, result.elapsed_ms
    )
}

#[cfg(test)]
mod tests {
    use super::CommandLoop;
    use crate::game_state::chess_types::*;
    use crate::search::iterative_deepening::SearchConfig;

    fn run(session: &mut CommandLoop, line: &str) -> String {
        let mut out = Vec::new();
        session
            .handle_command(line, &mut out)
            .expect("writing to a Vec should not fail");
        String::from_utf8(out).expect("output should be UTF-8")
    }

    fn new_session() -> CommandLoop {
        CommandLoop::new(SearchConfig::default(), GameState::new_game())
    }

    #[test]
    fn moves_and_undo_walk_the_stack() {
        let mut session = new_session();
        let start = session.game_state().clone();

        run(&mut session, "e2e4");
        run(&mut session, "e7e5");
        assert_eq!(
            session.game_state().get_fen(),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2"
        );

        assert_eq!(run(&mut session, "undo"), "undid e7e5\n");
        assert_eq!(run(&mut session, "undo"), "undid e2e4\n");
        assert_eq!(session.game_state(), &start);
        assert_eq!(run(&mut session, "undo"), "error: nothing to undo\n");
    }

    #[test]
    fn bad_input_is_reported_not_fatal() {
        let mut session = new_session();
        assert!(run(&mut session, "e2e5").starts_with("error:"));
        assert!(run(&mut session, "dance").contains("unknown command"));
        assert!(run(&mut session, "load 8/8/8 w - - 0 1").starts_with("error:"));
        assert!(run(&mut session, "perft").starts_with("error:"));
        assert!(run(&mut session, "perft 40").starts_with("error: usage"));
        assert!(run(&mut session, "divide x").starts_with("error: usage"));
        assert_eq!(run(&mut session, "search abc"), "error: usage: search [depth]\n");
        assert_eq!(run(&mut session, "go deep"), "error: usage: go [depth]\n");
        assert!(run(&mut session, "search 0").starts_with("error: invalid search configuration"));
        assert_eq!(session.game_state(), &GameState::new_game());
    }

    #[test]
    fn load_and_fen_round_trip() {
        let mut session = new_session();
        let fen = "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1";
        run(&mut session, &format!("load {fen}"));
        assert_eq!(run(&mut session, "fen"), format!("{fen}\n"));
    }

    #[test]
    fn perft_and_divide_report_counts() {
        let mut session = new_session();
        assert_eq!(run(&mut session, "perft 2"), "perft 2: 400\n");
        let divided = run(&mut session, "divide 1");
        assert_eq!(divided.lines().count(), 21);
        assert!(divided.ends_with("total: 20\n"));
    }

    #[test]
    fn go_plays_the_mating_move_and_announces_it() {
        let mut session = new_session();
        run(&mut session, "load k7/7Q/1K6/8/8/8/8/8 w - - 0 1");
        let output = run(&mut session, "go 2");
        assert!(output.contains("played "));
        assert!(output.ends_with("checkmate, white wins\n"));
    }

    #[test]
    fn loading_a_stalemate_announces_it() {
        let mut session = new_session();
        let output = run(&mut session, "load k7/8/KQ6/8/8/8/8/8 b - - 0 1");
        assert!(output.ends_with("stalemate\n"));
    }

    #[test]
    fn quit_ends_the_session() {
        let mut session = new_session();
        let mut out = Vec::new();
        assert!(session.handle_command("quit", &mut out).expect("write should succeed"));
        assert!(session.handle_command("exit", &mut out).expect("write should succeed"));
        assert!(!session.handle_command("  ", &mut out).expect("write should succeed"));
    }
}
