use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use quint_chess::game_state::chess_types::GameState;
use quint_chess::interface::command_loop::run_stdio_loop;
use quint_chess::move_generation::perft::perft;
use quint_chess::search::iterative_deepening::SearchConfig;

/// Bitboard chess engine with an interactive command loop.
#[derive(Debug, Parser)]
#[command(name = "quint_chess", version)]
struct CliArgs {
    /// Starting position; defaults to the standard initial position.
    #[arg(long)]
    fen: Option<String>,

    /// Maximum iterative-deepening depth for `search` and `go`.
    #[arg(long, default_value_t = 5)]
    depth: u8,

    /// Capture plies searched past the horizon.
    #[arg(long, default_value_t = 8)]
    quiescence_ply: u8,

    /// Stop searching after this many milliseconds.
    #[arg(long)]
    movetime_ms: Option<u64>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Print the perft count to this depth and exit.
    #[arg(long)]
    perft: Option<u8>,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut game_state = match args.fen.as_deref() {
        Some(fen) => match GameState::from_fen(fen) {
            Ok(game_state) => game_state,
            Err(err) => {
                error!(%err, "could not load starting position");
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => GameState::new_game(),
    };

    if let Some(depth) = args.perft {
        println!("{}", perft(&mut game_state, depth));
        return ExitCode::SUCCESS;
    }

    let config = SearchConfig {
        max_depth: args.depth,
        quiescence_max_ply: args.quiescence_ply,
        max_nodes: None,
        movetime_ms: args.movetime_ms,
    };
    if let Err(err) = config.validate() {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    match run_stdio_loop(config, game_state) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "command loop stopped on an I/O error");
            ExitCode::FAILURE
        }
    }
}
