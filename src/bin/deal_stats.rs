use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use set_engine::engine::{Game, BOARD_SIZE};
use set_engine::logging::init_logging;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Play seeded Set games to the end and report deal statistics", long_about = None)]
struct Args {
    /// Number of games to play
    #[clap(short, long, default_value_t = 20)]
    games: u64,

    /// Seed of the first game; game i uses seed + i (wrapping)
    #[clap(short, long, default_value_t = 0, env = "SET_SEED")]
    seed: u64,

    /// Print one line per game
    #[clap(short, long)]
    verbose: bool,

    /// Print the summary as JSON
    #[clap(long)]
    json: bool,

    /// Log filter (defaults to RUST_LOG, then "warn")
    #[clap(long)]
    log: Option<String>,
}

/// Outcome of one game played by always taking the hinted Set.
#[derive(Debug, Serialize)]
struct GameStats {
    seed: u64,
    sets_found: u32,
    max_board: usize,
    oversized_turns: u32,
    cards_left: usize,
}

#[derive(Debug, Serialize)]
struct Summary {
    games: u64,
    average_sets: f64,
    cleared_games: u64,
    max_board: usize,
    oversized_turn_rate: f64,
}

fn play_out(seed: u64) -> GameStats {
    let mut game = Game::with_seed(seed);
    let mut max_board = game.board().len();
    let mut oversized_turns = 0;
    let mut turns = 0;

    while !game.is_game_over() {
        let Some(set) = game.request_hint() else {
            // Unreachable while the board is kept playable.
            warn!(seed, "Board without a Set outside game over");
            break;
        };
        for card in set {
            if let Err(err) = game.select_card(card.id) {
                warn!(seed, %err, "Hinted card rejected");
            }
        }
        turns += 1;
        max_board = max_board.max(game.board().len());
        if game.board().len() > BOARD_SIZE {
            oversized_turns += 1;
        }
    }

    info!(seed, turns, score = game.score(), "Game finished");
    GameStats {
        seed,
        sets_found: game.score(),
        max_board,
        oversized_turns,
        cards_left: game.board().len(),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log.as_deref());

    let mut results = Vec::new();
    for i in 0..args.games {
        let stats = play_out(args.seed.wrapping_add(i));
        if args.verbose {
            println!(
                "  Seed: {:<6} Sets: {:<3} Max board: {:<3} Oversized turns: {:<3} Cards left: {}",
                stats.seed, stats.sets_found, stats.max_board, stats.oversized_turns, stats.cards_left
            );
        }
        results.push(stats);
    }

    if results.is_empty() {
        println!("No games played.");
        return Ok(());
    }

    let total_sets: u32 = results.iter().map(|s| s.sets_found).sum();
    let total_oversized: u32 = results.iter().map(|s| s.oversized_turns).sum();
    let summary = Summary {
        games: args.games,
        average_sets: total_sets as f64 / results.len() as f64,
        cleared_games: results.iter().filter(|s| s.cards_left == 0).count() as u64,
        max_board: results.iter().map(|s| s.max_board).max().unwrap_or(0),
        oversized_turn_rate: total_oversized as f64 / total_sets.max(1) as f64,
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("Failed to encode summary")?
        );
    } else {
        println!("--- Deal Statistics ---");
        println!("Games played: {}", summary.games);
        println!("Average sets per game: {:.2}", summary.average_sets);
        println!("Games that cleared the deck: {}", summary.cleared_games);
        println!("Largest board seen: {}", summary.max_board);
        println!(
            "Turns on an oversized board: {:.2}%",
            summary.oversized_turn_rate * 100.0
        );
    }

    Ok(())
}
