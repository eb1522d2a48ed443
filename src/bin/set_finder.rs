use anyhow::Context;
use clap::Parser;
use set_engine::card::Card;
use set_engine::logging::init_logging;
use set_engine::solver::{find_all_sets, find_set};
use set_engine::utils::cards_from_text;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[clap(author, version, about = "List the Sets on a board of card codes", long_about = None)]
struct Args {
    /// List every Set instead of only the first one
    #[clap(short, long)]
    all: bool,

    /// Log filter (defaults to RUST_LOG, then "warn")
    #[clap(long)]
    log: Option<String>,

    /// Path to the board file: card codes such as "2GOs" separated by
    /// whitespace or commas
    board_file: PathBuf,
}

fn read_board_file(path: &PathBuf) -> anyhow::Result<Vec<Card>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let board = cards_from_text(&content).context("Invalid board format")?;
    if board.len() < 3 {
        anyhow::bail!("Expected at least 3 cards in board file, found {}", board.len());
    }
    Ok(board)
}

fn format_set(set: &[Card; 3]) -> String {
    set.iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log.as_deref());

    let board = read_board_file(&args.board_file)?;
    info!(cards = board.len(), "Loaded board");
    println!(
        "Loaded {} cards from {}\n",
        board.len(),
        args.board_file.display()
    );

    if args.all {
        let sets = find_all_sets(&board);
        println!("Sets found: {}", sets.len());
        for (i, set) in sets.iter().enumerate() {
            println!("  Set {}: {}", i + 1, format_set(set));
        }
    } else {
        match find_set(&board) {
            Some(set) => println!("First set: {}", format_set(&set)),
            None => println!("No set found."),
        }
    }

    Ok(())
}
