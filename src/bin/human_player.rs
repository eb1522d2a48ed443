use anyhow::Context;
use clap::Parser;
use set_engine::engine::{Game, GameEvent, GameSnapshot};
use set_engine::logging::init_logging;
use set_engine::solver::find_all_sets;
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Play Set in the terminal", long_about = None)]
struct Args {
    /// Seed for reproducible deals; a random seed is used when omitted
    #[clap(short, long, env = "SET_SEED")]
    seed: Option<u64>,

    /// Log filter, e.g. "debug" or "set_engine=trace" (defaults to RUST_LOG, then "warn")
    #[clap(long)]
    log: Option<String>,

    /// Print each board as a JSON snapshot instead of a grid
    #[clap(long)]
    json: bool,

    /// Disable ANSI colors
    #[clap(long)]
    no_color: bool,
}

const HELP: &str = "Commands: <pos> [pos ...] select/deselect cards by board position, \
'd' draw three, 'h' hint, 'a' show all sets, 'n' new game, 'q' quit";

fn print_state(args: &Args, snapshot: &GameSnapshot) -> anyhow::Result<()> {
    println!("---------------------");
    if args.json {
        println!("{}", serde_json::to_string(snapshot).context("Failed to encode snapshot")?);
    } else {
        println!("{}", snapshot.to_string_with_highlight(!args.no_color));
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log.as_deref());

    let mut game = match args.seed {
        Some(seed) => Game::with_seed(seed),
        None => Game::new(),
    };
    let events = game.subscribe();

    println!("Welcome to Set!");
    println!("{}", HELP);
    let mut snapshot = game.snapshot();
    print_state(&args, &snapshot)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if snapshot.is_game_over() {
            println!();
            println!("---------------------");
            println!("GAME OVER! No more sets available.");
            println!("Final Score: {} / 81", snapshot.display_score());
            println!("---------------------");
            print!("Enter 'n' for a new game or 'q' to quit: ");
        } else {
            print!("Enter your move: ");
        }
        io::stdout().flush()?;

        let input = match lines.next() {
            Some(line) => line.context("Failed to read input")?,
            None => {
                println!();
                println!("Thanks for playing!");
                break;
            }
        };

        match input.trim() {
            "q" => {
                println!("Thanks for playing!");
                break;
            }
            "n" => {
                snapshot = game.start_new_game();
                println!("New game started.");
            }
            "d" => {
                if game.can_draw_three() {
                    snapshot = game.draw_three();
                    println!("Dealt three more cards.");
                } else {
                    println!("Cannot draw: the deck is empty or the board is full.");
                    continue;
                }
            }
            "h" => match game.request_hint() {
                Some(set) => {
                    let codes: Vec<String> = set.iter().map(|c| c.to_string()).collect();
                    println!("Hint: {}", codes.join(" "));
                    snapshot = game.snapshot();
                }
                None => {
                    println!("No set on the board.");
                    continue;
                }
            },
            "a" => {
                let sets = find_all_sets(game.board());
                println!("{} set(s) on the board:", sets.len());
                for set in sets {
                    let codes: Vec<String> = set.iter().map(|c| c.to_string()).collect();
                    println!("  {}", codes.join(" "));
                }
                continue;
            }
            "" => continue,
            other => {
                let positions: Result<Vec<usize>, _> =
                    other.split_whitespace().map(str::parse::<usize>).collect();
                let Ok(positions) = positions else {
                    println!("Invalid input. {}", HELP);
                    continue;
                };

                // Resolve positions against the board before selecting, since a
                // completed Set reshuffles positions.
                let board = game.board().to_vec();
                let mut picked = Vec::with_capacity(positions.len());
                for pos in positions {
                    match board.get(pos) {
                        Some(card) => picked.push(card.id),
                        None => {
                            println!(
                                "Invalid position {}: the board has positions 0 to {}.",
                                pos,
                                board.len().saturating_sub(1)
                            );
                            picked.clear();
                            break;
                        }
                    }
                }
                if picked.is_empty() {
                    continue;
                }

                let score_before = game.score();
                for id in picked {
                    match game.select_card(id) {
                        Ok(next) => snapshot = next,
                        // A card may have left the board when an earlier pick
                        // completed a Set.
                        Err(err) => println!("{}", err),
                    }
                }
                if game.score() > score_before {
                    println!("Set! Score: {}", snapshot.display_score());
                }
            }
        }

        for event in events.try_iter() {
            match event {
                GameEvent::Mismatch => println!("Not a set!"),
            }
        }
        print_state(&args, &snapshot)?;
    }

    Ok(())
}
