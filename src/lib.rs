//! # Set Engine Library
//!
//! This library provides the rules and session logic for the Set card game:
//! building and shuffling the 81-card deck, checking whether three cards form
//! a Set, searching a board for Sets, and running a game session that keeps
//! the board playable while cards remain.
//!
//! It is used by three binaries:
//! - `human_player`: Play a game interactively from the command line.
//! - `set_finder`: Read a board of card codes from a file and list its Sets.
//! - `deal_stats`: Play seeded games to completion and report how often the
//!   board has to grow and how games end.
//!
//! ## Modules
//! - `card`: The `Card` value type and its four feature enums.
//! - `deck`: Canonical deck enumeration, shuffling, and the `Deck` draw pile.
//! - `rules`: The Set predicate (`is_valid_set`) and `third_card`.
//! - `solver`: `find_set`, `find_all_sets` and `is_playable` over a board.
//! - `engine`: The `Game` session controller, its `Phase`, snapshots and events.
//! - `error`: `GameError` and the `GameResult` alias.
//! - `utils`: Parsing boards from card codes.
//! - `logging`: `tracing-subscriber` setup for the binaries and tests.

pub mod card;
pub mod deck;
pub mod engine;
pub mod error;
pub mod logging;
pub mod rules;
pub mod solver;
pub mod utils;

pub use crate::card::{Card, CardId};
pub use crate::engine::{Game, GameEvent, GameSnapshot, Phase};
pub use crate::error::{GameError, GameResult};
