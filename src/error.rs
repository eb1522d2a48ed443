//! Error types for the Set engine.
//!
//! The engine itself performs no I/O. The only failures are caller contract
//! violations (acting on a card that is not on the board) and malformed card
//! codes coming from text input.

use crate::card::CardId;
use thiserror::Error;

/// Result type for engine operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while driving a game or parsing cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The card is not part of the current board.
    #[error("Card {0} is not on the board")]
    CardNotOnBoard(CardId),

    /// A card code could not be parsed.
    #[error("Invalid card code '{code}': {reason}")]
    InvalidCardCode { code: String, reason: String },

    /// The same card appears more than once where cards must be distinct.
    #[error("Duplicate card {0}")]
    DuplicateCard(CardId),

    /// A card's id does not match its features.
    #[error("Card {0} does not carry the features of its id")]
    InconsistentCard(CardId),

    /// A deal order does not contain the full deck.
    #[error("Deal order must hold all 81 cards, found {0}")]
    IncompleteDeck(usize),
}
