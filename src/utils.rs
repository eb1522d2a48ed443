use crate::card::Card;
use crate::error::{GameError, GameResult};
use std::collections::HashSet;

/// Parses a single 4-character card code such as `"2GOs"`.
///
/// Leading and trailing whitespace is ignored.
pub fn card_from_code(code: &str) -> GameResult<Card> {
    code.trim().parse()
}

/// Parses a list of card codes into a board, in the given order.
///
/// Codes use the characters:
/// - number: `1`, `2`, `3`
/// - color: `R` (red), `G` (green), `P` (purple)
/// - shape: `D` (diamond), `O` (oval), `S` (squiggle)
/// - shading: `e` (open), `s` (striped), `f` (solid)
///
/// # Returns
/// * `Ok(Vec<Card>)` with canonical ids assigned.
/// * `Err(GameError::InvalidCardCode)` for the first malformed code.
/// * `Err(GameError::DuplicateCard)` if the same card is listed twice, since a
///   board never holds two copies of a card.
///
/// # Examples
/// ```
/// use set_engine::utils::cards_from_codes;
///
/// let board = cards_from_codes(&["1RDe", "3PSf"]).unwrap();
/// assert_eq!(board[0].id, 0);
/// assert_eq!(board[1].id, 80);
///
/// assert!(cards_from_codes(&["1RDe", "1RDe"]).is_err());
/// assert!(cards_from_codes(&["1XDe"]).is_err());
/// ```
pub fn cards_from_codes(codes: &[&str]) -> GameResult<Vec<Card>> {
    let mut seen = HashSet::with_capacity(codes.len());
    let mut cards = Vec::with_capacity(codes.len());
    for code in codes {
        let card = card_from_code(code)?;
        if !seen.insert(card.id) {
            return Err(GameError::DuplicateCard(card.id));
        }
        cards.push(card);
    }
    Ok(cards)
}

/// Splits free-form text into card codes and parses them as a board.
///
/// Codes may be separated by any whitespace or commas, so a board file can
/// list one row of cards per line.
pub fn cards_from_text(text: &str) -> GameResult<Vec<Card>> {
    let codes: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();
    cards_from_codes(&codes)
}
