//! Deck generation and the undealt pile.
//!
//! `build_full_deck` enumerates the canonical 81 cards in a fixed order, and
//! `shuffled_deck` / `shuffled_deck_with_seed` permute it with a caller
//! supplied random source. The `Deck` type is the draw pile owned by a game
//! session: cards only ever leave it from the front.
use crate::card::{Card, Color, Number, Shading, Shape, DECK_SIZE};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Builds the canonical, unshuffled 81-card deck.
///
/// Cards are enumerated number-major, then color, then shape, with shading
/// varying fastest, and receive sequential ids `0..=80` in that order.
///
/// # Examples
/// ```
/// use set_engine::deck::build_full_deck;
///
/// let deck = build_full_deck();
/// assert_eq!(deck.len(), 81);
/// assert!(deck.iter().enumerate().all(|(i, c)| c.id as usize == i));
/// ```
pub fn build_full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for number in Number::ALL {
        for color in Color::ALL {
            for shape in Shape::ALL {
                for shading in Shading::ALL {
                    cards.push(Card::new(number, color, shape, shading));
                }
            }
        }
    }
    cards
}

/// Returns a uniformly random permutation of the full deck drawn from `rng`.
pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut cards = build_full_deck();
    cards.shuffle(rng);
    cards
}

/// Returns a shuffled full deck that is reproducible for a given `seed`.
pub fn shuffled_deck_with_seed(seed: u64) -> Vec<Card> {
    let mut rng = SmallRng::seed_from_u64(seed);
    shuffled_deck(&mut rng)
}

/// The ordered pile of undealt cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates a freshly shuffled full deck.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Deck::from_cards(shuffled_deck(rng))
    }

    /// Creates a deck that deals `cards` in the given order.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck {
            cards: cards.into(),
        }
    }

    /// Removes and returns the front card, if any.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Removes up to `n` cards from the front, in deal order.
    ///
    /// Returns fewer than `n` cards (possibly none) when the deck runs out.
    pub fn draw_up_to(&mut self, n: usize) -> Vec<Card> {
        let take = n.min(self.cards.len());
        self.cards.drain(..take).collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the remaining cards in deal order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
