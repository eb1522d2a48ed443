//! Card model for the Set game.
//!
//! A card is an immutable value carrying a stable id plus four independent
//! features, each of which takes one of three values:
//! - `Number`: One, Two, Three
//! - `Color`: Red, Green, Purple
//! - `Shape`: Diamond, Oval, Squiggle
//! - `Shading`: Open, Striped, Solid
//!
//! The id of a card is derived from its features (see [`Card::canonical_id`]),
//! so the same id always names the same card in every deck.
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a card within the canonical 81-card deck (`0..=80`).
pub type CardId = u8;

/// Number of distinct cards in a full deck (3^4).
pub const DECK_SIZE: usize = 81;

/// Number of symbols printed on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Number {
    One,
    Two,
    Three,
}

/// Ink color of the symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Purple,
}

/// Symbol shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shape {
    Diamond,
    Oval,
    Squiggle,
}

/// Fill of the symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shading {
    Open,
    Striped,
    Solid,
}

// Shared index/char plumbing for the four feature enums. Each feature has
// exactly three values in declaration order, and a single code character.
macro_rules! feature_enum {
    ($ty:ident { $($variant:ident => $ch:literal),+ $(,)? }) => {
        impl $ty {
            /// All values of this feature in declaration order.
            pub const ALL: [$ty; 3] = [$($ty::$variant),+];

            /// Position of this value within [`Self::ALL`].
            pub fn index(self) -> u8 {
                self as u8
            }

            /// Inverse of [`Self::index`]. Returns `None` for indices above 2.
            pub fn from_index(index: u8) -> Option<Self> {
                Self::ALL.get(index as usize).copied()
            }

            /// Character used for this value in a compact card code.
            pub fn to_char(self) -> char {
                match self {
                    $($ty::$variant => $ch),+
                }
            }

            fn from_char(ch: char) -> Option<Self> {
                match ch {
                    $($ch => Some($ty::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

feature_enum!(Number { One => '1', Two => '2', Three => '3' });
feature_enum!(Color { Red => 'R', Green => 'G', Purple => 'P' });
feature_enum!(Shape { Diamond => 'D', Oval => 'O', Squiggle => 'S' });
feature_enum!(Shading { Open => 'e', Striped => 's', Solid => 'f' });

impl Color {
    /// Returns the ANSI foreground color code used for terminal output.
    fn to_ansi_color_code(self) -> &'static str {
        match self {
            Color::Red => "31",
            Color::Green => "32",
            Color::Purple => "35",
        }
    }
}

/// A single Set card.
///
/// Equality compares the id and all four features. Within a deck ids are
/// unique, so comparing ids alone gives the same answer.
///
/// # Examples
/// ```
/// use set_engine::card::{Card, Color, Number, Shading, Shape};
///
/// let card: Card = "2GOs".parse().unwrap();
/// assert_eq!(card.number, Number::Two);
/// assert_eq!(card.color, Color::Green);
/// assert_eq!(card.shape, Shape::Oval);
/// assert_eq!(card.shading, Shading::Striped);
/// assert_eq!(Card::from_id(card.id), Some(card));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub number: Number,
    pub color: Color,
    pub shape: Shape,
    pub shading: Shading,
}

impl Card {
    /// Builds the card with the given features, assigning its canonical id.
    pub fn new(number: Number, color: Color, shape: Shape, shading: Shading) -> Self {
        Card {
            id: Self::canonical_id(number, color, shape, shading),
            number,
            color,
            shape,
            shading,
        }
    }

    /// Computes the id a card with these features has in the canonical deck.
    ///
    /// The deck enumerates number, then color, then shape, then shading, with
    /// shading varying fastest, so the id is the base-3 number
    /// `number color shape shading`.
    pub fn canonical_id(number: Number, color: Color, shape: Shape, shading: Shading) -> CardId {
        number.index() * 27 + color.index() * 9 + shape.index() * 3 + shading.index()
    }

    /// Returns the canonical card with the given id, or `None` if `id >= 81`.
    pub fn from_id(id: CardId) -> Option<Self> {
        if usize::from(id) >= DECK_SIZE {
            return None;
        }
        Some(Card {
            id,
            number: Number::from_index(id / 27)?,
            color: Color::from_index(id / 9 % 3)?,
            shape: Shape::from_index(id / 3 % 3)?,
            shading: Shading::from_index(id % 3)?,
        })
    }

    /// Feature indices in the fixed order number, color, shape, shading.
    pub fn feature_indices(&self) -> [u8; 4] {
        [
            self.number.index(),
            self.color.index(),
            self.shape.index(),
            self.shading.index(),
        ]
    }

    /// Renders the card code wrapped in ANSI escapes for its color.
    ///
    /// When `highlight` is set the code is shown in reverse video, which the
    /// terminal front end uses for selected and hinted cards.
    pub fn to_ansi_string(&self, highlight: bool) -> String {
        let style = if highlight { "7;" } else { "" };
        format!(
            "\x1b[1;{}{}m{}\x1b[m",
            style,
            self.color.to_ansi_color_code(),
            self
        )
    }
}

impl fmt::Display for Card {
    /// Formats the card as its 4-character code, e.g. `1RDe`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.number.to_char(),
            self.color.to_char(),
            self.shape.to_char(),
            self.shading.to_char()
        )
    }
}

impl FromStr for Card {
    type Err = GameError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| GameError::InvalidCardCode {
            code: code.to_string(),
            reason,
        };

        let chars: Vec<char> = code.chars().collect();
        if chars.len() != 4 {
            return Err(invalid(format!(
                "expected 4 characters, found {}",
                chars.len()
            )));
        }

        let number = Number::from_char(chars[0])
            .ok_or_else(|| invalid(format!("unrecognized number '{}'", chars[0])))?;
        let color = Color::from_char(chars[1])
            .ok_or_else(|| invalid(format!("unrecognized color '{}'", chars[1])))?;
        let shape = Shape::from_char(chars[2])
            .ok_or_else(|| invalid(format!("unrecognized shape '{}'", chars[2])))?;
        let shading = Shading::from_char(chars[3])
            .ok_or_else(|| invalid(format!("unrecognized shading '{}'", chars[3])))?;

        Ok(Card::new(number, color, shape, shading))
    }
}
