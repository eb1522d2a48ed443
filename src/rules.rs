//! The Set rule.
//!
//! Three cards form a Set when, for each of the four features on its own,
//! the three values are either all equal or all different.
use crate::card::{Card, Color, Number, Shading, Shape};

/// Returns `true` if three feature values are all equal or pairwise distinct.
///
/// Exactly two equal values is the only failing case.
pub fn features_agree<T: PartialEq>(a: T, b: T, c: T) -> bool {
    let all_same = a == b && b == c;
    let all_different = a != b && a != c && b != c;
    all_same || all_different
}

/// Checks whether three cards form a valid Set.
///
/// The check is symmetric in its arguments. Passing the same card twice
/// (by id) is a caller error and always yields `false`.
///
/// # Examples
/// ```
/// use set_engine::rules::is_valid_set;
/// use set_engine::card::Card;
///
/// let a: Card = "1RDf".parse().unwrap();
/// let b: Card = "2GOs".parse().unwrap();
/// let c: Card = "3PSe".parse().unwrap();
/// assert!(is_valid_set(&a, &b, &c));
///
/// let d: Card = "1RDe".parse().unwrap();
/// assert!(!is_valid_set(&a, &b, &d));
/// ```
pub fn is_valid_set(a: &Card, b: &Card, c: &Card) -> bool {
    if a.id == b.id || a.id == c.id || b.id == c.id {
        return false;
    }
    features_agree(a.number, b.number, c.number)
        && features_agree(a.color, b.color, c.color)
        && features_agree(a.shape, b.shape, c.shape)
        && features_agree(a.shading, b.shading, c.shading)
}

/// Returns the unique card that completes a Set with `a` and `b`.
///
/// For each feature the result keeps the shared value when `a` and `b` agree,
/// and takes the remaining third value when they differ. If `a` and `b` are
/// the same card the result is that card again, which `is_valid_set` rejects.
pub fn third_card(a: &Card, b: &Card) -> Card {
    let third = |i: u8, j: u8| (6 - i - j) % 3;
    let [an, ac, ash, asd] = a.feature_indices();
    let [bn, bc, bsh, bsd] = b.feature_indices();

    // from_index cannot fail for values in 0..3
    Card::new(
        Number::from_index(third(an, bn)).unwrap_or(a.number),
        Color::from_index(third(ac, bc)).unwrap_or(a.color),
        Shape::from_index(third(ash, bsh)).unwrap_or(a.shape),
        Shading::from_index(third(asd, bsd)).unwrap_or(a.shading),
    )
}
