use crate::card::Card;
use crate::rules::is_valid_set;

/// Finds the first Set on `board`.
///
/// Triples are scanned by increasing index `i < j < k`, and the first one that
/// passes [`is_valid_set`] is returned in board order. Returns `None` when no
/// triple qualifies, including boards with fewer than three cards.
///
/// The search is cubic in the board size, which stays small (at most a few
/// deals past the 12-card layout).
///
/// # Examples
/// ```
/// use set_engine::solver::find_set;
/// use set_engine::utils::cards_from_codes;
///
/// let board = cards_from_codes(&["1RDe", "2RDe", "1GOs", "3RDe"]).unwrap();
/// let found = find_set(&board).unwrap();
/// assert_eq!(found.map(|c| c.to_string()), ["1RDe", "2RDe", "3RDe"]);
/// ```
pub fn find_set(board: &[Card]) -> Option<[Card; 3]> {
    let n = board.len();
    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                if is_valid_set(&board[i], &board[j], &board[k]) {
                    return Some([board[i], board[j], board[k]]);
                }
            }
        }
    }
    None
}

/// Returns every Set on `board`, in the same order [`find_set`] visits them.
pub fn find_all_sets(board: &[Card]) -> Vec<[Card; 3]> {
    let mut sets = Vec::new();
    let n = board.len();
    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                if is_valid_set(&board[i], &board[j], &board[k]) {
                    sets.push([board[i], board[j], board[k]]);
                }
            }
        }
    }
    sets
}

/// A board is playable when it contains at least one Set.
pub fn is_playable(board: &[Card]) -> bool {
    find_set(board).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{build_full_deck, shuffled_deck_with_seed};
    use crate::rules::third_card;
    use crate::utils::cards_from_codes;

    // Only two values per feature: any two distinct cards differ somewhere,
    // and a third card can never make that feature all-different.
    const TWO_VALUE_BOARD: [&str; 16] = [
        "1RDe", "1RDs", "1RSe", "1RSs", "1GDe", "1GDs", "1GSe", "1GSs", "2RDe", "2RDs",
        "2RSe", "2RSs", "2GDe", "2GDs", "2GSe", "2GSs",
    ];

    #[test]
    fn test_find_set_small_boards() {
        assert_eq!(find_set(&[]), None);
        let two = cards_from_codes(&["1RDe", "2RDe"]).unwrap();
        assert_eq!(find_set(&two), None);
    }

    #[test]
    fn test_find_set_returns_first_in_index_order() {
        // Sets: (0,1,2) and (3,4,5); the first must win.
        let board =
            cards_from_codes(&["1RDe", "2RDe", "3RDe", "1GOs", "2GOs", "3GOs"]).unwrap();
        let found = find_set(&board).unwrap();
        assert_eq!(found, [board[0], board[1], board[2]]);

        // Move the first set to the back; now (0,1,2) of the new order wins.
        let board =
            cards_from_codes(&["1GOs", "2GOs", "3GOs", "1RDe", "2RDe", "3RDe"]).unwrap();
        let found = find_set(&board).unwrap();
        assert_eq!(found, [board[0], board[1], board[2]]);
    }

    #[test]
    fn test_find_set_on_set_free_board() {
        let board = cards_from_codes(&TWO_VALUE_BOARD).unwrap();
        assert_eq!(find_set(&board), None);
        assert!(find_all_sets(&board).is_empty());
        assert!(!is_playable(&board));
    }

    #[test]
    fn test_find_set_result_is_valid_on_random_boards() {
        for seed in 0..50 {
            let deck = shuffled_deck_with_seed(seed);
            let board = &deck[..12];
            if let Some([a, b, c]) = find_set(board) {
                assert!(is_valid_set(&a, &b, &c));
                assert!(board.contains(&a) && board.contains(&b) && board.contains(&c));
            } else {
                assert!(find_all_sets(board).is_empty());
            }
        }
    }

    #[test]
    fn test_find_all_sets_matches_pair_completion_count() {
        let board = &shuffled_deck_with_seed(3)[..15];
        let all = find_all_sets(board);
        for set in &all {
            assert!(is_valid_set(&set[0], &set[1], &set[2]));
        }

        // Every Set is counted once per pair it contains.
        let mut completions = 0;
        for (i, a) in board.iter().enumerate() {
            for b in &board[i + 1..] {
                if board.contains(&third_card(a, b)) {
                    completions += 1;
                }
            }
        }
        assert_eq!(completions, all.len() * 3);
        assert_eq!(all.first().copied(), find_set(board));
    }

    #[test]
    fn test_full_deck_set_count() {
        // 81 * 80 / 6 distinct Sets exist in the full deck.
        assert_eq!(find_all_sets(&build_full_deck()).len(), 1080);
    }
}
