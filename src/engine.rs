//! Game session controller for Set.
//!
//! This module defines the live game state and every player action:
//! - `Phase`: where the session is in its deal/play/resolve cycle.
//! - `Game`: owns the deck, board, selection and score, and enforces the
//!   rule that the board always holds a Set while the deck has cards left.
//! - `GameSnapshot`: a read-only copy of the state handed to a front end
//!   after each action.
//! - `GameEvent`: one-shot notifications delivered to subscribers.
use crate::card::{Card, CardId, DECK_SIZE};
use crate::deck::Deck;
use crate::error::{GameError, GameResult};
use crate::rules::is_valid_set;
use crate::solver::find_set;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};
use tracing::{debug, info, trace};

/// Number of cards laid out at the start of a game.
pub const BOARD_SIZE: usize = 12;

/// Largest board on which the player may still ask for three more cards.
pub const MAX_BOARD_SIZE: usize = 15;

/// Cards dealt at once, and cards in a Set.
pub const DEAL_SIZE: usize = 3;

/// Lifecycle of a game session.
///
/// `Dealing` and `Resolving` only exist while an action is running; between
/// actions a session is always `Playing` or `GameOver`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Cards are being moved from the deck to the board.
    Dealing,
    /// Waiting for the player.
    Playing,
    /// Three cards are selected and being checked.
    Resolving,
    /// The deck is empty and the board holds no Set. Only a new game leaves this state.
    GameOver,
}

/// Notifications pushed to subscribers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// Three selected cards did not form a Set.
    Mismatch,
}

/// Read-only view of a session, returned by every action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Vec<Card>,
    pub selection: Vec<Card>,
    pub score: u32,
    pub deck_remaining: usize,
    pub hint: Option<[Card; 3]>,
    pub phase: Phase,
    pub can_draw_three: bool,
}

impl GameSnapshot {
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Score as shown to players: the number of cards collected.
    pub fn display_score(&self) -> u32 {
        self.score * DEAL_SIZE as u32
    }

    /// Renders the board as a three-column grid with board positions.
    ///
    /// Selected cards are marked with `*` and hinted cards with `?`. With
    /// `ansi` set, cards are printed in their color and marked cards are shown
    /// in reverse video.
    pub fn to_string_with_highlight(&self, ansi: bool) -> String {
        let mut output = String::new();
        for (idx, card) in self.board.iter().enumerate() {
            let selected = self.selection.iter().any(|c| c.id == card.id);
            let hinted = self
                .hint
                .is_some_and(|hint| hint.iter().any(|c| c.id == card.id));
            let marker = if selected {
                '*'
            } else if hinted {
                '?'
            } else {
                ' '
            };
            let code = if ansi {
                card.to_ansi_string(selected || hinted)
            } else {
                card.to_string()
            };
            output.push_str(&format!("{:>2}:{}{}", idx, code, marker));
            if idx % 3 == 2 || idx + 1 == self.board.len() {
                output.push('\n');
            } else {
                output.push_str("  ");
            }
        }
        output.push_str(&format!(
            "Score: {} / {}  Deck: {}",
            self.display_score(),
            DECK_SIZE,
            self.deck_remaining
        ));
        output
    }
}

impl fmt::Display for GameSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with_highlight(true))
    }
}

/// Manages one Set game session.
///
/// A `Game` exclusively owns its deck, board, selection and score. Actions are
/// processed one at a time to completion; callers that share a session across
/// threads must serialize access themselves.
///
/// Every `start_new_game` takes a fresh shuffle from the session's random
/// source, so a seeded session replays the same sequence of games.
///
/// # Examples
/// ```
/// use set_engine::engine::{Game, Phase, BOARD_SIZE};
///
/// let mut game = Game::with_seed(7);
/// let snapshot = game.snapshot();
/// assert!(snapshot.board.len() >= BOARD_SIZE);
/// assert_eq!(snapshot.phase, Phase::Playing);
///
/// // Take the hinted Set.
/// let hint = game.request_hint().unwrap();
/// for card in hint {
///     game.select_card(card.id).unwrap();
/// }
/// assert_eq!(game.score(), 1);
/// ```
#[derive(Debug)]
pub struct Game {
    rng: SmallRng,
    deck: Deck,
    board: Vec<Card>,
    selection: Vec<Card>,
    score: u32,
    hint: Option<[Card; 3]>,
    phase: Phase,
    subscribers: Vec<Sender<GameEvent>>,
}

impl Clone for Game {
    /// Copies the session state. Subscribers stay with the original session.
    fn clone(&self) -> Self {
        Game {
            rng: self.rng.clone(),
            deck: self.deck.clone(),
            board: self.board.clone(),
            selection: self.selection.clone(),
            score: self.score,
            hint: self.hint,
            phase: self.phase,
            subscribers: Vec::new(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Starts a session whose shuffles come from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    /// Starts a reproducible session: the same seed deals the same games.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    /// Starts a session drawing its shuffles from `rng`.
    pub fn with_rng(rng: SmallRng) -> Self {
        let mut game = Self::empty(rng);
        game.start_new_game();
        game
    }

    /// Starts a session whose first game deals `cards` in exactly this order.
    ///
    /// Later calls to `start_new_game` shuffle normally.
    ///
    /// # Errors
    /// * `GameError::IncompleteDeck` if `cards` is not 81 cards long.
    /// * `GameError::InconsistentCard` if a card's id and features disagree.
    /// * `GameError::DuplicateCard` if any card appears twice.
    pub fn from_deal_order(cards: Vec<Card>) -> GameResult<Self> {
        if cards.len() != DECK_SIZE {
            return Err(GameError::IncompleteDeck(cards.len()));
        }
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for card in &cards {
            if Card::from_id(card.id) != Some(*card) {
                return Err(GameError::InconsistentCard(card.id));
            }
            if !seen.insert(card.id) {
                return Err(GameError::DuplicateCard(card.id));
            }
        }

        let mut game = Self::empty(SmallRng::from_entropy());
        game.deal_new_game(Deck::from_cards(cards));
        Ok(game)
    }

    fn empty(rng: SmallRng) -> Self {
        Game {
            rng,
            deck: Deck::default(),
            board: Vec::new(),
            selection: Vec::new(),
            score: 0,
            hint: None,
            phase: Phase::Dealing,
            subscribers: Vec::new(),
        }
    }

    /// Registers a listener for game events.
    ///
    /// Events are sent without waiting for the receiver. Dropping the receiver
    /// unsubscribes it. Subscriptions survive `start_new_game`.
    pub fn subscribe(&mut self) -> Receiver<GameEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Throws away the current game and deals a new one from a fresh shuffle.
    ///
    /// Score, selection and hint are reset, 12 cards are dealt, and more are
    /// added three at a time until the board holds a Set.
    pub fn start_new_game(&mut self) -> GameSnapshot {
        let deck = Deck::shuffled(&mut self.rng);
        self.deal_new_game(deck)
    }

    fn deal_new_game(&mut self, mut deck: Deck) -> GameSnapshot {
        self.set_phase(Phase::Dealing);
        self.score = 0;
        self.selection.clear();
        self.hint = None;
        self.board = deck.draw_up_to(BOARD_SIZE);
        self.deck = deck;
        info!(
            board = self.board.len(),
            deck = self.deck.len(),
            "Started new game"
        );
        self.ensure_playable();
        self.check_accounting();
        self.snapshot()
    }

    /// Toggles `card_id` in the selection.
    ///
    /// - A selected card is deselected.
    /// - Otherwise the card is added if fewer than three cards are selected;
    ///   a fourth card is ignored.
    /// - When the selection reaches three cards it is checked at once. A Set
    ///   scores a point and its cards are replaced; anything else clears the
    ///   selection and sends `GameEvent::Mismatch` to subscribers.
    ///
    /// After game over, selecting a board card changes nothing.
    ///
    /// # Errors
    /// Returns `GameError::CardNotOnBoard` if no board card has this id.
    pub fn select_card(&mut self, card_id: CardId) -> GameResult<GameSnapshot> {
        let card = self
            .board
            .iter()
            .find(|c| c.id == card_id)
            .copied()
            .ok_or(GameError::CardNotOnBoard(card_id))?;

        if self.phase == Phase::GameOver {
            debug!(card = %card, "Ignoring selection after game over");
            return Ok(self.snapshot());
        }

        if let Some(pos) = self.selection.iter().position(|c| c.id == card_id) {
            self.selection.remove(pos);
            trace!(card = %card, "Deselected");
            return Ok(self.snapshot());
        }

        if self.selection.len() >= DEAL_SIZE {
            trace!(card = %card, "Selection full, ignoring");
            return Ok(self.snapshot());
        }

        self.selection.push(card);
        trace!(card = %card, selected = self.selection.len(), "Selected");

        if self.selection.len() == DEAL_SIZE {
            self.resolve_selection();
        }
        self.check_accounting();
        Ok(self.snapshot())
    }

    /// Deals three more cards onto the end of the board.
    ///
    /// Does nothing unless the deck has cards and the board holds fewer than
    /// `MAX_BOARD_SIZE` cards.
    pub fn draw_three(&mut self) -> GameSnapshot {
        if !self.can_draw_three() {
            debug!(
                board = self.board.len(),
                deck = self.deck.len(),
                "Draw three not allowed"
            );
            return self.snapshot();
        }

        self.set_phase(Phase::Dealing);
        self.deal_three();
        self.ensure_playable();
        self.check_accounting();
        self.snapshot()
    }

    /// Looks for a Set on the board and remembers it as the active hint.
    ///
    /// Board, deck, selection and score are left alone. Returns `None` when
    /// the board holds no Set.
    pub fn request_hint(&mut self) -> Option<[Card; 3]> {
        self.hint = find_set(&self.board);
        match &self.hint {
            Some([a, b, c]) => debug!(%a, %b, %c, "Hint"),
            None => debug!("Hint requested but no Set on board"),
        }
        self.hint
    }

    pub fn can_draw_three(&self) -> bool {
        self.phase != Phase::GameOver && !self.deck.is_empty() && self.board.len() < MAX_BOARD_SIZE
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn selection(&self) -> &[Card] {
        &self.selection
    }

    /// Number of Sets found in this game.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.len()
    }

    pub fn hint(&self) -> Option<[Card; 3]> {
        self.hint
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            selection: self.selection.clone(),
            score: self.score,
            deck_remaining: self.deck.len(),
            hint: self.hint,
            phase: self.phase,
            can_draw_three: self.can_draw_three(),
        }
    }

    fn resolve_selection(&mut self) {
        self.set_phase(Phase::Resolving);
        let selected = std::mem::take(&mut self.selection);
        let [a, b, c] = [selected[0], selected[1], selected[2]];

        if is_valid_set(&a, &b, &c) {
            self.score += 1;
            self.hint = None;
            debug!(%a, %b, %c, score = self.score, "Set found");
            self.remove_and_replace(&[a, b, c]);
            self.ensure_playable();
        } else {
            debug!(%a, %b, %c, "Not a Set");
            self.notify(GameEvent::Mismatch);
            self.set_phase(Phase::Playing);
        }
    }

    /// Takes a matched Set off the board.
    ///
    /// On a board of at most `BOARD_SIZE` cards each matched card is replaced
    /// in place from the deck, so the layout does not shift. A larger board, or
    /// an empty deck, just loses the three cards.
    fn remove_and_replace(&mut self, matched: &[Card; 3]) {
        if self.board.len() > BOARD_SIZE || self.deck.is_empty() {
            self.board.retain(|card| !matched.contains(card));
            return;
        }

        for card in matched {
            if let Some(idx) = self.board.iter().position(|c| c.id == card.id) {
                match self.deck.draw() {
                    Some(next) => self.board[idx] = next,
                    None => {
                        self.board.remove(idx);
                    }
                }
            }
        }
    }

    /// Deals until the board holds a Set or the deck runs out.
    ///
    /// Ends in `Playing` when a Set is on the board, otherwise in `GameOver`.
    /// Terminates because every pass shrinks the deck.
    fn ensure_playable(&mut self) {
        loop {
            if find_set(&self.board).is_some() {
                self.set_phase(Phase::Playing);
                return;
            }
            if self.deck.is_empty() {
                info!(
                    score = self.score,
                    board = self.board.len(),
                    "No Set left, game over"
                );
                self.selection.clear();
                self.hint = None;
                self.set_phase(Phase::GameOver);
                return;
            }
            self.set_phase(Phase::Dealing);
            self.deal_three();
        }
    }

    fn deal_three(&mut self) {
        let dealt = self.deck.draw_up_to(DEAL_SIZE);
        debug!(
            dealt = dealt.len(),
            board = self.board.len() + dealt.len(),
            deck = self.deck.len(),
            "Dealt cards"
        );
        self.board.extend(dealt);
    }

    fn notify(&mut self, event: GameEvent) {
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            trace!(from = ?self.phase, to = ?phase, "Phase change");
            self.phase = phase;
        }
    }

    // Every card is in the deck, on the board, or in a matched Set.
    fn check_accounting(&self) {
        debug_assert_eq!(
            self.deck.len() + self.board.len() + DEAL_SIZE * self.score as usize,
            DECK_SIZE,
            "card accounting broken"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::build_full_deck;
    use crate::utils::cards_from_codes;
    use std::sync::mpsc::TryRecvError;

    // Canonical order: the first 12 cards are 1RDe 1RDs 1RDf 1ROe 1ROs 1ROf
    // 1RSe 1RSs 1RSf 1GDe 1GDs 1GDf, and (0, 1, 2) is a Set.
    fn canonical_game() -> Game {
        Game::from_deal_order(build_full_deck()).unwrap()
    }

    fn ids(cards: &[Card]) -> Vec<CardId> {
        cards.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_new_game_deals_twelve() {
        let game = canonical_game();
        assert_eq!(ids(game.board()), (0..12).collect::<Vec<_>>());
        assert_eq!(game.deck_remaining(), DECK_SIZE - BOARD_SIZE);
        assert_eq!(game.score(), 0);
        assert!(game.selection().is_empty());
        assert_eq!(game.hint(), None);
        assert_eq!(game.phase(), Phase::Playing);
    }

    #[test]
    fn test_new_game_deals_more_until_playable() {
        // Lead with 15 set-free cards; the next deal brings in a Set.
        let mut order = cards_from_codes(&[
            "1RDe", "1RDs", "1RSe", "1RSs", "1GDe", "1GDs", "1GSe", "1GSs", "2RDe", "2RDs",
            "2RSe", "2RSs", "2GDe", "2GDs", "2GSe",
        ])
        .unwrap();
        let used: HashSet<CardId> = order.iter().map(|c| c.id).collect();
        order.extend(build_full_deck().into_iter().filter(|c| !used.contains(&c.id)));

        let game = Game::from_deal_order(order).unwrap();
        assert_eq!(game.board().len(), 18);
        assert_eq!(game.deck_remaining(), DECK_SIZE - 18);
        assert!(find_set(game.board()).is_some());
        assert_eq!(game.phase(), Phase::Playing);
    }

    #[test]
    fn test_from_deal_order_validation() {
        let mut short = build_full_deck();
        short.pop();
        assert_eq!(
            Game::from_deal_order(short).unwrap_err(),
            GameError::IncompleteDeck(80)
        );

        let mut dup = build_full_deck();
        dup[80] = dup[0];
        assert_eq!(
            Game::from_deal_order(dup).unwrap_err(),
            GameError::DuplicateCard(0)
        );

        // Every id present once, but all carrying the features of card 0.
        let same_features: Vec<Card> = (0..DECK_SIZE as CardId)
            .map(|id| Card { id, ..build_full_deck()[0] })
            .collect();
        assert_eq!(
            Game::from_deal_order(same_features).unwrap_err(),
            GameError::InconsistentCard(1)
        );
    }

    #[test]
    fn test_clone_does_not_share_subscribers() {
        let mut game = canonical_game();
        let events = game.subscribe();
        let mut copy = game.clone();
        assert_eq!(copy.snapshot(), game.snapshot());

        for id in [0, 1, 3] {
            copy.select_card(id).unwrap();
        }
        assert_eq!(events.try_recv(), Err(TryRecvError::Empty));

        for id in [0, 1, 3] {
            game.select_card(id).unwrap();
        }
        assert_eq!(events.try_recv(), Ok(GameEvent::Mismatch));
    }

    #[test]
    fn test_select_toggles() {
        let mut game = canonical_game();
        let snap = game.select_card(5).unwrap();
        assert_eq!(ids(&snap.selection), vec![5]);
        let snap = game.select_card(5).unwrap();
        assert!(snap.selection.is_empty());
        assert_eq!(snap.score, 0);
    }

    #[test]
    fn test_select_card_not_on_board() {
        let mut game = canonical_game();
        assert_eq!(game.select_card(80), Err(GameError::CardNotOnBoard(80)));
        assert_eq!(game.select_card(200), Err(GameError::CardNotOnBoard(200)));
        assert!(game.selection().is_empty());
    }

    #[test]
    fn test_fourth_selection_ignored() {
        let mut game = canonical_game();
        // Force a full selection without resolving it.
        game.selection = vec![game.board[3], game.board[4], game.board[6]];
        let snap = game.select_card(0).unwrap();
        assert_eq!(ids(&snap.selection), vec![3, 4, 6]);
    }

    #[test]
    fn test_match_replaces_in_place() {
        let mut game = canonical_game();
        game.request_hint();
        game.select_card(0).unwrap();
        game.select_card(1).unwrap();
        let snap = game.select_card(2).unwrap();

        assert_eq!(snap.score, 1);
        assert!(snap.selection.is_empty());
        assert_eq!(snap.hint, None);
        assert_eq!(
            ids(&snap.board),
            vec![12, 13, 14, 3, 4, 5, 6, 7, 8, 9, 10, 11]
        );
        assert_eq!(snap.deck_remaining, DECK_SIZE - 15);
        assert_eq!(snap.phase, Phase::Playing);
    }

    #[test]
    fn test_match_on_large_board_shrinks() {
        let mut game = canonical_game();
        game.draw_three();
        assert_eq!(game.board().len(), 15);

        game.select_card(2).unwrap();
        game.select_card(0).unwrap();
        let snap = game.select_card(1).unwrap();

        assert_eq!(snap.score, 1);
        assert_eq!(ids(&snap.board), (3..15).collect::<Vec<_>>());
        assert_eq!(snap.deck_remaining, DECK_SIZE - 15);
    }

    #[test]
    fn test_match_with_empty_deck_shrinks() {
        let mut game = canonical_game();
        let full = build_full_deck();
        game.board = full[..15].to_vec();
        game.deck = Deck::default();
        game.score = 22;

        game.select_card(0).unwrap();
        game.select_card(1).unwrap();
        let snap = game.select_card(2).unwrap();

        assert_eq!(snap.score, 23);
        assert_eq!(ids(&snap.board), (3..15).collect::<Vec<_>>());
        assert_eq!(snap.phase, Phase::Playing);
    }

    #[test]
    fn test_mismatch_notifies_and_clears() {
        let mut game = canonical_game();
        let events = game.subscribe();
        let before = game.snapshot();

        game.select_card(0).unwrap();
        game.select_card(1).unwrap();
        let snap = game.select_card(3).unwrap();

        assert!(snap.selection.is_empty());
        assert_eq!(snap.score, 0);
        assert_eq!(snap.board, before.board);
        assert_eq!(snap.deck_remaining, before.deck_remaining);
        assert_eq!(events.try_recv(), Ok(GameEvent::Mismatch));
        assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn test_mismatch_keeps_hint() {
        let mut game = canonical_game();
        let hint = game.request_hint();
        game.select_card(0).unwrap();
        game.select_card(1).unwrap();
        game.select_card(3).unwrap();
        assert_eq!(game.hint(), hint);
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let mut game = canonical_game();
        let kept = game.subscribe();
        drop(game.subscribe());

        for id in [0, 1, 3] {
            game.select_card(id).unwrap();
        }
        assert_eq!(game.subscribers.len(), 1);
        assert_eq!(kept.try_recv(), Ok(GameEvent::Mismatch));
    }

    #[test]
    fn test_draw_three_appends() {
        let mut game = canonical_game();
        let snap = game.draw_three();
        assert_eq!(ids(&snap.board), (0..15).collect::<Vec<_>>());
        assert_eq!(snap.deck_remaining, DECK_SIZE - 15);
        assert!(!snap.can_draw_three);

        // Capped at MAX_BOARD_SIZE.
        let again = game.draw_three();
        assert_eq!(again, snap);
    }

    #[test]
    fn test_draw_three_with_empty_deck_is_noop() {
        let mut game = canonical_game();
        game.board = build_full_deck()[..9].to_vec();
        game.deck = Deck::default();
        game.score = 24;

        let before = game.snapshot();
        assert!(!before.can_draw_three);
        assert_eq!(game.draw_three(), before);
    }

    #[test]
    fn test_hint_does_not_mutate() {
        let mut game = canonical_game();
        game.select_card(7).unwrap();
        let before = game.snapshot();

        let hint = game.request_hint().unwrap();
        assert_eq!(ids(&hint), vec![0, 1, 2]);

        let after = game.snapshot();
        assert_eq!(after.hint, Some(hint));
        assert_eq!(after.board, before.board);
        assert_eq!(after.selection, before.selection);
        assert_eq!(after.score, before.score);
        assert_eq!(after.deck_remaining, before.deck_remaining);
    }

    #[test]
    fn test_game_over_when_stuck() {
        let mut game = canonical_game();
        game.board = cards_from_codes(&[
            "1RDe", "1RDs", "1RSe", "1RSs", "1GDe", "1GDs", "1GSe", "1GSs", "2RDe", "2RDs",
            "2RSe", "2RSs", "2GDe", "2GDs", "2GSe",
        ])
        .unwrap();
        game.deck = Deck::default();
        game.score = 22;
        game.ensure_playable();

        assert!(game.is_game_over());
        assert_eq!(game.request_hint(), None);

        let before = game.snapshot();
        assert!(before.is_game_over());
        assert_eq!(game.draw_three(), before);
        let id = game.board()[0].id;
        assert_eq!(game.select_card(id).unwrap(), before);

        let fresh = game.start_new_game();
        assert_eq!(fresh.phase, Phase::Playing);
        assert_eq!(fresh.score, 0);
        assert!(fresh.board.len() >= BOARD_SIZE);
    }

    #[test]
    fn test_seeded_sessions_repeat() {
        let mut a = Game::with_seed(99);
        let mut b = Game::with_seed(99);
        assert_eq!(a.snapshot(), b.snapshot());
        assert_eq!(a.start_new_game(), b.start_new_game());
        assert_ne!(Game::with_seed(1).snapshot().board, Game::with_seed(2).snapshot().board);
    }

    #[test]
    fn test_snapshot_rendering() {
        let mut game = canonical_game();
        game.select_card(4).unwrap();
        game.request_hint();
        let text = game.snapshot().to_string_with_highlight(false);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], " 0:1RDe?   1:1RDs?   2:1RDf?");
        assert!(lines[1].contains(" 4:1ROs*"));
        assert_eq!(lines[4], "Score: 0 / 81  Deck: 69");
    }

    #[test]
    fn test_snapshot_json() {
        let game = canonical_game();
        let json = serde_json::to_string(&game.snapshot()).unwrap();
        assert!(json.contains("\"phase\":\"Playing\""));
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, game.snapshot());
    }
}
