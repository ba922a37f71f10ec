//! Session state snapshots.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, standard_deck};
use crate::eval::Ranking;

/// An immutable snapshot of a draw session.
///
/// A snapshot aggregates the remaining deck, the held hand, the selection
/// buffer used while assembling a cheat hand, the ranking of the last
/// complete hand, and the card-picker visibility flag for a presentation
/// layer. Snapshots are replaced whole by [`Session`](super::Session)
/// operations and never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Cards remaining in the deck, in draw order.
    pub deck: Vec<Card>,
    /// Cards currently held (empty, or five after a completed random draw).
    pub hand: Vec<Card>,
    /// Cards picked for the next cheat hand (at most five, no duplicates).
    pub selection: Vec<Card>,
    /// Ranking of the last complete hand, if any.
    pub ranking: Option<Ranking>,
    /// Whether the card-picker UI is open. Boundary flag only; no session
    /// operation reads it.
    pub selector_open: bool,
}

impl SessionState {
    /// Creates the initial snapshot: a full deck in suit-major order, no
    /// hand, no selection, no ranking.
    #[must_use]
    pub fn new() -> Self {
        Self {
            deck: standard_deck(),
            hand: Vec::new(),
            selection: Vec::new(),
            ranking: None,
            selector_open: false,
        }
    }

    /// Returns the description of the last complete hand, if any.
    ///
    /// This is the [`Ranking`] display text, e.g. "You have two pair".
    #[must_use]
    pub fn description(&self) -> Option<String> {
        self.ranking.map(|ranking| ranking.to_string())
    }

    /// True iff the deck and hand together hold each of the 52 cards exactly
    /// once.
    ///
    /// This holds for every snapshot published by a session started from
    /// [`SessionState::new`]; a session resumed from a hand-built snapshot
    /// is only as consistent as that snapshot.
    #[must_use]
    pub fn covers_full_deck(&self) -> bool {
        if self.deck.len() + self.hand.len() != DECK_SIZE {
            return false;
        }

        standard_deck().iter().all(|card| {
            self.deck
                .iter()
                .chain(self.hand.iter())
                .filter(|&held| held == card)
                .count()
                == 1
        })
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
