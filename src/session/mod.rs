//! Draw session engine and state management.

extern crate alloc;

use alloc::string::String;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::eval::Ranking;
use crate::options::SessionOptions;

mod draw;
mod selection;
pub mod state;

pub use state::SessionState;

/// A single-player draw session.
///
/// The session owns the one mutable slot holding the current
/// [`SessionState`] plus the RNG and options. Operations never mutate the
/// published snapshot in place: each computes a fresh snapshot from the
/// current one and publishes it whole, so a reader observing the state
/// between operations never sees a partial update.
///
/// Use [`SessionOptions`] to configure the exchange policy.
pub struct Session {
    /// Session options.
    pub options: SessionOptions,
    /// Current published snapshot.
    state: SessionState,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Session {
    /// Creates a new session with a full deck and the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use fivecard::{DECK_SIZE, Session, SessionOptions};
    ///
    /// let session = Session::new(SessionOptions::default(), 42);
    /// assert_eq!(session.deck().len(), DECK_SIZE);
    /// assert!(session.hand().is_empty());
    /// ```
    #[must_use]
    pub fn new(options: SessionOptions, seed: u64) -> Self {
        Self::resume(SessionState::new(), options, seed)
    }

    /// Creates a session that continues from an existing snapshot.
    #[must_use]
    pub fn resume(state: SessionState, options: SessionOptions, seed: u64) -> Self {
        Self {
            options,
            state,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the current snapshot.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Returns the cards remaining in the deck.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.state.deck
    }

    /// Returns the currently held hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.state.hand
    }

    /// Returns the selection buffer.
    #[must_use]
    pub fn selection(&self) -> &[Card] {
        &self.state.selection
    }

    /// Returns the ranking of the last complete hand, if any.
    #[must_use]
    pub const fn ranking(&self) -> Option<Ranking> {
        self.state.ranking
    }

    /// Returns the description of the last complete hand, if any.
    #[must_use]
    pub fn description(&self) -> Option<String> {
        self.state.description()
    }

    /// Returns whether the card-picker UI flag is set.
    #[must_use]
    pub const fn selector_open(&self) -> bool {
        self.state.selector_open
    }

    /// Publishes a snapshot as the current state.
    fn publish(&mut self, next: SessionState) -> &SessionState {
        self.state = next;
        &self.state
    }
}
