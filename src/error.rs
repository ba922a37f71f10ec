//! Error types for session operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when drawing a random hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Fewer than five cards remain after returning the hand to the deck.
    ///
    /// This cannot happen while the deck/hand disjointness invariant holds;
    /// seeing it means a snapshot was corrupted elsewhere.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur when exchanging the hand for specific cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExchangeError {
    /// A requested card is not in the deck (strict mode only).
    #[error("requested card is not available in the deck")]
    CardUnavailable(Card),
}
