//! Card types and deck utilities.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    ///
    /// The Ace is low only; there is no rank 14.
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but may yield non-standard results when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the display symbol for this card's rank.
    #[must_use]
    pub fn rank_symbol(&self) -> String {
        rank_symbol(self.rank)
    }
}

/// Returns the display symbol for a rank: `k`, `q`, `j`, `t` for the face
/// cards and ten, the decimal numeral otherwise.
#[must_use]
pub fn rank_symbol(rank: u8) -> String {
    match rank {
        13 => String::from("k"),
        12 => String::from("q"),
        11 => String::from("j"),
        10 => String::from("t"),
        _ => rank.to_string(),
    }
}

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Number of cards in a complete hand.
pub const HAND_SIZE: usize = 5;

/// Returns the full 52-card deck in suit-major order: Hearts 1..=13,
/// Diamonds 1..=13, Spades 1..=13, Clubs 1..=13.
///
/// # Example
///
/// ```
/// use fivecard::{DECK_SIZE, Suit, standard_deck};
///
/// let deck = standard_deck();
/// assert_eq!(deck.len(), DECK_SIZE);
/// assert_eq!(deck[0], fivecard::Card::new(Suit::Hearts, 1));
/// ```
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs] {
        for rank in 1..=13 {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}
