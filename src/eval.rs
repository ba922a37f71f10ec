//! Poker hand classification.
//!
//! The classifier reproduces the reference rules of the original game,
//! quirks included: the flush test compares every card against the suit of
//! the first card in hand order, the straight test is a positional run check
//! over the sorted ranks, and the Ace is low only, so 10-J-Q-K-A is not a
//! straight. A royal flush is a straight flush whose highest rank is the
//! King (ranks 9 through 13).

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, HAND_SIZE, rank_symbol};

/// The ranking assigned to a complete five-card hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ranking {
    /// Straight flush topped by the King (ranks 9-13, one suit).
    RoyalFlush,
    /// Five consecutive ranks of one suit.
    StraightFlush,
    /// Five consecutive ranks, mixed suits.
    Straight,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Five cards of one suit alongside a repeated rank.
    ///
    /// The flush label is assigned from the pair and trips branches only; a
    /// suited hand with five distinct ranks classifies as [`HighCard`]
    /// (reference behavior, kept as-is).
    ///
    /// [`HighCard`]: Ranking::HighCard
    Flush,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Two different pairs.
    TwoPair,
    /// Two cards of the same rank.
    Pair,
    /// No combination; carries the highest rank in the hand.
    HighCard(u8),
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoyalFlush => write!(f, "You have a royal flush"),
            Self::StraightFlush => write!(f, "You have a straight flush"),
            Self::Straight => write!(f, "You have a straight"),
            Self::FourOfAKind => write!(f, "You have four of a kind"),
            Self::FullHouse => write!(f, "You have a full house"),
            Self::Flush => write!(f, "You have a flush"),
            Self::ThreeOfAKind => write!(f, "You have a three of a kind"),
            Self::TwoPair => write!(f, "You have two pair"),
            Self::Pair => write!(f, "You have a pair"),
            Self::HighCard(rank) => write!(f, "Your highest card is {}", rank_symbol(*rank)),
        }
    }
}

/// True iff every card shares the suit of the first card in hand order.
fn is_flush(cards: &[Card]) -> bool {
    let Some(first) = cards.first() else {
        return false;
    };
    cards.iter().all(|card| card.suit == first.suit)
}

/// True iff the sorted ranks form a run: `sorted[0] + i == sorted[i]` at
/// every position. Duplicates break the run, and the Ace only continues a
/// run upward from 1.
fn is_straight(sorted: &[u8]) -> bool {
    sorted
        .iter()
        .enumerate()
        .all(|(i, &value)| usize::from(sorted[0]) + i == usize::from(value))
}

/// Accumulates every repeated rank into one of two buckets: the first bucket
/// takes the first repeated rank encountered, the second takes the next
/// distinct one. Five cards can hold at most two distinct repeated ranks, so
/// the bucket lengths encode pair (2), trips (3) and quads (4).
fn group_repeats(sorted: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let mut bucket1: Vec<u8> = Vec::new();
    let mut bucket2: Vec<u8> = Vec::new();

    for &value in sorted {
        let repeats = sorted.iter().filter(|&&v| v == value).count();
        if repeats > 1 {
            if bucket1.first().is_none_or(|&held| held == value) {
                bucket1.push(value);
            } else if bucket2.first().is_none_or(|&held| held == value) {
                bucket2.push(value);
            }
        }
    }

    (bucket1, bucket2)
}

/// Classifies a complete five-card hand.
///
/// The function is pure and deterministic; callers must pass exactly
/// [`HAND_SIZE`] cards. Reordering the cards can only affect the result by
/// changing which card is first, since the flush test is keyed off the first
/// card's suit.
///
/// # Example
///
/// ```
/// use fivecard::{Card, Ranking, Suit, evaluate};
///
/// let hand: Vec<Card> = (2..=6).map(|rank| Card::new(Suit::Hearts, rank)).collect();
/// assert_eq!(evaluate(&hand), Ranking::StraightFlush);
/// ```
#[must_use]
pub fn evaluate(cards: &[Card]) -> Ranking {
    debug_assert_eq!(
        cards.len(),
        HAND_SIZE,
        "evaluate is defined for five-card hands"
    );

    let mut values: Vec<u8> = cards.iter().map(|card| card.rank).collect();
    values.sort_unstable();

    let flush = is_flush(cards);
    let straight = is_straight(&values);
    let (bucket1, bucket2) = group_repeats(&values);

    if straight {
        if flush {
            if values[values.len() - 1] == 13 {
                Ranking::RoyalFlush
            } else {
                Ranking::StraightFlush
            }
        } else {
            Ranking::Straight
        }
    } else if bucket1.len() == 4 || bucket2.len() == 4 {
        Ranking::FourOfAKind
    } else if bucket1.len() == 3 || bucket2.len() == 3 {
        if bucket1.len() == 2 || bucket2.len() == 2 {
            Ranking::FullHouse
        } else if flush {
            Ranking::Flush
        } else {
            Ranking::ThreeOfAKind
        }
    } else if bucket1.len() == 2 || bucket2.len() == 2 {
        if flush {
            Ranking::Flush
        } else if bucket1.len() == 2 && bucket2.len() == 2 {
            Ranking::TwoPair
        } else {
            Ranking::Pair
        }
    } else {
        Ranking::HighCard(values[values.len() - 1])
    }
}
