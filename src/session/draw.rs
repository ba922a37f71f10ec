//! Hand replacement operations: random draw and cheat exchange.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, HAND_SIZE};
use crate::error::{DrawError, ExchangeError};
use crate::eval::evaluate;

use super::{Session, SessionState};

impl Session {
    /// Replaces the hand with five cards drawn uniformly at random.
    ///
    /// The held cards are returned to the deck first; each draw step then
    /// picks a uniformly random index among the remaining deck cards, removes
    /// that card and appends it to the hand. The new hand is evaluated and
    /// its ranking stored in the published snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than five cards remain after the return
    /// step. This cannot happen for a session started from a full deck.
    pub fn draw_random_hand(&mut self) -> Result<&SessionState, DrawError> {
        let mut next = self.state.clone();
        next.deck.append(&mut next.hand);

        if next.deck.len() < HAND_SIZE {
            return Err(DrawError::NotEnoughCards);
        }

        for _ in 0..HAND_SIZE {
            let index = self.rng.random_range(0..next.deck.len());
            let card = next.deck.remove(index);
            next.hand.push(card);
        }

        next.ranking = Some(evaluate(&next.hand));
        Ok(self.publish(next))
    }

    /// Replaces the hand with the requested cards, in request order.
    ///
    /// The held cards are returned to the deck first; each requested card is
    /// then matched against the deck by suit and rank and moved into the
    /// hand. A request for a card that is not in the deck (for instance a
    /// duplicate request) is silently skipped by default, so the resulting
    /// hand may hold fewer than five cards. The ranking is recomputed only
    /// when the new hand is complete and cleared otherwise.
    ///
    /// # Errors
    ///
    /// With [`SessionOptions::strict_exchange`](crate::SessionOptions), an
    /// unavailable request aborts the whole exchange and no snapshot is
    /// published.
    pub fn exchange_hand(&mut self, requested: &[Card]) -> Result<&SessionState, ExchangeError> {
        let mut next = self.state.clone();
        next.deck.append(&mut next.hand);

        for &request in requested {
            match next.deck.iter().position(|&card| card == request) {
                Some(index) => {
                    let card = next.deck.remove(index);
                    next.hand.push(card);
                }
                None if self.options.strict_exchange => {
                    return Err(ExchangeError::CardUnavailable(request));
                }
                // Permissive policy: the request is dropped.
                None => {}
            }
        }

        next.ranking = (next.hand.len() == HAND_SIZE).then(|| evaluate(&next.hand));
        Ok(self.publish(next))
    }

    /// Commits the selection buffer as a cheat hand and clears the buffer.
    ///
    /// Equivalent to [`exchange_hand`](Self::exchange_hand) with the current
    /// selection followed by clearing it.
    ///
    /// # Errors
    ///
    /// In strict mode an unavailable selected card aborts the exchange; the
    /// selection buffer is left untouched so the caller can amend it.
    pub fn commit_selection(&mut self) -> Result<&SessionState, ExchangeError> {
        let requested: Vec<Card> = self.state.selection.clone();
        self.exchange_hand(&requested)?;

        let mut next = self.state.clone();
        next.selection.clear();
        Ok(self.publish(next))
    }
}
