//! Selection buffer operations for assembling a cheat hand.

use crate::card::{Card, HAND_SIZE};

use super::Session;

impl Session {
    /// Adds a card to the selection buffer.
    ///
    /// A card already in the buffer (by suit and rank) or an add once the
    /// buffer holds five cards is a no-op, not an error. Returns whether the
    /// buffer changed, so duplicate submission is idempotent.
    pub fn add_to_selection(&mut self, card: Card) -> bool {
        if self.state.selection.len() >= HAND_SIZE || self.state.selection.contains(&card) {
            return false;
        }

        let mut next = self.state.clone();
        next.selection.push(card);
        self.publish(next);
        true
    }

    /// Unconditionally empties the selection buffer.
    pub fn clear_selection(&mut self) {
        let mut next = self.state.clone();
        next.selection.clear();
        self.publish(next);
    }

    /// Flips the card-picker visibility flag and returns the new value.
    ///
    /// The flag is carried for a presentation layer; it has no effect on
    /// deck, hand, selection or ranking.
    pub fn toggle_selector(&mut self) -> bool {
        let mut next = self.state.clone();
        next.selector_open = !next.selector_open;
        self.publish(next);
        self.state.selector_open
    }
}
