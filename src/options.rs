//! Session configuration options.

/// Configuration options for a draw session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use fivecard::SessionOptions;
///
/// let options = SessionOptions::default().with_strict_exchange(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SessionOptions {
    /// Whether an exchange request for a card that is not in the deck aborts
    /// the whole exchange instead of being silently skipped.
    ///
    /// The permissive default mirrors the original game, where such requests
    /// are dropped and the hand may end up shorter than five cards.
    pub strict_exchange: bool,
}

impl SessionOptions {
    /// Sets whether unavailable exchange requests abort the exchange.
    ///
    /// # Example
    ///
    /// ```
    /// use fivecard::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_strict_exchange(true);
    /// assert!(options.strict_exchange);
    /// ```
    #[must_use]
    pub const fn with_strict_exchange(mut self, strict: bool) -> Self {
        self.strict_exchange = strict;
        self
    }
}
