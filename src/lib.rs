//! A five-card draw hand engine with optional `no_std` support.
//!
//! The crate provides a [`Session`] type that owns a 52-card deck and the
//! currently held hand, draws random hands, exchanges specific cards picked
//! through a selection buffer, and classifies every complete hand with a
//! poker ranking.
//!
//! # Example
//!
//! ```no_run
//! use fivecard::{Session, SessionOptions};
//!
//! let options = SessionOptions::default();
//! let session = Session::new(options, 42);
//! let _ = session;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod eval;
pub mod options;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, HAND_SIZE, Suit, standard_deck};
pub use error::{DrawError, ExchangeError};
pub use eval::{Ranking, evaluate};
pub use options::SessionOptions;
pub use session::{Session, SessionState};
