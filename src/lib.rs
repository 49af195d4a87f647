//! A single-table blackjack engine.
//!
//! The crate provides a [`Round`] type that deals and resolves one round
//! between a player and a dealer, and a [`Session`] that runs a fixed number
//! of rounds, logs each result through a [`ResultSink`], and reports what to
//! show through a [`Presenter`].
//!
//! # Example
//!
//! ```no_run
//! use bjtable::{Intent, MemoryResultSink, NullPresenter, Session, TableOptions};
//!
//! let options = TableOptions::default().with_seed(Some(42));
//! let mut session = Session::new(options, MemoryResultSink::new(), NullPresenter);
//! session.dispatch(Intent::StartGame).unwrap();
//! session.dispatch(Intent::Stay).unwrap();
//! assert_eq!(session.sink().lines().len(), 1);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod present;
pub mod result;
pub mod round;
pub mod session;
pub mod sink;

// Re-export main types
pub use card::{BACK_IMAGE_KEY, Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ConfigError, DeckError, PersistenceError, RoundError, SessionError};
pub use hand::{BLACKJACK, Hand};
pub use options::{TableOptions, TieLogging};
pub use present::{NullPresenter, Presenter};
pub use result::{ResultText, RoundOutcome};
pub use round::{DEALER_STANDS_ON, Round, RoundState};
pub use session::{EndGameChoice, Intent, Phase, Session};
pub use sink::{FileResultSink, MemoryResultSink, ResultSink};
