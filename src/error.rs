//! Error types for game operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::card::Card;
use crate::session::{Intent, Phase};

/// Errors that can occur while dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Every card has already been dealt.
    #[error("deck exhausted")]
    Exhausted,
    /// The deck was shuffled after dealing started.
    #[error("cannot shuffle a deck after dealing has started")]
    ShuffleAfterDraw,
    /// A stacked deck holds more cards than a full deck.
    #[error("a stacked deck holds at most 52 cards, got {0}")]
    Oversized(usize),
    /// A stacked deck holds the same card twice.
    #[error("card {0} appears more than once in the deck")]
    DuplicateCard(Card),
}

/// Errors that can occur during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The round is already resolved.
    #[error("round is already resolved")]
    InvalidStateTransition,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    DeckExhausted,
    /// The deck was misused in a way that does not depend on round state.
    #[error(transparent)]
    Deck(DeckError),
}

impl From<DeckError> for RoundError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::Exhausted => Self::DeckExhausted,
            other => Self::Deck(other),
        }
    }
}

/// The results log could not be written.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Appending a result line failed.
    #[error("failed to append to results log {path}")]
    Append {
        /// Log file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Truncating the log failed.
    #[error("failed to clear results log {path}")]
    Clear {
        /// Log file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while driving a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The active round rejected the action.
    #[error(transparent)]
    Round(#[from] RoundError),
    /// A round action arrived while no round exists.
    #[error("no active round")]
    NoActiveRound,
    /// The intent is not accepted in the current phase.
    #[error("{intent:?} is not accepted while {phase:?}")]
    UnexpectedIntent {
        /// Rejected intent.
        intent: Intent,
        /// Phase at the time.
        phase: Phase,
    },
    /// A session needs at least one round.
    #[error("a session needs at least one round")]
    InvalidRoundCount,
}

/// Errors that can occur while loading options.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}")]
    Io {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid TOML for [`TableOptions`](crate::TableOptions).
    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
    /// A value is out of range.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}
