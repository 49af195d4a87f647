//! A single 52-card deck with a deal cursor.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered deck of cards.
///
/// Cards are dealt front to back; `cursor` marks the next undealt card and
/// never moves past the end. A deck is built and shuffled once per round.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
}

impl Deck {
    /// Builds the canonical 52-card deck in base order (every rank, each in
    /// every suit).
    #[must_use]
    pub fn build() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards, cursor: 0 }
    }

    /// Creates a deck that deals `cards` in exactly the given order.
    ///
    /// No shuffle is applied. Useful for replaying a known deal. The stack may
    /// be short, but never longer than a full deck or holding a card twice.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Oversized`] for more than [`DECK_SIZE`] cards and
    /// [`DeckError::DuplicateCard`] for the first repeated card.
    pub fn stacked(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() > DECK_SIZE {
            return Err(DeckError::Oversized(cards.len()));
        }

        let mut seen = HashSet::with_capacity(cards.len());
        if let Some(card) = cards.iter().find(|card| !seen.insert(**card)) {
            return Err(DeckError::DuplicateCard(*card));
        }

        Ok(Self { cards, cursor: 0 })
    }

    /// Uniformly permutes the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::ShuffleAfterDraw`] if any card was already dealt.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), DeckError> {
        if self.cursor > 0 {
            return Err(DeckError::ShuffleAfterDraw);
        }

        self.cards.shuffle(rng);
        Ok(())
    }

    /// Deals the card at the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] once every card has been dealt.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        let card = *self.cards.get(self.cursor).ok_or(DeckError::Exhausted)?;
        self.cursor += 1;
        Ok(card)
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// Returns the number of cards dealt so far.
    #[must_use]
    pub const fn dealt(&self) -> usize {
        self.cursor
    }

    /// Returns every card in deck order, dealt or not.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
