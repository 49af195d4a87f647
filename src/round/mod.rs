//! Round engine: one deal-through-resolution cycle.

use rand::Rng;
use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::hand::Hand;
use crate::result::RoundOutcome;

mod actions;
mod dealer;
pub mod state;

pub use dealer::DEALER_STANDS_ON;
pub use state::RoundState;

/// A single blackjack round between one player and the dealer.
///
/// The round owns its deck and both hands. Callers drive it with
/// [`Round::player_hit`] and [`Round::player_stay`] and read the resulting
/// [`RoundState`]; the round never talks to a display itself.
#[derive(Debug, Clone)]
pub struct Round {
    /// Deck for this round only.
    deck: Deck,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand. The second card is the hole card.
    dealer: Hand,
    /// Current round state.
    state: RoundState,
}

impl Round {
    /// Builds and shuffles a fresh deck, then deals the opening hands.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck cannot supply the opening four cards.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Round, RoundState};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(42);
    /// let round = Round::start(&mut rng).unwrap();
    /// assert_eq!(round.state(), RoundState::InProgress);
    /// assert_eq!(round.player().len(), 2);
    /// ```
    pub fn start<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, RoundError> {
        let mut deck = Deck::build();
        deck.shuffle(rng)?;
        Self::with_deck(deck)
    }

    /// Deals the opening hands from `deck` as it is, without shuffling.
    ///
    /// Cards alternate player, dealer, player, dealer.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::DeckExhausted`] if the deck holds fewer than four
    /// cards.
    pub fn with_deck(deck: Deck) -> Result<Self, RoundError> {
        let mut round = Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            state: RoundState::InProgress,
        };

        for _ in 0..2 {
            let card = round.deck.draw()?;
            round.player.add(card);
            let card = round.deck.draw()?;
            round.dealer.add(card);
        }

        debug!(
            player_total = round.player.total(),
            dealer_up = ?round.dealer.cards().first(),
            "round dealt"
        );

        Ok(round)
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns whether the round is resolved.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the player's best total.
    #[must_use]
    pub fn player_total(&self) -> u8 {
        self.player.total()
    }

    /// Returns the dealer's best total.
    #[must_use]
    pub fn dealer_total(&self) -> u8 {
        self.dealer.total()
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns the outcome once the round is resolved.
    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.is_over().then(|| RoundOutcome {
            state: self.state,
            player_total: self.player.total(),
            dealer_total: self.dealer.total(),
        })
    }

    fn ensure_in_progress(&self) -> Result<(), RoundError> {
        if self.state.is_terminal() {
            return Err(RoundError::InvalidStateTransition);
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<Card, RoundError> {
        Ok(self.deck.draw()?)
    }
}
