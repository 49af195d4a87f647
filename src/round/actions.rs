use tracing::debug;

use crate::card::Card;
use crate::error::RoundError;

use super::{Round, RoundState};

impl Round {
    /// Player action: Hit (draw a card).
    ///
    /// The round resolves as [`RoundState::PlayerBusted`] when the player goes
    /// over 21, or [`RoundState::PlayerBlackjack`] on a two-card 21.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidStateTransition`] if the round is already
    /// resolved, or [`RoundError::DeckExhausted`] if the deck is empty.
    pub fn player_hit(&mut self) -> Result<Card, RoundError> {
        self.ensure_in_progress()?;

        let card = self.draw()?;
        self.player.add(card);

        if self.player.is_busted() {
            self.state = RoundState::PlayerBusted;
        } else if self.player.is_blackjack() {
            self.state = RoundState::PlayerBlackjack;
        }

        debug!(%card, total = self.player.total(), state = ?self.state, "player hit");

        Ok(card)
    }

    /// Player action: Stay (end the player's turn and let the dealer play).
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidStateTransition`] if the round is already
    /// resolved, or [`RoundError::DeckExhausted`] if the deck runs out while
    /// the dealer must draw.
    pub fn player_stay(&mut self) -> Result<Vec<Card>, RoundError> {
        self.ensure_in_progress()?;

        debug!(total = self.player.total(), "player stays");

        let drawn = self.dealer_play()?;
        self.state = self.resolve();

        Ok(drawn)
    }
}
