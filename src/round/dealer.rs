use core::cmp::Ordering;

use tracing::debug;

use crate::card::Card;
use crate::error::RoundError;

use super::{Round, RoundState};

/// Dealer draws below this total and stands at or above it, soft or hard.
pub const DEALER_STANDS_ON: u8 = 17;

impl Round {
    /// Dealer draws until reaching 17 or higher.
    ///
    /// Returns the cards drawn by the dealer.
    pub(super) fn dealer_play(&mut self) -> Result<Vec<Card>, RoundError> {
        let mut drawn_cards = Vec::new();

        while self.dealer.total() < DEALER_STANDS_ON {
            let card = self.draw()?;
            self.dealer.add(card);
            drawn_cards.push(card);
            debug!(%card, total = self.dealer.total(), "dealer draws");
        }

        Ok(drawn_cards)
    }

    /// Decides the terminal state once the dealer has finished drawing.
    ///
    /// A dealer bust wins for the player whatever the player holds; a dealer
    /// natural is only checked after the draw loop.
    pub(super) fn resolve(&self) -> RoundState {
        if self.dealer.is_busted() {
            return RoundState::DealerBusted;
        }
        if self.dealer.is_blackjack() {
            return RoundState::DealerBlackjack;
        }

        match self.player.total().cmp(&self.dealer.total()) {
            Ordering::Greater => RoundState::PlayerWins,
            Ordering::Less => RoundState::DealerWins,
            Ordering::Equal => RoundState::Tie,
        }
    }
}
