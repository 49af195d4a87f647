//! Round outcomes and the results-log line format.

use core::fmt;

use crate::hand::BLACKJACK;
use crate::options::TieLogging;
use crate::round::RoundState;

/// Result label written to the results log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultText {
    /// Player went over 21.
    PlayerBusted,
    /// Dealer went over 21.
    DealerBusted,
    /// Player total is higher.
    PlayerWins,
    /// Dealer total is higher, or totals are equal under [`TieLogging::Legacy`].
    DealerWins,
    /// Equal totals under [`TieLogging::Tie`].
    Tie,
}

impl ResultText {
    /// Returns the label as written to the log.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PlayerBusted => "Player Busted",
            Self::DealerBusted => "Dealer Busted",
            Self::PlayerWins => "Player Wins",
            Self::DealerWins => "Dealer Wins",
            Self::Tie => "Tie",
        }
    }
}

impl fmt::Display for ResultText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final totals and state of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Terminal round state.
    pub state: RoundState,
    /// Player's final total.
    pub player_total: u8,
    /// Dealer's final total.
    pub dealer_total: u8,
}

impl RoundOutcome {
    /// Picks the log label from the final totals.
    ///
    /// Busts are checked player first. Otherwise the higher total wins and an
    /// equal total is reported according to `ties`.
    #[must_use]
    pub const fn result_text(&self, ties: TieLogging) -> ResultText {
        if self.player_total > BLACKJACK {
            ResultText::PlayerBusted
        } else if self.dealer_total > BLACKJACK {
            ResultText::DealerBusted
        } else if self.player_total > self.dealer_total {
            ResultText::PlayerWins
        } else if self.player_total == self.dealer_total && matches!(ties, TieLogging::Tie) {
            ResultText::Tie
        } else {
            ResultText::DealerWins
        }
    }

    /// Formats the line appended to the results log.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{RoundOutcome, RoundState, TieLogging};
    ///
    /// let outcome = RoundOutcome {
    ///     state: RoundState::PlayerBusted,
    ///     player_total: 22,
    ///     dealer_total: 18,
    /// };
    /// assert_eq!(
    ///     outcome.result_line(TieLogging::Legacy),
    ///     "Player Score: 22, Dealer Score: 18, Result: Player Busted"
    /// );
    /// ```
    #[must_use]
    pub fn result_line(&self, ties: TieLogging) -> String {
        format!(
            "Player Score: {}, Dealer Score: {}, Result: {}",
            self.player_total,
            self.dealer_total,
            self.result_text(ties)
        )
    }
}
