//! Round state types.

/// Round state.
///
/// A round starts `InProgress` after the initial deal and moves to exactly one
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    /// Waiting for the player to hit or stay.
    InProgress,
    /// Player went over 21.
    PlayerBusted,
    /// Player reached a two-card 21.
    PlayerBlackjack,
    /// Dealer went over 21.
    DealerBusted,
    /// Dealer finished on a two-card 21.
    DealerBlackjack,
    /// Player total beats dealer total.
    PlayerWins,
    /// Dealer total beats player total.
    DealerWins,
    /// Equal totals.
    Tie,
}

impl RoundState {
    /// Returns whether the round is resolved.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    /// Status line shown to the player for this state.
    #[must_use]
    pub const fn status_text(self) -> &'static str {
        match self {
            Self::InProgress => "",
            Self::PlayerBusted => "Player Busts! Dealer Wins!",
            Self::PlayerBlackjack => "Player Blackjack! Player Wins!",
            Self::DealerBusted => "Dealer Busts! Player Wins!",
            Self::DealerBlackjack => "Dealer Blackjack! Dealer Wins!",
            Self::PlayerWins => "Player Wins!",
            Self::DealerWins => "Dealer Wins!",
            Self::Tie => "It's a Tie!",
        }
    }
}
