//! Multi-round session controller and intent dispatch.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::error::{PersistenceError, SessionError};
use crate::options::TableOptions;
use crate::present::Presenter;
use crate::round::Round;
use crate::sink::ResultSink;

/// What to do once a session is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndGameChoice {
    /// Return to the top-level menu.
    StartNewGame,
    /// Leave the program.
    Exit,
}

/// A user intent forwarded by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// "Start New Game" from the top-level menu.
    StartGame,
    /// Take another card.
    Hit,
    /// End the player's turn.
    Stay,
    /// Abandon the current game and return to the menu.
    NewRound,
    /// Leave the program.
    Exit,
    /// Answer to "continue to the next round?".
    Continue(bool),
    /// Answer to the end-of-session choice.
    EndGame(EndGameChoice),
}

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Top-level menu; no round exists.
    Menu,
    /// A round is waiting for the player.
    Playing,
    /// A round resolved and more rounds remain.
    AwaitingContinue,
    /// The session is over; waiting for [`EndGameChoice`].
    GameOver,
    /// The player left.
    Exited,
}

/// Owns the round counters, the live round, and the collaborators a round
/// reports to.
///
/// At most one [`Round`] is alive at a time; starting a round or returning to
/// the menu drops the previous one.
pub struct Session<S, P> {
    options: TableOptions,
    seed: u64,
    rng: ChaCha8Rng,
    sink: S,
    presenter: P,
    phase: Phase,
    total_rounds: u32,
    current_round: u32,
    round: Option<Round>,
}

impl<S: ResultSink, P: Presenter> Session<S, P> {
    /// Creates a session sitting at the top-level menu.
    ///
    /// Shuffles are seeded from `options.seed`, or from a random seed when it
    /// is unset.
    #[must_use]
    pub fn new(options: TableOptions, sink: S, presenter: P) -> Self {
        let seed = options.seed.unwrap_or_else(rand::random);
        info!(seed, rounds = options.rounds, "session created");

        Self {
            options,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            sink,
            presenter,
            phase: Phase::Menu,
            total_rounds: 0,
            current_round: 0,
            round: None,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the number of rounds in the running session.
    #[must_use]
    pub const fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    /// Returns the 1-based number of the current round, or 0 at the menu.
    #[must_use]
    pub const fn current_round(&self) -> u32 {
        self.current_round
    }

    /// Returns the live round, resolved or not.
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Returns the shuffle seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the options the session was created with.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the result sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the presenter.
    #[must_use]
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Applies a user intent and returns the new phase.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Round`] when the round rejects a hit or stay,
    /// [`SessionError::NoActiveRound`] for a hit or stay with no round, and
    /// [`SessionError::UnexpectedIntent`] for any other intent the current
    /// phase does not accept. A rejected intent changes nothing.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Phase, SessionError> {
        debug!(?intent, phase = ?self.phase, "dispatch");

        match (intent, self.phase) {
            (_, Phase::Exited) => return Err(self.unexpected(intent)),
            (Intent::Exit, _) | (Intent::EndGame(EndGameChoice::Exit), Phase::GameOver) => {
                self.round = None;
                self.phase = Phase::Exited;
            }
            (Intent::StartGame, Phase::Menu) => self.start_session(self.options.rounds)?,
            (Intent::Hit, _) => self.on_hit()?,
            (Intent::Stay, _) => self.on_stay()?,
            (Intent::NewRound, Phase::Playing | Phase::AwaitingContinue | Phase::GameOver)
            | (Intent::EndGame(EndGameChoice::StartNewGame), Phase::GameOver) => {
                self.return_to_menu();
            }
            (Intent::Continue(true), Phase::AwaitingContinue) => {
                self.start_round(self.current_round + 1)?;
            }
            (Intent::Continue(false), Phase::AwaitingContinue) => self.phase = Phase::GameOver,
            _ => return Err(self.unexpected(intent)),
        }

        Ok(self.phase)
    }

    /// Starts a session of `total_rounds` rounds and deals round 1.
    ///
    /// Any round in progress is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidRoundCount`] if `total_rounds` is zero,
    /// or [`SessionError::UnexpectedIntent`] once the player has exited.
    pub fn start_session(&mut self, total_rounds: u32) -> Result<(), SessionError> {
        if self.phase == Phase::Exited {
            return Err(self.unexpected(Intent::StartGame));
        }
        if total_rounds == 0 {
            return Err(SessionError::InvalidRoundCount);
        }

        self.total_rounds = total_rounds;
        self.start_round(1)
    }

    /// Empties the results log.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink could not be cleared.
    pub fn clear_results(&mut self) -> Result<(), PersistenceError> {
        self.sink.clear()
    }

    fn start_round(&mut self, number: u32) -> Result<(), SessionError> {
        let round = Round::start(&mut self.rng)?;
        info!(round = number, of = self.total_rounds, "round started");

        self.presenter
            .render_hands(round.player().cards(), round.dealer().cards(), true);
        self.round = Some(round);
        self.current_round = number;
        self.phase = Phase::Playing;
        Ok(())
    }

    fn on_hit(&mut self) -> Result<(), SessionError> {
        let round = self.round.as_mut().ok_or(SessionError::NoActiveRound)?;
        round.player_hit()?;

        if round.is_over() {
            self.on_round_resolved();
        } else {
            self.presenter
                .render_hands(round.player().cards(), round.dealer().cards(), true);
        }
        Ok(())
    }

    fn on_stay(&mut self) -> Result<(), SessionError> {
        let round = self.round.as_mut().ok_or(SessionError::NoActiveRound)?;
        round.player_stay()?;
        self.on_round_resolved();
        Ok(())
    }

    /// Logs the outcome, reveals the table, and decides what comes next.
    fn on_round_resolved(&mut self) {
        let Some(round) = self.round.as_ref() else {
            return;
        };
        let Some(outcome) = round.outcome() else {
            return;
        };

        let line = outcome.result_line(self.options.tie_logging);
        if let Err(err) = self.sink.append(&line) {
            warn!(error = %err, "failed to persist round result");
        }

        self.presenter
            .render_hands(round.player().cards(), round.dealer().cards(), false);
        self.presenter.render_status(outcome.state.status_text());

        info!(
            round = self.current_round,
            state = ?outcome.state,
            player_total = outcome.player_total,
            dealer_total = outcome.dealer_total,
            "round resolved"
        );

        self.phase = if self.current_round < self.total_rounds {
            Phase::AwaitingContinue
        } else {
            Phase::GameOver
        };
    }

    fn return_to_menu(&mut self) {
        self.round = None;
        self.total_rounds = 0;
        self.current_round = 0;
        self.phase = Phase::Menu;
    }

    const fn unexpected(&self, intent: Intent) -> SessionError {
        SessionError::UnexpectedIntent {
            intent,
            phase: self.phase,
        }
    }
}
