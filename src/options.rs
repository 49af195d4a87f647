//! Table configuration options.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// How a tied round is written to the results log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieLogging {
    /// Ties are logged as `Dealer Wins`, matching existing result files.
    #[default]
    Legacy,
    /// Ties are logged as `Tie`.
    Tie,
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::{TableOptions, TieLogging};
///
/// let options = TableOptions::default()
///     .with_rounds(5)
///     .with_seed(Some(7))
///     .with_tie_logging(TieLogging::Tie);
/// ```
///
/// Options can also be read from TOML; every key is optional:
///
/// ```toml
/// rounds = 5
/// results_path = "results.txt"
/// seed = 42
/// tie_logging = "tie"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableOptions {
    /// Rounds per session.
    pub rounds: u32,
    /// Results log file.
    pub results_path: PathBuf,
    /// Shuffle seed. A random seed is used when unset.
    pub seed: Option<u64>,
    /// How ties appear in the results log.
    pub tie_logging: TieLogging,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            rounds: 3,
            results_path: PathBuf::from("game_results.txt"),
            seed: None,
            tie_logging: TieLogging::Legacy,
        }
    }
}

impl TableOptions {
    /// Parses options from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or a value is out of
    /// range.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let options: Self = toml::from_str(input)?;
        options.validate()?;
        Ok(options)
    }

    /// Reads options from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&input)
    }

    /// Checks that every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `rounds` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds == 0 {
            return Err(ConfigError::Invalid("rounds must be at least 1"));
        }
        Ok(())
    }

    /// Sets the number of rounds per session.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_rounds(5);
    /// assert_eq!(options.rounds, 5);
    /// ```
    #[must_use]
    pub const fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets the results log path.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_results_path("out.txt");
    /// assert_eq!(options.results_path.to_str(), Some("out.txt"));
    /// ```
    #[must_use]
    pub fn with_results_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.results_path = path.into();
        self
    }

    /// Sets the shuffle seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_seed(Some(42));
    /// assert_eq!(options.seed, Some(42));
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets how ties are logged.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{TableOptions, TieLogging};
    ///
    /// let options = TableOptions::default().with_tie_logging(TieLogging::Tie);
    /// assert_eq!(options.tie_logging, TieLogging::Tie);
    /// ```
    #[must_use]
    pub const fn with_tie_logging(mut self, tie_logging: TieLogging) -> Self {
        self.tie_logging = tie_logging;
        self
    }
}
