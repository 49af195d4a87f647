//! Destinations for per-round result lines.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::PersistenceError;

/// Receives one formatted result line per resolved round.
pub trait ResultSink {
    /// Appends a single result line.
    ///
    /// # Errors
    ///
    /// Returns an error if the line could not be stored.
    fn append(&mut self, line: &str) -> Result<(), PersistenceError>;

    /// Removes every stored line.
    ///
    /// # Errors
    ///
    /// Returns an error if the store could not be cleared.
    fn clear(&mut self) -> Result<(), PersistenceError>;
}

/// Append-only text file, one line per round.
///
/// The file is opened and closed for every write.
#[derive(Debug, Clone)]
pub struct FileResultSink {
    path: PathBuf,
}

impl FileResultSink {
    /// Creates a sink writing to `path`. The file is created on first append.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the log file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResultSink for FileResultSink {
    fn append(&mut self, line: &str) -> Result<(), PersistenceError> {
        let to_error = |source: std::io::Error| PersistenceError::Append {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(to_error)?;
        writeln!(file, "{line}").map_err(to_error)
    }

    fn clear(&mut self) -> Result<(), PersistenceError> {
        File::create(&self.path)
            .map(drop)
            .map_err(|source| PersistenceError::Clear {
                path: self.path.clone(),
                source,
            })
    }
}

/// In-memory sink, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryResultSink {
    lines: Vec<String>,
}

impl MemoryResultSink {
    /// Creates an empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Returns the stored lines in append order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl ResultSink for MemoryResultSink {
    fn append(&mut self, line: &str) -> Result<(), PersistenceError> {
        self.lines.push(line.to_owned());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), PersistenceError> {
        self.lines.clear();
        Ok(())
    }
}

impl<S: ResultSink + ?Sized> ResultSink for &mut S {
    fn append(&mut self, line: &str) -> Result<(), PersistenceError> {
        (**self).append(line)
    }

    fn clear(&mut self) -> Result<(), PersistenceError> {
        (**self).clear()
    }
}
