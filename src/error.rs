//! Error types for jj-bookmark-sync

use crate::repo::Tool;
use thiserror::Error;

/// Errors that can occur while syncing bookmarks
#[derive(Debug, Error)]
pub enum Error {
    /// The working directory is not a jj repository
    #[error("This directory is not initialized as a Jujutsu repository.")]
    NotJjRepo,

    /// `jj status` failed for a reason other than a missing repository
    #[error("Error running jj: {0}")]
    Jj(String),

    /// Failed to spawn or talk to a subprocess
    #[error("failed to run {tool}: {source}")]
    Spawn {
        /// Which tool could not be started
        tool: Tool,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Reading an answer from the terminal failed
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// IO error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error ends the run before any state is touched
    ///
    /// Only the repository check produces these.
    pub const fn is_precondition(&self) -> bool {
        matches!(self, Self::NotJjRepo | Self::Jj(_))
    }
}
