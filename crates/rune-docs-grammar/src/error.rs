//! Grammar error types.

use std::path::PathBuf;

/// Error returned while loading, adapting, or registering a grammar.
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    /// Grammar file does not exist.
    #[error("Grammar file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Grammar file exists but could not be read.
    #[error("Failed to read grammar {}: {source}", path.display())]
    Io {
        /// Attempted path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Grammar file is not a valid grammar document.
    #[error("Invalid grammar JSON in {}: {source}", path.display())]
    Parse {
        /// Attempted path.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// Canonical name or alias list is unusable.
    #[error("Invalid grammar identifiers: {0}")]
    InvalidOverride(String),
    /// Identifier already claimed by another registered grammar.
    #[error("Language identifier '{identifier}' is already registered by grammar '{existing}'")]
    DuplicateIdentifier {
        /// Conflicting identifier.
        identifier: String,
        /// Canonical name of the grammar that owns it.
        existing: String,
    },
}
