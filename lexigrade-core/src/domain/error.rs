use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// Dictionary file could not be read
    #[error("Failed to read dictionary {path}: {source}")]
    DictionaryIo {
        /// Path of the dictionary file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Dictionary contents are malformed
    #[error("Invalid dictionary entry on line {line}: {reason}")]
    InvalidDictionaryEntry {
        /// One-based line number
        line: usize,
        /// What is wrong with the entry
        reason: String,
    },

    /// Dictionary has no usable entries
    #[error("Dictionary is empty")]
    EmptyDictionary,
}
