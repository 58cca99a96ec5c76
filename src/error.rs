//! Unified error types for google-voice-history.
//!
//! Every failure in a run is fatal: the pipeline reads each archive member
//! exactly once and stops at the first error. [`HistoryError`] carries enough
//! context (member path, offending value) for a useful message on stderr.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for google-voice-history operations.
///
/// # Example
///
/// ```rust
/// use google_voice_history::error::Result;
/// use google_voice_history::ConversationRecord;
///
/// fn my_function() -> Result<Vec<ConversationRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, HistoryError>;

/// The error type for all google-voice-history operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HistoryError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The Takeout file doesn't exist
    /// - Permission denied
    /// - The downstream consumer closed the output stream
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The Takeout could not be opened or a member could not be read.
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// CSV writing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A member's content is not valid UTF-8.
    #[error("UTF-8 encoding error in {path}: {source}")]
    Utf8 {
        /// Archive member path
        path: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// A member's markup could not be parsed, even after sanitizing.
    #[error("Error parsing {path}: {source}")]
    Markup {
        /// Archive member path
        path: String,
        /// The underlying parse error
        #[source]
        source: roxmltree::Error,
    },

    /// A machine-readable timestamp attribute could not be parsed.
    #[error("Invalid timestamp '{value}' in {path}: {source}")]
    Timestamp {
        /// Archive member path
        path: String,
        /// The attribute text that failed to parse
        value: String,
        /// The underlying chrono error
        #[source]
        source: chrono::ParseError,
    },

    /// Two distinct contacts produced the same anonymized identifier.
    ///
    /// The identifier is too narrow for this dataset; increase the digest size.
    #[error("Duplicate anonymization {digest} for {existing} and {incoming}")]
    Collision {
        /// The shared identifier
        digest: String,
        /// The contact registered first
        existing: String,
        /// The contact that collided with it
        incoming: String,
    },

    /// Contact classification counters don't add up.
    #[error("Total contacts ({total}) != sum of each type ({sum})")]
    StatsMismatch {
        /// Number of contacts classified
        total: usize,
        /// missing + numbers + names
        sum: usize,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong
        message: String,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl HistoryError {
    /// Creates a markup parse error for an archive member.
    pub fn markup(path: impl Into<String>, source: roxmltree::Error) -> Self {
        HistoryError::Markup {
            path: path.into(),
            source,
        }
    }

    /// Creates a timestamp parse error for an archive member.
    pub fn timestamp(
        path: impl Into<String>,
        value: impl Into<String>,
        source: chrono::ParseError,
    ) -> Self {
        HistoryError::Timestamp {
            path: path.into(),
            value: value.into(),
            source,
        }
    }

    /// Creates an anonymization collision error.
    pub fn collision(
        digest: impl Into<String>,
        existing: impl Into<String>,
        incoming: impl Into<String>,
    ) -> Self {
        HistoryError::Collision {
            digest: digest.into(),
            existing: existing.into(),
            incoming: incoming.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        HistoryError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, HistoryError::Io(_))
    }

    /// Returns `true` if this is a markup or timestamp parse error.
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            HistoryError::Markup { .. } | HistoryError::Timestamp { .. }
        )
    }

    /// Returns `true` if this is an anonymization collision.
    pub fn is_collision(&self) -> bool {
        matches!(self, HistoryError::Collision { .. })
    }

    /// Returns `true` if the output stream was closed by the reader,
    /// e.g. `google-voice-history takeout.zip | head`.
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            HistoryError::Io(e) => e.kind() == io::ErrorKind::BrokenPipe,
            HistoryError::Csv(e) => match e.kind() {
                csv::ErrorKind::Io(io_err) => io_err.kind() == io::ErrorKind::BrokenPipe,
                _ => false,
            },
            _ => false,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
