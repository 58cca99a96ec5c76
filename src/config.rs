//! Configuration for a Takeout conversion run.
//!
//! [`HistoryConfig`] is a plain library struct with no CLI framework
//! dependencies; the binary builds one from its arguments.
//!
//! # Example
//!
//! ```rust
//! use google_voice_history::config::HistoryConfig;
//! use google_voice_history::core::models::Column;
//!
//! let config = HistoryConfig::new()
//!     .with_digest_size(6)
//!     .with_excluded_column(Column::ContactName);
//!
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::core::models::Column;
use crate::error::{HistoryError, Result};

/// Default anonymized identifier width in bytes (10 hex characters).
pub const DEFAULT_DIGEST_SIZE: usize = 5;

/// Widest identifier available from a SHA-256 digest.
pub const MAX_DIGEST_SIZE: usize = 32;

/// Settings for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Anonymized identifier width in bytes (default: 5)
    pub digest_size: usize,

    /// Columns left out of the CSV (default: none)
    pub excluded_columns: Vec<Column>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            digest_size: DEFAULT_DIGEST_SIZE,
            excluded_columns: Vec::new(),
        }
    }
}

impl HistoryConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the anonymized identifier width in bytes.
    #[must_use]
    pub fn with_digest_size(mut self, size: usize) -> Self {
        self.digest_size = size;
        self
    }

    /// Leaves a column out of the output.
    #[must_use]
    pub fn with_excluded_column(mut self, column: Column) -> Self {
        if !self.excluded_columns.contains(&column) {
            self.excluded_columns.push(column);
        }
        self
    }

    /// Columns that will be written, in output order.
    pub fn columns(&self) -> Vec<Column> {
        Column::all()
            .iter()
            .copied()
            .filter(|column| !self.excluded_columns.contains(column))
            .collect()
    }

    /// Checks that the configuration can produce a usable run.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_DIGEST_SIZE).contains(&self.digest_size) {
            return Err(HistoryError::invalid_config(format!(
                "digest size must be between 1 and {MAX_DIGEST_SIZE} bytes, got {}",
                self.digest_size
            )));
        }
        if self.columns().is_empty() {
            return Err(HistoryError::invalid_config("every column is excluded"));
        }
        Ok(())
    }
}
