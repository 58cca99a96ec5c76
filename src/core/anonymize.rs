//! Deterministic, collision-checked contact anonymization.
//!
//! Identifiers are the leading bytes of a SHA-256 digest, hex encoded. The
//! default width of 5 bytes keeps ids short enough to read in a spreadsheet
//! but is not collision-proof, so every id is registered against the
//! original it came from and a second original with the same id aborts.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use sha2::{Digest, Sha256};

use crate::config::{DEFAULT_DIGEST_SIZE, MAX_DIGEST_SIZE};
use crate::error::{HistoryError, Result};

/// Maps originals to short identifiers for the duration of one run.
#[derive(Debug, Clone)]
pub struct Anonymizer {
    digest_size: usize,
    /// original -> id
    cache: HashMap<String, String>,
    /// id -> original
    table: HashMap<String, String>,
}

impl Default for Anonymizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Anonymizer {
    pub fn new() -> Self {
        Self::with_digest_size(DEFAULT_DIGEST_SIZE)
    }

    /// `digest_size` is clamped to what SHA-256 produces.
    pub fn with_digest_size(digest_size: usize) -> Self {
        Self {
            digest_size: digest_size.clamp(1, MAX_DIGEST_SIZE),
            cache: HashMap::new(),
            table: HashMap::new(),
        }
    }

    pub fn digest_size(&self) -> usize {
        self.digest_size
    }

    /// Returns the identifier for `original`, registering it on first use.
    ///
    /// Fails with [`HistoryError::Collision`] if a different original already
    /// owns the same identifier.
    pub fn anonymize(&mut self, original: &str) -> Result<String> {
        if let Some(id) = self.cache.get(original) {
            return Ok(id.clone());
        }

        let id = digest(original, self.digest_size);
        match self.table.entry(id.clone()) {
            Entry::Occupied(existing) => {
                return Err(HistoryError::collision(&id, existing.get(), original));
            }
            Entry::Vacant(slot) => {
                slot.insert(original.to_string());
            }
        }

        self.cache.insert(original.to_string(), id.clone());
        Ok(id)
    }

    /// The original registered for `id`, if any.
    pub fn original(&self, id: &str) -> Option<&str> {
        self.table.get(id).map(String::as_str)
    }

    /// Number of distinct originals seen.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

fn digest(value: &str, size: usize) -> String {
    let hash = Sha256::digest(value.as_bytes());
    hex::encode(&hash[..size])
}
