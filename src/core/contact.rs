//! Contact classification and run-level contact counters.
//!
//! A contact string from a filename is either a phone number (contains ten
//! consecutive digits), a display name, or missing entirely. Numbers keep
//! only their anonymized id; names keep both id and name.

use std::sync::LazyLock;

use log::trace;
use regex::Regex;

use super::anonymize::Anonymizer;
use crate::error::{HistoryError, Result};

static PHONE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{10}").unwrap());

/// How a contact string was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Number,
    Name,
    Missing,
}

impl ContactKind {
    pub fn classify(contact: &str) -> Self {
        if PHONE_NUMBER.is_match(contact) {
            ContactKind::Number
        } else if contact.is_empty() {
            ContactKind::Missing
        } else {
            ContactKind::Name
        }
    }
}

/// Anonymized contact fields for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Counts of classified contacts over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactStats {
    pub total: usize,
    pub missing: usize,
    pub numbers: usize,
    pub names: usize,
}

impl ContactStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one classified contact.
    pub fn record(&mut self, kind: ContactKind) {
        self.total += 1;
        match kind {
            ContactKind::Number => self.numbers += 1,
            ContactKind::Name => self.names += 1,
            ContactKind::Missing => self.missing += 1,
        }
    }

    /// Fails if the per-kind counters don't sum to the total.
    pub fn verify(&self) -> Result<()> {
        let sum = self.missing + self.numbers + self.names;
        if sum != self.total {
            return Err(HistoryError::StatsMismatch {
                total: self.total,
                sum,
            });
        }
        Ok(())
    }
}

/// Classifies `contact`, counts it, and anonymizes it if present.
pub fn format_contact(
    contact: &str,
    anonymizer: &mut Anonymizer,
    stats: &mut ContactStats,
) -> Result<Contact> {
    let kind = ContactKind::classify(contact);
    stats.record(kind);
    trace!("contact classified as {kind:?}");

    let formatted = match kind {
        ContactKind::Missing => Contact::default(),
        ContactKind::Number => Contact {
            id: Some(anonymizer.anonymize(contact)?),
            name: None,
        },
        ContactKind::Name => Contact {
            id: Some(anonymizer.anonymize(contact)?),
            name: Some(contact.to_string()),
        },
    };
    Ok(formatted)
}
