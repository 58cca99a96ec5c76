//! Core processing logic.
//!
//! This module contains:
//! - [`models`] - Conversation records and output columns
//! - [`contact`] - Contact classification and counters
//! - [`anonymize`] - Collision-checked contact identifiers
//! - [`processor`] - The Takeout pipeline
//! - [`output`] - CSV writer
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use google_voice_history::core::{Column, parse_takeout, write_csv};
//! use google_voice_history::config::HistoryConfig;
//!
//! let records = parse_takeout("takeout.zip", &HistoryConfig::new())?;
//! write_csv(&records, std::io::stdout(), Column::all())?;
//! # Ok::<(), google_voice_history::HistoryError>(())
//! ```

pub mod anonymize;
pub mod contact;
pub mod models;
pub mod output;
pub mod processor;

// Re-export main types for convenience
pub use anonymize::Anonymizer;
pub use contact::{Contact, ContactKind, ContactStats, format_contact};
pub use models::{Column, ConversationRecord, Directory, FileDetails, LocalStamp, ThreadStats};
pub use output::{to_csv, write_csv, write_csv_file};
pub use processor::{RunState, parse_takeout, process_source, sort_records};
