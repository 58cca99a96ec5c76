//! # google-voice-history
//!
//! Generate a CSV of call and message history from a Google Voice Takeout.
//!
//! ## Overview
//!
//! A Google Takeout ZIP holds one HTML file per call or text thread under
//! `Takeout/Voice/Calls/` (and `Takeout/Voice/Spam/`). This crate reads those
//! files and produces one [`ConversationRecord`] per file with:
//!
//! | Column | Description |
//! |--------|-------------|
//! | `timestamp` | The date & time of the log in UTC |
//! | `date` | The local date of the log |
//! | `time` | The local time of the log |
//! | `type` | The type of the log (Received, Placed, Missed, Voicemail, Text) |
//! | `contact_id` | A unique, anonymized value representing the contact's number or name |
//! | `contact_name` | The name of the contact |
//! | `call_duration` | The duration of calls in HH:MM:SS |
//! | `message_days` | The duration of a text message thread in days |
//! | `message_count` | The number of messages in a text message thread |
//!
//! Phone numbers are never written; names are kept alongside their id.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use google_voice_history::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = HistoryConfig::new();
//!     let records = parse_takeout("takeout.zip", &config)?;
//!     write_csv(&records, std::io::stdout(), &config.columns())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`archive`] - [`MemberSource`](archive::MemberSource) and the ZIP-backed [`TakeoutArchive`](archive::TakeoutArchive)
//! - [`parsing`] - filename matching and markup extraction
//! - [`core`] - records, contact anonymization, the pipeline, CSV output
//! - [`config`] - [`HistoryConfig`](config::HistoryConfig)
//! - [`cli`] - CLI argument types (`cli` feature)
//! - [`error`] - [`HistoryError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

pub mod archive;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use crate::core::models::ConversationRecord;
pub use error::{HistoryError, Result};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use google_voice_history::prelude::*;
/// ```
pub mod prelude {
    pub use crate::ConversationRecord;

    // Error types
    pub use crate::error::{HistoryError, Result};

    // Configuration
    pub use crate::config::HistoryConfig;

    // Archive access
    pub use crate::archive::{MemberSource, TakeoutArchive};

    // Pipeline
    pub use crate::core::models::Column;
    pub use crate::core::processor::{RunState, parse_takeout, process_source};

    // Output
    pub use crate::core::output::{to_csv, write_csv, write_csv_file};
}
