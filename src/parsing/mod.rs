//! Parsing of Takeout member names and member markup.
//!
//! - [`filename`] - Matches `Takeout/Voice/{Calls,Spam}/` record paths and
//!   normalizes their timestamps
//! - [`markup`] - Extracts duration, call time and thread statistics

pub mod filename;
pub mod markup;

// Re-export commonly used items
pub use filename::{MatchedMember, format_timestamp, match_member, match_members};
pub use markup::{parse_markup, parse_record, sanitize};
