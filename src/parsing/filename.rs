//! Takeout member filename matching and timestamp formatting.
//!
//! Google Voice stores one HTML file per call or message thread:
//!
//! ```text
//! Takeout/Voice/Calls/+15551234567 - Missed - 2020-08-21T18_57_10Z.html
//! Takeout/Voice/Spam/ - Text - 2020-09-01T01_02_03Z.html
//! ```
//!
//! Anything else in the archive (greetings, audio, `Phones.vcf`, other
//! products) is skipped.

use std::sync::LazyLock;

use log::{debug, trace};
use regex::Regex;

use crate::core::models::Directory;

/// Prefix-anchored; `contact` and `timestamp` are lazy, `type` is greedy.
pub const RECORD_PATTERN: &str = r"^Takeout/Voice/(?P<directory>Calls|Spam)/(?P<contact>.*?) - (?P<type>.+) - (?P<timestamp>.+?)\.html";

static RECORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(RECORD_PATTERN).unwrap());

/// Fields captured from a call or message thread filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedMember {
    /// Full archive member path
    pub path: String,
    pub directory: Directory,
    /// Phone number, name, or empty
    pub contact: String,
    /// Received, Placed, Missed, Voicemail, Text, ...
    pub log_type: String,
    /// e.g. `2020-08-21T18_57_10Z`
    pub raw_timestamp: String,
}

/// Matches a single member path, returning `None` for unrelated files.
pub fn match_member(path: &str) -> Option<MatchedMember> {
    let caps = RECORD_REGEX.captures(path)?;
    let directory = caps["directory"].parse().ok()?;

    Some(MatchedMember {
        path: path.to_string(),
        directory,
        contact: caps["contact"].to_string(),
        log_type: caps["type"].to_string(),
        raw_timestamp: caps["timestamp"].to_string(),
    })
}

/// Matches member paths in order, silently dropping unrelated files.
pub fn match_members<I, S>(paths: I) -> Vec<MatchedMember>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut matched = Vec::new();
    let mut skipped = 0usize;

    for path in paths {
        let path = path.as_ref();
        match match_member(path) {
            Some(member) => matched.push(member),
            None => {
                trace!("skipping {path}");
                skipped += 1;
            }
        }
    }

    debug!(
        "matched {} call/message files, skipped {} other members",
        matched.len(),
        skipped
    );
    matched
}

/// Converts a filename timestamp to ISO 8601 with an explicit UTC offset.
///
/// `2020-08-21T18_57_10Z` => `2020-08-21T18:57:10+00:00`
pub fn format_timestamp(raw: &str) -> String {
    let timestamp = raw.replace('_', ":");
    match timestamp.strip_suffix('Z') {
        Some(stripped) => format!("{stripped}+00:00"),
        None => timestamp,
    }
}
