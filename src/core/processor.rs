//! Takeout processing pipeline.
//!
//! For every matched member: format the filename timestamp, classify and
//! anonymize the contact, parse the markup, and merge the results into one
//! [`ConversationRecord`]. Records are sorted by timestamp and the contact
//! counters are checked once all members are processed.

use std::path::Path;

use log::{debug, info};

use super::anonymize::Anonymizer;
use super::contact::{ContactStats, format_contact};
use super::models::ConversationRecord;
use crate::archive::{MemberSource, TakeoutArchive};
use crate::config::HistoryConfig;
use crate::error::Result;
use crate::parsing::filename::{MatchedMember, format_timestamp, match_members};
use crate::parsing::markup::parse_record;

/// Accumulated state for one run.
///
/// Owned by the caller so it can be inspected after the run or reset by
/// creating a new one.
#[derive(Debug, Clone, Default)]
pub struct RunState {
    pub anonymizer: Anonymizer,
    pub stats: ContactStats,
}

impl RunState {
    pub fn new(config: &HistoryConfig) -> Self {
        Self {
            anonymizer: Anonymizer::with_digest_size(config.digest_size),
            stats: ContactStats::new(),
        }
    }
}

/// Parses every call and message record in a Takeout ZIP file.
///
/// # Example
///
/// ```rust,no_run
/// use google_voice_history::config::HistoryConfig;
/// use google_voice_history::core::processor::parse_takeout;
///
/// let records = parse_takeout("takeout.zip", &HistoryConfig::new())?;
/// println!("{} records", records.len());
/// # Ok::<(), google_voice_history::HistoryError>(())
/// ```
pub fn parse_takeout(
    path: impl AsRef<Path>,
    config: &HistoryConfig,
) -> Result<Vec<ConversationRecord>> {
    config.validate()?;
    let mut takeout = TakeoutArchive::open(path)?;
    let mut state = RunState::new(config);
    process_source(&mut takeout, &mut state)
}

/// Runs the pipeline over any member source, threading `state` through.
pub fn process_source<S: MemberSource>(
    source: &mut S,
    state: &mut RunState,
) -> Result<Vec<ConversationRecord>> {
    let members = match_members(source.member_names());

    let mut records = Vec::with_capacity(members.len());
    for member in members {
        let bytes = source.read_member(&member.path)?;
        records.push(build_record(member, bytes, state)?);
    }

    sort_records(&mut records);
    state.stats.verify()?;

    let threads = records.iter().filter(|r| r.is_thread()).count();
    let stats = &state.stats;
    info!(
        "parsed {} records ({} threads, {} calls): {} numbers, {} names, {} missing contacts",
        records.len(),
        threads,
        records.len() - threads,
        stats.numbers,
        stats.names,
        stats.missing
    );
    Ok(records)
}

/// Merges filename fields, contact fields and markup fields into one record.
pub fn build_record(
    member: MatchedMember,
    bytes: Vec<u8>,
    state: &mut RunState,
) -> Result<ConversationRecord> {
    debug!("parsing {}", member.path);

    let timestamp = format_timestamp(&member.raw_timestamp);
    let contact = format_contact(&member.contact, &mut state.anonymizer, &mut state.stats)?;
    let details = parse_record(&member.path, bytes)?;
    let stamp = details.local_stamp();

    Ok(ConversationRecord {
        timestamp,
        date: stamp.as_ref().map(|s| s.date.clone()),
        time: stamp.map(|s| s.time),
        log_type: member.log_type,
        contact_id: contact.id,
        contact_name: contact.name,
        call_duration: details.call_duration,
        message_days: details.thread.as_ref().map(|t| t.days()),
        message_count: details.thread.as_ref().map(|t| t.count),
        path: member.path,
        directory: member.directory,
    })
}

/// Stable ascending sort on the ISO 8601 timestamp string.
pub fn sort_records(records: &mut [ConversationRecord]) {
    records.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
}
