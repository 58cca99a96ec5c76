//! Core data models for conversation records.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Output column, in CSV order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    /// The date & time of the log in UTC
    Timestamp,
    /// The local date of the log
    Date,
    /// The local time of the log
    Time,
    /// The type of the log (Received, Placed, Missed, Voicemail, Text)
    Type,
    /// A unique, anonymized value representing the contact's number or name
    ContactId,
    /// The name of the contact
    ContactName,
    /// The duration of calls in HH:MM:SS
    CallDuration,
    /// The duration of a text message thread in days
    MessageDays,
    /// The number of messages in a text message thread
    MessageCount,
}

impl Column {
    /// Returns every column in output order.
    pub fn all() -> &'static [Column] {
        &[
            Column::Timestamp,
            Column::Date,
            Column::Time,
            Column::Type,
            Column::ContactId,
            Column::ContactName,
            Column::CallDuration,
            Column::MessageDays,
            Column::MessageCount,
        ]
    }

    /// Header name of the column.
    pub fn name(self) -> &'static str {
        match self {
            Column::Timestamp => "timestamp",
            Column::Date => "date",
            Column::Time => "time",
            Column::Type => "type",
            Column::ContactId => "contact_id",
            Column::ContactName => "contact_name",
            Column::CallDuration => "call_duration",
            Column::MessageDays => "message_days",
            Column::MessageCount => "message_count",
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Column {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::all()
            .iter()
            .copied()
            .find(|column| column.name() == s.trim().to_lowercase())
            .ok_or_else(|| {
                let names: Vec<&str> = Column::all().iter().map(|c| c.name()).collect();
                format!(
                    "Unknown column: '{}'. Expected one of: {}",
                    s,
                    names.join(", ")
                )
            })
    }
}

/// Top-level Takeout directory a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directory {
    Calls,
    Spam,
}

impl std::str::FromStr for Directory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Calls" => Ok(Directory::Calls),
            "Spam" => Ok(Directory::Spam),
            _ => Err(format!("Unknown Takeout directory: '{s}'")),
        }
    }
}

/// Date and 12-hour time rendered in a timestamp's own UTC offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStamp {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `hh:mm AM`
    pub time: String,
}

impl LocalStamp {
    pub fn from_datetime(dt: &DateTime<FixedOffset>) -> Self {
        Self {
            date: dt.format("%Y-%m-%d").to_string(),
            time: dt.format("%I:%M %p").to_string(),
        }
    }
}

/// First/last timestamps and size of a message thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadStats {
    pub first: DateTime<FixedOffset>,
    pub last: DateTime<FixedOffset>,
    pub count: usize,
}

impl ThreadStats {
    /// Whole days between the first and last message, rounded down.
    pub fn days(&self) -> i64 {
        const MS_PER_DAY: i64 = 86_400_000;
        (self.last - self.first)
            .num_milliseconds()
            .div_euclid(MS_PER_DAY)
    }
}

/// Everything extracted from one member's markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileDetails {
    /// Display text of the `duration` element, e.g. `00:02:23`
    pub call_duration: Option<String>,
    /// `title` of the `published` element
    pub published: Option<DateTime<FixedOffset>>,
    /// Present when the member holds at least one message with readable timestamps
    pub thread: Option<ThreadStats>,
}

impl FileDetails {
    /// Local date/time shown for the record: thread start for messages,
    /// otherwise the published call time.
    pub fn local_stamp(&self) -> Option<LocalStamp> {
        self.thread
            .as_ref()
            .map(|thread| &thread.first)
            .or(self.published.as_ref())
            .map(LocalStamp::from_datetime)
    }
}

/// One call or message thread, as written to the CSV.
///
/// A record is never both a call and a thread: at most one of
/// `call_duration` and (`message_days`, `message_count`) is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationRecord {
    /// ISO-8601 UTC timestamp from the filename; the sort key
    pub timestamp: String,
    pub date: Option<String>,
    pub time: Option<String>,
    /// Log type exactly as it appears in the filename
    #[serde(rename = "type")]
    pub log_type: String,
    pub contact_id: Option<String>,
    pub contact_name: Option<String>,
    pub call_duration: Option<String>,
    pub message_days: Option<i64>,
    pub message_count: Option<usize>,
    /// Archive member path (never written)
    #[serde(skip)]
    pub path: String,
    /// Takeout directory (never written)
    #[serde(skip)]
    pub directory: Directory,
}

impl ConversationRecord {
    /// Renders one column; unset fields are empty.
    pub fn field(&self, column: Column) -> String {
        fn opt<T: ToString>(value: Option<&T>) -> String {
            value.map(ToString::to_string).unwrap_or_default()
        }

        match column {
            Column::Timestamp => self.timestamp.clone(),
            Column::Date => opt(self.date.as_ref()),
            Column::Time => opt(self.time.as_ref()),
            Column::Type => self.log_type.clone(),
            Column::ContactId => opt(self.contact_id.as_ref()),
            Column::ContactName => opt(self.contact_name.as_ref()),
            Column::CallDuration => opt(self.call_duration.as_ref()),
            Column::MessageDays => opt(self.message_days.as_ref()),
            Column::MessageCount => opt(self.message_count.as_ref()),
        }
    }

    /// Returns `true` if this record describes a message thread.
    pub fn is_thread(&self) -> bool {
        self.message_count.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_column_from_str() {
        assert_eq!("contact_name".parse::<Column>().unwrap(), Column::ContactName);
        assert_eq!("TYPE".parse::<Column>().unwrap(), Column::Type);
        let err = "contact".parse::<Column>().unwrap_err();
        assert!(err.contains("contact_id"));
    }

    #[test]
    fn test_local_stamp_uses_own_offset() {
        let stamp = LocalStamp::from_datetime(&dt("2020-06-14T12:40:38.000-04:00"));
        assert_eq!(stamp.date, "2020-06-14");
        assert_eq!(stamp.time, "12:40 PM");

        let stamp = LocalStamp::from_datetime(&dt("2020-06-23T21:10:00.971-04:00"));
        assert_eq!(stamp.date, "2020-06-23");
        assert_eq!(stamp.time, "09:10 PM");

        let stamp = LocalStamp::from_datetime(&dt("2020-01-05T00:05:00+00:00"));
        assert_eq!(stamp.time, "12:05 AM");
    }

    #[test]
    fn test_thread_days_floor() {
        let thread = ThreadStats {
            first: dt("2020-06-23T21:10:00-04:00"),
            last: dt("2020-06-25T21:09:59-04:00"),
            count: 3,
        };
        assert_eq!(thread.days(), 1);

        let same_day = ThreadStats {
            first: dt("2020-06-23T21:10:00-04:00"),
            last: dt("2020-06-23T23:00:00-04:00"),
            count: 2,
        };
        assert_eq!(same_day.days(), 0);

        let backwards = ThreadStats {
            first: dt("2020-06-23T21:10:00.500-04:00"),
            last: dt("2020-06-23T21:10:00-04:00"),
            count: 2,
        };
        assert_eq!(backwards.days(), -1);
    }

    #[test]
    fn test_local_stamp_prefers_thread_start() {
        let details = FileDetails {
            call_duration: None,
            published: Some(dt("2020-01-01T08:00:00-05:00")),
            thread: Some(ThreadStats {
                first: dt("2020-02-02T15:30:00-05:00"),
                last: dt("2020-02-03T15:30:00-05:00"),
                count: 2,
            }),
        };
        assert_eq!(details.local_stamp().unwrap().date, "2020-02-02");

        let call = FileDetails {
            thread: None,
            ..details
        };
        assert_eq!(call.local_stamp().unwrap().date, "2020-01-01");
        assert_eq!(FileDetails::default().local_stamp(), None);
    }

    #[test]
    fn test_record_fields_render_empty_when_unset() {
        let record = ConversationRecord {
            timestamp: "2020-08-21T18:57:10+00:00".into(),
            date: None,
            time: None,
            log_type: "Missed".into(),
            contact_id: Some("0123456789".into()),
            contact_name: None,
            call_duration: None,
            message_days: Some(0),
            message_count: Some(4),
            path: "Takeout/Voice/Calls/x.html".into(),
            directory: Directory::Calls,
        };
        assert_eq!(record.field(Column::Date), "");
        assert_eq!(record.field(Column::ContactName), "");
        assert_eq!(record.field(Column::MessageDays), "0");
        assert_eq!(record.field(Column::MessageCount), "4");
        assert!(record.is_thread());
    }
}
