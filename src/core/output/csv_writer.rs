//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::models::{Column, ConversationRecord};
use crate::error::{HistoryError, Result};

/// Writes records as comma-separated values.
///
/// # Format
/// - Delimiter: `,`
/// - Columns: `columns`, in the order given, header first
/// - Line terminator: `\n` on every platform
/// - Unset fields are empty; fields not in `columns` are never written
/// - Encoding: UTF-8
pub fn write_csv<W: Write>(
    records: &[ConversationRecord],
    writer: W,
    columns: &[Column],
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    writer.write_record(columns.iter().map(|c| c.name()))?;

    for record in records {
        writer.write_record(columns.iter().map(|&c| record.field(c)))?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes records to a file, creating or truncating it.
pub fn write_csv_file(
    records: &[ConversationRecord],
    output_path: impl AsRef<Path>,
    columns: &[Column],
) -> Result<()> {
    let file = File::create(output_path)?;
    write_csv(records, file, columns)
}

/// Renders records as a CSV string.
pub fn to_csv(records: &[ConversationRecord], columns: &[Column]) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(records, &mut buf, columns)?;
    String::from_utf8(buf).map_err(|source| HistoryError::Utf8 {
        path: "CSV output".to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Directory;
    use tempfile::NamedTempFile;

    fn call() -> ConversationRecord {
        ConversationRecord {
            timestamp: "2020-08-21T18:57:10+00:00".into(),
            date: Some("2020-08-21".into()),
            time: Some("12:00 PM".into()),
            log_type: "Received".into(),
            contact_id: Some("a1b2c3d4e5".into()),
            contact_name: Some("Smith, Alice".into()),
            call_duration: Some("00:02:23".into()),
            message_days: None,
            message_count: None,
            path: "Takeout/Voice/Calls/Smith, Alice - Received - 2020-08-21T18_57_10Z.html".into(),
            directory: Directory::Calls,
        }
    }

    #[test]
    fn test_header_and_row() {
        let csv = to_csv(&[call()], Column::all()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "timestamp,date,time,type,contact_id,contact_name,call_duration,message_days,message_count"
        );
        assert_eq!(
            lines.next().unwrap(),
            "2020-08-21T18:57:10+00:00,2020-08-21,12:00 PM,Received,a1b2c3d4e5,\"Smith, Alice\",00:02:23,,"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_line_feed_terminator() {
        let csv = to_csv(&[call(), call()], Column::all()).unwrap();
        assert!(!csv.contains('\r'));
        assert_eq!(csv.matches('\n').count(), 3);
    }

    #[test]
    fn test_extra_fields_never_written() {
        let csv = to_csv(&[call()], Column::all()).unwrap();
        assert!(!csv.contains("Takeout/Voice"));
        assert!(!csv.contains("Calls"));
    }

    #[test]
    fn test_column_subset() {
        let csv = to_csv(&[call()], &[Column::Timestamp, Column::Type]).unwrap();
        assert_eq!(csv, "timestamp,type\n2020-08-21T18:57:10+00:00,Received\n");
    }

    #[test]
    fn test_write_csv_file() {
        let temp_file = NamedTempFile::new().unwrap();
        write_csv_file(&[call()], temp_file.path(), Column::all()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.starts_with("timestamp,"));
        assert!(content.contains("a1b2c3d4e5"));
    }
}
