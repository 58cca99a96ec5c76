//! Command-line interface definition using clap.
//!
//! [`Args`] maps one-to-one onto a [`HistoryConfig`] plus the output
//! destination and log verbosity, which only matter to the binary.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;

use crate::config::{DEFAULT_DIGEST_SIZE, HistoryConfig};
use crate::core::models::Column;

/// Generate a CSV of call and message history from a Google Voice Takeout.
#[derive(Parser, Debug, Clone)]
#[command(name = "google-voice-history")]
#[command(version, about, long_about = None)]
#[command(after_help = "CSV columns:
  timestamp      The date & time of the log in UTC
  date           The local date of the log
  time           The local time of the log
  type           The type of the log (Received, Placed, Missed, Voicemail, Text)
  contact_id     A unique, anonymized value representing the contact's number or name
  contact_name   The name of the contact
  call_duration  The duration of calls in HH:MM:SS
  message_days   The duration of a text message thread in days
  message_count  The number of messages in a text message thread

EXAMPLES:
    google-voice-history takeout.zip > history.csv
    google-voice-history takeout.zip -o history.csv
    google-voice-history takeout.zip --exclude contact_name | head")]
pub struct Args {
    /// File path of Google Voice Takeout
    #[arg(value_name = "PATH")]
    pub takeout_path: PathBuf,

    /// Write the CSV to a file instead of standard output
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Leave a column out of the CSV (repeatable or comma-separated)
    #[arg(short = 'x', long, value_name = "COLUMN", value_delimiter = ',')]
    pub exclude: Vec<Column>,

    /// Anonymized id width in bytes (two hex characters each)
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_DIGEST_SIZE)]
    pub digest_size: usize,

    /// Log progress to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Library configuration for this invocation.
    pub fn config(&self) -> HistoryConfig {
        self.exclude
            .iter()
            .fold(
                HistoryConfig::new().with_digest_size(self.digest_size),
                |config, &column| config.with_excluded_column(column),
            )
    }

    /// Log level selected by `-v` flags.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_only() {
        let args = Args::try_parse_from(["google-voice-history", "takeout.zip"]).unwrap();
        assert_eq!(args.takeout_path, PathBuf::from("takeout.zip"));
        assert_eq!(args.output, None);
        assert_eq!(args.config(), HistoryConfig::default());
        assert_eq!(args.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn test_missing_path_is_error() {
        let err = Args::try_parse_from(["google-voice-history"]).unwrap_err();
        assert!(err.to_string().contains("PATH"));
    }

    #[test]
    fn test_exclude_and_digest_size() {
        let args = Args::try_parse_from([
            "google-voice-history",
            "takeout.zip",
            "-x",
            "contact_name,date",
            "--exclude",
            "time",
            "--digest-size",
            "8",
            "-vv",
        ])
        .unwrap();

        let config = args.config();
        assert_eq!(config.digest_size, 8);
        assert_eq!(
            config.excluded_columns,
            [Column::ContactName, Column::Date, Column::Time]
        );
        assert_eq!(args.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn test_unknown_column_rejected() {
        let result = Args::try_parse_from(["google-voice-history", "t.zip", "-x", "phone"]);
        assert!(result.is_err());
    }
}
