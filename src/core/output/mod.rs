//! Output writers.
//!
//! - [`write_csv`] - CSV to any [`std::io::Write`] (stdout, a file, a buffer)
//! - [`write_csv_file`] - CSV to a path
//! - [`to_csv`] - CSV as a `String`
//!
//! # Example
//!
//! ```rust
//! use google_voice_history::core::models::Column;
//! use google_voice_history::core::output::to_csv;
//!
//! let csv = to_csv(&[], Column::all())?;
//! assert_eq!(csv, "timestamp,date,time,type,contact_id,contact_name,call_duration,message_days,message_count\n");
//! # Ok::<(), google_voice_history::HistoryError>(())
//! ```

mod csv_writer;

pub use csv_writer::{to_csv, write_csv, write_csv_file};
