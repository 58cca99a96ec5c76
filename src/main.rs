//! # google-voice-history CLI
//!
//! Reads a Google Voice Takeout and writes the call and message history CSV
//! to standard output (or `--output`). Nothing is written until the whole
//! archive has been processed.

use std::io;
use std::process;

use clap::Parser as ClapParser;
use log::info;

use google_voice_history::HistoryError;
use google_voice_history::cli::Args;
use google_voice_history::core::{parse_takeout, write_csv, write_csv_file};

fn main() {
    let args = <Args as ClapParser>::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    if let Err(e) = run(&args) {
        // `google-voice-history takeout.zip | head` closes stdout early
        if e.is_broken_pipe() {
            process::exit(0);
        }
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), HistoryError> {
    let config = args.config();
    let records = parse_takeout(&args.takeout_path, &config)?;
    let columns = config.columns();

    match &args.output {
        Some(path) => {
            write_csv_file(&records, path, &columns)?;
            info!("wrote {} records to {}", records.len(), path.display());
        }
        None => write_csv(&records, io::stdout().lock(), &columns)?,
    }

    Ok(())
}
