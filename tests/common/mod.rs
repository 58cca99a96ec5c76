//! Shared fixtures: Takeout archives built in memory.

#![allow(dead_code)]

use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;

pub const HEAD: &str = r#"<?xml version="1.0" ?>
<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd">
<html xmlns="http://www.w3.org/1999/xhtml"><head><title>Google Voice</title></head><body>"#;
pub const TAIL: &str = "</body></html>";

/// A call page with an optional duration.
pub fn call_html(published: &str, duration: Option<&str>) -> String {
    let duration = duration
        .map(|d| format!(r#"<abbr class="duration" title="PT0S">({d})</abbr>"#))
        .unwrap_or_default();
    format!(
        r#"{HEAD}<div class="haudio"><span class="fn">Contact</span>
<abbr class="published" title="{published}">Somewhere in time</abbr>
{duration}</div>{TAIL}"#
    )
}

/// A text thread page with one message per timestamp.
pub fn thread_html(timestamps: &[&str]) -> String {
    let messages: String = timestamps
        .iter()
        .map(|ts| {
            format!(
                r#"<div class="message"><abbr class="dt" title="{ts}">Some day</abbr>:
<cite class="sender vcard"><a class="tel" href="tel:+15551234567"><span class="fn">Me</span></a></cite>:
<q>Fish &amp; chips? &lt;3<br>See you at 5 & bring cash</q></div>"#
            )
        })
        .collect();
    format!(r#"{HEAD}<div class="hChatLog hfeed">{messages}</div>{TAIL}"#)
}

/// Zips `members` into an in-memory archive, in the given order.
pub fn build_takeout(members: &[(&str, &str)]) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut zip = zip::ZipWriter::new(Cursor::new(&mut buf));
        for (name, content) in members {
            zip.start_file(*name, SimpleFileOptions::default())
                .expect("start zip member");
            zip.write_all(content.as_bytes()).expect("write zip member");
        }
        zip.finish().expect("finish zip");
    }
    buf
}

/// Writes an archive of `members` to `dir/takeout.zip`.
pub fn write_takeout(dir: &Path, members: &[(&str, &str)]) -> PathBuf {
    let path = dir.join("takeout.zip");
    fs::write(&path, build_takeout(members)).expect("write takeout");
    path
}
