//! Record parser for Google Voice call and message HTML.
//!
//! Takeout files are nearly XHTML, but contain bare `<br>` tags and
//! unescaped ampersands. Both are stripped before a strict XML parse; the
//! message bodies are never read, so losing them is fine.
//!
//! The parser looks for four `class` markers:
//!
//! ```html
//! <abbr class="duration" title="PT2M23S">(00:02:23)</abbr>
//! <abbr class="published" title="2020-06-14T12:40:38.000-04:00">...</abbr>
//! <div class="message">
//!     <abbr class="dt" title="2020-06-23T21:10:00.971-04:00">...</abbr>
//! </div>
//! ```

use chrono::{DateTime, FixedOffset};
use log::warn;
use roxmltree::{Document, Node, ParsingOptions};

use crate::core::models::{FileDetails, ThreadStats};
use crate::error::{HistoryError, Result};

/// Removes markup that a strict XML parser rejects.
pub fn sanitize(content: &str) -> String {
    content.replace("<br>", "").replace('&', "")
}

/// Decodes and parses one archive member.
pub fn parse_record(path: &str, bytes: Vec<u8>) -> Result<FileDetails> {
    let content = String::from_utf8(bytes).map_err(|source| HistoryError::Utf8 {
        path: path.to_string(),
        source,
    })?;
    parse_markup(path, &content)
}

/// Extracts call duration, call time and thread statistics from markup.
///
/// Missing markers produce absent fields; malformed markup or timestamps
/// fail with an error naming `path`.
pub fn parse_markup(path: &str, content: &str) -> Result<FileDetails> {
    let sanitized = sanitize(content);
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(&sanitized, options)
        .map_err(|source| HistoryError::markup(path, source))?;
    let root = doc.root_element();

    let mut details = FileDetails {
        call_duration: parse_call_duration(root),
        published: parse_call_datetime(path, root)?,
        thread: parse_messages(path, root)?,
    };

    if details.thread.is_some() && details.call_duration.is_some() {
        warn!("{path} has both call and message markup, ignoring call duration");
        details.call_duration = None;
    }

    Ok(details)
}

fn find_class<'a, 'input>(node: Node<'a, 'input>, class: &str) -> Option<Node<'a, 'input>> {
    node.descendants()
        .find(|n| n.is_element() && n.attribute("class") == Some(class))
}

/// `<abbr class="duration" title="PT2M23S">(00:02:23)</abbr>` => `00:02:23`
fn parse_call_duration(root: Node) -> Option<String> {
    let text = find_class(root, "duration")?.text()?;
    Some(text.trim_matches(|c| c == '(' || c == ')').to_string())
}

fn parse_call_datetime(path: &str, root: Node) -> Result<Option<DateTime<FixedOffset>>> {
    find_class(root, "published")
        .map_or(Ok(None), |element| parse_title(path, element))
}

fn parse_messages(path: &str, root: Node) -> Result<Option<ThreadStats>> {
    let messages: Vec<Node> = root
        .descendants()
        .filter(|n| n.is_element() && n.attribute("class") == Some("message"))
        .collect();

    let (Some(&first), Some(&last)) = (messages.first(), messages.last()) else {
        return Ok(None);
    };

    let first = parse_message_datetime(path, first)?;
    let last = parse_message_datetime(path, last)?;

    Ok(match (first, last) {
        (Some(first), Some(last)) => Some(ThreadStats {
            first,
            last,
            count: messages.len(),
        }),
        _ => None,
    })
}

/// `<abbr class="dt" title="2020-06-23T21:10:00.971-04:00">`
fn parse_message_datetime(path: &str, message: Node) -> Result<Option<DateTime<FixedOffset>>> {
    find_class(message, "dt").map_or(Ok(None), |element| parse_title(path, element))
}

fn parse_title(path: &str, element: Node) -> Result<Option<DateTime<FixedOffset>>> {
    let Some(title) = element.attribute("title") else {
        return Ok(None);
    };
    DateTime::parse_from_rfc3339(title.trim())
        .map(Some)
        .map_err(|source| HistoryError::timestamp(path, title, source))
}
