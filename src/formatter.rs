//! Text and HTML renderings of accumulated entries.
//!
//! Both renderers are pure functions of the entries and the configuration.
//! Only the HTML renderer consults the type registry; text output always
//! shows messages exactly as they were added.
//!
//! Text line layout:
//!
//! ```text
//! [<lineno>: ][<timestamp><separator>][<filename>/<function> : | <filename> : |  (<function>) : ]<message>\n
//! ```
//!
//! HTML layout:
//!
//! ```text
//! <table>
//! <tr>[<td class="log_timestamp">..</td>][<td class="log_filename">..</td>][<td class="log_function">..</td>]<td class="log_message[_<type>]">..</td></tr>
//! </table>
//! ```

use std::borrow::Cow;
use std::fmt::Write as _;

use chrono::{DateTime, Local};

use crate::config::LogConfig;
use crate::log_entry::LogEntry;
use crate::type_registry::TypeRegistry;

/// Formats `timestamp` with a chrono strftime `pattern`.
///
/// A pattern chrono rejects is echoed back verbatim rather than aborting the
/// rendering.
///
/// ```
/// # use chrono::{Local, TimeZone};
/// # use log_accumulator::formatter::format_timestamp;
/// let ts = Local.with_ymd_and_hms(2024, 5, 17, 8, 3, 9).unwrap();
/// assert_eq!(format_timestamp(&ts, "%Y-%m-%d %H:%M:%S"), "2024-05-17 08:03:09");
/// ```
pub fn format_timestamp(timestamp: &DateTime<Local>, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", timestamp.format(pattern)).is_err() {
        log::warn!("cannot format timestamp with date format '{}'", pattern);
        out.clear();
        out.push_str(pattern);
    }
    out
}

/// Renders one line per entry, each terminated by `\n`.
pub fn render_text(entries: &[LogEntry], config: &LogConfig) -> String {
    let mut out = String::new();

    for (index, entry) in entries.iter().enumerate() {
        if config.include_line_numbers {
            out.push_str(&format!("{:>5}: ", index + 1));
        }

        if config.include_timestamp {
            out.push_str(&format_timestamp(&entry.timestamp(), &config.date_format));
            out.push_str(&config.timestamp_separator);
        }

        match (config.show_filename, config.show_function) {
            (true, true) => {
                out.push_str(&format!("{}/{} : ", entry.filename(), entry.function()));
            }
            (true, false) => {
                out.push_str(&format!("{} : ", entry.filename()));
            }
            (false, true) => {
                out.push_str(&format!(" ({}) : ", entry.function()));
            }
            (false, false) => {}
        }

        out.push_str(entry.message());
        out.push('\n');
    }

    out
}

/// Renders an HTML table with one row per entry and no header row.
///
/// Messages matching a registered type get a `log_message_<type>` cell, and
/// unless `show_type_marker_in_message` is set, the first match of that
/// type's pattern is cut out of the displayed message. Content is written
/// as-is, without HTML escaping.
pub fn render_html(entries: &[LogEntry], config: &LogConfig, types: &TypeRegistry) -> String {
    let mut out = String::from("<table>\n");

    for entry in entries {
        out.push_str("<tr>");

        if config.include_timestamp {
            let timestamp = format_timestamp(&entry.timestamp(), &config.date_format);
            push_cell(&mut out, "log_timestamp", &timestamp);
        }

        let mut message = Cow::Borrowed(entry.message());
        let mut class_suffix = String::new();
        if let Some(type_name) = types.classify(entry.message()) {
            if !config.show_type_marker_in_message {
                message = types.strip_marker(entry.message(), type_name);
            }
            class_suffix = format!("_{}", type_name);
        }

        if config.show_filename {
            push_cell(&mut out, "log_filename", entry.filename());
        }

        if config.show_function {
            push_cell(&mut out, "log_function", entry.function());
        }

        push_cell(&mut out, &format!("log_message{}", class_suffix), &message);
        out.push_str("</tr>\n");
    }

    out.push_str("</table>\n");
    out
}

fn push_cell(out: &mut String, class: &str, content: &str) {
    out.push_str("<td class=\"");
    out.push_str(class);
    out.push_str("\">");
    out.push_str(content);
    out.push_str("</td>");
}
