//! Core implementation of the log accumulator.
//!
//! This module provides the `LogAccumulator` struct, which collects messages in
//! memory and renders them on demand, and `RenderedLog`, the result of a render.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Local};

use crate::config::{FileWriteMode, LogConfig, RenderFormat};
use crate::error::{LogError, Result};
use crate::formatter;
use crate::log_entry::{LogContext, LogEntry};
use crate::type_registry::TypeRegistry;

/// Output of `LogAccumulator::render`.
///
/// `Raw` borrows the stored entries; the other variants own a rendered string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedLog<'a> {
    Raw(&'a [LogEntry]),
    Text(String),
    Html(String),
}

impl<'a> RenderedLog<'a> {
    /// The rendered string, or `None` for `Raw`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RenderedLog::Raw(_) => None,
            RenderedLog::Text(s) | RenderedLog::Html(s) => Some(s.as_str()),
        }
    }

    /// The stored entries, or `None` for string renderings.
    pub fn as_entries(&self) -> Option<&'a [LogEntry]> {
        match self {
            RenderedLog::Raw(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn format(&self) -> RenderFormat {
        match self {
            RenderedLog::Raw(_) => RenderFormat::Raw,
            RenderedLog::Text(_) => RenderFormat::Text,
            RenderedLog::Html(_) => RenderFormat::Html,
        }
    }
}

/// An in-memory log that renders its entries as text or HTML.
///
/// Messages are appended with `add` and kept in insertion order until
/// `clear` discards them. Every entry records the wall-clock second it was
/// added at and the file/function labels current at that moment. Everything
/// else (timestamps on or off, date format, separators, line numbers, which
/// labels to show) is rendering configuration and applies to all entries,
/// old and new, at render time.
///
/// # Thread Safety
///
/// A `LogAccumulator` holds no locks. Share one between threads only behind
/// an external `Mutex`, or give each worker its own.
///
/// # Examples
///
/// ```
/// use log_accumulator::LogAccumulator;
///
/// let mut log = LogAccumulator::new();
/// log.set_include_timestamp(false);
/// log.set_show_filename(false);
/// log.set_show_function(false);
/// log.set_include_line_numbers(true);
///
/// log.add("first");
/// log.add("second");
///
/// let text = log.render("text");
/// assert_eq!(text.as_text(), Some("    1: first\n    2: second\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LogAccumulator {
    entries: Vec<LogEntry>,
    types: TypeRegistry,
    config: LogConfig,
    context: LogContext,
}

impl LogAccumulator {
    /// Creates an empty accumulator with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty accumulator with the given configuration.
    pub fn with_config(config: LogConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Appends `message`, stamped with the current second and the current
    /// file/function labels.
    pub fn add(&mut self, message: impl Into<String>) {
        let entry = LogEntry::new(message, &self.context);
        self.entries.push(entry);
    }

    /// Appends `message` with an explicit timestamp.
    ///
    /// Labels are captured exactly as in `add`. Useful when replaying
    /// messages whose time is already known.
    pub fn add_at(&mut self, message: impl Into<String>, timestamp: DateTime<Local>) {
        let entry = LogEntry::with_timestamp(message, timestamp, &self.context);
        self.entries.push(entry);
    }

    /// Discards every entry. Configuration and message types are kept.
    pub fn clear(&mut self) {
        log::debug!("clearing {} log entries", self.entries.len());
        self.entries.clear();
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    pub fn message_types(&self) -> &TypeRegistry {
        &self.types
    }

    /// Registers a message type identified by the regular expression `pattern`.
    ///
    /// Types are tried in registration order when rendering HTML, and the
    /// first match wins. See [`TypeRegistry`].
    pub fn register_type(&mut self, name: impl Into<String>, pattern: impl Into<String>) {
        self.types.register(name, pattern);
    }

    /// Sets the file label recorded with entries added from now on.
    pub fn set_current_file(&mut self, filename: impl Into<String>) {
        self.context.file = filename.into();
    }

    pub fn current_file(&self) -> &str {
        &self.context.file
    }

    /// Sets the function label recorded with entries added from now on.
    pub fn set_current_function(&mut self, function: impl Into<String>) {
        self.context.function = function.into();
    }

    pub fn current_function(&self) -> &str {
        &self.context.function
    }

    pub fn set_include_timestamp(&mut self, enabled: bool) {
        self.config.include_timestamp = enabled;
    }

    /// Sets the chrono strftime pattern used for timestamps.
    ///
    /// The pattern is not checked here; one chrono cannot format shows up
    /// verbatim in rendered output. Only `%` specifiers are expanded, so
    /// `YYYY`-style tokens are emitted literally: use `%Y`, not `YYYY`.
    pub fn set_date_format(&mut self, format: impl Into<String>) {
        self.config.date_format = format.into();
    }

    pub fn set_timestamp_separator(&mut self, separator: impl Into<String>) {
        self.config.timestamp_separator = separator.into();
    }

    pub fn set_include_line_numbers(&mut self, enabled: bool) {
        self.config.include_line_numbers = enabled;
    }

    /// Whether HTML message cells keep the text matched by their type pattern.
    pub fn set_show_type_marker(&mut self, enabled: bool) {
        self.config.show_type_marker_in_message = enabled;
    }

    pub fn set_show_filename(&mut self, enabled: bool) {
        self.config.show_filename = enabled;
    }

    pub fn set_show_function(&mut self, enabled: bool) {
        self.config.show_function = enabled;
    }

    /// Sets how `write_to_file` opens its target.
    ///
    /// Accepts a `FileWriteMode` or a mode name; names other than `"write"`
    /// and `"append"` select `FileWriteMode::Truncate`.
    pub fn set_file_write_mode(&mut self, mode: impl Into<FileWriteMode>) {
        self.config.file_write_mode = mode.into();
    }

    /// Renders the log in `format`.
    ///
    /// Accepts a `RenderFormat` or a format name. Names are matched
    /// case-insensitively and unknown names select `RenderFormat::Raw`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use log_accumulator::{LogAccumulator, RenderedLog};
    /// let mut log = LogAccumulator::new();
    /// log.add("x");
    ///
    /// assert_eq!(log.render("bogus"), log.render("raw"));
    /// assert!(matches!(log.render("HTML"), RenderedLog::Html(_)));
    /// ```
    pub fn render(&self, format: impl Into<RenderFormat>) -> RenderedLog<'_> {
        match format.into() {
            RenderFormat::Raw => RenderedLog::Raw(&self.entries),
            RenderFormat::Text => RenderedLog::Text(self.render_text()),
            RenderFormat::Html => RenderedLog::Html(self.render_html()),
        }
    }

    pub fn render_text(&self) -> String {
        formatter::render_text(&self.entries, &self.config)
    }

    pub fn render_html(&self) -> String {
        formatter::render_html(&self.entries, &self.config, &self.types)
    }

    /// Writes the rendered log to `path`, returning whether it succeeded.
    ///
    /// `raw` is written as text. The file is opened in the configured write
    /// mode. Failures are logged and reported only as `false`; use
    /// [`try_write_to_file`](Self::try_write_to_file) to get the cause.
    pub fn write_to_file(&self, path: impl AsRef<Path>, format: impl Into<RenderFormat>) -> bool {
        match self.try_write_to_file(path, format) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("{}", e);
                false
            }
        }
    }

    /// Writes the rendered log to `path`, reporting why it failed.
    pub fn try_write_to_file(
        &self,
        path: impl AsRef<Path>,
        format: impl Into<RenderFormat>,
    ) -> Result<()> {
        let path = path.as_ref();
        let rendered = match format.into() {
            RenderFormat::Html => self.render_html(),
            RenderFormat::Raw | RenderFormat::Text => self.render_text(),
        };

        let mut options = OpenOptions::new();
        match self.config.file_write_mode {
            FileWriteMode::Truncate => options.write(true).create(true).truncate(true),
            FileWriteMode::Append => options.append(true).create(true),
        };

        let mut file = options.open(path).map_err(|source| LogError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        file.write_all(rendered.as_bytes())
            .map_err(|source| LogError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        log::debug!(
            "wrote {} log entries ({} bytes) to {}",
            self.entries.len(),
            rendered.len(),
            path.display()
        );
        Ok(())
    }
}
