use std::fmt;

/// Separator placed between a formatted timestamp and the rest of a text line.
pub const DEFAULT_SEPARATOR: &str = "  ---  ";

/// Default timestamp pattern, in chrono strftime syntax.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Label recorded for entries added before any file/function label is set.
pub const UNKNOWN_LABEL: &str = "unknown";

/// How `write_to_file` opens its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileWriteMode {
    /// Create the file, discarding any previous content.
    #[default]
    Truncate,
    /// Create the file if needed and add to the end of it.
    Append,
}

impl FileWriteMode {
    /// Parses a write-mode name, falling back to `Truncate`.
    ///
    /// `"write"` and `"append"` are recognised. Any other input silently
    /// selects `Truncate`.
    ///
    /// ```
    /// # use log_accumulator::FileWriteMode;
    /// assert_eq!(FileWriteMode::parse_or_truncate("append"), FileWriteMode::Append);
    /// assert_eq!(FileWriteMode::parse_or_truncate("bogus"), FileWriteMode::Truncate);
    /// ```
    pub fn parse_or_truncate(name: &str) -> Self {
        match name {
            "append" => FileWriteMode::Append,
            _ => FileWriteMode::Truncate,
        }
    }
}

impl From<&str> for FileWriteMode {
    fn from(name: &str) -> Self {
        FileWriteMode::parse_or_truncate(name)
    }
}

/// Output format selector for `render` and `write_to_file`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    /// The stored entries themselves, unformatted.
    #[default]
    Raw,
    /// One line of text per entry.
    Text,
    /// An HTML table with one row per entry.
    Html,
}

impl RenderFormat {
    /// Parses a format name case-insensitively, falling back to `Raw`.
    ///
    /// ```
    /// # use log_accumulator::RenderFormat;
    /// assert_eq!(RenderFormat::parse_or_raw("HTML"), RenderFormat::Html);
    /// assert_eq!(RenderFormat::parse_or_raw("bogus"), RenderFormat::Raw);
    /// ```
    pub fn parse_or_raw(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "text" => RenderFormat::Text,
            "html" => RenderFormat::Html,
            _ => RenderFormat::Raw,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RenderFormat::Raw => "raw",
            RenderFormat::Text => "text",
            RenderFormat::Html => "html",
        }
    }
}

impl From<&str> for RenderFormat {
    fn from(name: &str) -> Self {
        RenderFormat::parse_or_raw(name)
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering options of a `LogAccumulator`.
///
/// None of these fields are stored with entries, so changing them affects
/// every later rendering, including of entries added earlier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub include_timestamp: bool,
    pub timestamp_separator: String,
    pub date_format: String,
    pub include_line_numbers: bool,
    /// Keep the text matched by a type pattern in HTML message cells.
    pub show_type_marker_in_message: bool,
    pub show_filename: bool,
    pub show_function: bool,
    pub file_write_mode: FileWriteMode,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            include_timestamp: true,
            timestamp_separator: DEFAULT_SEPARATOR.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            include_line_numbers: false,
            show_type_marker_in_message: false,
            show_filename: true,
            show_function: true,
            file_write_mode: FileWriteMode::Truncate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LogConfig::default();
        assert!(config.include_timestamp);
        assert_eq!(config.timestamp_separator, "  ---  ");
        assert_eq!(config.date_format, "%Y-%m-%d %H:%M:%S");
        assert!(!config.include_line_numbers);
        assert!(!config.show_type_marker_in_message);
        assert!(config.show_filename);
        assert!(config.show_function);
        assert_eq!(config.file_write_mode, FileWriteMode::Truncate);
    }

    #[test]
    fn test_format_names_ignore_case() {
        assert_eq!(RenderFormat::parse_or_raw("Text"), RenderFormat::Text);
        assert_eq!(RenderFormat::parse_or_raw("hTmL"), RenderFormat::Html);
        assert_eq!(RenderFormat::parse_or_raw("RAW"), RenderFormat::Raw);
        assert_eq!(RenderFormat::parse_or_raw(""), RenderFormat::Raw);
    }

    #[test]
    fn test_write_mode_names_are_exact() {
        assert_eq!(FileWriteMode::from("write"), FileWriteMode::Truncate);
        assert_eq!(FileWriteMode::from("append"), FileWriteMode::Append);
        // Anything else, including a differently-cased "append", truncates
        assert_eq!(FileWriteMode::from("APPEND"), FileWriteMode::Truncate);
        assert_eq!(FileWriteMode::from("bogus"), FileWriteMode::Truncate);
    }
}
