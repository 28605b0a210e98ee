//! # Log Accumulator
//!
//! An in-process log that collects messages in memory and renders them on
//! demand as plain text, as an HTML table, or as the raw entry list.
//!
//! ## Key Features
//!
//! * Append-only entries, each stamped with its wall-clock second
//! * File/function provenance labels captured when an entry is added
//! * Rendering options (timestamps, date format, separators, line numbers,
//!   label visibility) that can change at any time and apply on render
//! * Regex-based message types that tag HTML rows and can strip their own
//!   marker text from the displayed message
//! * Single-shot file output in truncate or append mode
//!
//! ## Main Components
//!
//! * `LogAccumulator`: entry store, configuration and render dispatch
//! * `TypeRegistry`: ordered, first-match-wins message classification
//! * `formatter`: the text and HTML renderers
//!
//! ## Quick Start
//!
//! ```
//! use log_accumulator::LogAccumulator;
//!
//! let mut log = LogAccumulator::new();
//! log.set_include_timestamp(false);
//! log.register_type("error", "^ERROR: ");
//!
//! log.set_current_file("db.rs");
//! log.set_current_function("connect");
//! log.add("ERROR: connection refused");
//!
//! assert_eq!(log.render_text(), "db.rs/connect : ERROR: connection refused\n");
//! assert!(log
//!     .render_html()
//!     .contains("<td class=\"log_message_error\">connection refused</td>"));
//! ```

pub mod config;
pub mod error;
pub mod formatter;
pub mod log_accumulator;
pub mod log_entry;
pub mod type_registry;

pub use config::{FileWriteMode, LogConfig, RenderFormat};
pub use error::LogError;
pub use log_accumulator::{LogAccumulator, RenderedLog};
pub use log_entry::{LogContext, LogEntry};
pub use type_registry::TypeRegistry;
