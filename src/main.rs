use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

use log_accumulator::{FileWriteMode, LogAccumulator, RenderFormat, RenderedLog};

/// Collect messages, one per input line, and render them as text, HTML or raw entries.
#[derive(Debug, Parser)]
#[command(name = "logacc", version)]
struct Args {
    /// Input file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Output format: raw, text or html (unknown names mean raw)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Message type as NAME=PATTERN; repeat in priority order
    #[arg(short = 't', long = "type", value_name = "NAME=PATTERN")]
    types: Vec<String>,

    #[arg(long)]
    no_timestamp: bool,

    /// chrono strftime pattern for timestamps
    #[arg(long)]
    date_format: Option<String>,

    #[arg(long)]
    separator: Option<String>,

    #[arg(short = 'n', long)]
    line_numbers: bool,

    /// Keep type markers in HTML messages
    #[arg(long)]
    show_type_marker: bool,

    #[arg(long)]
    file_label: Option<String>,

    #[arg(long)]
    function_label: Option<String>,

    #[arg(long)]
    hide_filename: bool,

    #[arg(long)]
    hide_function: bool,

    /// Write the rendering to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// write (truncate) or append
    #[arg(long, default_value = "write")]
    write_mode: String,

    #[arg(short, long)]
    verbose: bool,
}

fn setup_log4rs(verbose: bool) -> Result<()> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%Y-%m-%d %H:%M:%S)} - {l} - {m}{n}")))
        .build();

    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .context("invalid log4rs configuration")?;

    log4rs::init_config(config).context("failed to initialise logging")?;
    Ok(())
}

fn build_accumulator(args: &Args) -> Result<LogAccumulator> {
    let mut log = LogAccumulator::new();

    for spec in &args.types {
        let Some((name, pattern)) = spec.split_once('=') else {
            bail!("message type '{}' is not in NAME=PATTERN form", spec);
        };
        log.register_type(name, pattern);
    }

    log.set_include_timestamp(!args.no_timestamp);
    if let Some(format) = &args.date_format {
        log.set_date_format(format.as_str());
    }
    if let Some(separator) = &args.separator {
        log.set_timestamp_separator(separator.as_str());
    }
    log.set_include_line_numbers(args.line_numbers);
    log.set_show_type_marker(args.show_type_marker);
    log.set_show_filename(!args.hide_filename);
    log.set_show_function(!args.hide_function);
    if let Some(label) = &args.file_label {
        log.set_current_file(label.as_str());
    }
    if let Some(label) = &args.function_label {
        log.set_current_function(label.as_str());
    }
    log.set_file_write_mode(FileWriteMode::parse_or_truncate(&args.write_mode));

    Ok(log)
}

fn read_messages(log: &mut LogAccumulator, input: Option<&PathBuf>) -> Result<()> {
    let reader: Box<dyn BufRead> = match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open input {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    for line in reader.lines() {
        log.add(line.context("failed to read input")?);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_log4rs(args.verbose)?;

    let mut log = build_accumulator(&args)?;
    read_messages(&mut log, args.input.as_ref())?;
    log::info!("collected {} messages", log.len());

    let format = RenderFormat::parse_or_raw(&args.format);
    if let Some(path) = &args.output {
        log.try_write_to_file(path, format)?;
        return Ok(());
    }

    match log.render(format) {
        RenderedLog::Raw(entries) => {
            for entry in entries {
                println!("{:?}", entry);
            }
        }
        RenderedLog::Text(s) | RenderedLog::Html(s) => print!("{}", s),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_flags_keep_order() {
        let args = Args::parse_from(["logacc", "-t", "err=ERROR", "-t", "warn=ERR", "--no-timestamp"]);
        let log = build_accumulator(&args).unwrap();
        assert_eq!(log.message_types().classify("ERROR: x"), Some("err"));
        assert!(!log.config().include_timestamp);
    }

    #[test]
    fn test_malformed_type_flag_is_rejected() {
        let args = Args::parse_from(["logacc", "-t", "noequals"]);
        assert!(build_accumulator(&args).is_err());
    }

    #[test]
    fn test_unknown_write_mode_truncates() {
        let args = Args::parse_from(["logacc", "--write-mode", "sideways"]);
        let log = build_accumulator(&args).unwrap();
        assert_eq!(log.config().file_write_mode, FileWriteMode::Truncate);
    }
}
