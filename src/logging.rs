//! Diagnostic logging
//!
//! Log records go to stderr and, optionally, to a log file. Stdout only ever
//! carries rename notices, so the output of a run can be piped or diffed.

use anyhow::Result;
use chrono::SecondsFormat;
use fern::colors::{Color, ColoredLevelConfig};
use fern::Dispatch;
use log::{Level, LevelFilter};

/// How much is logged, raised by repeating `-v`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warning,
    /// Run summary, failures and skipped directories
    Info,
    /// Resolved path and encodings, every rename
    Debug,
    /// Every entry found while walking the tree
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }

    /// `-v` count to level: none is Info, one is Debug, more is Trace
    pub fn from_occurrences(occurrences: u8) -> Self {
        match occurrences {
            0 => LogLevel::Info,
            1 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

/// Installs the global logger
///
/// `log_file` is appended to when it is not empty. Console lines are coloured
/// by level only when stderr is a terminal.
pub fn init_logger(verbosity: LogLevel, log_file: &str) -> Result<()> {
    let level = verbosity.to_level_filter();
    let mut logger = Dispatch::new().level(level).chain(console_dispatch(level));

    if !log_file.is_empty() {
        let file = Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    chrono::Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(level)
            .chain(fern::log_file(log_file)?);
        logger = logger.chain(file);
    }

    logger.apply()?;
    log::debug!("Logging at {verbosity:?}");

    Ok(())
}

fn console_dispatch(level: LevelFilter) -> Dispatch {
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::White)
        .debug(Color::White)
        .trace(Color::BrightBlack);
    let colorize = atty::is(atty::Stream::Stderr);

    Dispatch::new()
        .format(move |out, message, record| {
            let line = console_line(record.level(), &message.to_string());
            if colorize {
                out.finish(format_args!(
                    "\x1B[{}m{}\x1B[0m",
                    colors.get_color(&record.level()).to_fg_str(),
                    line
                ))
            } else {
                out.finish(format_args!("{line}"))
            }
        })
        .level(level)
        .chain(std::io::stderr())
}

/// Prefixes warnings and errors so they stand out from the progress lines
fn console_line(level: Level, message: &str) -> String {
    match level {
        Level::Error => format!("error: {message}"),
        Level::Warn => format!("warning: {message}"),
        _ => message.to_string(),
    }
}

/// Picks the coloured variant of a notice when stdout is a terminal
pub fn format_message(message: &str, colored_message: &str) -> String {
    if atty::is(atty::Stream::Stdout) {
        colored_message.to_string()
    } else {
        message.to_string()
    }
}
