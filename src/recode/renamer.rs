//! Rename pass
//!
//! This module converts the names of a sequence of entries and renames each
//! one on disk as soon as its new name is known.

use std::fmt;
use std::fs::rename;
use std::io::{self, ErrorKind, Write};
use std::path::PathBuf;

use colored::Colorize;
use log::{debug, trace, warn};

use crate::constants::{RENAMED_NOTICE, SKIPPED_NOTICE};
use crate::discovery::Entry;
use crate::errors::{
    encoding_conversion_error, file_operation_error, path_operation_error, ConversionError, Result,
};
use crate::logging::format_message;
use crate::recode::Codec;
use crate::utils::display_name;

/// Progress message shown to the user for one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The entry was renamed from one path to another
    Renamed { from: PathBuf, to: PathBuf },
    /// The entry name could not be converted and was left alone
    Skipped { name: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Renamed { from, to } => {
                write!(f, "{} {RENAMED_NOTICE} {}", from.display(), to.display())
            }
            Notice::Skipped { name } => write!(f, "{name} {SKIPPED_NOTICE}"),
        }
    }
}

/// Receives notices as entries are processed
pub trait NoticeSink {
    fn notify(&mut self, notice: Notice);
}

/// Collects notices in order, mostly for tests
impl NoticeSink for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}

/// Prints notices to stdout, highlighting paths on a terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl NoticeSink for ConsoleSink {
    fn notify(&mut self, notice: Notice) {
        let colored_message = match &notice {
            Notice::Renamed { from, to } => format!(
                "{} {RENAMED_NOTICE} {}",
                from.display().to_string().yellow(),
                to.display().to_string().green().bold()
            ),
            Notice::Skipped { name } => format!("{} {SKIPPED_NOTICE}", name.red()),
        };
        let line = format_message(&notice.to_string(), &colored_message);
        if let Err(e) = write_line(&mut io::stdout().lock(), &line) {
            warn!("Failed to print notice: {e}");
        }
    }
}

/// Writes one line, treating a closed reader (e.g. `recode ... | head`) as success
fn write_line<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    match writeln!(out, "{line}") {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}

/// The outcome of converting one entry's name
///
/// `result` holds the converted name exactly when the conversion succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion<'a> {
    pub entry: &'a Entry,
    pub result: std::result::Result<String, ConversionError>,
}

/// Converts the base name of an entry
///
/// # Errors
/// Returns an error if the entry path has no base name
pub fn convert_entry<'a>(entry: &'a Entry, codec: &Codec) -> Result<Conversion<'a>> {
    let name = entry
        .name()
        .ok_or_else(|| path_operation_error(entry.path().to_path_buf(), "get filename of"))?;

    Ok(Conversion {
        entry,
        result: codec.convert(name),
    })
}

/// Counters for one pass over a sequence of entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassStats {
    pub processed: usize,
    pub renamed: usize,
    pub skipped: usize,
}

/// Converts and renames every entry in order
///
/// Each rename is applied before the next entry is looked at. A name that
/// cannot be converted produces a `Skipped` notice when `ignore_errors` is
/// set and stops the pass otherwise. Rename failures always stop the pass.
///
/// # Errors
/// * `Error::EncodingConversion` for the first unconvertible name, unless
///   `ignore_errors` is set
/// * `Error::FileOperation` if a rename fails
pub fn process_entries<'a, I, S>(
    entries: I,
    codec: &Codec,
    ignore_errors: bool,
    sink: &mut S,
) -> Result<PassStats>
where
    I: IntoIterator<Item = &'a Entry>,
    S: NoticeSink + ?Sized,
{
    let mut stats = PassStats::default();

    for entry in entries {
        stats.processed += 1;
        let conversion = convert_entry(entry, codec)?;

        match conversion.result {
            Ok(converted_name) => {
                let target = entry.with_name(&converted_name);
                trace!("Renaming {} -> {}", entry.path().display(), target.display());

                rename(entry.path(), &target).map_err(|e| {
                    file_operation_error(e, entry.path().to_path_buf(), "rename")
                })?;

                stats.renamed += 1;
                sink.notify(Notice::Renamed {
                    from: entry.path().to_path_buf(),
                    to: target,
                });
            }
            Err(e) if ignore_errors => {
                debug!("Skipping {}: {e}", entry.path().display());
                stats.skipped += 1;
                sink.notify(Notice::Skipped {
                    name: display_name(entry.path()),
                });
            }
            Err(e) => return Err(encoding_conversion_error(e, entry.path().to_path_buf())),
        }
    }

    Ok(stats)
}
