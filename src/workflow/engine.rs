//! Workflow engine
//!
//! This module contains the engine that orchestrates the workflow steps.

use std::path::PathBuf;

use log::{debug, info};

use crate::discovery::{DirectoryLister, FsLister, resolve_path, scan_tree};
use crate::errors::Result;
use crate::recode::{Codec, ConsoleSink, NoticeSink, process_entries};

use super::context::WorkflowContext;

/// Options for processing a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingOptions {
    /// File or directory to process, as given by the user
    pub path: PathBuf,
    /// Encoding the names are encoded with
    pub source: String,
    /// Encoding the resulting bytes are decoded with
    pub target: String,
    /// Whether to descend into subdirectories
    pub recursive: bool,
    /// Whether unconvertible names are skipped instead of stopping the run
    pub ignore_errors: bool,
    /// Whether directories are renamed as well, after all files
    pub directories: bool,
}

impl ProcessingOptions {
    /// Options with every flag switched off
    pub fn new(path: impl Into<PathBuf>, source: &str, target: &str) -> Self {
        ProcessingOptions {
            path: path.into(),
            source: source.to_string(),
            target: target.to_string(),
            recursive: false,
            ignore_errors: false,
            directories: false,
        }
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn ignore_errors(mut self, ignore_errors: bool) -> Self {
        self.ignore_errors = ignore_errors;
        self
    }

    pub fn directories(mut self, directories: bool) -> Self {
        self.directories = directories;
        self
    }
}

/// Processes a path on the real filesystem, printing notices to stdout
pub fn run(options: ProcessingOptions) -> Result<WorkflowContext> {
    process_path(options, &FsLister, &mut ConsoleSink)
}

/// Processes a path
///
/// This function orchestrates the workflow steps:
/// 1. Check that the path exists
/// 2. Resolve both encodings
/// 3. Collect the files (and directories) under the path
/// 4. Convert and rename every file
/// 5. If requested, convert and rename every directory, deepest first
///
/// Nothing is renamed before steps 1 to 3 have succeeded.
///
/// # Errors
/// Returns the first fatal error. Renames done before it are kept.
pub fn process_path<L, S>(
    options: ProcessingOptions,
    lister: &L,
    sink: &mut S,
) -> Result<WorkflowContext>
where
    L: DirectoryLister + ?Sized,
    S: NoticeSink + ?Sized,
{
    // Step 1: Check the path
    let root = resolve_path(&options.path)?;

    // Step 2: Resolve the encodings
    let codec = Codec::from_labels(&options.source, &options.target)?;
    debug!(
        "Converting names from {} to {}",
        codec.source().name(),
        codec.target().name()
    );

    // Step 3: Collect the entries
    let tree = scan_tree(&root, options.recursive, lister)?;

    let mut context = WorkflowContext::new(options);

    // Step 4: Files first, so their recorded parent paths stay valid
    let files_pass = process_entries(&tree.files, &codec, context.options.ignore_errors, sink)?;
    context.record_files_pass(files_pass);

    // Step 5: Directories, children before parents
    if context.options.directories {
        let directories_pass = process_entries(
            tree.directories.iter().rev(),
            &codec,
            context.options.ignore_errors,
            sink,
        )?;
        context.record_directories_pass(directories_pass);
    }

    info!(
        "Renamed {} of {} entries{}",
        context.stats.total_renamed(),
        context.stats.total_processed(),
        if context.stats.skipped > 0 {
            format!(", skipped {}", context.stats.skipped)
        } else {
            String::new()
        }
    );

    Ok(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::recode::Notice;
    use std::fs::{File, create_dir_all};
    use tempfile::tempdir;

    #[test]
    fn test_processing_options_builder() {
        let options = ProcessingOptions::new("d", "latin1", "utf-8")
            .recursive(true)
            .directories(true);

        assert!(options.recursive);
        assert!(options.directories);
        assert!(!options.ignore_errors);
    }

    #[test]
    fn test_missing_path_stops_before_anything_else() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("nope");
        let options = ProcessingOptions::new(&missing, "klingon", "utf-8");
        let mut notices: Vec<Notice> = Vec::new();

        let result = process_path(options, &FsLister, &mut notices);

        // The path is checked before the encodings
        assert!(matches!(result, Err(Error::InvalidPath { .. })));
    }

    #[test]
    fn test_unknown_encoding_renames_nothing() {
        let temp_dir = tempdir().unwrap();
        File::create(temp_dir.path().join("cafÃ©.txt")).unwrap();
        let options = ProcessingOptions::new(temp_dir.path(), "latin1", "nope");
        let mut notices: Vec<Notice> = Vec::new();

        let result = process_path(options, &FsLister, &mut notices);

        assert!(matches!(result, Err(Error::UnknownEncoding { .. })));
        assert!(notices.is_empty());
        assert!(temp_dir.path().join("cafÃ©.txt").exists());
    }

    #[test]
    fn test_directories_are_renamed_after_files() {
        let temp_dir = tempdir().unwrap();
        let garbled_dir = temp_dir.path().join("ÄŒesko");
        create_dir_all(&garbled_dir).unwrap();
        File::create(garbled_dir.join("Å¾Ã¡ba.txt")).unwrap();
        let options = ProcessingOptions::new(temp_dir.path(), "cp1252", "utf-8")
            .recursive(true)
            .directories(true);
        let mut notices: Vec<Notice> = Vec::new();

        let context = process_path(options, &FsLister, &mut notices).unwrap();

        assert_eq!(context.stats.files_renamed, 1);
        assert_eq!(context.stats.directories_renamed, 1);
        assert_eq!(
            notices,
            vec![
                Notice::Renamed {
                    from: garbled_dir.join("Å¾Ã¡ba.txt"),
                    to: garbled_dir.join("žába.txt"),
                },
                Notice::Renamed {
                    from: garbled_dir.clone(),
                    to: temp_dir.path().join("Česko"),
                },
            ]
        );
        assert!(temp_dir.path().join("Česko").join("žába.txt").exists());
    }

    #[test]
    fn test_directories_untouched_without_flag() {
        let temp_dir = tempdir().unwrap();
        create_dir_all(temp_dir.path().join("ÄŒesko")).unwrap();
        let options = ProcessingOptions::new(temp_dir.path(), "cp1252", "utf-8")
            .recursive(true);
        let mut notices: Vec<Notice> = Vec::new();

        let context = process_path(options, &FsLister, &mut notices).unwrap();

        assert_eq!(context.stats.total_processed(), 0);
        assert!(notices.is_empty());
        assert!(temp_dir.path().join("ÄŒesko").exists());
    }
}
