use std::path::PathBuf;

use clap::{
    command, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgAction, ArgMatches, Command,
};

use crate::constants::{
    DIRECTORIES_HELP, IGNORE_ERRORS_HELP, LOCAL_LOGGING_HELP, LOG_FILE_DEFAULT, LOG_FILE_HELP,
    PATH_HELP, RECURSIVE_HELP, SOURCE_HELP, TARGET_HELP, VERBOSE_HELP,
};
use crate::errors::{generic_error, Result};
use crate::logging::LogLevel;
use crate::utils::find_project_folder;
use crate::workflow::ProcessingOptions;

/// Builds a boolean flag together with its `--no-` counterpart
///
/// Whichever of the two comes last on the command line wins.
fn switch(
    id: &'static str,
    negated_id: &'static str,
    short: char,
    long: &'static str,
    negated_long: &'static str,
    help: &'static str,
) -> [Arg; 2] {
    let positive = Arg::new(id)
        .short(short)
        .long(long)
        .help(help)
        .action(ArgAction::SetTrue)
        .overrides_with(negated_id);

    let negative = Arg::new(negated_id)
        .long(negated_long)
        .help(format!("Undo --{long}"))
        .action(ArgAction::SetTrue)
        .overrides_with(id);

    [positive, negative]
}

/// Defines the command-line interface
///
/// Defines the following arguments:
/// - `path`: File or directory whose names are converted
/// - `source` / `target`: Encodings to convert between
/// - `recursive`, `ignore_errors`, `directories`: Switches, each with a `--no-` form
/// - `verbose`: Increase verbosity level
/// - `log_file` / `log_locally`: Optional log file
pub fn build_command() -> Command {
    // names being repaired may not be valid UTF-8, so the path is kept as an OS string
    let arg_path = Arg::new("path")
        .help(PATH_HELP)
        .value_parser(value_parser!(PathBuf))
        .required(true);

    let arg_source = Arg::new("source")
        .short('s')
        .long("source")
        .help(SOURCE_HELP)
        .value_name("source")
        .required(true);

    let arg_target = Arg::new("target")
        .short('t')
        .long("target")
        .help(TARGET_HELP)
        .value_name("target")
        .required(true);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP)
        .value_name("file");

    // define arg for local logging
    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .action(ArgAction::SetTrue);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_path)
        .arg(arg_source)
        .arg(arg_target)
        .args(switch(
            "recursive",
            "no_recursive",
            'r',
            "recursive",
            "no-recursive",
            RECURSIVE_HELP,
        ))
        .args(switch(
            "ignore_errors",
            "no_ignore_errors",
            'i',
            "ignore-errors",
            "no-ignore-errors",
            IGNORE_ERRORS_HELP,
        ))
        .args(switch(
            "directories",
            "no_directories",
            'd',
            "directories",
            "no-directories",
            DIRECTORIES_HELP,
        ))
        .arg(log_file)
        .arg(log_locally)
        .arg(arg_verbose)
}

/// Parses the process arguments, exiting with a usage message on failure
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Collects the processing options from the command-line arguments
///
/// # Errors
/// Returns an error if a required argument is missing
pub fn get_processing_options(matches: &ArgMatches) -> Result<ProcessingOptions> {
    let missing = |id: &str| generic_error(&format!("Missing required argument: {id}"));
    let required = |id: &str| {
        matches
            .get_one::<String>(id)
            .cloned()
            .ok_or_else(|| missing(id))
    };

    Ok(ProcessingOptions {
        path: matches
            .get_one::<PathBuf>("path")
            .cloned()
            .ok_or_else(|| missing("path"))?,
        source: required("source")?,
        target: required("target")?,
        recursive: matches.get_flag("recursive"),
        ignore_errors: matches.get_flag("ignore_errors"),
        directories: matches.get_flag("directories"),
    })
}

/// Gets the verbosity level from the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Gets the log file path, empty when no log file was requested
///
/// Without `--log-locally` the file is placed in the per-user data directory.
pub fn get_log_file(matches: &ArgMatches) -> Result<String> {
    let filename = matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string());
    if filename.is_empty() || matches.get_flag("log_locally") {
        Ok(filename)
    } else {
        let folder = find_project_folder()?;
        let path = folder.data_dir().join(filename);
        let path_str = path
            .as_path()
            .to_str()
            .ok_or_else(|| generic_error(&format!("Failed to convert path to string: {:?}", path)))?;
        Ok(path_str.to_string())
    }
}
