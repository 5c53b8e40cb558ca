/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// This is the name used for the per-user data directory that holds log files.
pub const APPLICATION: &str = "name_recode";

/// Help text for the path argument
pub const PATH_HELP: &str = "Valid file or directory path";

/// Help text for the source encoding option
pub const SOURCE_HELP: &str = "Source encoding of the file names";

/// Help text for the target encoding option
pub const TARGET_HELP: &str = "Target encoding of the file names";

/// Help text for the recursive option
pub const RECURSIVE_HELP: &str = "Descend into sub folders of the passed directory";

/// Help text for the ignore-errors option
pub const IGNORE_ERRORS_HELP: &str = "Skip names that cannot be converted instead of stopping";

/// Help text for the directories option
pub const DIRECTORIES_HELP: &str = "Rename directories as well, after all files";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file option
pub const LOG_FILE_HELP: &str = "Also write the log to this file";

/// Help text for the local logging option
pub const LOCAL_LOGGING_HELP: &str =
    "Place the log file relative to the current directory instead of the data directory";

/// Default log file name; empty means no log file
pub const LOG_FILE_DEFAULT: &str = "";

/// Notice printed after a successful rename
pub const RENAMED_NOTICE: &str = "file is renamed to:";

/// Notice printed when a name cannot be converted
pub const SKIPPED_NOTICE: &str = "file cannot be processed";
