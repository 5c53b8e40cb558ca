pub mod cli;
mod constants;
pub mod discovery;
pub mod errors;
pub mod logging;
pub mod recode;
mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::cli::{
        build_command, get_log_file, get_matches, get_processing_options, get_verbosity,
    };
    pub use crate::errors::{
        encoding_conversion_error, file_operation_error, generic_error, invalid_path_error,
        path_operation_error, unknown_encoding_error,
    };
    pub use crate::errors::{ConversionError, Error, Result};
    pub use crate::logging::{format_message, init_logger, LogLevel};
    pub use crate::workflow::{process_path, run, ProcessingOptions, WorkflowContext};
}
