use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Reason a single name could not be reinterpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The name on disk is not valid Unicode, so it has no characters to encode
    NotUnicode,
    /// The name contains characters the source encoding cannot represent
    Unencodable { encoding: &'static str },
    /// The encoded bytes are not a valid sequence in the target encoding
    Undecodable { encoding: &'static str },
    /// The converted text cannot be used as a single path component
    IllegalName { name: String },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::NotUnicode => write!(f, "name is not valid unicode"),
            ConversionError::Unencodable { encoding } => {
                write!(f, "name cannot be encoded as {encoding}")
            }
            ConversionError::Undecodable { encoding } => {
                write!(f, "bytes cannot be decoded as {encoding}")
            }
            ConversionError::IllegalName { name } => {
                write!(f, "converted name {name:?} is not a valid file name")
            }
        }
    }
}

impl StdError for ConversionError {}

/// Custom error type for the Name Recode application
#[derive(Debug)]
pub enum Error {
    /// The path given on the command line does not exist
    InvalidPath { path: PathBuf },
    /// The encoding label is unknown or cannot be used for names
    UnknownEncoding { label: String },
    /// The name of an entry could not be converted
    EncodingConversion {
        source: ConversionError,
        path: PathBuf,
    },
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error related to path operations
    PathOperation { path: PathBuf, operation: String },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPath { path } => {
                write!(f, "{} is not a valid path", path.display())
            }
            Error::UnknownEncoding { label } => {
                write!(f, "Unknown encoding: {label}")
            }
            Error::EncodingConversion { path, .. } => {
                write!(f, "Failed to convert name of file: {}", path.display())
            }
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::PathOperation { path, operation } => {
                write!(f, "Failed to {} path: {}", operation, path.display())
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::EncodingConversion { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::FileOperation {
            source: err,
            path: PathBuf::new(),
            operation: "perform operation on".to_string(),
        }
    }
}

/// Custom Result type for the Name Recode application
///
/// # Examples
/// ```
/// use name_recode::prelude::{Result, generic_error};
///
/// fn example_function() -> Result<String> {
///     // Return success
///     Ok("success".to_string())
///
///     // Or return an error
///     // Err(generic_error("Something went wrong"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an invalid path error
pub fn invalid_path_error(path: PathBuf) -> Error {
    Error::InvalidPath { path }
}

/// Helper function to create an unknown encoding error
pub fn unknown_encoding_error(label: &str) -> Error {
    Error::UnknownEncoding {
        label: label.to_string(),
    }
}

/// Helper function to create an encoding conversion error
pub fn encoding_conversion_error(err: ConversionError, path: PathBuf) -> Error {
    Error::EncodingConversion { source: err, path }
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a path operation error
pub fn path_operation_error(path: PathBuf, operation: &str) -> Error {
    Error::PathOperation {
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
