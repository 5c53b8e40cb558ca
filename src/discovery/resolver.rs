//! Validation of the path the user asked to process

use std::path::{Path, PathBuf};

use log::debug;

use crate::discovery::EntryKind;
use crate::errors::{invalid_path_error, Result};
use crate::utils::expand_path;

/// A path that existed when it was resolved, with its kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    path: PathBuf,
    kind: EntryKind,
}

impl ResolvedPath {
    pub fn new(path: PathBuf, kind: EntryKind) -> Self {
        ResolvedPath { path, kind }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Checks that a user supplied path exists and classifies it
///
/// A leading `~` is expanded first. The path is otherwise kept as given, so
/// entries found below it carry the same prefix. It does not need to be valid
/// UTF-8.
///
/// # Errors
/// Returns `Error::InvalidPath` if nothing exists at the path
pub fn resolve_path(raw: impl AsRef<Path>) -> Result<ResolvedPath> {
    let path = expand_path(raw.as_ref());

    if !path.exists() {
        return Err(invalid_path_error(path));
    }

    let kind = if path.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::File
    };
    debug!("Resolved {} as {:?}", path.display(), kind);

    Ok(ResolvedPath { path, kind })
}
