use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use shellexpand::tilde;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{file_operation_error, generic_error, Result};

/// Expand a leading `~` to the user's home directory
///
/// Paths that are not valid UTF-8 are returned unchanged.
pub fn expand_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(text) => PathBuf::from(tilde(text).into_owned()),
        None => path.to_path_buf(),
    }
}

pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    let folder = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))?;

    if !folder.data_dir().exists() {
        create_dir_all(folder.data_dir()).map_err(|e| {
            file_operation_error(e, folder.data_dir().to_path_buf(), "create directory")
        })?;
    }
    Ok(folder)
}

/// Base name of a path as an owned display string, lossy for non-unicode names
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
