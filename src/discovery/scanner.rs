//! Directory scanning functionality
//!
//! This module walks a resolved path and collects the files and directories
//! whose names should be converted.

use std::ffi::OsString;
use std::fs::read_dir;
use std::io;
use std::path::Path;

use log::{debug, trace, warn};

use crate::discovery::{Entry, ResolvedPath};
use crate::errors::{file_operation_error, Result};

/// One child of a listed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Child {
    /// Base name of the child
    pub name: OsString,
    /// Whether the child is a directory, following symbolic links
    pub is_dir: bool,
    /// Whether the child itself is a symbolic link
    pub is_symlink: bool,
}

impl Child {
    pub fn file(name: impl Into<OsString>) -> Self {
        Child {
            name: name.into(),
            is_dir: false,
            is_symlink: false,
        }
    }

    pub fn directory(name: impl Into<OsString>) -> Self {
        Child {
            name: name.into(),
            is_dir: true,
            is_symlink: false,
        }
    }
}

/// Lists the immediate children of a directory
pub trait DirectoryLister {
    fn list(&self, directory: &Path) -> io::Result<Vec<Child>>;
}

/// Lists directories on the real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, directory: &Path) -> io::Result<Vec<Child>> {
        let mut children = Vec::new();

        for entry in read_dir(directory)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            let is_symlink = file_type.is_symlink();
            // A link counts as a directory when its target is one
            let is_dir = if is_symlink {
                entry.path().is_dir()
            } else {
                file_type.is_dir()
            };

            children.push(Child {
                name: entry.file_name(),
                is_dir,
                is_symlink,
            });
        }

        Ok(children)
    }
}

/// Files and directories found under a resolved path, in walk order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileTree {
    pub files: Vec<Entry>,
    pub directories: Vec<Entry>,
}

impl FileTree {
    pub fn len(&self) -> usize {
        self.files.len() + self.directories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.directories.is_empty()
    }
}

/// Walks a resolved path and collects its entries
///
/// A file yields itself as the only entry. A directory yields its children,
/// and with `recursive` every descendant. Children of each directory are
/// sorted by name and a directory is always listed before its descendants.
/// Symbolic links to directories are listed but not followed.
///
/// # Errors
/// Returns an error if the starting directory cannot be listed. Nested
/// directories that cannot be listed are skipped with a warning.
pub fn scan_tree<L: DirectoryLister + ?Sized>(
    root: &ResolvedPath,
    recursive: bool,
    lister: &L,
) -> Result<FileTree> {
    let mut tree = FileTree::default();

    if !root.is_directory() {
        tree.files.push(Entry::file(root.path()));
        return Ok(tree);
    }

    debug!(
        "Scanning directory{}: {}",
        if recursive { " recursively" } else { "" },
        root.path().display()
    );

    let children = lister
        .list(root.path())
        .map_err(|e| file_operation_error(e, root.path().to_path_buf(), "read directory"))?;
    walk(root.path(), children, recursive, lister, &mut tree);

    debug!(
        "Found {} files and {} directories",
        tree.files.len(),
        tree.directories.len()
    );

    Ok(tree)
}

fn walk<L: DirectoryLister + ?Sized>(
    directory: &Path,
    mut children: Vec<Child>,
    recursive: bool,
    lister: &L,
    tree: &mut FileTree,
) {
    children.sort_by(|a, b| a.name.cmp(&b.name));

    let mut descend = Vec::new();
    for child in children {
        let path = directory.join(&child.name);
        trace!("Found {}", path.display());

        if child.is_dir {
            if !child.is_symlink {
                descend.push(path.clone());
            }
            tree.directories.push(Entry::directory(path));
        } else {
            tree.files.push(Entry::file(path));
        }
    }

    if !recursive {
        return;
    }

    for subdirectory in descend {
        match lister.list(&subdirectory) {
            Ok(grandchildren) => walk(&subdirectory, grandchildren, recursive, lister, tree),
            Err(e) => warn!("Skipping {}: {e}", subdirectory.display()),
        }
    }
}
