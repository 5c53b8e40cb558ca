//! Entries discovered while walking a path

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Whether an entry is a file or a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Anything that is not a directory
    File,
    /// A directory, or a symbolic link pointing at one
    Directory,
}

/// A file or directory pending a possible rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    path: PathBuf,
    kind: EntryKind,
}

impl Entry {
    pub fn new(path: PathBuf, kind: EntryKind) -> Self {
        Entry { path, kind }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Entry::new(path.into(), EntryKind::File)
    }

    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Entry::new(path.into(), EntryKind::Directory)
    }

    /// Full path of the entry, prefixed with the path the walk started from
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Base name of the entry
    pub fn name(&self) -> Option<&OsStr> {
        self.path.file_name()
    }

    /// Directory containing the entry
    ///
    /// Empty for a bare relative name, so joining onto it yields a bare name again.
    pub fn parent(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Path the entry would have under a new base name
    pub fn with_name(&self, name: &str) -> PathBuf {
        self.parent().join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_name_and_parent() {
        let entry = Entry::file("/music/albums/cafÃ©.mp3");

        assert_eq!(entry.name(), Some(OsStr::new("cafÃ©.mp3")));
        assert_eq!(entry.parent(), Path::new("/music/albums"));
        assert!(!entry.is_directory());
    }

    #[test]
    fn test_entry_with_name_keeps_parent() {
        let entry = Entry::directory("base/sub/old");

        assert_eq!(entry.with_name("new"), PathBuf::from("base/sub/new"));
        assert_eq!(entry.kind(), EntryKind::Directory);
    }

    #[test]
    fn test_bare_relative_name() {
        let entry = Entry::file("plain.txt");

        assert_eq!(entry.parent(), Path::new(""));
        assert_eq!(entry.with_name("other.txt"), PathBuf::from("other.txt"));
    }
}
