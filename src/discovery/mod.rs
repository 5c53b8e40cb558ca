//! File discovery module
//!
//! This module contains components for validating the starting path and
//! walking it to find the entries whose names should be converted.

mod entry;
mod resolver;
mod scanner;

pub use entry::{Entry, EntryKind};
pub use resolver::{ResolvedPath, resolve_path};
pub use scanner::{Child, DirectoryLister, FileTree, FsLister, scan_tree};
