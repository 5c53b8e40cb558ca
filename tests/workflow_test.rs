use std::collections::HashMap;
use std::fs::{create_dir_all, File};
use std::io;
use std::path::{Path, PathBuf};

use name_recode::discovery::{Child, DirectoryLister, FsLister};
use name_recode::prelude::{process_path, Error, ProcessingOptions};
use name_recode::recode::Notice;
use tempfile::tempdir;

/// Lister that records which directories were listed
struct RecordingLister {
    listed: std::cell::RefCell<Vec<PathBuf>>,
}

impl DirectoryLister for RecordingLister {
    fn list(&self, directory: &Path) -> io::Result<Vec<Child>> {
        self.listed.borrow_mut().push(directory.to_path_buf());
        FsLister.list(directory)
    }
}

fn options(root: &Path) -> ProcessingOptions {
    ProcessingOptions::new(root, "windows-1252", "utf-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_bad_name_among_many_with_ignore_errors() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let names = ["1Ã¤.txt", "2Ã¶.txt", "3日本.txt", "4Ã¼.txt", "5.txt"];
        for name in names {
            File::create(temp_dir.path().join(name)).expect("Failed to create test file");
        }
        let mut notices: Vec<Notice> = Vec::new();

        let context = process_path(
            options(temp_dir.path()).ignore_errors(true),
            &FsLister,
            &mut notices,
        )
        .expect("Run should succeed");

        // N - 1 renames and a single skip notice
        assert_eq!(context.stats.files_renamed, names.len() - 1);
        assert_eq!(context.stats.skipped, 1);
        let skipped: Vec<&Notice> = notices
            .iter()
            .filter(|n| matches!(n, Notice::Skipped { .. }))
            .collect();
        assert_eq!(
            skipped,
            vec![&Notice::Skipped {
                name: "3日本.txt".to_string()
            }]
        );
        assert!(temp_dir.path().join("4ü.txt").exists());
    }

    #[test]
    fn test_one_bad_name_among_many_without_ignore_errors() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let names = ["1Ã¤.txt", "2Ã¶.txt", "3日本.txt", "4Ã¼.txt", "5.txt"];
        for name in names {
            File::create(temp_dir.path().join(name)).expect("Failed to create test file");
        }
        let mut notices: Vec<Notice> = Vec::new();

        let result = process_path(options(temp_dir.path()), &FsLister, &mut notices);

        match result {
            Err(Error::EncodingConversion { path, .. }) => {
                assert_eq!(path, temp_dir.path().join("3日本.txt"))
            }
            other => panic!("Expected a conversion error, got {other:?}"),
        }
        // Entries before the failure stay renamed, later ones are untouched
        assert_eq!(notices.len(), 2);
        assert!(temp_dir.path().join("2ö.txt").exists());
        assert!(temp_dir.path().join("4Ã¼.txt").exists());
    }

    #[test]
    fn test_files_pass_finishes_before_directories_pass() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let root = temp_dir.path();
        for dir in ["Ã¤", "Ã¤/Ã¶", "Ã¼"] {
            create_dir_all(root.join(dir)).expect("Failed to create test directory");
        }
        for file in ["Ã¤/f1.txt", "Ã¤/Ã¶/f2.txt", "Ã¼/f3.txt", "f4.txt"] {
            File::create(root.join(file)).expect("Failed to create test file");
        }
        let mut notices: Vec<Notice> = Vec::new();

        let context = process_path(
            options(root).recursive(true).directories(true),
            &FsLister,
            &mut notices,
        )
        .expect("Run should succeed");

        assert_eq!(context.stats.files_renamed, 4);
        assert_eq!(context.stats.directories_renamed, 3);

        // Once a directory notice appears, no file notice follows
        let first_directory = notices
            .iter()
            .position(|n| {
                matches!(n, Notice::Renamed { from, .. } if !from.to_string_lossy().ends_with(".txt"))
            })
            .expect("Expected a directory notice");
        assert!(notices[first_directory..].iter().all(|n| match n {
            Notice::Renamed { from, .. } => !from.to_string_lossy().ends_with(".txt"),
            Notice::Skipped { .. } => false,
        }));

        // Inner directories are renamed before the directories holding them
        assert_eq!(
            notices[first_directory],
            Notice::Renamed {
                from: root.join("Ã¤").join("Ã¶"),
                to: root.join("Ã¤").join("ö"),
            }
        );
        assert_eq!(
            notices.last(),
            Some(&Notice::Renamed {
                from: root.join("Ã¤"),
                to: root.join("ä"),
            })
        );
        assert!(root.join("ä").join("ö").join("f2.txt").exists());
        assert!(root.join("ü").join("f3.txt").exists());
    }

    #[test]
    fn test_non_recursive_run_never_lists_subdirectories() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        create_dir_all(temp_dir.path().join("sub")).expect("Failed to create test directory");
        let lister = RecordingLister {
            listed: std::cell::RefCell::new(Vec::new()),
        };
        let mut notices: Vec<Notice> = Vec::new();

        process_path(options(temp_dir.path()), &lister, &mut notices).expect("Run should succeed");

        assert_eq!(*lister.listed.borrow(), vec![temp_dir.path().to_path_buf()]);
    }

    #[test]
    fn test_fake_tree_without_filesystem_access_for_listing() {
        // Listing is faked, so only the resolved root needs to exist
        struct EmptyLister(HashMap<PathBuf, Vec<Child>>);

        impl DirectoryLister for EmptyLister {
            fn list(&self, directory: &Path) -> io::Result<Vec<Child>> {
                Ok(self.0.get(directory).cloned().unwrap_or_default())
            }
        }

        let temp_dir = tempdir().expect("Failed to create temp directory");
        let mut notices: Vec<Notice> = Vec::new();

        let context = process_path(
            options(temp_dir.path()).recursive(true),
            &EmptyLister(HashMap::new()),
            &mut notices,
        )
        .expect("Run should succeed");

        assert_eq!(context.stats.total_processed(), 0);
        assert!(notices.is_empty());
    }
}
