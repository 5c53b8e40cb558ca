//! Workflow context
//!
//! This module defines the options and statistics carried through a run.

use crate::recode::PassStats;

use super::engine::ProcessingOptions;

/// Statistics about the workflow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowStats {
    /// Number of files looked at
    pub files_processed: usize,
    /// Number of files renamed
    pub files_renamed: usize,
    /// Number of directories looked at
    pub directories_processed: usize,
    /// Number of directories renamed
    pub directories_renamed: usize,
    /// Number of names that could not be converted
    pub skipped: usize,
}

impl WorkflowStats {
    pub fn total_renamed(&self) -> usize {
        self.files_renamed + self.directories_renamed
    }

    pub fn total_processed(&self) -> usize {
        self.files_processed + self.directories_processed
    }
}

/// Context for the workflow
///
/// Holds the options a run was started with and what it did so far.
#[derive(Debug, Clone)]
pub struct WorkflowContext {
    /// The options the run was started with
    pub options: ProcessingOptions,
    /// Statistics about the processing
    pub stats: WorkflowStats,
}

impl WorkflowContext {
    pub fn new(options: ProcessingOptions) -> Self {
        WorkflowContext {
            options,
            stats: WorkflowStats::default(),
        }
    }

    /// Adds the counters of a finished files pass
    pub fn record_files_pass(&mut self, pass: PassStats) {
        self.stats.files_processed += pass.processed;
        self.stats.files_renamed += pass.renamed;
        self.stats.skipped += pass.skipped;
    }

    /// Adds the counters of a finished directories pass
    pub fn record_directories_pass(&mut self, pass: PassStats) {
        self.stats.directories_processed += pass.processed;
        self.stats.directories_renamed += pass.renamed;
        self.stats.skipped += pass.skipped;
    }
}
