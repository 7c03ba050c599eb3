use crate::error::{BatchError, Result};
use crate::operation::{BatchRequest, Operation};
use crate::output::BatchReport;
use crate::preview::{simulate, BatchPreview};
use crate::rename::{plan_batch, rename_batch, PlannedRename};
use crate::scanner::{enumerate_files, occupied_names, resolve_directory, FileEntry};
use std::path::PathBuf;

/// A validated batch, ready to be previewed or executed.
#[derive(Debug, Clone)]
pub struct PreparedBatch {
    pub directory: PathBuf,
    pub operation: Operation,
    pub files: Vec<FileEntry>,
    pub planned: Vec<PlannedRename>,
}

/// Validate the request, enumerate the directory and plan every rename.
///
/// Fails with a notice (`NoFilesFound`, `NoMatchingFiles`) when there is
/// nothing to rename.
pub fn prepare_batch(request: &BatchRequest) -> Result<PreparedBatch> {
    let selected = request.validate()?;
    let directory = resolve_directory(selected)?;
    let files = enumerate_files(&directory)?;

    if files.is_empty() {
        return Err(BatchError::NoFilesFound { path: directory });
    }

    let planned = plan_batch(&files, &request.operation);
    if planned.is_empty() {
        if let Operation::Replace { find, .. } = &request.operation {
            return Err(BatchError::NoMatchingFiles {
                find: find.clone(),
                path: directory,
            });
        }
    }

    tracing::debug!(
        "Prepared {} for {} of {} files in {}",
        request.operation,
        planned.len(),
        files.len(),
        directory.display()
    );

    Ok(PreparedBatch {
        directory,
        operation: request.operation.clone(),
        files,
        planned,
    })
}

impl PreparedBatch {
    /// Number of files the batch will try to rename.
    pub fn len(&self) -> usize {
        self.planned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planned.is_empty()
    }

    /// Dry run against the directory as it is now.
    pub fn preview(&self) -> Result<BatchPreview> {
        let occupied = occupied_names(&self.directory)?;
        Ok(BatchPreview {
            directory: self.directory.clone(),
            operation: self.operation.clone(),
            rows: simulate(&occupied, &self.planned),
        })
    }

    /// Rename on disk. Per-file problems end up in the report, never as an error.
    pub fn execute(self) -> BatchReport {
        let result = rename_batch(&self.directory, &self.files, &self.operation);
        BatchReport {
            operation: self.operation,
            directory: self.directory,
            result,
        }
    }
}
