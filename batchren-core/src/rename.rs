use crate::operation::Operation;
use crate::scanner::FileEntry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// A file the operation matched, with the name it should end up with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedRename {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    /// The destination name is already taken in the directory.
    NameCollision,
    /// The rename was refused or failed at the OS level.
    RenameFailure { reason: String },
}

/// A file that was skipped during the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileIssue {
    pub file: String,
    pub target: String,
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl FileIssue {
    pub fn collision(rename: &PlannedRename) -> Self {
        Self {
            file: rename.from.clone(),
            target: rename.to.clone(),
            kind: IssueKind::NameCollision,
        }
    }

    pub fn failure(rename: &PlannedRename, reason: impl Into<String>) -> Self {
        Self {
            file: rename.from.clone(),
            target: rename.to.clone(),
            kind: IssueKind::RenameFailure {
                reason: reason.into(),
            },
        }
    }
}

impl fmt::Display for FileIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IssueKind::NameCollision => write!(
                f,
                "File '{}' already exists - skipping '{}'",
                self.target, self.file
            ),
            IssueKind::RenameFailure { reason } => {
                write!(f, "Error renaming '{}': {}", self.file, reason)
            },
        }
    }
}

/// Outcome of one batch. Renames and issues are both in enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    pub renamed_count: usize,
    pub renamed: Vec<PlannedRename>,
    pub issues: Vec<FileIssue>,
}

impl BatchResult {
    /// Per-file skip and error notices, one line per skipped file.
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }

    pub fn collisions(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.kind == IssueKind::NameCollision)
            .count()
    }

    pub fn failures(&self) -> usize {
        self.issues.len() - self.collisions()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Reason a computed name cannot be used inside the directory, if any.
pub fn invalid_name_reason(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        Some("new name would be empty")
    } else if name == "." || name == ".." {
        Some("new name is reserved")
    } else if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
        Some("new name contains a path separator")
    } else if name.contains('\0') {
        Some("new name contains a NUL byte")
    } else {
        None
    }
}

/// Pair every matched file with its new name. Files the operation does not
/// match are left out.
pub fn plan_batch(files: &[FileEntry], operation: &Operation) -> Vec<PlannedRename> {
    files
        .iter()
        .filter_map(|file| {
            operation
                .compute_new_name(&file.name)
                .map(|to| PlannedRename {
                    from: file.name.clone(),
                    to,
                })
        })
        .collect()
}

/// Rename every matched file in `directory`, one at a time, in order.
///
/// Never fails: a collision or OS error on one file is recorded and the
/// batch moves on to the next file. Nothing is rolled back.
pub fn rename_batch(directory: &Path, files: &[FileEntry], operation: &Operation) -> BatchResult {
    let mut result = BatchResult::default();

    for planned in plan_batch(files, operation) {
        if let Some(reason) = invalid_name_reason(&planned.to) {
            tracing::warn!("Not renaming '{}': {reason}", planned.from);
            result.issues.push(FileIssue::failure(&planned, reason));
            continue;
        }

        let from = directory.join(&planned.from);
        let to = directory.join(&planned.to);

        // symlink_metadata so that a dangling link still counts as taken
        if to.symlink_metadata().is_ok() {
            tracing::debug!("Skipping '{}': '{}' exists", planned.from, planned.to);
            result.issues.push(FileIssue::collision(&planned));
            continue;
        }

        match fs::rename(&from, &to) {
            Ok(()) => {
                tracing::debug!("Renamed '{}' -> '{}'", planned.from, planned.to);
                result.renamed_count += 1;
                result.renamed.push(planned);
            },
            Err(e) => {
                tracing::warn!("Failed to rename '{}': {e}", planned.from);
                result.issues.push(FileIssue::failure(&planned, e.to_string()));
            },
        }
    }

    tracing::info!(
        "Batch finished: {} renamed, {} skipped",
        result.renamed_count,
        result.issues.len()
    );
    result
}
