use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Batch-level failures. Per-file problems are not errors, they are
/// collected as [`crate::rename::FileIssue`]s in the batch result.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("No folder selected. Pass a directory or set BATCHREN_DIR")]
    NoFolderSelected,

    #[error("{field} must not be empty")]
    EmptyInputText { field: &'static str },

    #[error("Error reading folder {}", path.display())]
    DirectoryReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No files found in {}", path.display())]
    NoFilesFound { path: PathBuf },

    #[error("No files in {} contain '{find}'", path.display())]
    NoMatchingFiles { find: String, path: PathBuf },

    #[error("Cannot prompt for confirmation in non-interactive mode. Use --yes")]
    ConfirmationRefused,
}

impl BatchError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::DirectoryReadError {
            path: path.into(),
            source,
        }
    }

    /// Outcomes that end a run without renaming anything but are not failures.
    pub fn is_notice(&self) -> bool {
        matches!(self, Self::NoFilesFound { .. } | Self::NoMatchingFiles { .. })
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoFilesFound { .. } | Self::NoMatchingFiles { .. } => 0,
            Self::NoFolderSelected | Self::EmptyInputText { .. } | Self::ConfirmationRefused => 2,
            Self::DirectoryReadError { .. } => 3,
        }
    }
}

pub type Result<T, E = BatchError> = std::result::Result<T, E>;
