use crate::error::{BatchError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// What to do to every file name in the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Operation {
    /// Add `text` to the front of every file name.
    Prepend { text: String },
    /// Substitute every occurrence of `find` with `replace_with`.
    Replace { find: String, replace_with: String },
}

impl Operation {
    /// Build a prepend operation. Surrounding whitespace is not part of the prefix.
    pub fn prepend(text: &str) -> Self {
        Self::Prepend {
            text: text.trim().to_string(),
        }
    }

    /// Build a replace operation. `find` is taken verbatim so that a lone
    /// space is a valid search.
    pub fn replace(find: &str, replace_with: &str) -> Self {
        Self::Replace {
            find: find.to_string(),
            replace_with: replace_with.to_string(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Prepend { .. } => "prepend",
            Self::Replace { .. } => "replace",
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Prepend { text } if text.is_empty() => {
                Err(BatchError::EmptyInputText { field: "Prefix text" })
            },
            Self::Replace { find, .. } if find.is_empty() => {
                Err(BatchError::EmptyInputText { field: "Find text" })
            },
            _ => Ok(()),
        }
    }

    /// Compute the new name for `filename`.
    ///
    /// Returns `None` when the file takes no part in the batch, which only
    /// happens in replace mode when `find` does not occur in the name.
    pub fn compute_new_name(&self, filename: &str) -> Option<String> {
        match self {
            Self::Prepend { text } => Some(format!("{text}{filename}")),
            Self::Replace { find, replace_with } => {
                if filename.contains(find.as_str()) {
                    Some(filename.replace(find.as_str(), replace_with))
                } else {
                    None
                }
            },
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prepend { text } => write!(f, "prepend '{text}'"),
            Self::Replace { find, replace_with } => {
                write!(f, "replace '{find}' with '{replace_with}'")
            },
        }
    }
}

/// One batch, described up front and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    pub directory: Option<PathBuf>,
    pub operation: Operation,
}

impl BatchRequest {
    pub fn new(directory: Option<PathBuf>, operation: Operation) -> Self {
        Self {
            directory,
            operation,
        }
    }

    /// Check the request before anything touches the disk. Returns the
    /// selected directory on success.
    pub fn validate(&self) -> Result<&Path> {
        let directory = self
            .directory
            .as_deref()
            .filter(|dir| !dir.as_os_str().is_empty())
            .ok_or(BatchError::NoFolderSelected)?;
        self.operation.validate()?;
        Ok(directory)
    }
}
