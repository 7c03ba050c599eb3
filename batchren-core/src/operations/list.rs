use crate::error::{BatchError, Result};
use crate::output::ListResult;
use crate::scanner::{enumerate_files, resolve_directory};
use std::path::Path;

/// List operation - returns the files a batch in `directory` would see
pub fn list_operation(directory: Option<&Path>) -> Result<ListResult> {
    let selected = directory
        .filter(|dir| !dir.as_os_str().is_empty())
        .ok_or(BatchError::NoFolderSelected)?;
    let directory = resolve_directory(selected)?;
    let files = enumerate_files(&directory)?;

    Ok(ListResult {
        directory,
        files: files.into_iter().map(|f| f.name).collect(),
    })
}
