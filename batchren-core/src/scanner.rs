use crate::error::{BatchError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A regular file directly inside the selected directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
}

impl FileEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Turn the selected path into an absolute path to an existing directory.
pub fn resolve_directory(path: &Path) -> Result<PathBuf> {
    let resolved = path
        .canonicalize()
        .map_err(|e| BatchError::read(path, e))?;
    let metadata = fs::metadata(&resolved).map_err(|e| BatchError::read(path, e))?;
    if !metadata.is_dir() {
        return Err(BatchError::read(path, io::Error::other("not a directory")));
    }
    Ok(resolved)
}

fn top_level(directory: &Path) -> WalkDir {
    WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
}

/// List the regular files directly inside `directory`, sorted by name.
///
/// Symlinks are followed, so a link to a file counts and a link to a
/// directory does not. Dangling links and names that are not valid UTF-8
/// are skipped.
pub fn enumerate_files(directory: &Path) -> Result<Vec<FileEntry>> {
    let directory = resolve_directory(directory)?;
    let mut files = Vec::new();

    for entry in top_level(&directory) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                let source = err
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("directory walk failed"));
                return Err(BatchError::read(&directory, source));
            },
            Err(err) => {
                tracing::warn!("Skipping unreadable entry: {err}");
                continue;
            },
        };

        if !entry.file_type().is_file() {
            continue;
        }

        match entry.file_name().to_str() {
            Some(name) => files.push(FileEntry::new(name)),
            None => tracing::warn!(
                "Skipping file with non UTF-8 name: {}",
                entry.path().display()
            ),
        }
    }

    tracing::debug!("Found {} files in {}", files.len(), directory.display());
    Ok(files)
}

/// Every name currently taken in `directory`, files and subdirectories alike.
pub fn occupied_names(directory: &Path) -> Result<BTreeSet<String>> {
    let mut names = BTreeSet::new();
    for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
        match entry {
            Ok(entry) => {
                if let Some(name) = entry.file_name().to_str() {
                    names.insert(name.to_string());
                }
            },
            Err(err) if err.depth() == 0 => {
                let source = err
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("directory walk failed"));
                return Err(BatchError::read(directory, source));
            },
            Err(err) => tracing::warn!("Skipping unreadable entry: {err}"),
        }
    }
    Ok(names)
}
