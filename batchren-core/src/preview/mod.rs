mod summary;
mod table;

pub use summary::render_summary;
pub use table::render_table;

use crate::operation::Operation;
use crate::rename::{invalid_name_reason, PlannedRename};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview {
    Table,
    Summary,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PreviewStatus {
    Rename,
    Collision,
    Invalid { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewRow {
    pub from: String,
    pub to: String,
    #[serde(flatten)]
    pub status: PreviewStatus,
}

/// What a batch would do, computed without touching the disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchPreview {
    pub directory: PathBuf,
    pub operation: Operation,
    pub rows: Vec<PreviewRow>,
}

impl BatchPreview {
    pub fn ready(&self) -> usize {
        self.count(|status| matches!(status, PreviewStatus::Rename))
    }

    pub fn collisions(&self) -> usize {
        self.count(|status| matches!(status, PreviewStatus::Collision))
    }

    pub fn invalid(&self) -> usize {
        self.count(|status| matches!(status, PreviewStatus::Invalid { .. }))
    }

    fn count(&self, pred: impl Fn(&PreviewStatus) -> bool) -> usize {
        self.rows.iter().filter(|row| pred(&row.status)).count()
    }
}

/// Play the planned renames against the names already in the directory.
///
/// Each accepted rename frees its source name and takes its target, so a
/// later file sees the directory as it will be at that point of the batch.
pub fn simulate(occupied: &BTreeSet<String>, planned: &[PlannedRename]) -> Vec<PreviewRow> {
    let mut taken = occupied.clone();

    planned
        .iter()
        .map(|rename| {
            let status = if let Some(reason) = invalid_name_reason(&rename.to) {
                PreviewStatus::Invalid {
                    reason: reason.to_string(),
                }
            } else if taken.contains(&rename.to) {
                PreviewStatus::Collision
            } else {
                taken.remove(&rename.from);
                taken.insert(rename.to.clone());
                PreviewStatus::Rename
            };

            PreviewRow {
                from: rename.from.clone(),
                to: rename.to.clone(),
                status,
            }
        })
        .collect()
}

/// Render the preview in the requested format.
pub fn render_preview(preview: &BatchPreview, format: Preview, use_color: bool) -> String {
    match format {
        Preview::Table => render_table(preview, use_color),
        Preview::Summary => render_summary(preview, use_color),
        Preview::None => String::new(),
    }
}
