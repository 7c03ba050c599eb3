use crate::operation::Operation;
use crate::preview::{render_summary, BatchPreview};
use crate::rename::BatchResult;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of listing the selected directory
#[derive(Debug, Serialize, Deserialize)]
pub struct ListResult {
    pub directory: PathBuf,
    pub files: Vec<String>,
}

/// Result of a batch that ran on disk
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchReport {
    pub operation: Operation,
    pub directory: PathBuf,
    pub result: BatchResult,
}

/// A batch that ended before renaming anything, e.g. no matching files
#[derive(Debug, Serialize, Deserialize)]
pub struct NoticeResult {
    pub operation: String,
    pub message: String,
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for ListResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "list",
            "directory": self.directory,
            "count": self.files.len(),
            "files": self.files,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = format!(
            "Found {} files in {}:\n",
            self.files.len(),
            self.directory.display()
        );

        if !self.files.is_empty() {
            output.push('\n');
        }
        for file in &self.files {
            writeln!(output, "• {}", file).unwrap();
        }

        output
    }
}

impl OutputFormatter for BatchReport {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": self.result.is_clean(),
            "operation": self.operation.name(),
            "directory": self.directory,
            "dry_run": false,
            "summary": {
                "renamed": self.result.renamed_count,
                "collisions": self.result.collisions(),
                "failures": self.result.failures(),
            },
            "renamed": self.result.renamed,
            "issues": self.result.issues,
            "messages": self.result.messages(),
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        for rename in &self.result.renamed {
            writeln!(output, "✓ {} → {}", rename.from, rename.to).unwrap();
        }

        output.push_str("\n--- Summary ---\n");
        writeln!(
            output,
            "Successfully renamed: {} files",
            self.result.renamed_count
        )
        .unwrap();

        let messages = self.result.messages();
        if !messages.is_empty() {
            writeln!(output, "Errors: {}\n", messages.len()).unwrap();
            for message in messages {
                writeln!(output, "⚠ {}", message).unwrap();
            }
        }

        output
    }
}

impl OutputFormatter for BatchPreview {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": self.operation.name(),
            "directory": self.directory,
            "dry_run": true,
            "summary": {
                "renames": self.ready(),
                "collisions": self.collisions(),
                "invalid": self.invalid(),
            },
            "rows": self.rows,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        render_summary(self, false)
    }
}

impl OutputFormatter for NoticeResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": self.operation,
            "notice": self.message,
            "summary": {
                "renamed": 0,
            },
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{}\n", self.message)
    }
}

impl OutputFormatter for VersionResult {
    fn format_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}
