#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod error;
pub mod operation;
pub mod operations;
pub mod output;
pub mod preview;
pub mod rename;
pub mod scanner;

pub use error::BatchError;
pub use operation::{BatchRequest, Operation};
pub use operations::{list_operation, prepare_batch, PreparedBatch};
pub use output::{
    BatchReport, ListResult, NoticeResult, OutputFormat, OutputFormatter, VersionResult,
};
pub use preview::{render_preview, BatchPreview, Preview, PreviewRow, PreviewStatus};
pub use rename::{
    invalid_name_reason, plan_batch, rename_batch, BatchResult, FileIssue, IssueKind,
    PlannedRename,
};
pub use scanner::{enumerate_files, FileEntry};
