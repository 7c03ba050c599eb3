//! High-level operations that correspond to CLI commands
//!
//! These modules compose validation, scanning and renaming for a front end,
//! separated from CLI concerns like argument parsing and output formatting.

pub mod batch;
pub mod list;

pub use batch::{prepare_batch, PreparedBatch};
pub use list::list_operation;
