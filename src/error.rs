use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PartitionError {
    /// Input table missing, unreadable, malformed or lacking the word column.
    #[error("load failed for '{}': {reason}", path.display())]
    Load { path: PathBuf, reason: String },

    /// Partition count is zero or larger than the number of rows.
    #[error("split failed: cannot divide {rows} rows into {requested} partitions")]
    InvalidPartitionCount { requested: usize, rows: usize },

    /// Destination missing, not writable, or serialisation failed.
    #[error("write failed for '{}': {reason}", path.display())]
    Write { path: PathBuf, reason: String },
}

impl PartitionError {
    /// Name of the pipeline step that produced this error.
    pub fn step(&self) -> &'static str {
        match self {
            PartitionError::Load { .. } => "load",
            PartitionError::InvalidPartitionCount { .. } => "split",
            PartitionError::Write { .. } => "write",
        }
    }
}
