//! Split a master word list into reproducible, roughly equal sub-lists.
//!
//! The pipeline loads a CSV table with a `word` column, drops excluded words
//! (case-insensitively), shuffles the remaining rows with a seeded MT19937
//! Fisher–Yates permutation, splits them into `N` contiguous partitions and
//! writes each one with a `list_type` column holding its 1-based index.
//!
//! ```no_run
//! use list_partitioner::{run, Config};
//!
//! let summary = run(&Config::default())?;
//! println!("wrote {} lists", summary.written.len());
//! # Ok::<(), list_partitioner::PartitionError>(())
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod io_utils;
pub mod partition;
pub mod pipeline;
pub mod shuffle;
pub mod table;

pub use config::{Config, DEFAULT_PARTITIONS, DEFAULT_SEED, EXCLUDED_WORDS};
pub use error::PartitionError;
pub use filter::{filter, ExclusionSet};
pub use partition::{label, partition_sizes, split, write, Partition};
pub use pipeline::{run, RunSummary};
pub use shuffle::{permutation, shuffle, Mt19937};
pub use table::{load, WordRecord, WordTable};
