use std::path::PathBuf;

use tracing::info;

use crate::config::Config;
use crate::filter::filter;
use crate::partition::{label, split, write};
use crate::shuffle::shuffle;
use crate::table::load;
use crate::PartitionError;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Rows read from the input table.
    pub loaded: usize,
    /// Rows dropped by the exclusion set.
    pub excluded: usize,
    /// Each written file with its row count, in partition order.
    pub written: Vec<(PathBuf, usize)>,
}

/// Load, filter, shuffle, split, label and write the word list described by
/// `config`.
///
/// The partition count is validated before anything is written. A failure
/// while writing partition `k` leaves partitions `1..k` on disk.
pub fn run(config: &Config) -> Result<RunSummary, PartitionError> {
    let table = load(&config.input_path, &config.word_column, config.delimiter)?;
    let filtered = filter(&table, &config.exclusions);
    let shuffled = shuffle(&filtered, config.seed);
    let partitions = split(&shuffled, config.partitions, config.allow_empty_partitions)?;

    if !config.output_dir.is_dir() {
        return Err(PartitionError::Write {
            path: config.output_dir.clone(),
            reason: "output directory does not exist".to_string(),
        });
    }

    let mut written = Vec::with_capacity(partitions.len());
    for (i, partition) in partitions.iter().enumerate() {
        let index = i + 1;
        let labelled = label(partition, index, &config.label_column);
        let path = config.partition_path(index);
        write(&labelled, &path, config.delimiter)?;
        written.push((path, labelled.len()));
    }

    let summary = RunSummary {
        loaded: table.len(),
        excluded: table.len() - filtered.len(),
        written,
    };
    info!(
        loaded = summary.loaded,
        excluded = summary.excluded,
        files = summary.written.len(),
        "partitioning complete"
    );
    Ok(summary)
}
