//! Splitting a shuffled table into labelled partitions.
use std::path::Path;

use tracing::{info, warn};

use crate::table::{self, WordTable};
use crate::PartitionError;

/// Contiguous slice of the shuffled table. `list_type` is set once the
/// partition has been labelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    table: WordTable,
    list_type: Option<usize>,
}

impl Partition {
    pub fn table(&self) -> &WordTable {
        &self.table
    }

    pub fn list_type(&self) -> Option<usize> {
        self.list_type
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Sizes of `n` contiguous partitions of `len` rows. The first `len % n`
/// partitions get one extra row.
pub fn partition_sizes(len: usize, n: usize) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }
    let base = len / n;
    let extra = len % n;
    (0..n).map(|i| base + usize::from(i < extra)).collect()
}

/// Divide `table` into `n` contiguous partitions whose sizes differ by at
/// most one.
///
/// `n == 0` is always rejected. `n` larger than the row count is rejected
/// unless `allow_empty`, in which case the trailing partitions are empty.
pub fn split(
    table: &WordTable,
    n: usize,
    allow_empty: bool,
) -> Result<Vec<Partition>, PartitionError> {
    if n == 0 || (n > table.len() && !allow_empty) {
        return Err(PartitionError::InvalidPartitionCount {
            requested: n,
            rows: table.len(),
        });
    }

    let sizes = partition_sizes(table.len(), n);
    let empty = sizes.iter().filter(|&&s| s == 0).count();
    if empty > 0 {
        warn!(empty, partitions = n, "producing empty partitions");
    }
    info!(partitions = n, sizes = ?sizes, "split word list");

    let mut start = 0;
    let parts = sizes
        .into_iter()
        .map(|size| {
            let rows = table.records()[start..start + size].to_vec();
            start += size;
            Partition {
                table: table.with_records(rows),
                list_type: None,
            }
        })
        .collect();
    Ok(parts)
}

/// Copy of `partition` with `label_column` set to `index` on every row.
pub fn label(partition: &Partition, index: usize, label_column: &str) -> Partition {
    Partition {
        table: partition
            .table
            .with_column_value(label_column, &index.to_string()),
        list_type: Some(index),
    }
}

/// Serialise `partition` to `path`.
pub fn write(partition: &Partition, path: &Path, delimiter: u8) -> Result<(), PartitionError> {
    table::write(&partition.table, path, delimiter)?;
    info!(
        path = %path.display(),
        rows = partition.len(),
        list_type = ?partition.list_type,
        "wrote partition"
    );
    Ok(())
}
