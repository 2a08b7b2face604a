use std::path::PathBuf;

use crate::filter::ExclusionSet;

/// Words removed from the master list before it is partitioned.
pub const EXCLUDED_WORDS: [&str; 31] = [
    "cat", "fish", "egg", "apple", "shirts", "shoe", "finger", "tooth", "hammer", "purse",
    "kitchen", "stairs", "ladder", "sun", "home", "picnic", "mom", "cowboy", "eating", "walking",
    "opening", "touching", "swimming", "watching", "asleep", "bad", "brown", "yellow", "today",
    "up", "beside",
];

/// Seed for the row shuffle.
pub const DEFAULT_SEED: u32 = 42;
/// Number of output lists.
pub const DEFAULT_PARTITIONS: usize = 7;

/// Parameters of a partitioning run. Built once and borrowed by
/// [`crate::pipeline::run`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Delimited source table.
    pub input_path: PathBuf,
    /// Directory receiving the partition files. Must already exist.
    pub output_dir: PathBuf,
    /// File name prefix; partition `i` is written to `<stem><i>.csv`.
    pub file_stem: String,
    /// Column holding the word compared against `exclusions`.
    pub word_column: String,
    /// Column added to every output row with the 1-based partition index.
    pub label_column: String,
    pub exclusions: ExclusionSet,
    pub seed: u32,
    pub partitions: usize,
    /// Permit more partitions than rows, leaving the trailing ones empty.
    pub allow_empty_partitions: bool,
    pub delimiter: u8,
}

impl Config {
    /// Destination of the partition with the given 1-based index.
    pub fn partition_path(&self, index: usize) -> PathBuf {
        self.output_dir.join(format!("{}{}.csv", self.file_stem, index))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("master_word_list.csv"),
            output_dir: PathBuf::from("lists"),
            file_stem: "wordlist".to_string(),
            word_column: "word".to_string(),
            label_column: "list_type".to_string(),
            exclusions: ExclusionSet::new(EXCLUDED_WORDS),
            seed: DEFAULT_SEED,
            partitions: DEFAULT_PARTITIONS,
            allow_empty_partitions: false,
            delimiter: b',',
        }
    }
}
