//! In-memory word table and its CSV representation.
//!
//! Every column is kept as text in file order. Only the word column is
//! interpreted; all other columns pass through untouched.
use std::path::Path;

use tracing::info;

use crate::io_utils::{load_error, write_error};
use crate::PartitionError;

/// One row of the table. Values line up with [`WordTable::columns`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    values: Vec<String>,
}

impl WordRecord {
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn get(&self, column: usize) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }
}

/// Ordered rows sharing one header with a required word column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordTable {
    columns: Vec<String>,
    word_index: usize,
    records: Vec<WordRecord>,
}

impl WordTable {
    /// Create an empty table. Returns `None` if `word_column` is not one of
    /// `columns`.
    pub fn new(columns: Vec<String>, word_column: &str) -> Option<Self> {
        let word_index = columns.iter().position(|c| c == word_column)?;
        Some(Self {
            columns,
            word_index,
            records: Vec::new(),
        })
    }

    /// Append a row.
    ///
    /// # Panics
    ///
    /// Panics if `record` does not have one value per column.
    pub fn push(&mut self, record: WordRecord) {
        assert_eq!(
            record.values.len(),
            self.columns.len(),
            "record width does not match header"
        );
        self.records.push(record);
    }

    /// A table with the same header holding `records`.
    pub fn with_records(&self, records: Vec<WordRecord>) -> Self {
        Self {
            columns: self.columns.clone(),
            word_index: self.word_index,
            records,
        }
    }

    /// Copy of this table with `column` set to `value` on every row. An
    /// existing column keeps its position; a new one is appended. Rows
    /// shorter than the header are padded with empty values first.
    pub fn with_column_value(&self, column: &str, value: &str) -> Self {
        let mut out = self.clone();
        let width = out.columns.len();
        for record in &mut out.records {
            if record.values.len() < width {
                record.values.resize(width, String::new());
            }
        }
        match out.column_index(column) {
            Some(idx) => {
                for record in &mut out.records {
                    record.values[idx] = value.to_string();
                }
            }
            None => {
                out.columns.push(column.to_string());
                for record in &mut out.records {
                    record.values.push(value.to_string());
                }
            }
        }
        out
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn records(&self) -> &[WordRecord] {
        &self.records
    }

    /// Word field of `record`.
    pub fn word<'a>(&self, record: &'a WordRecord) -> &'a str {
        record.get(self.word_index).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Read a delimited file with a header row into a [`WordTable`].
///
/// Fails with [`PartitionError::Load`] if the file cannot be opened, a row
/// does not match the header width, or `word_column` is absent.
pub fn load(path: &Path, word_column: &str, delimiter: u8) -> Result<WordTable, PartitionError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(false)
        .from_path(path)
        .map_err(|e| load_error(path, e))?;

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| load_error(path, e))?
        .iter()
        .map(str::to_string)
        .collect();
    let mut table = WordTable::new(columns, word_column).ok_or_else(|| PartitionError::Load {
        path: path.to_path_buf(),
        reason: format!("missing required '{word_column}' column"),
    })?;

    for result in reader.records() {
        let record = result.map_err(|e| load_error(path, e))?;
        table.push(WordRecord::new(record.iter().map(str::to_string).collect()));
    }

    info!(
        path = %path.display(),
        rows = table.len(),
        columns = table.columns().len(),
        "loaded word table"
    );
    Ok(table)
}

/// Write `table` with its header to `path`. The parent directory must exist.
pub fn write(table: &WordTable, path: &Path, delimiter: u8) -> Result<(), PartitionError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .map_err(|e| write_error(path, e))?;
    writer
        .write_record(table.columns())
        .map_err(|e| write_error(path, e))?;
    for record in table.records() {
        writer
            .write_record(record.values())
            .map_err(|e| write_error(path, e))?;
    }
    writer.flush().map_err(|e| write_error(path, e.into()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn load_keeps_columns_and_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.csv");
        fs::write(&path, "id,word,note\n1,Dog,\"a, b\"\n\n2,cat,\n").unwrap();
        let table = load(&path, "word", b',').unwrap();
        assert_eq!(table.columns(), ["id", "word", "note"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.word(&table.records()[0]), "Dog");
        assert_eq!(table.records()[0].get(2), Some("a, b"));
        assert_eq!(table.records()[1].get(2), Some(""));
    }

    #[test]
    fn load_rejects_missing_word_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.csv");
        fs::write(&path, "term,pos\ndog,noun\n").unwrap();
        let err = load(&path, "word", b',').unwrap_err();
        assert!(matches!(err, PartitionError::Load { .. }));
        assert!(err.to_string().contains("missing required 'word' column"));
    }

    #[test]
    fn load_rejects_ragged_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.csv");
        fs::write(&path, "word,pos\ndog,noun\ncat\n").unwrap();
        let err = load(&path, "word", b',').unwrap_err();
        assert!(matches!(err, PartitionError::Load { .. }));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("nope.csv"), "word", b',').unwrap_err();
        assert!(err.to_string().contains("Check that the file exists"));
    }

    #[test]
    fn header_only_is_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.csv");
        fs::write(&path, "word\n").unwrap();
        assert!(load(&path, "word", b',').unwrap().is_empty());
    }

    #[test]
    fn column_value_overwrites_in_place() {
        let mut t = WordTable::new(vec!["list_type".into(), "word".into()], "word").unwrap();
        t.push(WordRecord::new(vec!["9".into(), "dog".into()]));
        let out = t.with_column_value("list_type", "2");
        assert_eq!(out.columns(), ["list_type", "word"]);
        assert_eq!(out.records()[0].values(), ["2", "dog"]);
        assert_eq!(t.records()[0].get(0), Some("9"));
    }

    #[test]
    #[should_panic(expected = "record width does not match header")]
    fn push_rejects_short_record() {
        let mut t = WordTable::new(vec!["word".into(), "list_type".into()], "word").unwrap();
        t.push(WordRecord::new(vec!["dog".into()]));
    }

    #[test]
    fn column_value_pads_short_rows() {
        let t = WordTable::new(vec!["word".into(), "list_type".into()], "word").unwrap();
        let short = t.with_records(vec![WordRecord::new(vec!["dog".into()])]);
        let out = short.with_column_value("list_type", "1");
        assert_eq!(out.records()[0].values(), ["dog", "1"]);

        let appended = short.with_column_value("extra", "x");
        assert_eq!(appended.columns(), ["word", "list_type", "extra"]);
        assert_eq!(appended.records()[0].values(), ["dog", "", "x"]);
    }

    #[test]
    fn write_quotes_when_needed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let mut t = WordTable::new(vec!["word".into(), "note".into()], "word").unwrap();
        t.push(WordRecord::new(vec!["dog".into(), "a, b".into()]));
        write(&t, &path, b',').unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "word,note\ndog,\"a, b\"\n");
    }

    #[test]
    fn write_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        let t = WordTable::new(vec!["word".into()], "word").unwrap();
        let err = write(&t, &path, b',').unwrap_err();
        assert!(matches!(err, PartitionError::Write { .. }));
    }
}
