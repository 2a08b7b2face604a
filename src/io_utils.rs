//! Helpers turning `io`/`csv` failures into [`PartitionError`]s with a hint
//! the user can act on.
use std::io;
use std::path::Path;

use crate::PartitionError;

/// Format an I/O error with a suggestion for fixing it.
pub fn format_io_error(err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        UnexpectedEof => "File appears truncated or corrupted.",
        WriteZero => "Disk may be full. Free up space and try again.",
        InvalidData => "File is not valid UTF-8 text.",
        Other if err.raw_os_error() == Some(28) => "Disk may be full. Free up space and try again.",
        _ => "Check permissions or free up disk space.",
    };
    format!("{err}. {suggestion}")
}

fn format_csv_error(err: csv::Error) -> String {
    match err.into_kind() {
        csv::ErrorKind::Io(io) => format_io_error(&io),
        csv::ErrorKind::Utf8 { pos, err } => match pos {
            Some(pos) => format!("invalid UTF-8 on line {}: {err}", pos.line()),
            None => format!("invalid UTF-8: {err}"),
        },
        csv::ErrorKind::UnequalLengths { pos, expected_len, len } => {
            let line = pos.map(|p| p.line()).unwrap_or_default();
            format!("line {line} has {len} fields but the header has {expected_len}")
        }
        other => format!("{:?}", other),
    }
}

/// Wrap a reader failure as a load error.
pub fn load_error(path: &Path, err: csv::Error) -> PartitionError {
    PartitionError::Load {
        path: path.to_path_buf(),
        reason: format_csv_error(err),
    }
}

/// Wrap a writer failure as a write error.
pub fn write_error(path: &Path, err: csv::Error) -> PartitionError {
    PartitionError::Write {
        path: path.to_path_buf(),
        reason: format_csv_error(err),
    }
}
