//! YOLO label writer.
//!
//! Label files hold one [`YoloRow`] per line, joined with `\n` and without
//! a trailing newline. A file with no rows is written as an empty file.

use std::fs;
use std::path::Path;

use super::model::YoloRow;

/// Render rows as the contents of one label file.
pub fn to_label_string(rows: &[YoloRow]) -> String {
    rows.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write rows to `path`, replacing any existing file.
pub fn write_label_file(path: &Path, rows: &[YoloRow]) -> std::io::Result<()> {
    fs::write(path, to_label_string(rows))
}
