//! Conversion report types for one dataset split.
//!
//! A report records what was written and every item that was skipped, so
//! the caller decides whether to print, log, or fail on skips.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// The result of converting one split.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ConversionReport {
    /// Split name (e.g. `train`).
    pub split: String,
    pub image_dir: PathBuf,
    pub annotation_dir: PathBuf,
    pub output_dir: PathBuf,
    pub counts: ConversionCounts,
    /// Skipped files and lines, in processing order.
    pub issues: Vec<ConversionIssue>,
}

impl ConversionReport {
    pub fn new(
        split: impl Into<String>,
        image_dir: impl Into<PathBuf>,
        annotation_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            split: split.into(),
            image_dir: image_dir.into(),
            annotation_dir: annotation_dir.into(),
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    /// Add an issue and bump the matching skip counter.
    pub fn add(&mut self, issue: ConversionIssue) {
        if issue.code.is_line_level() {
            self.counts.lines_skipped += 1;
        } else {
            self.counts.files_skipped += 1;
        }
        self.issues.push(issue);
    }

    /// Total number of skipped files and lines.
    pub fn skipped_count(&self) -> usize {
        self.issues.len()
    }

    /// Returns true if nothing was skipped.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issues carrying the given code.
    pub fn issues_with(&self, code: IssueCode) -> impl Iterator<Item = &ConversionIssue> {
        self.issues.iter().filter(move |issue| issue.code == code)
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Conversion complete for split '{}' with images in '{}'.",
            self.split,
            self.image_dir.display()
        )?;
        writeln!(
            f,
            "  {} of {} annotation file(s) converted, {} line(s) written",
            self.counts.files_written, self.counts.annotation_files, self.counts.lines_written
        )?;

        if !self.is_clean() {
            writeln!(
                f,
                "  skipped {} file(s) and {} line(s)",
                self.counts.files_skipped, self.counts.lines_skipped
            )?;
        }

        writeln!(
            f,
            "YOLO annotations saved in '{}'.",
            self.output_dir.display()
        )
    }
}

/// Counters accumulated while converting a split.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ConversionCounts {
    /// `*.txt` files found in the annotation directory.
    pub annotation_files: usize,
    pub files_written: usize,
    pub files_skipped: usize,
    pub lines_written: usize,
    pub lines_skipped: usize,
}

/// A single skipped file or line.
#[derive(Clone, Debug, Serialize)]
pub struct ConversionIssue {
    pub code: IssueCode,
    /// The annotation file the issue belongs to.
    pub path: PathBuf,
    /// 1-based line number for line-level issues.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub message: String,
}

impl ConversionIssue {
    /// An issue that caused a whole annotation file to be skipped.
    pub fn file(code: IssueCode, path: &Path, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.to_path_buf(),
            line: None,
            message: message.into(),
        }
    }

    /// An issue that caused one line to be skipped.
    pub fn line(code: IssueCode, path: &Path, line: usize, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.to_path_buf(),
            line: Some(line),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConversionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}: {}", self.path.display(), line, self.message),
            None => write!(f, "{}: {}", self.path.display(), self.message),
        }
    }
}

/// Stable issue codes for programmatic consumption.
///
/// These codes are part of the JSON report and should remain stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// No `.jpg` or `.png` image shares the annotation file's base name.
    MissingImage,
    /// The paired image exists but its dimensions could not be read.
    UnreadableImage,
    /// The annotation file itself could not be read.
    UnreadableAnnotation,
    /// The label file could not be written.
    OutputWrite,
    /// The line did not split into exactly eight non-empty fields.
    MalformedLine,
    /// A field could not be parsed as a finite number.
    NonNumericLine,
}

impl IssueCode {
    /// Returns true for codes that skip a single line rather than a file.
    pub fn is_line_level(&self) -> bool {
        matches!(self, IssueCode::MalformedLine | IssueCode::NonNumericLine)
    }
}
