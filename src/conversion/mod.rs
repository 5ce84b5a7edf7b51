//! VisDrone to YOLO conversion for one dataset split.
//!
//! Every `*.txt` file in the annotation directory is paired with an image of
//! the same base name (`.jpg` first, then `.png`), normalized against that
//! image's dimensions, and written to the output directory under the same
//! file name. Hidden files and other extensions (including `.TXT`) are
//! ignored. Skips are recorded in the returned [`ConversionReport`];
//! processing always continues with the next line or file.

pub mod report;

pub use report::{ConversionCounts, ConversionIssue, ConversionReport, IssueCode};

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::config::SplitConfig;
use crate::error::ConvertError;
use crate::ir::io_visdrone::{self, LineError};
use crate::ir::{io_yolo, YoloRow};
use crate::probe::{DecodeProbe, ImageProbe};

/// Image extensions tried, in order, when pairing an annotation file.
pub const IMAGE_EXTENSIONS: [&str; 2] = ["jpg", "png"];

const ANNOTATION_EXTENSION: &str = "txt";

/// Convert one directory triple, decoding each paired image in full.
pub fn convert(
    image_dir: &Path,
    annotation_dir: &Path,
    output_dir: &Path,
) -> Result<ConversionReport, ConvertError> {
    let split = SplitConfig::new("default", image_dir, annotation_dir, output_dir);
    convert_split(&split, &DecodeProbe)
}

/// Convert one split, reading image dimensions through `probe`.
///
/// Returns `Err` only when the output directory cannot be created or the
/// annotation directory itself cannot be opened. Entries of the directory
/// that cannot be resolved are reported and skipped.
pub fn convert_split<P>(split: &SplitConfig, probe: &P) -> Result<ConversionReport, ConvertError>
where
    P: ImageProbe + ?Sized,
{
    let mut report = ConversionReport::new(
        split.name.clone(),
        &split.image_dir,
        &split.annotation_dir,
        &split.output_dir,
    );

    fs::create_dir_all(&split.output_dir).map_err(|source| ConvertError::OutputDirCreate {
        path: split.output_dir.clone(),
        source,
    })?;

    let annotation_files = collect_annotation_files(&split.annotation_dir, &mut report)?;
    debug!(
        split = %split.name,
        files = annotation_files.len(),
        "converting annotation directory"
    );

    for annotation_path in &annotation_files {
        convert_file(annotation_path, split, probe, &mut report);
    }

    Ok(report)
}

fn convert_file<P>(
    annotation_path: &Path,
    split: &SplitConfig,
    probe: &P,
    report: &mut ConversionReport,
) where
    P: ImageProbe + ?Sized,
{
    let (Some(file_name), Some(stem)) = (annotation_path.file_name(), annotation_path.file_stem())
    else {
        report.add(ConversionIssue::file(
            IssueCode::UnreadableAnnotation,
            annotation_path,
            "annotation path has no file name",
        ));
        return;
    };

    let Some(image_path) = find_paired_image(&split.image_dir, stem) else {
        report.add(ConversionIssue::file(
            IssueCode::MissingImage,
            annotation_path,
            format!(
                "no {} image for this file in '{}'",
                IMAGE_EXTENSIONS.join("/"),
                split.image_dir.display()
            ),
        ));
        return;
    };

    let image_size = match probe.dimensions(&image_path) {
        Ok(size) => size,
        Err(err) => {
            report.add(ConversionIssue::file(
                IssueCode::UnreadableImage,
                annotation_path,
                err.to_string(),
            ));
            return;
        }
    };

    let content = match fs::read_to_string(annotation_path) {
        Ok(content) => content,
        Err(err) => {
            report.add(ConversionIssue::file(
                IssueCode::UnreadableAnnotation,
                annotation_path,
                format!("failed to read annotation file: {err}"),
            ));
            return;
        }
    };

    let mut rows: Vec<YoloRow> = Vec::new();
    for (line_idx, line) in content.lines().enumerate() {
        match io_visdrone::parse_annotation_line(line) {
            Ok(row) => rows.push(row.to_yolo(image_size)),
            Err(err) => {
                let code = match err {
                    LineError::Malformed { .. } => IssueCode::MalformedLine,
                    LineError::NonNumeric { .. } => IssueCode::NonNumericLine,
                };
                report.add(ConversionIssue::line(
                    code,
                    annotation_path,
                    line_idx + 1,
                    format!("{err}: '{}'", line.trim()),
                ));
            }
        }
    }

    let output_path = split.output_dir.join(file_name);
    if let Err(err) = io_yolo::write_label_file(&output_path, &rows) {
        report.add(ConversionIssue::file(
            IssueCode::OutputWrite,
            annotation_path,
            format!("failed to write '{}': {err}", output_path.display()),
        ));
        return;
    }

    debug!(
        annotation = %annotation_path.display(),
        image = %image_path.display(),
        width = image_size.width,
        height = image_size.height,
        rows = rows.len(),
        "wrote label file"
    );
    report.counts.files_written += 1;
    report.counts.lines_written += rows.len();
}

/// List `*.txt` files directly inside `dir`, sorted by file name.
///
/// Sets `counts.annotation_files`. A `*.txt` entry that cannot be resolved
/// (e.g. a dangling symlink) is counted and reported as unreadable; other
/// unresolvable entries are ignored.
fn collect_annotation_files(
    dir: &Path,
    report: &mut ConversionReport,
) -> Result<Vec<PathBuf>, ConvertError> {
    let mut files = Vec::new();
    let mut unresolved = 0usize;

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && is_annotation_file(entry.path()) {
                    files.push(entry.into_path());
                }
            }
            Err(err) if err.depth() == 0 => {
                return Err(ConvertError::AnnotationDirRead {
                    path: dir.to_path_buf(),
                    message: err.to_string(),
                });
            }
            Err(err) => {
                let Some(path) = err.path().filter(|path| is_annotation_file(path)) else {
                    continue;
                };
                report.add(ConversionIssue::file(
                    IssueCode::UnreadableAnnotation,
                    path,
                    format!("failed to resolve annotation file: {err}"),
                ));
                unresolved += 1;
            }
        }
    }

    report.counts.annotation_files = files.len() + unresolved;
    Ok(files)
}

/// Matches `*.txt` exactly; hidden files are skipped.
fn is_annotation_file(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(true);

    !hidden && path.extension() == Some(OsStr::new(ANNOTATION_EXTENSION))
}

/// Find `image_dir/<stem>.jpg`, falling back to `image_dir/<stem>.png`.
pub fn find_paired_image(image_dir: &Path, stem: &OsStr) -> Option<PathBuf> {
    IMAGE_EXTENSIONS
        .iter()
        .map(|ext| file_with_extension(image_dir, stem, ext))
        .find(|candidate| candidate.is_file())
}

// `Path::with_extension` would clobber dotted stems like `frame.001`.
fn file_with_extension(dir: &Path, stem: &OsStr, ext: &str) -> PathBuf {
    let mut name = OsString::from(stem);
    name.push(".");
    name.push(ext);
    dir.join(name)
}
