use std::path::PathBuf;
use thiserror::Error;

/// The main error type for visdrone2yolo operations.
///
/// Only conditions that stop a whole split end up here. Problems with a
/// single annotation file or line are recorded in the
/// [`ConversionReport`](crate::conversion::ConversionReport) instead.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to list annotation directory {path}: {message}")]
    AnnotationDirRead { path: PathBuf, message: String },

    #[error("Failed to create output directory {path}: {source}")]
    OutputDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read image dimensions from {path}: {source}")]
    ImageDimensionRead {
        path: PathBuf,
        #[source]
        source: imagesize::ImageError,
    },

    #[error("Failed to open image {path}: {source}")]
    ImageOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image {path}: {source}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image {path} has invalid dimensions {width}x{height}")]
    ImageDimensionInvalid {
        path: PathBuf,
        width: usize,
        height: usize,
    },

    #[error("Failed to parse conversion plan {path}: {source}")]
    PlanParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid conversion plan {path}: {message}")]
    PlanInvalid { path: PathBuf, message: String },

    #[error("{failed} split(s) failed to convert")]
    SplitsFailed { failed: usize },

    #[error("Strict mode: {skipped} item(s) were skipped")]
    StrictSkipped { skipped: usize },

    #[error("Failed to serialize report: {0}")]
    ReportSerialize(#[from] serde_json::Error),
}
