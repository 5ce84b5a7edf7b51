//! Row types for both sides of the conversion.

use std::fmt;

use super::bbox::{BBoxCXCYWH, BBoxLTWH};
use super::space::{Normalized, Pixel};

/// Pixel dimensions of an image, used only as normalization denominators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// One object from a VisDrone DET annotation file.
///
/// Field order on disk:
/// `bbox_left,bbox_top,bbox_width,bbox_height,score,object_category,truncation,occlusion`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisDroneRow {
    pub bbox: BBoxLTWH<Pixel>,
    pub score: f64,
    pub category: f64,
    pub truncation: f64,
    pub occlusion: f64,
}

impl VisDroneRow {
    /// Converts the row into a YOLO row for an image of the given size.
    ///
    /// Category and occlusion are truncated toward zero, never rounded.
    pub fn to_yolo(&self, image: ImageSize) -> YoloRow {
        YoloRow {
            class_id: self.category as i64,
            bbox: self
                .bbox
                .to_normalized_center(image.width as f64, image.height as f64),
            occlusion: self.occlusion as i64,
        }
    }
}

/// One object line of a YOLO label file with a trailing occlusion column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YoloRow {
    pub class_id: i64,
    pub bbox: BBoxCXCYWH<Normalized>,
    pub occlusion: i64,
}

impl fmt::Display for YoloRow {
    /// `<class_id> <cx> <cy> <w> <h> <occlusion>` with six fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.6} {:.6} {:.6} {:.6} {}",
            self.class_id,
            self.bbox.cx,
            self.bbox.cy,
            self.bbox.width,
            self.bbox.height,
            self.occlusion
        )
    }
}
