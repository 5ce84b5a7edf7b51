//! Bounding box types for the two conventions the converter bridges.
//!
//! VisDrone rows describe a box by its top-left corner plus size
//! ([`BBoxLTWH`]), YOLO rows by its center plus size ([`BBoxCXCYWH`]).

use std::marker::PhantomData;

use super::space::{Normalized, Pixel};

/// An axis-aligned box given as (left, top, width, height).
///
/// Negative sizes and out-of-image corners are representable; nothing here
/// checks that the box lies inside the image.
#[derive(Clone, Copy, PartialEq)]
pub struct BBoxLTWH<TSpace> {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    _space: PhantomData<TSpace>,
}

impl<TSpace> BBoxLTWH<TSpace> {
    #[inline]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
            _space: PhantomData,
        }
    }

    /// Center point of the box, in the same space as the box.
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

impl BBoxLTWH<Pixel> {
    /// Converts to a normalized center box for an image of the given size.
    ///
    /// The center is computed in pixel space before dividing, so
    /// `cx == (left + width / 2) / image_width` exactly.
    pub fn to_normalized_center(
        &self,
        image_width: f64,
        image_height: f64,
    ) -> BBoxCXCYWH<Normalized> {
        let (cx, cy) = self.center();
        BBoxCXCYWH::new(
            cx / image_width,
            cy / image_height,
            self.width / image_width,
            self.height / image_height,
        )
    }
}

impl<TSpace> std::fmt::Debug for BBoxLTWH<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BBoxLTWH")
            .field("left", &self.left)
            .field("top", &self.top)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// An axis-aligned box given as (center x, center y, width, height).
#[derive(Clone, Copy, PartialEq)]
pub struct BBoxCXCYWH<TSpace> {
    pub cx: f64,
    pub cy: f64,
    pub width: f64,
    pub height: f64,
    _space: PhantomData<TSpace>,
}

impl<TSpace> BBoxCXCYWH<TSpace> {
    #[inline]
    pub fn new(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self {
            cx,
            cy,
            width,
            height,
            _space: PhantomData,
        }
    }
}

impl BBoxCXCYWH<Normalized> {
    /// Maps the box back to a pixel-space top-left box.
    pub fn to_pixel_ltwh(&self, image_width: f64, image_height: f64) -> BBoxLTWH<Pixel> {
        let width = self.width * image_width;
        let height = self.height * image_height;
        BBoxLTWH::new(
            self.cx * image_width - width / 2.0,
            self.cy * image_height - height / 2.0,
            width,
            height,
        )
    }
}

impl<TSpace> std::fmt::Debug for BBoxCXCYWH<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BBoxCXCYWH")
            .field("cx", &self.cx)
            .field("cy", &self.cy)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
