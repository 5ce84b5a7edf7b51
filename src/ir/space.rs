//! Coordinate space markers.
//!
//! Zero-sized types used as the `TSpace` parameter of
//! [`BBoxLTWH`](super::BBoxLTWH) so that pixel boxes read from VisDrone rows
//! cannot be written out as YOLO values without going through
//! normalization first.

use std::fmt;

/// Absolute pixel values, origin at the top-left corner of the image.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {}

/// Values divided by the image width (x axis) or height (y axis).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Normalized {}

impl fmt::Debug for Pixel {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl fmt::Debug for Normalized {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}
