//! Annotation rows and boxes on both sides of the conversion.
//!
//! VisDrone rows carry a pixel-space top-left box; YOLO rows carry a
//! normalized center box. The [`Pixel`] and [`Normalized`] markers keep
//! the two apart at compile time.
//!
//! # Example
//!
//! ```
//! use visdrone2yolo::ir::{io_visdrone, ImageSize};
//!
//! let row = io_visdrone::parse_annotation_line("10,20,30,40,0.9,5,0,1").unwrap();
//! let yolo = row.to_yolo(ImageSize::new(100, 200));
//! assert_eq!(yolo.to_string(), "5 0.250000 0.200000 0.300000 0.200000 1");
//! ```

mod bbox;
pub mod io_visdrone;
pub mod io_yolo;
mod model;
mod space;

pub use bbox::{BBoxCXCYWH, BBoxLTWH};
pub use model::{ImageSize, VisDroneRow, YoloRow};
pub use space::{Normalized, Pixel};
