//! Image dimension probing.
//!
//! The converter only needs the width and height of each paired image, but
//! an image that cannot be decoded must still be skipped. [`DecodeProbe`]
//! decodes the whole image through the `image` crate and is the default.
//! [`HeaderProbe`] reads only the file header through `imagesize`: much
//! faster, but it accepts files whose pixel data is truncated or corrupt.

use std::path::Path;

use image::ImageReader;

use crate::error::ConvertError;
use crate::ir::ImageSize;

/// Returns the pixel dimensions of an image file, or a decode failure.
pub trait ImageProbe {
    fn dimensions(&self, path: &Path) -> Result<ImageSize, ConvertError>;
}

/// Full decode backed by the `image` crate (JPEG and PNG).
///
/// The format is guessed from the file content, falling back to the
/// extension.
#[derive(Clone, Copy, Debug, Default)]
pub struct DecodeProbe;

impl ImageProbe for DecodeProbe {
    fn dimensions(&self, path: &Path) -> Result<ImageSize, ConvertError> {
        let open_err = |source| ConvertError::ImageOpen {
            path: path.to_path_buf(),
            source,
        };

        let decoded = ImageReader::open(path)
            .map_err(open_err)?
            .with_guessed_format()
            .map_err(open_err)?
            .decode()
            .map_err(|source| ConvertError::ImageDecode {
                path: path.to_path_buf(),
                source,
            })?;

        checked_size(path, decoded.width() as usize, decoded.height() as usize)
    }
}

/// Header-only probe backed by the `imagesize` crate.
///
/// Pixel data is never read, so a file with a valid header and a broken
/// body still yields dimensions.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeaderProbe;

impl ImageProbe for HeaderProbe {
    fn dimensions(&self, path: &Path) -> Result<ImageSize, ConvertError> {
        let size = imagesize::size(path).map_err(|source| ConvertError::ImageDimensionRead {
            path: path.to_path_buf(),
            source,
        })?;

        checked_size(path, size.width, size.height)
    }
}

fn checked_size(path: &Path, width: usize, height: usize) -> Result<ImageSize, ConvertError> {
    let invalid = || ConvertError::ImageDimensionInvalid {
        path: path.to_path_buf(),
        width,
        height,
    };

    // Zero sizes would turn every normalized value into inf/NaN.
    if width == 0 || height == 0 {
        return Err(invalid());
    }

    let width: u32 = width.try_into().map_err(|_| invalid())?;
    let height: u32 = height.try_into().map_err(|_| invalid())?;

    Ok(ImageSize::new(width, height))
}
