#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// PNG signature plus an IHDR chunk and nothing else: the header is valid,
/// the pixel data is missing.
pub fn png_header_only(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(33);
    bytes.extend_from_slice(b"\x89PNG\r\n\x1a\n");
    bytes.extend_from_slice(&13u32.to_be_bytes());
    bytes.extend_from_slice(b"IHDR");
    bytes.extend_from_slice(&width.to_be_bytes());
    bytes.extend_from_slice(&height.to_be_bytes());
    bytes.extend_from_slice(&[8, 2, 0, 0, 0]);
    bytes.extend_from_slice(&[0, 0, 0, 0]);
    bytes
}

fn create_parent(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
}

/// Encode a black image; the format follows the path's extension.
fn write_image(path: &Path, width: u32, height: u32) {
    create_parent(path);
    image::RgbImage::new(width, height)
        .save(path)
        .expect("encode image file");
}

pub fn write_png(path: &Path, width: u32, height: u32) {
    write_image(path, width, height);
}

pub fn write_jpeg(path: &Path, width: u32, height: u32) {
    write_image(path, width, height);
}

pub fn write_annotation(path: &Path, content: &str) {
    create_parent(path);
    fs::write(path, content).expect("write annotation file");
}
