//! Fuzz target for VisDrone single-line annotation parsing.
//!
//! Feeds arbitrary UTF-8 lines to the line parser, checking for panics,
//! crashes, or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use visdrone2yolo::ir::io_visdrone::fuzz_parse_annotation_line;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1024 * 1024 {
        return;
    }

    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };

    fuzz_parse_annotation_line(line);
});
