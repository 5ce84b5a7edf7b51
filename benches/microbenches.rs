//! Criterion microbenches for the per-line conversion path.
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

use visdrone2yolo::ir::io_visdrone::parse_annotation_line;
use visdrone2yolo::ir::io_yolo::to_label_string;
use visdrone2yolo::ir::{ImageSize, YoloRow};

// A slice of a VisDrone2019-DET-train annotation file.
const VISDRONE_FIXTURE: &str = "684,8,273,116,0,0,0,0
406,119,265,70,0,0,0,0
255,22,119,128,0,0,0,0
1,3,209,78,0,0,0,0
708,471,74,33,1,4,0,1
639,425,61,46,1,4,0,0
594,399,64,51,1,4,0,0
562,390,61,38,1,4,0,0
540,372,65,33,1,4,0,1
461,429,81,49,1,5,0,1
";

const IMAGE: ImageSize = ImageSize {
    width: 1360,
    height: 765,
};

fn convert_lines(text: &str) -> Vec<YoloRow> {
    text.lines()
        .filter_map(|line| parse_annotation_line(line).ok())
        .map(|row| row.to_yolo(IMAGE))
        .collect()
}

/// Benchmark parsing and normalizing annotation lines.
fn bench_parse_and_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("visdrone_parse");
    group.throughput(Throughput::Bytes(VISDRONE_FIXTURE.len() as u64));

    group.bench_function("parse_annotation_line", |b| {
        b.iter(|| black_box(convert_lines(black_box(VISDRONE_FIXTURE))))
    });

    group.finish();
}

/// Benchmark formatting a label file.
fn bench_label_format(c: &mut Criterion) {
    let rows = convert_lines(VISDRONE_FIXTURE);

    let mut group = c.benchmark_group("yolo_write");
    group.throughput(Throughput::Elements(rows.len() as u64));

    group.bench_function("to_label_string", |b| {
        b.iter(|| black_box(to_label_string(black_box(&rows))))
    });

    group.finish();
}

criterion_group!(benches, bench_parse_and_normalize, bench_label_format);
criterion_main!(benches);
