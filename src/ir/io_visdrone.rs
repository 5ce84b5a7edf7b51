//! VisDrone DET annotation reader.
//!
//! Each line holds eight comma-separated numbers; there is no header row.

use std::fmt;

use super::bbox::BBoxLTWH;
use super::model::VisDroneRow;

/// Number of fields in a VisDrone DET annotation line.
pub const FIELD_COUNT: usize = 8;

const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "bbox_left",
    "bbox_top",
    "bbox_width",
    "bbox_height",
    "score",
    "object_category",
    "truncation",
    "occlusion",
];

/// Why a single annotation line was rejected.
#[derive(Clone, Debug, PartialEq)]
pub enum LineError {
    /// The line did not split into exactly eight non-empty tokens.
    Malformed { tokens: usize },
    /// A token could not be parsed as a finite number.
    NonNumeric { field: &'static str, raw: String },
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::Malformed { tokens } => {
                write!(f, "expected {FIELD_COUNT} fields, found {tokens}")
            }
            LineError::NonNumeric { field, raw } => {
                write!(f, "invalid {field} '{raw}'; expected a finite number")
            }
        }
    }
}

/// Parse one annotation line.
///
/// Tokens are split on commas, trimmed, and empty tokens are dropped, so
/// trailing commas are tolerated and a blank line counts as malformed.
pub fn parse_annotation_line(line: &str) -> Result<VisDroneRow, LineError> {
    let tokens: Vec<&str> = line
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.len() != FIELD_COUNT {
        return Err(LineError::Malformed {
            tokens: tokens.len(),
        });
    }

    let mut values = [0.0f64; FIELD_COUNT];
    for (index, raw) in tokens.iter().enumerate() {
        values[index] = parse_f64_token(raw, FIELD_NAMES[index])?;
    }

    let [left, top, width, height, score, category, truncation, occlusion] = values;
    Ok(VisDroneRow {
        bbox: BBoxLTWH::new(left, top, width, height),
        score,
        category,
        truncation,
        occlusion,
    })
}

/// Fuzz-only entrypoint for single-line annotation parsing.
#[cfg(feature = "fuzzing")]
pub fn fuzz_parse_annotation_line(input: &str) {
    let _ = parse_annotation_line(input);
}

fn parse_f64_token(raw: &str, field: &'static str) -> Result<f64, LineError> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LineError::NonNumeric {
            field,
            raw: raw.to_string(),
        }),
    }
}
