//! Plain-text stick traces.
//!
//! One sample per line: `x y [button]`, raw axis values in `0..=65535` and
//! the raw button line level (`0` low/pressed, `1` high/released). A line
//! without a button column keeps the previous level. Blank lines and `#`
//! comments are skipped.

use thiserror::Error;
use thumbstick::Sample;

/// One scan cycle of a trace
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceSample {
    pub sample: Sample,
    /// Raw button line level, `None` to keep the previous one
    pub button_level: Option<bool>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TraceError {
    #[error("line {line}: expected `x y [button]`, got {fields} fields")]
    FieldCount { line: usize, fields: usize },

    #[error("line {line}: invalid axis value `{value}` (expected 0..=65535)")]
    InvalidAxis { line: usize, value: String },

    #[error("line {line}: invalid button level `{value}` (expected 0 or 1)")]
    InvalidButton { line: usize, value: String },
}

/// Parse a whole trace.
pub fn parse_trace(text: &str) -> Result<Vec<TraceSample>, TraceError> {
    let mut samples = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let content = raw.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }

        let fields: Vec<&str> = content.split_whitespace().collect();
        if !(2..=3).contains(&fields.len()) {
            return Err(TraceError::FieldCount {
                line,
                fields: fields.len(),
            });
        }

        let axis = |value: &str| {
            value.parse::<u16>().map_err(|_| TraceError::InvalidAxis {
                line,
                value: value.to_string(),
            })
        };
        let x = axis(fields[0])?;
        let y = axis(fields[1])?;

        let button_level = match fields.get(2) {
            None => None,
            Some(&"0") => Some(false),
            Some(&"1") => Some(true),
            Some(other) => {
                return Err(TraceError::InvalidButton {
                    line,
                    value: other.to_string(),
                })
            }
        };

        samples.push(TraceSample {
            sample: Sample::new(x, y),
            button_level,
        });
    }

    log::debug!("trace: parsed {} samples", samples.len());
    Ok(samples)
}
