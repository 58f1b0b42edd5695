//! Human-readable text format: `[1,2,3]`.
//!
//! Mirrors the storage engine's text representation: comma-separated
//! elements in square brackets, no spaces on output. Input tolerates
//! surrounding whitespace and whitespace around elements.

use dbvec_core::Vector;
use dbvec_types::VectorError;

use crate::error::CodecError;

/// Format a vector as `[e0,e1,...]`.
pub fn format_vector(vector: &Vector) -> String {
    let mut out = String::from("[");
    for (i, value) in vector.as_slice().iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&value.to_string());
    }
    out.push(']');
    out
}

/// Parse the `[e0,e1,...]` form.
///
/// Dimension bounds are enforced the same as every other construction
/// path: an empty list is rejected as dimension 0, and a list longer
/// than the maximum dimension is rejected rather than coerced.
pub fn parse_vector(input: &str) -> Result<Vector, CodecError> {
    let trimmed = input.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| CodecError::Parse {
            token: trimmed.to_string(),
            reason: "expected a bracketed list".to_string(),
        })?;

    if inner.trim().is_empty() {
        return Err(VectorError::InvalidDimension { dim: 0 }.into());
    }

    let mut elements = Vec::new();
    for token in inner.split(',') {
        let token = token.trim();
        let value: f32 = token.parse().map_err(|e: std::num::ParseFloatError| {
            CodecError::Parse {
                token: token.to_string(),
                reason: e.to_string(),
            }
        })?;
        elements.push(value);
    }
    Ok(Vector::from_vec(elements)?)
}
