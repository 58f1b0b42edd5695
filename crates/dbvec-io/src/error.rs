//! I/O layer error types.

use dbvec_types::VectorError;
use thiserror::Error;

/// Errors from stream framing and text-format conversion.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Core vector error (dimension bounds, truncation, mismatch)
    #[error(transparent)]
    Vector(#[from] VectorError),

    /// Underlying stream error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed text representation
    #[error("parse error at {token:?}: {reason}")]
    Parse { token: String, reason: String },
}
