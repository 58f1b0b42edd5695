//! Error types for vector operations.

use thiserror::Error;

use crate::VECTOR_MAX_DIM;

/// Errors that can occur during vector construction, arithmetic, and
/// binary codec operations.
///
/// Every variant is a synchronous, non-retryable condition surfaced
/// directly at the offending call. There is no internal recovery or
/// retry anywhere in the core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VectorError {
    /// Dimension outside the supported range
    #[error("invalid dimension {dim}: must be between 1 and {max}", max = VECTOR_MAX_DIM)]
    InvalidDimension { dim: usize },

    /// Binary operation between vectors of different dimensions
    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// Element access beyond the vector's dimension
    #[error("index {index} out of range for dimension {dim}")]
    IndexOutOfRange { index: usize, dim: usize },

    /// Destination buffer shorter than the serialized record
    #[error("buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    /// Input buffer shorter than its header declares
    #[error("truncated input: need {needed} bytes, have {available}")]
    TruncatedInput { needed: usize, available: usize },

    /// Element storage could not be acquired
    #[error("allocation failure for {dim} dimensions")]
    AllocationFailure { dim: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_bounds() {
        let err = VectorError::InvalidDimension { dim: 16_001 };
        assert_eq!(
            err.to_string(),
            "invalid dimension 16001: must be between 1 and 16000"
        );

        let err = VectorError::DimensionMismatch { left: 2, right: 3 };
        assert_eq!(err.to_string(), "dimension mismatch: 2 vs 3");
    }

    #[test]
    fn test_truncated_and_buffer_errors_carry_sizes() {
        let err = VectorError::TruncatedInput {
            needed: 20,
            available: 12,
        };
        assert_eq!(err.to_string(), "truncated input: need 20 bytes, have 12");

        let err = VectorError::BufferTooSmall {
            needed: 20,
            available: 4,
        };
        assert_eq!(err.to_string(), "buffer too small: need 20 bytes, have 4");
    }
}
