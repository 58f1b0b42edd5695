//! # dbvec-types
//!
//! Shared error type and wire-layout constants for the dbvec
//! workspace.
//!
//! The serialized record layout is fixed by the storage engine the
//! vectors interoperate with: an 8-byte header (total length,
//! dimension, reserved padding) followed by packed 32-bit floats.
//! The constants here describe that layout; `dbvec-core` implements
//! the codec against them.

pub mod error;

pub use error::VectorError;

/// Maximum number of dimensions a vector may hold.
///
/// Inherited from the storage engine's type-header conventions and
/// treated as a fixed constant.
pub const VECTOR_MAX_DIM: usize = 16_000;

/// Serialized header width in bytes: stored length (u32) +
/// dimension (u16) + reserved (u16).
pub const HEADER_BYTES: usize = 8;

/// Serialized width of one element (IEEE-754 single precision).
pub const ELEMENT_BYTES: usize = 4;

/// Total serialized byte length of a vector of `dim` elements.
pub const fn serialized_len(dim: usize) -> usize {
    HEADER_BYTES + dim * ELEMENT_BYTES
}
