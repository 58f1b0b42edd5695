//! # dbvec-core
//!
//! A fixed-dimension vector value type stored in a database-compatible
//! binary layout: an 8-byte header (total serialized length, dimension,
//! reserved padding) followed by packed 32-bit floats.
//!
//! ## Features
//! - Dimension-validated construction ([1, 16000]), zero-initialized
//! - Elementwise arithmetic (add, subtract, Hadamard multiply, scale)
//! - Norms and similarity metrics (L1, L2, dot product, cosine,
//!   Euclidean distance)
//! - Total-order comparison across mixed dimensions, suitable for
//!   sorting
//! - Byte-exact binary serialization that round-trips every header
//!   field
//!
//! The type is a plain value: no interior mutability, no sharing, no
//! internal synchronization. All operations are synchronous and
//! non-blocking; errors are typed and surfaced at the offending call.

pub mod ops;
pub mod ord;
pub mod vector;
pub mod wire;

pub use dbvec_types::{VectorError, VECTOR_MAX_DIM};
pub use vector::Vector;
