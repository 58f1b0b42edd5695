//! # dbvec-io
//!
//! Reader/writer layer around the `dbvec-core` binary codec, plus the
//! human-readable text format.
//!
//! The core type performs no I/O and emits no logs; this crate is the
//! boundary where records meet streams and where codec diagnostics
//! are traced.

pub mod binary;
pub mod error;
pub mod text;

pub use binary::{read_vector, write_vector};
pub use error::CodecError;
pub use text::{format_vector, parse_vector};
