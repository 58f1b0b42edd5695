//! Binary codec for the database storage layout.
//!
//! Record layout, all fields little-endian:
//!
//! ```text
//! offset 0: stored_length  (u32) total record bytes, header included
//! offset 4: dimension      (u16)
//! offset 6: reserved       (u16) preserved verbatim, never interpreted
//! offset 8: elements       (dimension x f32, packed, no padding)
//! ```
//!
//! Every field is written and read individually; the codec never
//! reinterprets raw struct memory. Encode followed by decode is
//! lossless for every field, including `stored_length` and
//! `reserved`.

use dbvec_types::{serialized_len, VectorError, ELEMENT_BYTES, HEADER_BYTES};

use crate::Vector;

impl Vector {
    /// Number of bytes [`Vector::serialize_into`] writes for this
    /// vector: `8 + 4 * dim`.
    pub fn serialized_len(&self) -> usize {
        serialized_len(self.dim())
    }

    /// Write the binary record into the front of `buffer`, returning
    /// the byte count written.
    ///
    /// Capacity is a checked precondition: fails with
    /// [`VectorError::BufferTooSmall`] before writing anything if
    /// `buffer` is shorter than [`Vector::serialized_len`].
    pub fn serialize_into(&self, buffer: &mut [u8]) -> Result<usize, VectorError> {
        let needed = self.serialized_len();
        if buffer.len() < needed {
            return Err(VectorError::BufferTooSmall {
                needed,
                available: buffer.len(),
            });
        }
        buffer[0..4].copy_from_slice(&self.stored_length().to_le_bytes());
        buffer[4..6].copy_from_slice(&(self.dim() as u16).to_le_bytes());
        buffer[6..8].copy_from_slice(&self.reserved().to_le_bytes());
        for (slot, value) in buffer[HEADER_BYTES..needed]
            .chunks_exact_mut(ELEMENT_BYTES)
            .zip(self.as_slice())
        {
            slot.copy_from_slice(&value.to_le_bytes());
        }
        Ok(needed)
    }

    /// Serialize into a freshly allocated buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.serialized_len());
        buffer.extend_from_slice(&self.stored_length().to_le_bytes());
        buffer.extend_from_slice(&(self.dim() as u16).to_le_bytes());
        buffer.extend_from_slice(&self.reserved().to_le_bytes());
        for value in self.as_slice() {
            buffer.extend_from_slice(&value.to_le_bytes());
        }
        buffer
    }

    /// Decode a binary record from the front of `buffer`.
    ///
    /// The dimension is validated against `[1, VECTOR_MAX_DIM]`
    /// before any payload is read; malformed input is never coerced.
    /// Fails with [`VectorError::TruncatedInput`] if `buffer` holds
    /// fewer bytes than the header declares. Trailing bytes beyond
    /// the record are ignored.
    pub fn deserialize(buffer: &[u8]) -> Result<Self, VectorError> {
        if buffer.len() < HEADER_BYTES {
            return Err(VectorError::TruncatedInput {
                needed: HEADER_BYTES,
                available: buffer.len(),
            });
        }
        let stored_length = u32::from_le_bytes([buffer[0], buffer[1], buffer[2], buffer[3]]);
        let dim = u16::from_le_bytes([buffer[4], buffer[5]]) as usize;
        let reserved = u16::from_le_bytes([buffer[6], buffer[7]]);

        Self::validate_dimension(dim)?;
        let needed = serialized_len(dim);
        if buffer.len() < needed {
            return Err(VectorError::TruncatedInput {
                needed,
                available: buffer.len(),
            });
        }

        let mut elements = Vec::new();
        elements
            .try_reserve_exact(dim)
            .map_err(|_| VectorError::AllocationFailure { dim })?;
        for chunk in buffer[HEADER_BYTES..needed].chunks_exact(ELEMENT_BYTES) {
            elements.push(f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
        }
        Self::from_parts(stored_length, reserved, elements)
    }
}
