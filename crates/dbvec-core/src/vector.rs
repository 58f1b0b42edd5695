//! The `Vector` value type: construction, validation, and element
//! access.
//!
//! A `Vector` owns a packed sequence of 32-bit floats and carries the
//! storage header (total serialized length, reserved padding) with
//! the value, so that decode followed by re-encode reproduces the
//! original bytes exactly. The dimension is not stored separately:
//! it is always `elements.len()`, which makes the
//! `elements.len() == dimension` invariant structural.

use dbvec_types::{serialized_len, VectorError, VECTOR_MAX_DIM};
use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Fixed-dimension vector of f32 elements with a database-compatible
/// storage header.
///
/// The dimension is fixed at construction and stays in
/// `[1, VECTOR_MAX_DIM]` for the lifetime of the value; element
/// values may be mutated in place via [`Vector::set`] or
/// [`Vector::as_mut_slice`]. Cloning deep-copies the element storage,
/// producing a fully independent value.
#[derive(Debug, Clone)]
pub struct Vector {
    /// Total serialized byte length (header + payload). Recorded for
    /// storage-engine compatibility; not meaningful to arithmetic.
    stored_length: u32,
    /// Reserved header slot. Written as zero, preserved verbatim when
    /// decoded nonzero, never interpreted.
    reserved: u16,
    elements: Vec<f32>,
}

impl Vector {
    /// Create a zero-filled vector of `dim` elements.
    ///
    /// Fails with [`VectorError::InvalidDimension`] outside
    /// `[1, VECTOR_MAX_DIM]` and [`VectorError::AllocationFailure`]
    /// if the element storage cannot be acquired.
    pub fn new(dim: usize) -> Result<Self, VectorError> {
        Self::validate_dimension(dim)?;
        let mut elements = Vec::new();
        elements
            .try_reserve_exact(dim)
            .map_err(|_| VectorError::AllocationFailure { dim })?;
        elements.resize(dim, 0.0);
        Ok(Self {
            stored_length: serialized_len(dim) as u32,
            reserved: 0,
            elements,
        })
    }

    /// Create a vector from existing element values, taking ownership.
    ///
    /// The dimension is `elements.len()`, validated against the same
    /// bounds as [`Vector::new`].
    pub fn from_vec(elements: Vec<f32>) -> Result<Self, VectorError> {
        Self::validate_dimension(elements.len())?;
        Ok(Self {
            stored_length: serialized_len(elements.len()) as u32,
            reserved: 0,
            elements,
        })
    }

    /// Create a vector by copying a slice of element values.
    pub fn from_slice(elements: &[f32]) -> Result<Self, VectorError> {
        Self::from_vec(elements.to_vec())
    }

    /// Reassemble a vector from decoded header fields and elements.
    ///
    /// Used by the binary codec: `stored_length` and `reserved` are
    /// carried through unchanged so a decoded record re-encodes to
    /// the same bytes, even when `reserved` is nonzero.
    pub fn from_parts(
        stored_length: u32,
        reserved: u16,
        elements: Vec<f32>,
    ) -> Result<Self, VectorError> {
        Self::validate_dimension(elements.len())?;
        Ok(Self {
            stored_length,
            reserved,
            elements,
        })
    }

    /// Construct from elements already known to be within bounds.
    ///
    /// Arithmetic results reuse the dimension of an already-validated
    /// operand, so re-validation is skipped.
    pub(crate) fn from_vec_unchecked(elements: Vec<f32>) -> Self {
        debug_assert!((1..=VECTOR_MAX_DIM).contains(&elements.len()));
        Self {
            stored_length: serialized_len(elements.len()) as u32,
            reserved: 0,
            elements,
        }
    }

    /// Number of elements; fixed for the lifetime of the value.
    pub fn dim(&self) -> usize {
        self.elements.len()
    }

    /// Total serialized byte length recorded in the header.
    pub fn stored_length(&self) -> u32 {
        self.stored_length
    }

    /// Reserved header field; zero unless this value was decoded from
    /// a record that carried a nonzero slot.
    pub fn reserved(&self) -> u16 {
        self.reserved
    }

    /// Bounds-checked element read.
    pub fn get(&self, index: usize) -> Result<f32, VectorError> {
        self.elements
            .get(index)
            .copied()
            .ok_or(VectorError::IndexOutOfRange {
                index,
                dim: self.elements.len(),
            })
    }

    /// Bounds-checked element write. The dimension never changes.
    pub fn set(&mut self, index: usize, value: f32) -> Result<(), VectorError> {
        let dim = self.elements.len();
        match self.elements.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(VectorError::IndexOutOfRange { index, dim }),
        }
    }

    /// Elements as a shared slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.elements
    }

    /// Elements as a mutable slice for bulk in-place updates.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.elements
    }

    pub(crate) fn validate_dimension(dim: usize) -> Result<(), VectorError> {
        if dim < 1 || dim > VECTOR_MAX_DIM {
            return Err(VectorError::InvalidDimension { dim });
        }
        Ok(())
    }
}

/// Serializes as a bare sequence of elements (`[1.0,2.0,3.0]` in
/// JSON).
///
/// The self-describing serde form intentionally drops the storage
/// header; the binary codec in [`crate::wire`] is the lossless
/// representation.
impl Serialize for Vector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.elements.len()))?;
        for value in &self.elements {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Vector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ElementsVisitor;

        impl<'de> Visitor<'de> for ElementsVisitor {
            type Value = Vector;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "a sequence of 1 to {VECTOR_MAX_DIM} floats")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Vector, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let hint = seq.size_hint().unwrap_or(0).min(VECTOR_MAX_DIM);
                let mut elements = Vec::with_capacity(hint);
                while let Some(value) = seq.next_element::<f32>()? {
                    elements.push(value);
                }
                Vector::from_vec(elements).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_seq(ElementsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zero_initialized() {
        let v = Vector::new(4).unwrap();
        assert_eq!(v.dim(), 4);
        assert!(v.as_slice().iter().all(|&x| x == 0.0));
        assert_eq!(v.reserved(), 0);
        assert_eq!(v.stored_length(), 8 + 4 * 4);
    }

    #[test]
    fn test_new_edge_dimensions() {
        assert!(Vector::new(1).is_ok());
        assert!(Vector::new(VECTOR_MAX_DIM).is_ok());
    }

    #[test]
    fn test_new_rejects_out_of_range_dimensions() {
        assert_eq!(
            Vector::new(0),
            Err(VectorError::InvalidDimension { dim: 0 })
        );
        assert_eq!(
            Vector::new(VECTOR_MAX_DIM + 1),
            Err(VectorError::InvalidDimension { dim: 16_001 })
        );
    }

    #[test]
    fn test_from_slice_copies_elements() {
        let v = Vector::from_slice(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(v.dim(), 3);
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_from_vec_rejects_empty() {
        assert_eq!(
            Vector::from_vec(vec![]),
            Err(VectorError::InvalidDimension { dim: 0 })
        );
    }

    #[test]
    fn test_get_set_bounds_checked() {
        let mut v = Vector::new(2).unwrap();
        v.set(0, 1.5).unwrap();
        v.set(1, -2.5).unwrap();
        assert_eq!(v.get(0), Ok(1.5));
        assert_eq!(v.get(1), Ok(-2.5));

        assert_eq!(
            v.get(2),
            Err(VectorError::IndexOutOfRange { index: 2, dim: 2 })
        );
        assert_eq!(
            v.set(5, 0.0),
            Err(VectorError::IndexOutOfRange { index: 5, dim: 2 })
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let mut a = Vector::from_slice(&[1.0, 2.0]).unwrap();
        let b = a.clone();
        a.set(0, 99.0).unwrap();
        assert_eq!(b.get(0), Ok(1.0));
    }

    #[test]
    fn test_from_parts_preserves_header_fields() {
        let v = Vector::from_parts(999, 7, vec![1.0]).unwrap();
        assert_eq!(v.stored_length(), 999);
        assert_eq!(v.reserved(), 7);
    }

    #[test]
    fn test_from_parts_validates_dimension() {
        assert_eq!(
            Vector::from_parts(8, 0, vec![]),
            Err(VectorError::InvalidDimension { dim: 0 })
        );
    }

    #[test]
    fn test_serde_round_trip_as_element_sequence() {
        let v = Vector::from_slice(&[1.0, 2.5, -3.0]).unwrap();
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.0,2.5,-3.0]");

        let decoded: Vector = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, v);
    }

    #[test]
    fn test_serde_rejects_empty_sequence() {
        let result: Result<Vector, _> = serde_json::from_str("[]");
        assert!(result.is_err());
    }
}
