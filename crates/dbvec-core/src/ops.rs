//! Elementwise arithmetic, norms, and similarity metrics.
//!
//! All binary operations require equal dimensions and fail with
//! [`VectorError::DimensionMismatch`] otherwise. Element arithmetic
//! is plain IEEE-754 single precision: NaN and infinity propagate
//! with no special handling, with one deliberate exception for the
//! zero-norm case of cosine similarity.

use std::ops::Mul;

use dbvec_types::VectorError;

use crate::Vector;

impl Vector {
    fn check_compatibility(&self, other: &Self) -> Result<(), VectorError> {
        if self.dim() != other.dim() {
            return Err(VectorError::DimensionMismatch {
                left: self.dim(),
                right: other.dim(),
            });
        }
        Ok(())
    }

    /// Elementwise sum. Result has the same dimension and a fresh
    /// (zeroed) reserved slot.
    pub fn add(&self, other: &Self) -> Result<Self, VectorError> {
        self.check_compatibility(other)?;
        let elements = self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self::from_vec_unchecked(elements))
    }

    /// Elementwise difference.
    pub fn subtract(&self, other: &Self) -> Result<Self, VectorError> {
        self.check_compatibility(other)?;
        let elements = self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(a, b)| a - b)
            .collect();
        Ok(Self::from_vec_unchecked(elements))
    }

    /// Elementwise (Hadamard) product.
    pub fn multiply(&self, other: &Self) -> Result<Self, VectorError> {
        self.check_compatibility(other)?;
        let elements = self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(a, b)| a * b)
            .collect();
        Ok(Self::from_vec_unchecked(elements))
    }

    /// Multiply every element by `scalar`.
    ///
    /// Always succeeds; non-finite scalars propagate per IEEE
    /// semantics. `&v * s` and `s * &v` both route here, so the two
    /// spellings produce identical results.
    pub fn scale(&self, scalar: f32) -> Self {
        let elements = self.as_slice().iter().map(|a| a * scalar).collect();
        Self::from_vec_unchecked(elements)
    }

    /// Euclidean (L2) norm: sqrt of the sum of squared elements.
    /// Zero for an all-zero vector.
    pub fn l2_norm(&self) -> f32 {
        self.as_slice().iter().map(|v| v * v).sum::<f32>().sqrt()
    }

    /// Manhattan (L1) norm: sum of absolute element values.
    pub fn l1_norm(&self) -> f32 {
        self.as_slice().iter().map(|v| v.abs()).sum()
    }

    /// Sum of elementwise products.
    pub fn dot_product(&self, other: &Self) -> Result<f32, VectorError> {
        self.check_compatibility(other)?;
        Ok(self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Cosine of the angle between two vectors:
    /// `dot(a, b) / (|a| * |b|)`.
    ///
    /// Zero-norm convention: if either norm is exactly zero the
    /// result is exactly `0.0`, never NaN. Zero vectors are treated
    /// as maximally dissimilar to everything, including themselves.
    pub fn cosine_similarity(&self, other: &Self) -> Result<f32, VectorError> {
        let dot = self.dot_product(other)?;
        let norm_a = self.l2_norm();
        let norm_b = other.l2_norm();
        if norm_a == 0.0 || norm_b == 0.0 {
            return Ok(0.0);
        }
        Ok(dot / (norm_a * norm_b))
    }

    /// Euclidean distance: the L2 norm of the elementwise difference.
    pub fn l2_distance(&self, other: &Self) -> Result<f32, VectorError> {
        self.check_compatibility(other)?;
        Ok(self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(a, b)| {
                let d = a - b;
                d * d
            })
            .sum::<f32>()
            .sqrt())
    }
}

impl Mul<f32> for &Vector {
    type Output = Vector;

    fn mul(self, scalar: f32) -> Vector {
        self.scale(scalar)
    }
}

impl Mul<&Vector> for f32 {
    type Output = Vector;

    fn mul(self, vector: &Vector) -> Vector {
        vector.scale(self)
    }
}
