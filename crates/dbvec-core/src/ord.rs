//! Equality and total-order comparison.
//!
//! Equality is plain IEEE elementwise comparison. Ordering is
//! lexicographic over the shared prefix, with dimension as the final
//! ascending tie-break (shorter sorts first), so collections of
//! mixed-dimension vectors sort deterministically.

use std::cmp::Ordering;

use crate::Vector;

/// IEEE elementwise equality: dimensions equal and every pair of
/// corresponding elements `==`. So `+0.0 == -0.0`, and any NaN
/// element makes the vectors unequal. Header fields do not
/// participate.
impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Vector {
    /// Lexicographic comparison over the first
    /// `min(self.dim(), other.dim())` elements; the first strictly
    /// ordered pair decides. If no pair decides, the shorter
    /// dimension sorts first.
    ///
    /// Element pairs that are IEEE-equal or incomparable (NaN on
    /// either side) do not decide the ordering, which keeps the
    /// result total and usable with `sort_by` even for vectors
    /// containing NaN. Note this means `compare` can report `Equal`
    /// for vectors that are unequal under [`PartialEq`].
    pub fn compare(&self, other: &Self) -> Ordering {
        for (a, b) in self.as_slice().iter().zip(other.as_slice()) {
            if a < b {
                return Ordering::Less;
            }
            if a > b {
                return Ordering::Greater;
            }
        }
        self.dim().cmp(&other.dim())
    }
}

/// Always `Some`, delegating to [`Vector::compare`]; the derived
/// `<`, `<=`, `>`, `>=` relations are therefore mutually consistent.
impl PartialOrd for Vector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}
