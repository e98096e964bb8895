// -*- mode: rust; -*-
//
// This file is part of ristretto255.
// See LICENSE for licensing information.

//! Module for common traits.

#![allow(non_snake_case)]

use subtle::ConstantTimeEq;

use crate::scalar::Scalar;

// ------------------------------------------------------------------------
// Public Traits
// ------------------------------------------------------------------------

/// Trait for getting the identity element of a point type.
pub trait Identity {
    /// Returns the identity element of the curve.
    /// Can be used as a constructor.
    fn identity() -> Self;
}

/// Trait for testing if a curve point is equivalent to the identity point.
pub trait IsIdentity {
    /// Return true if this element is the identity element of the curve.
    fn is_identity(&self) -> bool;
}

/// Implement generic identity equality testing for a point representation
/// which has constant-time equality testing and a defined identity
/// constructor.
impl<T> IsIdentity for T
where
    T: ConstantTimeEq + Identity,
{
    fn is_identity(&self) -> bool {
        self.ct_eq(&T::identity()).into()
    }
}

/// A precomputed table of multiples of a basepoint, used to accelerate
/// fixed-base scalar multiplication.
pub trait BasepointTable {
    /// The type of point contained within this table.
    type Point;

    /// Generate a new precomputed basepoint table from the given basepoint.
    fn create(basepoint: &Self::Point) -> Self;

    /// Retrieve the original basepoint from this table.
    fn basepoint(&self) -> Self::Point;

    /// Multiply a `scalar` by this precomputed basepoint table, in constant
    /// time.
    fn mul_base(&self, scalar: &Scalar) -> Self::Point;
}

/// A trait for checking the validity of a point's internal representation,
/// for use in debugging and testing.  Public inputs are validated by the
/// ristretto decoder, not by this predicate.
pub trait ValidityCheck {
    /// Checks whether the point is on the curve and (for the extended model)
    /// whether the coherence invariant X·Y = Z·T holds.
    fn is_valid(&self) -> bool;
}
