// -*- mode: rust; -*-
//
// This file is part of ristretto255.
// See LICENSE for licensing information.

//! Constant-time interleaved scalar multiplication, also known as
//! Straus' method.
//!
//! The two-scalar shapes here share one doubling chain between digit
//! streams: writing both scalars in signed radix 16, the accumulator is
//! multiplied by 16 once per digit position, then a masked table lookup
//! per stream adds the selected multiple.  The lookups visit every table
//! entry, so neither the digit values nor the lookup indices leak.

#![allow(non_snake_case)]

use crate::backend::serial::curve_models::ProjectiveNielsPoint;
use crate::edwards::EdwardsPoint;
use crate::scalar::Scalar;
use crate::traits::Identity;
use crate::window::LookupTable;

/// Compute \\( aA + bB \\) in constant time.
pub(crate) fn double_scalar_mul(
    a: &Scalar,
    A: &EdwardsPoint,
    b: &Scalar,
    B: &EdwardsPoint,
) -> EdwardsPoint {
    let table_A = LookupTable::<ProjectiveNielsPoint>::from(A);
    let table_B = LookupTable::<ProjectiveNielsPoint>::from(B);

    let a_digits = a.as_radix_16();
    let b_digits = b.as_radix_16();

    let mut Q = EdwardsPoint::identity();
    for i in (0..64).rev() {
        Q = Q.mul_by_pow_2(4);
        Q = (&Q + &table_A.select(a_digits[i])).as_extended();
        Q = (&Q + &table_B.select(b_digits[i])).as_extended();
    }

    Q
}

/// Compute \\( (aA, bA) \\) in constant time, sharing the lookup table
/// for \\( A \\) between both products.
pub(crate) fn dual_scalar_mul(
    a: &Scalar,
    b: &Scalar,
    A: &EdwardsPoint,
) -> (EdwardsPoint, EdwardsPoint) {
    let table_A = LookupTable::<ProjectiveNielsPoint>::from(A);

    let a_digits = a.as_radix_16();
    let b_digits = b.as_radix_16();

    let mut Q1 = EdwardsPoint::identity();
    let mut Q2 = EdwardsPoint::identity();
    for i in (0..64).rev() {
        Q1 = Q1.mul_by_pow_2(4);
        Q2 = Q2.mul_by_pow_2(4);
        Q1 = (&Q1 + &table_A.select(a_digits[i])).as_extended();
        Q2 = (&Q2 + &table_A.select(b_digits[i])).as_extended();
    }

    (Q1, Q2)
}
