// -*- mode: rust; -*-
//
// This file is part of ristretto255.
// See LICENSE for licensing information.

//! Group operations for Curve25519, in Edwards form.
//!
//! ## Encoding and Decoding
//!
//! This module is crate-internal: the public group element is
//! [`RistrettoPoint`](crate::ristretto::RistrettoPoint), a wrapper which
//! accounts for the quotient by the 4-torsion.  There is deliberately no
//! Edwards-level encoding here; all wire formats go through the
//! ristretto codec, which is the only validating entry point.
//!
//! ## Equality Testing
//!
//! The `EdwardsPoint` struct implements the [`subtle::ConstantTimeEq`]
//! trait for constant-time equality checking.  Note that this checks
//! equality of Edwards points, which is finer than equality in the
//! quotient group.
//!
//! ## Scalar Multiplication
//!
//! Scalar multiplication on Edwards points is provided by:
//!
//! * the `*` operator between a `Scalar` and a `EdwardsPoint`, which
//!   performs constant-time variable-base scalar multiplication;
//!
//! * the `*` operator between a `Scalar` and a `EdwardsBasepointTable`,
//!   which performs constant-time fixed-base scalar multiplication;
//!
//! * `EdwardsPoint::double_scalar_mul`, constant-time, and
//!   `EdwardsPoint::vartime_double_scalar_mul_basepoint`,
//!   **variable-time**, for the two-scalar linear-combination shapes.

#![allow(non_snake_case)]

use core::fmt::Debug;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Neg, Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::backend::serial::curve_models::AffineNielsPoint;
use crate::backend::serial::curve_models::CompletedPoint;
use crate::backend::serial::curve_models::ProjectiveNielsPoint;
use crate::backend::serial::curve_models::ProjectivePoint;
use crate::backend::serial::scalar_mul;
use crate::constants;
use crate::field::FieldElement;
use crate::scalar::Scalar;
use crate::traits::BasepointTable;
use crate::traits::Identity;
use crate::traits::ValidityCheck;
use crate::window::LookupTable;

// ------------------------------------------------------------------------
// Internal point representations
// ------------------------------------------------------------------------

/// An `EdwardsPoint` represents a point on the Edwards form of Curve25519,
/// in extended twisted Edwards coordinates \\((X:Y:Z:T)\\) satisfying
/// \\(X \cdot Y = Z \cdot T\\).
#[derive(Copy, Clone)]
pub(crate) struct EdwardsPoint {
    pub(crate) X: FieldElement,
    pub(crate) Y: FieldElement,
    pub(crate) Z: FieldElement,
    pub(crate) T: FieldElement,
}

// ------------------------------------------------------------------------
// Constructors
// ------------------------------------------------------------------------

impl Identity for EdwardsPoint {
    fn identity() -> EdwardsPoint {
        EdwardsPoint {
            X: FieldElement::ZERO,
            Y: FieldElement::ONE,
            Z: FieldElement::ONE,
            T: FieldElement::ZERO,
        }
    }
}

impl Default for EdwardsPoint {
    fn default() -> EdwardsPoint {
        EdwardsPoint::identity()
    }
}

// ------------------------------------------------------------------------
// Zeroize implementations for wiping points from memory
// ------------------------------------------------------------------------

#[cfg(feature = "zeroize")]
impl Zeroize for EdwardsPoint {
    /// Reset this `EdwardsPoint` to the identity element.
    fn zeroize(&mut self) {
        self.X.zeroize();
        self.Y = FieldElement::ONE;
        self.Z = FieldElement::ONE;
        self.T.zeroize();
    }
}

// ------------------------------------------------------------------------
// Validity checks (for debugging, not CT)
// ------------------------------------------------------------------------

impl ValidityCheck for EdwardsPoint {
    fn is_valid(&self) -> bool {
        let nonzero_Z = !bool::from(self.Z.is_zero());
        let point_on_curve = self.as_projective().is_valid();
        let on_segre_image = (&self.X * &self.Y) == (&self.Z * &self.T);

        nonzero_Z && point_on_curve && on_segre_image
    }
}

// ------------------------------------------------------------------------
// Constant-time assignment
// ------------------------------------------------------------------------

impl ConditionallySelectable for EdwardsPoint {
    fn conditional_select(a: &EdwardsPoint, b: &EdwardsPoint, choice: Choice) -> EdwardsPoint {
        EdwardsPoint {
            X: FieldElement::conditional_select(&a.X, &b.X, choice),
            Y: FieldElement::conditional_select(&a.Y, &b.Y, choice),
            Z: FieldElement::conditional_select(&a.Z, &b.Z, choice),
            T: FieldElement::conditional_select(&a.T, &b.T, choice),
        }
    }
}

// ------------------------------------------------------------------------
// Equality
// ------------------------------------------------------------------------

impl ConstantTimeEq for EdwardsPoint {
    fn ct_eq(&self, other: &EdwardsPoint) -> Choice {
        // We would like to check that the point (X/Z, Y/Z) is equal to
        // the point (X'/Z', Y'/Z') without converting into affine
        // coordinates (x, y) and (x', y'), which requires two inversions.
        // We have that X = xZ and X' = x'Z'. Thus, x = x' is equivalent to
        // (xZ')Z = (x'Z)Z', and similarly for the y-coordinate.

        (&self.X * &other.Z).ct_eq(&(&other.X * &self.Z))
            & (&self.Y * &other.Z).ct_eq(&(&other.Y * &self.Z))
    }
}

impl PartialEq for EdwardsPoint {
    fn eq(&self, other: &EdwardsPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for EdwardsPoint {}

// ------------------------------------------------------------------------
// Point conversions
// ------------------------------------------------------------------------

impl EdwardsPoint {
    /// Convert to a ProjectiveNielsPoint
    pub(crate) fn as_projective_niels(&self) -> ProjectiveNielsPoint {
        ProjectiveNielsPoint {
            Y_plus_X: &self.Y + &self.X,
            Y_minus_X: &self.Y - &self.X,
            Z: self.Z,
            T2d: &self.T * &constants::EDWARDS_D2,
        }
    }

    /// Convert the representation of this point from extended
    /// coordinates to projective coordinates.
    ///
    /// Free.
    pub(crate) fn as_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            X: self.X,
            Y: self.Y,
            Z: self.Z,
        }
    }

    /// Dehomogenize to a AffineNielsPoint.
    /// Mainly for testing.
    pub(crate) fn as_affine_niels(&self) -> AffineNielsPoint {
        let recip = self.Z.invert();
        let x = &self.X * &recip;
        let y = &self.Y * &recip;
        let xy2d = &(&x * &y) * &constants::EDWARDS_D2;
        AffineNielsPoint {
            y_plus_x: &y + &x,
            y_minus_x: &y - &x,
            xy2d,
        }
    }
}

// ------------------------------------------------------------------------
// Doubling
// ------------------------------------------------------------------------

impl EdwardsPoint {
    /// Add this point to itself.
    pub(crate) fn double(&self) -> EdwardsPoint {
        self.as_projective().double().as_extended()
    }

    /// Compute \\([2\^k] P \\) by successive doublings. Requires \\( k > 0 \\).
    pub(crate) fn mul_by_pow_2(&self, k: u32) -> EdwardsPoint {
        debug_assert!(k > 0);
        let mut r: CompletedPoint;
        let mut s = self.as_projective();
        for _ in 0..(k - 1) {
            r = s.double();
            s = r.as_projective();
        }
        // Unroll last iteration so we can go directly as_extended()
        s.double().as_extended()
    }
}

// ------------------------------------------------------------------------
// Addition and Subtraction
// ------------------------------------------------------------------------

impl<'a, 'b> Add<&'b EdwardsPoint> for &'a EdwardsPoint {
    type Output = EdwardsPoint;
    fn add(self, other: &'b EdwardsPoint) -> EdwardsPoint {
        (self + &other.as_projective_niels()).as_extended()
    }
}

define_add_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint, Output = EdwardsPoint);

impl<'b> AddAssign<&'b EdwardsPoint> for EdwardsPoint {
    fn add_assign(&mut self, _rhs: &'b EdwardsPoint) {
        *self = (self as &EdwardsPoint) + _rhs;
    }
}

define_add_assign_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint);

impl<'a, 'b> Sub<&'b EdwardsPoint> for &'a EdwardsPoint {
    type Output = EdwardsPoint;
    fn sub(self, other: &'b EdwardsPoint) -> EdwardsPoint {
        (self - &other.as_projective_niels()).as_extended()
    }
}

define_sub_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint, Output = EdwardsPoint);

impl<'b> SubAssign<&'b EdwardsPoint> for EdwardsPoint {
    fn sub_assign(&mut self, _rhs: &'b EdwardsPoint) {
        *self = (self as &EdwardsPoint) - _rhs;
    }
}

define_sub_assign_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint);

// ------------------------------------------------------------------------
// Negation
// ------------------------------------------------------------------------

impl<'a> Neg for &'a EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        EdwardsPoint {
            X: -(&self.X),
            Y: self.Y,
            Z: self.Z,
            T: -(&self.T),
        }
    }
}

impl Neg for EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        -&self
    }
}

// ------------------------------------------------------------------------
// Scalar multiplication
// ------------------------------------------------------------------------

impl<'b> MulAssign<&'b Scalar> for EdwardsPoint {
    fn mul_assign(&mut self, scalar: &'b Scalar) {
        let result = (self as &EdwardsPoint) * scalar;
        *self = result;
    }
}

define_mul_assign_variants!(LHS = EdwardsPoint, RHS = Scalar);

define_mul_variants!(LHS = EdwardsPoint, RHS = Scalar, Output = EdwardsPoint);
define_mul_variants!(LHS = Scalar, RHS = EdwardsPoint, Output = EdwardsPoint);

impl<'a, 'b> Mul<&'b Scalar> for &'a EdwardsPoint {
    type Output = EdwardsPoint;
    /// Scalar multiplication: compute `scalar * self`.
    ///
    /// For scalar multiplication of a basepoint,
    /// `EdwardsBasepointTable` is approximately 4x faster.
    fn mul(self, scalar: &'b Scalar) -> EdwardsPoint {
        scalar_mul::variable_base::mul(self, scalar)
    }
}

impl<'a, 'b> Mul<&'b EdwardsPoint> for &'a Scalar {
    type Output = EdwardsPoint;

    /// Scalar multiplication: compute `scalar * self`.
    fn mul(self, point: &'b EdwardsPoint) -> EdwardsPoint {
        point * self
    }
}

impl EdwardsPoint {
    /// Fixed-base scalar multiplication by the Ed25519 base point.
    pub(crate) fn mul_base(scalar: &Scalar) -> Self {
        scalar * constants::ED25519_BASEPOINT_POINT
    }

    /// Compute \\( aA + bB \\) in constant time, for any points
    /// \\( A \\), \\( B \\).
    pub(crate) fn double_scalar_mul(
        a: &Scalar,
        A: &EdwardsPoint,
        b: &Scalar,
        B: &EdwardsPoint,
    ) -> EdwardsPoint {
        scalar_mul::straus::double_scalar_mul(a, A, b, B)
    }

    /// Compute \\( (aA, bA) \\) in constant time, sharing a single
    /// lookup table for \\( A \\).
    pub(crate) fn dual_scalar_mul(
        a: &Scalar,
        b: &Scalar,
        A: &EdwardsPoint,
    ) -> (EdwardsPoint, EdwardsPoint) {
        scalar_mul::straus::dual_scalar_mul(a, b, A)
    }

    /// Compute \\(aA + bB\\) in variable time, where \\(B\\) is the Ed25519 basepoint.
    pub(crate) fn vartime_double_scalar_mul_basepoint(
        a: &Scalar,
        A: &EdwardsPoint,
        b: &Scalar,
    ) -> EdwardsPoint {
        scalar_mul::vartime_double_base::mul(a, A, b)
    }
}

// ------------------------------------------------------------------------
// Basepoint table
// ------------------------------------------------------------------------

/// A precomputed table of multiples of a basepoint, for accelerating
/// fixed-base scalar multiplication.  One table, for the Ed25519
/// basepoint, wraps into the public
/// [`RistrettoBasepointTable`](crate::ristretto::RistrettoBasepointTable).
///
/// The basepoint tables are reasonably large, so they should be allocated
/// by the caller and passed by reference; being a plain `Sized` value
/// type, the table's size and alignment are published through
/// `core::mem::{size_of, align_of}`.
///
/// The table contains \\( B, 16B, 256B, 4096B, \ldots \\), i.e.
/// \\( (16\^2)\^i B \\) for \\( 0 \leq i < 32 \\), with each "tooth"
/// holding the first eight multiples of its entry so that a signed
/// radix-16 digit selects a stored point in one masked sweep.
#[derive(Clone)]
pub(crate) struct EdwardsBasepointTable(pub(crate) [LookupTable<AffineNielsPoint>; 32]);

impl BasepointTable for EdwardsBasepointTable {
    type Point = EdwardsPoint;

    /// Create a table of precomputed multiples of `basepoint`.
    fn create(basepoint: &EdwardsPoint) -> EdwardsBasepointTable {
        let mut table = EdwardsBasepointTable([LookupTable::default(); 32]);
        let mut P = *basepoint;
        for i in 0..32 {
            // P = (16^2)^i * B
            table.0[i] = LookupTable::from(&P);
            P = P.mul_by_pow_2(8);
        }
        table
    }

    /// Get the basepoint for this table as an `EdwardsPoint`.
    fn basepoint(&self) -> EdwardsPoint {
        // self.0[0].select(1) = 1*(16^2)^0*B
        // but as an `AffineNielsPoint`, so add identity to convert to extended.
        (&EdwardsPoint::identity() + &self.0[0].select(1)).as_extended()
    }

    /// The computation uses Pippenger's algorithm, as described for the
    /// specific case of radix-16 on page 13 of the Ed25519 paper.
    ///
    /// # Piecewise strategy
    ///
    /// Write the scalar \\( a \\) in radix \\( 16 \\) with coefficients
    /// in \\( [-8,8) \\), i.e., $$
    ///     a = a\_0 + a\_1 16\^1 + \cdots + a\_{63} 16\^{63},
    /// $$ with \\( -8 \leq a_i < 8 \\), \\( -8 \leq a\_{63} \leq 8 \\).
    /// Then $$
    ///     a B = a\_0 B + a\_1 16\^1 B + \cdots + a\_{63} 16\^{63} B.
    /// $$
    /// Grouping even and odd coefficients gives $$
    /// \begin{aligned}
    ///     a B = \quad a\_0 16\^0 B +& a\_2 16\^2 B + \cdots + a\_{62} 16\^{62} B    \\\\
    ///               + a\_1 16\^1 B +& a\_3 16\^3 B + \cdots + a\_{63} 16\^{63} B    \\\\
    ///         = \quad(a\_0 16\^0 B +& a\_2 16\^2 B + \cdots + a\_{62} 16\^{62} B)   \\\\
    ///             + 16(a\_1 16\^0 B +& a\_3 16\^2 B + \cdots + a\_{63} 16\^{62} B). \\\\
    /// \end{aligned}
    /// $$
    /// For each \\( i = 0 \ldots 31 \\), we create a lookup table of
    /// multiples of \\( 16\^{2i} B \\), and use it to select \\( x \cdot 16\^{2i} B \\)
    /// in constant time.
    ///
    /// The radix-\\(16\\) representation requires that the scalar is
    /// bounded by \\(2\^{255}\\), which is always the case.
    fn mul_base(&self, scalar: &Scalar) -> EdwardsPoint {
        let a = scalar.as_radix_16();

        let tables = &self.0;
        let mut P = EdwardsPoint::identity();

        for i in (0..64).filter(|x| x % 2 == 1) {
            P = (&P + &tables[i / 2].select(a[i])).as_extended();
        }

        P = P.mul_by_pow_2(4);

        for i in (0..64).filter(|x| x % 2 == 0) {
            P = (&P + &tables[i / 2].select(a[i])).as_extended();
        }

        P
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a EdwardsBasepointTable {
    type Output = EdwardsPoint;

    /// Construct an `EdwardsPoint` from a `Scalar` \\(a\\) by
    /// computing the multiple \\(aB\\) of this basepoint \\(B\\).
    fn mul(self, scalar: &'b Scalar) -> EdwardsPoint {
        self.mul_base(scalar)
    }
}

impl<'a, 'b> Mul<&'b EdwardsBasepointTable> for &'a Scalar {
    type Output = EdwardsPoint;

    /// Construct an `EdwardsPoint` from a `Scalar` \\(a\\) by
    /// computing the multiple \\(aB\\) of this basepoint \\(B\\).
    fn mul(self, basepoint_table: &'b EdwardsBasepointTable) -> EdwardsPoint {
        basepoint_table * self
    }
}

impl Debug for EdwardsBasepointTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "EdwardsBasepointTable([\n")?;
        for i in 0..32 {
            write!(f, "\t{:?},\n", &self.0[i])?;
        }
        write!(f, "])")
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for EdwardsBasepointTable {
    fn zeroize(&mut self) {
        for table in self.0.iter_mut() {
            table.zeroize();
        }
    }
}

// ------------------------------------------------------------------------
// Debug traits
// ------------------------------------------------------------------------

impl Debug for EdwardsPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "EdwardsPoint{{\n\tX: {:?},\n\tY: {:?},\n\tZ: {:?},\n\tT: {:?}\n}}",
            &self.X, &self.Y, &self.Z, &self.T
        )
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::traits::IsIdentity;

    /// The largest valid scalar (not mod l).
    static LARGEST_UNREDUCED_SCALAR: Scalar = Scalar {
        bytes: [
            0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
            0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
            0xff, 0xff, 0xff, 0x7f,
        ],
    };

    #[test]
    fn basepoint_is_valid() {
        assert!(constants::ED25519_BASEPOINT_POINT.is_valid());
    }

    #[test]
    fn identity_is_valid() {
        assert!(EdwardsPoint::identity().is_valid());
    }

    #[test]
    fn eight_torsion_is_valid_and_small_order() {
        for P in &constants::EIGHT_TORSION {
            assert!(P.is_valid());
            assert!(P.mul_by_pow_2(3).is_identity());
        }
    }

    #[test]
    fn add_vs_double_on_basepoint() {
        let B = constants::ED25519_BASEPOINT_POINT;
        assert_eq!(B + B, B.double());
    }

    #[test]
    fn basepoint_plus_identity() {
        let B = constants::ED25519_BASEPOINT_POINT;
        assert_eq!(B + EdwardsPoint::identity(), B);
    }

    #[test]
    fn add_vs_niels_forms() {
        // Mixed (affine Niels) and readdition (projective Niels) must agree.
        let B = constants::ED25519_BASEPOINT_POINT;
        let P = B.double();
        let sum_proj = (&P + &B.as_projective_niels()).as_extended();
        let sum_aff = (&P + &B.as_affine_niels()).as_extended();
        assert_eq!(sum_proj, sum_aff);
        assert!(sum_proj.is_valid());
    }

    #[test]
    fn scalar_mul_vs_basepoint_table() {
        let s = Scalar::from(999u64);
        let table = EdwardsBasepointTable::create(&constants::ED25519_BASEPOINT_POINT);
        assert_eq!(EdwardsPoint::mul_base(&s), &table * &s);
        assert_eq!(table.basepoint(), constants::ED25519_BASEPOINT_POINT);
    }

    #[test]
    fn scalar_mul_by_zero_one_and_order() {
        let B = constants::ED25519_BASEPOINT_POINT;
        assert!((B * Scalar::ZERO).is_identity());
        assert_eq!(B * Scalar::ONE, B);
        // l * B = identity in the prime-order subgroup
        let l_minus_one = -&Scalar::ONE;
        assert_eq!(B * l_minus_one + B, EdwardsPoint::identity());
    }

    #[test]
    fn scalarmul_distributes_over_scalar_addition() {
        let B = constants::ED25519_BASEPOINT_POINT;
        let s = Scalar::from(12345u64);
        let t = Scalar::from(67890u64);
        assert_eq!(B * (s + t), B * s + B * t);
    }

    #[test]
    fn scalar_mul_largest_unreduced() {
        // Scalar multiplication must tolerate any scalar below 2^255.
        let B = constants::ED25519_BASEPOINT_POINT;
        let P = B * LARGEST_UNREDUCED_SCALAR;
        assert!(P.is_valid());
        let reduced = Scalar::from_bytes_mod_order(LARGEST_UNREDUCED_SCALAR.bytes);
        assert_eq!(P, B * reduced);
    }

    #[test]
    fn double_scalar_mul_vs_separate_muls() {
        let B = constants::ED25519_BASEPOINT_POINT;
        let A = B.double().double();
        let a = Scalar::from(2468u64);
        let b = Scalar::from(13579u64);
        let result = EdwardsPoint::double_scalar_mul(&a, &A, &b, &B);
        assert_eq!(result, A * a + B * b);
    }

    #[test]
    fn dual_scalar_mul_vs_separate_muls() {
        let A = constants::ED25519_BASEPOINT_POINT.double();
        let a = Scalar::from(2468u64);
        let b = Scalar::from(13579u64);
        let (aA, bA) = EdwardsPoint::dual_scalar_mul(&a, &b, &A);
        assert_eq!(aA, A * a);
        assert_eq!(bA, A * b);
    }

    #[test]
    fn vartime_double_scalar_mul_vs_ct() {
        let B = constants::ED25519_BASEPOINT_POINT;
        let A = B.double();
        let a = Scalar::from(87329482u64);
        let b = Scalar::from(37238947u64);
        let result = EdwardsPoint::vartime_double_scalar_mul_basepoint(&a, &A, &b);
        assert_eq!(result, A * a + B * b);
    }

    #[test]
    fn conditional_select_switches() {
        let A = constants::ED25519_BASEPOINT_POINT;
        let B = A.double();
        assert_eq!(EdwardsPoint::conditional_select(&A, &B, Choice::from(0)), A);
        assert_eq!(EdwardsPoint::conditional_select(&A, &B, Choice::from(1)), B);
    }
}
