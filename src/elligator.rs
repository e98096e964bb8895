// -*- mode: rust; -*-
//
// This file is part of ristretto255.
// See LICENSE for licensing information.

//! Inversion of the Ristretto-flavoured Elligator map.
//!
//! Elligator2 computes a point from a field element in two steps: first
//! it computes a point \\((s, t)\\) on the Jacobi quartic associated to
//! the Edwards curve, and then it maps that point through the isogeny
//! into twisted Edwards form.
//!
//! Inversion runs in three steps.  Any Ristretto point has four
//! representatives as even Edwards points.  For each of those, there
//! are two points on the Jacobi quartic that map to it, and each of
//! those eight quartic points might have an Elligator2 preimage; the
//! other preimage of each, where defined, is its negation.  The
//! `which` parameter of the public functions selects among these
//! candidates (and the spare high bit of the byte encoding) in constant
//! time, so that each `which` value succeeds or fails independently of
//! the others; looping over `which` with rejection therefore samples
//! preimages uniformly.

#![allow(non_snake_case)]

use subtle::{
    Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq, CtOption,
};

use crate::constants;
use crate::field::FieldElement;
use crate::ristretto::RistrettoPoint;

/// Represents a point (s,t) on the Jacobi quartic associated
/// to the Edwards curve.
#[derive(Copy, Clone)]
pub(crate) struct JacobiPoint {
    pub S: FieldElement,
    pub T: FieldElement,
}

impl JacobiPoint {
    /// Elligator2 is defined in two steps: first a function `e` maps a field
    /// element `x` to a point on the Jacobi quartic associated to the Edwards
    /// curve.  Then this point is mapped to a point on the Edwards curve.
    /// Note `e` maps `x` and `-x` to the same point.
    ///
    /// This function computes a positive field element that is mapped by `e`
    /// to a given point, if it exists.  The other inverse is the negative of
    /// the return value.
    pub(crate) fn e_inv_positive(&self) -> CtOption<FieldElement> {
        let mut out = FieldElement::ZERO;

        // Special case: s = 0.  If s is zero, either t = 1 or t = -1.
        // If t=1, then sqrt(i*d) is the preimage.  Otherwise it's 0.
        let s_is_zero = self.S.is_zero();
        let t_equals_one = self.T.ct_eq(&FieldElement::ONE);
        out.conditional_assign(&constants::SQRT_ID, t_equals_one);
        let mut is_defined = s_is_zero;
        let mut done = s_is_zero;

        // a := (t+1) (d+1)/(d-1)
        let a = &(&self.T + &FieldElement::ONE) * &constants::DP1_OVER_DM1;
        let a2 = a.square();

        // y := 1/sqrt(i (s^4 - a^2)).
        let s2 = self.S.square();
        let s4 = s2.square();
        let invSqY = &(&s4 - &a2) * &constants::SQRT_M1;

        // There is no preimage if the square root of i*(s^4-a^2) does not exist.
        let (sq, y) = invSqY.invsqrt();
        is_defined |= sq;
        done |= !sq;

        // x := (a + sign(s)*s^2) y
        let mut pms2 = s2;
        pms2.conditional_negate(self.S.is_negative());
        let mut x = &(&a + &pms2) * &y;
        // Always pick the positive solution
        let x_is_negative = x.is_negative();
        x.conditional_negate(x_is_negative);
        out.conditional_assign(&x, !done);

        CtOption::new(out, is_defined)
    }

    pub(crate) fn dual(&self) -> JacobiPoint {
        JacobiPoint {
            S: -(&self.S),
            T: -(&self.T),
        }
    }
}

impl RistrettoPoint {
    /// Find a point on the Jacobi quartic associated to each of the four
    /// points Ristretto equivalent to p.
    ///
    /// There is one exception: for (0,-1) there is no point on the quartic and
    /// so we repeat one on the quartic equivalent to (0,1).
    fn to_jacobi_quartic_ristretto(self) -> [JacobiPoint; 4] {
        let x2 = self.0.X.square(); // X^2
        let y2 = self.0.Y.square(); // Y^2
        let y4 = y2.square(); // Y^4
        let z2 = self.0.Z.square(); // Z^2
        let z_min_y = &self.0.Z - &self.0.Y; // Z - Y
        let z_pl_y = &self.0.Z + &self.0.Y; // Z + Y
        let z2_min_y2 = &z2 - &y2; // Z^2 - Y^2

        // gamma := 1/sqrt( Y^4 X^2 (Z^2 - Y^2) )
        let (_, gamma) = (&(&y4 * &x2) * &z2_min_y2).invsqrt();

        let den = &gamma * &y2;

        let s_over_x = &den * &z_min_y;
        let sp_over_xp = &den * &z_pl_y;

        let s0 = &s_over_x * &self.0.X;
        let s1 = &(-(&sp_over_xp)) * &self.0.X;

        // t_0 := -2/sqrt(-d-1) * Z * sOverX
        // t_1 := -2/sqrt(-d-1) * Z * spOverXp
        let tmp = &constants::MDOUBLE_INVSQRT_A_MINUS_D * &self.0.Z;
        let mut t0 = &tmp * &s_over_x;
        let mut t1 = &tmp * &sp_over_xp;

        // den := -1/sqrt(1+d) (Y^2 - Z^2) gamma
        let den = &(&(-(&z2_min_y2)) * &constants::MINVSQRT_ONE_PLUS_D) * &gamma;

        // Same as before but with the substitution (X, Y, Z) = (Y, X, i*Z)
        let iz = &constants::SQRT_M1 * &self.0.Z; // iZ
        let iz_min_x = &iz - &self.0.X; // iZ - X
        let iz_pl_x = &iz + &self.0.X; // iZ + X

        let s_over_y = &den * &iz_min_x;
        let sp_over_yp = &den * &iz_pl_x;

        let mut s2 = &s_over_y * &self.0.Y;
        let mut s3 = &(-(&sp_over_yp)) * &self.0.Y;

        // t_2 := -2/sqrt(-d-1) * i*Z * sOverY
        // t_3 := -2/sqrt(-d-1) * i*Z * spOverYp
        let tmp = &constants::MDOUBLE_INVSQRT_A_MINUS_D * &iz;
        let mut t2 = &tmp * &s_over_y;
        let mut t3 = &tmp * &sp_over_yp;

        // Special case: X=0 or Y=0.  Then return
        //
        //  (0,1)   (1,-2i/sqrt(-d-1))   (-1,-2i/sqrt(-d-1))
        //
        // Note that if X=0 or Y=0, then s_i = t_i = 0.
        let x_or_y_is_zero = self.0.X.is_zero() | self.0.Y.is_zero();
        t0.conditional_assign(&FieldElement::ONE, x_or_y_is_zero);
        t1.conditional_assign(&FieldElement::ONE, x_or_y_is_zero);
        t2.conditional_assign(&constants::MIDOUBLE_INVSQRT_A_MINUS_D, x_or_y_is_zero);
        t3.conditional_assign(&constants::MIDOUBLE_INVSQRT_A_MINUS_D, x_or_y_is_zero);
        s2.conditional_assign(&FieldElement::ONE, x_or_y_is_zero);
        s3.conditional_assign(&(-(&FieldElement::ONE)), x_or_y_is_zero);

        [
            JacobiPoint { S: s0, T: t0 },
            JacobiPoint { S: s1, T: t1 },
            JacobiPoint { S: s2, T: t2 },
            JacobiPoint { S: s3, T: t3 },
        ]
    }

    /// Invert [`RistrettoPoint::from_hash_nonuniform`]: recover a 32-byte
    /// string which that function maps back to `self`.
    ///
    /// Since the map is many-to-one, `which` selects among the preimages:
    /// the low three bits pick one of the eight Jacobi-quartic candidates,
    /// the next bit picks the sign of the recovered field element, and the
    /// top bit of the 5-bit range supplies the spare high bit of the byte
    /// string (which the forward map discards).  Each `which` value
    /// succeeds or fails independently, so sampling `which` at random and
    /// retrying on failure yields a uniformly distributed preimage.
    ///
    /// The number of meaningful bits in `which` is
    /// [`INVERT_ELLIGATOR_WHICH_BITS`](crate::constants::INVERT_ELLIGATOR_WHICH_BITS);
    /// higher bits are ignored.
    pub fn invert_elligator_nonuniform(&self, which: u32) -> CtOption<[u8; 32]> {
        let (bytes, is_some) = self.invert_elligator_nonuniform_parts(which);
        CtOption::new(bytes, is_some)
    }

    fn invert_elligator_nonuniform_parts(&self, which: u32) -> ([u8; 32], Choice) {
        let jcs = self.to_jacobi_quartic_ristretto();

        let index = (which & 7) as u8;
        let negate = Choice::from(((which >> 3) & 1) as u8);
        let high_bit = ((which >> 4) & 1) as u8;

        let mut fe = FieldElement::ZERO;
        let mut is_some = Choice::from(0u8);
        for (i, jc) in jcs.iter().enumerate() {
            let candidates = [jc.e_inv_positive(), jc.dual().e_inv_positive()];
            for (j, candidate) in candidates.iter().enumerate() {
                let selected = index.ct_eq(&((2 * i + j) as u8));
                fe.conditional_assign(&candidate.unwrap_or(FieldElement::ZERO), selected);
                is_some.conditional_assign(&candidate.is_some(), selected);
            }
        }

        fe.conditional_negate(negate);

        // The forward map ignores bit 255, so it is free; drawing it from
        // `which` keeps the recovered strings uniform over all encodings
        // of the same residue.
        let mut bytes = fe.to_bytes();
        bytes[31] |= high_bit << 7;

        (bytes, is_some)
    }

    /// Invert [`RistrettoPoint::from_uniform_bytes`].
    ///
    /// The second 32-byte half of `partial_hash` is kept as-is; the first
    /// half is recovered so that the whole 64-byte string maps to `self`.
    /// This works by mapping the second half forward, subtracting it from
    /// `self`, and inverting the nonuniform map on the difference with the
    /// given `which`.
    pub fn invert_elligator_uniform(
        &self,
        partial_hash: &[u8; 64],
        which: u32,
    ) -> CtOption<[u8; 64]> {
        let mut second_half = [0u8; 32];
        second_half.copy_from_slice(&partial_hash[32..]);

        let stolen = RistrettoPoint::from_hash_nonuniform(&second_half);
        let difference = self - &stolen;

        let (first_half, is_some) = difference.invert_elligator_nonuniform_parts(which);

        let mut recovered = *partial_hash;
        recovered[..32].copy_from_slice(&first_half);

        CtOption::new(recovered, is_some)
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------
