// -*- mode: rust; -*-
//
// This file is part of ristretto255.
// See LICENSE for licensing information.

//! Various constants, such as the Ristretto basepoint and the sizes of
//! the wire formats.

#![allow(non_snake_case)]

use crate::ristretto::{CompressedRistretto, RistrettoPoint};
use crate::scalar::Scalar;

pub(crate) use crate::backend::serial::u64::constants::*;

/// The number of bytes in a serialized scalar.
pub const SCALAR_BYTES: usize = 32;

/// The number of bytes in a serialized group element.
pub const SER_BYTES: usize = 32;

/// The number of bytes consumed by the nonuniform hash-to-group map.
pub const HASH_BYTES: usize = 32;

/// The number of bits in a scalar.
pub const SCALAR_BITS: usize = 253;

/// The cofactor the curve would have, if the quotient hadn't removed it.
pub const REMOVED_COFACTOR: usize = 8;

/// The number of meaningful bits in the `which` parameter of
/// [`RistrettoPoint::invert_elligator_nonuniform`]: \\( \lceil \log_2 8
/// \rceil + 7 + 1 - (255 \bmod 8) = 5 \\).
pub const INVERT_ELLIGATOR_WHICH_BITS: u32 = 5;

/// The Ristretto basepoint, in `CompressedRistretto` format.
pub const RISTRETTO_BASEPOINT_COMPRESSED: CompressedRistretto = CompressedRistretto([
    0xe2, 0xf2, 0xae, 0x0a, 0x6a, 0xbc, 0x4e, 0x71, 0xa8, 0x84, 0xa9, 0x61, 0xc5, 0x00, 0x51, 0x5f,
    0x58, 0xe3, 0x0b, 0x6a, 0xa5, 0x82, 0xdd, 0x8d, 0xb6, 0xa6, 0x59, 0x45, 0xe0, 0x8d, 0x2d, 0x76,
]);

/// The Ristretto basepoint, as a `RistrettoPoint`.
///
/// Internally this is the image of the Ed25519 basepoint under the
/// quotient map.
pub const RISTRETTO_BASEPOINT_POINT: RistrettoPoint = RistrettoPoint(ED25519_BASEPOINT_POINT);

/// `BASEPOINT_ORDER` is the order of the Ristretto group, i.e.,
/// $$
/// \ell = 2^\{252\} + 27742317777372353535851937790883648493.
/// $$
pub const BASEPOINT_ORDER: Scalar = Scalar {
    bytes: [
        0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde,
        0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x10,
    ],
};

#[cfg(test)]
mod test {
    use crate::constants;
    use crate::field::FieldElement;
    use crate::traits::{IsIdentity, ValidityCheck};

    #[test]
    fn test_eight_torsion() {
        for i in 0..8 {
            let Q = constants::EIGHT_TORSION[i].mul_by_pow_2(3);
            assert!(Q.is_valid());
            assert!(Q.is_identity());
        }
    }

    #[test]
    fn test_four_torsion() {
        for i in (0..8).filter(|i| i % 2 == 0) {
            let Q = constants::EIGHT_TORSION[i].mul_by_pow_2(2);
            assert!(Q.is_valid());
            assert!(Q.is_identity());
        }
    }

    #[test]
    fn test_sqrt_minus_one() {
        // Test that SQRT_M1 is the positive square root of -1
        let minus_one = FieldElement::MINUS_ONE;
        let sqrt_m1_sq = &constants::SQRT_M1 * &constants::SQRT_M1;
        assert_eq!(minus_one, sqrt_m1_sq);
        assert!(bool::from(!constants::SQRT_M1.is_negative()));
    }

    #[test]
    fn test_sqrt_ad_minus_one() {
        let a = FieldElement::MINUS_ONE;
        let ad_minus_one = &(&a * &constants::EDWARDS_D) + &a;
        let should_be_ad_minus_one = constants::SQRT_AD_MINUS_ONE.square();
        assert_eq!(should_be_ad_minus_one, ad_minus_one);
    }

    #[test]
    fn test_d_vs_ratio() {
        // Test that d = -121665/121666
        let a = -&FieldElement::from_bytes(&[
            0xc1, 0xdb, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
        ]);
        let b = FieldElement::from_bytes(&[
            0xc2, 0xdb, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
        ]);
        let d = &a * &b.invert();
        let d2 = &d + &d;
        assert_eq!(d, constants::EDWARDS_D);
        assert_eq!(d2, constants::EDWARDS_D2);
    }

    #[test]
    fn test_elligator_squared_constants() {
        let one = FieldElement::ONE;
        let one_minus_d_sq = &one - &constants::EDWARDS_D.square();
        let d_minus_one_sq = (&constants::EDWARDS_D - &one).square();
        assert_eq!(one_minus_d_sq, constants::ONE_MINUS_EDWARDS_D_SQUARED);
        assert_eq!(d_minus_one_sq, constants::EDWARDS_D_MINUS_ONE_SQUARED);
    }

    #[test]
    fn test_basepoint_order() {
        // ℓ·B = 0 is checked at the ristretto layer; here just check the
        // scalar constant reduces to zero.
        use crate::scalar::Scalar;
        let l_bytes = constants::BASEPOINT_ORDER.to_bytes();
        assert!(bool::from(Scalar::from_canonical_bytes(l_bytes).is_none()));
        assert_eq!(Scalar::from_bytes_mod_order(l_bytes), Scalar::ZERO);
    }
}
