// -*- mode: rust; -*-
//
// This file is part of ristretto255.
// See LICENSE for licensing information.

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![doc(html_root_url = "https://docs.rs/ristretto255")]

//! # ristretto255
//!
//! **A pure-Rust implementation of the ristretto255 prime-order group.**
//!
//! ristretto255 is a construction of a prime-order group of order
//! \\(\ell = 2\^{252} + 27742317777372353535851937790883648493\\) on top
//! of the cofactor-8 Edwards form of Curve25519, obtained by quotienting
//! out the 4-torsion and the point sign.  Consumers get a clean abstract
//! group suitable for higher-level protocols — signatures, PAKEs, VRFs,
//! zero-knowledge proofs — without having to reason about small-subgroup
//! attacks, point malleability, or non-unique encodings.
//!
//! The public API surface is:
//!
//! * [`scalar::Scalar`], an integer modulo \\( \ell \\) in canonical form;
//! * [`ristretto::RistrettoPoint`], a group element, with a canonical
//!   32-byte wire format via [`ristretto::CompressedRistretto`];
//! * [`ristretto::RistrettoBasepointTable`], a precomputed comb for
//!   fixed-base scalar multiplication;
//! * hash-to-group via the Ristretto-flavoured Elligator map, and its
//!   inverse for protocols that need to disguise points as random
//!   strings.
//!
//! All operations on secret data are constant time: no secret-dependent
//! branches, no secret-indexed table lookups, no secret-dependent loop
//! bounds.  The single exception is
//! [`ristretto::RistrettoPoint::vartime_double_scalar_mul_basepoint`],
//! which is variable-time by design for signature verification and says
//! so in its name.
//!
//! This crate is `no_std` and performs no heap allocation.

//------------------------------------------------------------------------
// External dependencies:
//------------------------------------------------------------------------

// Internal macros. Must come first!
#[macro_use]
pub(crate) mod macros;

// ------------------------------------------------------------------------
// ristretto255 public modules
// ------------------------------------------------------------------------

// Scalar arithmetic mod l = 2^252 + ..., the order of the Ristretto group
pub mod scalar;

// Ristretto
pub mod ristretto;

// Useful constants, like the Ristretto basepoint
pub mod constants;

// External (and internal) traits.
pub mod traits;

// ------------------------------------------------------------------------
// ristretto255 internal modules
// ------------------------------------------------------------------------

// Finite field arithmetic mod p = 2^255 - 19
pub(crate) mod field;

// Arithmetic backends (only serial u64 for now) live here
pub(crate) mod backend;

// Edwards curve point arithmetic underneath the quotient
pub(crate) mod edwards;

// Inverse of the Ristretto-flavoured Elligator map
pub(crate) mod elligator;

// Constant-time and variable-time lookup tables for scalar multiplication
pub(crate) mod window;
