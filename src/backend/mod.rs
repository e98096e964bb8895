// -*- mode: rust; -*-
//
// This file is part of ristretto255.
// See LICENSE for licensing information.

//! **INTERNALS:** pluggable arithmetic backends.
//!
//! The spec treats the limb-level multiplication and squaring
//! primitives as a replaceable back-end; this crate provides one
//! serial implementation using `u64` limbs with `u128` products.

pub mod serial;
