// -*- mode: rust; -*-
//
// This file is part of ristretto255.
// See LICENSE for licensing information.

//! Serial implementations of field, scalar, point, and scalar-mul
//! arithmetic.

pub mod u64;

pub mod curve_models;

pub mod scalar_mul;
