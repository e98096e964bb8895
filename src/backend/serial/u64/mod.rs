// -*- mode: rust; -*-
//
// This file is part of ristretto255.
// See LICENSE for licensing information.

//! The `u64` backend uses `u64`s and a `(u64, u64) -> u128` multiplier.
//!
//! On x86_64, the idiom `(x as u128) * (y as u128)` lowers to `MUL`
//! instructions taking 64-bit inputs and producing 128-bit outputs.  On
//! other platforms, this implementation is not recommended.

pub mod constants;
pub mod field;
pub mod scalar;
