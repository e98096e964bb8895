// -*- mode: rust; -*-
//
// This file is part of ristretto255.
// See LICENSE for licensing information.

//! Implementations of the various scalar-multiplication strategies.
//!
//! The constant-time strategies here never branch or index memory by
//! secret data; the sole variable-time strategy is quarantined in
//! [`vartime_double_base`] and must only ever see public scalars.

pub mod variable_base;

pub mod straus;

pub mod vartime_double_base;
