/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! # Spikeflow Plasticity
//!
//! Spike-timing-dependent plasticity (STDP) rules: pure functions from the
//! timing difference between a synapse's two connected spikes to a synaptic
//! weight delta. The external synapse-update mechanism computes the timing
//! difference and applies the returned delta; nothing here touches network
//! state.
//!
//! Rule families:
//! - **Asymmetric** Hebbian/anti-Hebbian: exponential kernel, causal
//!   pre-before-post potentiates (Hebbian) or depresses (anti-Hebbian);
//! - **Symmetric** Hebbian/anti-Hebbian: difference-of-Gaussians kernel,
//!   sensitive to proximity rather than order;
//! - **Degenerate**: structurally a rule, always returns zero, for ablating
//!   learning in experiments.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod stdp;

pub use stdp::{
    difference_of_gaussians, gaussian, AsymmetricAntiHebbian, AsymmetricHebbian, Degenerate,
    StdpRule, SymmetricAntiHebbian, SymmetricHebbian, STDP_PARAM_COUNT,
};
