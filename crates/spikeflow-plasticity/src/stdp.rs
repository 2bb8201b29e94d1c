/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! STDP (Spike-Timing-Dependent Plasticity) rules.
//!
//! Pure functions for computing synaptic weight changes based on spike
//! timing. `delta_t` is the postsynaptic spike time minus the presynaptic
//! spike time, the same sign convention across every rule.

use serde::{Deserialize, Serialize};
use spikeflow_structures::{Parametrized, SpikeflowError, SpikeflowResult};

/// Length of every rule's flat parameter vector.
///
/// All families share one width so an external black-box tuner sees a
/// uniform genotype regardless of the rule in use.
pub const STDP_PARAM_COUNT: usize = 4;

/// Exponential STDP kernel, Hebbian sign convention.
///
/// - `delta_t > 0` (pre before post): `a_plus * exp(-delta_t / tau_plus)`
/// - `delta_t < 0` (post before pre): `-a_minus * exp(delta_t / tau_minus)`
/// - `delta_t == 0`: exactly zero
#[inline]
fn exponential_delta_w(delta_t: f64, a_plus: f64, a_minus: f64, tau_plus: f64, tau_minus: f64) -> f64 {
    if delta_t > 0.0 {
        a_plus * (-delta_t / tau_plus.max(1e-6)).exp()
    } else if delta_t < 0.0 {
        -a_minus * (delta_t / tau_minus.max(1e-6)).exp()
    } else {
        0.0
    }
}

/// Zero-mean normal probability density.
#[inline]
pub fn gaussian(x: f64, sigma: f64) -> f64 {
    let sigma = sigma.max(1e-6);
    (-0.5 * (x / sigma).powi(2)).exp() / (sigma * (2.0 * std::f64::consts::PI).sqrt())
}

/// Difference-of-Gaussians kernel: positive near zero when
/// `sigma_plus < sigma_minus` (the classic center-surround shape).
#[inline]
pub fn difference_of_gaussians(x: f64, sigma_plus: f64, sigma_minus: f64) -> f64 {
    gaussian(x, sigma_plus) - gaussian(x, sigma_minus)
}

/// Difference-of-Gaussians STDP, Hebbian sign convention.
#[inline]
fn symmetric_delta_w(
    delta_t: f64,
    a_plus: f64,
    a_minus: f64,
    sigma_plus: f64,
    sigma_minus: f64,
) -> f64 {
    let g = difference_of_gaussians(delta_t, sigma_plus, sigma_minus);
    if g > 0.0 {
        -a_plus * g
    } else if g < 0.0 {
        -a_minus * g
    } else {
        0.0
    }
}

fn params_array(params: &[f64]) -> SpikeflowResult<[f64; STDP_PARAM_COUNT]> {
    params.try_into().map_err(|_| {
        SpikeflowError::BadParameters(format!(
            "expected {} rule parameters, got {}",
            STDP_PARAM_COUNT,
            params.len()
        ))
    })
}

/// Asymmetric Hebbian rule: causal pairs potentiate, anti-causal pairs
/// depress, both decaying exponentially with the timing gap.
///
/// Parameter vector layout: `[a_plus, a_minus, tau_plus, tau_minus]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsymmetricHebbian {
    pub a_plus: f64,
    pub a_minus: f64,
    pub tau_plus: f64,
    pub tau_minus: f64,
}

impl AsymmetricHebbian {
    pub fn new(a_plus: f64, a_minus: f64, tau_plus: f64, tau_minus: f64) -> Self {
        AsymmetricHebbian {
            a_plus,
            a_minus,
            tau_plus,
            tau_minus,
        }
    }

    #[inline]
    pub fn compute_delta_w(&self, delta_t: f64) -> f64 {
        exponential_delta_w(delta_t, self.a_plus, self.a_minus, self.tau_plus, self.tau_minus)
    }
}

impl Default for AsymmetricHebbian {
    fn default() -> Self {
        AsymmetricHebbian {
            a_plus: 0.01,
            a_minus: 0.012,
            tau_plus: 20.0,
            tau_minus: 20.0,
        }
    }
}

impl Parametrized for AsymmetricHebbian {
    fn get_params(&self) -> Vec<f64> {
        vec![self.a_plus, self.a_minus, self.tau_plus, self.tau_minus]
    }

    fn set_params(&mut self, params: &[f64]) -> SpikeflowResult<()> {
        let [a_plus, a_minus, tau_plus, tau_minus] = params_array(params)?;
        self.a_plus = a_plus;
        self.a_minus = a_minus;
        self.tau_plus = tau_plus;
        self.tau_minus = tau_minus;
        Ok(())
    }
}

/// Sign-negated [`AsymmetricHebbian`]: causal pairs depress.
///
/// Parameter vector layout: `[a_plus, a_minus, tau_plus, tau_minus]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsymmetricAntiHebbian {
    pub a_plus: f64,
    pub a_minus: f64,
    pub tau_plus: f64,
    pub tau_minus: f64,
}

impl AsymmetricAntiHebbian {
    pub fn new(a_plus: f64, a_minus: f64, tau_plus: f64, tau_minus: f64) -> Self {
        AsymmetricAntiHebbian {
            a_plus,
            a_minus,
            tau_plus,
            tau_minus,
        }
    }

    #[inline]
    pub fn compute_delta_w(&self, delta_t: f64) -> f64 {
        -exponential_delta_w(delta_t, self.a_plus, self.a_minus, self.tau_plus, self.tau_minus)
    }
}

impl Default for AsymmetricAntiHebbian {
    fn default() -> Self {
        AsymmetricAntiHebbian {
            a_plus: 0.01,
            a_minus: 0.012,
            tau_plus: 20.0,
            tau_minus: 20.0,
        }
    }
}

impl Parametrized for AsymmetricAntiHebbian {
    fn get_params(&self) -> Vec<f64> {
        vec![self.a_plus, self.a_minus, self.tau_plus, self.tau_minus]
    }

    fn set_params(&mut self, params: &[f64]) -> SpikeflowResult<()> {
        let [a_plus, a_minus, tau_plus, tau_minus] = params_array(params)?;
        self.a_plus = a_plus;
        self.a_minus = a_minus;
        self.tau_plus = tau_plus;
        self.tau_minus = tau_minus;
        Ok(())
    }
}

/// Symmetric Hebbian rule over a difference-of-Gaussians kernel: weight
/// change depends on how close the two spikes are, not on their order.
///
/// Parameter vector layout: `[a_plus, a_minus, sigma_plus, sigma_minus]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymmetricHebbian {
    pub a_plus: f64,
    pub a_minus: f64,
    pub sigma_plus: f64,
    pub sigma_minus: f64,
}

impl SymmetricHebbian {
    pub fn new(a_plus: f64, a_minus: f64, sigma_plus: f64, sigma_minus: f64) -> Self {
        SymmetricHebbian {
            a_plus,
            a_minus,
            sigma_plus,
            sigma_minus,
        }
    }

    #[inline]
    pub fn compute_delta_w(&self, delta_t: f64) -> f64 {
        symmetric_delta_w(
            delta_t,
            self.a_plus,
            self.a_minus,
            self.sigma_plus,
            self.sigma_minus,
        )
    }
}

impl Default for SymmetricHebbian {
    fn default() -> Self {
        SymmetricHebbian {
            a_plus: 0.01,
            a_minus: 0.012,
            sigma_plus: 10.0,
            sigma_minus: 20.0,
        }
    }
}

impl Parametrized for SymmetricHebbian {
    fn get_params(&self) -> Vec<f64> {
        vec![self.a_plus, self.a_minus, self.sigma_plus, self.sigma_minus]
    }

    fn set_params(&mut self, params: &[f64]) -> SpikeflowResult<()> {
        let [a_plus, a_minus, sigma_plus, sigma_minus] = params_array(params)?;
        self.a_plus = a_plus;
        self.a_minus = a_minus;
        self.sigma_plus = sigma_plus;
        self.sigma_minus = sigma_minus;
        Ok(())
    }
}

/// Sign-negated [`SymmetricHebbian`].
///
/// Parameter vector layout: `[a_plus, a_minus, sigma_plus, sigma_minus]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymmetricAntiHebbian {
    pub a_plus: f64,
    pub a_minus: f64,
    pub sigma_plus: f64,
    pub sigma_minus: f64,
}

impl SymmetricAntiHebbian {
    pub fn new(a_plus: f64, a_minus: f64, sigma_plus: f64, sigma_minus: f64) -> Self {
        SymmetricAntiHebbian {
            a_plus,
            a_minus,
            sigma_plus,
            sigma_minus,
        }
    }

    #[inline]
    pub fn compute_delta_w(&self, delta_t: f64) -> f64 {
        -symmetric_delta_w(
            delta_t,
            self.a_plus,
            self.a_minus,
            self.sigma_plus,
            self.sigma_minus,
        )
    }
}

impl Default for SymmetricAntiHebbian {
    fn default() -> Self {
        SymmetricAntiHebbian {
            a_plus: 0.01,
            a_minus: 0.012,
            sigma_plus: 10.0,
            sigma_minus: 20.0,
        }
    }
}

impl Parametrized for SymmetricAntiHebbian {
    fn get_params(&self) -> Vec<f64> {
        vec![self.a_plus, self.a_minus, self.sigma_plus, self.sigma_minus]
    }

    fn set_params(&mut self, params: &[f64]) -> SpikeflowResult<()> {
        let [a_plus, a_minus, sigma_plus, sigma_minus] = params_array(params)?;
        self.a_plus = a_plus;
        self.a_minus = a_minus;
        self.sigma_plus = sigma_plus;
        self.sigma_minus = sigma_minus;
        Ok(())
    }
}

/// The no-op rule: every timing difference maps to a zero delta. Used to
/// ablate learning while keeping the synapse-update machinery in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degenerate;

impl Degenerate {
    #[inline]
    pub fn compute_delta_w(&self, _delta_t: f64) -> f64 {
        0.0
    }
}

impl Parametrized for Degenerate {
    fn get_params(&self) -> Vec<f64> {
        vec![0.0; STDP_PARAM_COUNT]
    }

    fn set_params(&mut self, params: &[f64]) -> SpikeflowResult<()> {
        // Length is still checked so a tuner's genotype width stays honest.
        params_array(params)?;
        Ok(())
    }
}

/// The closed family of STDP rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum StdpRule {
    AsymmetricHebbian(AsymmetricHebbian),
    AsymmetricAntiHebbian(AsymmetricAntiHebbian),
    SymmetricHebbian(SymmetricHebbian),
    SymmetricAntiHebbian(SymmetricAntiHebbian),
    Degenerate,
}

impl StdpRule {
    /// Weight delta for a postsynaptic-minus-presynaptic timing difference.
    #[inline]
    pub fn compute_delta_w(&self, delta_t: f64) -> f64 {
        match self {
            StdpRule::AsymmetricHebbian(rule) => rule.compute_delta_w(delta_t),
            StdpRule::AsymmetricAntiHebbian(rule) => rule.compute_delta_w(delta_t),
            StdpRule::SymmetricHebbian(rule) => rule.compute_delta_w(delta_t),
            StdpRule::SymmetricAntiHebbian(rule) => rule.compute_delta_w(delta_t),
            StdpRule::Degenerate => Degenerate.compute_delta_w(delta_t),
        }
    }

    /// Name of the rule variant.
    pub fn name(&self) -> &'static str {
        match self {
            StdpRule::AsymmetricHebbian(_) => "asymmetric_hebbian",
            StdpRule::AsymmetricAntiHebbian(_) => "asymmetric_anti_hebbian",
            StdpRule::SymmetricHebbian(_) => "symmetric_hebbian",
            StdpRule::SymmetricAntiHebbian(_) => "symmetric_anti_hebbian",
            StdpRule::Degenerate => "degenerate",
        }
    }
}

impl Parametrized for StdpRule {
    fn get_params(&self) -> Vec<f64> {
        match self {
            StdpRule::AsymmetricHebbian(rule) => rule.get_params(),
            StdpRule::AsymmetricAntiHebbian(rule) => rule.get_params(),
            StdpRule::SymmetricHebbian(rule) => rule.get_params(),
            StdpRule::SymmetricAntiHebbian(rule) => rule.get_params(),
            StdpRule::Degenerate => Degenerate.get_params(),
        }
    }

    fn set_params(&mut self, params: &[f64]) -> SpikeflowResult<()> {
        match self {
            StdpRule::AsymmetricHebbian(rule) => rule.set_params(params),
            StdpRule::AsymmetricAntiHebbian(rule) => rule.set_params(params),
            StdpRule::SymmetricHebbian(rule) => rule.set_params(params),
            StdpRule::SymmetricAntiHebbian(rule) => rule.set_params(params),
            StdpRule::Degenerate => Degenerate.set_params(params),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asymmetric_hebbian_potentiates_causal_pairs() {
        let rule = AsymmetricHebbian::default();
        let delta_w = rule.compute_delta_w(5.0);
        assert!(delta_w > 0.0);
        assert!(delta_w <= rule.a_plus);
    }

    #[test]
    fn test_asymmetric_hebbian_depresses_anti_causal_pairs() {
        let rule = AsymmetricHebbian::default();
        let delta_w = rule.compute_delta_w(-5.0);
        assert!(delta_w < 0.0);
        assert!(delta_w >= -rule.a_minus);
    }

    #[test]
    fn test_asymmetric_anti_hebbian_reference_values() {
        // Unit amplitudes and tau 20: one tau of separation decays to e^-1.
        let rule = AsymmetricAntiHebbian::new(1.0, 1.0, 20.0, 20.0);
        let expected = (-1.0f64).exp();
        assert!((rule.compute_delta_w(20.0) - (-expected)).abs() < 1e-4);
        assert!((rule.compute_delta_w(-20.0) - expected).abs() < 1e-4);
        assert_eq!(rule.compute_delta_w(0.0), 0.0);
    }

    #[test]
    fn test_anti_hebbian_mirrors_hebbian() {
        let hebbian = AsymmetricHebbian::default();
        let anti = AsymmetricAntiHebbian::default();
        for delta_t in [-30.0, -1.0, 0.0, 0.5, 12.0] {
            let sum = hebbian.compute_delta_w(delta_t) + anti.compute_delta_w(delta_t);
            assert!(sum.abs() < 1e-15);
        }
    }

    #[test]
    fn test_kernel_decays_with_timing_gap() {
        let rule = AsymmetricHebbian::default();
        assert!(rule.compute_delta_w(1.0) > rule.compute_delta_w(10.0));
        assert!(rule.compute_delta_w(10.0) > rule.compute_delta_w(100.0));
    }

    #[test]
    fn test_symmetric_kernel_is_even() {
        let rule = SymmetricHebbian::default();
        for delta_t in [0.5, 3.0, 15.0, 40.0] {
            let forward = rule.compute_delta_w(delta_t);
            let backward = rule.compute_delta_w(-delta_t);
            assert!((forward - backward).abs() < 1e-15);
        }
    }

    #[test]
    fn test_symmetric_sign_flips_between_center_and_surround() {
        // sigma_plus < sigma_minus: the kernel is positive near zero and
        // negative in the surround, so the two regions pull opposite ways.
        let rule = SymmetricHebbian::new(1.0, 1.0, 10.0, 20.0);
        let near = rule.compute_delta_w(1.0);
        let far = rule.compute_delta_w(30.0);
        assert!(near < 0.0);
        assert!(far > 0.0);
    }

    #[test]
    fn test_symmetric_anti_hebbian_mirrors_symmetric_hebbian() {
        let hebbian = SymmetricHebbian::default();
        let anti = SymmetricAntiHebbian::default();
        for delta_t in [-25.0, -2.0, 0.0, 4.0, 18.0] {
            let sum = hebbian.compute_delta_w(delta_t) + anti.compute_delta_w(delta_t);
            assert!(sum.abs() < 1e-15);
        }
    }

    #[test]
    fn test_gaussian_density() {
        // Peak of the zero-mean density: 1 / (sigma * sqrt(2 pi)).
        let peak = gaussian(0.0, 2.0);
        assert!((peak - 1.0 / (2.0 * (2.0 * std::f64::consts::PI).sqrt())).abs() < 1e-12);
        assert!(gaussian(1.0, 2.0) < peak);
        assert!((gaussian(3.0, 2.0) - gaussian(-3.0, 2.0)).abs() < 1e-15);
    }

    #[test]
    fn test_degenerate_rule_is_a_structural_no_op() {
        let rule = Degenerate;
        for delta_t in [-1e9, -20.0, 0.0, 1e-9, 42.0, 1e9] {
            assert_eq!(rule.compute_delta_w(delta_t), 0.0);
        }
        assert_eq!(rule.get_params(), vec![0.0; STDP_PARAM_COUNT]);
    }

    #[test]
    fn test_params_round_trip() {
        let mut rule = StdpRule::AsymmetricHebbian(AsymmetricHebbian::default());
        rule.set_params(&[0.5, 0.6, 15.0, 25.0]).unwrap();
        assert_eq!(rule.get_params(), vec![0.5, 0.6, 15.0, 25.0]);
    }

    #[test]
    fn test_set_params_rejects_wrong_length() {
        let mut rule = StdpRule::SymmetricHebbian(SymmetricHebbian::default());
        assert!(rule.set_params(&[1.0, 2.0]).is_err());
        assert!(rule.set_params(&[1.0, 2.0, 3.0, 4.0, 5.0]).is_err());
        assert!(rule.set_params(&[1.0, 2.0, 3.0, 4.0]).is_ok());
    }
}
