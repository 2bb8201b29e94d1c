/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! Integration tests for spikeflow-plasticity
//!
//! These tests drive the rule family the way an external synapse-update
//! mechanism and an external black-box tuner would.

use spikeflow_plasticity::*;
use spikeflow_structures::Parametrized;

#[test]
fn test_every_rule_exposes_a_uniform_genotype_width() {
    let rules = [
        StdpRule::AsymmetricHebbian(AsymmetricHebbian::default()),
        StdpRule::AsymmetricAntiHebbian(AsymmetricAntiHebbian::default()),
        StdpRule::SymmetricHebbian(SymmetricHebbian::default()),
        StdpRule::SymmetricAntiHebbian(SymmetricAntiHebbian::default()),
        StdpRule::Degenerate,
    ];
    for rule in rules {
        assert_eq!(rule.get_params().len(), STDP_PARAM_COUNT, "{}", rule.name());
    }
}

#[test]
fn test_tuner_round_trip_across_the_family() {
    let genotype = [0.02, 0.025, 18.0, 22.0];
    let mut rules = [
        StdpRule::AsymmetricHebbian(AsymmetricHebbian::default()),
        StdpRule::AsymmetricAntiHebbian(AsymmetricAntiHebbian::default()),
        StdpRule::SymmetricHebbian(SymmetricHebbian::default()),
        StdpRule::SymmetricAntiHebbian(SymmetricAntiHebbian::default()),
    ];
    for rule in rules.iter_mut() {
        rule.set_params(&genotype).unwrap();
        assert_eq!(rule.get_params(), genotype.to_vec(), "{}", rule.name());
    }

    // The degenerate rule accepts the genotype but stays all-zero.
    let mut off = StdpRule::Degenerate;
    off.set_params(&genotype).unwrap();
    assert_eq!(off.get_params(), vec![0.0; STDP_PARAM_COUNT]);
}

#[test]
fn test_weight_accumulation_over_a_spike_pairing_schedule() {
    // A repeated causal pairing (pre 2 ms before post) under the Hebbian
    // rule drives the weight up; the same schedule under the anti-Hebbian
    // rule drives it down by the same amount.
    let hebbian = StdpRule::AsymmetricHebbian(AsymmetricHebbian::default());
    let anti = StdpRule::AsymmetricAntiHebbian(AsymmetricAntiHebbian::default());

    let mut weight_up = 0.5;
    let mut weight_down = 0.5;
    for _ in 0..100 {
        weight_up += hebbian.compute_delta_w(2.0);
        weight_down += anti.compute_delta_w(2.0);
    }
    assert!(weight_up > 0.5);
    assert!(weight_down < 0.5);
    assert!((weight_up - 0.5 - (0.5 - weight_down)).abs() < 1e-12);
}

#[test]
fn test_rules_serialize_with_their_kind_tag() {
    let rule = StdpRule::AsymmetricHebbian(AsymmetricHebbian::default());
    let json = serde_json::to_string(&rule).unwrap();
    assert!(json.contains("\"rule\":\"asymmetric_hebbian\""));

    let back: StdpRule = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rule);

    let off: StdpRule = serde_json::from_str("{\"rule\":\"degenerate\"}").unwrap();
    assert_eq!(off, StdpRule::Degenerate);
}
