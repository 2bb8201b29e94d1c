// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! This module defines all configuration structs that map to sections in
//! `spikeflow.toml`.

use serde::{Deserialize, Serialize};

/// Root configuration structure for one logical channel
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ChannelConfig {
    pub encoder: EncoderConfig,
    pub decoder: DecoderConfig,
    pub one_hot: OneHotConfig,
    pub plasticity: PlasticityConfig,
}

/// Value to spike-train encoder selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EncoderKind {
    #[default]
    Uniform,
    UniformWithMemory,
    QuantizedUniform,
    QuantizedUniformWithMemory,
}

/// Encoder configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EncoderConfig {
    pub kind: EncoderKind,
    /// Base firing frequency, in Hz
    pub frequency: f64,
    /// Firing-frequency floor (quantized kinds only), in Hz
    pub min_frequency: f64,
    /// Carry-over horizon (memory kinds only), in window units
    pub memory: f64,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            kind: EncoderKind::Uniform,
            frequency: 50.0,
            min_frequency: 5.0,
            memory: 1.0,
        }
    }
}

/// Spike-train to value decoder selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecoderKind {
    #[default]
    AverageFrequency,
    MovingAverage,
    QuantizedAverageFrequency,
    QuantizedMovingAverage,
}

/// Decoder configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DecoderConfig {
    pub kind: DecoderKind,
    /// Reference frequency, in Hz
    pub frequency: f64,
    /// Rolling-buffer length (moving-average kinds only)
    pub windows: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            kind: DecoderKind::AverageFrequency,
            frequency: 50.0,
            windows: 5,
        }
    }
}

/// One-hot (thermometer) codec configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OneHotConfig {
    /// Number of scalars the codec adapts
    pub values: usize,
    /// Units per scalar
    pub bins: usize,
    /// Width of the spiking layer the codec wraps, when known up front
    pub layer_width: Option<usize>,
}

impl Default for OneHotConfig {
    fn default() -> Self {
        Self {
            values: 1,
            bins: 5,
            layer_width: None,
        }
    }
}

/// STDP rule selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    AsymmetricHebbian,
    AsymmetricAntiHebbian,
    SymmetricHebbian,
    SymmetricAntiHebbian,
    /// Learning disabled
    #[default]
    Degenerate,
}

/// Plasticity configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlasticityConfig {
    pub rule: RuleKind,
    pub a_plus: f64,
    pub a_minus: f64,
    /// Time constants (asymmetric rules)
    pub tau_plus: f64,
    pub tau_minus: f64,
    /// Kernel widths (symmetric rules)
    pub sigma_plus: f64,
    pub sigma_minus: f64,
}

impl Default for PlasticityConfig {
    fn default() -> Self {
        Self {
            rule: RuleKind::Degenerate,
            a_plus: 0.01,
            a_minus: 0.012,
            tau_plus: 20.0,
            tau_minus: 20.0,
            sigma_plus: 10.0,
            sigma_minus: 20.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_complete() {
        let config = ChannelConfig::default();
        assert_eq!(config.encoder.kind, EncoderKind::Uniform);
        assert_eq!(config.encoder.frequency, 50.0);
        assert_eq!(config.decoder.windows, 5);
        assert_eq!(config.one_hot.bins, 5);
        assert_eq!(config.plasticity.rule, RuleKind::Degenerate);
    }

    #[test]
    fn test_kind_names_use_snake_case() {
        let json = serde_json::to_string(&EncoderKind::QuantizedUniformWithMemory).unwrap();
        assert_eq!(json, "\"quantized_uniform_with_memory\"");
        let kind: DecoderKind = serde_json::from_str("\"moving_average\"").unwrap();
        assert_eq!(kind, DecoderKind::MovingAverage);
    }
}
