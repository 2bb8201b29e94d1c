// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! This module provides validation logic to ensure configuration values are
//! consistent and within valid ranges before any component is constructed.

use crate::types::{ChannelConfig, DecoderKind, EncoderKind, RuleKind};
use crate::{ConfigError, ConfigResult};

/// Validation errors that can occur during config validation
#[derive(Debug, Clone)]
pub enum ConfigValidationError {
    NonPositive { field: String, value: f64 },
    ZeroCount { field: String },
    InvertedRange { low: String, high: String },
    DimensionMismatch { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositive { field, value } => {
                write!(f, "{} must be > 0, got {}", field, value)
            }
            Self::ZeroCount { field } => {
                write!(f, "{} must be a positive count", field)
            }
            Self::InvertedRange { low, high } => {
                write!(f, "{} must stay below {}", low, high)
            }
            Self::DimensionMismatch { field, reason } => {
                write!(f, "dimension mismatch on {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete channel configuration
///
/// Checks for:
/// - Positive encoder/decoder frequencies and memory horizon
/// - A quantized frequency floor strictly below the base frequency
/// - Positive bin/value/window counts
/// - A layer width that matches `values * bins` when given
/// - Positive rule time constants and kernel widths
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` with details if validation fails
pub fn validate_config(config: &ChannelConfig) -> ConfigResult<()> {
    let mut errors = Vec::new();

    validate_encoder(config, &mut errors);
    validate_decoder(config, &mut errors);
    validate_one_hot(config, &mut errors);
    validate_plasticity(config, &mut errors);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

fn check_positive(field: &str, value: f64, errors: &mut Vec<ConfigValidationError>) {
    if value <= 0.0 {
        errors.push(ConfigValidationError::NonPositive {
            field: field.to_string(),
            value,
        });
    }
}

fn validate_encoder(config: &ChannelConfig, errors: &mut Vec<ConfigValidationError>) {
    let encoder = &config.encoder;
    check_positive("encoder.frequency", encoder.frequency, errors);

    let quantized = matches!(
        encoder.kind,
        EncoderKind::QuantizedUniform | EncoderKind::QuantizedUniformWithMemory
    );
    if quantized {
        check_positive("encoder.min_frequency", encoder.min_frequency, errors);
        if encoder.min_frequency >= encoder.frequency {
            errors.push(ConfigValidationError::InvertedRange {
                low: "encoder.min_frequency".to_string(),
                high: "encoder.frequency".to_string(),
            });
        }
    }

    if encoder.kind == EncoderKind::UniformWithMemory {
        check_positive("encoder.memory", encoder.memory, errors);
    }
}

fn validate_decoder(config: &ChannelConfig, errors: &mut Vec<ConfigValidationError>) {
    let decoder = &config.decoder;
    check_positive("decoder.frequency", decoder.frequency, errors);

    let moving = matches!(
        decoder.kind,
        DecoderKind::MovingAverage | DecoderKind::QuantizedMovingAverage
    );
    if moving && decoder.windows == 0 {
        errors.push(ConfigValidationError::ZeroCount {
            field: "decoder.windows".to_string(),
        });
    }
}

fn validate_one_hot(config: &ChannelConfig, errors: &mut Vec<ConfigValidationError>) {
    let one_hot = &config.one_hot;
    if one_hot.bins == 0 {
        errors.push(ConfigValidationError::ZeroCount {
            field: "one_hot.bins".to_string(),
        });
    }
    if one_hot.values == 0 {
        errors.push(ConfigValidationError::ZeroCount {
            field: "one_hot.values".to_string(),
        });
    }
    if let Some(layer_width) = one_hot.layer_width {
        if one_hot.bins > 0 && layer_width != one_hot.values * one_hot.bins {
            errors.push(ConfigValidationError::DimensionMismatch {
                field: "one_hot.layer_width".to_string(),
                reason: format!(
                    "layer width {} does not equal values ({}) * bins ({})",
                    layer_width, one_hot.values, one_hot.bins
                ),
            });
        }
    }
}

fn validate_plasticity(config: &ChannelConfig, errors: &mut Vec<ConfigValidationError>) {
    let plasticity = &config.plasticity;
    match plasticity.rule {
        RuleKind::AsymmetricHebbian | RuleKind::AsymmetricAntiHebbian => {
            check_positive("plasticity.tau_plus", plasticity.tau_plus, errors);
            check_positive("plasticity.tau_minus", plasticity.tau_minus, errors);
        }
        RuleKind::SymmetricHebbian | RuleKind::SymmetricAntiHebbian => {
            check_positive("plasticity.sigma_plus", plasticity.sigma_plus, errors);
            check_positive("plasticity.sigma_minus", plasticity.sigma_minus, errors);
        }
        RuleKind::Degenerate => {}
    }
}
