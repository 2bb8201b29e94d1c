// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Spikeflow Configuration System
//!
//! Type-safe configuration loader for spiking-channel components:
//! - TOML file parsing (`spikeflow.toml`)
//! - Environment variable overrides
//! - Validation of every construction-time parameter before anything is
//!   built (non-positive frequencies, zero bin/window counts, and
//!   codec/layer dimension mismatches are rejected here, not at first use)
//!
//! This crate holds plain configuration data only; turning a validated
//! [`ChannelConfig`] into constructed components happens in the umbrella
//! crate's builders.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{apply_environment_overrides, find_config_file, load_config, parse_config};
pub use types::*;
pub use validation::{validate_config, ConfigValidationError};

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found. Searched: {0}")]
    FileNotFound(String),

    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax: {0}")]
    ParseError(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
