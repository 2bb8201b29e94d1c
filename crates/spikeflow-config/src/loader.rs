// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! Loading runs in three tiers:
//! 1. TOML file (base values)
//! 2. Environment variables (runtime overrides)
//! 3. Validation (nothing invalid leaves this module)

use crate::validation::validate_config;
use crate::{ChannelConfig, ConfigError, ConfigResult};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name
const CONFIG_FILE_NAME: &str = "spikeflow.toml";

/// Environment variable naming the config file location
const CONFIG_PATH_ENV: &str = "SPIKEFLOW_CONFIG_PATH";

/// Find the Spikeflow configuration file
///
/// Search order:
/// 1. `SPIKEFLOW_CONFIG_PATH` environment variable
/// 2. Current working directory: `./spikeflow.toml`
/// 3. Parent directories (searches up to 5 levels for a workspace root)
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any
/// location
pub fn find_config_file() -> ConfigResult<PathBuf> {
    // 1. Check environment variable first
    if let Ok(env_path) = env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        } else {
            return Err(ConfigError::FileNotFound(format!(
                "Config file specified by {} not found: {}",
                CONFIG_PATH_ENV,
                path.display()
            )));
        }
    }

    // 2. Search the working directory and its parents
    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));
        let mut current = cwd.clone();
        for _ in 0..5 {
            if let Some(parent) = current.parent() {
                search_paths.push(parent.join(CONFIG_FILE_NAME));
                current = parent.to_path_buf();
            }
        }
    }

    for path in &search_paths {
        if path.exists() {
            return Ok(path.clone());
        }
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "Spikeflow configuration file '{}' not found in any of these locations:\n{}\n\nSet {} to specify a custom location.",
        CONFIG_FILE_NAME, search_list, CONFIG_PATH_ENV
    )))
}

/// Parse and validate a configuration from TOML text.
pub fn parse_config(text: &str) -> ConfigResult<ChannelConfig> {
    let config: ChannelConfig =
        toml::from_str(text).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Load configuration with automatic file discovery and overrides
///
/// When `path` is `None` the file is discovered via [`find_config_file`].
/// Environment overrides are applied before validation.
pub fn load_config(path: Option<&Path>) -> ConfigResult<ChannelConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => find_config_file()?,
    };

    let text = fs::read_to_string(&path)?;
    let mut config: ChannelConfig =
        toml::from_str(&text).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    apply_environment_overrides(&mut config)?;
    validate_config(&config)?;
    Ok(config)
}

/// Apply environment-variable overrides to a parsed configuration
///
/// Supported overrides:
/// - `SPIKEFLOW_ENCODER_FREQUENCY`
/// - `SPIKEFLOW_DECODER_FREQUENCY`
pub fn apply_environment_overrides(config: &mut ChannelConfig) -> ConfigResult<()> {
    if let Ok(value) = env::var("SPIKEFLOW_ENCODER_FREQUENCY") {
        config.encoder.frequency = value.parse().map_err(|_| {
            ConfigError::InvalidValue(format!(
                "SPIKEFLOW_ENCODER_FREQUENCY is not a number: {}",
                value
            ))
        })?;
    }
    if let Ok(value) = env::var("SPIKEFLOW_DECODER_FREQUENCY") {
        config.decoder.frequency = value.parse().map_err(|_| {
            ConfigError::InvalidValue(format!(
                "SPIKEFLOW_DECODER_FREQUENCY is not a number: {}",
                value
            ))
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DecoderKind, EncoderKind, RuleKind};
    use std::io::Write;

    const SAMPLE: &str = r#"
[encoder]
kind = "quantized_uniform_with_memory"
frequency = 80.0
min_frequency = 8.0

[decoder]
kind = "quantized_moving_average"
frequency = 80.0
windows = 3

[one_hot]
values = 2
bins = 4
layer_width = 8

[plasticity]
rule = "symmetric_anti_hebbian"
a_plus = 0.02
sigma_plus = 5.0
sigma_minus = 9.0
"#;

    #[test]
    fn test_parse_config_reads_every_section() {
        let config = parse_config(SAMPLE).unwrap();
        assert_eq!(config.encoder.kind, EncoderKind::QuantizedUniformWithMemory);
        assert_eq!(config.encoder.frequency, 80.0);
        assert_eq!(config.decoder.kind, DecoderKind::QuantizedMovingAverage);
        assert_eq!(config.decoder.windows, 3);
        assert_eq!(config.one_hot.layer_width, Some(8));
        assert_eq!(config.plasticity.rule, RuleKind::SymmetricAntiHebbian);
        assert_eq!(config.plasticity.a_plus, 0.02);
        // Unset fields keep their defaults.
        assert_eq!(config.plasticity.a_minus, 0.012);
    }

    #[test]
    fn test_parse_config_rejects_bad_syntax_and_bad_values() {
        assert!(matches!(
            parse_config("encoder = 3"),
            Err(ConfigError::ParseError(_))
        ));
        assert!(matches!(
            parse_config("[encoder]\nfrequency = -5.0"),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.encoder.frequency, 50.0);
        assert_eq!(config.plasticity.rule, RuleKind::Degenerate);
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.encoder.frequency, 80.0);
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config(Some(Path::new("/nonexistent/spikeflow.toml")));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
