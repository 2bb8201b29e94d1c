//! Builders from validated configuration to constructed components.
//!
//! [`spikeflow_config`] holds plain data; these functions are the only
//! place configuration meets construction. Constructors re-check their own
//! parameters, so a config that skipped [`spikeflow_config::validate_config`]
//! still cannot produce a broken component.

use spikeflow_config::{ChannelConfig, DecoderConfig, EncoderConfig, EncoderKind};
use spikeflow_config::{DecoderKind, OneHotConfig, PlasticityConfig, RuleKind};
use spikeflow_plasticity::{
    AsymmetricAntiHebbian, AsymmetricHebbian, StdpRule, SymmetricAntiHebbian, SymmetricHebbian,
};
use spikeflow_sensorimotor::{
    AverageFrequencyDecoder, InputConverter, MovingAverageDecoder, OutputConverter,
    QuantizedAverageFrequencyDecoder, QuantizedMovingAverageDecoder, QuantizedUniformEncoder,
    QuantizedUniformWithMemoryEncoder, SpikeTrainDecoder, SpikeTrainEncoder, UniformEncoder,
    UniformWithMemoryEncoder,
};
use spikeflow_structures::SpikeflowResult;

/// Build the configured encoder.
pub fn build_encoder(config: &EncoderConfig) -> SpikeflowResult<SpikeTrainEncoder> {
    Ok(match config.kind {
        EncoderKind::Uniform => SpikeTrainEncoder::Uniform(UniformEncoder::new(config.frequency)?),
        EncoderKind::UniformWithMemory => SpikeTrainEncoder::UniformWithMemory(
            UniformWithMemoryEncoder::new(config.frequency, config.memory)?,
        ),
        EncoderKind::QuantizedUniform => SpikeTrainEncoder::QuantizedUniform(
            QuantizedUniformEncoder::new(config.frequency, config.min_frequency)?,
        ),
        EncoderKind::QuantizedUniformWithMemory => SpikeTrainEncoder::QuantizedUniformWithMemory(
            QuantizedUniformWithMemoryEncoder::new(config.frequency, config.min_frequency)?,
        ),
    })
}

/// Build the configured decoder.
pub fn build_decoder(config: &DecoderConfig) -> SpikeflowResult<SpikeTrainDecoder> {
    Ok(match config.kind {
        DecoderKind::AverageFrequency => {
            SpikeTrainDecoder::AverageFrequency(AverageFrequencyDecoder::new(config.frequency)?)
        }
        DecoderKind::MovingAverage => SpikeTrainDecoder::MovingAverage(MovingAverageDecoder::new(
            config.frequency,
            config.windows,
        )?),
        DecoderKind::QuantizedAverageFrequency => SpikeTrainDecoder::QuantizedAverageFrequency(
            QuantizedAverageFrequencyDecoder::new(config.frequency)?,
        ),
        DecoderKind::QuantizedMovingAverage => SpikeTrainDecoder::QuantizedMovingAverage(
            QuantizedMovingAverageDecoder::new(config.frequency, config.windows)?,
        ),
    })
}

/// Build the configured one-hot converter pair.
///
/// When the config names a layer width, both converters are checked against
/// it at construction.
pub fn build_one_hot(config: &OneHotConfig) -> SpikeflowResult<(InputConverter, OutputConverter)> {
    match config.layer_width {
        Some(layer_width) => Ok((
            InputConverter::for_layer(config.bins, layer_width)?,
            OutputConverter::for_layer(config.bins, layer_width)?,
        )),
        None => Ok((
            InputConverter::new(config.bins)?,
            OutputConverter::new(config.bins)?,
        )),
    }
}

/// Build the configured learning rule.
pub fn build_rule(config: &PlasticityConfig) -> StdpRule {
    match config.rule {
        RuleKind::AsymmetricHebbian => StdpRule::AsymmetricHebbian(AsymmetricHebbian::new(
            config.a_plus,
            config.a_minus,
            config.tau_plus,
            config.tau_minus,
        )),
        RuleKind::AsymmetricAntiHebbian => {
            StdpRule::AsymmetricAntiHebbian(AsymmetricAntiHebbian::new(
                config.a_plus,
                config.a_minus,
                config.tau_plus,
                config.tau_minus,
            ))
        }
        RuleKind::SymmetricHebbian => StdpRule::SymmetricHebbian(SymmetricHebbian::new(
            config.a_plus,
            config.a_minus,
            config.sigma_plus,
            config.sigma_minus,
        )),
        RuleKind::SymmetricAntiHebbian => {
            StdpRule::SymmetricAntiHebbian(SymmetricAntiHebbian::new(
                config.a_plus,
                config.a_minus,
                config.sigma_plus,
                config.sigma_minus,
            ))
        }
        RuleKind::Degenerate => StdpRule::Degenerate,
    }
}

/// Everything one logical channel needs.
pub fn build_channel(
    config: &ChannelConfig,
) -> SpikeflowResult<(
    SpikeTrainEncoder,
    SpikeTrainDecoder,
    (InputConverter, OutputConverter),
    StdpRule,
)> {
    Ok((
        build_encoder(&config.encoder)?,
        build_decoder(&config.decoder)?,
        build_one_hot(&config.one_hot)?,
        build_rule(&config.plasticity),
    ))
}
