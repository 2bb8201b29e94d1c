//! # Spikeflow - Spike-Based Signal Coding for Neurorobotic Controllers
//!
//! Spikeflow is the translation layer between a continuous-valued robot
//! controller and a spiking neural network, plus the synaptic learning rules
//! that adapt the network in between. It contains no network simulator and
//! no physics: every component is a small, deterministic, per-channel state
//! machine the surrounding platform calls once per control tick.
//!
//! ## Components
//!
//! - **Encoders** ([`spikeflow_sensorimotor::encoders`]): a control value
//!   and a time window in, a spike train out. Timed or binned output,
//!   memoryless or phase-preserving across windows.
//! - **Decoders** ([`spikeflow_sensorimotor::decoders`]): the spikes a
//!   network emitted over a window in, a control value out. Single-window
//!   or moving-average rates.
//! - **One-hot codec** ([`spikeflow_sensorimotor::one_hot`]): thermometer
//!   coding between scalar arrays and fixed-width binary spiking layers.
//! - **STDP rules** ([`spikeflow_plasticity::stdp`]): spike-timing
//!   difference in, weight delta out.
//! - **Configuration** ([`spikeflow_config`]): TOML channel configuration,
//!   validated before anything is constructed; [`builders`] turns it into
//!   components.
//!
//! ## Feature Flags
//!
//! - **`sensorimotor`** (default): encoders, decoders, one-hot codec
//! - **`plasticity`** (default): STDP learning rules
//! - **`config`** (default): TOML configuration and the builders
//!
//! ## Quick Start
//!
//! ```rust
//! use spikeflow::prelude::*;
//!
//! // One channel: actuator command out, sensor reading back in.
//! let mut encoder = SpikeTrainEncoder::UniformWithMemory(
//!     UniformWithMemoryEncoder::new(50.0, 1.0)?,
//! );
//! let mut decoder = SpikeTrainDecoder::MovingAverage(
//!     MovingAverageDecoder::new(50.0, 5)?,
//! );
//!
//! let window = TimeWindow::first(0.1);
//! let spikes = encoder.convert(0.4, window);
//! let value = decoder.convert(&spikes, window.length);
//! assert!((-1.0..=1.0).contains(&value));
//!
//! // A synapse update somewhere in between.
//! let rule = StdpRule::AsymmetricHebbian(AsymmetricHebbian::default());
//! let delta_w = rule.compute_delta_w(2.0);
//! assert!(delta_w > 0.0);
//! # Ok::<(), spikeflow::SpikeflowError>(())
//! ```

// Foundation (always present)
pub use spikeflow_structures as structures;
pub use spikeflow_structures::{
    BinnedSpikeTrain, Parametrized, Resettable, SpikeTrain, SpikeflowError, SpikeflowResult,
    SpikesToValue, TimeWindow, TimedSpikeTrain, ValueToSpikes, SPIKE_BIN_COUNT,
};

#[cfg(feature = "sensorimotor")]
pub use spikeflow_sensorimotor as sensorimotor;

#[cfg(feature = "plasticity")]
pub use spikeflow_plasticity as plasticity;

#[cfg(feature = "config")]
pub use spikeflow_config as config;

#[cfg(all(feature = "config", feature = "sensorimotor", feature = "plasticity"))]
pub mod builders;

/// Convenience re-exports for the common case.
pub mod prelude {
    pub use spikeflow_structures::{
        BinnedSpikeTrain, Parametrized, Resettable, SpikeTrain, SpikeflowError, SpikeflowResult,
        SpikesToValue, TimeWindow, TimedSpikeTrain, ValueToSpikes, SPIKE_BIN_COUNT,
    };

    #[cfg(feature = "sensorimotor")]
    pub use spikeflow_sensorimotor::{
        AverageFrequencyDecoder, InputConverter, MovingAverageDecoder, OutputConverter,
        QuantizedAverageFrequencyDecoder, QuantizedMovingAverageDecoder, QuantizedUniformEncoder,
        QuantizedUniformWithMemoryEncoder, SpikeTrainDecoder, SpikeTrainEncoder, UniformEncoder,
        UniformWithMemoryEncoder,
    };

    #[cfg(feature = "plasticity")]
    pub use spikeflow_plasticity::{
        AsymmetricAntiHebbian, AsymmetricHebbian, Degenerate, StdpRule, SymmetricAntiHebbian,
        SymmetricHebbian, STDP_PARAM_COUNT,
    };

    #[cfg(feature = "config")]
    pub use spikeflow_config::{load_config, parse_config, ChannelConfig};

    #[cfg(all(feature = "config", feature = "sensorimotor", feature = "plasticity"))]
    pub use crate::builders;
}
