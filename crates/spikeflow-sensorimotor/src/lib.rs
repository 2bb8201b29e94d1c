//! # Spikeflow Sensorimotor Coding
//!
//! The translation layer between a continuous-valued controller and a
//! spiking network:
//! - **Encoders**: one control value per tick becomes a spike train for the
//!   window the tick covers (sensory direction);
//! - **Decoders**: the spikes a network emitted over a window become one
//!   control value (motor direction);
//! - **One-hot codec**: thermometer-coded adaptation of an array-of-scalars
//!   interface onto a fixed-width binary spiking layer.
//!
//! Coder instances are stateful and owned one-per-channel; they accumulate
//! memory across ticks and implement `Resettable` to start a new episode.

pub mod decoders;
pub mod encoders;
pub mod one_hot;

pub use decoders::{
    AverageFrequencyDecoder, MovingAverageDecoder, QuantizedAverageFrequencyDecoder,
    QuantizedMovingAverageDecoder, SpikeTrainDecoder,
};
pub use encoders::{
    QuantizedUniformEncoder, QuantizedUniformWithMemoryEncoder, SpikeTrainEncoder,
    UniformEncoder, UniformWithMemoryEncoder,
};
pub use one_hot::{InputConverter, OutputConverter};

/// Default base/reference firing frequency, in Hz.
pub const DEFAULT_FREQUENCY: f64 = 50.0;

/// Default firing-frequency floor for the quantized encoders, in Hz.
pub const DEFAULT_MIN_FREQUENCY: f64 = 5.0;

/// Default carry-over horizon of the memory encoder, in window units.
pub const DEFAULT_MEMORY_WINDOWS: f64 = 1.0;

/// Default rolling-buffer length of the moving-average decoders.
pub const DEFAULT_WINDOW_COUNT: usize = 5;
