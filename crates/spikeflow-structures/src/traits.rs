//! Capability traits at the simulator boundary.
//!
//! The external spiking-network simulator depends only on these narrow
//! traits, never on concrete coder or rule types. Every implementation is
//! single-threaded and synchronous; concurrent channels each own an
//! independent instance.

use crate::error::SpikeflowResult;
use crate::spike_train::{SpikeTrain, TimeWindow};

/// Can be returned to its construction-time state.
///
/// `reset` clears accumulated runtime state (carry-over memory, rolling
/// buffers) and leaves configured parameters untouched.
pub trait Resettable {
    fn reset(&mut self);
}

/// Exposes hyperparameters as a fixed-order flat vector, for external
/// black-box tuning.
pub trait Parametrized {
    fn get_params(&self) -> Vec<f64>;

    /// Replace the hyperparameters. Errors on a wrong-length vector; the
    /// layout is fixed per implementing type.
    fn set_params(&mut self, params: &[f64]) -> SpikeflowResult<()>;
}

/// Turns a continuous control value into the spikes of one time window.
pub trait ValueToSpikes: Resettable {
    /// Encode `value` (bipolar, clamped to `[-1, 1]`) over `window`.
    fn convert(&mut self, value: f64, window: TimeWindow) -> SpikeTrain;

    /// Change the base firing frequency for subsequent calls only.
    fn set_frequency(&mut self, frequency: f64);
}

/// Turns the spikes observed in one time window back into a continuous
/// control value.
pub trait SpikesToValue: Resettable {
    /// Decode the spikes of a window of `window_length` into a bipolar value.
    fn convert(&mut self, spikes: &SpikeTrain, window_length: f64) -> f64;

    /// Change the reference frequency for subsequent calls only.
    fn set_frequency(&mut self, frequency: f64);
}
