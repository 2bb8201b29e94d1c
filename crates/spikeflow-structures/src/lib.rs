//! The core crate for Spikeflow. Defines the data structures and capability
//! traits shared by the coding and plasticity components.
//!
//! Everything here is plain data plus pure arithmetic: spike-train
//! representations, time windows, bipolar/unipolar signal normalization, and
//! the narrow traits the external network simulator programs against.

mod error;
pub mod signal;
mod spike_train;
mod traits;

pub use error::{SpikeflowError, SpikeflowResult};
pub use spike_train::{BinnedSpikeTrain, SpikeTrain, TimeWindow, TimedSpikeTrain, SPIKE_BIN_COUNT};
pub use traits::{Parametrized, Resettable, SpikesToValue, ValueToSpikes};
