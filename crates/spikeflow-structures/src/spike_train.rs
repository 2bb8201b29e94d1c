//! Spike-train representations and time windows.
//!
//! Two representations cross the coder boundary:
//! - [`TimedSpikeTrain`]: exact spike timestamps inside a normalized unit
//!   window, for continuous-time network simulators;
//! - [`BinnedSpikeTrain`]: per-bucket spike counts over a fixed grid of
//!   [`SPIKE_BIN_COUNT`] equal sub-intervals, for discrete-time simulators.

use serde::{Deserialize, Serialize};

use crate::error::{SpikeflowError, SpikeflowResult};

/// Number of buckets in a binned spike train.
pub const SPIKE_BIN_COUNT: usize = 16;

/// The time window one coder call covers.
///
/// Memoryless coders only look at `length`. Memory-carrying coders also use
/// `end`, the absolute end time of the window, to keep the phase of their
/// periodic firing grid across calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Window duration, in simulation time units
    pub length: f64,
    /// Absolute end time of the window
    pub end: f64,
}

impl TimeWindow {
    pub fn new(length: f64, end: f64) -> Self {
        TimeWindow { length, end }
    }

    /// The first window of an episode: starts at time zero.
    pub fn first(length: f64) -> Self {
        TimeWindow {
            length,
            end: length,
        }
    }

    /// Absolute start time of the window.
    #[inline]
    pub fn start(&self) -> f64 {
        self.end - self.length
    }

    /// The window immediately following this one, with the same length.
    pub fn next(&self) -> Self {
        TimeWindow {
            length: self.length,
            end: self.end + self.length,
        }
    }
}

/// Spike timestamps within a normalized unit window.
///
/// Timestamps live in `(0, 1]`, are strictly increasing and contain no
/// duplicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimedSpikeTrain {
    times: Vec<f64>,
}

impl TimedSpikeTrain {
    /// A train with no spikes.
    pub fn empty() -> Self {
        TimedSpikeTrain { times: Vec::new() }
    }

    /// Build a train from timestamps, checking the ordering invariant.
    pub fn from_times(times: Vec<f64>) -> SpikeflowResult<Self> {
        let mut previous = 0.0;
        for &t in &times {
            if t <= previous || t > 1.0 {
                return Err(SpikeflowError::BadParameters(format!(
                    "spike times must be strictly increasing within (0, 1], got {} after {}",
                    t, previous
                )));
            }
            previous = t;
        }
        Ok(TimedSpikeTrain { times })
    }

    /// Build a train from timestamps known to satisfy the ordering invariant.
    pub fn from_times_unchecked(times: Vec<f64>) -> Self {
        debug_assert!(times.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(times.iter().all(|&t| t > 0.0 && t <= 1.0));
        TimedSpikeTrain { times }
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn spike_count(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Per-bucket spike counts over a window split into [`SPIKE_BIN_COUNT`]
/// equal sub-intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinnedSpikeTrain {
    counts: [u32; SPIKE_BIN_COUNT],
}

impl BinnedSpikeTrain {
    /// A train with every bucket at zero.
    pub fn zeroed() -> Self {
        BinnedSpikeTrain {
            counts: [0; SPIKE_BIN_COUNT],
        }
    }

    pub fn from_counts(counts: [u32; SPIKE_BIN_COUNT]) -> Self {
        BinnedSpikeTrain { counts }
    }

    /// Count one spike into the given bucket.
    #[inline]
    pub fn increment(&mut self, bin: usize) {
        self.counts[bin] += 1;
    }

    pub fn counts(&self) -> &[u32; SPIKE_BIN_COUNT] {
        &self.counts
    }

    /// Total spikes across all buckets.
    pub fn spike_count(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }
}

impl Default for BinnedSpikeTrain {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// The spike representation crossing the encoder/decoder boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum SpikeTrain {
    /// Exact timestamps in a normalized unit window
    Timed(TimedSpikeTrain),
    /// Bucketed counts over the window
    Binned(BinnedSpikeTrain),
}

impl SpikeTrain {
    /// Total number of spikes, regardless of representation.
    pub fn spike_count(&self) -> usize {
        match self {
            SpikeTrain::Timed(train) => train.spike_count(),
            SpikeTrain::Binned(train) => train.spike_count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.spike_count() == 0
    }
}
