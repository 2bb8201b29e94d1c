//! Value to spike-train encoders.
//!
//! Every encoder maps a bipolar control value onto a periodic firing grid
//! whose rate is proportional to the value. Variants differ along two axes:
//! the output representation (timed vs. binned) and whether the firing grid
//! keeps its phase across window boundaries (memoryless vs. with memory).
//!
//! A memoryless encoder restarts its grid at every window, which biases the
//! effective rate whenever the window is not an integer multiple of the
//! inter-spike interval. The memory variants carry the grid phase from one
//! call into the next and avoid that bias.

use spikeflow_structures::signal;
use spikeflow_structures::{
    BinnedSpikeTrain, Resettable, SpikeTrain, SpikeflowError, SpikeflowResult, TimeWindow,
    TimedSpikeTrain, ValueToSpikes, SPIKE_BIN_COUNT,
};
use tracing::trace;

use crate::{DEFAULT_FREQUENCY, DEFAULT_MEMORY_WINDOWS, DEFAULT_MIN_FREQUENCY};

/// Clamp a raw controller value into the unipolar encoding domain.
fn normalize_input(value: f64) -> f64 {
    if !(-1.0..=1.0).contains(&value) {
        trace!(value, "clamping out-of-range control value");
    }
    signal::unipolar_from_bipolar(value)
}

/// Bucket index of a spike at `t` (relative to the window start).
///
/// The clamp guards the `t == window_length` edge against float rounding.
#[inline]
fn bin_index(t: f64, window_length: f64) -> usize {
    ((t / window_length * SPIKE_BIN_COUNT as f64).floor() as usize).min(SPIKE_BIN_COUNT - 1)
}

fn check_frequency(frequency: f64) -> SpikeflowResult<()> {
    if frequency <= 0.0 {
        return Err(SpikeflowError::BadParameters(format!(
            "frequency must be > 0, got {}",
            frequency
        )));
    }
    Ok(())
}

fn check_frequency_range(frequency: f64, min_frequency: f64) -> SpikeflowResult<()> {
    check_frequency(frequency)?;
    check_frequency(min_frequency)?;
    if min_frequency >= frequency {
        return Err(SpikeflowError::BadParameters(format!(
            "frequency floor {} must be below the base frequency {}",
            min_frequency, frequency
        )));
    }
    Ok(())
}

/// Memoryless encoder producing timed spikes.
///
/// Fires at `value * frequency` Hz, restarting the grid at every window.
#[derive(Debug, Clone)]
pub struct UniformEncoder {
    frequency: f64,
}

impl UniformEncoder {
    pub fn new(frequency: f64) -> SpikeflowResult<Self> {
        check_frequency(frequency)?;
        Ok(UniformEncoder { frequency })
    }

    pub fn convert(&self, value: f64, window: TimeWindow) -> TimedSpikeTrain {
        let value = normalize_input(value);
        if value == 0.0 {
            return TimedSpikeTrain::empty();
        }
        // Inter-spike interval in normalized unit-window coordinates.
        let delta_t = 1.0 / (value * self.frequency).max(1e-6) / window.length;
        if !delta_t.is_finite() || delta_t <= 0.0 {
            return TimedSpikeTrain::empty();
        }
        let mut times = Vec::new();
        let mut t = delta_t;
        while t <= 1.0 {
            times.push(t);
            t += delta_t;
        }
        TimedSpikeTrain::from_times_unchecked(times)
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }
}

impl Default for UniformEncoder {
    fn default() -> Self {
        UniformEncoder {
            frequency: DEFAULT_FREQUENCY,
        }
    }
}

impl Resettable for UniformEncoder {
    fn reset(&mut self) {}
}

/// Phase-preserving encoder producing timed spikes.
///
/// Pre-computes the firing grid up to `memory` window units past the current
/// window and carries the un-emitted phases into the next call, so the grid
/// is not restarted (and biased) at every window boundary.
#[derive(Debug, Clone)]
pub struct UniformWithMemoryEncoder {
    frequency: f64,
    memory: f64,
    carryover: Vec<f64>,
}

impl UniformWithMemoryEncoder {
    pub fn new(frequency: f64, memory: f64) -> SpikeflowResult<Self> {
        check_frequency(frequency)?;
        if memory <= 0.0 {
            return Err(SpikeflowError::BadParameters(format!(
                "carry-over memory must be > 0 window units, got {}",
                memory
            )));
        }
        Ok(UniformWithMemoryEncoder {
            frequency,
            memory,
            carryover: Vec::new(),
        })
    }

    pub fn convert(&mut self, value: f64, window: TimeWindow) -> TimedSpikeTrain {
        let value = normalize_input(value);
        if value == 0.0 {
            // Carried phases are left untouched for the next non-zero call.
            return TimedSpikeTrain::empty();
        }

        // Phases stored at the previous call are in this window's frame.
        let mut grid: Vec<f64> = self.carryover.drain(..).collect();

        // Top the grid up to the horizon at the current rate, continuing
        // from its last known phase so no grid point is produced twice.
        let delta_t = 1.0 / (value * self.frequency).max(1e-6) / window.length;
        if delta_t.is_finite() && delta_t > 0.0 {
            let horizon = 1.0 + self.memory;
            let mut t = grid.last().copied().unwrap_or(0.0) + delta_t;
            while t <= horizon {
                grid.push(t);
                t += delta_t;
            }
        }

        // Emit what falls inside this window, shift the rest down one
        // window for the next call. The grid is ascending, so the emitted
        // prefix keeps the train ordering invariant.
        let mut emitted = Vec::new();
        for phase in grid {
            if phase <= 1.0 {
                emitted.push(phase);
            } else {
                self.carryover.push(phase - 1.0);
            }
        }
        TimedSpikeTrain::from_times_unchecked(emitted)
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }

    /// Phases currently waiting for a later window, in window units.
    pub fn carryover(&self) -> &[f64] {
        &self.carryover
    }
}

impl Default for UniformWithMemoryEncoder {
    fn default() -> Self {
        UniformWithMemoryEncoder {
            frequency: DEFAULT_FREQUENCY,
            memory: DEFAULT_MEMORY_WINDOWS,
            carryover: Vec::new(),
        }
    }
}

impl Resettable for UniformWithMemoryEncoder {
    fn reset(&mut self) {
        self.carryover.clear();
    }
}

/// Memoryless encoder producing binned spikes.
///
/// Fires inside a frequency range: a zero-adjacent value still fires at
/// `min_frequency`, a full-scale value at `frequency`.
#[derive(Debug, Clone)]
pub struct QuantizedUniformEncoder {
    frequency: f64,
    min_frequency: f64,
}

impl QuantizedUniformEncoder {
    pub fn new(frequency: f64, min_frequency: f64) -> SpikeflowResult<Self> {
        check_frequency_range(frequency, min_frequency)?;
        Ok(QuantizedUniformEncoder {
            frequency,
            min_frequency,
        })
    }

    pub fn convert(&self, value: f64, window: TimeWindow) -> BinnedSpikeTrain {
        let value = normalize_input(value);
        let mut bins = BinnedSpikeTrain::zeroed();
        if value == 0.0 {
            return bins;
        }
        let frequency = value * (self.frequency - self.min_frequency) + self.min_frequency;
        // Inter-spike interval in window time units.
        let delta_t = 1.0 / frequency.max(1e-6);
        let mut t = delta_t;
        while t < window.length {
            bins.increment(bin_index(t, window.length));
            t += delta_t;
        }
        bins
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }
}

impl Default for QuantizedUniformEncoder {
    fn default() -> Self {
        QuantizedUniformEncoder {
            frequency: DEFAULT_FREQUENCY,
            min_frequency: DEFAULT_MIN_FREQUENCY,
        }
    }
}

impl Resettable for QuantizedUniformEncoder {
    fn reset(&mut self) {}
}

/// Phase-preserving encoder producing binned spikes.
///
/// Tracks the absolute time of the last emitted spike and walks the grid
/// forward from it, so the firing phase survives window boundaries that are
/// not integer multiples of the inter-spike interval.
#[derive(Debug, Clone)]
pub struct QuantizedUniformWithMemoryEncoder {
    frequency: f64,
    min_frequency: f64,
    last_spike_time: f64,
}

impl QuantizedUniformWithMemoryEncoder {
    pub fn new(frequency: f64, min_frequency: f64) -> SpikeflowResult<Self> {
        check_frequency_range(frequency, min_frequency)?;
        Ok(QuantizedUniformWithMemoryEncoder {
            frequency,
            min_frequency,
            last_spike_time: 0.0,
        })
    }

    pub fn convert(&mut self, value: f64, window: TimeWindow) -> BinnedSpikeTrain {
        let value = normalize_input(value);
        let mut bins = BinnedSpikeTrain::zeroed();
        if value == 0.0 {
            // The grid phase is left untouched for the next non-zero call.
            return bins;
        }
        let frequency = value * (self.frequency - self.min_frequency) + self.min_frequency;
        let delta_t = 1.0 / frequency.max(1e-6);
        if !delta_t.is_finite() || delta_t <= 0.0 {
            return bins;
        }
        let start = window.start();
        let mut t = self.last_spike_time;
        while t < window.end {
            if t >= start {
                bins.increment(bin_index(t - start, window.length));
                self.last_spike_time = t;
            }
            t += delta_t;
        }
        bins
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }

    /// Absolute time of the last counted spike.
    pub fn last_spike_time(&self) -> f64 {
        self.last_spike_time
    }
}

impl Default for QuantizedUniformWithMemoryEncoder {
    fn default() -> Self {
        QuantizedUniformWithMemoryEncoder {
            frequency: DEFAULT_FREQUENCY,
            min_frequency: DEFAULT_MIN_FREQUENCY,
            last_spike_time: 0.0,
        }
    }
}

impl Resettable for QuantizedUniformWithMemoryEncoder {
    fn reset(&mut self) {
        self.last_spike_time = 0.0;
    }
}

/// The closed family of value to spike-train encoders.
#[derive(Debug, Clone)]
pub enum SpikeTrainEncoder {
    Uniform(UniformEncoder),
    UniformWithMemory(UniformWithMemoryEncoder),
    QuantizedUniform(QuantizedUniformEncoder),
    QuantizedUniformWithMemory(QuantizedUniformWithMemoryEncoder),
}

impl ValueToSpikes for SpikeTrainEncoder {
    fn convert(&mut self, value: f64, window: TimeWindow) -> SpikeTrain {
        match self {
            SpikeTrainEncoder::Uniform(encoder) => SpikeTrain::Timed(encoder.convert(value, window)),
            SpikeTrainEncoder::UniformWithMemory(encoder) => {
                SpikeTrain::Timed(encoder.convert(value, window))
            }
            SpikeTrainEncoder::QuantizedUniform(encoder) => {
                SpikeTrain::Binned(encoder.convert(value, window))
            }
            SpikeTrainEncoder::QuantizedUniformWithMemory(encoder) => {
                SpikeTrain::Binned(encoder.convert(value, window))
            }
        }
    }

    fn set_frequency(&mut self, frequency: f64) {
        match self {
            SpikeTrainEncoder::Uniform(encoder) => encoder.set_frequency(frequency),
            SpikeTrainEncoder::UniformWithMemory(encoder) => encoder.set_frequency(frequency),
            SpikeTrainEncoder::QuantizedUniform(encoder) => encoder.set_frequency(frequency),
            SpikeTrainEncoder::QuantizedUniformWithMemory(encoder) => {
                encoder.set_frequency(frequency)
            }
        }
    }
}

impl Resettable for SpikeTrainEncoder {
    fn reset(&mut self) {
        match self {
            SpikeTrainEncoder::Uniform(encoder) => encoder.reset(),
            SpikeTrainEncoder::UniformWithMemory(encoder) => encoder.reset(),
            SpikeTrainEncoder::QuantizedUniform(encoder) => encoder.reset(),
            SpikeTrainEncoder::QuantizedUniformWithMemory(encoder) => encoder.reset(),
        }
    }
}
