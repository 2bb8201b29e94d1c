//! Spike-train to value decoders.
//!
//! Every decoder turns an observed spike count over a time window into a
//! bipolar control value by comparing the observed firing rate against a
//! reference frequency. The moving-average variants smooth the rate over a
//! rolling buffer of recent windows; the quantized variants read their spike
//! count from a binned train instead of a timed one, the formula is the
//! same.

use spikeflow_structures::signal;
use spikeflow_structures::{
    BinnedSpikeTrain, Resettable, SpikeTrain, SpikeflowError, SpikeflowResult, SpikesToValue,
    TimedSpikeTrain,
};

use crate::{DEFAULT_FREQUENCY, DEFAULT_WINDOW_COUNT};

/// Decoded output when no rate can be observed (zero-length window, empty
/// rolling buffer).
const NEUTRAL_VALUE: f64 = 0.0;

/// Rate-to-value decoding shared by every variant.
fn decode_average(spike_count: usize, window_length: f64, reference_frequency: f64) -> f64 {
    if window_length == 0.0 {
        return NEUTRAL_VALUE;
    }
    let observed_frequency = spike_count as f64 / window_length;
    signal::bipolar_from_unipolar(observed_frequency / reference_frequency)
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

/// Rolling `(window length, spike count)` buffer of the moving-average
/// decoders.
///
/// Slots start at zero length and are excluded from aggregation until first
/// written, which covers the startup transient before the buffer has filled
/// once.
#[derive(Debug, Clone)]
struct RollingWindow {
    window_lengths: Vec<f64>,
    spike_counts: Vec<u32>,
    index: usize,
}

impl RollingWindow {
    fn new(window_count: usize) -> Self {
        RollingWindow {
            window_lengths: vec![0.0; window_count],
            spike_counts: vec![0; window_count],
            index: 0,
        }
    }

    fn push(&mut self, spike_count: usize, window_length: f64) {
        self.window_lengths[self.index] = window_length;
        self.spike_counts[self.index] = spike_count as u32;
        self.index = (self.index + 1) % self.window_lengths.len();
    }

    /// Total spike count and window length over the written slots.
    fn totals(&self) -> (usize, f64) {
        let mut spikes = 0usize;
        let mut length = 0.0;
        for (&window_length, &count) in self.window_lengths.iter().zip(&self.spike_counts) {
            if window_length > 0.0 {
                spikes += count as usize;
                length += window_length;
            }
        }
        (spikes, length)
    }

    fn reset(&mut self) {
        self.window_lengths.fill(0.0);
        self.spike_counts.fill(0);
        self.index = 0;
    }
}

/// Stateless decoder over timed spikes: one window, one rate, one value.
#[derive(Debug, Clone)]
pub struct AverageFrequencyDecoder {
    frequency: f64,
}

impl AverageFrequencyDecoder {
    pub fn new(frequency: f64) -> SpikeflowResult<Self> {
        check_frequency(frequency)?;
        Ok(AverageFrequencyDecoder { frequency })
    }

    pub fn convert(&self, spikes: &TimedSpikeTrain, window_length: f64) -> f64 {
        decode_average(spikes.spike_count(), window_length, self.frequency)
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }
}

impl Default for AverageFrequencyDecoder {
    fn default() -> Self {
        AverageFrequencyDecoder {
            frequency: DEFAULT_FREQUENCY,
        }
    }
}

impl Resettable for AverageFrequencyDecoder {
    fn reset(&mut self) {}
}

/// Decoder over timed spikes smoothing the rate across recent windows.
#[derive(Debug, Clone)]
pub struct MovingAverageDecoder {
    frequency: f64,
    buffer: RollingWindow,
}

impl MovingAverageDecoder {
    pub fn new(frequency: f64, window_count: usize) -> SpikeflowResult<Self> {
        check_frequency(frequency)?;
        if window_count == 0 {
            return Err(SpikeflowError::BadParameters(
                "window count must be > 0".into(),
            ));
        }
        Ok(MovingAverageDecoder {
            frequency,
            buffer: RollingWindow::new(window_count),
        })
    }

    pub fn convert(&mut self, spikes: &TimedSpikeTrain, window_length: f64) -> f64 {
        self.decode_count(spikes.spike_count(), window_length)
    }

    fn decode_count(&mut self, spike_count: usize, window_length: f64) -> f64 {
        self.buffer.push(spike_count, window_length);
        let (total_spikes, total_length) = self.buffer.totals();
        decode_average(total_spikes, total_length, self.frequency)
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }
}

impl Default for MovingAverageDecoder {
    fn default() -> Self {
        MovingAverageDecoder {
            frequency: DEFAULT_FREQUENCY,
            buffer: RollingWindow::new(DEFAULT_WINDOW_COUNT),
        }
    }
}

impl Resettable for MovingAverageDecoder {
    fn reset(&mut self) {
        self.buffer.reset();
    }
}

/// Stateless decoder over binned spikes.
#[derive(Debug, Clone)]
pub struct QuantizedAverageFrequencyDecoder {
    frequency: f64,
}

impl QuantizedAverageFrequencyDecoder {
    pub fn new(frequency: f64) -> SpikeflowResult<Self> {
        check_frequency(frequency)?;
        Ok(QuantizedAverageFrequencyDecoder { frequency })
    }

    pub fn convert(&self, spikes: &BinnedSpikeTrain, window_length: f64) -> f64 {
        decode_average(spikes.spike_count(), window_length, self.frequency)
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }
}

impl Default for QuantizedAverageFrequencyDecoder {
    fn default() -> Self {
        QuantizedAverageFrequencyDecoder {
            frequency: DEFAULT_FREQUENCY,
        }
    }
}

impl Resettable for QuantizedAverageFrequencyDecoder {
    fn reset(&mut self) {}
}

/// Decoder over binned spikes smoothing the rate across recent windows.
#[derive(Debug, Clone)]
pub struct QuantizedMovingAverageDecoder {
    frequency: f64,
    buffer: RollingWindow,
}

impl QuantizedMovingAverageDecoder {
    pub fn new(frequency: f64, window_count: usize) -> SpikeflowResult<Self> {
        check_frequency(frequency)?;
        if window_count == 0 {
            return Err(SpikeflowError::BadParameters(
                "window count must be > 0".into(),
            ));
        }
        Ok(QuantizedMovingAverageDecoder {
            frequency,
            buffer: RollingWindow::new(window_count),
        })
    }

    pub fn convert(&mut self, spikes: &BinnedSpikeTrain, window_length: f64) -> f64 {
        self.decode_count(spikes.spike_count(), window_length)
    }

    fn decode_count(&mut self, spike_count: usize, window_length: f64) -> f64 {
        self.buffer.push(spike_count, window_length);
        let (total_spikes, total_length) = self.buffer.totals();
        decode_average(total_spikes, total_length, self.frequency)
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }
}

impl Default for QuantizedMovingAverageDecoder {
    fn default() -> Self {
        QuantizedMovingAverageDecoder {
            frequency: DEFAULT_FREQUENCY,
            buffer: RollingWindow::new(DEFAULT_WINDOW_COUNT),
        }
    }
}

impl Resettable for QuantizedMovingAverageDecoder {
    fn reset(&mut self) {
        self.buffer.reset();
    }
}

/// The closed family of spike-train to value decoders.
///
/// Both spike-train representations expose their total spike count, so the
/// family-level conversion accepts either; the quantized variants exist for
/// channels whose simulator side is binned.
#[derive(Debug, Clone)]
pub enum SpikeTrainDecoder {
    AverageFrequency(AverageFrequencyDecoder),
    MovingAverage(MovingAverageDecoder),
    QuantizedAverageFrequency(QuantizedAverageFrequencyDecoder),
    QuantizedMovingAverage(QuantizedMovingAverageDecoder),
}

impl SpikesToValue for SpikeTrainDecoder {
    fn convert(&mut self, spikes: &SpikeTrain, window_length: f64) -> f64 {
        let spike_count = spikes.spike_count();
        match self {
            SpikeTrainDecoder::AverageFrequency(decoder) => {
                decode_average(spike_count, window_length, decoder.frequency)
            }
            SpikeTrainDecoder::MovingAverage(decoder) => {
                decoder.decode_count(spike_count, window_length)
            }
            SpikeTrainDecoder::QuantizedAverageFrequency(decoder) => {
                decode_average(spike_count, window_length, decoder.frequency)
            }
            SpikeTrainDecoder::QuantizedMovingAverage(decoder) => {
                decoder.decode_count(spike_count, window_length)
            }
        }
    }

    fn set_frequency(&mut self, frequency: f64) {
        match self {
            SpikeTrainDecoder::AverageFrequency(decoder) => decoder.set_frequency(frequency),
            SpikeTrainDecoder::MovingAverage(decoder) => decoder.set_frequency(frequency),
            SpikeTrainDecoder::QuantizedAverageFrequency(decoder) => {
                decoder.set_frequency(frequency)
            }
            SpikeTrainDecoder::QuantizedMovingAverage(decoder) => decoder.set_frequency(frequency),
        }
    }
}

impl Resettable for SpikeTrainDecoder {
    fn reset(&mut self) {
        match self {
            SpikeTrainDecoder::AverageFrequency(decoder) => decoder.reset(),
            SpikeTrainDecoder::MovingAverage(decoder) => decoder.reset(),
            SpikeTrainDecoder::QuantizedAverageFrequency(decoder) => decoder.reset(),
            SpikeTrainDecoder::QuantizedMovingAverage(decoder) => decoder.reset(),
        }
    }
}
