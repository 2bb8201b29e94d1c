//! Property-based tests for the sensorimotor coding module
//!
//! The coders sit between an evolutionary optimizer and a physics
//! simulation, so they get fed whatever those produce. Nothing here may
//! panic, and every decoded value must stay inside the controller range.

use proptest::prelude::*;
use spikeflow_sensorimotor::*;
use spikeflow_structures::{
    Resettable, SpikeTrain, SpikesToValue, TimeWindow, TimedSpikeTrain, ValueToSpikes,
    SPIKE_BIN_COUNT,
};

proptest! {
    #[test]
    fn encoders_accept_any_finite_value(
        value in -1e6f64..1e6,
        window_length in 0.0f64..100.0,
        frequency in 0.1f64..500.0,
    ) {
        let window = TimeWindow::first(window_length);

        let uniform = UniformEncoder::new(frequency).unwrap();
        let train = uniform.convert(value, window);
        for &t in train.times() {
            prop_assert!(t > 0.0 && t <= 1.0);
        }

        let mut memory = UniformWithMemoryEncoder::new(frequency, 1.0).unwrap();
        memory.convert(value, window);
        memory.convert(value, window.next());
    }

    #[test]
    fn quantized_output_is_always_sixteen_bins(
        value in -1e3f64..1e3,
        window_length in 0.001f64..10.0,
        frequency in 1.0f64..300.0,
    ) {
        let encoder = QuantizedUniformEncoder::new(frequency + 1.0, 0.5).unwrap();
        let bins = encoder.convert(value, TimeWindow::first(window_length));
        prop_assert_eq!(bins.counts().len(), SPIKE_BIN_COUNT);

        let mut with_memory =
            QuantizedUniformWithMemoryEncoder::new(frequency + 1.0, 0.5).unwrap();
        let mut window = TimeWindow::first(window_length);
        for _ in 0..3 {
            let bins = with_memory.convert(value, window);
            prop_assert_eq!(bins.counts().len(), SPIKE_BIN_COUNT);
            window = window.next();
        }
    }

    #[test]
    fn decoded_values_stay_in_the_controller_range(
        spike_count in 0usize..10_000,
        window_length in 0.0f64..100.0,
        frequency in 0.1f64..500.0,
        window_count in 1usize..20,
    ) {
        let times: Vec<f64> = (1..=spike_count.min(64))
            .map(|i| i as f64 / 64.0)
            .collect();
        let timed = SpikeTrain::Timed(TimedSpikeTrain::from_times_unchecked(times));

        let mut decoders = [
            SpikeTrainDecoder::AverageFrequency(
                AverageFrequencyDecoder::new(frequency).unwrap(),
            ),
            SpikeTrainDecoder::MovingAverage(
                MovingAverageDecoder::new(frequency, window_count).unwrap(),
            ),
            SpikeTrainDecoder::QuantizedAverageFrequency(
                QuantizedAverageFrequencyDecoder::new(frequency).unwrap(),
            ),
            SpikeTrainDecoder::QuantizedMovingAverage(
                QuantizedMovingAverageDecoder::new(frequency, window_count).unwrap(),
            ),
        ];
        for decoder in decoders.iter_mut() {
            let value = decoder.convert(&timed, window_length);
            prop_assert!((-1.0..=1.0).contains(&value), "got {}", value);
        }
    }

    #[test]
    fn round_trip_never_leaves_the_controller_range(
        value in -2.0f64..2.0,
        window_length in 0.01f64..5.0,
    ) {
        let mut encoder = SpikeTrainEncoder::QuantizedUniformWithMemory(
            QuantizedUniformWithMemoryEncoder::new(60.0, 6.0).unwrap(),
        );
        let mut decoder = SpikeTrainDecoder::QuantizedAverageFrequency(
            QuantizedAverageFrequencyDecoder::new(60.0).unwrap(),
        );
        let mut window = TimeWindow::first(window_length);
        for _ in 0..4 {
            let spikes = encoder.convert(value, window);
            let decoded = decoder.convert(&spikes, window.length);
            prop_assert!((-1.0..=1.0).contains(&decoded));
            window = window.next();
        }
        encoder.reset();
    }

    #[test]
    fn one_hot_activity_is_binary_and_sized(
        values in proptest::collection::vec(-2.0f64..2.0, 0..8),
        bins in 1usize..12,
    ) {
        let input = InputConverter::new(bins).unwrap();
        let activity = input.convert(&values);
        prop_assert_eq!(activity.len(), values.len() * bins);
        for a in &activity {
            prop_assert!(*a == 0.0 || *a == 1.0);
        }

        let output = OutputConverter::new(bins).unwrap();
        let decoded = output.convert(&activity).unwrap();
        prop_assert_eq!(decoded.len(), values.len());
        for v in decoded {
            prop_assert!((-1.0..=1.0).contains(&v));
        }
    }
}
