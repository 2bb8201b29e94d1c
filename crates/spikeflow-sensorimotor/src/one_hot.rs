//! Thermometer-coded adaptation between scalar arrays and a binary spiking
//! layer.
//!
//! Each scalar owns a fixed budget of `n_of_bins` consecutive units; the
//! number of active units grows monotonically with the scalar. The code is
//! lossy: every scalar above the last bin threshold decodes to the same
//! saturated output.

use spikeflow_structures::signal;
use spikeflow_structures::{SpikeflowError, SpikeflowResult};
use tracing::trace;

fn check_bins(n_of_bins: usize) -> SpikeflowResult<()> {
    if n_of_bins == 0 {
        return Err(SpikeflowError::BadParameters(
            "bin count must be > 0".into(),
        ));
    }
    Ok(())
}

fn check_layer_width(n_of_bins: usize, layer_width: usize) -> SpikeflowResult<()> {
    if layer_width % n_of_bins != 0 {
        return Err(SpikeflowError::DimensionMismatch {
            expected: n_of_bins,
            actual: layer_width,
        });
    }
    Ok(())
}

/// Scalar array to thermometer-coded activity array.
#[derive(Debug, Clone, Copy)]
pub struct InputConverter {
    n_of_bins: usize,
}

impl InputConverter {
    pub fn new(n_of_bins: usize) -> SpikeflowResult<Self> {
        check_bins(n_of_bins)?;
        Ok(InputConverter { n_of_bins })
    }

    /// Build a converter feeding a spiking layer of `layer_width` units,
    /// checking the width is an exact multiple of the bin count.
    pub fn for_layer(n_of_bins: usize, layer_width: usize) -> SpikeflowResult<Self> {
        let converter = Self::new(n_of_bins)?;
        check_layer_width(n_of_bins, layer_width)?;
        Ok(converter)
    }

    pub fn n_of_bins(&self) -> usize {
        self.n_of_bins
    }

    /// Activity array length produced for `n_of_values` scalars.
    pub fn activity_len(&self, n_of_values: usize) -> usize {
        n_of_values * self.n_of_bins
    }

    /// Encode unipolar scalars into a 0/1 activity array of length
    /// `values.len() * n_of_bins`. Out-of-range scalars are clamped.
    pub fn convert(&self, values: &[f64]) -> Vec<f64> {
        let threshold = 1.0 / (self.n_of_bins as f64 + 1.0);
        let mut activity = Vec::with_capacity(self.activity_len(values.len()));
        for &value in values {
            if !(0.0..=1.0).contains(&value) {
                trace!(value, "clamping out-of-range input scalar");
            }
            let value = value.clamp(0.0, 1.0);
            let active = ((value / threshold).floor() as usize).min(self.n_of_bins);
            for unit in 0..self.n_of_bins {
                activity.push(if unit < active { 1.0 } else { 0.0 });
            }
        }
        activity
    }
}

/// Thermometer-coded activity array back to bipolar scalars.
#[derive(Debug, Clone, Copy)]
pub struct OutputConverter {
    n_of_bins: usize,
}

impl OutputConverter {
    pub fn new(n_of_bins: usize) -> SpikeflowResult<Self> {
        check_bins(n_of_bins)?;
        Ok(OutputConverter { n_of_bins })
    }

    /// Build a converter reading a spiking layer of `layer_width` units,
    /// checking the width is an exact multiple of the bin count.
    pub fn for_layer(n_of_bins: usize, layer_width: usize) -> SpikeflowResult<Self> {
        let converter = Self::new(n_of_bins)?;
        check_layer_width(n_of_bins, layer_width)?;
        Ok(converter)
    }

    pub fn n_of_bins(&self) -> usize {
        self.n_of_bins
    }

    /// Decode each consecutive `n_of_bins`-sized chunk into one bipolar
    /// scalar. Errors when the activity length is not an exact multiple of
    /// the bin count.
    pub fn convert(&self, activity: &[f64]) -> SpikeflowResult<Vec<f64>> {
        if activity.len() % self.n_of_bins != 0 {
            return Err(SpikeflowError::DimensionMismatch {
                expected: self.n_of_bins,
                actual: activity.len(),
            });
        }
        Ok(activity
            .chunks(self.n_of_bins)
            .map(|chunk| {
                let active: f64 = chunk.iter().sum();
                signal::bipolar_from_unipolar(active / self.n_of_bins as f64)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bins_is_a_fatal_configuration_error() {
        assert!(InputConverter::new(0).is_err());
        assert!(OutputConverter::new(0).is_err());
    }

    #[test]
    fn test_layer_width_must_be_multiple_of_bins() {
        assert!(InputConverter::for_layer(5, 20).is_ok());
        assert!(InputConverter::for_layer(5, 21).is_err());
        assert!(OutputConverter::for_layer(3, 9).is_ok());
        assert!(OutputConverter::for_layer(3, 10).is_err());
    }

    #[test]
    fn test_thermometer_pattern() {
        let converter = InputConverter::new(4).unwrap();
        // threshold = 1/5; 0.5 crosses two thresholds.
        let activity = converter.convert(&[0.5]);
        assert_eq!(activity, vec![1.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_activity_length_is_values_times_bins() {
        let converter = InputConverter::new(3).unwrap();
        let activity = converter.convert(&[0.1, 0.9, 0.5, 0.0]);
        assert_eq!(activity.len(), 12);
    }

    #[test]
    fn test_maximal_input_activates_every_unit() {
        let converter = InputConverter::new(4).unwrap();
        assert_eq!(converter.convert(&[1.0]), vec![1.0; 4]);
    }

    #[test]
    fn silent_clamp_policy_applies_to_input_scalars() {
        let converter = InputConverter::new(4).unwrap();
        assert_eq!(converter.convert(&[7.0]), converter.convert(&[1.0]));
        assert_eq!(converter.convert(&[-3.0]), converter.convert(&[0.0]));
    }

    #[test]
    fn test_output_converter_rejects_ragged_activity() {
        let converter = OutputConverter::new(4).unwrap();
        assert!(converter.convert(&[1.0, 0.0, 1.0]).is_err());
        assert!(converter.convert(&[1.0, 0.0, 1.0, 0.0]).is_ok());
    }

    #[test]
    fn test_output_converter_decodes_chunks() {
        let converter = OutputConverter::new(4).unwrap();
        let values = converter
            .convert(&[1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0])
            .unwrap();
        assert_eq!(values.len(), 2);
        assert!((values[0] - 0.0).abs() < 1e-12);
        assert!((values[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_round_trip_saturates_near_full_scale() {
        // A maximal input decodes at or near full scale; everything above
        // the last bin threshold collapses onto the same code word.
        let input = InputConverter::new(5).unwrap();
        let output = OutputConverter::new(5).unwrap();
        let decoded = output.convert(&input.convert(&[1.0, 1.0])).unwrap();
        for v in decoded {
            assert!(v > 0.9, "got {}", v);
        }
    }
}
