use thiserror::Error;

/// Result type for Spikeflow operations
pub type SpikeflowResult<T> = Result<T, SpikeflowError>;

/// Common error type for Spikeflow components.
///
/// Construction-time configuration problems are fatal and surface as one of
/// these variants. Out-of-range *signal values* are never errors; they are
/// clamped at the point of use.
#[derive(Debug, Clone, Error)]
pub enum SpikeflowError {
    /// Invalid parameters provided to a constructor or setter
    #[error("Bad parameters: {0}")]
    BadParameters(String),

    /// An activity array or layer width is not an exact multiple of the bin count
    #[error("Dimension mismatch: expected a multiple of {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
