use std::fmt;

/// Reasons a generator call can be rejected.
///
/// All of these are raised while validating the inputs, before any
/// random draw, so a failed call never consumes randomness and never
/// returns a partial graph.
#[derive(Debug, Clone, PartialEq)]
pub enum SbmError {
    /// The probability matrix does not have one row and one column per cluster.
    ShapeMismatch {
        /// Expected shape, e.g. `3x3`
        expected: String,
        /// Shape actually provided
        actual: String,
    },

    /// A probability is outside `[0, 1]` or is NaN.
    InvalidProbability {
        /// Which parameter, e.g. `p` or `probability_matrix[0][1]`
        name: String,
        /// Offending value
        value: f64,
    },

    /// A vertex or cluster count is out of range.
    InvalidSize(String),

    /// `n` vertices cannot be split into `k` clusters of equal size.
    IndivisiblePartition {
        /// Number of vertices
        n: usize,
        /// Number of clusters
        k: usize,
    },
}

impl fmt::Display for SbmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SbmError::ShapeMismatch { expected, actual } => {
                write!(
                    f,
                    "probability matrix shape mismatch: expected {expected}, got {actual}"
                )
            }
            SbmError::InvalidProbability { name, value } => {
                write!(f, "invalid probability: {name} = {value}, expected [0, 1]")
            }
            SbmError::InvalidSize(msg) => write!(f, "invalid size: {msg}"),
            SbmError::IndivisiblePartition { n, k } => {
                write!(
                    f,
                    "cannot split {n} vertices into {k} clusters of equal size"
                )
            }
        }
    }
}

impl std::error::Error for SbmError {}

/// Check that `value` is a probability
pub(crate) fn check_probability(name: impl FnOnce() -> String, value: f64) -> Result<(), SbmError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SbmError::InvalidProbability {
            name: name(),
            value,
        })
    }
}
