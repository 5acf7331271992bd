//! Error types for snapshot sequences.
//!
//! All fallible operations in this crate return [`Result`], whose error
//! type is [`SignalError`]. Errors are surfaced synchronously to the caller;
//! nothing is retried or logged internally.

use std::fmt;

/// Identifies one of the per-step sequences held by a
/// [`SnapshotSequence`](crate::SnapshotSequence).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    /// Edge topology (`2 × E` node-index pairs).
    EdgeIndices,
    /// Edge weights (length `E`).
    EdgeWeights,
    /// Node features (`N × F`).
    Features,
    /// Node targets.
    Targets,
    /// Batch-assignment vectors (length `N`).
    Batches,
    /// A caller-named additional feature.
    Additional(String),
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::EdgeIndices => write!(f, "edge_indices"),
            Field::EdgeWeights => write!(f, "edge_weights"),
            Field::Features => write!(f, "features"),
            Field::Targets => write!(f, "targets"),
            Field::Batches => write!(f, "batches"),
            Field::Additional(key) => write!(f, "additional feature '{key}'"),
        }
    }
}

/// Error type for snapshot sequence construction and access.
#[derive(Debug, Clone, PartialEq)]
pub enum SignalError {
    /// A sequence's temporal length disagrees with the common length.
    InconsistentLength {
        /// Sequence whose length disagrees
        field: Field,
        /// Common length (taken from the feature sequence)
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },

    /// Time index outside `[0, snapshot_count)`.
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of snapshots in the sequence
        len: usize,
    },

    /// Target or additional-feature array of an element kind that cannot be
    /// converted to an integer or floating-point tensor.
    UnsupportedDtype {
        /// Sequence holding the array
        field: Field,
        /// Time index of the array
        index: usize,
        /// Element type name of the array
        dtype: &'static str,
    },

    /// Absent element where absence is not permitted.
    MissingValue {
        /// Sequence holding the absent element
        field: Field,
        /// Time index of the absent element
        index: usize,
    },

    /// The same additional-feature key was supplied twice.
    DuplicateFeature {
        /// Offending key
        key: String,
    },

    /// Invalid configuration or split parameters.
    InvalidConfig(String),

    /// Structural validation found errors.
    Validation(String),
}

impl fmt::Display for SignalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentLength {
                field,
                expected,
                actual,
            } => write!(
                f,
                "Temporal dimension inconsistency: {field} has {actual} entries, expected {expected}"
            ),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "Time index {index} out of range for {len} snapshots")
            }
            Self::UnsupportedDtype {
                field,
                index,
                dtype,
            } => write!(
                f,
                "Unsupported element type '{dtype}' in {field} at time index {index} \
                 (expected integer or floating point)"
            ),
            Self::MissingValue { field, index } => {
                write!(f, "Missing value in {field} at time index {index}")
            }
            Self::DuplicateFeature { key } => {
                write!(f, "Additional feature '{key}' supplied more than once")
            }
            Self::InvalidConfig(msg) => write!(f, "Invalid configuration: {msg}"),
            Self::Validation(msg) => write!(f, "Validation failed: {msg}"),
        }
    }
}

impl std::error::Error for SignalError {}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SignalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inconsistent_length_display() {
        let err = SignalError::InconsistentLength {
            field: Field::Targets,
            expected: 3,
            actual: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("targets"));
        assert!(msg.contains('3'));
        assert!(msg.contains('2'));
    }

    #[test]
    fn test_additional_field_display() {
        let field = Field::Additional("weight_extra".to_string());
        assert_eq!(field.to_string(), "additional feature 'weight_extra'");
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(SignalError::IndexOutOfRange { index: 5, len: 2 });
        assert_eq!(err.to_string(), "Time index 5 out of range for 2 snapshots");
    }
}
