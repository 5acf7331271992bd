//! Chronological splitting of snapshot sequences.
//!
//! Splits never shuffle: the training range always precedes the validation
//! range, which precedes the test range, so no future snapshot leaks into
//! training.

use super::sequence::SnapshotSequence;
use crate::config::SplitConfig;
use crate::error::{Result, SignalError};

/// Train/validation/test ranges of a sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitSequences {
    /// Earliest snapshots
    pub train: SnapshotSequence,
    /// Snapshots following the training range (may be empty)
    pub val: SnapshotSequence,
    /// Remaining snapshots
    pub test: SnapshotSequence,
}

/// Split into a training prefix of `floor(train_ratio * snapshot_count)`
/// snapshots and a test suffix holding the rest.
///
/// # Errors
///
/// Returns [`SignalError::InvalidConfig`] if `train_ratio` is outside `[0, 1]`.
pub fn temporal_signal_split(
    sequence: &SnapshotSequence,
    train_ratio: f64,
) -> Result<(SnapshotSequence, SnapshotSequence)> {
    let parts = train_val_test_split(sequence, &SplitConfig::new(train_ratio))?;
    Ok((parts.train, parts.test))
}

/// Split into train, validation and test ranges.
///
/// The training range holds `floor(train_ratio * T)` snapshots, the
/// validation range the next `floor(val_ratio * T)`, the test range the rest.
///
/// # Errors
///
/// Returns [`SignalError::InvalidConfig`] if the ratios are invalid.
pub fn train_val_test_split(
    sequence: &SnapshotSequence,
    config: &SplitConfig,
) -> Result<SplitSequences> {
    config.validate().map_err(SignalError::InvalidConfig)?;

    let total = sequence.snapshot_count();
    let train_end = ratio_count(config.train_ratio, total);
    let val_end = (train_end + ratio_count(config.val_ratio, total)).min(total);

    log::debug!(
        "Temporal split of {total} snapshots: train {train_end}, val {}, test {}",
        val_end - train_end,
        total - val_end
    );

    Ok(SplitSequences {
        train: sequence.slice(..train_end)?,
        val: sequence.slice(train_end..val_end)?,
        test: sequence.slice(val_end..)?,
    })
}

fn ratio_count(ratio: f64, total: usize) -> usize {
    ((ratio * total as f64).floor() as usize).min(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::RawArray;
    use crate::signal::SnapshotSequenceBuilder;

    fn sequence_of(steps: usize) -> SnapshotSequence {
        SnapshotSequenceBuilder::new()
            .features((0..steps).map(|t| Some(RawArray::from(vec![t as f32]))).collect())
            .build()
            .unwrap()
    }

    fn first_index(sequence: &SnapshotSequence) -> f32 {
        let snapshot = sequence.get_snapshot(0).unwrap();
        snapshot.features.unwrap()[[0]]
    }

    #[test]
    fn test_train_test_split() {
        let sequence = sequence_of(10);
        let (train, test) = temporal_signal_split(&sequence, 0.8).unwrap();

        assert_eq!(train.snapshot_count(), 8);
        assert_eq!(test.snapshot_count(), 2);
        assert_eq!(first_index(&test), 8.0);
    }

    #[test]
    fn test_split_floors_boundary() {
        let sequence = sequence_of(5);
        let (train, test) = temporal_signal_split(&sequence, 0.5).unwrap();

        assert_eq!(train.snapshot_count(), 2);
        assert_eq!(test.snapshot_count(), 3);
    }

    #[test]
    fn test_extreme_ratios() {
        let sequence = sequence_of(4);

        let (train, test) = temporal_signal_split(&sequence, 0.0).unwrap();
        assert!(train.is_empty());
        assert_eq!(test.snapshot_count(), 4);

        let (train, test) = temporal_signal_split(&sequence, 1.0).unwrap();
        assert_eq!(train.snapshot_count(), 4);
        assert!(test.is_empty());
    }

    #[test]
    fn test_invalid_ratio() {
        let sequence = sequence_of(4);
        assert!(matches!(
            temporal_signal_split(&sequence, 1.2),
            Err(SignalError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_three_way_split() {
        let sequence = sequence_of(10);
        let config = SplitConfig::new(0.6).with_val_ratio(0.2);
        let parts = train_val_test_split(&sequence, &config).unwrap();

        assert_eq!(parts.train.snapshot_count(), 6);
        assert_eq!(parts.val.snapshot_count(), 2);
        assert_eq!(parts.test.snapshot_count(), 2);
        assert_eq!(first_index(&parts.val), 6.0);
        assert_eq!(first_index(&parts.test), 8.0);
    }
}
