//! Snapshot sequence container.

use super::iter::SnapshotIter;
use crate::array::RawArray;
use crate::config::DtypePolicy;
use crate::error::{Field, Result, SignalError};
use crate::snapshot::Snapshot;
use crate::tensor::{to_float_tensor, to_kind_tensor, to_long_tensor, Tensor};
use std::collections::BTreeMap;
use std::ops::{Bound, RangeBounds};

/// Per-step arrays for one core field; `None` marks a step with no data.
pub type ArraySlots = Vec<Option<RawArray>>;

/// Named additional-feature sequences. Elements are never absent.
pub type AdditionalFeatures = BTreeMap<String, Vec<RawArray>>;

/// Time-indexed collection of graph snapshots.
///
/// Holds five parallel per-step sequences (edge indices, edge weights, node
/// features, targets, batch assignment) plus named additional features. All
/// sequences share one temporal length, checked at construction and fixed
/// thereafter. Snapshots are converted on demand and never cached.
///
/// # Thread Safety
///
/// The container is immutable after construction. Traversal state lives in
/// [`SnapshotIter`], so any number of iterators may run at once, including
/// from different threads.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotSequence {
    edge_indices: ArraySlots,
    edge_weights: ArraySlots,
    features: ArraySlots,
    targets: ArraySlots,
    batches: ArraySlots,
    additional_features: AdditionalFeatures,
    snapshot_count: usize,
    dtype_policy: DtypePolicy,
}

impl SnapshotSequence {
    /// Create a sequence from caller-supplied per-step arrays.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::InconsistentLength`] if any core sequence or
    /// additional feature has a different length from `features`. Checks
    /// run in the order targets, edge indices, edge weights, batches, then
    /// additional features by key; the first mismatch is reported.
    pub fn new(
        edge_indices: ArraySlots,
        edge_weights: ArraySlots,
        features: ArraySlots,
        targets: ArraySlots,
        batches: ArraySlots,
        additional_features: AdditionalFeatures,
    ) -> Result<Self> {
        let snapshot_count = features.len();
        let sequence = Self {
            edge_indices,
            edge_weights,
            features,
            targets,
            batches,
            additional_features,
            snapshot_count,
            dtype_policy: DtypePolicy::default(),
        };
        sequence.check_temporal_consistency()?;

        log::debug!(
            "Snapshot sequence: {} snapshots, {} additional features",
            sequence.snapshot_count,
            sequence.additional_features.len()
        );

        Ok(sequence)
    }

    /// Set the conversion policy for targets and additional features.
    pub fn with_dtype_policy(mut self, policy: DtypePolicy) -> Self {
        self.dtype_policy = policy;
        self
    }

    fn check_temporal_consistency(&self) -> Result<()> {
        let expected = self.features.len();
        let core = [
            (Field::Targets, self.targets.len()),
            (Field::EdgeIndices, self.edge_indices.len()),
            (Field::EdgeWeights, self.edge_weights.len()),
            (Field::Batches, self.batches.len()),
        ];

        for (field, actual) in core {
            if actual != expected {
                return Err(SignalError::InconsistentLength {
                    field,
                    expected,
                    actual,
                });
            }
        }

        for (key, values) in &self.additional_features {
            if values.len() != expected {
                return Err(SignalError::InconsistentLength {
                    field: Field::Additional(key.clone()),
                    expected,
                    actual: values.len(),
                });
            }
        }

        Ok(())
    }

    /// Number of time steps.
    #[inline]
    pub fn snapshot_count(&self) -> usize {
        self.snapshot_count
    }

    /// Number of time steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.snapshot_count
    }

    /// True if the sequence has no time steps.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.snapshot_count == 0
    }

    /// Conversion policy for targets and additional features.
    pub fn dtype_policy(&self) -> DtypePolicy {
        self.dtype_policy
    }

    /// Names of the additional features, in sorted order.
    pub fn additional_feature_keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.additional_features.keys().map(String::as_str)
    }

    /// Raw arrays of one additional feature.
    pub fn additional_feature(&self, key: &str) -> Option<&[RawArray]> {
        self.additional_features.get(key).map(Vec::as_slice)
    }

    /// Raw edge indices.
    pub fn edge_indices(&self) -> &[Option<RawArray>] {
        &self.edge_indices
    }

    /// Raw edge weights.
    pub fn edge_weights(&self) -> &[Option<RawArray>] {
        &self.edge_weights
    }

    /// Raw node features.
    pub fn features(&self) -> &[Option<RawArray>] {
        &self.features
    }

    /// Raw targets.
    pub fn targets(&self) -> &[Option<RawArray>] {
        &self.targets
    }

    /// Raw batch-assignment vectors.
    pub fn batches(&self) -> &[Option<RawArray>] {
        &self.batches
    }

    fn get_target(&self, time_index: usize) -> Result<Option<Tensor>> {
        self.targets[time_index]
            .as_ref()
            .map(|raw| to_kind_tensor(raw, self.dtype_policy, &Field::Targets, time_index))
            .transpose()
    }

    fn get_additional_features(&self, time_index: usize) -> Result<BTreeMap<String, Tensor>> {
        self.additional_features
            .iter()
            .map(|(key, values)| {
                let field = Field::Additional(key.clone());
                let tensor = to_kind_tensor(&values[time_index], self.dtype_policy, &field, time_index)?;
                Ok((key.clone(), tensor))
            })
            .collect()
    }

    /// Convert the arrays at `time_index` into a [`Snapshot`].
    ///
    /// Absent core elements stay absent in the snapshot.
    ///
    /// # Errors
    ///
    /// - [`SignalError::IndexOutOfRange`] if `time_index >= snapshot_count`
    /// - [`SignalError::UnsupportedDtype`] if a target or additional feature
    ///   has an element kind rejected by the dtype policy
    pub fn get_snapshot(&self, time_index: usize) -> Result<Snapshot> {
        if time_index >= self.snapshot_count {
            return Err(SignalError::IndexOutOfRange {
                index: time_index,
                len: self.snapshot_count,
            });
        }

        Ok(Snapshot {
            time_index,
            features: to_float_tensor(self.features[time_index].as_ref()),
            edge_index: to_long_tensor(self.edge_indices[time_index].as_ref()),
            edge_weight: to_float_tensor(self.edge_weights[time_index].as_ref()),
            target: self.get_target(time_index)?,
            batch: to_long_tensor(self.batches[time_index].as_ref()),
            additional: self.get_additional_features(time_index)?,
        })
    }

    /// Begin a traversal from the first snapshot.
    ///
    /// Each call returns a fresh cursor; cursors do not share position.
    pub fn iter(&self) -> SnapshotIter<'_> {
        SnapshotIter::new(self)
    }

    /// Copy a contiguous range of time steps into a new sequence.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::IndexOutOfRange`] if the range extends past
    /// the last snapshot or starts after it ends.
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Result<Self> {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => self.snapshot_count,
        };

        if end > self.snapshot_count {
            return Err(SignalError::IndexOutOfRange {
                index: end - 1,
                len: self.snapshot_count,
            });
        }
        if start > end {
            return Err(SignalError::IndexOutOfRange {
                index: start,
                len: self.snapshot_count,
            });
        }

        let additional_features = self
            .additional_features
            .iter()
            .map(|(key, values)| (key.clone(), values[start..end].to_vec()))
            .collect();

        log::debug!("Sliced snapshot sequence to steps [{start}, {end})");

        Ok(Self {
            edge_indices: self.edge_indices[start..end].to_vec(),
            edge_weights: self.edge_weights[start..end].to_vec(),
            features: self.features[start..end].to_vec(),
            targets: self.targets[start..end].to_vec(),
            batches: self.batches[start..end].to_vec(),
            additional_features,
            snapshot_count: end - start,
            dtype_policy: self.dtype_policy,
        })
    }
}

impl<'a> IntoIterator for &'a SnapshotSequence {
    type Item = Result<Snapshot>;
    type IntoIter = SnapshotIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
