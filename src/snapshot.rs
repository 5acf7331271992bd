//! Single time-step graph snapshot.

use crate::tensor::Tensor;
use ndarray::ArrayD;
use std::collections::BTreeMap;

/// Fully converted graph state for one time step.
///
/// Created fresh by [`SnapshotSequence::get_snapshot`](crate::SnapshotSequence::get_snapshot)
/// and owned by the caller. Core fields are `None` when the source sequence
/// held no data for that step; no empty graph is substituted.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Time index this snapshot was taken from
    pub time_index: usize,

    /// Node features `[N, F]`
    pub features: Option<ArrayD<f32>>,

    /// Edge topology `[2, E]`
    pub edge_index: Option<ArrayD<i64>>,

    /// Edge weights `[E]`
    pub edge_weight: Option<ArrayD<f32>>,

    /// Targets, integer or float by source element kind
    pub target: Option<Tensor>,

    /// Batch assignment `[N]`
    pub batch: Option<ArrayD<i64>>,

    /// Named additional tensors (never absent)
    pub additional: BTreeMap<String, Tensor>,
}

impl Snapshot {
    /// Look up an additional feature by name.
    pub fn additional_feature(&self, key: &str) -> Option<&Tensor> {
        self.additional.get(key)
    }

    /// Number of nodes, from the feature rows, else the batch vector, else
    /// the target rows.
    pub fn num_nodes(&self) -> Option<usize> {
        if let Some(x) = &self.features {
            return x.shape().first().copied();
        }
        if let Some(batch) = &self.batch {
            return Some(batch.len());
        }
        self.target
            .as_ref()
            .and_then(|y| y.shape().first().copied())
    }

    /// Number of edges: columns of a 2-D edge index, else 0.
    pub fn num_edges(&self) -> usize {
        match &self.edge_index {
            Some(edges) if edges.ndim() == 2 => edges.shape()[1],
            _ => 0,
        }
    }

    /// True if an edge index is present and holds at least one edge.
    pub fn has_edges(&self) -> bool {
        self.num_edges() > 0
    }

    /// Number of graphs in the batch (highest batch id + 1).
    ///
    /// `None` when no batch vector is present.
    pub fn num_graphs(&self) -> Option<usize> {
        self.batch.as_ref().map(|batch| {
            batch
                .iter()
                .copied()
                .max()
                .map_or(0, |max| usize::try_from(max).map_or(0, |m| m + 1))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, ArrayD};

    fn empty_snapshot() -> Snapshot {
        Snapshot {
            time_index: 0,
            features: None,
            edge_index: None,
            edge_weight: None,
            target: None,
            batch: None,
            additional: BTreeMap::new(),
        }
    }

    #[test]
    fn test_empty_snapshot_counts() {
        let snapshot = empty_snapshot();
        assert_eq!(snapshot.num_nodes(), None);
        assert_eq!(snapshot.num_edges(), 0);
        assert_eq!(snapshot.num_graphs(), None);
        assert!(!snapshot.has_edges());
    }

    #[test]
    fn test_counts_from_fields() {
        let mut snapshot = empty_snapshot();
        snapshot.features = Some(array![[1.0f32, 0.0], [0.0, 1.0], [1.0, 1.0]].into_dyn());
        snapshot.edge_index = Some(array![[0i64, 1], [1, 2]].into_dyn());
        snapshot.batch = Some(array![0i64, 0, 1].into_dyn());

        assert_eq!(snapshot.num_nodes(), Some(3));
        assert_eq!(snapshot.num_edges(), 2);
        assert_eq!(snapshot.num_graphs(), Some(2));
        assert!(snapshot.has_edges());
    }

    #[test]
    fn test_num_nodes_falls_back_to_batch_then_target() {
        let mut snapshot = empty_snapshot();
        snapshot.target = Some(Tensor::Long(array![1i64, 0, 1, 1].into_dyn()));
        assert_eq!(snapshot.num_nodes(), Some(4));

        snapshot.batch = Some(array![0i64, 0].into_dyn());
        assert_eq!(snapshot.num_nodes(), Some(2));
    }

    #[test]
    fn test_empty_batch_has_zero_graphs() {
        let mut snapshot = empty_snapshot();
        snapshot.batch = Some(ArrayD::<i64>::zeros(ndarray::IxDyn(&[0])));
        assert_eq!(snapshot.num_graphs(), Some(0));
    }

    #[test]
    fn test_additional_lookup() {
        let mut snapshot = empty_snapshot();
        snapshot
            .additional
            .insert("mask".to_string(), Tensor::Long(array![1i64].into_dyn()));

        assert!(snapshot.additional_feature("mask").is_some());
        assert!(snapshot.additional_feature("other").is_none());
    }
}
