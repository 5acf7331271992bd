//! Integration tests for snapshot sequence access and iteration.

use ndarray::{array, ArrayD, IxDyn};
use std::collections::BTreeMap;
use temporal_graph_signal::{
    AdditionalFeatures, DtypePolicy, Field, RawArray, SignalError, SnapshotSequence,
    SnapshotSequenceBuilder, TensorDType,
};

/// Two steps: 1×1 features, integer targets, no edges at step 0 and a
/// single edge at step 1, one graph per step.
fn two_step_sequence(additional: AdditionalFeatures) -> SnapshotSequence {
    SnapshotSequence::new(
        vec![None, Some(RawArray::from(array![[0i64, 1]]))],
        vec![None, Some(RawArray::from(vec![0.5f64]))],
        vec![
            Some(RawArray::from(array![[1.0f64]])),
            Some(RawArray::from(array![[2.0f64]])),
        ],
        vec![
            Some(RawArray::from(vec![0i64])),
            Some(RawArray::from(vec![1i64])),
        ],
        vec![
            Some(RawArray::from(vec![0i64])),
            Some(RawArray::from(vec![0i64])),
        ],
        additional,
    )
    .expect("consistent lengths")
}

fn float_values(array: &ArrayD<f32>) -> Vec<f32> {
    array.iter().copied().collect()
}

fn long_values(array: &ArrayD<i64>) -> Vec<i64> {
    array.iter().copied().collect()
}

#[test]
fn test_two_step_scenario() {
    let sequence = two_step_sequence(AdditionalFeatures::new());
    assert_eq!(sequence.snapshot_count(), 2);

    let first = sequence.get_snapshot(0).unwrap();
    let features = first.features.as_ref().unwrap();
    assert_eq!(features.shape(), &[1, 1]);
    assert_eq!(float_values(features), vec![1.0]);
    let target = first.target.as_ref().unwrap();
    assert_eq!(target.dtype(), TensorDType::Long);
    assert_eq!(long_values(target.as_long().unwrap()), vec![0]);
    assert!(first.edge_index.is_none());
    assert!(first.edge_weight.is_none());
    assert_eq!(long_values(first.batch.as_ref().unwrap()), vec![0]);

    let second = sequence.get_snapshot(1).unwrap();
    assert_eq!(float_values(second.features.as_ref().unwrap()), vec![2.0]);
    assert_eq!(
        long_values(second.target.as_ref().unwrap().as_long().unwrap()),
        vec![1]
    );
    let edge_index = second.edge_index.as_ref().unwrap();
    assert_eq!(edge_index.shape(), &[1, 2]);
    assert_eq!(long_values(edge_index), vec![0, 1]);
    assert_eq!(float_values(second.edge_weight.as_ref().unwrap()), vec![0.5]);
    assert_eq!(long_values(second.batch.as_ref().unwrap()), vec![0]);
}

#[test]
fn test_additional_feature_scenario() {
    let mut additional = AdditionalFeatures::new();
    additional.insert(
        "weight_extra".to_string(),
        vec![RawArray::from(vec![9i64]), RawArray::from(vec![10i64])],
    );
    let sequence = two_step_sequence(additional);

    assert_eq!(
        sequence.additional_feature_keys().collect::<Vec<_>>(),
        vec!["weight_extra"]
    );

    let snapshot = sequence.get_snapshot(0).unwrap();
    let extra = snapshot.additional_feature("weight_extra").unwrap();
    assert_eq!(extra.dtype(), TensorDType::Long);
    assert_eq!(long_values(extra.as_long().unwrap()), vec![9]);

    let snapshot = sequence.get_snapshot(1).unwrap();
    let extra = snapshot.additional_feature("weight_extra").unwrap();
    assert_eq!(long_values(extra.as_long().unwrap()), vec![10]);
}

#[test]
fn test_every_valid_index_succeeds() {
    let sequence = two_step_sequence(AdditionalFeatures::new());

    for t in 0..sequence.snapshot_count() {
        assert!(sequence.get_snapshot(t).is_ok());
    }
    for t in [2, 3, usize::MAX] {
        assert_eq!(
            sequence.get_snapshot(t).unwrap_err(),
            SignalError::IndexOutOfRange { index: t, len: 2 }
        );
    }
}

#[test]
fn test_mismatched_feature_and_target_counts() {
    let features = vec![None, None, None];
    let targets = vec![None, None];

    let err = SnapshotSequence::new(
        vec![None, None, None],
        vec![None, None, None],
        features,
        targets,
        vec![None, None, None],
        AdditionalFeatures::new(),
    )
    .unwrap_err();

    assert!(matches!(err, SignalError::InconsistentLength { .. }));
}

#[test]
fn test_shape_and_values_preserved() {
    let source = ArrayD::from_shape_vec(IxDyn(&[2, 3]), vec![1.5f64, 2.5, 3.5, 4.5, 5.5, 6.5])
        .unwrap();
    let sequence = SnapshotSequenceBuilder::new()
        .features(vec![Some(RawArray::from(source.clone()))])
        .build()
        .unwrap();

    let features = sequence.get_snapshot(0).unwrap().features.unwrap();
    assert_eq!(features.shape(), source.shape());
    for (converted, original) in features.iter().zip(source.iter()) {
        assert_eq!(f64::from(*converted), *original);
    }
}

#[test]
fn test_absent_passthrough_for_every_core_field() {
    let sequence = SnapshotSequenceBuilder::new()
        .edge_indices(vec![None])
        .edge_weights(vec![None])
        .features(vec![None])
        .targets(vec![None])
        .batches(vec![None])
        .build()
        .unwrap();

    let snapshot = sequence.get_snapshot(0).unwrap();
    assert!(snapshot.edge_index.is_none());
    assert!(snapshot.edge_weight.is_none());
    assert!(snapshot.features.is_none());
    assert!(snapshot.target.is_none());
    assert!(snapshot.batch.is_none());
    assert!(snapshot.additional.is_empty());
}

#[test]
fn test_target_dtype_branching() {
    let sequence = SnapshotSequenceBuilder::new()
        .targets(vec![
            Some(RawArray::from(array![[1i64, 2], [3, 4]])),
            Some(RawArray::from(array![[0.5f64], [1.5]])),
            Some(RawArray::from(vec![3i32, 4])),
        ])
        .build()
        .unwrap();

    let integer = sequence.get_snapshot(0).unwrap().target.unwrap();
    assert_eq!(integer.dtype(), TensorDType::Long);
    assert_eq!(integer.shape(), &[2, 2]);
    assert_eq!(long_values(integer.as_long().unwrap()), vec![1, 2, 3, 4]);

    let float = sequence.get_snapshot(1).unwrap().target.unwrap();
    assert_eq!(float.dtype(), TensorDType::Float);
    assert_eq!(float_values(float.as_float().unwrap()), vec![0.5, 1.5]);

    let narrow = sequence.get_snapshot(2).unwrap().target.unwrap();
    assert_eq!(narrow.dtype(), TensorDType::Long);
}

#[test]
fn test_bool_target_policy() {
    let targets = vec![Some(RawArray::from(vec![true, false, true]))];

    let strict = SnapshotSequenceBuilder::new()
        .targets(targets.clone())
        .build()
        .unwrap();
    assert_eq!(
        strict.get_snapshot(0).unwrap_err(),
        SignalError::UnsupportedDtype {
            field: Field::Targets,
            index: 0,
            dtype: "bool",
        }
    );

    let promoted = SnapshotSequenceBuilder::new()
        .targets(targets)
        .dtype_policy(DtypePolicy::PromoteBool)
        .build()
        .unwrap();
    let target = promoted.get_snapshot(0).unwrap().target.unwrap();
    assert_eq!(long_values(target.as_long().unwrap()), vec![1, 0, 1]);
}

#[test]
fn test_iteration_yields_all_in_order_and_restarts() {
    let sequence = two_step_sequence(AdditionalFeatures::new());

    let first_pass: Vec<_> = sequence
        .iter()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let second_pass: Vec<_> = (&sequence)
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(first_pass.len(), 2);
    assert_eq!(
        first_pass.iter().map(|s| s.time_index).collect::<Vec<_>>(),
        vec![0, 1]
    );
    assert_eq!(first_pass, second_pass);
}

#[test]
fn test_iteration_surfaces_conversion_errors() {
    let sequence = SnapshotSequenceBuilder::new()
        .targets(vec![
            Some(RawArray::from(vec![1i64])),
            Some(RawArray::from(vec![true])),
        ])
        .build()
        .unwrap();

    let results: Vec<_> = sequence.iter().collect();
    assert!(results[0].is_ok());
    assert!(matches!(
        results[1],
        Err(SignalError::UnsupportedDtype { index: 1, .. })
    ));
}

#[test]
fn test_concurrent_traversals_across_threads() {
    let sequence = two_step_sequence(AdditionalFeatures::new());
    let sequence = &sequence;

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(move || {
                    sequence
                        .iter()
                        .map(|s| s.unwrap().time_index)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), vec![0, 1]);
        }
    });
}

#[test]
fn test_snapshot_counts_for_batched_graph() {
    let sequence = SnapshotSequenceBuilder::new()
        .edge_indices(vec![Some(RawArray::from(array![[0i64, 2], [1, 3]]))])
        .features(vec![Some(RawArray::from(array![
            [1.0f32, 0.0],
            [0.0, 1.0],
            [1.0, 1.0],
            [0.0, 0.0]
        ]))])
        .batches(vec![Some(RawArray::from(vec![0i64, 0, 1, 1]))])
        .build()
        .unwrap();

    let snapshot = sequence.get_snapshot(0).unwrap();
    assert_eq!(snapshot.num_nodes(), Some(4));
    assert_eq!(snapshot.num_edges(), 2);
    assert_eq!(snapshot.num_graphs(), Some(2));
}

#[test]
fn test_snapshot_is_owned_by_caller() {
    let sequence = two_step_sequence(AdditionalFeatures::new());

    let mut snapshot = sequence.get_snapshot(0).unwrap();
    snapshot.features = None;
    snapshot.additional = BTreeMap::new();

    let fresh = sequence.get_snapshot(0).unwrap();
    assert!(fresh.features.is_some());
}
