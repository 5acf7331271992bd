//! Temporal Graph Signal
//!
//! Sequential access to dynamic graph snapshots for graph neural network
//! training loops.
//!
//! # Overview
//!
//! A dataset loader supplies, for each discrete time step, an edge index,
//! edge weights, node features, targets and a batch-assignment vector, any of
//! which may be absent, plus any number of named additional features. This
//! crate holds those per-step arrays, checks that they share one temporal
//! length, and converts one time step at a time into typed tensors:
//!
//! - Edge index and batch vector: `i64`
//! - Edge weights and node features: `f32`
//! - Targets and additional features: `i64` or `f32` by source element kind
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Temporal Graph Signal                        │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  array/       - Raw per-step arrays in their source dtype       │
//! │  tensor/      - Role-specific tensor conversion                 │
//! │  signal/      - SnapshotSequence, builder, cursor, split        │
//! │  snapshot/    - Converted single-step record                    │
//! │  validation/  - Opt-in structural checks                        │
//! │  config/      - Dtype policy, validation and split settings     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use ndarray::array;
//! use temporal_graph_signal::{AdditionalFeatures, RawArray, SnapshotSequence};
//!
//! let sequence = SnapshotSequence::new(
//!     vec![None, Some(RawArray::from(array![[0i64, 1]]))],
//!     vec![None, Some(RawArray::from(vec![0.5f64]))],
//!     vec![Some(RawArray::from(array![[1.0f64]])), Some(RawArray::from(array![[2.0f64]]))],
//!     vec![Some(RawArray::from(vec![0i64])), Some(RawArray::from(vec![1i64]))],
//!     vec![Some(RawArray::from(vec![0i64])), Some(RawArray::from(vec![0i64]))],
//!     AdditionalFeatures::new(),
//! )?;
//!
//! for snapshot in &sequence {
//!     let snapshot = snapshot?;
//!     println!("t={} edges={}", snapshot.time_index, snapshot.num_edges());
//! }
//! # Ok::<(), temporal_graph_signal::SignalError>(())
//! ```

pub mod array;
pub mod config;
pub mod error;
pub mod prelude;
pub mod signal;
pub mod snapshot;
pub mod tensor;
pub mod validation;

// Re-exports - Arrays & Tensors
pub use array::{ElementKind, RawArray};
pub use tensor::{Tensor, TensorDType};

// Re-exports - Errors
pub use error::{Field, Result, SignalError};

// Re-exports - Config
pub use config::{DtypePolicy, SignalConfig, SplitConfig};

// Re-exports - Signal
pub use signal::{
    temporal_signal_split, train_val_test_split, AdditionalFeatures, ArraySlots, SnapshotIter,
    SnapshotSequence, SnapshotSequenceBuilder, SplitSequences,
};
pub use snapshot::Snapshot;

// Re-exports - Validation
pub use validation::{SignalValidator, ValidationConfig, ValidationLevel, ValidationResult};
