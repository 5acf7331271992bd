//! Dynamic graph temporal signals.
//!
//! A [`SnapshotSequence`] holds per-step graph data whose topology, weights,
//! features, targets and batch assignment may all change between steps, and
//! converts one step at a time into a [`Snapshot`](crate::Snapshot).
//!
//! # Architecture
//!
//! - **SnapshotSequence**: Length-validated container of raw per-step arrays
//! - **SnapshotSequenceBuilder**: Fluent construction with config and validation
//! - **SnapshotIter**: Independent forward/backward cursor over a sequence
//! - **split**: Chronological train/validation/test ranges
//!
//! # Example
//!
//! ```
//! use ndarray::array;
//! use temporal_graph_signal::{RawArray, SnapshotSequenceBuilder};
//!
//! let sequence = SnapshotSequenceBuilder::new()
//!     .features(vec![
//!         Some(RawArray::from(array![[1.0f64]])),
//!         Some(RawArray::from(array![[2.0f64]])),
//!     ])
//!     .targets(vec![Some(RawArray::from(vec![0i64])), Some(RawArray::from(vec![1i64]))])
//!     .build()
//!     .unwrap();
//!
//! for snapshot in &sequence {
//!     let snapshot = snapshot.unwrap();
//!     assert!(snapshot.edge_index.is_none());
//! }
//! ```

mod builder;
mod iter;
mod sequence;
pub mod split;

pub use builder::SnapshotSequenceBuilder;
pub use iter::SnapshotIter;
pub use sequence::{AdditionalFeatures, ArraySlots, SnapshotSequence};
pub use split::{temporal_signal_split, train_val_test_split, SplitSequences};
