//! Prelude module for convenient imports.
//!
//! ```ignore
//! use temporal_graph_signal::prelude::*;
//!
//! let sequence = SnapshotSequenceBuilder::new()
//!     .features(features)
//!     .targets(targets)
//!     .build()?;
//! ```

// ============================================================================
// Core Container
// ============================================================================

pub use crate::signal::{
    AdditionalFeatures, ArraySlots, SnapshotIter, SnapshotSequence, SnapshotSequenceBuilder,
};
pub use crate::snapshot::Snapshot;

// ============================================================================
// Arrays & Tensors
// ============================================================================

pub use crate::array::{ElementKind, RawArray};
pub use crate::tensor::{Tensor, TensorDType};

// ============================================================================
// Errors
// ============================================================================

pub use crate::error::{Field, Result, SignalError};

// ============================================================================
// Configuration, Splitting & Validation
// ============================================================================

pub use crate::config::{DtypePolicy, SignalConfig, SplitConfig};
pub use crate::signal::{temporal_signal_split, train_val_test_split, SplitSequences};
pub use crate::validation::{SignalValidator, ValidationConfig, ValidationResult};
