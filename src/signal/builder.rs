//! Fluent builder for snapshot sequences.
//!
//! # Quick Start
//!
//! ```ignore
//! use temporal_graph_signal::SnapshotSequenceBuilder;
//!
//! let sequence = SnapshotSequenceBuilder::new()
//!     .edge_indices(edge_indices)
//!     .edge_weights(edge_weights)
//!     .features(features)
//!     .targets(targets)
//!     .batches(batches)
//!     .additional_feature("time_of_day", time_of_day)
//!     .build()?;
//! ```
//!
//! # Unset Fields
//!
//! Core sequences that are never set are filled with absent elements. Their
//! length is taken from the first set core sequence (features, targets, edge
//! indices, edge weights, batches), else from the first additional feature,
//! else zero.

use super::sequence::{AdditionalFeatures, ArraySlots, SnapshotSequence};
use crate::array::RawArray;
use crate::config::{DtypePolicy, SignalConfig};
use crate::error::{Field, Result, SignalError};
use crate::validation::SignalValidator;

/// Fluent builder for [`SnapshotSequence`].
#[derive(Debug, Clone, Default)]
pub struct SnapshotSequenceBuilder {
    edge_indices: Option<ArraySlots>,
    edge_weights: Option<ArraySlots>,
    features: Option<ArraySlots>,
    targets: Option<ArraySlots>,
    batches: Option<ArraySlots>,
    additional: Vec<(String, ArraySlots)>,
    config: SignalConfig,
}

impl SnapshotSequenceBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with a custom configuration.
    pub fn with_config(config: SignalConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Set the per-step edge indices.
    pub fn edge_indices(mut self, edge_indices: ArraySlots) -> Self {
        self.edge_indices = Some(edge_indices);
        self
    }

    /// Set the per-step edge weights.
    pub fn edge_weights(mut self, edge_weights: ArraySlots) -> Self {
        self.edge_weights = Some(edge_weights);
        self
    }

    /// Set the per-step node features.
    pub fn features(mut self, features: ArraySlots) -> Self {
        self.features = Some(features);
        self
    }

    /// Set the per-step targets.
    pub fn targets(mut self, targets: ArraySlots) -> Self {
        self.targets = Some(targets);
        self
    }

    /// Set the per-step batch-assignment vectors.
    pub fn batches(mut self, batches: ArraySlots) -> Self {
        self.batches = Some(batches);
        self
    }

    /// Attach a named additional feature.
    pub fn additional_feature(mut self, key: impl Into<String>, values: Vec<RawArray>) -> Self {
        self.additional
            .push((key.into(), values.into_iter().map(Some).collect()));
        self
    }

    /// Attach a named additional feature whose elements may be absent.
    ///
    /// Absent elements are rejected by [`build`](Self::build) with
    /// [`SignalError::MissingValue`].
    pub fn additional_feature_slots(mut self, key: impl Into<String>, values: ArraySlots) -> Self {
        self.additional.push((key.into(), values));
        self
    }

    /// Set the conversion policy for targets and additional features.
    pub fn dtype_policy(mut self, policy: DtypePolicy) -> Self {
        self.config.dtype_policy = policy;
        self
    }

    /// Run structural validation when building.
    pub fn validate_on_build(mut self, enabled: bool) -> Self {
        self.config.validate_on_build = enabled;
        self
    }

    /// Replace the configuration.
    pub fn config(mut self, config: SignalConfig) -> Self {
        self.config = config;
        self
    }

    fn common_len(&self) -> usize {
        [
            &self.features,
            &self.targets,
            &self.edge_indices,
            &self.edge_weights,
            &self.batches,
        ]
        .iter()
        .find_map(|slots| slots.as_ref().map(Vec::len))
        .or_else(|| self.additional.first().map(|(_, values)| values.len()))
        .unwrap_or(0)
    }

    /// Build the sequence.
    ///
    /// # Errors
    ///
    /// - [`SignalError::InvalidConfig`] if the configuration is invalid
    /// - [`SignalError::DuplicateFeature`] if an additional key repeats
    /// - [`SignalError::MissingValue`] if an additional feature has an absent element
    /// - [`SignalError::InconsistentLength`] if sequence lengths disagree
    /// - [`SignalError::Validation`] if validation on build finds errors
    pub fn build(self) -> Result<SnapshotSequence> {
        self.config.validate().map_err(SignalError::InvalidConfig)?;

        let common_len = self.common_len();
        let fill = |slots: Option<ArraySlots>| slots.unwrap_or_else(|| vec![None; common_len]);

        let mut additional = AdditionalFeatures::new();
        for (key, slots) in self.additional {
            if additional.contains_key(&key) {
                return Err(SignalError::DuplicateFeature { key });
            }
            let values = slots
                .into_iter()
                .enumerate()
                .map(|(index, slot)| {
                    slot.ok_or_else(|| SignalError::MissingValue {
                        field: Field::Additional(key.clone()),
                        index,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            additional.insert(key, values);
        }

        let sequence = SnapshotSequence::new(
            fill(self.edge_indices),
            fill(self.edge_weights),
            fill(self.features),
            fill(self.targets),
            fill(self.batches),
            additional,
        )?
        .with_dtype_policy(self.config.dtype_policy);

        if self.config.validate_on_build {
            let validator = SignalValidator::with_config(self.config.validation);
            let result = validator.validate_sequence(&sequence);

            if result.has_errors() {
                return Err(SignalError::Validation(result.errors().join("; ")));
            }
            for warning in result.warnings() {
                log::warn!("Snapshot sequence validation: {warning}");
            }
        }

        Ok(sequence)
    }
}
