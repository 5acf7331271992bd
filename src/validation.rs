//! Structural Validation Module
//!
//! Checks that the arrays of each time step describe a well-formed graph
//! before they reach a training loop. Validation is opt-in: construction
//! only enforces equal temporal lengths, and conversion never inspects
//! shapes.
//!
//! # Validation Categories
//!
//! 1. **Edge Shape**: Edge index is `[2, E]`, edge weights have `E` rows
//! 2. **Node Alignment**: Features, targets and batch vector agree on `N`
//! 3. **Edge Bounds**: Edge endpoints lie in `[0, N)`
//! 4. **Finite Values**: No NaN/Inf in float arrays
//! 5. **Batch Ordering**: Batch ids are non-decreasing
//!
//! # Usage
//!
//! ```ignore
//! use temporal_graph_signal::validation::SignalValidator;
//!
//! let validator = SignalValidator::default();
//! let result = validator.validate_sequence(&sequence);
//!
//! if !result.is_valid() {
//!     for warning in result.warnings() {
//!         println!("Warning: {}", warning);
//!     }
//! }
//! ```

use crate::array::RawArray;
use crate::signal::SnapshotSequence;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validation result for a single check.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationLevel {
    /// Data is valid
    Valid,
    /// Data has minor issues (warnings)
    Warning(String),
    /// Data has serious issues (errors)
    Error(String),
}

impl ValidationLevel {
    /// Check if this result indicates valid data.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationLevel::Valid)
    }

    /// Check if this result is a warning.
    pub fn is_warning(&self) -> bool {
        matches!(self, ValidationLevel::Warning(_))
    }

    /// Check if this result is an error.
    pub fn is_error(&self) -> bool {
        matches!(self, ValidationLevel::Error(_))
    }
}

impl fmt::Display for ValidationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationLevel::Valid => write!(f, "Valid"),
            ValidationLevel::Warning(msg) => write!(f, "Warning: {msg}"),
            ValidationLevel::Error(msg) => write!(f, "Error: {msg}"),
        }
    }
}

/// Aggregated validation result.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    results: Vec<(String, ValidationLevel)>,
}

impl ValidationResult {
    /// Create a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a validation result.
    pub fn add(&mut self, check_name: &str, level: ValidationLevel) {
        self.results.push((check_name.to_string(), level));
    }

    /// Append all results from another validation.
    pub fn merge(&mut self, other: ValidationResult) {
        self.results.extend(other.results);
    }

    /// Check if all validations passed (no errors or warnings).
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|(_, level)| level.is_valid())
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.results.iter().any(|(_, level)| level.is_error())
    }

    /// Check if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        self.results.iter().any(|(_, level)| level.is_warning())
    }

    /// All warnings, prefixed with their check name.
    pub fn warnings(&self) -> Vec<String> {
        self.results
            .iter()
            .filter_map(|(name, level)| match level {
                ValidationLevel::Warning(msg) => Some(format!("{name}: {msg}")),
                _ => None,
            })
            .collect()
    }

    /// All errors, prefixed with their check name.
    pub fn errors(&self) -> Vec<String> {
        self.results
            .iter()
            .filter_map(|(name, level)| match level {
                ValidationLevel::Error(msg) => Some(format!("{name}: {msg}")),
                _ => None,
            })
            .collect()
    }

    /// Get all results.
    pub fn all_results(&self) -> &[(String, ValidationLevel)] {
        &self.results
    }

    /// Get the number of checks performed.
    pub fn check_count(&self) -> usize {
        self.results.len()
    }

    /// Get the number of passed checks.
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|(_, l)| l.is_valid()).count()
    }

    fn issue_count(&self) -> usize {
        self.check_count() - self.passed_count()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let passed = self.passed_count();
        let total = self.check_count();
        writeln!(f, "Validation: {passed}/{total} checks passed")?;

        for (name, level) in &self.results {
            if !level.is_valid() {
                writeln!(f, "  - {name}: {level}")?;
            }
        }

        Ok(())
    }
}

/// Configuration for structural validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Edge index must be 2-D with two rows
    pub check_edge_index_shape: bool,

    /// Edge weight rows must equal the edge count
    pub check_edge_weight_alignment: bool,

    /// Features, targets and batch vector must agree on node count
    pub check_node_alignment: bool,

    /// Edge endpoints must be valid node ids
    pub check_edge_bounds: bool,

    /// Float arrays must not contain NaN/Inf
    pub check_finite: bool,

    /// Batch ids should be non-decreasing
    pub check_batch_ordering: bool,

    /// Stop after this many warnings and errors
    pub max_issues: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            check_edge_index_shape: true,
            check_edge_weight_alignment: true,
            check_node_alignment: true,
            check_edge_bounds: true,
            check_finite: true,
            check_batch_ordering: true,
            max_issues: 100,
        }
    }
}

impl ValidationConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_issues == 0 {
            return Err("max_issues must be > 0".to_string());
        }
        Ok(())
    }
}

/// Structural validator for snapshot sequences.
#[derive(Debug, Clone, Default)]
pub struct SignalValidator {
    config: ValidationConfig,
}

/// Leading dimension of an array, `None` for 0-D arrays.
fn rows(array: &RawArray) -> Option<usize> {
    array.shape().first().copied()
}

impl SignalValidator {
    /// Create a new validator with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with custom configuration.
    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate every time step of a sequence.
    ///
    /// Stops early once `max_issues` warnings and errors have accumulated.
    pub fn validate_sequence(&self, sequence: &SnapshotSequence) -> ValidationResult {
        let mut result = ValidationResult::new();

        for time_index in 0..sequence.snapshot_count() {
            result.merge(self.validate_step(sequence, time_index));

            if result.issue_count() >= self.config.max_issues {
                result.add(
                    "truncated",
                    ValidationLevel::Warning(format!(
                        "Stopped after step {time_index}: {} issues",
                        result.issue_count()
                    )),
                );
                break;
            }
        }

        result
    }

    /// Validate a single time step.
    ///
    /// Returns an empty result when `time_index` is out of range.
    pub fn validate_step(&self, sequence: &SnapshotSequence, time_index: usize) -> ValidationResult {
        let mut result = ValidationResult::new();
        if time_index >= sequence.snapshot_count() {
            return result;
        }

        let step = StepArrays {
            time_index,
            edge_index: sequence.edge_indices()[time_index].as_ref(),
            edge_weight: sequence.edge_weights()[time_index].as_ref(),
            features: sequence.features()[time_index].as_ref(),
            target: sequence.targets()[time_index].as_ref(),
            batch: sequence.batches()[time_index].as_ref(),
        };

        if self.config.check_edge_index_shape {
            self.validate_edge_index_shape(&step, &mut result);
        }

        if self.config.check_edge_weight_alignment {
            self.validate_edge_weight_alignment(&step, &mut result);
        }

        if self.config.check_node_alignment {
            self.validate_node_alignment(&step, &mut result);
        }

        if self.config.check_edge_bounds {
            self.validate_edge_bounds(&step, &mut result);
        }

        if self.config.check_finite {
            self.validate_finite(&step, &mut result);
        }

        if self.config.check_batch_ordering {
            self.validate_batch_ordering(&step, &mut result);
        }

        result
    }

    fn validate_edge_index_shape(&self, step: &StepArrays<'_>, result: &mut ValidationResult) {
        let Some(edge_index) = step.edge_index else {
            return;
        };

        let level = if step.edge_count().is_some() {
            ValidationLevel::Valid
        } else {
            ValidationLevel::Error(format!(
                "Edge index shape {:?}, expected [2, E]",
                edge_index.shape()
            ))
        };
        result.add(&step.check_name("edge_index_shape"), level);
    }

    fn validate_edge_weight_alignment(&self, step: &StepArrays<'_>, result: &mut ValidationResult) {
        let Some(edge_weight) = step.edge_weight else {
            return;
        };

        let level = match (step.edge_index, step.edge_count()) {
            (None, _) => ValidationLevel::Warning("Edge weights without edge index".to_string()),
            (Some(_), None) => return,
            (Some(_), Some(edges)) => match rows(edge_weight) {
                Some(weights) if weights == edges => ValidationLevel::Valid,
                weights => ValidationLevel::Error(format!(
                    "{} edge weights for {edges} edges",
                    weights.unwrap_or(0)
                )),
            },
        };
        result.add(&step.check_name("edge_weight_alignment"), level);
    }

    fn validate_node_alignment(&self, step: &StepArrays<'_>, result: &mut ValidationResult) {
        let counts: Vec<(&str, usize)> = [
            ("features", step.features),
            ("target", step.target),
            ("batch", step.batch),
        ]
        .into_iter()
        .filter_map(|(name, array)| array.and_then(rows).map(|n| (name, n)))
        .collect();

        if counts.len() < 2 {
            return;
        }

        let first = counts[0].1;
        let level = if counts.iter().all(|&(_, n)| n == first) {
            ValidationLevel::Valid
        } else {
            let listed: Vec<String> = counts
                .iter()
                .map(|(name, n)| format!("{name}={n}"))
                .collect();
            ValidationLevel::Error(format!("Node counts disagree: {}", listed.join(", ")))
        };
        result.add(&step.check_name("node_alignment"), level);
    }

    fn validate_edge_bounds(&self, step: &StepArrays<'_>, result: &mut ValidationResult) {
        let (Some(edge_index), Some(num_nodes)) = (step.edge_index, step.num_nodes()) else {
            return;
        };
        if step.edge_count().is_none() {
            return;
        }

        let ids = edge_index.to_long();
        let out_of_bounds = ids
            .iter()
            .filter(|&&id| id < 0 || usize::try_from(id).map_or(true, |id| id >= num_nodes))
            .count();

        let level = if out_of_bounds == 0 {
            ValidationLevel::Valid
        } else {
            ValidationLevel::Error(format!(
                "{out_of_bounds} edge endpoints outside [0, {num_nodes})"
            ))
        };
        result.add(&step.check_name("edge_bounds"), level);
    }

    fn validate_finite(&self, step: &StepArrays<'_>, result: &mut ValidationResult) {
        let float_arrays = [
            ("features", step.features),
            ("edge_weight", step.edge_weight),
            ("target", step.target),
        ];

        for (name, array) in float_arrays {
            let Some(array) = array else {
                continue;
            };
            if !array.kind().is_float() {
                continue;
            }

            let level = if array.has_non_finite() {
                ValidationLevel::Error(format!("NaN or infinite value in {name}"))
            } else {
                ValidationLevel::Valid
            };
            result.add(&step.check_name(&format!("{name}_finite")), level);
        }
    }

    fn validate_batch_ordering(&self, step: &StepArrays<'_>, result: &mut ValidationResult) {
        let Some(batch) = step.batch else {
            return;
        };

        let ids = batch.to_long();
        let sorted = ids.iter().zip(ids.iter().skip(1)).all(|(a, b)| a <= b);

        let level = if sorted {
            ValidationLevel::Valid
        } else {
            ValidationLevel::Warning("Batch ids are not non-decreasing".to_string())
        };
        result.add(&step.check_name("batch_ordering"), level);
    }
}

/// Raw arrays of one time step.
struct StepArrays<'a> {
    time_index: usize,
    edge_index: Option<&'a RawArray>,
    edge_weight: Option<&'a RawArray>,
    features: Option<&'a RawArray>,
    target: Option<&'a RawArray>,
    batch: Option<&'a RawArray>,
}

impl StepArrays<'_> {
    fn check_name(&self, check: &str) -> String {
        format!("step_{}.{check}", self.time_index)
    }

    /// Edge count when the edge index is `[2, E]`.
    fn edge_count(&self) -> Option<usize> {
        self.edge_index.and_then(|edges| match edges.shape() {
            [2, e] => Some(*e),
            _ => None,
        })
    }

    fn num_nodes(&self) -> Option<usize> {
        [self.features, self.batch, self.target]
            .into_iter()
            .flatten()
            .find_map(rows)
    }
}
