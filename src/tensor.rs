//! Tensor representation of converted snapshot fields.
//!
//! Each field of a snapshot is converted according to its role:
//!
//! | Field | Tensor |
//! |-------|--------|
//! | Edge index | `i64` |
//! | Edge weight | `f32` |
//! | Node features | `f32` |
//! | Batch assignment | `i64` |
//! | Target | `i64` or `f32`, by source element kind |
//! | Additional feature | `i64` or `f32`, by source element kind |
//!
//! Fixed-role conversions never fail; they cast whatever element type the
//! loader supplied. Kind-dependent conversions consult a [`DtypePolicy`].

use crate::array::{ElementKind, RawArray};
use crate::config::DtypePolicy;
use crate::error::{Field, Result, SignalError};
use ndarray::ArrayD;
use std::fmt;

/// Element type of a [`Tensor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TensorDType {
    /// 64-bit signed integer
    Long,
    /// 32-bit float
    Float,
}

impl fmt::Display for TensorDType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TensorDType::Long => write!(f, "int64"),
            TensorDType::Float => write!(f, "float32"),
        }
    }
}

/// A converted numeric tensor.
#[derive(Debug, Clone, PartialEq)]
pub enum Tensor {
    /// Integer tensor (labels, indices)
    Long(ArrayD<i64>),
    /// Floating-point tensor (features, weights, regression targets)
    Float(ArrayD<f32>),
}

impl Tensor {
    /// Element type.
    pub fn dtype(&self) -> TensorDType {
        match self {
            Tensor::Long(_) => TensorDType::Long,
            Tensor::Float(_) => TensorDType::Float,
        }
    }

    /// Tensor shape.
    pub fn shape(&self) -> &[usize] {
        match self {
            Tensor::Long(a) => a.shape(),
            Tensor::Float(a) => a.shape(),
        }
    }

    /// Number of elements.
    pub fn numel(&self) -> usize {
        match self {
            Tensor::Long(a) => a.len(),
            Tensor::Float(a) => a.len(),
        }
    }

    /// Borrow as an integer array, if this is a `Long` tensor.
    pub fn as_long(&self) -> Option<&ArrayD<i64>> {
        match self {
            Tensor::Long(a) => Some(a),
            Tensor::Float(_) => None,
        }
    }

    /// Borrow as a float array, if this is a `Float` tensor.
    pub fn as_float(&self) -> Option<&ArrayD<f32>> {
        match self {
            Tensor::Float(a) => Some(a),
            Tensor::Long(_) => None,
        }
    }

    /// Take the integer array, if this is a `Long` tensor.
    pub fn into_long(self) -> Option<ArrayD<i64>> {
        match self {
            Tensor::Long(a) => Some(a),
            Tensor::Float(_) => None,
        }
    }

    /// Take the float array, if this is a `Float` tensor.
    pub fn into_float(self) -> Option<ArrayD<f32>> {
        match self {
            Tensor::Float(a) => Some(a),
            Tensor::Long(_) => None,
        }
    }
}

impl From<ArrayD<i64>> for Tensor {
    fn from(array: ArrayD<i64>) -> Self {
        Tensor::Long(array)
    }
}

impl From<ArrayD<f32>> for Tensor {
    fn from(array: ArrayD<f32>) -> Self {
        Tensor::Float(array)
    }
}

/// Convert an optional element to an integer tensor, passing absence through.
pub fn to_long_tensor(raw: Option<&RawArray>) -> Option<ArrayD<i64>> {
    raw.map(RawArray::to_long)
}

/// Convert an optional element to a float tensor, passing absence through.
pub fn to_float_tensor(raw: Option<&RawArray>) -> Option<ArrayD<f32>> {
    raw.map(RawArray::to_float)
}

/// Convert a target or additional-feature array, choosing the tensor type
/// from the source element kind.
///
/// Integer kinds become [`Tensor::Long`], float kinds [`Tensor::Float`].
/// Booleans are rejected under [`DtypePolicy::Strict`] and widened to
/// `Long` under [`DtypePolicy::PromoteBool`].
///
/// # Errors
///
/// Returns [`SignalError::UnsupportedDtype`] for rejected element kinds.
pub fn to_kind_tensor(
    raw: &RawArray,
    policy: DtypePolicy,
    field: &Field,
    index: usize,
) -> Result<Tensor> {
    match raw.kind() {
        ElementKind::SignedInt | ElementKind::UnsignedInt => Ok(Tensor::Long(raw.to_long())),
        ElementKind::Float => Ok(Tensor::Float(raw.to_float())),
        ElementKind::Bool => match policy {
            DtypePolicy::PromoteBool => Ok(Tensor::Long(raw.to_long())),
            DtypePolicy::Strict => Err(SignalError::UnsupportedDtype {
                field: field.clone(),
                index,
                dtype: raw.dtype_name(),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_integer_target_becomes_long() {
        let raw = RawArray::from(array![[1i64, 2], [3, 4]]);
        let tensor = to_kind_tensor(&raw, DtypePolicy::Strict, &Field::Targets, 0).unwrap();

        assert_eq!(tensor.dtype(), TensorDType::Long);
        assert_eq!(tensor.shape(), &[2, 2]);
        let values: Vec<i64> = tensor.as_long().unwrap().iter().copied().collect();
        assert_eq!(values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_unsigned_target_becomes_long() {
        let raw = RawArray::from(vec![7u8, 9]);
        let tensor = to_kind_tensor(&raw, DtypePolicy::Strict, &Field::Targets, 0).unwrap();
        assert_eq!(tensor.dtype(), TensorDType::Long);
    }

    #[test]
    fn test_float_target_becomes_float() {
        let raw = RawArray::from(vec![0.25f64, 0.5]);
        let tensor = to_kind_tensor(&raw, DtypePolicy::Strict, &Field::Targets, 0).unwrap();

        assert_eq!(tensor.dtype(), TensorDType::Float);
        let values: Vec<f32> = tensor.into_float().unwrap().iter().copied().collect();
        assert_eq!(values, vec![0.25, 0.5]);
    }

    #[test]
    fn test_bool_rejected_under_strict_policy() {
        let raw = RawArray::from(vec![true, false]);
        let err = to_kind_tensor(&raw, DtypePolicy::Strict, &Field::Targets, 3).unwrap_err();

        assert_eq!(
            err,
            SignalError::UnsupportedDtype {
                field: Field::Targets,
                index: 3,
                dtype: "bool",
            }
        );
    }

    #[test]
    fn test_bool_promoted_when_allowed() {
        let raw = RawArray::from(vec![true, false]);
        let tensor = to_kind_tensor(&raw, DtypePolicy::PromoteBool, &Field::Targets, 0).unwrap();
        assert_eq!(tensor.as_long().unwrap().iter().copied().collect::<Vec<_>>(), vec![1, 0]);
    }

    #[test]
    fn test_absent_passes_through() {
        assert!(to_long_tensor(None).is_none());
        assert!(to_float_tensor(None).is_none());
    }

    #[test]
    fn test_fixed_role_conversions_cast() {
        let weights = RawArray::from(vec![1i32, 2]);
        let tensor = to_float_tensor(Some(&weights)).unwrap();
        assert_eq!(tensor.iter().copied().collect::<Vec<_>>(), vec![1.0, 2.0]);

        let edges = RawArray::from(array![[0.0f32, 1.0], [1.0, 0.0]]);
        let tensor = to_long_tensor(Some(&edges)).unwrap();
        assert_eq!(tensor.shape(), &[2, 2]);
        assert_eq!(tensor.iter().copied().collect::<Vec<_>>(), vec![0, 1, 1, 0]);
    }

    #[test]
    fn test_tensor_accessors_mismatch() {
        let tensor = Tensor::from(ArrayD::<f32>::zeros(ndarray::IxDyn(&[2])));
        assert!(tensor.as_long().is_none());
        assert_eq!(tensor.numel(), 2);
        assert_eq!(tensor.dtype().to_string(), "float32");
    }
}
