//! Raw per-step arrays supplied by a dataset loader.
//!
//! A [`RawArray`] is an n-dimensional array in whatever element type the
//! loader produced. It is converted to a [`Tensor`](crate::Tensor) only when a
//! snapshot is requested.
//!
//! # Supported Element Types
//!
//! | Variant | Element | Kind |
//! |---------|---------|------|
//! | `Int32` | `i32` | signed integer |
//! | `Int64` | `i64` | signed integer |
//! | `UInt8` | `u8` | unsigned integer |
//! | `UInt32` | `u32` | unsigned integer |
//! | `Float32` | `f32` | floating point |
//! | `Float64` | `f64` | floating point |
//! | `Bool` | `bool` | boolean |
//!
//! # Example
//!
//! ```
//! use ndarray::array;
//! use temporal_graph_signal::{ElementKind, RawArray};
//!
//! let targets = RawArray::from(array![[1i64, 2], [3, 4]]);
//! assert_eq!(targets.kind(), ElementKind::SignedInt);
//! assert_eq!(targets.shape(), &[2, 2]);
//! ```

use ndarray::{Array, Array1, ArrayD, Dimension};
use std::fmt;

/// Element kind of a [`RawArray`], used to pick the tensor type for
/// targets and additional features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Signed integers
    SignedInt,
    /// Unsigned integers
    UnsignedInt,
    /// Floating point
    Float,
    /// Booleans
    Bool,
}

impl ElementKind {
    /// Signed or unsigned integer.
    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(self, ElementKind::SignedInt | ElementKind::UnsignedInt)
    }

    /// Floating point.
    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, ElementKind::Float)
    }

    /// One-character kind code (`i`, `u`, `f`, `b`).
    pub fn code(&self) -> char {
        match self {
            ElementKind::SignedInt => 'i',
            ElementKind::UnsignedInt => 'u',
            ElementKind::Float => 'f',
            ElementKind::Bool => 'b',
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::SignedInt => write!(f, "signed integer"),
            ElementKind::UnsignedInt => write!(f, "unsigned integer"),
            ElementKind::Float => write!(f, "floating point"),
            ElementKind::Bool => write!(f, "boolean"),
        }
    }
}

/// An n-dimensional array in its source element type.
#[derive(Debug, Clone, PartialEq)]
pub enum RawArray {
    /// `i32` elements
    Int32(ArrayD<i32>),
    /// `i64` elements
    Int64(ArrayD<i64>),
    /// `u8` elements
    UInt8(ArrayD<u8>),
    /// `u32` elements
    UInt32(ArrayD<u32>),
    /// `f32` elements
    Float32(ArrayD<f32>),
    /// `f64` elements
    Float64(ArrayD<f64>),
    /// `bool` elements
    Bool(ArrayD<bool>),
}

macro_rules! dispatch {
    ($value:expr, $array:ident => $body:expr) => {
        match $value {
            RawArray::Int32($array) => $body,
            RawArray::Int64($array) => $body,
            RawArray::UInt8($array) => $body,
            RawArray::UInt32($array) => $body,
            RawArray::Float32($array) => $body,
            RawArray::Float64($array) => $body,
            RawArray::Bool($array) => $body,
        }
    };
}

impl RawArray {
    /// Element kind of this array.
    pub fn kind(&self) -> ElementKind {
        match self {
            RawArray::Int32(_) | RawArray::Int64(_) => ElementKind::SignedInt,
            RawArray::UInt8(_) | RawArray::UInt32(_) => ElementKind::UnsignedInt,
            RawArray::Float32(_) | RawArray::Float64(_) => ElementKind::Float,
            RawArray::Bool(_) => ElementKind::Bool,
        }
    }

    /// Element type name (`"int64"`, `"float32"`, ...).
    pub fn dtype_name(&self) -> &'static str {
        match self {
            RawArray::Int32(_) => "int32",
            RawArray::Int64(_) => "int64",
            RawArray::UInt8(_) => "uint8",
            RawArray::UInt32(_) => "uint32",
            RawArray::Float32(_) => "float32",
            RawArray::Float64(_) => "float64",
            RawArray::Bool(_) => "bool",
        }
    }

    /// Array shape.
    pub fn shape(&self) -> &[usize] {
        dispatch!(self, a => a.shape())
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        dispatch!(self, a => a.ndim())
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        dispatch!(self, a => a.len())
    }

    /// True if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cast to `i64` elements.
    ///
    /// Integers widen, floats truncate toward zero (saturating, NaN becomes
    /// 0) and booleans become 0/1.
    pub fn to_long(&self) -> ArrayD<i64> {
        match self {
            RawArray::Int32(a) => a.mapv(i64::from),
            RawArray::Int64(a) => a.clone(),
            RawArray::UInt8(a) => a.mapv(i64::from),
            RawArray::UInt32(a) => a.mapv(i64::from),
            RawArray::Float32(a) => a.mapv(|v| v as i64),
            RawArray::Float64(a) => a.mapv(|v| v as i64),
            RawArray::Bool(a) => a.mapv(i64::from),
        }
    }

    /// Cast to `f32` elements.
    pub fn to_float(&self) -> ArrayD<f32> {
        match self {
            RawArray::Int32(a) => a.mapv(|v| v as f32),
            RawArray::Int64(a) => a.mapv(|v| v as f32),
            RawArray::UInt8(a) => a.mapv(f32::from),
            RawArray::UInt32(a) => a.mapv(|v| v as f32),
            RawArray::Float32(a) => a.clone(),
            RawArray::Float64(a) => a.mapv(|v| v as f32),
            RawArray::Bool(a) => a.mapv(f32::from),
        }
    }

    /// True if any floating-point element is NaN or infinite.
    ///
    /// Always false for non-float arrays.
    pub fn has_non_finite(&self) -> bool {
        match self {
            RawArray::Float32(a) => a.iter().any(|v| !v.is_finite()),
            RawArray::Float64(a) => a.iter().any(|v| !v.is_finite()),
            _ => false,
        }
    }
}

macro_rules! impl_from_array {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl<D: Dimension> From<Array<$ty, D>> for RawArray {
                fn from(array: Array<$ty, D>) -> Self {
                    RawArray::$variant(array.into_dyn())
                }
            }

            impl From<Vec<$ty>> for RawArray {
                fn from(values: Vec<$ty>) -> Self {
                    RawArray::$variant(Array1::from(values).into_dyn())
                }
            }
        )*
    };
}

impl_from_array!(
    i32 => Int32,
    i64 => Int64,
    u8 => UInt8,
    u32 => UInt32,
    f32 => Float32,
    f64 => Float64,
    bool => Bool,
);
