//! Element types and the numeric capability trait
//!
//! Tensors are generic over an [`Element`] type rather than branching on a
//! runtime tag per operation: each operation is written once against the
//! capability set (zero-test, copy, equality, integer casts) and instantiated
//! per concrete type. The runtime [`DType`] tag still travels with every
//! tensor so callers that identify element types by name (e.g. `"float32"`)
//! can round-trip through [`DType::from_str`].

use crate::error::{TensorError, TypeError};
use std::fmt;
use std::str::FromStr;

/// Runtime element-type tag
///
/// Carries the element size and equality; extensible to further numeric
/// types without touching the operation set.
///
/// # Examples
///
/// ```
/// use tensr_core::DType;
///
/// assert_eq!(DType::Float32.size_bytes(), 4);
/// assert_eq!(DType::Float64.name(), "float64");
/// assert_eq!("float32".parse::<DType>().unwrap(), DType::Float32);
/// assert!("int8".parse::<DType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DType {
    /// 32-bit IEEE 754 float
    Float32,
    /// 64-bit IEEE 754 float
    Float64,
}

impl DType {
    /// Size of one element in bytes
    pub fn size_bytes(&self) -> usize {
        match self {
            DType::Float32 => 4,
            DType::Float64 => 8,
        }
    }

    /// Canonical lowercase name (`"float32"`, `"float64"`)
    pub fn name(&self) -> &'static str {
        match self {
            DType::Float32 => "float32",
            DType::Float64 => "float64",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DType {
    type Err = TensorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "float32" => Ok(DType::Float32),
            "float64" => Ok(DType::Float64),
            other => Err(TypeError::Unsupported {
                name: other.to_string(),
            }
            .into()),
        }
    }
}

/// Capability set required of tensor elements
///
/// Supports zero-test (`num_traits::Zero` via `Num`), copy, equality, and
/// casts from coordinate indices (`NumCast`, used by argwhere). Each
/// implementor names its runtime tag through [`Element::DTYPE`].
pub trait Element:
    Copy + PartialEq + PartialOrd + fmt::Debug + num_traits::Num + num_traits::NumCast + 'static
{
    /// The runtime tag corresponding to this element type
    const DTYPE: DType;
}

impl Element for f32 {
    const DTYPE: DType = DType::Float32;
}

impl Element for f64 {
    const DTYPE: DType = DType::Float64;
}
