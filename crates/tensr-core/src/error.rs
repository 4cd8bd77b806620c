//! Unified error types for tensor operations
//!
//! Every fallible operation in tensr-core returns [`TensorError`]. Errors are
//! grouped into three kinds matching the failure they report:
//!
//! - **[`TypeError`]**: element-type disagreement or an unsupported dtype name
//! - **[`ShapeError`]**: any violation of the row-major element-count
//!   invariant, axis-compatibility rule, or axis bounds
//! - **[`ValueError`]**: an invalid scalar parameter
//!
//! Operations validate all preconditions before touching any buffer, so a
//! returned error always leaves the inputs unchanged.
//!
//! # Examples
//!
//! ```
//! use tensr_core::{Tensor, TensorError, ShapeError};
//!
//! let t = Tensor::<f64>::zeros(&[2, 3]);
//! match t.reshape(&[7]) {
//!     Err(TensorError::Shape(ShapeError::ElementCountMismatch { .. })) => {}
//!     other => panic!("expected element count mismatch, got {other:?}"),
//! }
//! ```

use crate::dtype::DType;
use thiserror::Error;

/// Top-level error type for all tensor operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TensorError {
    /// Element-type errors
    #[error("type error: {0}")]
    Type(#[from] TypeError),

    /// Shape and axis errors
    #[error("shape error: {0}")]
    Shape(#[from] ShapeError),

    /// Invalid scalar parameters
    #[error("value error: {0}")]
    Value(#[from] ValueError),
}

/// Element-type disagreement and unsupported dtype names
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TypeError {
    #[error("expected dtype {expected}, got {actual}")]
    Mismatch { expected: DType, actual: DType },

    #[error("unsupported dtype name {name:?}")]
    Unsupported { name: String },
}

/// Violations of the row-major element-count invariant or axis rules
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// Buffer length disagrees with the declared shape's element count
    #[error("data length {actual} does not match shape {shape:?} ({expected} elements)")]
    LengthMismatch {
        shape: Vec<usize>,
        expected: usize,
        actual: usize,
    },

    /// More than one `-1` placeholder in a reshape target
    #[error("only one dimension can be inferred, got {placeholders} placeholders")]
    MultiplePlaceholders { placeholders: usize },

    /// Reshape inference failure: total elements not divisible by the
    /// explicit dimensions
    #[error("cannot infer dimension: {numel} elements are not divisible by {explicit}")]
    InconsistentElementCount { numel: usize, explicit: usize },

    /// Reshape target describes a different number of elements
    #[error("cannot reshape {numel} elements into shape {dims:?} ({target} elements)")]
    ElementCountMismatch {
        numel: usize,
        dims: Vec<isize>,
        target: usize,
    },

    /// Concat operands disagree on a non-concatenation axis
    #[error("dimension mismatch at axis {axis}: {expected} vs {actual}")]
    DimensionMismatch {
        axis: usize,
        expected: usize,
        actual: usize,
    },

    /// Stack operands do not all share one shape
    #[error("shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// Operands have different numbers of dimensions
    #[error("rank mismatch: expected rank {expected}, got {actual}")]
    RankMismatch { expected: usize, actual: usize },

    /// Operation requires a higher-rank tensor
    #[error("rank {rank} tensor, operation requires at least rank {required}")]
    RankTooSmall { rank: usize, required: usize },

    /// Axis index outside `[0, rank)` (or `[0, rank]` for stack)
    #[error("axis {axis} out of bounds for rank {rank}")]
    AxisOutOfBounds { axis: isize, rank: usize },

    /// Heaviside replacement tensor is neither scalar nor position-wise
    #[error("incompatible broadcast shape: {values} replacement values for {numel} elements")]
    BroadcastMismatch { numel: usize, values: usize },

    /// Operation does not support tensors of this rank
    #[error("unsupported rank {rank}")]
    UnsupportedRank { rank: usize },

    /// Chunk source buffer disagrees with the requested shape
    #[error("data size {len} does not match shape {shape:?}")]
    SizeMismatch { shape: Vec<usize>, len: usize },
}

/// Invalid scalar parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    /// Non-positive explicit dimension in a reshape target
    #[error("invalid dimension size {dim}")]
    InvalidDimension { dim: isize },

    /// Zero step in a range constructor
    #[error("step must be nonzero")]
    ZeroStep,

    /// Assembly operation given no operands
    #[error("no tensors provided")]
    EmptyTensorList,
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, TensorError>;
