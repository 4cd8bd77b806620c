//! Core type aliases for tensr tensors

use smallvec::SmallVec;

/// Type alias for tensor axis index.
///
/// Zero-indexed (0 is the outermost axis).
pub type Axis = usize;

/// Type alias for tensor rank (number of dimensions).
///
/// A rank-0 tensor has an empty shape and exactly one element.
pub type Rank = usize;

/// Shape type using SmallVec to avoid heap allocation for common cases.
///
/// Inline storage covers tensors with up to 6 dimensions; higher ranks fall
/// back to the heap automatically.
///
/// # Examples
///
/// ```
/// use tensr_core::Shape;
///
/// let shape = Shape::from_slice(&[2, 3, 4]);
/// assert_eq!(&shape[..], &[2, 3, 4]);
/// ```
pub type Shape = SmallVec<[usize; 6]>;
