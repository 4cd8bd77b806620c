//! Tensor type definition and basic operations
//!
//! This module defines the core `Tensor<T>` type with construction,
//! accessors, and the single in-place mutation path (`set_data`). Operations
//! are organized in sibling modules.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::dtype::{DType, Element};
use crate::error::{Result, ShapeError, TypeError};
use crate::shape::{flat_index, numel, strides_for};
use crate::types::Shape;

/// Dense N-dimensional tensor over a flat row-major buffer
///
/// A tensor owns a flat buffer of one numeric element type together with a
/// shape describing how the buffer maps to a logical N-dimensional grid in
/// row-major (last-axis-fastest) order. The invariant
/// `product(shape) == buffer.len()` holds for every constructed tensor.
///
/// The buffer is reference-counted: shape-only transforms (reshape, squeeze)
/// share it with their input, while anything that changes row-major order
/// (transpose, adjoint) or merges buffers (cat, stack) allocates a new one.
///
/// Two bookkeeping flags, gradient tracking and pinned memory, travel with
/// the tensor. The operations in this crate never interpret them; they are
/// propagated unchanged to every result.
///
/// # Examples
///
/// ```
/// use tensr_core::Tensor;
///
/// let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
/// assert_eq!(t.shape(), &[2, 3]);
/// assert_eq!(t.rank(), 2);
/// assert_eq!(t.numel(), 6);
/// assert_eq!(t[&[1, 2]], 6.0);
/// ```
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound(serialize = "T: serde::Serialize")))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "T: serde::Deserialize<'de>"))
)]
pub struct Tensor<T> {
    /// Flat buffer in row-major order, shared between views
    pub(crate) data: Arc<Vec<T>>,
    /// Dimension sizes, outermost first
    pub(crate) shape: Shape,
    /// Runtime element-type tag (always `T::DTYPE`)
    pub(crate) dtype: DType,
    /// Gradient-tracking flag, propagated but never interpreted here
    pub(crate) requires_grad: bool,
    /// Pinned-memory flag, propagated but never interpreted here
    pub(crate) pin_memory: bool,
}

impl<T> Tensor<T>
where
    T: Element,
{
    /// Create a tensor from a flat buffer and an explicit shape
    ///
    /// The buffer must be in row-major order and its length must equal the
    /// shape's element count. Both flags default to `false`.
    ///
    /// # Errors
    ///
    /// [`ShapeError::LengthMismatch`] when the buffer length disagrees with
    /// the shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensr_core::Tensor;
    ///
    /// let t = Tensor::from_vec(vec![1.0f32, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(t.shape(), &[2, 2]);
    ///
    /// assert!(Tensor::from_vec(vec![1.0f32, 2.0, 3.0], &[2, 2]).is_err());
    /// ```
    pub fn from_vec(data: Vec<T>, shape: &[usize]) -> Result<Self> {
        let expected = numel(shape);
        if data.len() != expected {
            return Err(ShapeError::LengthMismatch {
                shape: shape.to_vec(),
                expected,
                actual: data.len(),
            }
            .into());
        }
        Ok(Self {
            data: Arc::new(data),
            shape: Shape::from_slice(shape),
            dtype: T::DTYPE,
            requires_grad: false,
            pin_memory: false,
        })
    }

    /// Create a tensor from a flat buffer, shape, and element-type name
    ///
    /// The dynamic entry point for callers that identify element types by
    /// name. The name must parse to a known [`DType`] and agree with `T`.
    ///
    /// # Errors
    ///
    /// [`TypeError::Unsupported`] for an unknown name,
    /// [`TypeError::Mismatch`] when the name disagrees with `T`, and
    /// [`ShapeError::LengthMismatch`] as in [`Tensor::from_vec`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tensr_core::Tensor;
    ///
    /// let t = Tensor::from_vec_named(vec![0.0f64; 6], &[2, 3], "float64").unwrap();
    /// assert_eq!(t.dtype().name(), "float64");
    ///
    /// assert!(Tensor::<f64>::from_vec_named(vec![0.0; 6], &[2, 3], "float32").is_err());
    /// assert!(Tensor::<f64>::from_vec_named(vec![0.0; 6], &[2, 3], "int8").is_err());
    /// ```
    pub fn from_vec_named(data: Vec<T>, shape: &[usize], dtype: &str) -> Result<Self> {
        let parsed = DType::from_str(dtype)?;
        if parsed != T::DTYPE {
            return Err(TypeError::Mismatch {
                expected: T::DTYPE,
                actual: parsed,
            }
            .into());
        }
        Self::from_vec(data, shape)
    }

    /// Set the gradient-tracking flag, consuming and returning the tensor
    ///
    /// # Examples
    ///
    /// ```
    /// use tensr_core::Tensor;
    ///
    /// let t = Tensor::<f64>::zeros(&[2, 2]).with_requires_grad(true);
    /// assert!(t.requires_grad());
    /// ```
    pub fn with_requires_grad(mut self, requires_grad: bool) -> Self {
        self.requires_grad = requires_grad;
        self
    }

    /// Set the pinned-memory flag, consuming and returning the tensor
    pub fn with_pin_memory(mut self, pin_memory: bool) -> Self {
        self.pin_memory = pin_memory;
        self
    }

    /// Replace the whole buffer with new data of the same length
    ///
    /// This is the sole mutation entry point in the crate. The new buffer is
    /// validated against the existing shape before anything is replaced; on
    /// error the tensor is unchanged. Callers needing concurrent access must
    /// serialize around this method (one exclusive owner at a time) since it
    /// is not safe to call while readers hold a reference to the same tensor.
    ///
    /// # Errors
    ///
    /// [`ShapeError::LengthMismatch`] when the new buffer length disagrees
    /// with the shape's element count.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensr_core::Tensor;
    ///
    /// let mut t = Tensor::<f64>::zeros(&[2, 2]);
    /// t.set_data(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(t[&[1, 1]], 4.0);
    ///
    /// assert!(t.set_data(vec![1.0]).is_err());
    /// ```
    pub fn set_data(&mut self, data: Vec<T>) -> Result<()> {
        let expected = self.numel();
        if data.len() != expected {
            return Err(ShapeError::LengthMismatch {
                shape: self.shape_vec(),
                expected,
                actual: data.len(),
            }
            .into());
        }
        self.data = Arc::new(data);
        Ok(())
    }

    /// Get the shape of this tensor
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get an owned copy of the shape
    pub fn shape_vec(&self) -> Vec<usize> {
        self.shape.to_vec()
    }

    /// Get the rank (number of dimensions)
    ///
    /// A rank-0 tensor has an empty shape and holds exactly one element.
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Get the total number of elements
    ///
    /// # Examples
    ///
    /// ```
    /// use tensr_core::Tensor;
    ///
    /// assert_eq!(Tensor::<f32>::zeros(&[2, 3, 4]).numel(), 24);
    /// ```
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Alias for [`Tensor::numel`]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the tensor has zero elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the runtime element-type tag
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Whether gradient tracking is requested for this tensor
    pub fn requires_grad(&self) -> bool {
        self.requires_grad
    }

    /// Whether the buffer is flagged as pinned memory
    pub fn pin_memory(&self) -> bool {
        self.pin_memory
    }

    /// Get the flat buffer in row-major order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get a copy of the flat buffer in row-major order
    pub fn to_vec(&self) -> Vec<T> {
        self.data.to_vec()
    }

    /// Row-major strides for this tensor's shape
    ///
    /// # Examples
    ///
    /// ```
    /// use tensr_core::Tensor;
    ///
    /// let t = Tensor::<f64>::zeros(&[2, 3, 4]);
    /// assert_eq!(&t.strides()[..], &[12, 4, 1]);
    /// ```
    pub fn strides(&self) -> Shape {
        strides_for(&self.shape)
    }

    /// Bounds-checked element access by coordinate tuple
    ///
    /// Returns `None` when the index has the wrong rank or any coordinate is
    /// out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensr_core::Tensor;
    ///
    /// let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(t.get(&[0, 1]), Some(&2.0));
    /// assert_eq!(t.get(&[2, 0]), None);
    /// assert_eq!(t.get(&[0]), None);
    /// ```
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        if index.len() != self.rank() {
            return None;
        }
        if index.iter().zip(self.shape.iter()).any(|(&i, &d)| i >= d) {
            return None;
        }
        Some(&self.data[flat_index(index, &self.strides())])
    }

    /// Check whether any element is nonzero
    ///
    /// # Examples
    ///
    /// ```
    /// use tensr_core::Tensor;
    ///
    /// assert!(!Tensor::<f64>::zeros(&[2, 2]).is_nonzero());
    /// assert!(Tensor::from_vec(vec![0.0, 0.5], &[2]).unwrap().is_nonzero());
    /// ```
    pub fn is_nonzero(&self) -> bool {
        self.data.iter().any(|&v| v != T::zero())
    }

    /// Check if two tensors have the same shape
    pub fn same_shape(&self, other: &Self) -> bool {
        self.shape == other.shape
    }

    /// Build a result tensor that inherits this tensor's flags
    pub(crate) fn derived(&self, data: Arc<Vec<T>>, shape: Shape) -> Self {
        Self {
            data,
            shape,
            dtype: self.dtype,
            requires_grad: self.requires_grad,
            pin_memory: self.pin_memory,
        }
    }
}

impl<T: Element> std::ops::Index<&[usize]> for Tensor<T> {
    type Output = T;

    fn index(&self, index: &[usize]) -> &Self::Output {
        self.get(index)
            .unwrap_or_else(|| panic!("index {index:?} out of bounds for shape {:?}", self.shape()))
    }
}

impl<T: Element> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape())
            .field("dtype", &self.dtype)
            .field("requires_grad", &self.requires_grad)
            .field("pin_memory", &self.pin_memory)
            .field("data", &self.data)
            .finish()
    }
}
