//! Nested-view materialization
//!
//! Converts a flat row-major buffer into a recursively nested
//! sequence-of-sequences for consumers that want logical indexing instead of
//! flat offsets. This is a read-only presentational transform: the flat
//! buffer plus shape stays the one canonical representation, and a [`Nested`]
//! value is derived on demand, never stored back into a tensor.

use crate::dtype::Element;
use crate::error::{Result, ShapeError};
use crate::shape::numel;
use crate::tensor::types::Tensor;

/// Recursively nested view of a flat buffer
///
/// The innermost level is a flat run of `shape[n-1]` elements; each outer
/// level holds `shape[i]` nested sub-structures over equal contiguous blocks.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    /// Innermost run of elements (or a single element for rank-0 input)
    Leaf(Vec<T>),
    /// One level of nesting
    List(Vec<Nested<T>>),
}

impl<T> Nested<T>
where
    T: Element,
{
    /// Materialize a flat buffer into a nested structure matching `shape`
    ///
    /// # Errors
    ///
    /// [`ShapeError::SizeMismatch`] when `product(shape) != data.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensr_core::Nested;
    ///
    /// let nested = Nested::chunk(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// assert_eq!(
    ///     nested,
    ///     Nested::List(vec![
    ///         Nested::Leaf(vec![1.0, 2.0, 3.0]),
    ///         Nested::Leaf(vec![4.0, 5.0, 6.0]),
    ///     ])
    /// );
    ///
    /// assert!(Nested::chunk(&[1.0, 2.0], &[2, 3]).is_err());
    /// ```
    pub fn chunk(data: &[T], shape: &[usize]) -> Result<Self> {
        if numel(shape) != data.len() {
            return Err(ShapeError::SizeMismatch {
                shape: shape.to_vec(),
                len: data.len(),
            }
            .into());
        }
        Ok(Self::chunk_unchecked(data, shape))
    }

    // Size precondition already established; blocks divide evenly from here down.
    fn chunk_unchecked(data: &[T], shape: &[usize]) -> Self {
        if shape.len() <= 1 {
            return Nested::Leaf(data.to_vec());
        }

        let chunks = shape[0];
        if chunks == 0 {
            return Nested::List(Vec::new());
        }
        let chunk_size = data.len() / chunks;
        let children = (0..chunks)
            .map(|i| Self::chunk_unchecked(&data[i * chunk_size..(i + 1) * chunk_size], &shape[1..]))
            .collect();
        Nested::List(children)
    }

    /// Flatten back into a row-major buffer (inverse of [`Nested::chunk`])
    ///
    /// # Examples
    ///
    /// ```
    /// use tensr_core::Nested;
    ///
    /// let data = [1.0, 2.0, 3.0, 4.0];
    /// let nested = Nested::chunk(&data, &[2, 2]).unwrap();
    /// assert_eq!(nested.flatten(), data);
    /// ```
    pub fn flatten(&self) -> Vec<T> {
        match self {
            Nested::Leaf(values) => values.clone(),
            Nested::List(children) => children.iter().flat_map(|c| c.flatten()).collect(),
        }
    }

    /// Number of elements across all leaves
    pub fn len(&self) -> usize {
        match self {
            Nested::Leaf(values) => values.len(),
            Nested::List(children) => children.iter().map(|c| c.len()).sum(),
        }
    }

    /// Check if the view holds no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Tensor<T>
where
    T: Element,
{
    /// Materialize this tensor as a nested sequence view
    ///
    /// Infallible: every constructed tensor satisfies the size precondition
    /// of [`Nested::chunk`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tensr_core::{Nested, Tensor};
    ///
    /// let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// let nested = t.to_nested();
    /// assert_eq!(nested.flatten(), t.to_vec());
    /// ```
    pub fn to_nested(&self) -> Nested<T> {
        Nested::chunk(self.as_slice(), self.shape())
            .expect("tensor invariant guarantees buffer length matches shape")
    }
}
