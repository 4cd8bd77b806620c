//! Tensor combining operations
//!
//! Concatenation along an existing axis and stacking along a new axis. Both
//! allocate a fresh buffer: merging buffers can never share storage with the
//! inputs. Flags are taken from the first operand.
//!
//! The buffer layout follows the row-major mapping of the combined shape.
//! For an interior axis the inputs are interleaved block-by-block: a raw
//! append of the input buffers is only correct for axis 0 (or rank-1
//! inputs), where the per-input block happens to be the whole buffer.

use std::sync::Arc;

use crate::dtype::Element;
use crate::error::{Result, ShapeError, ValueError};
use crate::tensor::types::Tensor;
use crate::types::Shape;

impl<T> Tensor<T>
where
    T: Element,
{
    /// Concatenate tensors along an existing axis
    ///
    /// All tensors must share rank and agree on every axis except `dim`. The
    /// result's size at `dim` is the sum of the inputs' sizes there; every
    /// other axis is unchanged.
    ///
    /// # Errors
    ///
    /// - [`ValueError::EmptyTensorList`] for an empty input list
    /// - [`ShapeError::AxisOutOfBounds`] when `dim >= rank`
    /// - [`ShapeError::RankMismatch`] when ranks differ
    /// - [`ShapeError::DimensionMismatch`] when a non-`dim` axis disagrees
    ///
    /// # Examples
    ///
    /// ```
    /// use tensr_core::Tensor;
    ///
    /// let a = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// let b = Tensor::from_vec(vec![5.0, 6.0], &[1, 2]).unwrap();
    ///
    /// let out = Tensor::cat(&[a, b], 0).unwrap();
    /// assert_eq!(out.shape(), &[3, 2]);
    /// assert_eq!(out.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// ```
    ///
    /// Concatenating along an interior axis interleaves the inputs:
    ///
    /// ```
    /// use tensr_core::Tensor;
    ///
    /// let a = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// let b = Tensor::from_vec(vec![5.0, 6.0], &[2, 1]).unwrap();
    ///
    /// let out = Tensor::cat(&[a, b], 1).unwrap();
    /// assert_eq!(out.shape(), &[2, 3]);
    /// assert_eq!(out.as_slice(), &[1.0, 2.0, 5.0, 3.0, 4.0, 6.0]);
    /// ```
    pub fn cat(tensors: &[Self], dim: usize) -> Result<Self> {
        let first = tensors.first().ok_or(ValueError::EmptyTensorList)?;
        let rank = first.rank();
        if dim >= rank {
            return Err(ShapeError::AxisOutOfBounds {
                axis: dim as isize,
                rank,
            }
            .into());
        }

        for t in tensors.iter().skip(1) {
            if t.rank() != rank {
                return Err(ShapeError::RankMismatch {
                    expected: rank,
                    actual: t.rank(),
                }
                .into());
            }
            for (axis, (&expected, &actual)) in
                first.shape().iter().zip(t.shape().iter()).enumerate()
            {
                if axis != dim && expected != actual {
                    return Err(ShapeError::DimensionMismatch {
                        axis,
                        expected,
                        actual,
                    }
                    .into());
                }
            }
        }

        let mut new_shape: Shape = Shape::from_slice(first.shape());
        new_shape[dim] = tensors.iter().map(|t| t.shape()[dim]).sum();

        // Per-input contiguous block: everything from `dim` inward. The
        // outer count is shared by all inputs since the axes before `dim`
        // agree.
        let outer: usize = first.shape()[..dim].iter().product();
        let inner: usize = first.shape()[dim + 1..].iter().product();

        let total: usize = tensors.iter().map(|t| t.numel()).sum();
        let mut data = Vec::with_capacity(total);
        for o in 0..outer {
            for t in tensors {
                let block = t.shape()[dim] * inner;
                data.extend_from_slice(&t.as_slice()[o * block..(o + 1) * block]);
            }
        }

        Ok(first.derived(Arc::new(data), new_shape))
    }

    /// Stack tensors along a new axis
    ///
    /// All tensors must have identical shapes. The result gains one
    /// dimension: a new axis of size `len(tensors)` at position `dim`.
    /// Negative `dim` counts from the end (`dim += rank + 1`).
    ///
    /// Each input is one slice along the new axis; its buffer lands in
    /// contiguous blocks whose length is the row-major stride just below the
    /// insertion point.
    ///
    /// # Errors
    ///
    /// - [`ValueError::EmptyTensorList`] for an empty input list
    /// - [`ShapeError::AxisOutOfBounds`] when the normalized `dim` is outside
    ///   `[0, rank]`
    /// - [`ShapeError::ShapeMismatch`] when shapes differ
    ///
    /// # Examples
    ///
    /// ```
    /// use tensr_core::Tensor;
    ///
    /// let a = Tensor::from_vec(vec![1.0, 2.0], &[2]).unwrap();
    /// let b = Tensor::from_vec(vec![3.0, 4.0], &[2]).unwrap();
    ///
    /// let rows = Tensor::stack(&[a.clone(), b.clone()], 0).unwrap();
    /// assert_eq!(rows.shape(), &[2, 2]);
    /// assert_eq!(rows.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    ///
    /// let cols = Tensor::stack(&[a, b], -1).unwrap();
    /// assert_eq!(cols.shape(), &[2, 2]);
    /// assert_eq!(cols.as_slice(), &[1.0, 3.0, 2.0, 4.0]);
    /// ```
    pub fn stack(tensors: &[Self], dim: isize) -> Result<Self> {
        let first = tensors.first().ok_or(ValueError::EmptyTensorList)?;
        let rank = first.rank();

        let dim = if dim < 0 { dim + rank as isize + 1 } else { dim };
        if dim < 0 || dim > rank as isize {
            return Err(ShapeError::AxisOutOfBounds { axis: dim, rank }.into());
        }
        let dim = dim as usize;

        for t in tensors.iter().skip(1) {
            if !t.same_shape(first) {
                return Err(ShapeError::ShapeMismatch {
                    expected: first.shape_vec(),
                    actual: t.shape_vec(),
                }
                .into());
            }
        }

        let mut new_shape: Shape = Shape::from_slice(first.shape());
        new_shape.insert(dim, tensors.len());

        // Stride below the new axis: block written per input slice.
        let outer: usize = first.shape()[..dim].iter().product();
        let block: usize = first.shape()[dim..].iter().product();

        let mut data = Vec::with_capacity(first.numel() * tensors.len());
        for o in 0..outer {
            for t in tensors {
                data.extend_from_slice(&t.as_slice()[o * block..(o + 1) * block]);
            }
        }

        Ok(first.derived(Arc::new(data), new_shape))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tensor(data: Vec<f64>, shape: &[usize]) -> Tensor<f64> {
        Tensor::from_vec(data, shape).unwrap()
    }

    #[test]
    fn test_cat_axis0_appends_buffers() {
        let a = tensor(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]);
        let b = tensor(vec![5.0, 6.0], &[1, 2]);
        let out = Tensor::cat(&[a, b], 0).unwrap();
        assert_eq!(out.shape(), &[3, 2]);
        assert_eq!(out.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_cat_interior_axis_interleaves() {
        // [[1,2],[3,4]] ++ [[5],[6]] along axis 1 -> [[1,2,5],[3,4,6]]
        let a = tensor(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]);
        let b = tensor(vec![5.0, 6.0], &[2, 1]);
        let out = Tensor::cat(&[a, b], 1).unwrap();
        assert_eq!(out.shape(), &[2, 3]);
        assert_eq!(out.as_slice(), &[1.0, 2.0, 5.0, 3.0, 4.0, 6.0]);
    }

    #[test]
    fn test_cat_rank3_middle_axis() {
        let a = tensor((0..8).map(f64::from).collect(), &[2, 2, 2]);
        let b = tensor((8..12).map(f64::from).collect(), &[2, 1, 2]);
        let out = Tensor::cat(&[a.clone(), b.clone()], 1).unwrap();
        assert_eq!(out.shape(), &[2, 3, 2]);
        for i in 0..2 {
            for j in 0..2 {
                for k in 0..2 {
                    assert_eq!(out[&[i, j, k]], a[&[i, j, k]]);
                }
            }
            for k in 0..2 {
                assert_eq!(out[&[i, 2, k]], b[&[i, 0, k]]);
            }
        }
    }

    #[test]
    fn test_cat_size_law() {
        let parts: Vec<_> = (0..3)
            .map(|i| tensor(vec![f64::from(i); 6], &[2, 3]))
            .collect();
        let out = Tensor::cat(&parts, 1).unwrap();
        assert_eq!(out.shape(), &[2, 9]);
        assert_eq!(out.numel(), 18);
    }

    #[test]
    fn test_cat_dimension_mismatch() {
        let a = tensor(vec![0.0; 6], &[2, 3]);
        let b = tensor(vec![0.0; 6], &[3, 2]);
        assert!(matches!(
            Tensor::cat(&[a, b], 0),
            Err(crate::TensorError::Shape(ShapeError::DimensionMismatch {
                axis: 1,
                expected: 3,
                actual: 2,
            }))
        ));
    }

    #[test]
    fn test_cat_empty_list() {
        assert!(matches!(
            Tensor::<f64>::cat(&[], 0),
            Err(crate::TensorError::Value(ValueError::EmptyTensorList))
        ));
    }

    #[test]
    fn test_cat_rank1() {
        let a = tensor(vec![1.0, 2.0], &[2]);
        let b = tensor(vec![3.0], &[1]);
        let out = Tensor::cat(&[a, b], 0).unwrap();
        assert_eq!(out.shape(), &[3]);
        assert_eq!(out.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_stack_rank_law() {
        let parts: Vec<_> = (0..4).map(|_| tensor(vec![0.0; 6], &[2, 3])).collect();
        for dim in 0..=2isize {
            let out = Tensor::stack(&parts, dim).unwrap();
            assert_eq!(out.rank(), 3);
            assert_eq!(out.shape()[dim as usize], 4);
            assert_eq!(out.numel(), 24);
        }
    }

    #[test]
    fn test_stack_axis0_slices_are_inputs() {
        let a = tensor(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]);
        let b = tensor(vec![5.0, 6.0, 7.0, 8.0], &[2, 2]);
        let out = Tensor::stack(&[a, b], 0).unwrap();
        assert_eq!(out.shape(), &[2, 2, 2]);
        assert_eq!(out.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn test_stack_interior_axis_blocks() {
        let a = tensor(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]);
        let b = tensor(vec![5.0, 6.0, 7.0, 8.0], &[2, 2]);
        let out = Tensor::stack(&[a.clone(), b.clone()], 1).unwrap();
        assert_eq!(out.shape(), &[2, 2, 2]);
        for i in 0..2 {
            for k in 0..2 {
                assert_eq!(out[&[i, 0, k]], a[&[i, k]]);
                assert_eq!(out[&[i, 1, k]], b[&[i, k]]);
            }
        }
    }

    #[test]
    fn test_stack_negative_dim() {
        let a = tensor(vec![1.0, 2.0], &[2]);
        let b = tensor(vec![3.0, 4.0], &[2]);
        let out = Tensor::stack(&[a, b], -1).unwrap();
        assert_eq!(out.shape(), &[2, 2]);
        assert_eq!(out.as_slice(), &[1.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn test_stack_shape_mismatch() {
        let a = tensor(vec![0.0; 6], &[2, 3]);
        let b = tensor(vec![0.0; 6], &[6]);
        assert!(matches!(
            Tensor::stack(&[a, b], 0),
            Err(crate::TensorError::Shape(ShapeError::ShapeMismatch { .. }))
        ));
    }

    #[test]
    fn test_stack_dim_out_of_range() {
        let a = tensor(vec![0.0; 2], &[2]);
        assert!(Tensor::stack(&[a.clone()], 2).is_err());
        assert!(Tensor::stack(&[a], -3).is_err());
    }

    #[test]
    fn test_flags_taken_from_first() {
        let a = tensor(vec![1.0, 2.0], &[2]).with_requires_grad(true);
        let b = tensor(vec![3.0, 4.0], &[2]);
        assert!(Tensor::cat(&[a.clone(), b.clone()], 0).unwrap().requires_grad());
        assert!(Tensor::stack(&[a, b], 0).unwrap().requires_grad());
    }
}
