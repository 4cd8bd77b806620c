//! Shape manipulation operations on tensors
//!
//! Reshape and squeeze are pure view changes: row-major order is
//! shape-independent, so both share the input buffer and move no element.
//! Transpose and adjoint change row-major order and therefore relocate every
//! element into a freshly allocated buffer.

use std::sync::Arc;

use crate::dtype::Element;
use crate::error::{Result, ShapeError, ValueError};
use crate::shape::{flat_index, numel, strides_for, unravel_index};
use crate::tensor::types::Tensor;
use crate::types::Shape;

impl<T> Tensor<T>
where
    T: Element,
{
    /// Reshape the tensor, sharing the underlying buffer
    ///
    /// At most one dimension may be `-1`, meaning "infer from the total
    /// element count". All other dimensions must be positive.
    ///
    /// # Errors
    ///
    /// - [`ValueError::InvalidDimension`] for a zero or negative explicit
    ///   dimension
    /// - [`ShapeError::MultiplePlaceholders`] for more than one `-1`
    /// - [`ShapeError::InconsistentElementCount`] when inference does not
    ///   divide evenly
    /// - [`ShapeError::ElementCountMismatch`] when the target shape describes
    ///   a different element count
    ///
    /// # Examples
    ///
    /// ```
    /// use tensr_core::Tensor;
    ///
    /// let t = Tensor::<f64>::zeros(&[2, 3, 4]);
    /// let r = t.reshape(&[6, 4]).unwrap();
    /// assert_eq!(r.shape(), &[6, 4]);
    ///
    /// // Placeholder inference
    /// let r = t.reshape(&[-1, 8]).unwrap();
    /// assert_eq!(r.shape(), &[3, 8]);
    ///
    /// assert!(t.reshape(&[-1, -1]).is_err());
    /// assert!(t.reshape(&[7]).is_err());
    /// ```
    pub fn reshape(&self, dims: &[isize]) -> Result<Self> {
        let total = self.numel();

        let mut placeholder = None;
        let mut explicit = 1usize;
        for (i, &dim) in dims.iter().enumerate() {
            if dim == -1 {
                if placeholder.is_some() {
                    return Err(ShapeError::MultiplePlaceholders {
                        placeholders: dims.iter().filter(|&&d| d == -1).count(),
                    }
                    .into());
                }
                placeholder = Some(i);
            } else if dim <= 0 {
                return Err(ValueError::InvalidDimension { dim }.into());
            } else {
                explicit *= dim as usize;
            }
        }

        let mut new_shape: Shape = dims
            .iter()
            .map(|&d| if d == -1 { 0 } else { d as usize })
            .collect();
        if let Some(i) = placeholder {
            if total % explicit != 0 {
                return Err(ShapeError::InconsistentElementCount {
                    numel: total,
                    explicit,
                }
                .into());
            }
            new_shape[i] = total / explicit;
        } else if explicit != total {
            return Err(ShapeError::ElementCountMismatch {
                numel: total,
                dims: dims.to_vec(),
                target: explicit,
            }
            .into());
        }

        debug_assert_eq!(numel(&new_shape), total);
        Ok(self.derived(Arc::clone(&self.data), new_shape))
    }

    /// Remove every dimension of size 1, sharing the underlying buffer
    ///
    /// Remaining dimensions keep their order. A tensor whose dimensions are
    /// all 1 squeezes down to rank 0 (empty shape, one element).
    ///
    /// # Examples
    ///
    /// ```
    /// use tensr_core::Tensor;
    ///
    /// let t = Tensor::<f64>::zeros(&[1, 3, 1, 5, 1]);
    /// assert_eq!(t.squeeze().shape(), &[3, 5]);
    ///
    /// let t = Tensor::<f64>::zeros(&[1, 1]);
    /// let s = t.squeeze();
    /// assert_eq!(s.rank(), 0);
    /// assert_eq!(s.numel(), 1);
    /// ```
    pub fn squeeze(&self) -> Self {
        let new_shape: Shape = self.shape.iter().filter(|&&d| d != 1).copied().collect();
        self.derived(Arc::clone(&self.data), new_shape)
    }

    /// Swap two axes, relocating every element
    ///
    /// Because row-major strides depend on axis order this is not a view:
    /// each element is copied to the flat position its permuted coordinate
    /// maps to under the new shape.
    ///
    /// # Errors
    ///
    /// [`ShapeError::AxisOutOfBounds`] when either axis is `>= rank`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensr_core::Tensor;
    ///
    /// let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// let tt = t.transpose(0, 1).unwrap();
    /// assert_eq!(tt.shape(), &[3, 2]);
    /// assert_eq!(tt.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    /// ```
    pub fn transpose(&self, axis1: usize, axis2: usize) -> Result<Self> {
        let rank = self.rank();
        for axis in [axis1, axis2] {
            if axis >= rank {
                return Err(ShapeError::AxisOutOfBounds {
                    axis: axis as isize,
                    rank,
                }
                .into());
            }
        }

        let mut new_shape = self.shape.clone();
        new_shape.swap(axis1, axis2);

        let new_strides = strides_for(&new_shape);
        let mut data = self.to_vec();
        for (flat, &v) in self.data.iter().enumerate() {
            let mut coords = unravel_index(flat, &self.shape);
            coords.swap(axis1, axis2);
            data[flat_index(&coords, &new_strides)] = v;
        }

        Ok(self.derived(Arc::new(data), new_shape))
    }

    /// Swap the last two axes (matrix transpose on the trailing dimensions)
    ///
    /// # Errors
    ///
    /// [`ShapeError::RankTooSmall`] for tensors of rank below 2.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensr_core::Tensor;
    ///
    /// let t = Tensor::<f64>::zeros(&[4, 2, 3]);
    /// assert_eq!(t.adjoint().unwrap().shape(), &[4, 3, 2]);
    ///
    /// assert!(Tensor::<f64>::zeros(&[3]).adjoint().is_err());
    /// ```
    pub fn adjoint(&self) -> Result<Self> {
        let rank = self.rank();
        if rank < 2 {
            return Err(ShapeError::RankTooSmall { rank, required: 2 }.into());
        }
        self.transpose(rank - 2, rank - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_reshape_shares_buffer() {
        let t = Tensor::from_vec((0..6).map(f64::from).collect(), &[2, 3]).unwrap();
        let r = t.reshape(&[3, 2]).unwrap();
        assert!(Arc::ptr_eq(&t.data, &r.data));
        assert_eq!(r.as_slice(), t.as_slice());
    }

    #[test]
    fn test_reshape_propagates_flags() {
        let t = Tensor::<f32>::ones(&[4]).with_requires_grad(true).with_pin_memory(true);
        let r = t.reshape(&[2, 2]).unwrap();
        assert!(r.requires_grad());
        assert!(r.pin_memory());
    }

    #[test]
    fn test_reshape_rejects_non_positive_dim() {
        let t = Tensor::<f64>::zeros(&[4]);
        assert!(matches!(
            t.reshape(&[0, 4]),
            Err(crate::TensorError::Value(ValueError::InvalidDimension { dim: 0 }))
        ));
        assert!(matches!(
            t.reshape(&[-2, 2]),
            Err(crate::TensorError::Value(ValueError::InvalidDimension { dim: -2 }))
        ));
    }

    #[test]
    fn test_reshape_inference_divisibility() {
        let t = Tensor::<f64>::zeros(&[10]);
        assert!(matches!(
            t.reshape(&[3, -1]),
            Err(crate::TensorError::Shape(ShapeError::InconsistentElementCount { .. }))
        ));
    }

    #[test]
    fn test_squeeze_shares_buffer_and_is_idempotent() {
        let t = Tensor::<f64>::ones(&[1, 2, 1, 3]);
        let s = t.squeeze();
        assert!(Arc::ptr_eq(&t.data, &s.data));
        assert_eq!(s.shape(), &[2, 3]);
        assert_eq!(s.squeeze(), s);
    }

    #[test]
    fn test_transpose_2d_matches_row_major() {
        // new[j][i] = old[i][j]
        let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        let tt = t.transpose(0, 1).unwrap();
        assert_eq!(tt.as_slice(), &[1.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn test_transpose_3d_interior_axes() {
        let t = Tensor::from_vec((0..24).map(f64::from).collect(), &[2, 3, 4]).unwrap();
        let tt = t.transpose(1, 2).unwrap();
        assert_eq!(tt.shape(), &[2, 4, 3]);
        for i in 0..2 {
            for j in 0..3 {
                for k in 0..4 {
                    assert_eq!(tt[&[i, k, j]], t[&[i, j, k]]);
                }
            }
        }
    }

    #[test]
    fn test_transpose_self_inverse() {
        let t = Tensor::from_vec((0..24).map(f64::from).collect(), &[2, 3, 4]).unwrap();
        let back = t.transpose(0, 2).unwrap().transpose(0, 2).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_transpose_allocates_new_buffer() {
        let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        let tt = t.transpose(0, 1).unwrap();
        assert!(!Arc::ptr_eq(&t.data, &tt.data));
    }

    #[test]
    fn test_adjoint_swaps_trailing_axes() {
        let t = Tensor::from_vec((0..12).map(f64::from).collect(), &[2, 3, 2]).unwrap();
        let adj = t.adjoint().unwrap();
        assert_eq!(adj.shape(), &[2, 2, 3]);
        for b in 0..2 {
            for i in 0..3 {
                for j in 0..2 {
                    assert_eq!(adj[&[b, j, i]], t[&[b, i, j]]);
                }
            }
        }
    }

    #[test]
    fn test_transpose_axis_bounds() {
        let t = Tensor::<f64>::zeros(&[2, 3]);
        assert!(matches!(
            t.transpose(0, 2),
            Err(crate::TensorError::Shape(ShapeError::AxisOutOfBounds { axis: 2, rank: 2 }))
        ));
    }
}
