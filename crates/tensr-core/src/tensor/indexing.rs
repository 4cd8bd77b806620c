//! Coordinate extraction from tensors

use std::sync::Arc;

use crate::dtype::Element;
use crate::error::{Result, ShapeError};
use crate::shape::unravel_index;
use crate::tensor::types::Tensor;
use crate::types::Shape;

impl<T> Tensor<T>
where
    T: Element,
{
    /// Coordinates of all nonzero elements, in row-major scan order
    ///
    /// For a rank-`n` input with `k` nonzero elements the result has shape
    /// `(k, n)` when `n >= 2` and `(k)` when `n == 1`; each row is one
    /// coordinate tuple, decoded from the nonzero flat index against this
    /// tensor's strides. The element type mirrors the input's. Any rank from
    /// 1 upward works; axis 0 varies slowest in the output order.
    ///
    /// # Errors
    ///
    /// [`ShapeError::UnsupportedRank`] for rank-0 input, which has no
    /// coordinates to report.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensr_core::Tensor;
    ///
    /// let t = Tensor::from_vec(vec![0.0, 2.0, 3.0, 0.0], &[2, 2]).unwrap();
    /// let coords = t.argwhere().unwrap();
    /// assert_eq!(coords.shape(), &[2, 2]);
    /// assert_eq!(coords.as_slice(), &[0.0, 1.0, 1.0, 0.0]);
    ///
    /// let v = Tensor::from_vec(vec![0.0, 5.0, 0.0, 7.0], &[4]).unwrap();
    /// let coords = v.argwhere().unwrap();
    /// assert_eq!(coords.shape(), &[2]);
    /// assert_eq!(coords.as_slice(), &[1.0, 3.0]);
    /// ```
    pub fn argwhere(&self) -> Result<Self> {
        let rank = self.rank();
        if rank == 0 {
            return Err(ShapeError::UnsupportedRank { rank }.into());
        }

        let mut coords: Vec<T> = Vec::new();
        let mut count = 0;
        for (flat, &v) in self.as_slice().iter().enumerate() {
            if v == T::zero() {
                continue;
            }
            count += 1;
            for &c in unravel_index(flat, &self.shape).iter() {
                coords.push(T::from(c).expect("coordinate fits in every supported element type"));
            }
        }

        let shape = if rank == 1 {
            Shape::from_slice(&[count])
        } else {
            Shape::from_slice(&[count, rank])
        };
        Ok(self.derived(Arc::new(coords), shape))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argwhere_2d_fixture() {
        // [[0,2],[3,0]] -> {(0,1), (1,0)} in row-major order
        let t = Tensor::from_vec(vec![0.0, 2.0, 3.0, 0.0], &[2, 2]).unwrap();
        let coords = t.argwhere().unwrap();
        assert_eq!(coords.shape(), &[2, 2]);
        assert_eq!(coords.as_slice(), &[0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_argwhere_rank1() {
        let t = Tensor::from_vec(vec![1.0f32, 0.0, 0.0, 4.0], &[4]).unwrap();
        let coords = t.argwhere().unwrap();
        assert_eq!(coords.shape(), &[2]);
        assert_eq!(coords.as_slice(), &[0.0, 3.0]);
    }

    #[test]
    fn test_argwhere_rank4_row_major_order() {
        let mut data = vec![0.0; 16];
        data[1] = 1.0; // (0,0,0,1)
        data[10] = 1.0; // (1,0,1,0)
        data[15] = 1.0; // (1,1,1,1)
        let t = Tensor::from_vec(data, &[2, 2, 2, 2]).unwrap();
        let coords = t.argwhere().unwrap();
        assert_eq!(coords.shape(), &[3, 4]);
        assert_eq!(
            coords.as_slice(),
            &[0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0]
        );
    }

    #[test]
    fn test_argwhere_all_zero() {
        let t = Tensor::<f64>::zeros(&[3, 3]);
        let coords = t.argwhere().unwrap();
        assert_eq!(coords.shape(), &[0, 2]);
        assert!(coords.is_empty());
    }

    #[test]
    fn test_argwhere_rank0_unsupported() {
        let t = Tensor::from_vec(vec![1.0], &[]).unwrap();
        assert!(matches!(
            t.argwhere(),
            Err(crate::TensorError::Shape(ShapeError::UnsupportedRank { rank: 0 }))
        ));
    }
}
