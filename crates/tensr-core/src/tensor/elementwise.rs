//! Elementwise operations on tensors

use std::sync::Arc;

use crate::dtype::Element;
use crate::error::{Result, ShapeError};
use crate::tensor::types::Tensor;

impl<T> Tensor<T>
where
    T: Element,
{
    /// Replace zero elements with values from a replacement tensor
    ///
    /// `values` is either a single element (broadcast to every zero
    /// position) or holds exactly one replacement per input element
    /// (position-wise). Nonzero input elements pass through unchanged. The
    /// output takes its shape and flags from `self`.
    ///
    /// # Errors
    ///
    /// [`ShapeError::BroadcastMismatch`] when `values` is neither a single
    /// element nor the same total element count as the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensr_core::Tensor;
    ///
    /// let input = Tensor::from_vec(vec![0.0, 1.0, 0.0, 2.0], &[4]).unwrap();
    ///
    /// // Broadcast a single replacement value
    /// let values = Tensor::from_vec(vec![5.0], &[1]).unwrap();
    /// let out = input.heaviside(&values).unwrap();
    /// assert_eq!(out.as_slice(), &[5.0, 1.0, 5.0, 2.0]);
    ///
    /// // Position-wise replacement
    /// let values = Tensor::from_vec(vec![5.0, 6.0, 7.0, 8.0], &[4]).unwrap();
    /// let out = input.heaviside(&values).unwrap();
    /// assert_eq!(out.as_slice(), &[5.0, 1.0, 7.0, 2.0]);
    /// ```
    pub fn heaviside(&self, values: &Self) -> Result<Self> {
        let broadcast = values.numel() == 1;
        if !broadcast && values.numel() != self.numel() {
            return Err(ShapeError::BroadcastMismatch {
                numel: self.numel(),
                values: values.numel(),
            }
            .into());
        }

        let values = values.as_slice();
        let data: Vec<T> = self
            .as_slice()
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                if v != T::zero() {
                    v
                } else if broadcast {
                    values[0]
                } else {
                    values[i]
                }
            })
            .collect();

        Ok(self.derived(Arc::new(data), self.shape.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heaviside_broadcast_single_value() {
        let input = Tensor::from_vec(vec![0.0f32, 1.0, 0.0, 2.0], &[2, 2]).unwrap();
        let values = Tensor::from_vec(vec![9.0f32], &[1]).unwrap();
        let out = input.heaviside(&values).unwrap();
        assert_eq!(out.shape(), &[2, 2]);
        assert_eq!(out.as_slice(), &[9.0, 1.0, 9.0, 2.0]);
    }

    #[test]
    fn test_heaviside_positionwise_across_shapes() {
        // Same element count, different shape: position-wise by flat index.
        let input = Tensor::from_vec(vec![0.0, 1.0, 0.0, 2.0], &[2, 2]).unwrap();
        let values = Tensor::from_vec(vec![5.0, 6.0, 7.0, 8.0], &[4]).unwrap();
        let out = input.heaviside(&values).unwrap();
        assert_eq!(out.as_slice(), &[5.0, 1.0, 7.0, 2.0]);
    }

    #[test]
    fn test_heaviside_incompatible_values() {
        let input = Tensor::from_vec(vec![0.0, 1.0, 0.0, 2.0], &[4]).unwrap();
        let values = Tensor::from_vec(vec![1.0, 2.0], &[2]).unwrap();
        assert!(matches!(
            input.heaviside(&values),
            Err(crate::TensorError::Shape(ShapeError::BroadcastMismatch {
                numel: 4,
                values: 2,
            }))
        ));
    }

    #[test]
    fn test_heaviside_preserves_input_and_flags() {
        let input = Tensor::from_vec(vec![0.0, 3.0], &[2])
            .unwrap()
            .with_requires_grad(true);
        let values = Tensor::from_vec(vec![1.0], &[1]).unwrap();
        let out = input.heaviside(&values).unwrap();
        assert!(out.requires_grad());
        // Input untouched.
        assert_eq!(input.as_slice(), &[0.0, 3.0]);
    }
}
