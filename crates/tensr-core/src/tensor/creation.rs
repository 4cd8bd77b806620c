//! Tensor creation and initialization methods
//!
//! Fill constructors (zeros, ones, full) and 1-D range constructors
//! (arange, linspace). All of these are conveniences layered over
//! [`Tensor::from_vec`]; the shape algebra never depends on them.

use num_traits::Float;

use crate::dtype::Element;
use crate::error::{Result, ValueError};
use crate::shape::numel;
use crate::tensor::types::Tensor;

impl<T> Tensor<T>
where
    T: Element,
{
    /// Create a tensor of zeros
    ///
    /// # Examples
    ///
    /// ```
    /// use tensr_core::Tensor;
    ///
    /// let t = Tensor::<f64>::zeros(&[2, 3, 4]);
    /// assert_eq!(t.shape(), &[2, 3, 4]);
    /// assert!(!t.is_nonzero());
    /// ```
    pub fn zeros(shape: &[usize]) -> Self {
        Self::full(shape, T::zero())
    }

    /// Create a tensor of ones
    ///
    /// # Examples
    ///
    /// ```
    /// use tensr_core::Tensor;
    ///
    /// let t = Tensor::<f32>::ones(&[2, 2]);
    /// assert_eq!(t[&[1, 1]], 1.0);
    /// ```
    pub fn ones(shape: &[usize]) -> Self {
        Self::full(shape, T::one())
    }

    /// Create a tensor filled with a specific value
    ///
    /// # Examples
    ///
    /// ```
    /// use tensr_core::Tensor;
    ///
    /// let t = Tensor::full(&[2, 3], 5.0f64);
    /// assert_eq!(t[&[0, 0]], 5.0);
    /// assert_eq!(t[&[1, 2]], 5.0);
    /// ```
    pub fn full(shape: &[usize], value: T) -> Self {
        let data = vec![value; numel(shape)];
        Self::from_vec(data, shape).expect("fill buffer length matches shape by construction")
    }
}

impl<T> Tensor<T>
where
    T: Element + Float,
{
    /// Create a 1-D tensor with evenly spaced values in `[start, stop)`
    ///
    /// # Errors
    ///
    /// [`ValueError::ZeroStep`] when `step == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensr_core::Tensor;
    ///
    /// let t = Tensor::<f64>::arange(0.0, 5.0, 1.0).unwrap();
    /// assert_eq!(t.shape(), &[5]);
    /// assert_eq!(t.as_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
    ///
    /// // Empty range
    /// let t = Tensor::<f64>::arange(3.0, 0.0, 1.0).unwrap();
    /// assert_eq!(t.shape(), &[0]);
    ///
    /// assert!(Tensor::<f64>::arange(0.0, 5.0, 0.0).is_err());
    /// ```
    pub fn arange(start: f64, stop: f64, step: f64) -> Result<Self> {
        if step == 0.0 {
            return Err(ValueError::ZeroStep.into());
        }
        let span = (stop - start) / step;
        let n = if span > 0.0 { span.ceil() as usize } else { 0 };
        let data: Vec<T> = (0..n)
            .map(|i| {
                T::from(start + step * i as f64)
                    .expect("f64 converts to every supported element type")
            })
            .collect();
        Self::from_vec(data, &[n])
    }

    /// Create a 1-D tensor with `num` linearly spaced values over
    /// `[start, stop]` (both endpoints included)
    ///
    /// # Examples
    ///
    /// ```
    /// use tensr_core::Tensor;
    ///
    /// let t = Tensor::<f64>::linspace(0.0, 10.0, 5);
    /// assert_eq!(t.as_slice(), &[0.0, 2.5, 5.0, 7.5, 10.0]);
    ///
    /// assert_eq!(Tensor::<f64>::linspace(0.0, 1.0, 0).shape(), &[0]);
    /// assert_eq!(Tensor::<f64>::linspace(3.0, 9.0, 1).as_slice(), &[3.0]);
    /// ```
    pub fn linspace(start: f64, stop: f64, num: usize) -> Self {
        let convert =
            |x: f64| T::from(x).expect("f64 converts to every supported element type");
        let data: Vec<T> = match num {
            0 => vec![],
            1 => vec![convert(start)],
            _ => {
                let step = (stop - start) / (num - 1) as f64;
                (0..num).map(|i| convert(start + step * i as f64)).collect()
            }
        };
        Self::from_vec(data, &[num]).expect("linspace buffer length matches by construction")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_preserves_invariant() {
        let t = Tensor::full(&[3, 1, 2], 2.5f32);
        assert_eq!(t.numel(), 6);
        assert!(t.as_slice().iter().all(|&v| v == 2.5));
    }

    #[test]
    fn test_arange_negative_step() {
        let t = Tensor::<f64>::arange(5.0, 0.0, -2.0).unwrap();
        assert_eq!(t.as_slice(), &[5.0, 3.0, 1.0]);
    }

    #[test]
    fn test_arange_fractional_step() {
        let t = Tensor::<f32>::arange(0.0, 1.0, 0.25).unwrap();
        assert_eq!(t.as_slice(), &[0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_linspace_endpoints_inclusive() {
        let t = Tensor::<f64>::linspace(-1.0, 1.0, 3);
        assert_eq!(t.as_slice(), &[-1.0, 0.0, 1.0]);
    }
}
