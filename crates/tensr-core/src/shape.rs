//! Row-major shape and stride algebra
//!
//! Every operation in the crate maps between coordinate tuples and flat
//! buffer indices through the functions here, and nowhere else. The
//! convention is row-major (C order, last axis varies fastest):
//!
//! ```text
//! stride(k) = product(shape[k+1..n])
//! flat      = i0 * stride(0) + i1 * stride(1) + ... + i(n-1) * stride(n-1)
//! ```
//!
//! A rank-0 (empty) shape describes exactly one element, consistent with the
//! empty product being 1.

use crate::types::Shape;

/// Total number of elements described by a shape.
///
/// # Examples
///
/// ```
/// use tensr_core::shape::numel;
///
/// assert_eq!(numel(&[2, 3, 4]), 24);
/// assert_eq!(numel(&[]), 1); // rank 0: one element
/// ```
pub fn numel(shape: &[usize]) -> usize {
    shape.iter().product()
}

/// Row-major strides for a shape.
///
/// # Examples
///
/// ```
/// use tensr_core::shape::strides_for;
///
/// assert_eq!(&strides_for(&[2, 3, 4])[..], &[12, 4, 1]);
/// assert_eq!(&strides_for(&[5])[..], &[1]);
/// assert!(strides_for(&[]).is_empty());
/// ```
pub fn strides_for(shape: &[usize]) -> Shape {
    let mut strides = Shape::from_elem(1, shape.len());
    let mut acc = 1;
    for k in (0..shape.len()).rev() {
        strides[k] = acc;
        acc *= shape[k];
    }
    strides
}

/// Flat index of a coordinate tuple under the given strides.
///
/// Coordinates must already be in range; this is pure arithmetic.
pub fn flat_index(coords: &[usize], strides: &[usize]) -> usize {
    coords.iter().zip(strides).map(|(&i, &s)| i * s).sum()
}

/// Decode a flat index into a coordinate tuple for the given shape.
///
/// Inverse of [`flat_index`] for in-range indices.
///
/// # Examples
///
/// ```
/// use tensr_core::shape::unravel_index;
///
/// assert_eq!(&unravel_index(5, &[2, 3])[..], &[1, 2]);
/// assert_eq!(&unravel_index(0, &[2, 3])[..], &[0, 0]);
/// ```
pub fn unravel_index(flat: usize, shape: &[usize]) -> Shape {
    let mut coords = Shape::from_elem(0, shape.len());
    let mut remaining = flat;
    for k in (0..shape.len()).rev() {
        coords[k] = remaining % shape[k];
        remaining /= shape[k];
    }
    coords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strides_row_major() {
        assert_eq!(&strides_for(&[2, 3, 4])[..], &[12, 4, 1]);
        assert_eq!(&strides_for(&[7, 1])[..], &[1, 1]);
    }

    #[test]
    fn test_flat_unravel_roundtrip() {
        let shape = [2, 3, 4];
        let strides = strides_for(&shape);
        for flat in 0..numel(&shape) {
            let coords = unravel_index(flat, &shape);
            assert_eq!(flat_index(&coords, &strides), flat);
        }
    }

    #[test]
    fn test_last_axis_fastest() {
        // Flat order walks the last axis first.
        assert_eq!(&unravel_index(1, &[2, 2])[..], &[0, 1]);
        assert_eq!(&unravel_index(2, &[2, 2])[..], &[1, 0]);
    }
}
