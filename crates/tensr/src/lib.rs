//! # tensr
//!
//! Minimal multi-dimensional array runtime over flat row-major buffers.
//!
//! This is the meta crate that re-exports the tensr components for
//! convenient access.
//!
//! ## Quick Start
//!
//! ```
//! use tensr::prelude::*;
//!
//! let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3])?;
//!
//! // Shape algebra shares the buffer; transpose relocates elements
//! let r = t.reshape(&[-1, 2])?;
//! assert_eq!(r.shape(), &[3, 2]);
//!
//! let tt = t.transpose(0, 1)?;
//! assert_eq!(tt.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
//!
//! // Assembly
//! let doubled = Tensor::cat(&[t.clone(), t.clone()], 0)?;
//! assert_eq!(doubled.shape(), &[4, 3]);
//! # Ok::<(), TensorError>(())
//! ```
//!
//! ## Components
//!
//! ### Core Tensor Operations ([`core`])
//!
//! The tensor type, element types, shape algebra (reshape, squeeze,
//! transpose, adjoint), assembly (cat, stack), selection (argwhere,
//! heaviside), and the nested-view materializer.

#![deny(warnings)]

/// Core tensor types and operations
pub use tensr_core as core;

pub use tensr_core::{
    DType, Element, Nested, ShapeError, Tensor, TensorError, TypeError, ValueError,
};

/// Commonly used imports
pub mod prelude {
    pub use tensr_core::{DType, Element, Nested, Tensor, TensorError};
}
