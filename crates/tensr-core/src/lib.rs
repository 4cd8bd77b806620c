//! # tensr-core
//!
//! Core tensor type, row-major shape algebra, and basic operations for tensr.
//!
//! This crate provides a minimal multi-dimensional array runtime:
//!
//! - **Dense tensor representation** ([`Tensor`]) over a flat row-major buffer
//! - **Element types** ([`DType`], [`Element`]) for `f32` and `f64`
//! - **Shape algebra** (reshape, squeeze, transpose, adjoint)
//! - **Assembly operations** (cat, stack)
//! - **Selection and elementwise operations** (argwhere, heaviside)
//! - **Nested-view materialization** ([`Nested`]) for logical indexing
//!
//! ## Core Principles
//!
//! ### One Canonical Representation
//!
//! A tensor is always a flat buffer plus a shape; the row-major mapping in
//! [`shape`] is the single source of truth every operation respects. The
//! nested sequence form ([`Nested`]) is a derived, on-demand view, never a
//! second storage form.
//!
//! ### Buffer Sharing
//!
//! Shape-only transforms (reshape, squeeze) share the input buffer, since
//! row-major order is shape-independent. Operations that change element
//! order (transpose, adjoint) or merge buffers (cat, stack) always allocate.
//!
//! ### Validation Before Mutation
//!
//! Every operation checks all preconditions before touching any buffer and
//! fails with a typed [`TensorError`]; a failed call leaves its inputs
//! unchanged. No operation can produce a tensor whose declared shape
//! disagrees with its buffer length.
//!
//! ## Quick Start
//!
//! ```
//! use tensr_core::Tensor;
//!
//! // Build a 2x3 tensor from a row-major buffer
//! let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3])?;
//! assert_eq!(t.rank(), 2);
//! assert_eq!(t.numel(), 6);
//!
//! // Shape algebra
//! let r = t.reshape(&[3, -1])?;
//! assert_eq!(r.shape(), &[3, 2]);
//!
//! let tt = t.transpose(0, 1)?;
//! assert_eq!(tt.shape(), &[3, 2]);
//! assert_eq!(tt[&[2, 1]], 6.0);
//! # Ok::<(), tensr_core::TensorError>(())
//! ```
//!
//! ## Creating Tensors
//!
//! ```
//! use tensr_core::Tensor;
//!
//! let zeros = Tensor::<f64>::zeros(&[2, 3]);
//! let ones = Tensor::<f32>::ones(&[4]);
//! let fives = Tensor::full(&[2, 2], 5.0f64);
//! let steps = Tensor::<f64>::arange(0.0, 1.0, 0.25).unwrap();
//! let grid = Tensor::<f64>::linspace(0.0, 1.0, 11);
//! ```
//!
//! ## Combining Tensors
//!
//! ```
//! use tensr_core::Tensor;
//!
//! let a = Tensor::<f64>::ones(&[2, 3]);
//! let b = Tensor::<f64>::zeros(&[2, 3]);
//!
//! let cat = Tensor::cat(&[a.clone(), b.clone()], 0)?;
//! assert_eq!(cat.shape(), &[4, 3]);
//!
//! let stacked = Tensor::stack(&[a, b], 0)?;
//! assert_eq!(stacked.shape(), &[2, 2, 3]);
//! # Ok::<(), tensr_core::TensorError>(())
//! ```
//!
//! ## Selection
//!
//! ```
//! use tensr_core::Tensor;
//!
//! let t = Tensor::from_vec(vec![0.0, 2.0, 3.0, 0.0], &[2, 2])?;
//!
//! // Coordinates of nonzero elements, row-major scan order
//! let coords = t.argwhere()?;
//! assert_eq!(coords.shape(), &[2, 2]);
//! assert_eq!(coords.as_slice(), &[0.0, 1.0, 1.0, 0.0]);
//!
//! // Replace zeros
//! let filled = t.heaviside(&Tensor::from_vec(vec![9.0], &[1])?)?;
//! assert_eq!(filled.as_slice(), &[9.0, 2.0, 3.0, 9.0]);
//! # Ok::<(), tensr_core::TensorError>(())
//! ```
//!
//! ## Error Handling
//!
//! Operations return `Result<T, TensorError>` with a three-kind taxonomy
//! (type, shape, value):
//!
//! ```
//! use tensr_core::Tensor;
//!
//! let t = Tensor::<f64>::zeros(&[2, 3]);
//!
//! // Two placeholders cannot be inferred
//! assert!(t.reshape(&[-1, -1]).is_err());
//!
//! // Axis out of bounds
//! assert!(t.transpose(0, 5).is_err());
//! ```
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization of tensors

#![deny(warnings)]

pub mod dtype;
pub mod error;
pub mod shape;
pub mod tensor;
pub mod types;


pub use dtype::{DType, Element};
pub use error::{Result, ShapeError, TensorError, TypeError, ValueError};
pub use tensor::{Nested, Tensor};
pub use types::{Axis, Rank, Shape};
