//! Tensor type and operations
//!
//! The core `Tensor<T>` type with its operations organized into functional
//! sub-modules.

// Core type definition
pub mod types;

// Operation modules (organized by functionality)
mod combining;
mod creation;
mod elementwise;
mod indexing;
mod nested;
mod shape_ops;

// Re-export the main types
pub use nested::Nested;
pub use types::Tensor;
