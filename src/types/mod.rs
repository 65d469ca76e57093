//! Strongly-typed domain types.
//!
//! # Example
//!
//! ```
//! use drymask_rs::types::GridShape;
//!
//! let shape = GridShape::new(2, 3);
//! assert_eq!(shape.len(), 6);
//! ```

mod shape;

pub use shape::GridShape;
