//! Structured 2D grid fields.
//!
//! Depth fields, coordinate fields and masks all share the same
//! row-major [`Field2D`] storage.

mod field;

use thiserror::Error;

pub use field::Field2D;

/// Error type for grid construction.
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    /// Raw data does not fill the requested shape
    #[error("Data size mismatch: expected {expected} values, got {found}")]
    DataLength { expected: usize, found: usize },

    /// Shape whose cell count does not fit in `usize`
    #[error("Shape overflow: {rows}×{cols} cells exceed addressable memory")]
    ShapeOverflow { rows: usize, cols: usize },

    /// Rows of differing length
    #[error("Ragged rows: row {row} has {found} values, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}
