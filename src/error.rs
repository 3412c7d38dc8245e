// src/error.rs
// Runtime error conditions for the matrix types.

use thiserror::Error;

/// Errors raised by the runtime-checked matrix operations.
///
/// Shape mismatches in arithmetic are not represented here; those are
/// rejected at compile time by the const shape parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A validated constructor was asked for a matrix with zero rows or
    /// zero columns.
    #[error("matrix must have at least one row and one column")]
    ZeroDimension,

    /// The value list handed to `from_values` does not cover the shape
    /// exactly.
    #[error("expected {expected} values for a {rows}x{cols} matrix, got {provided}")]
    ValueCountMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        provided: usize,
    },

    /// Element access outside the matrix shape.
    #[error("index ({row}, {col}) is out of bounds for a {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// An identity was requested for a shape that has none.
    #[error("invalid operation on non-square {rows}x{cols} matrix")]
    NotSquare { rows: usize, cols: usize },
}
