//! # Error Types
//!
//! Errors raised by range-checked access into an [`Array3D`](crate::Array3D).

use thiserror::Error;

/// Errors that can occur when accessing an `Array3D`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Array3DError {
    /// A coordinate was not strictly less than its dimension.
    #[error(
        "index ({}, {}, {}) out of range for array of shape {}x{}x{}",
        .index.0, .index.1, .index.2, .shape.0, .shape.1, .shape.2
    )]
    OutOfRange {
        index: (usize, usize, usize),
        shape: (usize, usize, usize),
    },
}

pub type Result<T> = std::result::Result<T, Array3DError>;
