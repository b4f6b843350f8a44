//! Fixed-size, stack-allocated 3D arrays with compile-time dimensions.
//!
//! ```
//! use grid3::Array3D;
//!
//! let mut grid = Array3D::<i32, 2, 2, 2>::new();
//! grid[(1, 0, 1)] = 6;
//! assert_eq!(grid.at((1, 0, 1)), Ok(&6));
//! assert!(grid.at((2, 0, 0)).is_err());
//! ```

pub mod array3d;
pub mod error;

pub use array3d::Array3D;
pub use error::{Array3DError, Result};
