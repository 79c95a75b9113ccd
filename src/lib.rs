//! # gridlin
//!
//! Dense linear algebra over a scalar that is either real or complex,
//! no-std compatible. Vectors and matrices of such scalars support
//! element-wise arithmetic, products, norms, and the Gaussian elimination
//! family: reduced row echelon form, triangulation with partial pivoting,
//! determinant, inverse, and rank.
//!
//! ## Quick start
//!
//! ```
//! use gridlin::{Grid, Scalar};
//!
//! let a = Grid::from_reals(3, 3, &[8.0, 5.0, -2.0, 4.0, 7.0, 20.0, 7.0, 6.0, 1.0]).unwrap();
//! assert!(a.determinant().unwrap().approx_eq(Scalar::real(-174.0), 9));
//!
//! let inv = a.inverse().unwrap();
//! assert!(a.multiply_matrix(&inv).unwrap().equals(&Grid::identity(3), 9).unwrap());
//! assert_eq!(a.rank().unwrap(), 3);
//! ```
//!
//! ## Modules
//!
//! - [`scalar`]: [`Scalar`], a real/imaginary pair of `f64` with complex
//!   arithmetic, principal square root, and precision-based equality.
//!   Components below [`EPSILON`] are snapped to exactly zero on
//!   construction so elimination residue never becomes a pivot.
//!
//! - [`sequence`]: [`Sequence`], a fixed-length vector of scalars:
//!   element-wise arithmetic, dot/inner/cross products, cosine, norms, and
//!   reshaping into a grid.
//!
//! - [`grid`]: [`Grid`], a row-major matrix of equal-length sequences:
//!   arithmetic, matrix products, structural operations (transpose, augment,
//!   sub-matrix, column range), trace, determinant, inverse.
//!
//! - [`linalg`]: in-place elimination engines ([`linalg::rref_in_place`],
//!   [`linalg::triangulate_in_place`]) and the [`Triangulation`] wrapper.
//!   `Grid` methods clone the receiver and delegate here.
//!
//! - [`error`]: the crate-wide [`Error`] enum and [`Result`] alias.
//!
//! Every public operation returns a new value; operands are never mutated.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Hardware FPU via system libm, `std::error::Error` impl |
//! | `libm`    | baseline | Pure-Rust software float fallback; also enables it for `num-complex` |
//! | `complex` | no       | Conversions to and from `num_complex::Complex<f64>` |
//! | `rand`    | no       | Random fixtures: `Scalar::random`, `Sequence::random`, `Grid::random` |
//! | `all`     | no       | `std` + `complex` + `rand` |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod grid;
pub mod linalg;
pub mod scalar;
pub mod sequence;

pub use error::{Error, Result};
pub use grid::Grid;
pub use linalg::Triangulation;
pub use scalar::{Scalar, ScalarKind, DEFAULT_PRECISION, EPSILON, SQRT_ITERATIONS};
pub use sequence::Sequence;
