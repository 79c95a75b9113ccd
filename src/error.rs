use core::fmt;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors from scalar, sequence, and grid operations.
///
/// Every fallible operation checks its preconditions up front and returns
/// one of these before touching any data, so operands are never left in a
/// partially-updated state.
///
/// ```
/// use gridlin::{Error, Grid};
///
/// let singular = Grid::from_reals(2, 2, &[1.0, 2.0, 2.0, 4.0]).unwrap();
/// assert_eq!(singular.inverse().unwrap_err(), Error::Singular);
///
/// let wide = Grid::zeros(2, 3);
/// assert_eq!(wide.determinant().unwrap_err(), Error::NotSquare);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An operand is not of the expected kind (e.g. an unknown fixture kind name).
    InvalidOperand,
    /// Operand sizes or shapes differ where they must agree.
    ShapeMismatch,
    /// A requested dimension is zero, or a reshape does not preserve the element count.
    DimensionError,
    /// The operation requires a square grid.
    NotSquare,
    /// The grid has a zero determinant.
    Singular,
    /// Division by the zero scalar.
    DivideByZero,
    /// The operation needs at least one element, or a non-zero vector.
    EmptyOperand,
    /// An index lies outside the grid.
    OutOfRange,
    /// Interpolation factor is not real or lies outside `[0, 1]`.
    InvalidInterpolationFactor,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOperand => write!(f, "invalid operand"),
            Self::ShapeMismatch => write!(f, "operand shapes do not match"),
            Self::DimensionError => write!(f, "dimensions must be positive and preserve the element count"),
            Self::NotSquare => write!(f, "grid must be square"),
            Self::Singular => write!(f, "grid is singular"),
            Self::DivideByZero => write!(f, "cannot divide by zero"),
            Self::EmptyOperand => write!(f, "operand must not be empty or zero"),
            Self::OutOfRange => write!(f, "index out of range"),
            Self::InvalidInterpolationFactor => {
                write!(f, "interpolation factor must be real and within [0, 1]")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
