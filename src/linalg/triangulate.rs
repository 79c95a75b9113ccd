use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::scalar::Scalar;

/// Reduce a square grid to upper-triangular form with partial pivoting, in place.
///
/// For each pivot column, the entry of largest modulus at or below the
/// pivot row is swapped into place (the first one wins on ties). A column
/// with no nonzero candidate is skipped without advancing the pivot row.
/// Entries below each pivot are set to exactly zero.
///
/// Returns the number of row swaps performed, or [`Error::NotSquare`].
///
/// ```
/// use gridlin::{Grid, Scalar};
/// use gridlin::linalg::triangulate_in_place;
///
/// let mut a = Grid::from_reals(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
/// let swaps = triangulate_in_place(&mut a).unwrap();
/// assert_eq!(swaps, 1);
/// assert_eq!(a[(0, 0)], Scalar::real(3.0));
/// assert_eq!(a[(1, 0)], Scalar::ZERO);
/// ```
pub fn triangulate_in_place(a: &mut Grid) -> Result<usize> {
    if !a.is_square() {
        return Err(Error::NotSquare);
    }
    let n = a.rows();
    let mut swaps = 0;
    let mut pivot_row = 0;
    let mut pivot_col = 0;

    while pivot_row < n && pivot_col < n {
        // Partial pivoting: find row with largest modulus in this column
        let mut max_row = pivot_row;
        let mut max_val = a[(pivot_row, pivot_col)].absolute();
        for row in (pivot_row + 1)..n {
            let val = a[(row, pivot_col)].absolute();
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }

        if max_val == 0.0 {
            pivot_col += 1;
            continue;
        }

        if max_row != pivot_row {
            a.swap_rows_in_place(max_row, pivot_row);
            swaps += 1;
        }

        let pivot = a[(pivot_row, pivot_col)];
        for row in (pivot_row + 1)..n {
            let factor = a[(row, pivot_col)].divide(pivot)?;
            a.set(row, pivot_col, Scalar::ZERO);
            if factor.is_zero() {
                continue;
            }
            for j in (pivot_col + 1)..n {
                let x = a[(row, j)] - factor * a[(pivot_row, j)];
                a.set(row, j, x);
            }
        }

        pivot_row += 1;
        pivot_col += 1;
    }

    Ok(swaps)
}

/// Upper-triangular form of a square grid together with its row-swap count.
///
/// # Example
///
/// ```
/// use gridlin::{Grid, Scalar, Triangulation};
///
/// let a = Grid::from_reals(3, 3, &[8.0, 5.0, -2.0, 4.0, 7.0, 20.0, 7.0, 6.0, 1.0]).unwrap();
/// let tri = Triangulation::new(&a).unwrap();
/// assert_eq!(tri.swaps(), 0);
/// assert!(tri.det().approx_eq(Scalar::real(-174.0), 9));
/// ```
#[derive(Debug, Clone)]
pub struct Triangulation {
    upper: Grid,
    swaps: usize,
}

impl Triangulation {
    /// Triangulate a copy of `a`. [`Error::NotSquare`] for non-square grids.
    pub fn new(a: &Grid) -> Result<Self> {
        let mut upper = a.clone();
        let swaps = triangulate_in_place(&mut upper)?;
        Ok(Self { upper, swaps })
    }

    /// The upper-triangular grid.
    pub fn upper(&self) -> &Grid {
        &self.upper
    }

    /// Consume the triangulation, returning the upper-triangular grid.
    pub fn into_upper(self) -> Grid {
        self.upper
    }

    /// Number of row swaps performed.
    pub fn swaps(&self) -> usize {
        self.swaps
    }

    /// Determinant: the diagonal product, negated for an odd swap count.
    pub fn det(&self) -> Scalar {
        let mut d = if self.swaps % 2 == 0 { Scalar::ONE } else { -Scalar::ONE };
        for i in 0..self.upper.rows() {
            d = d * self.upper[(i, i)];
        }
        d
    }
}

/// Convenience methods for triangulation.
impl Grid {
    /// Upper-triangular form with partial pivoting, computed on a copy.
    ///
    /// [`Error::NotSquare`] for non-square grids.
    pub fn triangulation(&self) -> Result<Grid> {
        Ok(Triangulation::new(self)?.into_upper())
    }
}
