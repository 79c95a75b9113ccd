use crate::error::Result;
use crate::grid::Grid;
use crate::scalar::Scalar;

/// Reduce `a` to reduced row echelon form (Gauss–Jordan), in place.
///
/// The pivot of each column is the first nonzero entry at or below the
/// current row; there is no magnitude pivoting. Each pivot row is divided by
/// its pivot, then every other row has the pivot column cleared. Pivots are
/// stored as exactly one and cleared entries as exactly zero.
///
/// ```
/// use gridlin::Grid;
/// use gridlin::linalg::rref_in_place;
///
/// let mut a = Grid::from_reals(2, 3, &[2.0, 4.0, 6.0, 1.0, 3.0, 5.0]).unwrap();
/// rref_in_place(&mut a).unwrap();
/// assert_eq!(a, Grid::from_reals(2, 3, &[1.0, 0.0, -1.0, 0.0, 1.0, 2.0]).unwrap());
/// ```
pub fn rref_in_place(a: &mut Grid) -> Result<()> {
    let (nrows, ncols) = a.shape();
    let mut lead = 0;

    for r in 0..nrows {
        if lead >= ncols {
            return Ok(());
        }

        // First nonzero entry in column `lead`, moving right past empty columns
        let mut i = r;
        while a[(i, lead)].is_zero() {
            i += 1;
            if i == nrows {
                i = r;
                lead += 1;
                if lead == ncols {
                    return Ok(());
                }
            }
        }
        a.swap_rows_in_place(i, r);

        let pivot = a[(r, lead)];
        for j in lead..ncols {
            let x = a[(r, j)].divide(pivot)?;
            a.set(r, j, x);
        }
        a.set(r, lead, Scalar::ONE);

        for k in 0..nrows {
            let factor = a[(k, lead)];
            if k == r || factor.is_zero() {
                continue;
            }
            for j in (lead + 1)..ncols {
                let x = a[(k, j)] - factor * a[(r, j)];
                a.set(k, j, x);
            }
            a.set(k, lead, Scalar::ZERO);
        }

        lead += 1;
    }

    Ok(())
}

/// Convenience methods for row reduction.
impl Grid {
    /// Reduced row echelon form, computed on a copy.
    ///
    /// ```
    /// use gridlin::Grid;
    /// let a = Grid::from_reals(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(a.reduced_row_echelon_form().unwrap(), Grid::identity(2));
    /// ```
    pub fn reduced_row_echelon_form(&self) -> Result<Grid> {
        let mut out = self.clone();
        rref_in_place(&mut out)?;
        Ok(out)
    }

    /// Number of nonzero rows in the reduced row echelon form. Any shape.
    ///
    /// ```
    /// use gridlin::Grid;
    /// let a = Grid::from_reals(3, 3, &[1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 1.0, 0.0, 1.0]).unwrap();
    /// assert_eq!(a.rank().unwrap(), 2);
    /// ```
    pub fn rank(&self) -> Result<usize> {
        let reduced = self.reduced_row_echelon_form()?;
        Ok(reduced
            .iter_rows()
            .filter(|row| row.iter().any(|x| !x.is_zero()))
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(rows: usize, cols: usize, values: &[f64]) -> Grid {
        Grid::from_reals(rows, cols, values).unwrap()
    }

    #[test]
    fn square_to_identity() {
        let a = g(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(a.reduced_row_echelon_form().unwrap(), Grid::identity(2));
        let b = g(3, 3, &[8.0, 5.0, -2.0, 4.0, 7.0, 20.0, 7.0, 6.0, 1.0]);
        assert_eq!(b.reduced_row_echelon_form().unwrap(), Grid::identity(3));
    }

    #[test]
    fn operand_untouched() {
        let a = g(2, 2, &[0.0, 2.0, 3.0, 4.0]);
        let before = a.clone();
        let _ = a.reduced_row_echelon_form().unwrap();
        assert_eq!(a, before);
    }

    #[test]
    fn zero_leading_column() {
        // First column empty, pivots move right
        let a = g(2, 3, &[0.0, 0.0, 2.0, 0.0, 3.0, 1.0]);
        let r = a.reduced_row_echelon_form().unwrap();
        assert_eq!(r, g(2, 3, &[0.0, 1.0, 0.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn first_nonzero_pivot_not_largest() {
        let a = g(2, 2, &[1.0, 1.0, 100.0, 3.0]);
        let r = a.reduced_row_echelon_form().unwrap();
        assert_eq!(r, Grid::identity(2));
    }

    #[test]
    fn dependent_rows() {
        let a = g(3, 3, &[1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 3.0, 6.0, 9.0]);
        let r = a.reduced_row_echelon_form().unwrap();
        assert_eq!(r, g(3, 3, &[1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]));
        assert_eq!(a.rank().unwrap(), 1);
    }

    #[test]
    fn wide_and_tall() {
        let wide = g(2, 4, &[1.0, 2.0, 3.0, 4.0, 2.0, 4.0, 7.0, 9.0]);
        let r = wide.reduced_row_echelon_form().unwrap();
        assert_eq!(r, g(2, 4, &[1.0, 2.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0]));
        assert_eq!(wide.rank().unwrap(), 2);

        let tall = g(3, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(tall.rank().unwrap(), 2);
    }

    #[test]
    fn idempotent() {
        let a = g(3, 4, &[2.0, -1.0, 0.5, 3.0, 1.0, 1.0, 1.0, 1.0, 4.0, 1.0, 2.5, 5.0]);
        let once = a.reduced_row_echelon_form().unwrap();
        let twice = once.reduced_row_echelon_form().unwrap();
        assert!(once.equals(&twice, 10).unwrap());
    }

    #[test]
    fn empty_and_zero() {
        assert_eq!(Grid::zeros(0, 0).rank().unwrap(), 0);
        assert_eq!(Grid::zeros(3, 0).rank().unwrap(), 0);
        assert_eq!(Grid::zeros(2, 3).rank().unwrap(), 0);
        assert_eq!(Grid::zeros(2, 3).reduced_row_echelon_form().unwrap(), Grid::zeros(2, 3));
    }

    #[test]
    fn complex_entries() {
        let a = Grid::from_fn(2, 3, |i, j| match (i, j) {
            (0, 0) => Scalar::new(-3.0, 1.0),
            (0, 1) => Scalar::new(1.0, 9.0),
            (0, 2) => Scalar::new(2.0, 6.0),
            (1, 0) => Scalar::new(6.0, 2.0),
            (1, 1) => Scalar::new(-8.0, -4.0),
            _ => Scalar::new(3.0, 2.0),
        });
        let r = a.reduced_row_echelon_form().unwrap();
        assert_eq!(r[(0, 0)], Scalar::ONE);
        assert_eq!(r[(1, 1)], Scalar::ONE);
        assert_eq!(r[(0, 1)], Scalar::ZERO);
        assert_eq!(r[(1, 0)], Scalar::ZERO);
        assert!(r[(0, 2)].approx_eq(Scalar::new(1.2407063197026023, -0.5120817843866171), 10));
        assert!(r[(1, 2)].approx_eq(Scalar::new(0.41728624535315983, -0.5325278810408922), 10));
    }
}
