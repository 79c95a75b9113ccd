use crate::error::{Error, Result};
use crate::linalg::{rref_in_place, Triangulation};
use crate::scalar::Scalar;

use super::Grid;

impl Grid {
    fn check_square(&self) -> Result<()> {
        if !self.is_square() {
            return Err(Error::NotSquare);
        }
        Ok(())
    }

    /// Sum of the diagonal. [`Error::NotSquare`] for non-square grids.
    ///
    /// ```
    /// use gridlin::{Grid, Scalar};
    /// let a = Grid::from_reals(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(a.trace().unwrap(), Scalar::real(5.0));
    /// ```
    pub fn trace(&self) -> Result<Scalar> {
        self.check_square()?;
        Ok((0..self.rows()).map(|i| self[(i, i)]).sum())
    }

    /// Product of the diagonal entries. [`Error::NotSquare`] for non-square
    /// grids.
    pub fn diagonal_product(&self) -> Result<Scalar> {
        self.check_square()?;
        Ok((0..self.rows()).map(|i| self[(i, i)]).product())
    }

    /// Determinant.
    ///
    /// Closed forms for 1×1 and 2×2; larger grids go through
    /// [`Triangulation`]. [`Error::NotSquare`] for non-square grids,
    /// [`Error::EmptyOperand`] for the 0×0 grid.
    ///
    /// ```
    /// use gridlin::{Grid, Scalar};
    /// let a = Grid::from_reals(3, 3, &[8.0, 5.0, -2.0, 4.0, 7.0, 20.0, 7.0, 6.0, 1.0]).unwrap();
    /// assert!(a.determinant().unwrap().approx_eq(Scalar::real(-174.0), 9));
    /// ```
    pub fn determinant(&self) -> Result<Scalar> {
        self.check_square()?;
        match self.rows() {
            0 => Err(Error::EmptyOperand),
            1 => Ok(self[(0, 0)]),
            2 => Ok(self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]),
            _ => Ok(Triangulation::new(self)?.det()),
        }
    }

    /// Inverse via Gauss–Jordan on `[A | I]`.
    ///
    /// [`Error::NotSquare`] for non-square grids, [`Error::Singular`] when
    /// the determinant is zero or the reduced left block is not the
    /// identity (rank below `n`).
    ///
    /// ```
    /// use gridlin::Grid;
    /// let a = Grid::from_reals(2, 2, &[4.0, 7.0, 2.0, 6.0]).unwrap();
    /// let inv = a.inverse().unwrap();
    /// assert!(a.multiply_matrix(&inv).unwrap().equals(&Grid::identity(2), 10).unwrap());
    /// ```
    pub fn inverse(&self) -> Result<Grid> {
        if self.determinant()?.is_zero() {
            return Err(Error::Singular);
        }
        let n = self.rows();
        let mut augmented = self.augment(&Grid::identity(n))?;
        rref_in_place(&mut augmented)?;

        // Large singular grids can leave a determinant residue above EPSILON
        if (0..n).any(|i| augmented[(i, i)] != Scalar::ONE) {
            return Err(Error::Singular);
        }
        augmented.column_range(n, 2 * n)
    }
}
