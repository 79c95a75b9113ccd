use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::scalar::{self, Scalar};
use crate::sequence::Sequence;

use super::Grid;

impl Grid {
    fn check_shape(&self, other: &Grid) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(Error::ShapeMismatch);
        }
        Ok(())
    }

    fn zip_rows(&self, other: &Grid, f: impl Fn(&Sequence, &Sequence) -> Result<Sequence>) -> Result<Grid> {
        self.check_shape(other)?;
        let rows = self
            .rows
            .iter()
            .zip(other.rows.iter())
            .map(|(a, b)| f(a, b))
            .collect::<Result<Vec<_>>>()?;
        Ok(Grid::from_rows_unchecked(rows, self.ncols))
    }
}

// ── Element-wise ────────────────────────────────────────────────────

impl Grid {
    /// Element-wise sum. [`Error::ShapeMismatch`] when shapes differ.
    pub fn add(&self, other: &Grid) -> Result<Grid> {
        self.zip_rows(other, Sequence::add)
    }

    /// Element-wise difference. [`Error::ShapeMismatch`] when shapes differ.
    pub fn subtract(&self, other: &Grid) -> Result<Grid> {
        self.zip_rows(other, Sequence::subtract)
    }

    /// Multiply every element by `k`.
    pub fn scale(&self, k: Scalar) -> Grid {
        let rows = self.rows.iter().map(|row| row.scale(k)).collect();
        Grid::from_rows_unchecked(rows, self.ncols)
    }

    /// Element-wise comparison to `precision` decimals.
    ///
    /// [`Error::ShapeMismatch`] when shapes differ.
    pub fn equals(&self, other: &Grid, precision: u32) -> Result<bool> {
        self.check_shape(other)?;
        for (a, b) in self.rows.iter().zip(other.rows.iter()) {
            if !a.equals(b, precision)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Element-wise interpolation between two grids of equal shape.
    ///
    /// [`Error::InvalidInterpolationFactor`] unless `t` is real and in
    /// `[0, 1]`; [`Error::ShapeMismatch`] when shapes differ.
    pub fn linear_interpolation(a: &Grid, b: &Grid, t: Scalar) -> Result<Grid> {
        scalar::check_factor(t)?;
        a.zip_rows(b, |x, y| Sequence::linear_interpolation(x, y, t))
    }

    /// Weighted sum of the rows of `grid`: `Σ weights[k] · row_k`.
    ///
    /// [`Error::ShapeMismatch`] when `weights.size() != grid.rows()`.
    ///
    /// ```
    /// use gridlin::{Grid, Sequence};
    /// let g = Grid::from_reals(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// let w = Sequence::from_reals(&[2.0, -1.0]);
    /// assert_eq!(Grid::linear_combination(&g, &w).unwrap(), Sequence::from_reals(&[-1.0, 0.0]));
    /// ```
    pub fn linear_combination(grid: &Grid, weights: &Sequence) -> Result<Sequence> {
        if grid.rows() != weights.size() {
            return Err(Error::ShapeMismatch);
        }
        let mut acc = Sequence::zeros(grid.ncols);
        for (row, w) in grid.rows.iter().zip(weights.iter()) {
            acc = acc.add(&row.scale(w))?;
        }
        Ok(acc)
    }
}

// ── Products ────────────────────────────────────────────────────────

impl Grid {
    /// Matrix product `self · other`; each cell is a row–column dot product.
    ///
    /// [`Error::ShapeMismatch`] when `self.columns() != other.rows()`.
    ///
    /// ```
    /// use gridlin::Grid;
    /// let a = Grid::from_reals(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let b = Grid::from_reals(3, 1, &[1.0, 0.0, -1.0]).unwrap();
    /// assert_eq!(a.multiply_matrix(&b).unwrap(), Grid::from_reals(2, 1, &[-2.0, -2.0]).unwrap());
    /// ```
    pub fn multiply_matrix(&self, other: &Grid) -> Result<Grid> {
        if self.ncols != other.rows() {
            return Err(Error::ShapeMismatch);
        }
        let (m, p) = (self.rows(), other.ncols);
        Ok(Grid::from_fn(m, p, |i, j| {
            let mut sum = Scalar::ZERO;
            for k in 0..self.ncols {
                sum = sum + self[(i, k)] * other[(k, j)];
            }
            sum
        }))
    }

    /// Matrix–vector product `self · v`, treating `v` as a column.
    ///
    /// [`Error::ShapeMismatch`] when `self.columns() != v.size()`.
    pub fn multiply_vector(&self, v: &Sequence) -> Result<Sequence> {
        if self.ncols != v.size() {
            return Err(Error::ShapeMismatch);
        }
        if v.is_empty() {
            return Ok(Sequence::zeros(self.rows()));
        }
        let column = v.to_grid(v.size(), 1)?;
        Ok(self.multiply_matrix(&column)?.to_sequence())
    }
}
