use alloc::vec::Vec;
use core::fmt::{self, Write as _};

use crate::error::{Error, Result};
use crate::sequence::Sequence;

use super::Grid;

// ── Structural operations ───────────────────────────────────────────

impl Grid {
    /// Transpose.
    ///
    /// ```
    /// use gridlin::Grid;
    /// let a = Grid::from_reals(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let t = a.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t[(2, 0)], a[(0, 2)]);
    /// ```
    pub fn transpose(&self) -> Grid {
        Grid::from_fn(self.ncols, self.rows(), |i, j| self[(j, i)])
    }

    /// Concatenate `other` to the right of `self`.
    ///
    /// [`Error::ShapeMismatch`] when the row counts differ.
    pub fn augment(&self, other: &Grid) -> Result<Grid> {
        if self.rows() != other.rows() {
            return Err(Error::ShapeMismatch);
        }
        let rows = self
            .rows
            .iter()
            .zip(other.rows.iter())
            .map(|(a, b)| a.iter().chain(b.iter()).collect::<Sequence>())
            .collect();
        Ok(Grid::from_rows_unchecked(rows, self.ncols + other.ncols))
    }

    /// Grid with row `row` and column `col` removed.
    ///
    /// [`Error::OutOfRange`] when either index lies outside the grid.
    ///
    /// ```
    /// use gridlin::Grid;
    /// let a = Grid::from_reals(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).unwrap();
    /// let m = a.sub_matrix(1, 0).unwrap();
    /// assert_eq!(m, Grid::from_reals(2, 2, &[2.0, 3.0, 8.0, 9.0]).unwrap());
    /// ```
    pub fn sub_matrix(&self, row: usize, col: usize) -> Result<Grid> {
        if row >= self.rows() || col >= self.ncols {
            return Err(Error::OutOfRange);
        }
        let rows = self
            .rows
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != row)
            .map(|(_, r)| {
                r.iter()
                    .enumerate()
                    .filter(|&(j, _)| j != col)
                    .map(|(_, x)| x)
                    .collect::<Sequence>()
            })
            .collect();
        Ok(Grid::from_rows_unchecked(rows, self.ncols - 1))
    }

    /// Columns `start..end`.
    ///
    /// [`Error::OutOfRange`] when `start > end` or `end > columns()`.
    pub fn column_range(&self, start: usize, end: usize) -> Result<Grid> {
        if start > end || end > self.ncols {
            return Err(Error::OutOfRange);
        }
        let rows = self
            .rows
            .iter()
            .map(|r| Sequence::new(r.as_slice()[start..end].to_vec()))
            .collect();
        Ok(Grid::from_rows_unchecked(rows, end - start))
    }

    /// Copy with rows `a` and `b` exchanged.
    ///
    /// [`Error::OutOfRange`] when either index is past the last row.
    pub fn swap_rows(&self, a: usize, b: usize) -> Result<Grid> {
        if a >= self.rows() || b >= self.rows() {
            return Err(Error::OutOfRange);
        }
        let mut out = self.clone();
        out.swap_rows_in_place(a, b);
        Ok(out)
    }

    #[inline]
    pub(crate) fn swap_rows_in_place(&mut self, a: usize, b: usize) {
        if a != b {
            self.rows.swap(a, b);
        }
    }

    /// Row-major flatten.
    ///
    /// ```
    /// use gridlin::{Grid, Sequence};
    /// let a = Grid::from_reals(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(a.to_sequence(), Sequence::from_reals(&[1.0, 2.0, 3.0, 4.0]));
    /// ```
    pub fn to_sequence(&self) -> Sequence {
        self.rows.iter().flat_map(|row| row.iter()).collect()
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "[]");
        }
        let m = self.rows();
        let n = self.ncols;

        // Measure column widths
        let mut widths: Vec<usize> = alloc::vec![0; n];
        for j in 0..n {
            for i in 0..m {
                let w = WriteCounting::count(|wc| write!(wc, "{}", self[(i, j)]));
                if w > widths[j] {
                    widths[j] = w;
                }
            }
        }

        for i in 0..m {
            write!(f, "[")?;
            for j in 0..n {
                if j > 0 {
                    write!(f, ", ")?;
                }
                let cell = self[(i, j)];
                write!(f, "{}", cell)?;
                let w = WriteCounting::count(|wc| write!(wc, "{}", cell));
                for _ in w..widths[j] {
                    f.write_char(' ')?;
                }
            }
            write!(f, "]")?;
            if i < m - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }
}
